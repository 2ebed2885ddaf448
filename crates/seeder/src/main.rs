use favorites_core::seed::{demo_favorites, seed_store};
use favorites_db::repositories::AssetCatalogRepo;
use favorites_db::{DbConfig, PgFavoriteStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "favorites_seeder=info,favorites_db=info,favorites_core=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = DbConfig::from_env()?;
    let store = PgFavoriteStore::connect(&config).await?;

    favorites_db::health_check(store.pool()).await?;
    tracing::info!("Database health check passed");

    favorites_db::run_migrations(store.pool()).await?;
    tracing::info!("Database migrations applied");

    let demo = demo_favorites();
    for (_, asset) in &demo {
        AssetCatalogRepo::register(store.pool(), asset).await?;
    }
    tracing::info!(count = demo.len(), "Registered demo assets in catalog");

    if std::env::var("APP_ENV").as_deref() == Ok("dev") {
        let added = seed_store(&store).await?;
        tracing::info!(added, "Loaded demo favorites");
    } else {
        tracing::info!("APP_ENV is not 'dev'; skipping demo favorites");
    }

    Ok(())
}
