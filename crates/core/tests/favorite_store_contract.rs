//! Store-contract tests run against the in-memory backend through
//! `dyn FavoriteStore`.
//!
//! - Add / list / duplicate / edit / remove lifecycle
//! - Decoded assets flow straight into the store
//! - Concurrent adds with distinct and identical identities

use std::sync::Arc;

use assert_matches::assert_matches;
use favorites_core::assets::{decode_asset, Asset, AssetType, Chart};
use favorites_core::error::CoreError;
use favorites_core::memory_store::InMemoryFavoriteStore;
use favorites_core::pagination::Page;
use favorites_core::store::FavoriteStore;
use futures::future::join_all;
use serde_json::json;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_store() -> Arc<dyn FavoriteStore> {
    Arc::new(InMemoryFavoriteStore::new())
}

fn chart(id: &str) -> Asset {
    Chart {
        id: id.to_string(),
        title: "T".to_string(),
        data: vec![1, 2, 3],
        ..Default::default()
    }
    .into()
}

// ---------------------------------------------------------------------------
// Test: full lifecycle for one chart
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_chart_lifecycle() {
    let store = new_store();

    store.add_favorite("u1", &chart("c1")).await.unwrap();

    let listed = store.list_favorites("u1", Page::all()).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].external_id(), "c1");

    assert_matches!(
        store.add_favorite("u1", &chart("c1")).await,
        Err(CoreError::DuplicateFavorite { .. })
    );

    store
        .edit_favorite_description("u1", AssetType::Chart, "c1", "new")
        .await
        .unwrap();
    let listed = store.list_favorites("u1", Page::all()).await.unwrap();
    assert_eq!(listed[0].description(), "new");
    assert_matches!(&listed[0], Asset::Chart(c) if c.title == "T" && c.data == vec![1, 2, 3]);

    store
        .remove_favorite("u1", AssetType::Chart, "c1")
        .await
        .unwrap();
    assert!(store
        .list_favorites("u1", Page::all())
        .await
        .unwrap()
        .is_empty());
}

// ---------------------------------------------------------------------------
// Test: decoded request payloads
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_decoded_assets_are_stored_as_supplied() {
    let store = new_store();
    let raw = json!({
        "type": "insight",
        "id": "insight_active_users",
        "text": "78% of millennials engage with branded content daily.",
        "description": "Based on 2024 survey data across EMEA."
    });
    let asset = decode_asset(raw.as_object().unwrap()).unwrap();

    store.add_favorite("johnsmith", &asset).await.unwrap();

    let listed = store
        .list_favorites("johnsmith", Page::default())
        .await
        .unwrap();
    assert_eq!(listed, vec![asset]);
}

#[tokio::test]
async fn test_decoded_invalid_asset_is_rejected() {
    let store = new_store();
    let raw = json!({ "type": "chart", "id": "c1", "title": "" });
    let asset = decode_asset(raw.as_object().unwrap()).unwrap();

    assert_matches!(
        store.add_favorite("u1", &asset).await,
        Err(CoreError::ValidationFailed(_))
    );
    assert!(store
        .list_favorites("u1", Page::all())
        .await
        .unwrap()
        .is_empty());
}

// ---------------------------------------------------------------------------
// Test: concurrency
// ---------------------------------------------------------------------------

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_distinct_adds_all_succeed() {
    let store = new_store();

    let results = join_all((0..50).map(|i| {
        let store = Arc::clone(&store);
        async move { store.add_favorite("u1", &chart(&format!("c{i}"))).await }
    }))
    .await;

    assert!(results.iter().all(Result::is_ok));
    let listed = store.list_favorites("u1", Page::all()).await.unwrap();
    assert_eq!(listed.len(), 50);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_identical_adds_admit_one() {
    let store = new_store();

    let handles: Vec<_> = (0..20)
        .map(|_| {
            let store = Arc::clone(&store);
            tokio::spawn(async move { store.add_favorite("u1", &chart("c1")).await })
        })
        .collect();

    let mut ok = 0;
    let mut duplicate = 0;
    for result in join_all(handles).await {
        match result.unwrap() {
            Ok(()) => ok += 1,
            Err(CoreError::DuplicateFavorite { .. }) => duplicate += 1,
            Err(other) => panic!("unexpected error: {other}"),
        }
    }
    assert_eq!((ok, duplicate), (1, 19));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_mixed_operations_across_users() {
    let store = new_store();
    for user in ["u1", "u2", "u3"] {
        store.add_favorite(user, &chart("shared")).await.unwrap();
    }

    let tasks = ["u1", "u2", "u3"].into_iter().flat_map(|user| {
        let edit_store = Arc::clone(&store);
        let list_store = Arc::clone(&store);
        [
            tokio::spawn(async move {
                edit_store
                    .edit_favorite_description(user, AssetType::Chart, "shared", user)
                    .await
                    .map(|_| ())
            }),
            tokio::spawn(async move {
                list_store
                    .list_favorites(user, Page::all())
                    .await
                    .map(|_| ())
            }),
        ]
    });
    for result in join_all(tasks).await {
        result.unwrap().unwrap();
    }

    for user in ["u1", "u2", "u3"] {
        let listed = store.list_favorites(user, Page::all()).await.unwrap();
        assert_eq!(listed[0].description(), user);
    }
}
