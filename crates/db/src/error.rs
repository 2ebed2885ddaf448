//! Translation of sqlx failures into the favorites error taxonomy.

use favorites_core::error::CoreError;

/// Name of the unique constraint guarding `(user_id, asset_type, asset_id)`.
pub const FAVORITES_UNIQUE_CONSTRAINT: &str = "uq_favorites_user_asset";

/// PostgreSQL SQLSTATE for unique constraint violations.
const UNIQUE_VIOLATION: &str = "23505";

/// Whether `err` is a violation of the favorites uniqueness constraint.
pub fn is_duplicate_favorite(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            db_err.code().as_deref() == Some(UNIQUE_VIOLATION)
                && db_err.constraint() == Some(FAVORITES_UNIQUE_CONSTRAINT)
        }
        _ => false,
    }
}

/// Map any other sqlx error to [`CoreError::StorageUnavailable`].
///
/// The store never retries; the failure is logged here and surfaced to the
/// caller.
pub fn storage_error(err: sqlx::Error) -> CoreError {
    tracing::error!(error = %err, "Database error");
    CoreError::StorageUnavailable(err.to_string())
}
