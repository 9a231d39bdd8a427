use std::time::Duration;

/// Failure of a catalog query.
///
/// Distinct from "not found": an absent film is `Ok(None)` and an unknown
/// film's showtimes are `Ok(vec![])`.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Query timed out after {}ms", .0.as_millis())]
    Timeout(Duration),
}
