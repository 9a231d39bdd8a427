//! Catalog data access: pool lifecycle, row models, repositories and the
//! [`CatalogStore`] seam the HTTP layer is written against.

use sqlx::mysql::MySqlPoolOptions;
use sqlx::Connection;

pub mod config;
pub mod error;
pub mod memory;
pub mod models;
pub mod repositories;
pub mod store;

pub use config::DatabaseConfig;
pub use error::StoreError;
pub use memory::InMemoryCatalogStore;
pub use store::{CatalogStore, MySqlCatalogStore};

pub type DbPool = sqlx::MySqlPool;

/// Create a bounded connection pool.
///
/// Connects eagerly so an unreachable server is reported here rather than on
/// the first request. Waiters beyond `max_connections` queue in arrival order
/// for at most `acquire_timeout`.
pub async fn create_pool(config: &DatabaseConfig) -> Result<DbPool, sqlx::Error> {
    MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect_with(config.connect_options())
        .await
}

/// Check out one connection, ping it and hand it straight back.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    let mut conn = pool.acquire().await?;
    conn.ping().await?;
    Ok(())
}

/// Close the pool, waiting for checked-out connections to be returned.
///
/// Safe to call more than once.
pub async fn close_pool(pool: &DbPool) {
    if pool.is_closed() {
        return;
    }
    pool.close().await;
    tracing::info!("Database connection pool closed");
}
