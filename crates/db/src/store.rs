//! The [`CatalogStore`] seam between HTTP handlers and the database.
//!
//! Handlers hold an `Arc<dyn CatalogStore>` so tests can swap the MySQL
//! implementation for [`InMemoryCatalogStore`](crate::memory::InMemoryCatalogStore).

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use cinematic_core::types::DbId;

use crate::error::StoreError;
use crate::models::film::Film;
use crate::models::showtime::Showtime;
use crate::repositories::{FilmRepo, ShowtimeRepo};
use crate::DbPool;

/// Read-only access to the film catalog.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// All films with their genre name, ordered by title.
    async fn list_films(&self) -> Result<Vec<Film>, StoreError>;

    /// The film with exactly this id, if any.
    async fn get_film(&self, id: DbId) -> Result<Option<Film>, StoreError>;

    /// Showtimes of a film ordered by date then time. Unknown films yield none.
    async fn list_showtimes(&self, film_id: DbId) -> Result<Vec<Showtime>, StoreError>;

    /// Verify the backing store is reachable.
    async fn health_check(&self) -> Result<(), StoreError>;

    /// Release every underlying resource. Idempotent.
    async fn close(&self);
}

/// [`CatalogStore`] backed by a MySQL connection pool.
#[derive(Clone)]
pub struct MySqlCatalogStore {
    pool: DbPool,
    query_timeout: Duration,
}

impl MySqlCatalogStore {
    pub fn new(pool: DbPool, query_timeout: Duration) -> Self {
        Self {
            pool,
            query_timeout,
        }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// Run a query under the configured deadline.
    async fn bounded<T>(
        &self,
        query: impl Future<Output = Result<T, sqlx::Error>>,
    ) -> Result<T, StoreError> {
        match tokio::time::timeout(self.query_timeout, query).await {
            Ok(result) => result.map_err(StoreError::from),
            Err(_) => Err(StoreError::Timeout(self.query_timeout)),
        }
    }
}

#[async_trait]
impl CatalogStore for MySqlCatalogStore {
    async fn list_films(&self) -> Result<Vec<Film>, StoreError> {
        self.bounded(FilmRepo::list(&self.pool)).await
    }

    async fn get_film(&self, id: DbId) -> Result<Option<Film>, StoreError> {
        self.bounded(FilmRepo::find_by_id(&self.pool, id)).await
    }

    async fn list_showtimes(&self, film_id: DbId) -> Result<Vec<Showtime>, StoreError> {
        self.bounded(ShowtimeRepo::list_for_film(&self.pool, film_id))
            .await
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        self.bounded(crate::health_check(&self.pool)).await
    }

    async fn close(&self) {
        crate::close_pool(&self.pool).await;
    }
}
