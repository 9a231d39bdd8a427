//! In-memory [`CatalogStore`] for tests and local experiments.
//!
//! Applies the same ordering rules as the SQL queries. Byte-wise title
//! comparison stands in for the database collation.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use cinematic_core::types::DbId;

use crate::error::StoreError;
use crate::models::film::Film;
use crate::models::showtime::Showtime;
use crate::store::CatalogStore;

#[derive(Debug, Default)]
pub struct InMemoryCatalogStore {
    films: Vec<Film>,
    showtimes: Vec<Showtime>,
    unavailable: AtomicBool,
    closed: AtomicBool,
}

impl InMemoryCatalogStore {
    pub fn new(films: Vec<Film>, showtimes: Vec<Showtime>) -> Self {
        Self {
            films,
            showtimes,
            ..Self::default()
        }
    }

    /// A store whose every call fails as if the database were down.
    pub fn unavailable() -> Self {
        let store = Self::default();
        store.set_unavailable(true);
        store
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.closed.load(Ordering::SeqCst) {
            return Err(StoreError::Database(sqlx::Error::PoolClosed));
        }
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl CatalogStore for InMemoryCatalogStore {
    async fn list_films(&self) -> Result<Vec<Film>, StoreError> {
        self.check()?;
        let mut films = self.films.clone();
        films.sort_by(|a, b| a.titre.cmp(&b.titre));
        Ok(films)
    }

    async fn get_film(&self, id: DbId) -> Result<Option<Film>, StoreError> {
        self.check()?;
        Ok(self.films.iter().find(|f| f.id == id).cloned())
    }

    async fn list_showtimes(&self, film_id: DbId) -> Result<Vec<Showtime>, StoreError> {
        self.check()?;
        let mut showtimes: Vec<Showtime> = self
            .showtimes
            .iter()
            .filter(|s| s.film_id == film_id)
            .cloned()
            .collect();
        showtimes.sort_by_key(|s| (s.date, s.heure));
        Ok(showtimes)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        self.check()
    }

    async fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }
}
