//! Repository for the `seances` table.

use cinematic_core::types::DbId;
use sqlx::MySqlPool;

use crate::models::showtime::Showtime;

const COLUMNS: &str = "id, film_id, date, heure, places_disponibles";

/// Read-only showtime lookups.
pub struct ShowtimeRepo;

impl ShowtimeRepo {
    /// List the showtimes of a film, earliest first.
    ///
    /// Does not check that the film exists; an unknown id yields an empty list.
    pub async fn list_for_film(
        pool: &MySqlPool,
        film_id: DbId,
    ) -> Result<Vec<Showtime>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM seances \
             WHERE film_id = ? \
             ORDER BY date, heure"
        );
        sqlx::query_as::<_, Showtime>(&query)
            .bind(film_id)
            .fetch_all(pool)
            .await
    }
}
