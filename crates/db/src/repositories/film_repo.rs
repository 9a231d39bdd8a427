//! Repository for `films` joined with `genres`.

use cinematic_core::types::DbId;
use sqlx::MySqlPool;

use crate::models::film::Film;

/// Column list shared by both film queries.
const COLUMNS: &str = "f.id, f.titre, f.description, f.date_sortie, f.duree, \
                       f.realisateur, f.affiche, f.genre_id, g.nom AS genre_nom";

/// Read-only film lookups.
pub struct FilmRepo;

impl FilmRepo {
    /// List every film with its genre name, ordered by title.
    pub async fn list(pool: &MySqlPool) -> Result<Vec<Film>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM films f \
             JOIN genres g ON f.genre_id = g.id \
             ORDER BY f.titre"
        );
        sqlx::query_as::<_, Film>(&query).fetch_all(pool).await
    }

    /// Find a film by id. `None` when no row matches.
    pub async fn find_by_id(pool: &MySqlPool, id: DbId) -> Result<Option<Film>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM films f \
             JOIN genres g ON f.genre_id = g.id \
             WHERE f.id = ?"
        );
        sqlx::query_as::<_, Film>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
