use chrono::NaiveDate;
use cinematic_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from `films` joined with its genre name.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Film {
    pub id: DbId,
    pub titre: String,
    pub description: Option<String>,
    pub date_sortie: Option<NaiveDate>,
    /// Running time in minutes.
    pub duree: Option<i32>,
    pub realisateur: Option<String>,
    /// Poster image reference (URL or path).
    pub affiche: Option<String>,
    pub genre_id: DbId,
    pub genre_nom: String,
}
