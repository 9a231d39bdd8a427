//! Handlers for the `/films` resource.
//!
//! Each handler validates its path parameter before touching the store, runs
//! exactly one query, and wraps the result in the success envelope.

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use cinematic_core::error::CoreError;
use cinematic_core::validation::parse_film_id;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Raw `{id}` segment, or `None` when it could not be extracted at all.
fn raw_id(path: &Result<Path<String>, PathRejection>) -> Option<&str> {
    path.as_ref().ok().map(|Path(raw)| raw.as_str())
}

/// GET /api/films
///
/// List every film with its genre name, ordered by title.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let films = state.store.list_films().await.map_err(AppError::Listing)?;
    tracing::debug!(count = films.len(), "Listed films");
    Ok(Json(DataResponse::many(films)))
}

/// GET /api/films/{id}
///
/// Fetch one film. 404 when the id is well-formed but unknown.
pub async fn get_by_id(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let id = parse_film_id(raw_id(&path))?;
    let film = state
        .store
        .get_film(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Film", id }))?;
    Ok(Json(DataResponse::one(film)))
}

/// GET /api/films/{id}/seances
///
/// List a film's showtimes, earliest first. An unknown film yields an empty
/// list rather than a 404.
pub async fn list_showtimes(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let film_id = parse_film_id(raw_id(&path))?;
    let showtimes = state.store.list_showtimes(film_id).await?;
    tracing::debug!(film_id, count = showtimes.len(), "Listed showtimes");
    Ok(Json(DataResponse::many(showtimes)))
}
