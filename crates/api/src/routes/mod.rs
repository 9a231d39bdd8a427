pub mod films;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /films                  list films
/// /films/{id}             film detail
/// /films/{id}/seances     showtimes of a film
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(films::router())
}
