use axum::routing::get;
use axum::Router;

use crate::handlers::films;
use crate::state::AppState;

/// Film routes, merged into the `/api` tree.
///
/// ```text
/// GET /films                -> list
/// GET /films/{id}           -> get_by_id
/// GET /films/{id}/seances   -> list_showtimes
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/films", get(films::list))
        .route("/films/{id}", get(films::get_by_id))
        .route("/films/{id}/seances", get(films::list_showtimes))
}
