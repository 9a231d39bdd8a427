//! Shared application router builder.
//!
//! Provides [`build_app_router`] and [`build_app`] so both the production
//! binary (`main.rs`) and integration tests use the exact same middleware
//! stack.

use std::any::Any;
use std::sync::Arc;
use std::time::Duration;

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{middleware, Router};
use cinematic_core::error::CoreError;
use tower::Layer;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::{Environment, ServerConfig};
use crate::error::AppError;
use crate::routes;
use crate::state::AppState;

/// The complete service: the router behind trailing-slash normalization.
///
/// Normalization must run before routing, so it wraps the [`Router`] rather
/// than being one of its layers.
pub fn build_app(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_app_router(state))
}

/// Build the application [`Router`] with all middleware layers.
///
/// The middleware stack is applied bottom-up:
///
/// 1. CORS
/// 2. Set request ID on incoming requests
/// 3. Structured request/response tracing
/// 4. Propagate request ID to response
/// 5. Timeout responses rewritten as the 500 envelope
/// 6. Request timeout
/// 7. Panic recovery (catch panics, return the 500 envelope)
pub fn build_app_router(state: AppState) -> Router {
    let config = Arc::clone(&state.config);
    let cors = build_cors_layer(&config);
    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        // Health check at root level (not under /api).
        .merge(routes::health::router())
        .nest("/api", routes::api_routes())
        // -- Middleware stack (applied bottom-up) --
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ))
        .layer(middleware::map_response(timeout_envelope))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

/// Build the CORS layer: any origin in development, the configured
/// allow-list otherwise. Read-only methods only.
pub fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let origin = match config.environment {
        Environment::Development => AllowOrigin::any(),
        Environment::Production => AllowOrigin::list(
            config
                .cors_origins
                .iter()
                // Origins were validated when the config was loaded.
                .filter_map(|o| HeaderValue::from_str(o).ok()),
        ),
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(3600))
}

fn panic_response(_panic: Box<dyn Any + Send + 'static>) -> Response {
    AppError::Core(CoreError::Internal("handler panicked".into())).into_response()
}

/// The timeout layer answers with a bare 408; clients always get an envelope.
async fn timeout_envelope(response: Response) -> Response {
    if response.status() != StatusCode::REQUEST_TIMEOUT {
        return response;
    }
    AppError::Core(CoreError::Internal("request timed out".into())).into_response()
}
