//! Process lifecycle: startup check, serving, and ordered shutdown.
//!
//! The binary wires a real pool and OS signals into [`run`]; tests drive
//! [`run`] and [`serve`] with an in-memory store and their own token.

use std::future::IntoFuture;
use std::net::{AddrParseError, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

use axum::extract::Request;
use axum::ServiceExt;
use cinematic_db::{CatalogStore, StoreError};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

use crate::config::ServerConfig;
use crate::router::build_app;
use crate::state::AppState;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("database health check failed")]
    HealthCheck(#[source] StoreError),

    #[error("invalid bind address")]
    InvalidAddress(#[from] AddrParseError),

    #[error("failed to bind to {addr}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("server error")]
    Serve(#[source] std::io::Error),
}

/// Check the store, bind `host:port` and serve until `shutdown` is cancelled.
///
/// A failed health check returns before any socket is bound.
pub async fn run(
    store: Arc<dyn CatalogStore>,
    config: ServerConfig,
    shutdown: CancellationToken,
) -> Result<(), ServerError> {
    store.health_check().await.map_err(ServerError::HealthCheck)?;
    tracing::info!("Database health check passed");

    let addr = SocketAddr::new(config.host.parse()?, config.port);
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    tracing::info!(%addr, "Starting server");

    serve(listener, store, config, shutdown).await
}

/// Serve on an already bound listener.
///
/// Once `shutdown` is cancelled the listener stops accepting, in-flight
/// requests get up to `shutdown_timeout_secs` to finish, and then the store
/// is closed.
pub async fn serve(
    listener: TcpListener,
    store: Arc<dyn CatalogStore>,
    config: ServerConfig,
    shutdown: CancellationToken,
) -> Result<(), ServerError> {
    let drain_timeout = Duration::from_secs(config.shutdown_timeout_secs);
    let app = build_app(AppState::new(Arc::clone(&store), config));

    let server = axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown.clone().cancelled_owned())
        .into_future();

    let drain_deadline = async {
        shutdown.cancelled().await;
        tokio::time::sleep(drain_timeout).await;
    };

    let result = tokio::select! {
        result = server => result.map_err(ServerError::Serve),
        () = drain_deadline => {
            tracing::warn!(
                timeout_secs = drain_timeout.as_secs(),
                "In-flight requests did not finish before the shutdown deadline"
            );
            Ok(())
        }
    };

    tracing::info!("Server stopped accepting connections, closing database pool");
    store.close().await;

    tracing::info!("Graceful shutdown complete");
    result
}
