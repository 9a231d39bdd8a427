//! Cinematic catalog API server library.
//!
//! Exposes the building blocks (config, state, error mapping, envelope,
//! routes, router) so integration tests and the binary entrypoint share them.

pub mod config;
pub mod error;
pub mod handlers;
pub mod response;
pub mod router;
pub mod routes;
pub mod server;
pub mod state;
