//! API routes
//!
//! - [`health`]: liveness check
//! - [`auth`]: login gate
//! - [`clients`]: client management
//! - [`tables`]: dining table management
//! - [`reservations`]: reservation management
//! - [`dashboard`]: summary counts

pub mod auth;
pub mod clients;
pub mod dashboard;
pub mod health;
pub mod reservations;
pub mod tables;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

// Re-export common types for handlers
pub use crate::utils::{AppResponse, AppResult};

/// Assemble the full application router.
pub fn router(state: ServerState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(auth::router())
        .merge(clients::router())
        .merge(tables::router())
        .merge(reservations::router())
        .merge(dashboard::router())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
