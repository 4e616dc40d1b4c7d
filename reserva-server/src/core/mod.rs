//! Core module: server configuration, state and HTTP serving
//!
//! - [`Config`]: environment-driven configuration
//! - [`ServerState`]: shared state handed to request handlers
//! - [`Server`]: HTTP server

pub mod config;
pub mod server;
pub mod state;

pub use config::Config;
pub use server::Server;
pub use state::ServerState;
