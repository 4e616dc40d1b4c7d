//! Reserva Server - restaurant reservation book backend
//!
//! # Overview
//!
//! An HTTP service over an embedded document store managing the three
//! resources of a restaurant reservation book:
//!
//! - **Clients** (`db/models/client`): contact records
//! - **Dining tables** (`db/models/dining_table`): numbered tables
//! - **Reservations** (`db/models/reservation`): a client holding a table
//!   at a point in time, guarded by a 2-hour overlap rule
//!
//! # Module structure
//!
//! ```text
//! reserva-server/src/
//! ├── core/          # configuration, state, HTTP server
//! ├── api/           # routes and handlers
//! ├── db/            # store bootstrap, models, repositories
//! └── utils/         # errors, validation, time, logging
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod utils;

// Re-export common types
pub use core::{Config, Server, ServerState};
pub use db::DbService;
pub use utils::{AppError, AppResponse, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
    ____
   / __ \___  ________  ______   ______ _
  / /_/ / _ \/ ___/ _ \/ ___/ | / / __ `/
 / _, _/  __(__  )  __/ /   | |/ / /_/ /
/_/ |_|\___/____/\___/_/    |___/\__,_/
    "#
    );
}
