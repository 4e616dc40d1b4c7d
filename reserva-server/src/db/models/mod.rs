//! Database Models

// Serde helpers
pub mod serde_helpers;

// People
pub mod client;

// Floor
pub mod dining_table;

// Bookings
pub mod reservation;

// Re-exports
pub use client::{Client, ClientCreate, ClientUpdate};
pub use dining_table::{DiningTable, DiningTableCreate, DiningTableUpdate};
pub use reservation::{Reservation, ReservationCreate, ReservationStatus, ReservationUpdate};
