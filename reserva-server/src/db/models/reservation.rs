//! Reservation Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::serde_helpers;
use crate::db::repository::{CLIENT_TABLE, DINING_TABLE_TABLE};
use crate::utils::validation::{self, ValidationError, ValidationResult};

/// Lifecycle state of a reservation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReservationStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
}

/// Booking of one table for one client at one point in time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    #[serde(with = "serde_helpers::record_id")]
    pub client_id: RecordId,
    #[serde(with = "serde_helpers::record_id")]
    pub table_id: RecordId,
    /// Unix millis, UTC
    pub reserved_at: i64,
    #[serde(default)]
    pub status: ReservationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Create reservation payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationCreate {
    #[serde(with = "serde_helpers::record_id")]
    pub client_id: RecordId,
    #[serde(with = "serde_helpers::record_id")]
    pub table_id: RecordId,
    pub reserved_at: i64,
    #[serde(default)]
    pub status: ReservationStatus,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Update payload, same shape as create (full-field replacement)
pub type ReservationUpdate = ReservationCreate;

impl ReservationCreate {
    /// Field rules, checked before any write. The time-window conflict
    /// check lives in the repository, not here, because it needs the store.
    pub fn validate(&self) -> ValidationResult {
        if self.client_id.table() != CLIENT_TABLE {
            return Err(ValidationError::InvalidFormat("client_id"));
        }
        if self.table_id.table() != DINING_TABLE_TABLE {
            return Err(ValidationError::InvalidFormat("table_id"));
        }
        validation::validate_reservation_datetime(self.reserved_at)?;
        validation::validate_optional_text(&self.notes, "notes", validation::MAX_NOTE_LEN)?;
        Ok(())
    }
}
