//! Client Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::serde_helpers;
use crate::utils::validation::{self, ValidationResult};

/// Restaurant client entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Create client payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientCreate {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub address: Option<String>,
}

/// Update payload, same shape as create (full-field replacement)
pub type ClientUpdate = ClientCreate;

impl ClientCreate {
    /// Field rules, checked before any write
    pub fn validate(&self) -> ValidationResult {
        validation::validate_required_text(&self.name, "name", validation::MAX_NAME_LEN)?;
        validation::validate_email(&self.email)?;
        validation::validate_phone(&self.phone)?;
        validation::validate_optional_text(&self.address, "address", validation::MAX_ADDRESS_LEN)?;
        Ok(())
    }
}
