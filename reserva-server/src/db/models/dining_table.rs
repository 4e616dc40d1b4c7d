//! Dining Table Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::serde_helpers;
use crate::utils::validation::{self, ValidationResult};

/// Physical table in the dining room
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiningTable {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub table_number: i32,
    pub capacity: i32,
    pub location: String,
}

/// Create table payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiningTableCreate {
    pub table_number: i32,
    pub capacity: i32,
    pub location: String,
}

/// Update payload, same shape as create (full-field replacement)
pub type DiningTableUpdate = DiningTableCreate;

impl DiningTableCreate {
    /// Field rules, checked before any write
    pub fn validate(&self) -> ValidationResult {
        validation::validate_positive(self.table_number, "table_number")?;
        validation::validate_positive(self.capacity, "capacity")?;
        validation::validate_required_text(
            &self.location,
            "location",
            validation::MAX_SHORT_TEXT_LEN,
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::ValidationError;

    fn payload() -> DiningTableCreate {
        DiningTableCreate {
            table_number: 5,
            capacity: 4,
            location: "Terraza".to_string(),
        }
    }

    #[test]
    fn test_valid_payload_passes() {
        assert!(payload().validate().is_ok());
    }

    #[test]
    fn test_non_positive_numbers_are_rejected() {
        let mut p = payload();
        p.table_number = 0;
        assert!(matches!(
            p.validate(),
            Err(ValidationError::NotPositive("table_number"))
        ));

        let mut p = payload();
        p.capacity = -2;
        assert!(matches!(
            p.validate(),
            Err(ValidationError::NotPositive("capacity"))
        ));
    }

    #[test]
    fn test_empty_location_is_rejected() {
        let mut p = payload();
        p.location = "   ".to_string();
        assert!(matches!(
            p.validate(),
            Err(ValidationError::RequiredField("location"))
        ));
    }
}
