//! Input validation helpers
//!
//! Centralized field validation for the booking domain: format checks for
//! client contact fields, the not-in-the-past rule for reservation times,
//! and the application-enforced table number uniqueness check.
//!
//! All validators are synchronous and side-effect-free (beyond reading the
//! clock) and report a typed [`ValidationError`] instead of a boolean, so
//! callers can surface the message and abort the write.

use std::sync::LazyLock;

use regex::Regex;

use crate::db::models::DiningTable;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: client name, table location, etc.
pub const MAX_NAME_LEN: usize = 200;

/// Notes and other free-form text
pub const MAX_NOTE_LEN: usize = 500;

/// Short identifiers: phone numbers and the like
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Addresses
pub const MAX_ADDRESS_LEN: usize = 500;

// ── Field patterns ──────────────────────────────────────────────────

/// Local part, `@`, domain with at least one dot. Anchored at the start
/// only: trailing garbage after a valid prefix is tolerated, which is the
/// matcher behavior the stored data grew up with.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@]+@[^@]+\.[^@]+").unwrap());

/// Optional leading `+`, then 10 to 15 digits, nothing else.
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\+?\d{10,15}$").unwrap());

/// Typed validation failure
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    RequiredField(&'static str),

    #[error("{0} is too long ({1} chars, max {2})")]
    TooLong(&'static str, usize, usize),

    #[error("Invalid {0} format")]
    InvalidFormat(&'static str),

    #[error("{0} must be a positive number")]
    NotPositive(&'static str),

    #[error("Reservation time cannot be in the past")]
    PastDateTime,

    #[error("Table number {0} already exists")]
    DuplicateTableNumber(i32),
}

/// Result type for validators
pub type ValidationResult = Result<(), ValidationError>;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(
    value: &str,
    field: &'static str,
    max_len: usize,
) -> ValidationResult {
    if value.trim().is_empty() {
        return Err(ValidationError::RequiredField(field));
    }
    if value.len() > max_len {
        return Err(ValidationError::TooLong(field, value.len(), max_len));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &'static str,
    max_len: usize,
) -> ValidationResult {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(ValidationError::TooLong(field, v.len(), max_len));
    }
    Ok(())
}

/// Validate that a numeric field is strictly positive.
pub fn validate_positive(value: i32, field: &'static str) -> ValidationResult {
    if value <= 0 {
        return Err(ValidationError::NotPositive(field));
    }
    Ok(())
}

/// Validate an email address: local part, `@`, domain containing a dot.
pub fn validate_email(email: &str) -> ValidationResult {
    validate_required_text(email, "email", MAX_EMAIL_LEN)?;
    if !EMAIL_RE.is_match(email) {
        return Err(ValidationError::InvalidFormat("email"));
    }
    Ok(())
}

/// Validate a phone number: optional leading `+` followed by 10-15 digits.
pub fn validate_phone(phone: &str) -> ValidationResult {
    validate_required_text(phone, "phone", MAX_SHORT_TEXT_LEN)?;
    if !PHONE_RE.is_match(phone) {
        return Err(ValidationError::InvalidFormat("phone"));
    }
    Ok(())
}

/// Validate that a reservation time (Unix millis) is not in the past.
/// "Now" itself is accepted.
pub fn validate_reservation_datetime(reserved_at: i64) -> ValidationResult {
    let now = chrono::Utc::now().timestamp_millis();
    if reserved_at < now {
        return Err(ValidationError::PastDateTime);
    }
    Ok(())
}

/// Validate that a table number does not already appear among the existing
/// tables. Uniqueness is enforced here, not by the store, and only on
/// creation.
pub fn validate_table_number(number: i32, existing: &[DiningTable]) -> ValidationResult {
    if existing.iter().any(|t| t.table_number == number) {
        return Err(ValidationError::DuplicateTableNumber(number));
    }
    Ok(())
}
