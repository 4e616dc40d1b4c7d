//! Utility module - shared helpers and types
//!
//! # Contents
//!
//! - [`AppError`] / [`AppResponse`] - application error type and response envelope
//! - [`validation`] - field validators for the booking domain
//! - [`time`] - date parsing and window math
//! - [`logger`] - tracing setup

pub mod error;
pub mod logger;
pub mod result;
pub mod time;
pub mod validation;

pub use error::{AppError, AppResponse};
pub use error::{ok, ok_with_message};
pub use result::AppResult;
pub use validation::{ValidationError, ValidationResult};
