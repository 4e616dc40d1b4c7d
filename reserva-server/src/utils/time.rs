//! Date/time helpers
//!
//! Date string parsing and window math happen at the API boundary; the
//! repository layer only ever sees `i64` Unix millis. All arithmetic is UTC.

use chrono::NaiveDate;

use super::{AppError, AppResult};

/// Half window of the reservation conflict check: two hours in millis.
pub const CONFLICT_WINDOW_MS: i64 = 2 * 60 * 60 * 1000;

/// Parse a date string (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date format: {}", date)))
}

/// Start of day (00:00:00 UTC) as Unix millis
pub fn day_start_millis(date: NaiveDate) -> i64 {
    date.and_hms_opt(0, 0, 0)
        .expect("midnight exists on every date")
        .and_utc()
        .timestamp_millis()
}

/// End of day as Unix millis: next day 00:00:00 UTC.
/// Callers use `< end` (exclusive) semantics.
pub fn day_end_millis(date: NaiveDate) -> i64 {
    let next_day = date.succ_opt().unwrap_or(date);
    day_start_millis(next_day)
}

/// The `[t - 2h, t + 2h]` window around a reservation time. Both bounds
/// are inclusive in the conflict query.
pub fn conflict_window(reserved_at: i64) -> (i64, i64) {
    (
        reserved_at - CONFLICT_WINDOW_MS,
        reserved_at + CONFLICT_WINDOW_MS,
    )
}
