//! Data Transfer Objects for API requests and responses.
//!
//! Request DTOs are the *raw*, pre-validation shapes: every field the schema
//! requires is an `Option` with a `validator` rule, so a missing field becomes
//! a field-addressed error instead of a transport-level rejection. The
//! normalized counterparts live in [`crate::domain::search`].

pub mod car;
pub mod flight;
pub mod health;
pub mod hotel;
pub mod traveler;

use regex::Regex;
use std::sync::LazyLock;
use validator::ValidationError;

/// Compiled pattern for the literal `YYYY-MM-DD` date format.
static DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());

/// Validates that a string parses as a calendar date in `YYYY-MM-DD` form.
///
/// Used by the flight schema, where the contract is "a valid calendar date".
pub fn calendar_date(value: &str) -> Result<(), ValidationError> {
    if chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d").is_err() {
        let mut err = ValidationError::new("calendar_date");
        err.message = Some("Must be a valid calendar date in YYYY-MM-DD format".into());
        return Err(err);
    }
    Ok(())
}

/// Validates the stricter hotel date contract: the literal `YYYY-MM-DD`
/// pattern first (malformed separators or digit counts are rejected even when
/// the value would parse as a date), then that the digits name a real date.
pub fn strict_calendar_date(value: &str) -> Result<(), ValidationError> {
    if !DATE_PATTERN.is_match(value) {
        let mut err = ValidationError::new("date_format");
        err.message = Some("Date must use the YYYY-MM-DD format".into());
        return Err(err);
    }
    if chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d").is_err() {
        let mut err = ValidationError::new("calendar_date");
        err.message = Some("Must be a valid calendar date".into());
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calendar_date_accepts_iso_dates() {
        assert!(calendar_date("2024-06-10").is_ok());
    }

    #[test]
    fn test_calendar_date_rejects_impossible_dates() {
        assert!(calendar_date("2024-02-31").is_err());
    }

    #[test]
    fn test_strict_date_rejects_short_month() {
        // Parseable as a date, but not in the literal YYYY-MM-DD pattern.
        assert!(strict_calendar_date("2024-1-05").is_err());
    }

    #[test]
    fn test_strict_date_rejects_reordered_fields() {
        assert!(strict_calendar_date("05-01-2024").is_err());
    }

    #[test]
    fn test_strict_date_accepts_canonical_form() {
        assert!(strict_calendar_date("2024-06-10").is_ok());
    }
}
