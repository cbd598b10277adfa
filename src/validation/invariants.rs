//! Cross-field invariant rules.
//!
//! These run only over values that already passed structural validation, with
//! defaults applied: a malformed date is never compared against another date,
//! and the adult floor always judges a fully-populated composition. Rules
//! live apart from the per-field schemas because they change on a different
//! cadence (a minimum advance-booking window would be added here, not in the
//! DTOs).

use chrono::NaiveDate;

use crate::domain::{DateRange, TravelerComposition};

use super::report::FieldError;

/// Checks `end >= start`, attributing a violation to `field` (the later-named
/// wire field, e.g. `returnDate` or `checkout`).
pub fn date_order(
    start: NaiveDate,
    end: NaiveDate,
    field: &str,
    message: &str,
) -> Result<DateRange, FieldError> {
    DateRange::new(start, end).map_err(|_| FieldError::invariant(field, message))
}

/// Checks the adult floor: at least one adult regardless of children.
pub fn adult_floor(travelers: &TravelerComposition, field: &str) -> Option<FieldError> {
    if travelers.adults == 0 {
        return Some(FieldError::invariant(
            field,
            "At least one adult is required",
        ));
    }
    None
}
