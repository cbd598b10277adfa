//! Ordered calendar date ranges.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A pair of calendar dates where the end never precedes the start.
///
/// Equal start and end is allowed and models same-day trips (a same-day
/// return flight, a day-use hotel stay).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// The end date precedes the start date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("end date {end} is before start date {start}")]
pub struct DateOrderError {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a range, rejecting `end < start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DateOrderError> {
        if end < start {
            return Err(DateOrderError { start, end });
        }
        Ok(Self { start, end })
    }

    /// Number of nights (or days) the range spans. Zero for same-day ranges.
    pub fn nights(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}
