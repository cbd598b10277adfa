//! Raw DTO for the unified flight search endpoint.

use serde::Deserialize;
use validator::Validate;

use super::traveler::TravelerDetails;

/// Wire field order of the flight schema, used to order error reports.
pub const FIELD_ORDER: &[&str] = &[
    "from",
    "to",
    "departureDate",
    "returnDate",
    "travelerDetails",
    "userTimezone",
];

/// Flight search criteria as sent by the client, before validation.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FlightSearchRequest {
    #[validate(required(message = "Origin is required"))]
    #[validate(length(min = 1, message = "Origin must not be empty"))]
    pub from: Option<String>,

    #[validate(required(message = "Destination is required"))]
    #[validate(length(min = 1, message = "Destination must not be empty"))]
    pub to: Option<String>,

    #[validate(required(message = "Departure date is required"))]
    #[validate(custom(function = "super::calendar_date"))]
    pub departure_date: Option<String>,

    #[validate(required(message = "Return date is required"))]
    #[validate(custom(function = "super::calendar_date"))]
    pub return_date: Option<String>,

    /// Absent means one adult, no children.
    #[validate(nested)]
    pub traveler_details: Option<TravelerDetails>,

    #[validate(required(message = "User timezone is required"))]
    pub user_timezone: Option<String>,
}
