//! Raw DTO for the unified hotel search endpoint.

use serde::Deserialize;
use validator::Validate;

use super::traveler::GuestDetails;

/// Wire field order of the hotel schema, used to order error reports.
pub const FIELD_ORDER: &[&str] = &[
    "destination",
    "checkIn",
    "checkout",
    "roomType",
    "guestDetails",
    "userTimezone",
];

/// Hotel search criteria as sent by the client, before validation.
///
/// Hotel dates carry a stricter contract than flight dates: they must match
/// the literal `YYYY-MM-DD` pattern, not merely parse as a date.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct HotelSearchRequest {
    #[validate(required(message = "Destination is required"))]
    #[validate(length(min = 3, max = 100, message = "Destination must be 3 to 100 characters"))]
    pub destination: Option<String>,

    #[validate(required(message = "Check-in date is required"))]
    #[validate(custom(function = "super::strict_calendar_date"))]
    pub check_in: Option<String>,

    #[validate(required(message = "Checkout date is required"))]
    #[validate(custom(function = "super::strict_calendar_date"))]
    pub checkout: Option<String>,

    /// Free-form and unchecked; providers interpret it.
    pub room_type: Option<String>,

    /// Absent means one adult, no children, one room.
    #[validate(nested)]
    pub guest_details: Option<GuestDetails>,

    #[validate(required(message = "User timezone is required"))]
    pub user_timezone: Option<String>,
}
