//! Raw DTO for the unified car search endpoint.

use serde::Deserialize;
use validator::Validate;

/// Wire field order of the car schema, used to order error reports.
pub const FIELD_ORDER: &[&str] = &[
    "pickUpLocation",
    "dropOffLocation",
    "pickUpDate",
    "pickUpTime",
    "dropOffDate",
    "dropOffTime",
    "returnToSameLocation",
    "userTimezone",
];

/// Car search criteria as sent by the client, before validation.
///
/// Date and time fields are required but format-opaque; the car providers own
/// their interpretation, so no ordering invariant can be checked here.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CarSearchRequest {
    #[validate(required(message = "Pick-up location is required"))]
    #[validate(length(min = 1, message = "Pick-up location must not be empty"))]
    pub pick_up_location: Option<String>,

    #[validate(required(message = "Drop-off location is required"))]
    #[validate(length(min = 1, message = "Drop-off location must not be empty"))]
    pub drop_off_location: Option<String>,

    #[validate(required(message = "Pick-up date is required"))]
    #[validate(length(min = 1, message = "Pick-up date must not be empty"))]
    pub pick_up_date: Option<String>,

    #[validate(required(message = "Pick-up time is required"))]
    #[validate(length(min = 1, message = "Pick-up time must not be empty"))]
    pub pick_up_time: Option<String>,

    #[validate(required(message = "Drop-off date is required"))]
    #[validate(length(min = 1, message = "Drop-off date must not be empty"))]
    pub drop_off_date: Option<String>,

    #[validate(required(message = "Drop-off time is required"))]
    #[validate(length(min = 1, message = "Drop-off time must not be empty"))]
    pub drop_off_time: Option<String>,

    #[validate(required(message = "Return-to-same-location flag is required"))]
    pub return_to_same_location: Option<bool>,

    #[validate(required(message = "User timezone is required"))]
    pub user_timezone: Option<String>,
}
