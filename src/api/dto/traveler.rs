//! Raw traveler and guest composition DTOs shared by the flight and hotel
//! schemas.

use serde::Deserialize;
use validator::Validate;

/// Raw traveler composition as sent by the client.
///
/// `adults` is optional and defaults to 1 during normalization; the adult
/// floor itself is a cross-field rule checked after defaulting.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct TravelerDetails {
    pub adults: Option<u32>,

    #[validate(nested)]
    pub children: Option<Vec<ChildItem>>,
}

/// Raw child entry: an age, bounded to [0, 17].
#[derive(Debug, Deserialize, Validate)]
pub struct ChildItem {
    #[validate(required(message = "Child age is required"))]
    #[validate(range(min = 0, max = 17, message = "Child age must be between 0 and 17"))]
    pub age: Option<u8>,
}

/// Raw hotel guest composition: travelers plus a room count.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct GuestDetails {
    pub adults: Option<u32>,

    #[validate(nested)]
    pub children: Option<Vec<ChildItem>>,

    /// Defaults to 1 when absent.
    #[validate(range(min = 1, message = "At least one room is required"))]
    pub rooms: Option<u32>,
}
