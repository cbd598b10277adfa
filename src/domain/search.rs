//! Normalized search request entities.
//!
//! These are the types handed to provider dispatch once validation succeeds.
//! Serialization reproduces the wire shape of the raw request (camelCase
//! names, `YYYY-MM-DD` dates, IANA zone name) with defaults materialized, so
//! a normalized payload round-trips through validation unchanged.

use chrono::NaiveDate;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use super::traveler::{GuestComposition, TravelerComposition};

/// A validated flight search ready for provider dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightSearch {
    pub from: String,
    pub to: String,
    pub departure_date: NaiveDate,
    pub return_date: NaiveDate,
    pub traveler_details: TravelerComposition,
    pub user_timezone: Tz,
}

/// A validated hotel search ready for provider dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelSearch {
    pub destination: String,
    pub check_in: NaiveDate,
    pub checkout: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_type: Option<String>,
    pub guest_details: GuestComposition,
    pub user_timezone: Tz,
}

/// A validated car search ready for provider dispatch.
///
/// Date and time fields stay opaque strings: the car schema declares no
/// format for them, so interpretation belongs to the providers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarSearch {
    pub pick_up_location: String,
    pub drop_off_location: String,
    pub pick_up_date: String,
    pub pick_up_time: String,
    pub drop_off_date: String,
    pub drop_off_time: String,
    pub return_to_same_location: bool,
    pub user_timezone: Tz,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::traveler::Child;

    #[test]
    fn test_flight_search_wire_shape() {
        let search = FlightSearch {
            from: "BER".to_string(),
            to: "JFK".to_string(),
            departure_date: NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
            return_date: NaiveDate::from_ymd_opt(2024, 6, 20).unwrap(),
            traveler_details: TravelerComposition::new(Some(2), Some(vec![Child { age: 5 }])),
            user_timezone: chrono_tz::Europe::Berlin,
        };

        let json = serde_json::to_value(&search).unwrap();
        assert_eq!(json["from"], "BER");
        assert_eq!(json["departureDate"], "2024-06-10");
        assert_eq!(json["travelerDetails"]["adults"], 2);
        assert_eq!(json["userTimezone"], "Europe/Berlin");
    }

    #[test]
    fn test_hotel_search_omits_absent_room_type() {
        let search = HotelSearch {
            destination: "New York".to_string(),
            check_in: NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
            checkout: NaiveDate::from_ymd_opt(2024, 6, 12).unwrap(),
            room_type: None,
            guest_details: GuestComposition::new(TravelerComposition::default(), None),
            user_timezone: chrono_tz::Europe::Berlin,
        };

        let json = serde_json::to_value(&search).unwrap();
        assert!(json.get("roomType").is_none());
        assert_eq!(json["guestDetails"]["rooms"], 1);
    }
}
