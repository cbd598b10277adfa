//! Unified search request validation and normalization.
//!
//! One entry point per search domain. Each runs the same single-pass
//! pipeline:
//!
//! 1. **Structural checks** - the `validator` rules declared on the raw DTO
//!    (presence, format, ranges), aggregated so every violated field is
//!    reported in one pass.
//! 2. **Timezone resolution** - the zone string is resolved against the IANA
//!    database at "now".
//! 3. **Defaults** - `adults` = 1, `rooms` = 1, absent compositions become
//!    one adult with no children. Applied before invariants, so relational
//!    rules always judge fully-populated values.
//! 4. **Invariants** - cross-field rules over values that passed their own
//!    structural checks; a malformed date is never compared against another
//!    date, but unrelated fields keep reporting.
//!
//! The outcome is exactly one of: a normalized [`crate::domain`] entity ready
//! for provider dispatch, or a [`ValidationFailure`] listing every problem.
//! Nothing is ever partially applied, and validation has no side effects.

pub mod invariants;
pub mod report;
pub mod timezone;

use chrono::NaiveDate;
use chrono_tz::Tz;
use validator::Validate;

use crate::api::dto::car::{self, CarSearchRequest};
use crate::api::dto::flight::{self, FlightSearchRequest};
use crate::api::dto::hotel::{self, HotelSearchRequest};
use crate::api::dto::traveler::ChildItem;
use crate::domain::{
    CarSearch, Child, FlightSearch, GuestComposition, HotelSearch, TravelerComposition,
};

pub use report::{ErrorKind, FieldError, ValidationFailure};

/// Validates and normalizes a raw flight search request.
pub fn validate_flight(raw: FlightSearchRequest) -> Result<FlightSearch, ValidationFailure> {
    let mut errors = structural_errors(&raw, flight::FIELD_ORDER);

    let zone = resolve_zone(raw.user_timezone.as_deref(), &mut errors);
    let departure = raw.departure_date.as_deref().and_then(parse_date);
    let ret = raw.return_date.as_deref().and_then(parse_date);

    let details = raw.traveler_details.unwrap_or_default();
    let travelers = TravelerComposition::new(details.adults, collect_children(details.children));
    if let Some(err) = invariants::adult_floor(&travelers, "travelerDetails.adults") {
        errors.push(err);
    }

    // Only compare dates that individually parsed; their structural errors
    // are already in the report.
    let range = match (departure, ret) {
        (Some(departure), Some(ret)) => invariants::date_order(
            departure,
            ret,
            "returnDate",
            "Return date must be on or after departure date",
        )
        .map_err(|err| errors.push(err))
        .ok(),
        _ => None,
    };

    if !errors.is_empty() {
        return Err(ValidationFailure(errors));
    }

    let (Some(from), Some(to), Some(zone), Some(range)) = (raw.from, raw.to, zone, range) else {
        return Err(malformed_request());
    };

    Ok(FlightSearch {
        from,
        to,
        departure_date: range.start,
        return_date: range.end,
        traveler_details: travelers,
        user_timezone: zone,
    })
}

/// Validates and normalizes a raw hotel search request.
pub fn validate_hotel(raw: HotelSearchRequest) -> Result<HotelSearch, ValidationFailure> {
    let mut errors = structural_errors(&raw, hotel::FIELD_ORDER);

    let zone = resolve_zone(raw.user_timezone.as_deref(), &mut errors);
    let check_in = raw.check_in.as_deref().and_then(parse_date);
    let checkout = raw.checkout.as_deref().and_then(parse_date);

    let details = raw.guest_details.unwrap_or_default();
    let travelers = TravelerComposition::new(details.adults, collect_children(details.children));
    let guests = GuestComposition::new(travelers, details.rooms);
    if let Some(err) = invariants::adult_floor(&guests.travelers, "guestDetails.adults") {
        errors.push(err);
    }

    let range = match (check_in, checkout) {
        (Some(check_in), Some(checkout)) => invariants::date_order(
            check_in,
            checkout,
            "checkout",
            "Checkout date must be on or after check-in date",
        )
        .map_err(|err| errors.push(err))
        .ok(),
        _ => None,
    };

    if !errors.is_empty() {
        return Err(ValidationFailure(errors));
    }

    let (Some(destination), Some(zone), Some(range)) = (raw.destination, zone, range) else {
        return Err(malformed_request());
    };

    Ok(HotelSearch {
        destination,
        check_in: range.start,
        checkout: range.end,
        room_type: raw.room_type,
        guest_details: guests,
        user_timezone: zone,
    })
}

/// Validates and normalizes a raw car search request.
///
/// Car date/time strings are opaque, so the car domain has no date-order
/// invariant; only structural and timezone checks apply.
pub fn validate_car(raw: CarSearchRequest) -> Result<CarSearch, ValidationFailure> {
    let mut errors = structural_errors(&raw, car::FIELD_ORDER);

    let zone = resolve_zone(raw.user_timezone.as_deref(), &mut errors);

    if !errors.is_empty() {
        return Err(ValidationFailure(errors));
    }

    let (
        Some(pick_up_location),
        Some(drop_off_location),
        Some(pick_up_date),
        Some(pick_up_time),
        Some(drop_off_date),
        Some(drop_off_time),
        Some(return_to_same_location),
        Some(zone),
    ) = (
        raw.pick_up_location,
        raw.drop_off_location,
        raw.pick_up_date,
        raw.pick_up_time,
        raw.drop_off_date,
        raw.drop_off_time,
        raw.return_to_same_location,
        zone,
    )
    else {
        return Err(malformed_request());
    };

    Ok(CarSearch {
        pick_up_location,
        drop_off_location,
        pick_up_date,
        pick_up_time,
        drop_off_date,
        drop_off_time,
        return_to_same_location,
        user_timezone: zone,
    })
}

/// Runs the DTO's `validator` rules and flattens the result in schema order.
fn structural_errors<T: Validate>(raw: &T, field_order: &[&str]) -> Vec<FieldError> {
    match raw.validate() {
        Ok(()) => Vec::new(),
        Err(errors) => report::flatten(&errors, field_order),
    }
}

/// Resolves the zone string, recording a timezone error when it is present
/// but unknown. Absence is already reported as a structural `required` error.
fn resolve_zone(zone: Option<&str>, errors: &mut Vec<FieldError>) -> Option<Tz> {
    let zone = zone?;
    match timezone::resolve(zone) {
        Some(tz) => Some(tz),
        None => {
            errors.push(FieldError::timezone(
                "userTimezone",
                format!("Unknown or invalid IANA timezone: {zone}"),
            ));
            None
        }
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Builds the provisional child list for invariant checking. Entries whose
/// age failed structurally are dropped here; their errors are already in the
/// report, and normalization never runs when any error exists.
fn collect_children(children: Option<Vec<ChildItem>>) -> Option<Vec<Child>> {
    children.map(|items| {
        items
            .into_iter()
            .filter_map(|item| item.age.map(|age| Child { age }))
            .collect()
    })
}

/// Guard for the unreachable case where no field error was recorded but a
/// required value is still absent; reported as a generic rejection rather
/// than panicking in request handling.
fn malformed_request() -> ValidationFailure {
    ValidationFailure(vec![FieldError::structural(
        "request",
        "Malformed search request",
    )])
}
