//! Domain layer containing the normalized search entities.
//!
//! This module defines the typed, fully-defaulted representations of the three
//! search request kinds. Everything here is request-scoped: entities are built
//! by the validation pipeline, handed to provider dispatch, and dropped.
//! Nothing in this layer touches transport or persistence concerns.
//!
//! # Entity Types
//!
//! - [`traveler`] - Traveler and guest compositions
//! - [`date_range`] - Ordered calendar date ranges
//! - [`search`] - Normalized flight, hotel, and car search requests

pub mod date_range;
pub mod search;
pub mod traveler;

pub use date_range::{DateOrderError, DateRange};
pub use search::{CarSearch, FlightSearch, HotelSearch};
pub use traveler::{Child, GuestComposition, TravelerComposition};
