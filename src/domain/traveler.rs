//! Traveler and guest composition entities.

use serde::{Deserialize, Serialize};

/// Who is traveling: at least one adult, plus any number of children.
///
/// The validation pipeline guarantees `adults >= 1` before one of these is
/// constructed; defaults (`adults` = 1, no children) are applied there too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelerComposition {
    pub adults: u32,
    pub children: Vec<Child>,
}

impl TravelerComposition {
    /// Creates a composition, filling in the defaults for absent parts.
    pub fn new(adults: Option<u32>, children: Option<Vec<Child>>) -> Self {
        Self {
            adults: adults.unwrap_or(1),
            children: children.unwrap_or_default(),
        }
    }

    /// Total number of travelers, adults and children combined.
    pub fn total(&self) -> usize {
        self.adults as usize + self.children.len()
    }
}

impl Default for TravelerComposition {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// A single child traveler. Ages are bounded to [0, 17] by validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Child {
    pub age: u8,
}

/// Hotel guest composition: travelers plus the number of rooms.
///
/// Serializes flat (`adults`, `children`, `rooms`) to match the wire shape of
/// the `guestDetails` object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestComposition {
    #[serde(flatten)]
    pub travelers: TravelerComposition,
    pub rooms: u32,
}

impl GuestComposition {
    /// Creates a guest composition, defaulting `rooms` to 1 when absent.
    pub fn new(travelers: TravelerComposition, rooms: Option<u32>) -> Self {
        Self {
            travelers,
            rooms: rooms.unwrap_or(1),
        }
    }
}
