//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to one unified search domain.

pub mod car;
pub mod flight;
pub mod health;
pub mod hotel;

pub use car::car_search_handler;
pub use flight::flight_search_handler;
pub use health::health_handler;
pub use hotel::hotel_search_handler;
