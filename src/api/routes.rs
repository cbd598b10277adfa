//! API route configuration.

use crate::api::handlers::{car_search_handler, flight_search_handler, hotel_search_handler};
use crate::state::AppState;
use axum::{Router, routing::post};

/// All unified search routes.
///
/// # Endpoints
///
/// - `POST /unified-details/flight` - Validate and dispatch a flight search
/// - `POST /unified-details/hotel`  - Validate and dispatch a hotel search
/// - `POST /unified-details/car`    - Validate and dispatch a car search
pub fn search_routes() -> Router<AppState> {
    Router::new()
        .route("/unified-details/flight", post(flight_search_handler))
        .route("/unified-details/hotel", post(hotel_search_handler))
        .route("/unified-details/car", post(car_search_handler))
}
