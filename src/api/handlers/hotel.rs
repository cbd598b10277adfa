//! Handler for the unified hotel search endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection};

use crate::api::dto::hotel::HotelSearchRequest;
use crate::domain::HotelSearch;
use crate::error::AppError;
use crate::state::AppState;
use crate::validation;

/// Validates a hotel search and forwards it to provider dispatch.
///
/// # Endpoint
///
/// `POST /api/unified-details/hotel`
///
/// # Request Body
///
/// ```json
/// {
///   "destination": "New York",
///   "checkIn": "2024-06-10",
///   "checkout": "2024-06-12",
///   "roomType": "double",
///   "guestDetails": { "adults": 2, "children": [{ "age": 5 }], "rooms": 1 },
///   "userTimezone": "Europe/Berlin"
/// }
/// ```
///
/// # Response
///
/// **200 OK** with the normalized request. **400 Bad Request** with
/// `error.details` listing every violated field.
pub async fn hotel_search_handler(
    State(state): State<AppState>,
    payload: Result<Json<HotelSearchRequest>, JsonRejection>,
) -> Result<Json<HotelSearch>, AppError> {
    let Json(payload) = payload?;

    let search = validation::validate_hotel(payload)?;
    state.dispatch.dispatch_hotel(&search).await?;

    Ok(Json(search))
}
