//! Handler for the unified car search endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection};

use crate::api::dto::car::CarSearchRequest;
use crate::domain::CarSearch;
use crate::error::AppError;
use crate::state::AppState;
use crate::validation;

/// Validates a car search and forwards it to provider dispatch.
///
/// # Endpoint
///
/// `POST /api/unified-details/car`
///
/// # Request Body
///
/// ```json
/// {
///   "pickUpLocation": "Berlin Hbf",
///   "dropOffLocation": "Munich Airport",
///   "pickUpDate": "2024-06-10",
///   "pickUpTime": "09:00",
///   "dropOffDate": "2024-06-12",
///   "dropOffTime": "18:30",
///   "returnToSameLocation": false,
///   "userTimezone": "Europe/Berlin"
/// }
/// ```
///
/// # Response
///
/// **200 OK** with the normalized request. **400 Bad Request** with
/// `error.details` listing every violated field.
pub async fn car_search_handler(
    State(state): State<AppState>,
    payload: Result<Json<CarSearchRequest>, JsonRejection>,
) -> Result<Json<CarSearch>, AppError> {
    let Json(payload) = payload?;

    let search = validation::validate_car(payload)?;
    state.dispatch.dispatch_car(&search).await?;

    Ok(Json(search))
}
