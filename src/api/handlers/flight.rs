//! Handler for the unified flight search endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection};

use crate::api::dto::flight::FlightSearchRequest;
use crate::domain::FlightSearch;
use crate::error::AppError;
use crate::state::AppState;
use crate::validation;

/// Validates a flight search and forwards it to provider dispatch.
///
/// # Endpoint
///
/// `POST /api/unified-details/flight`
///
/// # Request Body
///
/// ```json
/// {
///   "from": "BER",
///   "to": "JFK",
///   "departureDate": "2024-06-10",
///   "returnDate": "2024-06-20",
///   "travelerDetails": { "adults": 2, "children": [{ "age": 5 }] },
///   "userTimezone": "Europe/Berlin"
/// }
/// ```
///
/// # Response
///
/// **200 OK** with the normalized request (defaults materialized, dates
/// canonical) once it has been handed to provider dispatch.
///
/// **400 Bad Request** with `error.details` listing every violated field as
/// ordered `{field, message}` pairs.
pub async fn flight_search_handler(
    State(state): State<AppState>,
    payload: Result<Json<FlightSearchRequest>, JsonRejection>,
) -> Result<Json<FlightSearch>, AppError> {
    let Json(payload) = payload?;

    let search = validation::validate_flight(payload)?;
    state.dispatch.dispatch_flight(&search).await?;

    Ok(Json(search))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::dispatch::MockProviderDispatch;
    use std::sync::Arc;

    fn request() -> FlightSearchRequest {
        serde_json::from_value(serde_json::json!({
            "from": "BER",
            "to": "JFK",
            "departureDate": "2024-06-10",
            "returnDate": "2024-06-20",
            "userTimezone": "Europe/Berlin"
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_valid_search_is_dispatched_once() {
        let mut dispatch = MockProviderDispatch::new();
        dispatch
            .expect_dispatch_flight()
            .withf(|search| search.from == "BER" && search.traveler_details.adults == 1)
            .once()
            .returning(|_| Ok(()));
        let state = AppState::new(Arc::new(dispatch));

        let result = flight_search_handler(State(state), Ok(Json(request()))).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_invalid_search_is_never_dispatched() {
        let mut dispatch = MockProviderDispatch::new();
        dispatch.expect_dispatch_flight().never();
        let state = AppState::new(Arc::new(dispatch));

        let mut payload = request();
        payload.return_date = Some("2024-06-01".to_string());

        let result = flight_search_handler(State(state), Ok(Json(payload))).await;
        assert!(matches!(result, Err(AppError::Validation { .. })));
    }
}
