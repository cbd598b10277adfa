mod common;

use axum::{Router, routing::post};
use axum_test::TestServer;
use serde_json::json;
use travel_search::api::handlers::car_search_handler;

fn test_server() -> TestServer {
    let app = Router::new()
        .route("/api/unified-details/car", post(car_search_handler))
        .with_state(common::create_test_state());
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_car_search_success() {
    let server = test_server();

    let response = server
        .post("/api/unified-details/car")
        .json(&json!({
            "pickUpLocation": "Berlin Hbf",
            "dropOffLocation": "Munich Airport",
            "pickUpDate": "2024-06-10",
            "pickUpTime": "09:00",
            "dropOffDate": "2024-06-12",
            "dropOffTime": "18:30",
            "returnToSameLocation": false,
            "userTimezone": "Europe/Berlin"
        }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["pickUpLocation"], "Berlin Hbf");
    assert_eq!(json["returnToSameLocation"], false);
    assert_eq!(json["userTimezone"], "Europe/Berlin");
}

#[tokio::test]
async fn test_car_search_missing_fields_all_reported() {
    let server = test_server();

    let response = server
        .post("/api/unified-details/car")
        .json(&json!({
            "pickUpLocation": "Berlin Hbf",
            "userTimezone": "Europe/Berlin"
        }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    let details = json["error"]["details"].as_array().unwrap();
    let fields: Vec<&str> = details.iter().map(|d| d["field"].as_str().unwrap()).collect();
    assert_eq!(
        fields,
        vec![
            "dropOffLocation",
            "pickUpDate",
            "pickUpTime",
            "dropOffDate",
            "dropOffTime",
            "returnToSameLocation"
        ]
    );
}

#[tokio::test]
async fn test_car_search_empty_location_rejected() {
    let server = test_server();

    let response = server
        .post("/api/unified-details/car")
        .json(&json!({
            "pickUpLocation": "",
            "dropOffLocation": "Munich Airport",
            "pickUpDate": "2024-06-10",
            "pickUpTime": "09:00",
            "dropOffDate": "2024-06-12",
            "dropOffTime": "18:30",
            "returnToSameLocation": true,
            "userTimezone": "Europe/Berlin"
        }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    let details = json["error"]["details"].as_array().unwrap();
    assert_eq!(details[0]["field"], "pickUpLocation");
}

#[tokio::test]
async fn test_car_search_non_boolean_flag_rejected() {
    let server = test_server();

    // Wrong primitive type fails JSON extraction; mapped to the same
    // validation_error envelope.
    let response = server
        .post("/api/unified-details/car")
        .json(&json!({
            "pickUpLocation": "Berlin Hbf",
            "dropOffLocation": "Munich Airport",
            "pickUpDate": "2024-06-10",
            "pickUpTime": "09:00",
            "dropOffDate": "2024-06-12",
            "dropOffTime": "18:30",
            "returnToSameLocation": "yes",
            "userTimezone": "Europe/Berlin"
        }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}
