mod common;

use axum::{Router, routing::post};
use axum_test::TestServer;
use serde_json::json;
use travel_search::api::handlers::flight_search_handler;

fn test_server() -> TestServer {
    let app = Router::new()
        .route("/api/unified-details/flight", post(flight_search_handler))
        .with_state(common::create_test_state());
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_flight_search_success() {
    let server = test_server();

    let response = server
        .post("/api/unified-details/flight")
        .json(&json!({
            "from": "BER",
            "to": "JFK",
            "departureDate": "2024-06-10",
            "returnDate": "2024-06-20",
            "travelerDetails": { "adults": 2, "children": [{ "age": 5 }] },
            "userTimezone": "Europe/Berlin"
        }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["from"], "BER");
    assert_eq!(json["departureDate"], "2024-06-10");
    assert_eq!(json["travelerDetails"]["adults"], 2);
    assert_eq!(json["userTimezone"], "Europe/Berlin");
}

#[tokio::test]
async fn test_flight_search_defaults_travelers() {
    let server = test_server();

    let response = server
        .post("/api/unified-details/flight")
        .json(&json!({
            "from": "BER",
            "to": "JFK",
            "departureDate": "2024-06-10",
            "returnDate": "2024-06-10",
            "userTimezone": "Europe/Berlin"
        }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["travelerDetails"]["adults"], 1);
    assert_eq!(json["travelerDetails"]["children"], json!([]));
}

#[tokio::test]
async fn test_flight_search_return_before_departure_rejected() {
    let server = test_server();

    let response = server
        .post("/api/unified-details/flight")
        .json(&json!({
            "from": "BER",
            "to": "JFK",
            "departureDate": "2024-06-10",
            "returnDate": "2024-06-01",
            "userTimezone": "Europe/Berlin"
        }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");

    let details = json["error"]["details"].as_array().unwrap();
    assert_eq!(details.len(), 1);
    assert_eq!(details[0]["field"], "returnDate");
    assert_eq!(
        details[0]["message"],
        "Return date must be on or after departure date"
    );
}

#[tokio::test]
async fn test_flight_search_unknown_timezone_rejected() {
    let server = test_server();

    let response = server
        .post("/api/unified-details/flight")
        .json(&json!({
            "from": "BER",
            "to": "JFK",
            "departureDate": "2024-06-10",
            "returnDate": "2024-06-20",
            "userTimezone": "Mars/Phobos"
        }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    let details = json["error"]["details"].as_array().unwrap();
    assert_eq!(details[0]["field"], "userTimezone");
}

#[tokio::test]
async fn test_flight_search_reports_every_violated_field() {
    let server = test_server();

    let response = server
        .post("/api/unified-details/flight")
        .json(&json!({
            "from": "",
            "to": "JFK",
            "departureDate": "2024-06-10",
            "returnDate": "not-a-date",
            "userTimezone": "Mars/Phobos"
        }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    let details = json["error"]["details"].as_array().unwrap();
    let fields: Vec<&str> = details.iter().map(|d| d["field"].as_str().unwrap()).collect();
    assert_eq!(fields, vec!["from", "returnDate", "userTimezone"]);
}

#[tokio::test]
async fn test_flight_search_malformed_json_rejected() {
    let server = test_server();

    let response = server
        .post("/api/unified-details/flight")
        .content_type("application/json")
        .text("{ not json")
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}
