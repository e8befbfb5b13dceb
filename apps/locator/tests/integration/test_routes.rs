use super::helpers::{FakeDirectory, FakeGeocoder, expect_status, get, office, read_json, send, spawn_app};
use axum::http::StatusCode;
use locator::{
    domain::location::errors::LocationError, infrastructure::geocoding::GeocodedAddress,
};
use serde_json::{Value, json};
use std::sync::Arc;

fn directory() -> Arc<FakeDirectory> {
    Arc::new(
        FakeDirectory::new()
            .with_locality(
                "Central Delhi",
                vec![
                    office("Connaught Place", "110001", "Delhi", "Central Delhi"),
                    office("Parliament Street", "110001", "Delhi", "Central Delhi"),
                    office("Daryaganj", "110002", "Delhi", "Central Delhi"),
                ],
            )
            .with_pincode(
                "110001",
                vec![office("Connaught Place", "110001", "DELHI", "CENTRAL DELHI")],
            ),
    )
}

fn geocoder() -> Arc<FakeGeocoder> {
    Arc::new(FakeGeocoder::new(Ok(GeocodedAddress {
        pincode: Some("110001".into()),
        city: Some("New Delhi".into()),
        district: Some("Central Delhi".into()),
        state: Some("Delhi".into()),
    })))
}

#[tokio::test]
async fn health_reports_disabled_cache() {
    let app = spawn_app(directory(), geocoder());

    let res = expect_status(send(&app, get("/health")).await, StatusCode::OK).await;
    assert!(res.headers().contains_key("x-request-id"));
    let body: Value = read_json(res).await;

    assert_eq!(body["status"], "healthy");
    assert_eq!(body["cache"], "disabled");
}

#[tokio::test]
async fn pincodes_for_district_are_listed_once_each() {
    let app = spawn_app(directory(), geocoder());

    let res = send(&app, get("/api/geo/pincodes?state=Delhi&district=Central%20Delhi")).await;
    let res = expect_status(res, StatusCode::OK).await;
    let body: Value = read_json(res).await;

    assert_eq!(
        body,
        json!({
            "pincodes": [
                { "pincode": "110001", "postOfficeName": "Connaught Place" },
                { "pincode": "110002", "postOfficeName": "Daryaganj" },
            ]
        })
    );
}

#[tokio::test]
async fn unknown_district_yields_empty_list() {
    let app = spawn_app(directory(), geocoder());

    let res = send(&app, get("/api/geo/pincodes?state=Goa&district=North%20Goa")).await;
    let body: Value = read_json(expect_status(res, StatusCode::OK).await).await;

    assert_eq!(body, json!({ "pincodes": [] }));
}

#[tokio::test]
async fn blank_district_is_a_bad_request() {
    let app = spawn_app(directory(), geocoder());

    let res = send(&app, get("/api/geo/pincodes?state=Delhi&district=")).await;
    expect_status(res, StatusCode::BAD_REQUEST).await;
}

#[tokio::test]
async fn pincode_lookup_title_cases_names() {
    let app = spawn_app(directory(), geocoder());

    let res = expect_status(send(&app, get("/api/geo/pincode/110001")).await, StatusCode::OK).await;
    let body: Value = read_json(res).await;

    assert_eq!(
        body,
        json!({ "pincode": "110001", "district": "Central Delhi", "state": "Delhi" })
    );
}

#[tokio::test]
async fn malformed_pincode_is_rejected_before_lookup() {
    let directory = directory();
    let app = spawn_app(directory.clone(), geocoder());

    let res = send(&app, get("/api/geo/pincode/12AB56")).await;
    let body: Value = read_json(expect_status(res, StatusCode::BAD_REQUEST).await).await;

    assert!(body["error"].as_str().is_some());
    assert_eq!(directory.lookup_calls(), 0);
}

#[tokio::test]
async fn unregistered_pincode_is_not_found() {
    let app = spawn_app(directory(), geocoder());

    let res = send(&app, get("/api/geo/pincode/999999")).await;
    expect_status(res, StatusCode::NOT_FOUND).await;
}

#[tokio::test]
async fn reverse_geocode_returns_address() {
    let geocoder = geocoder();
    let app = spawn_app(directory(), geocoder.clone());

    let res = send(&app, get("/api/geo/reverse?lat=28.6315&lon=77.2167")).await;
    let body: Value = read_json(expect_status(res, StatusCode::OK).await).await;

    assert_eq!(body["pincode"], "110001");
    assert_eq!(body["district"], "Central Delhi");
    assert_eq!(geocoder.calls(), 1);
}

#[tokio::test]
async fn reverse_geocode_rejects_out_of_range_coordinates() {
    let geocoder = geocoder();
    let app = spawn_app(directory(), geocoder.clone());

    let res = send(&app, get("/api/geo/reverse?lat=95&lon=77.2")).await;
    expect_status(res, StatusCode::BAD_REQUEST).await;
    assert_eq!(geocoder.calls(), 0);
}

#[tokio::test]
async fn geocoder_outage_is_service_unavailable() {
    let geocoder = Arc::new(FakeGeocoder::new(Err(LocationError::Transport("timeout".into()))));
    let app = spawn_app(directory(), geocoder);

    let res = send(&app, get("/api/geo/reverse?lat=28.6&lon=77.2")).await;
    expect_status(res, StatusCode::SERVICE_UNAVAILABLE).await;
}

#[tokio::test]
async fn incoming_request_id_is_echoed() {
    let app = spawn_app(directory(), geocoder());
    let id = "0194f123-4567-7abc-8def-0123456789ab";

    let req = axum::http::Request::builder()
        .uri("/health")
        .header("x-request-id", id)
        .body(axum::body::Body::empty())
        .expect("failed to build request");
    let res = send(&app, req).await;

    assert_eq!(
        res.headers().get("x-request-id").and_then(|v| v.to_str().ok()),
        Some(id)
    );
}
