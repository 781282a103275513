#![cfg(feature = "api")]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use hos_trip_planner::api::router;
use tower::util::ServiceExt;

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let app = router();
    let req = Request::builder().uri("/api/health").body(Body::empty()).unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn plan_trip_endpoint_rejects_cycle_hours_above_seventy() {
    let payload = serde_json::json!({
        "current_location": {"label": "A", "lat": 40.0, "lng": -74.0},
        "pickup_location": {"label": "B", "lat": 40.5, "lng": -74.5},
        "dropoff_location": {"label": "C", "lat": 41.0, "lng": -75.0},
        "cycle_hours_used": 71
    });

    let app = router();
    let req = Request::builder()
        .method("POST")
        .uri("/api/plan-trip")
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn plan_trip_endpoint_returns_camel_case_json_fields() {
    let payload = serde_json::json!({
        "current_location": {"label": "New York, NY", "lat": 40.7128, "lng": -74.0060},
        "pickup_location": {"label": "Newark, NJ", "lat": 40.8, "lng": -74.1},
        "dropoff_location": {"label": "Jersey City, NJ", "lat": 40.9, "lng": -74.2},
        "cycle_hours_used": 0
    });

    let app = router();
    let req = Request::builder()
        .method("POST")
        .uri("/api/plan-trip")
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(json.get("cycleHoursUsed").is_some());
    assert!(json.get("totalDrivingHours").is_some());
    assert!(json.get("route").and_then(|r| r.get("waypoints")).is_some());
}
