//! Request handlers for the API endpoints.

use std::panic::{self, AssertUnwindSafe};

use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use super::types::{ErrorResponse, HealthResponse, PlanTripRequestBody, ValidationErrorResponse};
use crate::hos;
use crate::request;

/// `GET /api/health` → 200 + `{"status": "ok"}`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// `POST /api/plan-trip`
///
/// - 200 + `TripResult` JSON on success
/// - 400 + `{errors: {field: [message]}}` if the payload fails validation
/// - 500 + `{error: message}` if scheduling panics on an otherwise-valid request
pub async fn plan_trip(Json(body): Json<PlanTripRequestBody>) -> impl IntoResponse {
    let plan_request = match request::validate(body) {
        Ok(req) => req,
        Err(errors) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ValidationErrorResponse {
                    errors: errors.as_map().clone(),
                })
                .into_response(),
            );
        }
    };

    match panic::catch_unwind(AssertUnwindSafe(|| hos::plan_trip(&plan_request))) {
        Ok(result) => (StatusCode::OK, Json(result).into_response()),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "failed to compute trip schedule".to_string(),
            })
            .into_response(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::Request;
    use tower::util::ServiceExt;

    use super::*;
    use crate::api::router;

    fn valid_payload() -> serde_json::Value {
        serde_json::json!({
            "current_location": {"label": "New York, NY", "lat": 40.7128, "lng": -74.0060},
            "pickup_location": {"label": "Newark, NJ", "lat": 40.8, "lng": -74.1},
            "dropoff_location": {"label": "Jersey City, NJ", "lat": 40.9, "lng": -74.2},
            "cycle_hours_used": 0
        })
    }

    #[tokio::test]
    async fn health_returns_200_ok_status() {
        let app = router();
        let req = Request::builder().uri("/api/health").body(Body::empty()).unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn plan_trip_valid_payload_returns_200() {
        let app = router();
        let req = Request::builder()
            .method("POST")
            .uri("/api/plan-trip")
            .header("content-type", "application/json")
            .body(Body::from(valid_payload().to_string()))
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(json.get("days").is_some());
        assert!(json.get("totalMiles").is_some());
    }

    #[tokio::test]
    async fn plan_trip_invalid_coordinate_returns_400() {
        let mut payload = valid_payload();
        payload["pickup_location"]["lat"] = serde_json::json!(999.0);

        let app = router();
        let req = Request::builder()
            .method("POST")
            .uri("/api/plan-trip")
            .header("content-type", "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(json["errors"].get("pickup_location.lat").is_some());
    }
}
