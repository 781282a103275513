//! API request/response types.
//!
//! Field names follow the wire contract the original Django API
//! accepted and returned — `current_location`/`pickup_location`/
//! `dropoff_location`, `cycle_hours_used` — so existing clients don't
//! need to change their payloads.

use serde::Serialize;
use std::collections::BTreeMap;

pub use crate::request::PlanTripRequestBody;

/// `400`-class body: one entry per invalid field, each with every
/// message describing what's wrong with it.
#[derive(Debug, Serialize)]
pub struct ValidationErrorResponse {
    pub errors: BTreeMap<String, Vec<String>>,
}

/// `500`-class body for unexpected computation failures.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// `200`-class body for the health check.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
