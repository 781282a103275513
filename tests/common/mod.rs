//! Shared test fixtures for integration tests.

use chrono::NaiveDate;
use hos_trip_planner::hos::types::{Location, PlanRequest};

/// Anchor date used across integration tests so day numbers map to
/// fixed calendar dates instead of depending on the wall clock.
pub fn anchor_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
}

pub fn loc(label: &str, lat: f64, lng: f64) -> Location {
    Location::new(label, lat, lng)
}

/// Scenario 1: short trip entirely within New York/New Jersey, cycle 0.
pub fn short_trip_request() -> PlanRequest {
    PlanRequest {
        current: loc("New York, NY", 40.7128, -74.0060),
        pickup: loc("Newark area", 40.8, -74.1),
        dropoff: loc("Jersey City area", 40.9, -74.2),
        cycle_hours_used: 0,
    }
}

/// Scenario 2: New York to the Pacific Northwest, cycle 0.
pub fn transcontinental_request() -> PlanRequest {
    PlanRequest {
        current: loc("New York, NY", 40.7128, -74.0060),
        pickup: loc("Seattle, WA", 47.6062, -122.3321),
        dropoff: loc("Portland, OR", 45.5152, -122.6784),
        cycle_hours_used: 0,
    }
}

/// Scenario 3: same route as scenario 1, but 69 of 70 cycle hours used.
pub fn near_cap_cycle_request() -> PlanRequest {
    PlanRequest {
        cycle_hours_used: 69,
        ..short_trip_request()
    }
}

/// Scenario 4: DC -> Chicago -> Denver, cycle 0 (far enough to need
/// rests, but not enough duty hours to exceed the 70-hour cycle).
pub fn dc_chicago_denver_request() -> PlanRequest {
    PlanRequest {
        current: loc("Washington, DC", 38.9072, -77.0369),
        pickup: loc("Chicago, IL", 41.8781, -87.6298),
        dropoff: loc("Denver, CO", 39.7392, -104.9903),
        cycle_hours_used: 0,
    }
}
