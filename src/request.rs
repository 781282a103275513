//! Request validation: turns an untrusted JSON payload into a
//! [`PlanRequest`](crate::hos::types::PlanRequest) the scheduler can
//! safely consume, or a field-keyed list of error messages.
//!
//! Every field is checked — an invalid `cycle_hours_used` does not
//! short-circuit coordinate validation — so a caller sees every
//! problem with one request in one response, same as the reference
//! API's serializer errors.

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;

use crate::hos::types::{Location, PlanRequest};

const MAX_LABEL_LEN: usize = 200;
const MAX_CYCLE_HOURS: u32 = 70;

/// The wire shape of a plan-trip request, named to match the field
/// names the original API accepts.
#[derive(Debug, Deserialize)]
pub struct LocationBody {
    pub label: String,
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Deserialize)]
pub struct PlanTripRequestBody {
    pub current_location: LocationBody,
    pub pickup_location: LocationBody,
    pub dropoff_location: LocationBody,
    pub cycle_hours_used: u32,
}

/// Field path to the list of messages describing what's wrong with it,
/// e.g. `{"pickup_location.lat": ["must be between -90 and 90"]}`.
#[derive(Debug, Default, PartialEq)]
pub struct ValidationErrors(BTreeMap<String, Vec<String>>);

impl ValidationErrors {
    fn push(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &BTreeMap<String, Vec<String>> {
        &self.0
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (field, messages) in &self.0 {
            writeln!(f, "{field}: {}", messages.join(", "))?;
        }
        Ok(())
    }
}

/// Validates `body` and converts it into a [`PlanRequest`].
///
/// # Errors
///
/// Returns every field-level violation found; never stops at the
/// first one.
pub fn validate(body: PlanTripRequestBody) -> Result<PlanRequest, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    validate_location(&body.current_location, "current_location", &mut errors);
    validate_location(&body.pickup_location, "pickup_location", &mut errors);
    validate_location(&body.dropoff_location, "dropoff_location", &mut errors);

    if body.cycle_hours_used > MAX_CYCLE_HOURS {
        errors.push(
            "cycle_hours_used",
            format!("must be between 0 and {MAX_CYCLE_HOURS}"),
        );
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(PlanRequest {
        current: Location::new(body.current_location.label, body.current_location.lat, body.current_location.lng),
        pickup: Location::new(body.pickup_location.label, body.pickup_location.lat, body.pickup_location.lng),
        dropoff: Location::new(body.dropoff_location.label, body.dropoff_location.lat, body.dropoff_location.lng),
        cycle_hours_used: body.cycle_hours_used,
    })
}

fn validate_location(loc: &LocationBody, field: &str, errors: &mut ValidationErrors) {
    if loc.label.is_empty() {
        errors.push(&format!("{field}.label"), "must not be empty");
    } else if loc.label.len() > MAX_LABEL_LEN {
        errors.push(&format!("{field}.label"), format!("must be at most {MAX_LABEL_LEN} characters"));
    }
    if !(-90.0..=90.0).contains(&loc.lat) {
        errors.push(&format!("{field}.lat"), "must be between -90 and 90");
    }
    if !(-180.0..=180.0).contains(&loc.lng) {
        errors.push(&format!("{field}.lng"), "must be between -180 and 180");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(label: &str, lat: f64, lng: f64) -> LocationBody {
        LocationBody {
            label: label.to_string(),
            lat,
            lng,
        }
    }

    fn valid_body() -> PlanTripRequestBody {
        PlanTripRequestBody {
            current_location: loc("New York, NY", 40.7128, -74.0060),
            pickup_location: loc("Philadelphia, PA", 40.0, -75.1),
            dropoff_location: loc("Baltimore, MD", 39.3, -76.6),
            cycle_hours_used: 10,
        }
    }

    #[test]
    fn valid_request_passes() {
        assert!(validate(valid_body()).is_ok());
    }

    #[test]
    fn out_of_range_latitude_is_rejected() {
        let mut body = valid_body();
        body.pickup_location.lat = 95.0;
        let errors = validate(body).unwrap_err();
        assert!(errors.as_map().contains_key("pickup_location.lat"));
    }

    #[test]
    fn cycle_hours_above_seventy_is_rejected() {
        let mut body = valid_body();
        body.cycle_hours_used = 71;
        let errors = validate(body).unwrap_err();
        assert!(errors.as_map().contains_key("cycle_hours_used"));
    }

    #[test]
    fn multiple_field_violations_all_reported_at_once() {
        let mut body = valid_body();
        body.current_location.lat = 200.0;
        body.dropoff_location.lng = -200.0;
        body.cycle_hours_used = 999;
        let errors = validate(body).unwrap_err();
        assert_eq!(errors.as_map().len(), 3);
    }

    #[test]
    fn empty_label_is_rejected() {
        let mut body = valid_body();
        body.current_location.label = String::new();
        let errors = validate(body).unwrap_err();
        assert!(errors.as_map().contains_key("current_location.label"));
    }
}
