//! Location interpolator: names mid-leg stops (rest, break, fuel).
//!
//! Does not need geodesic accuracy — a linear blend of the two endpoint
//! coordinates is enough to place a stop marker on the map.

use crate::hos::types::Location;

/// Returns the coordinate at `progress` of the way from `from` to `to`,
/// labeled with the current mileage.
///
/// `progress` is expected in `[0, 1]` but is not clamped — callers in
/// `hos::scheduler` already guarantee the range.
pub fn interpolate(from: &Location, to: &Location, progress: f64, current_mileage: f64) -> Location {
    let lat = from.lat + (to.lat - from.lat) * progress;
    let lng = from.lng + (to.lng - from.lng) * progress;
    Location::new(format!("Mile {}", current_mileage.round() as i64), lat, lng)
}
