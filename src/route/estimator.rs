//! Distance estimator: the scheduler's sole source of route geometry.
//!
//! Pure function from three coordinates to two legs, a total, and
//! waypoints — the scheduler trusts whatever this returns and never
//! re-derives geometry (see `hos::scheduler`).

use crate::hos::types::{Leg, Location, Route};

/// Mean Earth radius in miles, per the reference implementation.
const EARTH_RADIUS_MI: f64 = 3958.8;

/// Roads are assumed to be this much longer than a great-circle line.
const ROAD_FACTOR: f64 = 1.3;

/// Average truck speed used to convert distance into driving duration.
const AVG_SPEED_MPH: f64 = 55.0;

/// Computes the great-circle distance between two points, in miles.
pub fn haversine_distance_mi(a: &Location, b: &Location) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let dlat = (b.lat - a.lat).to_radians();
    let dlng = (b.lng - a.lng).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().asin();
    EARTH_RADIUS_MI * c
}

/// Estimates driving time in hours at the reference average speed.
pub fn estimate_driving_time_h(distance_mi: f64) -> f64 {
    distance_mi / AVG_SPEED_MPH
}

/// Builds the two-leg route `current -> pickup -> dropoff`.
///
/// Distances are great-circle, scaled by the road factor; durations are
/// derived from the scaled distance at a constant average speed.
/// Waypoint ordering is always `[current, pickup, dropoff]`.
pub fn estimate(current: &Location, pickup: &Location, dropoff: &Location) -> Route {
    let dist_to_pickup = haversine_distance_mi(current, pickup) * ROAD_FACTOR;
    let dist_to_dropoff = haversine_distance_mi(pickup, dropoff) * ROAD_FACTOR;

    let legs = [
        Leg {
            from: current.clone(),
            to: pickup.clone(),
            distance_mi: dist_to_pickup,
            duration_h: estimate_driving_time_h(dist_to_pickup),
        },
        Leg {
            from: pickup.clone(),
            to: dropoff.clone(),
            distance_mi: dist_to_dropoff,
            duration_h: estimate_driving_time_h(dist_to_dropoff),
        },
    ];

    let total_distance_mi = dist_to_pickup + dist_to_dropoff;

    Route {
        total_driving_time_h: estimate_driving_time_h(total_distance_mi),
        total_distance_mi,
        legs,
        waypoints: vec![current.clone(), pickup.clone(), dropoff.clone()],
    }
}
