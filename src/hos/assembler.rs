//! Trip assembler: the top-level entry point that wires the distance
//! estimator, scheduler, and daily-log projector together and produces
//! the finished [`TripResult`].

use chrono::{Duration, NaiveDate, Utc};

use super::projector;
use super::scheduler::Scheduler;
use super::types::{Day, PlanRequest, RouteWaypoints, TripResult, TripWarning};
use crate::route;

const MAX_CYCLE_HOURS: f64 = 70.0;

/// Plans a full HOS-compliant trip for `request`, anchoring day 1's
/// calendar date at today.
pub fn plan_trip(request: &PlanRequest) -> TripResult {
    plan_trip_from(request, Utc::now().date_naive())
}

/// Same as [`plan_trip`] but with an explicit anchor date, so callers
/// (tests, deterministic batch runs) don't depend on the wall clock.
pub fn plan_trip_from(request: &PlanRequest, today: NaiveDate) -> TripResult {
    let route = route::estimate(&request.current, &request.pickup, &request.dropoff);

    let scheduled = Scheduler::plan(
        &request.current,
        &request.pickup,
        &request.dropoff,
        &route,
        request.cycle_hours_used as f64,
    );

    let logs = projector::project(&scheduled.events);
    let total_days = logs.keys().next_back().copied().unwrap_or(1);

    let days: Vec<Day> = logs
        .into_iter()
        .map(|(day, log)| Day {
            date: (today + Duration::days(i64::from(day) - 1)).to_string(),
            stops: scheduled
                .stops
                .iter()
                .filter(|s| s.day == day)
                .cloned()
                .collect(),
            day,
            log,
        })
        .collect();

    let total_driving_raw: f64 = days.iter().map(|d| d.log.totals.driving).sum();
    let total_on_duty_raw: f64 = days.iter().map(|d| d.log.totals.on_duty).sum();
    let final_cycle = request.cycle_hours_used as f64 + total_driving_raw + total_on_duty_raw;

    let warning = if final_cycle > MAX_CYCLE_HOURS {
        let excess = round1(final_cycle - MAX_CYCLE_HOURS);
        Some(TripWarning {
            kind: "cycle_exceeded".to_string(),
            message: format!(
                "This trip exceeds the 70-hour cycle limit by {excess} hours. Consider taking a 34-hour restart before starting."
            ),
            excess_hours: excess,
            recommendation: "34-hour restart required".to_string(),
        })
    } else {
        None
    };

    TripResult {
        name: format!("{} → {}", request.current.label, request.dropoff.label),
        origin: request.current.clone(),
        pickup: request.pickup.clone(),
        dropoff: request.dropoff.clone(),
        cycle_hours_used: final_cycle.round().min(MAX_CYCLE_HOURS),
        cycle_hours_actual: round1(final_cycle),
        total_miles: route.total_distance_mi.round() as i64,
        total_days,
        total_driving_hours: round1(total_driving_raw),
        total_on_duty_hours: round1(total_on_duty_raw),
        days,
        route: RouteWaypoints {
            waypoints: route.waypoints,
        },
        warning,
    }
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}
