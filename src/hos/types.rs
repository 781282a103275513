//! Core HOS domain types: locations, routes, stops, events, and the
//! finished trip result.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A named geographic point.
///
/// `label` is free text (e.g. a city name or `"Mile 412"`), not an
/// identifier — two locations may share a label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub label: String,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub fn new(label: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            label: label.into(),
            lat,
            lng,
        }
    }
}

/// A validated plan-trip request, ready for the scheduler.
///
/// Produced only by [`crate::request::validate`] — the scheduler never
/// sees a request that has not already passed field validation.
#[derive(Debug, Clone)]
pub struct PlanRequest {
    pub current: Location,
    pub pickup: Location,
    pub dropoff: Location,
    /// Hours already consumed in the rolling 70-hour/8-day cycle, `[0, 70]`.
    pub cycle_hours_used: u32,
}

/// One straight segment of the route between two named locations.
#[derive(Debug, Clone, Serialize)]
pub struct Leg {
    pub from: Location,
    pub to: Location,
    pub distance_mi: f64,
    pub duration_h: f64,
}

/// The route returned by the distance estimator: two legs
/// (origin→pickup, pickup→dropoff), their totals, and waypoints.
#[derive(Debug, Clone, Serialize)]
pub struct Route {
    pub legs: [Leg; 2],
    pub total_distance_mi: f64,
    pub total_driving_time_h: f64,
    pub waypoints: Vec<Location>,
}

/// A human-meaningful point on the plan. May have zero duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StopType {
    Start,
    Pickup,
    Dropoff,
    End,
    Rest,
    Break,
    Fuel,
}

impl fmt::Display for StopType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Start => "start",
            Self::Pickup => "pickup",
            Self::Dropoff => "dropoff",
            Self::End => "end",
            Self::Rest => "rest",
            Self::Break => "break",
            Self::Fuel => "fuel",
        };
        write!(f, "{s}")
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Stop {
    #[serde(rename = "type")]
    pub kind: StopType,
    pub label: String,
    /// Wall-clock time of day, `"HH:MM"`, hour taken mod 24.
    pub time: String,
    pub duration_h: f64,
    pub lat: f64,
    pub lng: f64,
    pub mileage_rounded: i64,
    pub day: u32,
}

/// One of the four FMCSA duty statuses. Every minute of every day is in
/// exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DutyStatus {
    OffDuty,
    SleeperBerth,
    Driving,
    OnDuty,
}

impl DutyStatus {
    pub const ALL: [DutyStatus; 4] = [
        DutyStatus::OffDuty,
        DutyStatus::SleeperBerth,
        DutyStatus::Driving,
        DutyStatus::OnDuty,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::OffDuty => "offDuty",
            Self::SleeperBerth => "sleeperBerth",
            Self::Driving => "driving",
            Self::OnDuty => "onDuty",
        }
    }
}

/// A duty-status interval used internally to project daily logs.
///
/// Always confined to a single day: `0 <= start_h < end_h <= 24`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    pub day: u32,
    pub start_h: f64,
    pub end_h: f64,
    pub status: DutyStatus,
}

/// A single `{start, end}` interval within one day's duty log.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Interval {
    pub start: f64,
    pub end: f64,
}

/// Four disjoint, ordered interval lists (one per duty status) that
/// partition a 24-hour day, plus per-status totals.
#[derive(Debug, Clone, Serialize)]
pub struct DayLog {
    pub off_duty: Vec<Interval>,
    pub sleeper_berth: Vec<Interval>,
    pub driving: Vec<Interval>,
    pub on_duty: Vec<Interval>,
    pub totals: DayTotals,
}

#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct DayTotals {
    pub off_duty: f64,
    pub sleeper_berth: f64,
    pub driving: f64,
    pub on_duty: f64,
}

impl DayTotals {
    pub fn sum(&self) -> f64 {
        self.off_duty + self.sleeper_berth + self.driving + self.on_duty
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Day {
    pub day: u32,
    /// ISO calendar date, `today + (day - 1)`.
    pub date: String,
    pub stops: Vec<Stop>,
    pub log: DayLog,
}

/// The cycle-overrun warning attached when `finalCycle > 70`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripWarning {
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
    pub excess_hours: f64,
    pub recommendation: String,
}

/// The finished, assembled trip schedule.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripResult {
    pub name: String,
    pub origin: Location,
    pub pickup: Location,
    pub dropoff: Location,
    pub cycle_hours_used: f64,
    pub cycle_hours_actual: f64,
    pub total_miles: i64,
    pub total_days: u32,
    pub total_driving_hours: f64,
    pub total_on_duty_hours: f64,
    pub days: Vec<Day>,
    pub route: RouteWaypoints,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<TripWarning>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RouteWaypoints {
    pub waypoints: Vec<Location>,
}
