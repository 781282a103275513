//! The HOS scheduler: a state machine that walks a two-leg route while
//! interleaving driving, breaks, rests, fueling, and on-duty
//! loading/unloading under the FMCSA's simultaneous duty limits.
//!
//! Mutable per-duty-period counters (`day_driving`, `day_duty`,
//! `driving_since_break`) and the event recorder's wall clock are owned
//! by [`Scheduler`] for the lifetime of a single [`Scheduler::plan`]
//! call; nothing survives past the returned [`SchedulerOutput`].

use super::recorder::EventRecorder;
use super::types::{DutyStatus, Event, Location, Route, Stop, StopType};
use crate::route::interpolate;

/// Maximum driving hours within a duty period before a 10-hour rest.
const MAX_DRIVING: f64 = 11.0;
/// Maximum driving + on-duty hours within a duty period.
const MAX_DUTY: f64 = 14.0;
/// Driving hours after which a 30-minute break is required.
const BREAK_AFTER: f64 = 8.0;
const BREAK_DUR: f64 = 0.5;
const REST_DUR: f64 = 10.0;
/// A fuel stop is due every this many miles.
const FUEL_EVERY_MI: f64 = 1000.0;
const FUEL_DUR: f64 = 0.5;
const PICKUP_DUR: f64 = 1.0;
const DROPOFF_DUR: f64 = 1.0;
const SPEED_MPH: f64 = 55.0;
/// Wall-clock hour the plan begins at on day 1.
const DAY_START: f64 = 6.0;

/// A tagged operation fed to [`Scheduler::apply`], per the counter
/// effects table in the scheduling spec. Keeps the counter arithmetic
/// in one place instead of scattered across the driving loop.
enum Op {
    Drive { hours: f64, miles: f64 },
    OnDuty { hours: f64 },
    Break,
    Rest,
}

/// Everything the scheduler produced for one trip.
pub struct SchedulerOutput {
    pub stops: Vec<Stop>,
    pub events: Vec<Event>,
    pub final_mileage: f64,
}

pub struct Scheduler {
    recorder: EventRecorder,
    day_driving: f64,
    day_duty: f64,
    driving_since_break: f64,
    current_mileage: f64,
    /// Mirrors the source's own cycle-hour bookkeeping. Breaks do not
    /// increment it (an intentional asymmetry — see `DESIGN.md`); the
    /// trip assembler does not read this value, deriving cycle totals
    /// from the projected day logs instead.
    cycle_hours_used: f64,
}

impl Scheduler {
    fn new(initial_cycle_hours_used: f64) -> Self {
        let mut recorder = EventRecorder::new(0.0);
        recorder.record(DutyStatus::OffDuty, DAY_START);
        Self {
            recorder,
            day_driving: 0.0,
            day_duty: 0.0,
            driving_since_break: 0.0,
            current_mileage: 0.0,
            cycle_hours_used: initial_cycle_hours_used,
        }
    }

    pub fn cycle_hours_used(&self) -> f64 {
        self.cycle_hours_used
    }

    /// Runs the full entry sequence (§4.4) for one trip and returns the
    /// stop list plus the recorded event log.
    pub fn plan(
        current: &Location,
        pickup: &Location,
        dropoff: &Location,
        route: &Route,
        initial_cycle_hours_used: f64,
    ) -> SchedulerOutput {
        let mut s = Self::new(initial_cycle_hours_used);
        let mut stops = Vec::new();

        stops.push(s.make_stop(StopType::Start, current.clone(), 0.0));

        s.drive_leg(&mut stops, &route.legs[0]);

        stops.push(s.make_stop(StopType::Pickup, pickup.clone(), PICKUP_DUR));
        s.apply(Op::OnDuty { hours: PICKUP_DUR });

        s.drive_leg(&mut stops, &route.legs[1]);

        stops.push(s.make_stop(StopType::Dropoff, dropoff.clone(), DROPOFF_DUR));
        s.apply(Op::OnDuty { hours: DROPOFF_DUR });

        stops.push(s.make_stop(StopType::End, dropoff.clone(), 0.0));
        let remaining_today = 24.0 - s.recorder.current_time();
        if remaining_today > 0.0 {
            s.recorder.record(DutyStatus::OffDuty, remaining_today);
        }

        SchedulerOutput {
            stops,
            events: s.recorder.events().to_vec(),
            final_mileage: s.current_mileage,
        }
    }

    fn make_stop(&self, kind: StopType, location: Location, duration_h: f64) -> Stop {
        Stop {
            kind,
            label: location.label,
            time: format_hhmm(self.recorder.current_time()),
            duration_h,
            lat: location.lat,
            lng: location.lng,
            mileage_rounded: self.current_mileage.round() as i64,
            day: self.recorder.current_day(),
        }
    }

    /// Drives the full length of one leg, inserting rests, breaks, and
    /// fuel stops as the counters demand (§4.4.1).
    fn drive_leg(&mut self, stops: &mut Vec<Stop>, leg: &super::types::Leg) {
        let mut remaining = leg.distance_mi;

        while remaining > 0.0 {
            let available = (MAX_DRIVING - self.day_driving)
                .min(MAX_DUTY - self.day_duty)
                .min(BREAK_AFTER - self.driving_since_break);

            if available <= 0.0 {
                let progress = entry_progress(remaining, leg.distance_mi);
                let loc = interpolate(&leg.from, &leg.to, progress, self.current_mileage);
                stops.push(self.make_stop(StopType::Rest, loc, REST_DUR));
                self.apply(Op::Rest);
                continue;
            }

            if self.driving_since_break >= BREAK_AFTER {
                let progress = entry_progress(remaining, leg.distance_mi);
                let loc = interpolate(&leg.from, &leg.to, progress, self.current_mileage);
                stops.push(self.make_stop(StopType::Break, loc, BREAK_DUR));
                self.apply(Op::Break);
                continue;
            }

            let drive_dist = (available * SPEED_MPH).min(remaining);
            let next_fuel_mile =
                ((self.current_mileage / FUEL_EVERY_MI).floor() + 1.0) * FUEL_EVERY_MI;
            let miles_to_fuel = next_fuel_mile - self.current_mileage;

            if miles_to_fuel > 0.0 && miles_to_fuel < drive_dist {
                self.apply(Op::Drive {
                    hours: miles_to_fuel / SPEED_MPH,
                    miles: miles_to_fuel,
                });
                remaining -= miles_to_fuel;

                let progress = entry_progress(remaining, leg.distance_mi);
                let loc = interpolate(&leg.from, &leg.to, progress, self.current_mileage);
                stops.push(self.make_stop(StopType::Fuel, loc, FUEL_DUR));
                self.apply(Op::OnDuty { hours: FUEL_DUR });
                continue;
            }

            self.apply(Op::Drive {
                hours: drive_dist / SPEED_MPH,
                miles: drive_dist,
            });
            remaining -= drive_dist;
        }
    }

    fn apply(&mut self, op: Op) {
        match op {
            Op::Drive { hours, miles } => {
                self.recorder.record(DutyStatus::Driving, hours);
                self.day_driving += hours;
                self.day_duty += hours;
                self.driving_since_break += hours;
                self.current_mileage += miles;
                self.cycle_hours_used += hours;
            }
            Op::OnDuty { hours } => {
                self.recorder.record(DutyStatus::OnDuty, hours);
                self.day_duty += hours;
                self.cycle_hours_used += hours;
            }
            Op::Break => {
                self.recorder.record(DutyStatus::OnDuty, BREAK_DUR);
                self.driving_since_break = 0.0;
            }
            Op::Rest => {
                self.recorder.record(DutyStatus::SleeperBerth, REST_DUR);
                self.day_driving = 0.0;
                self.day_duty = 0.0;
                self.driving_since_break = 0.0;
            }
        }
    }
}

/// Progress `[0, 1]` of the leg already covered, used to place a
/// mid-leg stop at the driver's current position (the "entry" position
/// — no additional miles have been covered yet).
fn entry_progress(remaining: f64, leg_distance: f64) -> f64 {
    if leg_distance == 0.0 {
        0.0
    } else {
        1.0 - remaining / leg_distance
    }
}

fn format_hhmm(hours: f64) -> String {
    let total_minutes = (hours * 60.0).round() as i64;
    let h = (total_minutes / 60).rem_euclid(24);
    let m = total_minutes.rem_euclid(60);
    format!("{h:02}:{m:02}")
}
