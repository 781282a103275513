//! Daily-log projector: turns the scheduler's flat event stream into
//! per-day duty-status strips ready for rendering as an FMCSA log grid.

use std::collections::BTreeMap;

use super::types::{DayLog, DayTotals, DutyStatus, Event, Interval};

/// Adjacent fragments of the same status within this many hours of each
/// other are merged into one interval (floating-point slack from the
/// scheduler's arithmetic, not a real gap).
const MERGE_EPSILON_H: f64 = 0.01;

/// A day's total duty hours must land within this many hours of 24 or
/// the gap is filled with off-duty time.
const DAY_TOTAL_TOLERANCE_H: f64 = 0.1;

/// Groups `events` by day and builds one [`DayLog`] per day that has at
/// least one event, covering `1..=last_day` so that a day with no
/// recorded activity still gets an all-off-duty log.
pub fn project(events: &[Event]) -> BTreeMap<u32, DayLog> {
    let mut by_day: BTreeMap<u32, Vec<Event>> = BTreeMap::new();
    for &e in events {
        by_day.entry(e.day).or_default().push(e);
    }

    let last_day = by_day.keys().next_back().copied().unwrap_or(1);
    let mut logs = BTreeMap::new();
    for day in 1..=last_day {
        let day_events = by_day.get(&day).cloned().unwrap_or_default();
        logs.insert(day, project_day(&day_events));
    }
    logs
}

fn project_day(events: &[Event]) -> DayLog {
    let mut buckets: BTreeMap<DutyStatus, Vec<Interval>> = BTreeMap::new();
    for status in DutyStatus::ALL {
        buckets.insert(status, Vec::new());
    }

    let mut sorted: Vec<Event> = events.to_vec();
    sorted.sort_by(|a, b| a.start_h.partial_cmp(&b.start_h).unwrap());

    for e in &sorted {
        let list = buckets.get_mut(&e.status).unwrap();
        match list.last_mut() {
            Some(last) if (e.start_h - last.end) < MERGE_EPSILON_H => {
                last.end = e.end_h;
            }
            _ => list.push(Interval {
                start: e.start_h,
                end: e.end_h,
            }),
        }
    }

    fill_gap(&mut buckets, &sorted);

    let totals = DayTotals {
        off_duty: sum_hours(&buckets[&DutyStatus::OffDuty]),
        sleeper_berth: sum_hours(&buckets[&DutyStatus::SleeperBerth]),
        driving: sum_hours(&buckets[&DutyStatus::Driving]),
        on_duty: sum_hours(&buckets[&DutyStatus::OnDuty]),
    };

    DayLog {
        off_duty: round_intervals(buckets.remove(&DutyStatus::OffDuty).unwrap()),
        sleeper_berth: round_intervals(buckets.remove(&DutyStatus::SleeperBerth).unwrap()),
        driving: round_intervals(buckets.remove(&DutyStatus::Driving).unwrap()),
        on_duty: round_intervals(buckets.remove(&DutyStatus::OnDuty).unwrap()),
        totals: DayTotals {
            off_duty: round1(totals.off_duty),
            sleeper_berth: round1(totals.sleeper_berth),
            driving: round1(totals.driving),
            on_duty: round1(totals.on_duty),
        },
    }
}

/// If a day's recorded activity doesn't add up to ~24h (a day with no
/// events at all, or one that ends early because the trip itself
/// ended), the remainder is off-duty time.
fn fill_gap(buckets: &mut BTreeMap<DutyStatus, Vec<Interval>>, sorted: &[Event]) {
    let covered: f64 = sorted.iter().map(|e| e.end_h - e.start_h).sum();
    let gap = 24.0 - covered;
    if gap.abs() < DAY_TOTAL_TOLERANCE_H {
        return;
    }

    let last_end = sorted.last().map(|e| e.end_h).unwrap_or(0.0);
    let off_duty = buckets.get_mut(&DutyStatus::OffDuty).unwrap();
    match off_duty.last_mut() {
        Some(last) if (last_end - last.end) < MERGE_EPSILON_H => {
            last.end = 24.0;
        }
        _ => off_duty.push(Interval {
            start: last_end,
            end: 24.0,
        }),
    }
}

fn sum_hours(intervals: &[Interval]) -> f64 {
    intervals.iter().map(|i| i.end - i.start).sum()
}

fn round_intervals(intervals: Vec<Interval>) -> Vec<Interval> {
    intervals
        .into_iter()
        .map(|i| Interval {
            start: round2(i.start),
            end: round2(i.end),
        })
        .collect()
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}
