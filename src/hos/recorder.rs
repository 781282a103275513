//! Event recorder: the append-only duty-status log plus the scheduler's
//! wall-clock cursor.

use super::types::{DutyStatus, Event};

/// Tracks the scheduler's current `(day, time)` cursor and records
/// duty-status events, splitting any activity that crosses midnight
/// into per-day fragments.
///
/// Day numbering starts at 1. `current_time` is hours since midnight
/// on `current_day`, always kept in `[0, 24)` between calls.
#[derive(Debug, Clone)]
pub struct EventRecorder {
    events: Vec<Event>,
    current_day: u32,
    current_time: f64,
}

impl EventRecorder {
    /// Creates a recorder with the cursor at `(day 1, start_time)`.
    pub fn new(start_time: f64) -> Self {
        assert!((0.0..24.0).contains(&start_time));
        Self {
            events: Vec::new(),
            current_day: 1,
            current_time: start_time,
        }
    }

    pub fn current_day(&self) -> u32 {
        self.current_day
    }

    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Records `duration_h` of `status` starting at the cursor,
    /// splitting across midnights, and advances the cursor.
    ///
    /// A zero-duration call records nothing and leaves the cursor
    /// unchanged.
    pub fn record(&mut self, status: DutyStatus, duration_h: f64) {
        let mut remaining = duration_h;
        if remaining <= 0.0 {
            return;
        }

        while remaining > 0.0 {
            let until_midnight = 24.0 - self.current_time;
            if remaining > until_midnight {
                self.events.push(Event {
                    day: self.current_day,
                    start_h: self.current_time,
                    end_h: 24.0,
                    status,
                });
                remaining -= until_midnight;
                self.current_day += 1;
                self.current_time = 0.0;
            } else {
                let end = self.current_time + remaining;
                self.events.push(Event {
                    day: self.current_day,
                    start_h: self.current_time,
                    end_h: end,
                    status,
                });
                self.current_time = end;
                remaining = 0.0;
            }
        }

        // A duration landing exactly on midnight leaves current_time at
        // 24.0; normalize so the cursor always satisfies `< 24`.
        if self.current_time >= 24.0 {
            self.current_time -= 24.0;
            self.current_day += 1;
        }
    }
}
