//! The rotation engine: pure date-to-duty arithmetic.

use chrono::{Days, NaiveDate};

use crate::config::RotationConfig;
use crate::day::DayStatus;
use crate::entry::ScheduleEntry;

/// Derives duty assignments from a [`RotationConfig`].
///
/// All operations are pure functions of the configuration and the input
/// date. The engine holds no mutable state and never consults a clock, so
/// it is safe to share across threads.
#[derive(Debug, Clone, Copy)]
pub struct RotationEngine {
    config: RotationConfig,
}

impl RotationEngine {
    /// Creates an engine for the given configuration.
    pub fn new(config: RotationConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this engine was built with.
    pub fn config(&self) -> RotationConfig {
        self.config
    }

    /// Returns the duty assignment for `query_date`.
    ///
    /// Defined for every date, including dates before the anchor: the
    /// block index is computed with floor division, so one day before the
    /// anchor falls in block -1, not block 0.
    pub fn crew_status(&self, query_date: NaiveDate) -> DayStatus {
        let days_since_anchor = (query_date - self.config.anchor()).num_days();
        let block_index = days_since_anchor.div_euclid(i64::from(self.config.cycle_length()));
        let working = if block_index.rem_euclid(2) == 0 {
            self.config.starting_crew()
        } else {
            self.config.starting_crew().other()
        };
        DayStatus::new(working)
    }

    /// Returns the schedule from `start_date` to `end_date` inclusive.
    ///
    /// Emits two entries per date in ascending date order, Red before
    /// Blue, both carrying that date's [`crew_status`](Self::crew_status)
    /// result. An inverted range (`start_date > end_date`) yields an empty
    /// vector.
    pub fn schedule_range(&self, start_date: NaiveDate, end_date: NaiveDate) -> Vec<ScheduleEntry> {
        if start_date > end_date {
            return Vec::new();
        }
        let n_days = (end_date - start_date).num_days() as usize + 1;
        let mut schedule = Vec::with_capacity(2 * n_days);
        let mut current = start_date;
        while current <= end_date {
            let day = self.crew_status(current);
            for (crew, status) in day.iter() {
                schedule.push(ScheduleEntry::new(crew, status, current));
            }
            match current.succ_opt() {
                Some(next) => current = next,
                None => break,
            }
        }
        schedule
    }

    /// Returns the date of the next crew transition strictly after
    /// `from_date`.
    ///
    /// The result is at most one full cycle later; when `from_date` is
    /// itself a boundary day the change reported is the following one, a
    /// full cycle ahead.
    pub fn next_crew_change(&self, from_date: NaiveDate) -> NaiveDate {
        let cycle = i64::from(self.config.cycle_length());
        let days_since_anchor = (from_date - self.config.anchor()).num_days();
        // rem_euclid keeps day_in_block in 0..cycle regardless of sign, so
        // days_until_boundary is always in 1..=cycle.
        let day_in_block = days_since_anchor.rem_euclid(cycle);
        let days_until_boundary = cycle - day_in_block;
        from_date + Days::new(days_until_boundary as u64)
    }
}
