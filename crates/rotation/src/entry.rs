//! Schedule entry record.

use chrono::NaiveDate;

use crate::crew::{Crew, Status};

/// One crew's duty status on one date.
///
/// Entries are produced by
/// [`RotationEngine::schedule_range`](crate::RotationEngine::schedule_range)
/// and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleEntry {
    crew: Crew,
    status: Status,
    date: NaiveDate,
}

impl ScheduleEntry {
    pub(crate) fn new(crew: Crew, status: Status, date: NaiveDate) -> Self {
        Self { crew, status, date }
    }

    /// Returns the crew this entry describes.
    pub fn crew(self) -> Crew {
        self.crew
    }

    /// Returns the crew's duty status on this date.
    pub fn status(self) -> Status {
        self.status
    }

    /// Returns the date.
    pub fn date(self) -> NaiveDate {
        self.date
    }
}
