//! Per-date crew-to-status assignment.

use crate::crew::{Crew, Status};

/// The crew-to-status assignment for a single date.
///
/// Exactly one crew is working and the other is off duty; both crews are
/// always covered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayStatus {
    working: Crew,
}

impl DayStatus {
    pub(crate) fn new(working: Crew) -> Self {
        Self { working }
    }

    /// Returns the crew on duty.
    pub fn working_crew(self) -> Crew {
        self.working
    }

    /// Returns the crew off duty.
    pub fn off_duty_crew(self) -> Crew {
        self.working.other()
    }

    /// Returns the status of the given crew.
    pub fn status_of(self, crew: Crew) -> Status {
        if crew == self.working {
            Status::Working
        } else {
            Status::OffDuty
        }
    }

    /// Iterates `(crew, status)` pairs in the fixed crew order
    /// (Red before Blue).
    pub fn iter(self) -> impl Iterator<Item = (Crew, Status)> {
        Crew::BOTH.into_iter().map(move |crew| (crew, self.status_of(crew)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_crew_working() {
        for working in Crew::BOTH {
            let day = DayStatus::new(working);
            assert_eq!(day.status_of(working), Status::Working);
            assert_eq!(day.status_of(working.other()), Status::OffDuty);
        }
    }

    #[test]
    fn working_and_off_duty_are_opposite() {
        let day = DayStatus::new(Crew::Blue);
        assert_eq!(day.working_crew(), Crew::Blue);
        assert_eq!(day.off_duty_crew(), Crew::Red);
    }

    #[test]
    fn iter_covers_both_crews_in_order() {
        let day = DayStatus::new(Crew::Blue);
        let pairs: Vec<_> = day.iter().collect();
        assert_eq!(
            pairs,
            vec![
                (Crew::Red, Status::OffDuty),
                (Crew::Blue, Status::Working),
            ]
        );
    }
}
