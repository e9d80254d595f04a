//! Crew and duty-status enums.

use std::fmt;

/// One of the two rotating crews.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Crew {
    Red,
    Blue,
}

impl Crew {
    /// Both crews in the fixed presentation order (Red before Blue).
    pub const BOTH: [Crew; 2] = [Crew::Red, Crew::Blue];

    /// Returns the opposite crew.
    pub fn other(self) -> Self {
        match self {
            Crew::Red => Crew::Blue,
            Crew::Blue => Crew::Red,
        }
    }

    /// Returns the display name, e.g. `"Red Crew"`.
    pub fn name(self) -> &'static str {
        match self {
            Crew::Red => "Red Crew",
            Crew::Blue => "Blue Crew",
        }
    }
}

impl fmt::Display for Crew {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Duty status of a crew on a given date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Working,
    OffDuty,
}

impl Status {
    /// Returns the table label (`"WORKING"` / `"OFF_DUTY"`).
    pub fn label(self) -> &'static str {
        match self {
            Status::Working => "WORKING",
            Status::OffDuty => "OFF_DUTY",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}
