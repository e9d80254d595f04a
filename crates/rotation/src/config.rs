//! Immutable rotation parameters.

use chrono::NaiveDate;

use crate::crew::Crew;
use crate::error::RotationError;

/// Default cycle length in days.
pub const DEFAULT_CYCLE_LENGTH: u32 = 14;

/// Immutable rotation parameters: cycle length, anchor date, and starting
/// crew.
///
/// The anchor date is the first day of block 0, on which the starting crew
/// is working. It is an explicit value, never derived from the clock, so
/// independently configured engines and deterministic tests need no
/// mocking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationConfig {
    cycle_length: u32,
    anchor: NaiveDate,
    starting_crew: Crew,
}

impl RotationConfig {
    /// Creates a new `RotationConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`RotationError::InvalidCycleLength`] if `cycle_length` is
    /// zero.
    pub fn new(
        anchor: NaiveDate,
        starting_crew: Crew,
        cycle_length: u32,
    ) -> Result<Self, RotationError> {
        if cycle_length == 0 {
            return Err(RotationError::InvalidCycleLength { cycle_length });
        }
        Ok(Self {
            cycle_length,
            anchor,
            starting_crew,
        })
    }

    /// Returns the cycle length in days (always positive).
    pub fn cycle_length(self) -> u32 {
        self.cycle_length
    }

    /// Returns the anchor date (first day of block 0).
    pub fn anchor(self) -> NaiveDate {
        self.anchor
    }

    /// Returns the crew working on the anchor date.
    pub fn starting_crew(self) -> Crew {
        self.starting_crew
    }
}
