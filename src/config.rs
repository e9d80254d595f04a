use chrono::NaiveDate;
use serde::Deserialize;

/// Top-level rota configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct RotaConfig {
    /// Rotation settings.
    #[serde(default)]
    pub rotation: RotationToml,
}

/// `[rotation]` section of the TOML configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RotationToml {
    /// Cycle length in days.
    #[serde(default = "default_cycle_length")]
    pub cycle_length: u32,

    /// Anchor date: first day of block 0, on which the starting crew
    /// works. Defaults to January 1 of the query year when unset.
    #[serde(default)]
    pub anchor: Option<NaiveDate>,

    /// Starting crew name ("red" or "blue").
    #[serde(default = "default_starting_crew")]
    pub starting_crew: String,
}

impl Default for RotationToml {
    fn default() -> Self {
        Self {
            cycle_length: default_cycle_length(),
            anchor: None,
            starting_crew: default_starting_crew(),
        }
    }
}

fn default_cycle_length() -> u32 {
    rota_rotation::DEFAULT_CYCLE_LENGTH
}

fn default_starting_crew() -> String {
    "blue".to_string()
}
