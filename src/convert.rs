//! Pure conversion functions: TOML/CLI values -> rotation crate config types.

use anyhow::{Result, bail};
use chrono::{Datelike, NaiveDate};

use rota_rotation::{Crew, RotationConfig};

use crate::cli::Cli;
use crate::config::RotationToml;

/// Parses a crew name string into the corresponding enum variant.
pub fn parse_crew(s: &str) -> Result<Crew> {
    match s.to_lowercase().as_str() {
        "red" => Ok(Crew::Red),
        "blue" => Ok(Crew::Blue),
        other => bail!("unknown crew: {other:?} (expected \"red\" or \"blue\")"),
    }
}

/// Builds a [`RotationConfig`] from the TOML section and the CLI flags.
///
/// CLI flags override config-file values. An unset anchor defaults to
/// January 1 of `query_date`'s year, so a bare invocation reproduces the
/// schedule anchored to the displayed year.
pub fn build_rotation_config(
    rotation: &RotationToml,
    cli: &Cli,
    query_date: NaiveDate,
) -> Result<RotationConfig> {
    let cycle_length = cli.cycle_length.unwrap_or(rotation.cycle_length);
    let anchor = cli.anchor.or(rotation.anchor).unwrap_or_else(|| {
        NaiveDate::from_ymd_opt(query_date.year(), 1, 1).expect("Jan 1 is valid in every year")
    });
    let starting_crew = match cli.starting_crew.as_deref() {
        Some(name) => parse_crew(name)?,
        None => parse_crew(&rotation.starting_crew)?,
    };
    Ok(RotationConfig::new(anchor, starting_crew, cycle_length)?)
}
