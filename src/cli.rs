use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;

/// Rota two-crew rotational duty schedule calculator.
#[derive(Debug, Parser)]
#[command(
    name = "rota",
    version,
    about = "Two-crew rotational duty schedule calculator"
)]
pub struct Cli {
    /// Date to report on (YYYY-MM-DD). Defaults to today.
    pub date: Option<NaiveDate>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override rotation cycle length in days from config.
    #[arg(long)]
    pub cycle_length: Option<u32>,

    /// Override the anchor date (first day of block 0) from config.
    #[arg(long)]
    pub anchor: Option<NaiveDate>,

    /// Override the starting crew ("red" or "blue") from config.
    #[arg(long)]
    pub starting_crew: Option<String>,
}
