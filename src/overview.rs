//! Overview command: render the duty schedule around a query date.

use std::io::Write;

use anyhow::{Context, Result};
use chrono::Local;
use tracing::{info, info_span};

use rota_rotation::RotationEngine;

use crate::cli::Cli;
use crate::config::RotaConfig;
use crate::convert;
use crate::report;

/// Run the schedule overview.
pub fn run(cli: Cli) -> Result<()> {
    let _cmd = info_span!("overview").entered();

    // 1. Load optional TOML config
    let config: RotaConfig = if let Some(ref path) = cli.config {
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")?
    } else {
        RotaConfig::default()
    };

    // 2. Resolve the query date (the only wall-clock read)
    let today = cli.date.unwrap_or_else(|| Local::now().date_naive());

    // 3. Build the engine
    let rotation_cfg = convert::build_rotation_config(&config.rotation, &cli, today)?;
    info!(
        anchor = %rotation_cfg.anchor(),
        cycle_length = rotation_cfg.cycle_length(),
        starting_crew = %rotation_cfg.starting_crew(),
        "rotation configured"
    );
    let engine = RotationEngine::new(rotation_cfg);

    // 4. Render to stdout
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    report::write_year_overview(&mut out, &engine, today).context("failed to write schedule")?;
    out.flush()?;

    Ok(())
}
