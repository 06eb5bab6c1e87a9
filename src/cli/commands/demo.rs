//! Demo command implementation
//!
//! Runs the analysis over the built-in reference batch, which includes one
//! malformed line.

use super::shared::{load_configuration, run_pipeline, setup_logging};
use crate::cli::args::ReportArgs;
use crate::constants::REFERENCE_BATCH;
use anyhow::{Context, Result};
use tracing::info;

/// Demo command runner
pub fn run_demo(args: ReportArgs, use_color: bool) -> Result<String> {
    let config = load_configuration(&args).context("Invalid configuration")?;
    setup_logging(&config);

    let lines: Vec<String> = REFERENCE_BATCH.iter().map(|line| line.to_string()).collect();

    info!("Analyzing built-in reference batch ({} lines)", lines.len());
    let output = run_pipeline(&lines, &config, use_color)?;
    Ok(output)
}
