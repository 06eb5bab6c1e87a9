//! Analyze command implementation
//!
//! Reads telemetry lines from files or stdin and reports the most unstable
//! sensor.

use super::shared::{load_configuration, run_pipeline, setup_logging};
use crate::cli::args::AnalyzeArgs;
use crate::cli::input::{InputSource, load_batch};
use anyhow::{Context, Result};
use tracing::{debug, info};

/// Analyze command runner
pub fn run_analyze(args: AnalyzeArgs, use_color: bool) -> Result<String> {
    let config = load_configuration(&args.report).context("Invalid configuration")?;
    setup_logging(&config);

    debug!("Analyze arguments: {:?}", args);
    debug!("Resolved configuration: {:?}", config);

    let sources = InputSource::from_paths(&args.inputs);
    let lines = load_batch(&sources)?;

    info!("Analyzing {} telemetry lines", lines.len());
    let output = run_pipeline(&lines, &config, use_color)?;
    Ok(output)
}
