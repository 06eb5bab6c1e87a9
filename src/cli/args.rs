//! Command-line argument definitions for sensor stability analysis
//!
//! This module defines the CLI interface using the clap derive API.

use crate::config::OutputFormat;
use crate::constants::MAX_PRECISION;
use crate::{Error, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the sensor stability analyzer
///
/// Reads `id,val1,val2,...` telemetry lines and reports the sensor whose
/// readings deviate furthest from their own mean.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "sensor-stability",
    version,
    about = "Find the most unstable sensor in a batch of telemetry lines",
    long_about = "Parses line-oriented sensor telemetry (id,val1,val2,...), drops malformed lines, \
                  and reports the sensor with the greatest deviation from its own mean."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Analyze telemetry lines from files or stdin
    Analyze(AnalyzeArgs),
    /// Analyze the built-in reference batch
    Demo(ReportArgs),
}

/// Arguments for the analyze command
#[derive(Debug, Clone, Parser)]
pub struct AnalyzeArgs {
    /// Input files with one telemetry line per row
    ///
    /// Files are read in order and their lines concatenated into a single
    /// batch. Use `-` or pass no files to read from stdin.
    #[arg(value_name = "FILE")]
    pub inputs: Vec<PathBuf>,

    #[command(flatten)]
    pub report: ReportArgs,
}

/// Reporting and logging options shared by all commands
#[derive(Debug, Clone, Parser)]
pub struct ReportArgs {
    /// Output format (overrides config file and environment)
    #[arg(long = "format", value_enum, help = "Output format")]
    pub format: Option<OutputFormat>,

    /// Decimal places for averages and deviations
    #[arg(long = "precision", value_name = "N")]
    pub precision: Option<usize>,

    /// Also list statistics for every sensor
    #[arg(long = "all")]
    pub all: bool,

    /// List lines that were skipped as malformed, with the reason
    #[arg(long = "show-skipped")]
    pub show_skipped: bool,

    /// JSON configuration file
    #[arg(long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Increase logging verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Commands {
    /// Reporting options of the selected command
    pub fn report_args(&self) -> &ReportArgs {
        match self {
            Commands::Analyze(args) => &args.report,
            Commands::Demo(args) => args,
        }
    }
}

impl Default for ReportArgs {
    fn default() -> Self {
        Self {
            format: None,
            precision: None,
            all: false,
            show_skipped: false,
            config_file: None,
            verbose: 0,
            quiet: false,
        }
    }
}

impl ReportArgs {
    /// Validate argument values that clap cannot check on its own
    pub fn validate(&self) -> Result<()> {
        if let Some(precision) = self.precision {
            if precision > MAX_PRECISION {
                return Err(Error::configuration(format!(
                    "--precision must be at most {}, got {}",
                    MAX_PRECISION, precision
                )));
            }
        }

        if let Some(config_file) = &self.config_file {
            if !config_file.is_file() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        Ok(())
    }

    /// Get the log level implied by the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}
