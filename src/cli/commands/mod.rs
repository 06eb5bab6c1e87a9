//! Command implementations for the sensor stability CLI
//!
//! Each command is implemented in its own module; reporting and logging
//! setup shared between them live in [`shared`].

pub mod analyze;
pub mod demo;
pub mod render;
pub mod shared;

use crate::cli::args::Commands;
use anyhow::Result;

/// Main command runner
///
/// Dispatches to the subcommand handler and returns the rendered report.
/// `use_color` enables ANSI styling in human output.
pub fn run(command: Commands, use_color: bool) -> Result<String> {
    match command {
        Commands::Analyze(analyze_args) => analyze::run_analyze(analyze_args, use_color),
        Commands::Demo(report_args) => demo::run_demo(report_args, use_color),
    }
}
