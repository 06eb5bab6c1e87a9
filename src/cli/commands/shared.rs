//! Shared components for CLI commands
//!
//! Configuration resolution, logging setup and the parse/analyze/render
//! pipeline used by every command.

use super::render::{ReportOutput, render_human, render_json};
use crate::app::services::stability_analyzer::analyze;
use crate::app::services::telemetry_parser::{parse, parse_with_stats};
use crate::cli::args::ReportArgs;
use crate::config::{Config, OutputFormat};
use crate::constants::LOG_TARGET;
use crate::Result;
use tracing::{debug, info};

/// Resolve configuration using layered approach (defaults -> file -> env -> args)
pub fn load_configuration(args: &ReportArgs) -> Result<Config> {
    args.validate()?;

    let mut config = Config::load_layered(args.config_file.as_deref())?;
    apply_cli_overrides(&mut config, args);

    // Final validation
    config.validate()?;
    Ok(config)
}

/// Apply CLI argument overrides to configuration
pub fn apply_cli_overrides(config: &mut Config, args: &ReportArgs) {
    if let Some(format) = args.format {
        config.report.format = format;
    }
    if let Some(precision) = args.precision {
        config.report.precision = precision;
    }

    // Flags can only switch these on
    config.report.show_all |= args.all;
    config.report.show_skipped |= args.show_skipped;

    // Verbosity flags win over the configured level when given
    if args.quiet || args.verbose > 0 {
        config.logging.level = args.get_log_level().to_string();
    }
}

/// Set up structured logging on stderr
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn setup_logging(config: &Config) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = &config.logging.level;

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", LOG_TARGET, log_level)));

    let initialized = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .try_init();

    if initialized.is_ok() {
        debug!("Logging initialized at level: {}", log_level);
    }
}

/// Parse a batch, analyze it and render the report for the configured format
pub fn run_pipeline(lines: &[String], config: &Config, use_color: bool) -> Result<String> {
    let report_config = &config.report;

    let (records, skipped) = if report_config.show_skipped {
        let result = parse_with_stats(lines);
        info!("{}", result.stats.summary());
        (result.records, Some(result.stats.skipped))
    } else {
        (parse(lines), None)
    };
    let lines_skipped = lines.len() - records.len();

    let report = analyze(&records, report_config.show_all)?;

    let output = ReportOutput {
        report: &report,
        lines_skipped,
        skipped: skipped.as_deref(),
    };

    match report_config.format {
        OutputFormat::Human => Ok(render_human(&output, report_config.precision, use_color)),
        OutputFormat::Json => render_json(&output),
    }
}
