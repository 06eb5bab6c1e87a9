//! Report rendering for human and JSON output

use crate::app::services::stability_analyzer::AnalysisReport;
use crate::app::services::telemetry_parser::SkippedLine;
use crate::constants::NO_VALID_DATA_MESSAGE;
use crate::{Error, Result};
use colored::Colorize;
use serde::Serialize;
use std::fmt::Write;

/// Everything a command prints about one analysis pass
#[derive(Debug, Serialize)]
pub struct ReportOutput<'a> {
    #[serde(flatten)]
    pub report: &'a AnalysisReport,

    /// Number of input lines dropped as malformed
    pub lines_skipped: usize,

    /// Skipped line details, present only when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skipped: Option<&'a [SkippedLine]>,
}

/// Render a human-readable report, one item per line
pub fn render_human(output: &ReportOutput<'_>, precision: usize, use_color: bool) -> String {
    let report = output.report;
    let mut text = String::new();

    match &report.most_unstable {
        Some(summary) => {
            let headline = format!("Sensor {} is the most unstable.", summary.id);
            let headline = if use_color {
                headline.bright_red().bold().to_string()
            } else {
                headline
            };
            let _ = writeln!(text, "{}", headline);
            let _ = writeln!(text, "Average: {:.*}", precision, summary.average);
            let _ = writeln!(text, "Max deviation: {:.*}", precision, summary.max_deviation);
        }
        None => {
            let _ = writeln!(text, "{}", NO_VALID_DATA_MESSAGE);
        }
    }

    if !report.sensors.is_empty() {
        let _ = writeln!(text);
        let _ = writeln!(text, "All sensors ({} analyzed):", report.records_analyzed);
        for sensor in &report.sensors {
            let _ = writeln!(
                text,
                "  Sensor {}: {} readings, average {:.*}, max deviation {:.*}",
                sensor.id,
                sensor.reading_count,
                precision,
                sensor.average,
                precision,
                sensor.max_deviation
            );
        }
    }

    if let Some(skipped) = output.skipped {
        let _ = writeln!(text);
        let heading = format!("Skipped lines ({}):", skipped.len());
        let heading = if use_color {
            heading.yellow().to_string()
        } else {
            heading
        };
        let _ = writeln!(text, "{}", heading);
        for line in skipped {
            let _ = writeln!(text, "  line {}: {}", line.line_number, line.reason);
        }
    }

    text
}

/// Render the report as pretty-printed JSON
///
/// Numbers are emitted unrounded; precision only applies to human output.
pub fn render_json(output: &ReportOutput<'_>) -> Result<String> {
    let mut json = serde_json::to_string_pretty(output)
        .map_err(|e| Error::serialization("Failed to serialize analysis report", e))?;
    json.push('\n');
    Ok(json)
}
