//! Batch parsing of telemetry lines
//!
//! [`parse`] is the silent path: malformed lines vanish and nothing is
//! logged. [`parse_with_stats`] produces the same records and additionally
//! reports every dropped line.

use super::line_parser::parse_line;
use super::stats::{ParseResult, ParseStats};
use crate::app::models::SensorRecord;
use tracing::debug;

/// Parse a batch of telemetry lines, dropping malformed ones
///
/// Output order follows input order.
pub fn parse<I>(lines: I) -> Vec<SensorRecord>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    lines
        .into_iter()
        .filter_map(|line| parse_line(line.as_ref()).ok())
        .collect()
}

/// Parse a batch of telemetry lines and collect statistics on dropped lines
pub fn parse_with_stats<I>(lines: I) -> ParseResult
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut records = Vec::new();
    let mut stats = ParseStats::new();

    for (index, line) in lines.into_iter().enumerate() {
        let line_number = index + 1;
        stats.total_lines += 1;

        match parse_line(line.as_ref()) {
            Ok(record) => {
                stats.records_parsed += 1;
                records.push(record);
            }
            Err(reason) => {
                debug!("Skipping line {}: {}", line_number, reason);
                stats.add_skipped(line_number, reason);
            }
        }
    }

    debug!("{}", stats.summary());

    ParseResult { records, stats }
}
