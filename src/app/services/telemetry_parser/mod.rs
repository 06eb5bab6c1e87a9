//! Telemetry line parser for sensor readings
//!
//! Converts raw `id,val1,val2,...` lines into [`SensorRecord`]s. Malformed
//! lines are dropped without surfacing an error; callers that want to know
//! what was dropped can use [`parse_with_stats`] instead of [`parse`].
//!
//! ## Architecture
//!
//! - [`line_parser`] - Single line validation and conversion
//! - [`parser`] - Batch parsing with and without diagnostics
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use sensor_stability::app::services::telemetry_parser::{parse, parse_with_stats};
//!
//! let lines = ["1,20.0,21.5", "bad line", "2,7.0"];
//!
//! let records = parse(&lines);
//! assert_eq!(records.len(), 2);
//!
//! let result = parse_with_stats(&lines);
//! assert_eq!(result.stats.lines_skipped, 1);
//! ```
//!
//! [`SensorRecord`]: crate::app::models::SensorRecord

pub mod line_parser;
pub mod parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use line_parser::{SkipReason, parse_line};
pub use parser::{parse, parse_with_stats};
pub use stats::{ParseResult, ParseStats, SkippedLine};
