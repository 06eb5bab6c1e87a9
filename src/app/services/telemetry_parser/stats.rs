//! Parsing statistics and result structures for telemetry parsing
//!
//! This module provides types for tracking how many lines were turned into
//! records and why the others were dropped.

use super::line_parser::SkipReason;
use crate::app::models::SensorRecord;
use serde::{Deserialize, Serialize};

/// Parsing result with records and basic statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Successfully parsed records, in input order
    pub records: Vec<SensorRecord>,

    /// Basic parsing statistics
    pub stats: ParseStats,
}

/// A line that was dropped by the parser
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedLine {
    /// 1-based position of the line in the input batch
    pub line_number: usize,

    /// Why the line was dropped
    pub reason: SkipReason,
}

/// Simple parsing statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseStats {
    /// Total number of lines encountered
    pub total_lines: usize,

    /// Number of records successfully parsed
    pub records_parsed: usize,

    /// Number of lines skipped as malformed
    pub lines_skipped: usize,

    /// Every skipped line with its reason
    pub skipped: Vec<SkippedLine>,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            total_lines: 0,
            records_parsed: 0,
            lines_skipped: 0,
            skipped: Vec::new(),
        }
    }

    /// Record a skipped line
    pub fn add_skipped(&mut self, line_number: usize, reason: SkipReason) {
        self.lines_skipped += 1;
        self.skipped.push(SkippedLine {
            line_number,
            reason,
        });
    }

    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_lines == 0 {
            0.0
        } else {
            (self.records_parsed as f64 / self.total_lines as f64) * 100.0
        }
    }

    /// Get a one-line summary of the parse
    pub fn summary(&self) -> String {
        format!(
            "Parsed {} of {} lines ({:.1}% success), {} skipped",
            self.records_parsed,
            self.total_lines,
            self.success_rate(),
            self.lines_skipped
        )
    }
}

impl Default for ParseStats {
    fn default() -> Self {
        Self::new()
    }
}
