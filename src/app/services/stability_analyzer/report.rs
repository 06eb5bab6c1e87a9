//! Analysis report structures for presenting stability results
//!
//! The report carries computed numbers only; rounding and formatting are
//! left to the CLI layer.

use super::selector::find_most_unstable;
use crate::Result;
use crate::app::models::{SensorRecord, SensorSummary};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Outcome of a stability analysis pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Statistics of the most unstable sensor, `None` when there was no valid data
    pub most_unstable: Option<SensorSummary>,

    /// Number of records that took part in the analysis
    pub records_analyzed: usize,

    /// Per-sensor statistics in input order, only filled when requested
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub sensors: Vec<SensorSummary>,
}

impl AnalysisReport {
    /// Check whether the analysis found any valid data
    pub fn has_data(&self) -> bool {
        self.most_unstable.is_some()
    }
}

/// Compute statistics for every record, keeping input order
pub fn summarize(records: &[SensorRecord]) -> Result<Vec<SensorSummary>> {
    records.iter().map(SensorRecord::summary).collect()
}

/// Run the selector and build a report from its result
///
/// With `include_all` the report also lists the statistics of every record.
pub fn analyze(records: &[SensorRecord], include_all: bool) -> Result<AnalysisReport> {
    let most_unstable = find_most_unstable(records)?
        .map(SensorRecord::summary)
        .transpose()?;

    let sensors = if include_all {
        summarize(records)?
    } else {
        Vec::new()
    };

    if let Some(summary) = &most_unstable {
        debug!(
            "Sensor {} selected from {} records (max deviation {})",
            summary.id,
            records.len(),
            summary.max_deviation
        );
    } else {
        debug!("No records to analyze");
    }

    Ok(AnalysisReport {
        most_unstable,
        records_analyzed: records.len(),
        sensors,
    })
}
