//! Stability analysis over parsed sensor records
//!
//! This module ranks sensors by how far their readings stray from their own
//! mean and picks the most unstable one.
//!
//! ## Components
//!
//! - [`selector`] - Selection of the record with the largest maximum deviation
//! - [`report`] - Per-record summaries and the analysis report used for output

pub mod report;
pub mod selector;

#[cfg(test)]
pub mod tests;

pub use report::{AnalysisReport, analyze, summarize};
pub use selector::find_most_unstable;
