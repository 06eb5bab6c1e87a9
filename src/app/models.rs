//! Core data models for sensor telemetry analysis
//!
//! This module defines the sensor record produced by the telemetry parser
//! together with the per-record statistics consumed by the analyzer and
//! the report layer.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// One parsed telemetry line: a sensor identifier and its readings
///
/// Identifiers are not required to be unique across a batch and are not
/// range checked. Readings keep their input order and are never modified
/// once the record is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorRecord {
    /// Sensor identifier from the first field of the line
    pub id: i64,

    /// Readings in input order
    values: Vec<f64>,
}

impl SensorRecord {
    /// Create a new record
    ///
    /// An empty `values` list is accepted here; statistics on such a record
    /// fail with [`Error::EmptyValues`].
    pub fn new(id: i64, values: Vec<f64>) -> Self {
        Self { id, values }
    }

    /// Readings in input order
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of readings held by this record
    pub fn reading_count(&self) -> usize {
        self.values.len()
    }

    /// Arithmetic mean of the readings
    pub fn average(&self) -> Result<f64> {
        if self.values.is_empty() {
            return Err(Error::empty_values(self.id));
        }
        Ok(self.values.iter().sum::<f64>() / self.values.len() as f64)
    }

    /// Largest absolute difference between any reading and the average
    pub fn max_deviation(&self) -> Result<f64> {
        let average = self.average()?;
        let mut deviations = self.values.iter().map(|value| (value - average).abs());

        // average() guarantees at least one reading
        let first = deviations.next().unwrap_or(0.0);
        Ok(deviations.fold(first, |max, deviation| {
            if deviation > max { deviation } else { max }
        }))
    }

    /// Compute all statistics for this record in one go
    pub fn summary(&self) -> Result<SensorSummary> {
        Ok(SensorSummary {
            id: self.id,
            reading_count: self.reading_count(),
            average: self.average()?,
            max_deviation: self.max_deviation()?,
        })
    }
}

/// Computed statistics for a single sensor record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorSummary {
    /// Sensor identifier
    pub id: i64,
    /// Number of readings the statistics were computed from
    pub reading_count: usize,
    /// Arithmetic mean of the readings
    pub average: f64,
    /// Largest absolute deviation from the mean
    pub max_deviation: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_single_value() {
        let record = SensorRecord::new(1, vec![12.5]);
        assert_eq!(record.average().unwrap(), 12.5);
    }

    #[test]
    fn test_average_two_values() {
        let record = SensorRecord::new(1, vec![3.0, 8.0]);
        assert_eq!(record.average().unwrap(), (3.0 + 8.0) / 2.0);
    }

    #[test]
    fn test_average_empty_values_fails() {
        let record = SensorRecord::new(7, vec![]);
        let result = record.average();

        assert!(matches!(result, Err(Error::EmptyValues { id: 7 })));
    }

    #[test]
    fn test_max_deviation_propagates_empty_error() {
        let record = SensorRecord::new(9, Vec::new());
        assert!(matches!(
            record.max_deviation(),
            Err(Error::EmptyValues { id: 9 })
        ));
        assert!(record.summary().is_err());
    }

    #[test]
    fn test_max_deviation_single_value_is_zero() {
        let record = SensorRecord::new(3, vec![-4.2]);
        assert_eq!(record.max_deviation().unwrap(), 0.0);
    }

    #[test]
    fn test_max_deviation_identical_values_is_zero() {
        let record = SensorRecord::new(4, vec![42.0, 42.0, 42.0]);
        assert_eq!(record.max_deviation().unwrap(), 0.0);
    }

    #[test]
    fn test_max_deviation_uses_absolute_difference() {
        // Mean is 101.25; the 90.0 reading sits furthest away, below the mean
        let record = SensorRecord::new(2, vec![100.0, 105.0, 110.0, 90.0]);

        assert_eq!(record.average().unwrap(), 101.25);
        assert_eq!(record.max_deviation().unwrap(), 11.25);
    }

    #[test]
    fn test_summary_matches_individual_statistics() {
        let record = SensorRecord::new(1, vec![20.0, 21.5, 19.8]);
        let summary = record.summary().unwrap();

        assert_eq!(summary.id, 1);
        assert_eq!(summary.reading_count, 3);
        assert_eq!(summary.average, record.average().unwrap());
        assert_eq!(summary.max_deviation, record.max_deviation().unwrap());
        assert_eq!(format!("{:.2}", summary.max_deviation), "1.07");
    }
}
