//! Single line parsing for telemetry records
//!
//! A line is `<integer>,<float>[,<float>...]`. Leading and trailing
//! whitespace is stripped from the line and from every field before the
//! field is converted.

use crate::app::models::SensorRecord;
use crate::constants::{FIELD_SEPARATOR, MIN_FIELDS_PER_LINE};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a telemetry line was not turned into a record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkipReason {
    /// The line held fewer than two comma-separated fields
    TooFewFields { found: usize },
    /// The first field was not an integer
    InvalidId { field: String },
    /// A reading was not a number (`field_index` is its position in the line, id at 0)
    InvalidValue { field_index: usize, field: String },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::TooFewFields { found } => write!(
                f,
                "expected at least {} fields, found {}",
                MIN_FIELDS_PER_LINE, found
            ),
            SkipReason::InvalidId { field } => write!(f, "invalid sensor id '{}'", field),
            SkipReason::InvalidValue { field_index, field } => {
                write!(f, "invalid reading '{}' in field {}", field, field_index)
            }
        }
    }
}

/// Parse one telemetry line into a sensor record
pub fn parse_line(line: &str) -> std::result::Result<SensorRecord, SkipReason> {
    let fields: Vec<&str> = line.trim().split(FIELD_SEPARATOR).collect();
    if fields.len() < MIN_FIELDS_PER_LINE {
        return Err(SkipReason::TooFewFields {
            found: fields.len(),
        });
    }

    let id = parse_id(fields[0])?;
    let values = fields[1..]
        .iter()
        .enumerate()
        .map(|(offset, field)| parse_value(field, offset + 1))
        .collect::<std::result::Result<Vec<f64>, SkipReason>>()?;

    Ok(SensorRecord::new(id, values))
}

fn parse_id(field: &str) -> std::result::Result<i64, SkipReason> {
    field
        .trim()
        .parse::<i64>()
        .map_err(|_| SkipReason::InvalidId {
            field: field.to_string(),
        })
}

fn parse_value(field: &str, field_index: usize) -> std::result::Result<f64, SkipReason> {
    field
        .trim()
        .parse::<f64>()
        .map_err(|_| SkipReason::InvalidValue {
            field_index,
            field: field.to_string(),
        })
}
