//! Most unstable sensor selection

use crate::Result;
use crate::app::models::SensorRecord;

/// Find the record with the largest maximum deviation
///
/// Every record is scored in a single pass. When several records share the
/// largest deviation the earliest one in `records` wins. An empty slice
/// yields `Ok(None)`; a record without readings fails the whole call with
/// [`Error::EmptyValues`](crate::Error::EmptyValues).
pub fn find_most_unstable(records: &[SensorRecord]) -> Result<Option<&SensorRecord>> {
    let mut best: Option<(&SensorRecord, f64)> = None;

    for record in records {
        let deviation = record.max_deviation()?;
        // Only a strictly larger deviation replaces the current best
        let replace = match best {
            None => true,
            Some((_, best_deviation)) => deviation > best_deviation,
        };
        if replace {
            best = Some((record, deviation));
        }
    }

    Ok(best.map(|(record, _)| record))
}
