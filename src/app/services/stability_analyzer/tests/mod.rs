//! Test utilities for stability analyzer testing

use crate::app::models::SensorRecord;

mod selector_tests;

/// Records parsed from the reference batch (line 3 dropped as malformed)
pub fn reference_records() -> Vec<SensorRecord> {
    vec![
        SensorRecord::new(1, vec![20.0, 21.5, 19.8]),
        SensorRecord::new(2, vec![100.0, 105.0, 110.0, 90.0]),
        SensorRecord::new(4, vec![42.0, 42.0, 42.0]),
    ]
}
