//! Test utilities for telemetry parser testing
//!
//! Shared fixtures used across the parser test modules.


/// Reference batch with one malformed line in third position
pub fn reference_lines() -> Vec<String> {
    vec![
        "1,20.0,21.5,19.8".to_string(),
        "2,100.0,105.0,110.0,90.0".to_string(),
        "3,50.0,invalid,51.0".to_string(),
        "4,42.0,42.0,42.0".to_string(),
    ]
}

/// A batch mixing every kind of malformed line with valid ones
pub fn mixed_lines() -> Vec<&'static str> {
    vec![
        "10,1.5",
        "",
        "abc,1.0,2.0",
        "11,2.0,,3.0",
        "12",
        "13,-0.5,0.5",
        "14,1.0,2.0,",
    ]
}
