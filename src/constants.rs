//! Application constants for sensor stability analysis
//!
//! This module contains the telemetry line format, default values,
//! report messages and environment variable names used throughout
//! the application.

// =============================================================================
// Telemetry Line Format
// =============================================================================

/// Field separator within a telemetry line
pub const FIELD_SEPARATOR: char = ',';

/// Minimum number of fields in a valid line (identifier plus one reading)
pub const MIN_FIELDS_PER_LINE: usize = 2;

/// Reference batch used by the `demo` command
pub const REFERENCE_BATCH: &[&str] = &[
    "1,20.0,21.5,19.8",
    "2,100.0,105.0,110.0,90.0",
    "3,50.0,invalid,51.0",
    "4,42.0,42.0,42.0",
];

// =============================================================================
// Report Defaults
// =============================================================================

/// Decimal places used when printing averages and deviations
pub const DEFAULT_PRECISION: usize = 2;

/// Upper bound accepted for the report precision
pub const MAX_PRECISION: usize = 10;

/// Marker passed on the command line to read from stdin
pub const STDIN_MARKER: &str = "-";

/// Message printed when no valid records were parsed
pub const NO_VALID_DATA_MESSAGE: &str = "No valid sensor data found.";

// =============================================================================
// Environment
// =============================================================================

/// Environment variable overriding the report precision
pub const ENV_PRECISION: &str = "SENSOR_STABILITY_PRECISION";

/// Environment variable overriding the report format
pub const ENV_FORMAT: &str = "SENSOR_STABILITY_FORMAT";

/// Log filter target for this crate
pub const LOG_TARGET: &str = "sensor_stability";
