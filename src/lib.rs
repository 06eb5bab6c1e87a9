//! Sensor Stability Library
//!
//! A Rust library for finding the most unstable sensor in a batch of
//! line-oriented telemetry (`id,val1,val2,...`).
//!
//! This library provides tools for:
//! - Parsing raw telemetry lines into validated sensor records, silently
//!   dropping malformed lines
//! - Optional parse diagnostics describing why each line was skipped
//! - Per-record statistics (mean and maximum deviation from the mean)
//! - Selecting the record with the largest maximum deviation
//!
//! ```rust
//! use sensor_stability::app::services::stability_analyzer::find_most_unstable;
//! use sensor_stability::app::services::telemetry_parser::parse;
//!
//! # fn example() -> sensor_stability::Result<()> {
//! let records = parse(["1,20.0,21.5,19.8", "2,100.0,105.0,110.0,90.0"]);
//! let unstable = find_most_unstable(&records)?.expect("at least one record");
//! assert_eq!(unstable.id, 2);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod stability_analyzer;
        pub mod telemetry_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
    pub mod input;
}

// Re-export commonly used types
pub use app::models::{SensorRecord, SensorSummary};
pub use config::Config;

/// Result type alias for sensor stability analysis
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for sensor stability analysis
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Statistics were requested for a record holding no readings
    #[error("Sensor {id} has no values to compute an average from")]
    EmptyValues { id: i64 },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// JSON serialization or deserialization failed
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create an empty values error for the given sensor
    pub fn empty_values(id: i64) -> Self {
        Self::EmptyValues { id }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a serialization error with context
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "JSON processing failed".to_string(),
            source: error,
        }
    }
}
