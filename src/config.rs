//! Configuration management and validation.
//!
//! Provides report and logging settings with layered loading:
//! defaults, then an optional JSON config file, then environment
//! variables. CLI flags are applied last by the command layer.

use crate::constants::{DEFAULT_PRECISION, ENV_FORMAT, ENV_PRECISION, MAX_PRECISION};
use crate::{Error, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// Output format for analysis reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    #[default]
    Human,
    /// JSON format for scripting
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            other => Err(Error::configuration(format!(
                "Unknown output format '{}' (expected 'human' or 'json')",
                other
            ))),
        }
    }
}

/// Report presentation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Decimal places for averages and deviations
    pub precision: usize,

    /// Output format
    pub format: OutputFormat,

    /// List statistics for every sensor, not just the most unstable one
    pub show_all: bool,

    /// List lines dropped by the parser and why
    pub show_skipped: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            format: OutputFormat::Human,
            show_all: false,
            show_skipped: false,
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default log level when `RUST_LOG` is not set
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub report: ReportConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a JSON file
    ///
    /// Missing sections and fields fall back to their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(
                format!("Failed to read config file '{}'", path.display()),
                e,
            )
        })?;

        serde_json::from_str(&content).map_err(|e| {
            Error::serialization(
                format!("Failed to parse config file '{}'", path.display()),
                e,
            )
        })
    }

    /// Load configuration using layered approach (defaults -> file -> env)
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => {
                debug!("Loading config file: {}", path.display());
                Self::from_file(path)?
            }
            None => Self::default(),
        };

        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from process environment variables
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides using the given variable lookup
    pub fn apply_overrides_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(precision) = lookup(ENV_PRECISION) {
            self.report.precision = precision.trim().parse().map_err(|_| {
                Error::configuration(format!(
                    "{} must be a non-negative integer, got '{}'",
                    ENV_PRECISION, precision
                ))
            })?;
            debug!("Precision overridden from environment: {}", self.report.precision);
        }

        if let Some(format) = lookup(ENV_FORMAT) {
            self.report.format = format.parse()?;
            debug!("Format overridden from environment: {:?}", self.report.format);
        }

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.report.precision > MAX_PRECISION {
            return Err(Error::configuration(format!(
                "Precision {} exceeds maximum of {}",
                self.report.precision, MAX_PRECISION
            )));
        }

        match self.logging.level.as_str() {
            "error" | "warn" | "info" | "debug" | "trace" => Ok(()),
            other => Err(Error::configuration(format!(
                "Unknown log level '{}'",
                other
            ))),
        }
    }

    /// Set the report precision
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.report.precision = precision;
        self
    }

    /// Set the output format
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.report.format = format;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.report.precision, 2);
        assert_eq!(config.report.format, OutputFormat::Human);
        assert!(!config.report.show_all);
        assert!(!config.report.show_skipped);
        assert_eq!(config.logging.level, "warn");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_file_partial() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"report": {{"precision": 4, "format": "json"}}}}"#).unwrap();

        let config = Config::from_file(file.path()).unwrap();

        assert_eq!(config.report.precision, 4);
        assert_eq!(config.report.format, OutputFormat::Json);
        assert!(!config.report.show_all);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_from_file_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not json").unwrap();

        assert!(matches!(
            Config::from_file(file.path()),
            Err(Error::Serialization { .. })
        ));
    }

    #[test]
    fn test_from_file_missing() {
        let result = Config::from_file(Path::new("/nonexistent/sensor-stability.json"));
        assert!(matches!(result, Err(Error::Io { .. })));
    }

    #[test]
    fn test_env_overrides() {
        let vars = env(&[(ENV_PRECISION, "3"), (ENV_FORMAT, "JSON")]);
        let mut config = Config::default();

        config
            .apply_overrides_from(|key| vars.get(key).cloned())
            .unwrap();

        assert_eq!(config.report.precision, 3);
        assert_eq!(config.report.format, OutputFormat::Json);
    }

    #[test]
    fn test_env_override_rejects_bad_values() {
        let vars = env(&[(ENV_PRECISION, "two")]);
        let mut config = Config::default();
        assert!(
            config
                .apply_overrides_from(|key| vars.get(key).cloned())
                .is_err()
        );

        let vars = env(&[(ENV_FORMAT, "xml")]);
        assert!(
            config
                .apply_overrides_from(|key| vars.get(key).cloned())
                .is_err()
        );
    }

    #[test]
    fn test_validate_rejects_large_precision() {
        let config = Config::default().with_precision(MAX_PRECISION + 1);
        assert!(matches!(
            config.validate(),
            Err(Error::Configuration { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_unknown_log_level() {
        let mut config = Config::default();
        config.logging.level = "loud".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("human".parse::<OutputFormat>().unwrap(), OutputFormat::Human);
        assert_eq!(" Json ".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("csv".parse::<OutputFormat>().is_err());
    }
}
