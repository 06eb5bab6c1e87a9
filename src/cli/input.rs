//! Input loading for the analyze command
//!
//! Collects telemetry lines from files and stdin into one in-memory batch.

use crate::constants::STDIN_MARKER;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Where a batch of lines comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input
    Stdin,
    /// A file on disk
    File(PathBuf),
}

impl InputSource {
    /// Map command-line paths to sources; no paths means stdin
    pub fn from_paths(paths: &[PathBuf]) -> Vec<InputSource> {
        if paths.is_empty() {
            return vec![InputSource::Stdin];
        }

        paths
            .iter()
            .map(|path| {
                if path.as_os_str() == STDIN_MARKER {
                    InputSource::Stdin
                } else {
                    InputSource::File(path.clone())
                }
            })
            .collect()
    }
}

/// Read every line from a reader
pub fn read_lines<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    reader.lines().collect()
}

/// Read all lines from a file
pub fn read_file_lines(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open input file '{}'", path.display()))?;

    read_lines(BufReader::new(file))
        .with_context(|| format!("Failed to read input file '{}'", path.display()))
}

/// Read the lines of every source, in order, into one batch
pub fn load_batch(sources: &[InputSource]) -> Result<Vec<String>> {
    let mut batch = Vec::new();

    for source in sources {
        let lines = match source {
            InputSource::Stdin => {
                debug!("Reading telemetry from stdin");
                read_lines(io::stdin().lock()).context("Failed to read from stdin")?
            }
            InputSource::File(path) => {
                debug!("Reading telemetry from {}", path.display());
                read_file_lines(path)?
            }
        };
        batch.extend(lines);
    }

    info!(
        "Loaded {} lines from {} input source(s)",
        batch.len(),
        sources.len()
    );
    Ok(batch)
}
