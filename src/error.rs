//! Error types for the fallible edges (loading, configuration, report output)
//!
//! The calculator itself has no failure modes.

use crate::calculator::ParseMethodError;
use std::path::PathBuf;

/// Failure while loading shipment line items
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Unreadable file, malformed CSV or a field of the wrong type
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error("row {row} ({item_ref}): {source}")]
    Method {
        row: usize,
        item_ref: String,
        #[source]
        source: ParseMethodError,
    },
    #[error("row {row} ({item_ref}): BOE rates must be all present or all empty")]
    PartialBoeRates { row: usize, item_ref: String },
}

/// Failure while reading a run configuration file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failure while writing a duty report
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
}
