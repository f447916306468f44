//! Run configuration for batch duty reports
//!
//! Binaries build a [`RunConfig`] (defaults, optional JSON file, CLI
//! overrides) and hand it to [`crate::report::ReportRunner`].

use crate::calculator::CalcMethod;
use crate::error::ConfigError;
use crate::shipment::DEFAULT_LINES_PATH;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default output file name for batch reports
pub const DEFAULT_REPORT_PATH: &str = "duty_report.csv";

/// Configuration for a batch report run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Method applied to lines whose Method column is empty
    #[serde(default)]
    pub default_method: CalcMethod,

    /// Evaluate lines on the rayon thread pool
    #[serde(default = "default_parallel")]
    pub parallel: bool,

    /// Shipment line CSV to read
    #[serde(default = "default_input_path")]
    pub input_path: PathBuf,

    /// Report CSV to write
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,
}

fn default_parallel() -> bool {
    true
}

fn default_input_path() -> PathBuf {
    PathBuf::from(DEFAULT_LINES_PATH)
}

fn default_output_path() -> PathBuf {
    PathBuf::from(DEFAULT_REPORT_PATH)
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            default_method: CalcMethod::default(),
            parallel: default_parallel(),
            input_path: default_input_path(),
            output_path: default_output_path(),
        }
    }
}

impl RunConfig {
    /// Parse a config from JSON text; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a config from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Run sequentially instead of on the thread pool
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}
