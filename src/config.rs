//! Configuration file support.
//!
//! Every section is optional; an empty file yields the default battery
//! and text report. Thresholds are fixed and cannot be configured.

use crate::battery::DEFAULT_CHUNK_SIZE;
use crate::estimators::EstimatorKind;
use crate::report::{ColorMode, OutputFormat, DEFAULT_WIDTH};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration validation errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    /// The test list is empty.
    #[error("battery must contain at least one test")]
    NoTests,
    /// `chunk_size` is zero.
    #[error("chunk size must be greater than zero")]
    InvalidChunkSize,
    /// A test appears more than once, which would duplicate verdict ids.
    #[error("test {0:?} is listed more than once")]
    DuplicateTest(EstimatorKind),
    /// The file could not be read.
    #[error("failed to read config file: {0}")]
    FileReadError(String),
    /// The file is not valid TOML for this format.
    #[error("failed to parse config file: {0}")]
    ParseError(String),
}

/// Full configuration file format.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileConfig {
    /// Estimator selection and input settings.
    #[serde(default)]
    pub battery: BatteryConfig,
    /// Rendering options.
    #[serde(default)]
    pub report: ReportConfig,
}

/// Which estimators run, and how input is read.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BatteryConfig {
    /// Estimators in registration order.
    pub tests: Vec<EstimatorKind>,
    /// Bytes read from the input per chunk.
    pub chunk_size: usize,
}

impl Default for BatteryConfig {
    fn default() -> Self {
        Self {
            tests: EstimatorKind::ALL.to_vec(),
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl BatteryConfig {
    /// Validates the battery parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tests.is_empty() {
            return Err(ConfigError::NoTests);
        }
        if self.chunk_size == 0 {
            return Err(ConfigError::InvalidChunkSize);
        }
        for (i, kind) in self.tests.iter().enumerate() {
            if self.tests[..i].contains(kind) {
                return Err(ConfigError::DuplicateTest(*kind));
            }
        }
        Ok(())
    }
}

/// Report rendering options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// When to color status tags.
    pub color: ColorMode,
    /// Column the description is aligned to.
    pub width: usize,
    /// Output format.
    pub format: OutputFormat,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            width: DEFAULT_WIDTH,
            format: OutputFormat::Text,
        }
    }
}

impl FileConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileReadError(e.to_string()))?;
        Self::from_toml(&content)
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: FileConfig =
            toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.battery.validate()?;
        Ok(config)
    }
}
