//! Configuration system for the PREVENT risk engine.
//!
//! Load engine configuration from TOML or YAML files to control batch
//! parallelism and clamp logging without code changes. The equations
//! themselves are not configurable.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use prevent_config::{EngineConfig, ThreadCount};
//!
//! let config = EngineConfig::from_toml_str(r#"
//!     clamp_warnings = false
//!
//!     [batch]
//!     thread_count = { count = 4 }
//!     parallel_threshold = 256
//! "#).unwrap();
//!
//! assert_eq!(config.batch.thread_count, ThreadCount::Count(4));
//! assert_eq!(config.batch.parallel_threshold, 256);
//! assert!(!config.clamp_warnings);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use prevent_config::EngineConfig;
//!
//! let config = EngineConfig::load("prevent.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;


/// Default minimum batch size before rows are evaluated in parallel.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1024;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct EngineConfig {
    /// Batch evaluation settings.
    #[serde(default)]
    pub batch: BatchConfig,

    /// Log a warning whenever a computed risk has to be clamped to [0, 100].
    #[serde(default = "default_clamp_warnings")]
    pub clamp_warnings: bool,
}

fn default_clamp_warnings() -> bool {
    true
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            batch: BatchConfig::default(),
            clamp_warnings: default_clamp_warnings(),
        }
    }
}

impl EngineConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML, or fails
    /// [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the batch thread count.
    pub fn with_thread_count(mut self, thread_count: ThreadCount) -> Self {
        self.batch.thread_count = thread_count;
        self
    }

    /// Sets the minimum batch size for parallel evaluation.
    pub fn with_parallel_threshold(mut self, rows: usize) -> Self {
        self.batch.parallel_threshold = rows;
        self
    }

    /// Enables or disables clamp warnings.
    pub fn with_clamp_warnings(mut self, enabled: bool) -> Self {
        self.clamp_warnings = enabled;
        self
    }

    /// Checks settings that parse but cannot be honored.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.batch.thread_count == ThreadCount::Count(0) {
            return Err(ConfigError::Invalid(
                "batch.thread_count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Batch evaluation configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct BatchConfig {
    /// Worker threads for parallel row evaluation.
    #[serde(default)]
    pub thread_count: ThreadCount,

    /// Batches smaller than this are evaluated on the calling thread.
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,
}

fn default_parallel_threshold() -> usize {
    DEFAULT_PARALLEL_THRESHOLD
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            thread_count: ThreadCount::default(),
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl BatchConfig {
    /// Returns true if a batch of `rows` should be evaluated in parallel.
    pub fn runs_parallel(&self, rows: usize) -> bool {
        self.thread_count != ThreadCount::None && rows >= self.parallel_threshold.max(1)
    }
}

/// Thread count for batch evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThreadCount {
    /// Use the global rayon pool.
    #[default]
    Auto,

    /// Always evaluate on the calling thread.
    None,

    /// Use a dedicated pool with this many threads.
    Count(usize),
}
