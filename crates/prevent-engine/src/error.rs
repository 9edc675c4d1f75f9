//! Error types for the engine crate

use prevent_config::ConfigError;
use prevent_core::RiskError;
use thiserror::Error;

/// Failure to set up an engine or batch evaluator.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to build batch thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// A batch rejected because one of its rows was invalid.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Row {row} rejected: {source}")]
pub struct BatchError {
    /// Zero-based index of the first invalid row.
    pub row: usize,

    /// Why the row was rejected.
    #[source]
    pub source: RiskError,
}
