//! Batch evaluation.
//!
//! Rows are independent, so a batch is a parallel map over its rows followed
//! by an ordered collect. Output position `i` always belongs to input row
//! `i`, whatever order the workers finish in.

use std::time::Instant;

use prevent_config::{BatchConfig, EngineConfig, ThreadCount};
use prevent_core::{Equation, PatientInputs, Result as RiskResult};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::{debug, info};

use crate::engine::RiskEngine;
use crate::error::{BatchError, EngineError};

/// Evaluates one equation over many rows.
#[derive(Debug)]
pub struct BatchEvaluator<'t> {
    engine: RiskEngine<'t>,
    config: BatchConfig,
    pool: Option<ThreadPool>,
}

impl<'t> BatchEvaluator<'t> {
    /// Creates an evaluator with default batch settings.
    pub fn new(engine: RiskEngine<'t>) -> Self {
        Self {
            engine,
            config: BatchConfig::default(),
            pool: None,
        }
    }

    /// Creates an evaluator from `config`, building a dedicated thread pool
    /// when a fixed thread count is requested.
    pub fn from_config(engine: RiskEngine<'t>, config: &EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;

        let pool = match config.batch.thread_count {
            ThreadCount::Count(threads) => Some(
                ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .thread_name(|i| format!("prevent-batch-{i}"))
                    .build()?,
            ),
            ThreadCount::Auto | ThreadCount::None => None,
        };

        Ok(Self {
            engine: engine.with_config(config),
            config: config.batch.clone(),
            pool,
        })
    }

    pub fn engine(&self) -> &RiskEngine<'t> {
        &self.engine
    }

    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Evaluates every row, keeping each row's own result.
    pub fn compute_rows(&self, rows: &[PatientInputs], equation: Equation) -> Vec<RiskResult<f64>> {
        let start = Instant::now();
        let parallel = self.config.runs_parallel(rows.len());
        debug!(equation = %equation, rows = rows.len(), parallel, "Batch started");

        let results: Vec<RiskResult<f64>> = if parallel {
            match &self.pool {
                Some(pool) => pool.install(|| self.evaluate_parallel(rows, equation)),
                None => self.evaluate_parallel(rows, equation),
            }
        } else {
            rows.iter()
                .enumerate()
                .map(|(row, inputs)| self.evaluate_row(row, inputs, equation))
                .collect()
        };

        let failures = results.iter().filter(|r| r.is_err()).count();
        info!(
            equation = %equation,
            rows = rows.len() as u64,
            failures = failures as u64,
            parallel,
            duration_ms = start.elapsed().as_millis() as u64,
            "Batch complete"
        );

        results
    }

    /// Evaluates every row, failing the whole batch on the lowest-index
    /// invalid row.
    pub fn compute_batch(
        &self,
        rows: &[PatientInputs],
        equation: Equation,
    ) -> Result<Vec<f64>, BatchError> {
        self.compute_rows(rows, equation)
            .into_iter()
            .enumerate()
            .map(|(row, result)| result.map_err(|source| BatchError { row, source }))
            .collect()
    }

    fn evaluate_parallel(&self, rows: &[PatientInputs], equation: Equation) -> Vec<RiskResult<f64>> {
        rows.par_iter()
            .enumerate()
            .map(|(row, inputs)| self.evaluate_row(row, inputs, equation))
            .collect()
    }

    fn evaluate_row(
        &self,
        row: usize,
        inputs: &PatientInputs,
        equation: Equation,
    ) -> RiskResult<f64> {
        let result = self.engine.evaluate(inputs, equation);
        if let Err(err) = &result {
            debug!(row, equation = %equation, error = %err, "Row rejected");
        }
        result
    }
}
