//! Risk engine for the PREVENT equations
//!
//! This crate turns validated patients into risk percentages:
//! - [`PredictorTerms`] derives the transformed predictor terms
//! - [`RiskEngine`] selects coefficients, builds the linear predictor and
//!   applies the risk transform
//! - [`BatchEvaluator`] runs validation and scoring over many rows in
//!   parallel, preserving row order
//!
//! # Example
//!
//! ```
//! use prevent_core::{Equation, PatientInputs};
//! use prevent_engine::RiskEngine;
//!
//! let engine = RiskEngine::prevent();
//! let inputs = PatientInputs::new(
//!     "female", 40.0, 200.0, 50.0, 120.0, true, true, 25.0, 70.0, true, true,
//! );
//!
//! let risk = engine.evaluate(&inputs, Equation::ASCVD_10YR).unwrap();
//! assert!((risk - 4.72).abs() < 0.1);
//! ```

pub mod batch;
pub mod engine;
pub mod error;
pub mod predictor;
pub mod transform;

pub use batch::BatchEvaluator;
pub use engine::{RiskEngine, ScoredPatient};
pub use error::{BatchError, EngineError};
pub use predictor::PredictorTerms;
pub use transform::risk_percent;
