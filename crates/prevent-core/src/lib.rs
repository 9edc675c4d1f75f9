//! PREVENT Core - Core types for cardiovascular risk estimation
//!
//! This crate provides the building blocks shared by the risk engine:
//! - Domain types for patients and equation variants
//! - Clinically valid input ranges and their validation
//! - Normalization of raw inputs into engine-ready patients
//! - Immutable coefficient tables for the published equations

pub mod coefficients;
pub mod domain;
pub mod error;
pub mod normalize;
pub mod validation;

pub use coefficients::{Accumulation, CoefficientSet, CoefficientTable, RiskTransform, Term};
pub use domain::{Equation, Field, Horizon, Outcome, Patient, PatientInputs, Sex};
pub use error::{Result, RiskError};
pub use normalize::{normalize, normalize_sex};
pub use validation::{ValidRange, ValidRanges};
