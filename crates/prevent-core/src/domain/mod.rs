//! Domain types for risk assessment.
//!
//! Raw requests arrive as [`PatientInputs`] with a free-text sex designation.
//! After validation and normalization they become a [`Patient`], the only
//! form the engine accepts. Equation variants are identified by the closed
//! [`Outcome`] and [`Horizon`] enums.

mod equation;
mod patient;
mod sex;


pub use equation::{Equation, Horizon, Outcome};
pub use patient::{Field, Patient, PatientInputs};
pub use sex::Sex;
