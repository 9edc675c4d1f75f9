//! PREVENT - Cardiovascular Risk Equations in Rust
//!
//! Ten- and thirty-year risk of atherosclerotic cardiovascular disease
//! (ASCVD) and total cardiovascular disease (CVD), from the American Heart
//! Association PREVENT base model.
//!
//! # Example
//!
//! ```rust
//! use prevent::prelude::*;
//!
//! let risk = calculate_10yr_ascvd_risk(
//!     "female", 40.0, 200.0, 50.0, 120.0, true, true, 25.0, 70.0, true, true,
//! )
//! .unwrap();
//! assert!((risk - 4.7237).abs() < 1e-4);
//!
//! let err = calculate_10yr_ascvd_risk(
//!     "female", 29.0, 200.0, 50.0, 120.0, true, true, 25.0, 70.0, true, true,
//! )
//! .unwrap_err();
//! assert_eq!(err.field(), Some(Field::Age));
//! ```

// Domain and validation
pub use prevent_core::{
    normalize, normalize_sex, Accumulation, CoefficientSet, CoefficientTable, Equation, Field,
    Horizon, Outcome, Patient, PatientInputs, Result, RiskError, RiskTransform, Sex, Term,
    ValidRange, ValidRanges,
};

// Configuration
pub use prevent_config::{BatchConfig, ConfigError, EngineConfig, ThreadCount};

// Engine
pub use prevent_engine::{
    risk_percent, BatchError, BatchEvaluator, EngineError, PredictorTerms, RiskEngine,
    ScoredPatient,
};

#[cfg(feature = "console")]
pub mod console;

#[cfg(test)]
mod tests;

/// All four estimates for one patient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskProfile {
    pub ascvd_10yr: f64,
    pub cvd_10yr: f64,
    /// `None` when age is outside the thirty-year range.
    pub ascvd_30yr: Option<f64>,
    /// `None` when age is outside the thirty-year range.
    pub cvd_30yr: Option<f64>,
}

/// Risk of one equation for one record, using the published coefficients.
pub fn calculate_risk(inputs: &PatientInputs, equation: Equation) -> Result<f64> {
    RiskEngine::prevent().evaluate(inputs, equation)
}

/// All four estimates for one record.
///
/// Fails if the record is invalid for the ten-year equations. A record that
/// is only too old for the thirty-year equations still succeeds, with those
/// estimates left empty.
pub fn calculate_all(inputs: &PatientInputs) -> Result<RiskProfile> {
    let engine = RiskEngine::prevent();
    let ten_year = normalize(inputs, Horizon::TenYear)?;
    // Thirty-year ranges differ from ten-year ones only in age.
    let thirty_year = normalize(inputs, Horizon::ThirtyYear).ok();

    Ok(RiskProfile {
        ascvd_10yr: engine.compute(&ten_year, Outcome::Ascvd),
        cvd_10yr: engine.compute(&ten_year, Outcome::Cvd),
        ascvd_30yr: thirty_year.map(|p| engine.compute(&p, Outcome::Ascvd)),
        cvd_30yr: thirty_year.map(|p| engine.compute(&p, Outcome::Cvd)),
    })
}

/// Risk of one equation for every row, in row order.
///
/// The whole batch fails on the first invalid row.
pub fn batch_calculate(
    rows: &[PatientInputs],
    equation: Equation,
) -> std::result::Result<Vec<f64>, BatchError> {
    BatchEvaluator::new(RiskEngine::prevent()).compute_batch(rows, equation)
}

/// Ten-year ASCVD risk in percent.
///
/// `sex` is "female" or "male" in any letter case. Cholesterol is in mg/dL,
/// blood pressure in mmHg, BMI in kg/m² and eGFR in mL/min/1.73m².
#[allow(clippy::too_many_arguments)]
pub fn calculate_10yr_ascvd_risk(
    sex: &str,
    age: f64,
    total_cholesterol: f64,
    hdl_cholesterol: f64,
    systolic_bp: f64,
    has_diabetes: bool,
    current_smoker: bool,
    bmi: f64,
    egfr: f64,
    on_htn_meds: bool,
    on_cholesterol_meds: bool,
) -> Result<f64> {
    let inputs = PatientInputs::new(
        sex,
        age,
        total_cholesterol,
        hdl_cholesterol,
        systolic_bp,
        has_diabetes,
        current_smoker,
        bmi,
        egfr,
        on_htn_meds,
        on_cholesterol_meds,
    );
    calculate_risk(&inputs, Equation::ASCVD_10YR)
}

/// Thirty-year ASCVD risk in percent. Age must be 30 to 59.
#[allow(clippy::too_many_arguments)]
pub fn calculate_30yr_ascvd_risk(
    sex: &str,
    age: f64,
    total_cholesterol: f64,
    hdl_cholesterol: f64,
    systolic_bp: f64,
    has_diabetes: bool,
    current_smoker: bool,
    bmi: f64,
    egfr: f64,
    on_htn_meds: bool,
    on_cholesterol_meds: bool,
) -> Result<f64> {
    let inputs = PatientInputs::new(
        sex,
        age,
        total_cholesterol,
        hdl_cholesterol,
        systolic_bp,
        has_diabetes,
        current_smoker,
        bmi,
        egfr,
        on_htn_meds,
        on_cholesterol_meds,
    );
    calculate_risk(&inputs, Equation::ASCVD_30YR)
}

/// Ten-year total CVD risk in percent.
#[allow(clippy::too_many_arguments)]
pub fn calculate_10yr_cvd_risk(
    sex: &str,
    age: f64,
    total_cholesterol: f64,
    hdl_cholesterol: f64,
    systolic_bp: f64,
    has_diabetes: bool,
    current_smoker: bool,
    bmi: f64,
    egfr: f64,
    on_htn_meds: bool,
    on_cholesterol_meds: bool,
) -> Result<f64> {
    let inputs = PatientInputs::new(
        sex,
        age,
        total_cholesterol,
        hdl_cholesterol,
        systolic_bp,
        has_diabetes,
        current_smoker,
        bmi,
        egfr,
        on_htn_meds,
        on_cholesterol_meds,
    );
    calculate_risk(&inputs, Equation::CVD_10YR)
}

/// Thirty-year total CVD risk in percent. Age must be 30 to 59.
#[allow(clippy::too_many_arguments)]
pub fn calculate_30yr_cvd_risk(
    sex: &str,
    age: f64,
    total_cholesterol: f64,
    hdl_cholesterol: f64,
    systolic_bp: f64,
    has_diabetes: bool,
    current_smoker: bool,
    bmi: f64,
    egfr: f64,
    on_htn_meds: bool,
    on_cholesterol_meds: bool,
) -> Result<f64> {
    let inputs = PatientInputs::new(
        sex,
        age,
        total_cholesterol,
        hdl_cholesterol,
        systolic_bp,
        has_diabetes,
        current_smoker,
        bmi,
        egfr,
        on_htn_meds,
        on_cholesterol_meds,
    );
    calculate_risk(&inputs, Equation::CVD_30YR)
}

/// Ten-year ASCVD risk for every row; any invalid row fails the whole batch.
pub fn batch_calculate_10yr_ascvd_risk(
    rows: &[PatientInputs],
) -> std::result::Result<Vec<f64>, BatchError> {
    batch_calculate(rows, Equation::ASCVD_10YR)
}

/// Thirty-year ASCVD risk for every row; any invalid row fails the whole batch.
pub fn batch_calculate_30yr_ascvd_risk(
    rows: &[PatientInputs],
) -> std::result::Result<Vec<f64>, BatchError> {
    batch_calculate(rows, Equation::ASCVD_30YR)
}

/// Ten-year total CVD risk for every row; any invalid row fails the whole batch.
pub fn batch_calculate_10yr_cvd_risk(
    rows: &[PatientInputs],
) -> std::result::Result<Vec<f64>, BatchError> {
    batch_calculate(rows, Equation::CVD_10YR)
}

/// Thirty-year total CVD risk for every row; any invalid row fails the whole batch.
pub fn batch_calculate_30yr_cvd_risk(
    rows: &[PatientInputs],
) -> std::result::Result<Vec<f64>, BatchError> {
    batch_calculate(rows, Equation::CVD_30YR)
}

pub mod prelude {
    pub use super::{
        batch_calculate_10yr_ascvd_risk, batch_calculate_10yr_cvd_risk,
        batch_calculate_30yr_ascvd_risk, batch_calculate_30yr_cvd_risk, calculate_10yr_ascvd_risk,
        calculate_10yr_cvd_risk, calculate_30yr_ascvd_risk, calculate_30yr_cvd_risk,
        calculate_all, calculate_risk, RiskProfile,
    };
    pub use super::{BatchError, Equation, Field, PatientInputs, RiskError, Sex};
}
