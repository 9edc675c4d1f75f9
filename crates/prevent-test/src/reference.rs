//! Reference patients and their expected risks.
//!
//! Expected values are published outputs of the equations.
//! Single-record expectations are given to one decimal place and checked
//! with [`RISK_TOLERANCE`]. The female reference patient also carries
//! full-precision values, which the engine reproduces bit for bit.

use prevent_core::{Equation, Field, PatientInputs};

/// Tolerance for one-decimal expectations, in percentage points.
pub const RISK_TOLERANCE: f64 = 0.1;

/// `("female", 40, 200, 50, 120, true, true, 25, 70, true, true)`
pub fn female_reference() -> PatientInputs {
    PatientInputs::new("female", 40.0, 200.0, 50.0, 120.0, true, true, 25.0, 70.0, true, true)
}

/// Full-precision risks for [`female_reference`].
pub const FEMALE_REFERENCE_RISKS: [(Equation, f64); 4] = [
    (Equation::ASCVD_10YR, 4.723678963112583),
    (Equation::ASCVD_30YR, 23.4074103963271),
    (Equation::CVD_10YR, 7.899575424594809),
    (Equation::CVD_30YR, 38.87732034588902),
];

/// `("MALE", 68, 300, 85, 150, false, true, 35, 65, false, true)`
///
/// Older than the thirty-year age range, so only ten-year risks apply.
pub fn male_reference() -> PatientInputs {
    PatientInputs::new("MALE", 68.0, 300.0, 85.0, 150.0, false, true, 35.0, 65.0, false, true)
}

/// Ten-year risks for [`male_reference`].
pub const MALE_REFERENCE_RISKS: [(Equation, f64); 2] =
    [(Equation::ASCVD_10YR, 12.9), (Equation::CVD_10YR, 18.2)];

/// [`female_reference`] with male sex.
pub fn male_young_reference() -> PatientInputs {
    PatientInputs {
        sex: "male".to_string(),
        ..female_reference()
    }
}

/// Risks for [`male_young_reference`].
pub const MALE_YOUNG_REFERENCE_RISKS: [(Equation, f64); 3] = [
    (Equation::CVD_10YR, 8.1),
    (Equation::ASCVD_30YR, 23.7),
    (Equation::CVD_30YR, 37.7),
];

/// [`male_reference`] at age 58, inside the thirty-year range.
pub fn male_midlife_reference() -> PatientInputs {
    PatientInputs {
        age: 58.0,
        ..male_reference()
    }
}

/// Thirty-year CVD risk for [`male_midlife_reference`].
pub const MALE_MIDLIFE_CVD_30YR: f64 = 40.2;

/// Returns a copy of `inputs` with one range-checked field replaced.
pub fn with_field(inputs: &PatientInputs, field: Field, value: f64) -> PatientInputs {
    let mut inputs = inputs.clone();
    match field {
        Field::Age => inputs.age = value,
        Field::TotalCholesterol => inputs.total_cholesterol = value,
        Field::HdlCholesterol => inputs.hdl_cholesterol = value,
        Field::SystolicBp => inputs.systolic_bp = value,
        Field::Bmi => inputs.bmi = value,
        Field::Egfr => inputs.egfr = value,
    }
    inputs
}

/// `n` copies of `inputs`.
pub fn rows(inputs: &PatientInputs, n: usize) -> Vec<PatientInputs> {
    vec![inputs.clone(); n]
}
