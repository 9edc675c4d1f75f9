//! Normalization of raw requests.
//!
//! String handling for sex designations lives here and nowhere else; past
//! this point the engine only sees the closed [`Sex`] enum.

use crate::domain::{Horizon, Patient, PatientInputs, Sex};
use crate::error::{Result, RiskError};
use crate::validation::ValidRanges;

/// Parses a sex designation, ignoring letter case.
///
/// # Examples
///
/// ```
/// use prevent_core::{normalize_sex, Sex};
///
/// assert_eq!(normalize_sex("FEMALE").unwrap(), Sex::Female);
/// assert_eq!(normalize_sex("Male").unwrap(), Sex::Male);
/// assert!(normalize_sex("unknown").is_err());
/// ```
pub fn normalize_sex(value: &str) -> Result<Sex> {
    if value.eq_ignore_ascii_case(Sex::Female.as_str()) {
        Ok(Sex::Female)
    } else if value.eq_ignore_ascii_case(Sex::Male.as_str()) {
        Ok(Sex::Male)
    } else {
        Err(RiskError::InvalidSex(value.to_string()))
    }
}

/// Validates `inputs` against the ranges for `horizon`, then normalizes sex.
///
/// Range checks run first, so a record with both a bad value and a bad sex
/// reports the range violation.
pub fn normalize(inputs: &PatientInputs, horizon: Horizon) -> Result<Patient> {
    ValidRanges::for_horizon(horizon).validate_inputs(inputs)?;
    let sex = normalize_sex(&inputs.sex)?;
    Ok(Patient::from_checked(horizon, sex, inputs))
}
