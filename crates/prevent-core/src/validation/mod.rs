//! Clinically valid input ranges.
//!
//! Every continuous input must fall inside an inclusive range before a risk
//! is computed. The ranges are fixed by the published equations; only the
//! age range differs between horizons (30-79 for ten-year risk, 30-59 for
//! thirty-year risk).
//!
//! # Examples
//!
//! ```
//! use prevent_core::{Field, Horizon, RiskError, ValidRanges};
//!
//! let ranges = ValidRanges::for_horizon(Horizon::TenYear);
//! assert!(ranges.validate(Field::Age, 30.0).is_ok());
//!
//! let err = ranges.validate(Field::Age, 29.0).unwrap_err();
//! assert_eq!(
//!     err,
//!     RiskError::OutOfRange { field: Field::Age, value: 29.0, bound: 30.0 }
//! );
//! ```

use crate::domain::{Field, Horizon, PatientInputs};
use crate::error::{Result, RiskError};


/// An inclusive `[min, max]` range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidRange {
    pub min: f64,
    pub max: f64,
}

impl ValidRange {
    /// Creates an inclusive range.
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Returns true if `value` lies inside the range. NaN never does.
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Checks `value` for `field`, reporting the violated bound on failure.
    ///
    /// Values above the range report `max`; values below it, and NaN,
    /// report `min`.
    pub fn check(&self, field: Field, value: f64) -> Result<()> {
        if self.contains(value) {
            return Ok(());
        }
        let bound = if value > self.max { self.max } else { self.min };
        Err(RiskError::OutOfRange {
            field,
            value,
            bound,
        })
    }
}

/// The full set of ranges applied to one request.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidRanges {
    pub age: ValidRange,
    pub total_cholesterol: ValidRange,
    pub hdl_cholesterol: ValidRange,
    pub systolic_bp: ValidRange,
    pub bmi: ValidRange,
    pub egfr: ValidRange,
}

static TEN_YEAR: ValidRanges = ValidRanges::with_age(ValidRange::new(30.0, 79.0));
static THIRTY_YEAR: ValidRanges = ValidRanges::with_age(ValidRange::new(30.0, 59.0));

impl ValidRanges {
    const fn with_age(age: ValidRange) -> Self {
        Self {
            age,
            total_cholesterol: ValidRange::new(130.0, 320.0),
            hdl_cholesterol: ValidRange::new(20.0, 100.0),
            systolic_bp: ValidRange::new(90.0, 200.0),
            bmi: ValidRange::new(18.5, 39.9),
            egfr: ValidRange::new(15.0, 140.0),
        }
    }

    /// Returns the ranges for equations over `horizon`.
    pub fn for_horizon(horizon: Horizon) -> &'static ValidRanges {
        match horizon {
            Horizon::TenYear => &TEN_YEAR,
            Horizon::ThirtyYear => &THIRTY_YEAR,
        }
    }

    /// Returns the range for `field`.
    pub fn range(&self, field: Field) -> ValidRange {
        match field {
            Field::Age => self.age,
            Field::TotalCholesterol => self.total_cholesterol,
            Field::HdlCholesterol => self.hdl_cholesterol,
            Field::SystolicBp => self.systolic_bp,
            Field::Bmi => self.bmi,
            Field::Egfr => self.egfr,
        }
    }

    /// Checks a single field value.
    pub fn validate(&self, field: Field, value: f64) -> Result<()> {
        self.range(field).check(field, value)
    }

    /// Checks every range-checked field of `inputs`, failing on the first
    /// violation in [`Field::ALL`] order.
    pub fn validate_inputs(&self, inputs: &PatientInputs) -> Result<()> {
        for field in Field::ALL {
            self.validate(field, inputs.value(field))?;
        }
        Ok(())
    }

    /// Collects every violation in `inputs`, in [`Field::ALL`] order.
    pub fn violations(&self, inputs: &PatientInputs) -> Vec<RiskError> {
        Field::ALL
            .iter()
            .filter_map(|&field| self.validate(field, inputs.value(field)).err())
            .collect()
    }
}
