//! Patient records.

use std::fmt;

use super::{Horizon, Sex};

/// One raw risk-assessment request.
///
/// Field order matches the fixed column order of batch tables. Nothing here
/// has been checked yet; see [`crate::normalize`] for turning it into a
/// [`Patient`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PatientInputs {
    /// Sex designation, "female" or "male" in any letter case.
    pub sex: String,

    /// Age in years.
    pub age: f64,

    /// Total cholesterol in mg/dL.
    pub total_cholesterol: f64,

    /// HDL cholesterol in mg/dL.
    pub hdl_cholesterol: f64,

    /// Systolic blood pressure in mmHg.
    pub systolic_bp: f64,

    /// Diagnosed diabetes.
    pub has_diabetes: bool,

    /// Current smoker.
    pub current_smoker: bool,

    /// Body mass index in kg/m².
    pub bmi: f64,

    /// Estimated glomerular filtration rate in mL/min/1.73m².
    pub egfr: f64,

    /// Taking antihypertensive medication.
    pub on_htn_meds: bool,

    /// Taking a statin or other cholesterol-lowering medication.
    pub on_cholesterol_meds: bool,
}

impl PatientInputs {
    /// Creates a request from the eleven inputs in column order.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        sex: impl Into<String>,
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
    ) -> Self {
        Self {
            sex: sex.into(),
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
        }
    }

    /// Returns the value of a range-checked field.
    pub fn value(&self, field: Field) -> f64 {
        match field {
            Field::Age => self.age,
            Field::TotalCholesterol => self.total_cholesterol,
            Field::HdlCholesterol => self.hdl_cholesterol,
            Field::SystolicBp => self.systolic_bp,
            Field::Bmi => self.bmi,
            Field::Egfr => self.egfr,
        }
    }
}

/// A validated, normalized patient.
///
/// Only [`crate::normalize::normalize`] creates these, so holding one means
/// every continuous input is inside its valid range for [`Patient::horizon`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Patient {
    horizon: Horizon,
    sex: Sex,
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
}

impl Patient {
    pub(crate) fn from_checked(horizon: Horizon, sex: Sex, inputs: &PatientInputs) -> Self {
        Self {
            horizon,
            sex,
            age: inputs.age,
            total_cholesterol: inputs.total_cholesterol,
            hdl_cholesterol: inputs.hdl_cholesterol,
            systolic_bp: inputs.systolic_bp,
            has_diabetes: inputs.has_diabetes,
            current_smoker: inputs.current_smoker,
            bmi: inputs.bmi,
            egfr: inputs.egfr,
            on_htn_meds: inputs.on_htn_meds,
            on_cholesterol_meds: inputs.on_cholesterol_meds,
        }
    }

    /// Horizon whose ranges this patient was validated against.
    #[inline]
    pub fn horizon(&self) -> Horizon {
        self.horizon
    }

    #[inline]
    pub fn sex(&self) -> Sex {
        self.sex
    }

    #[inline]
    pub fn age(&self) -> f64 {
        self.age
    }

    #[inline]
    pub fn total_cholesterol(&self) -> f64 {
        self.total_cholesterol
    }

    #[inline]
    pub fn hdl_cholesterol(&self) -> f64 {
        self.hdl_cholesterol
    }

    /// Non-HDL cholesterol in mg/dL.
    #[inline]
    pub fn non_hdl_cholesterol(&self) -> f64 {
        self.total_cholesterol - self.hdl_cholesterol
    }

    #[inline]
    pub fn systolic_bp(&self) -> f64 {
        self.systolic_bp
    }

    #[inline]
    pub fn has_diabetes(&self) -> bool {
        self.has_diabetes
    }

    #[inline]
    pub fn current_smoker(&self) -> bool {
        self.current_smoker
    }

    #[inline]
    pub fn bmi(&self) -> f64 {
        self.bmi
    }

    #[inline]
    pub fn egfr(&self) -> f64 {
        self.egfr
    }

    #[inline]
    pub fn on_htn_meds(&self) -> bool {
        self.on_htn_meds
    }

    #[inline]
    pub fn on_cholesterol_meds(&self) -> bool {
        self.on_cholesterol_meds
    }
}

/// A continuous input with a clinically valid range.
///
/// Sex and the four boolean inputs have no range and are not listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Field {
    Age,
    TotalCholesterol,
    HdlCholesterol,
    SystolicBp,
    Bmi,
    Egfr,
}

impl Field {
    /// All range-checked fields, in validation order.
    pub const ALL: [Field; 6] = [
        Field::Age,
        Field::TotalCholesterol,
        Field::HdlCholesterol,
        Field::SystolicBp,
        Field::Bmi,
        Field::Egfr,
    ];

    /// Column name of the field.
    pub const fn name(self) -> &'static str {
        match self {
            Field::Age => "age",
            Field::TotalCholesterol => "total_cholesterol",
            Field::HdlCholesterol => "hdl_cholesterol",
            Field::SystolicBp => "systolic_bp",
            Field::Bmi => "bmi",
            Field::Egfr => "egfr",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
