//! Outcome, horizon and equation identifiers.

use std::fmt;

/// Outcome predicted by an equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Outcome {
    /// Atherosclerotic cardiovascular disease.
    Ascvd,

    /// Total cardiovascular disease.
    Cvd,
}

impl Outcome {
    pub(crate) const fn index(self) -> usize {
        match self {
            Outcome::Ascvd => 0,
            Outcome::Cvd => 1,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Ascvd => write!(f, "ASCVD"),
            Outcome::Cvd => write!(f, "CVD"),
        }
    }
}

/// Prediction window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Horizon {
    /// Ten-year risk.
    TenYear,

    /// Thirty-year risk.
    ThirtyYear,
}

impl Horizon {
    /// Length of the window in years.
    pub const fn years(self) -> u32 {
        match self {
            Horizon::TenYear => 10,
            Horizon::ThirtyYear => 30,
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            Horizon::TenYear => 0,
            Horizon::ThirtyYear => 1,
        }
    }
}

impl fmt::Display for Horizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-year", self.years())
    }
}

/// An equation variant: one outcome over one horizon.
///
/// The four public entry points each fix their equation at compile time.
///
/// # Examples
///
/// ```
/// use prevent_core::{Equation, Horizon, Outcome};
///
/// let eq = Equation::CVD_30YR;
/// assert_eq!(eq.outcome, Outcome::Cvd);
/// assert_eq!(eq.horizon, Horizon::ThirtyYear);
/// assert_eq!(eq.to_string(), "30-year CVD");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Equation {
    pub outcome: Outcome,
    pub horizon: Horizon,
}

impl Equation {
    pub const ASCVD_10YR: Equation = Equation::new(Outcome::Ascvd, Horizon::TenYear);
    pub const ASCVD_30YR: Equation = Equation::new(Outcome::Ascvd, Horizon::ThirtyYear);
    pub const CVD_10YR: Equation = Equation::new(Outcome::Cvd, Horizon::TenYear);
    pub const CVD_30YR: Equation = Equation::new(Outcome::Cvd, Horizon::ThirtyYear);

    /// Every equation variant, ASCVD before CVD.
    pub const ALL: [Equation; 4] = [
        Equation::ASCVD_10YR,
        Equation::ASCVD_30YR,
        Equation::CVD_10YR,
        Equation::CVD_30YR,
    ];

    /// Creates an equation identifier.
    pub const fn new(outcome: Outcome, horizon: Horizon) -> Self {
        Equation { outcome, horizon }
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.horizon, self.outcome)
    }
}
