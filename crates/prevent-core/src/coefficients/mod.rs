//! Coefficient tables for the risk equations.
//!
//! A [`CoefficientSet`] holds one coefficient per predictor [`Term`] and the
//! [`RiskTransform`] that turns the linear predictor into a probability. A
//! [`CoefficientTable`] holds one set for every (outcome, horizon, sex)
//! combination. Tables are plain immutable values: the published table is a
//! `static`, and callers can build their own and hand it to the engine.
//!
//! # Examples
//!
//! ```
//! use prevent_core::{CoefficientTable, Equation, RiskTransform, Sex, Term};
//!
//! let table = CoefficientTable::prevent();
//! let set = table.select(Equation::ASCVD_10YR, Sex::Female);
//!
//! assert_eq!(set.coefficient(Term::Intercept), -3.819975);
//! assert_eq!(set.transform(), RiskTransform::Logistic);
//! ```

mod prevent;

#[cfg(test)]
mod tests;

use std::fmt;

use crate::domain::{Equation, Horizon, Outcome, Sex};

/// A predictor term of the equations.
///
/// Continuous terms are centered and scaled as follows (cholesterol is
/// converted from mg/dL to mmol/L by the factor 0.02586 first):
///
/// | term | value |
/// |------|-------|
/// | `Age` | (age − 55) / 10 |
/// | `NonHdl` | non-HDL mmol/L − 3.5 |
/// | `Hdl` | (HDL mmol/L − 1.3) / 0.3 |
/// | `SbpBelow110` | (min(SBP, 110) − 110) / 20 |
/// | `SbpAbove110` | (max(SBP, 110) − 130) / 20 |
/// | `EgfrBelow60` | (min(eGFR, 60) − 60) / −15 |
/// | `EgfrAbove60` | (max(eGFR, 60) − 90) / −15 |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Term {
    Age,
    AgeSquared,
    Intercept,
    NonHdl,
    Hdl,
    SbpBelow110,
    SbpAbove110,
    Diabetes,
    Smoker,
    EgfrBelow60,
    EgfrAbove60,
    HtnMeds,
    CholesterolMeds,
    HtnMedsBySbp,
    CholesterolMedsByNonHdl,
    AgeByNonHdl,
    AgeByHdl,
    AgeBySbp,
    AgeByDiabetes,
    AgeBySmoker,
    AgeByEgfr,
}

impl Term {
    /// Number of terms.
    pub const COUNT: usize = 21;

    /// All terms in declaration order.
    pub const ALL: [Term; Term::COUNT] = [
        Term::Age,
        Term::AgeSquared,
        Term::Intercept,
        Term::NonHdl,
        Term::Hdl,
        Term::SbpBelow110,
        Term::SbpAbove110,
        Term::Diabetes,
        Term::Smoker,
        Term::EgfrBelow60,
        Term::EgfrAbove60,
        Term::HtnMeds,
        Term::CholesterolMeds,
        Term::HtnMedsBySbp,
        Term::CholesterolMedsByNonHdl,
        Term::AgeByNonHdl,
        Term::AgeByHdl,
        Term::AgeBySbp,
        Term::AgeByDiabetes,
        Term::AgeBySmoker,
        Term::AgeByEgfr,
    ];

    /// Position of the term in [`Term::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Short snake_case name.
    pub const fn name(self) -> &'static str {
        match self {
            Term::Age => "age",
            Term::AgeSquared => "age_squared",
            Term::Intercept => "intercept",
            Term::NonHdl => "non_hdl",
            Term::Hdl => "hdl",
            Term::SbpBelow110 => "sbp_below_110",
            Term::SbpAbove110 => "sbp_above_110",
            Term::Diabetes => "diabetes",
            Term::Smoker => "smoker",
            Term::EgfrBelow60 => "egfr_below_60",
            Term::EgfrAbove60 => "egfr_above_60",
            Term::HtnMeds => "htn_meds",
            Term::CholesterolMeds => "cholesterol_meds",
            Term::HtnMedsBySbp => "htn_meds_x_sbp",
            Term::CholesterolMedsByNonHdl => "cholesterol_meds_x_non_hdl",
            Term::AgeByNonHdl => "age_x_non_hdl",
            Term::AgeByHdl => "age_x_hdl",
            Term::AgeBySbp => "age_x_sbp",
            Term::AgeByDiabetes => "age_x_diabetes",
            Term::AgeBySmoker => "age_x_smoker",
            Term::AgeByEgfr => "age_x_egfr",
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Conversion from linear predictor to probability.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RiskTransform {
    /// `100 × e^L / (1 + e^L)`. The published equations are logistic.
    Logistic,

    /// `100 × (1 − S0^exp(L − L̄))`, the Cox survival conversion.
    BaselineSurvival {
        /// Event-free probability at the mean linear predictor (S0).
        baseline_survival: f64,

        /// Mean linear predictor of the derivation cohort (L̄).
        mean_linear_predictor: f64,
    },
}

/// Floating-point evaluation order of the linear predictor.
///
/// Every variant computes the same sum. They differ in where the divisors of
/// the scaled terms are applied and in which order the terms are added, and
/// so in the last bits of the result. Each published set records the order
/// its reference outputs were produced with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Accumulation {
    /// Terms in [`Term::ALL`] order. Each term is scaled before it meets its
    /// coefficient, except `AgeByHdl`, whose divisor applies to the product.
    #[default]
    ScaledTerms,

    /// Age, intercept and age squared first, then the rest in
    /// [`Term::ALL`] order. Every divisor applies to the coefficient product.
    ScaledProducts,

    /// As [`ScaledProducts`](Self::ScaledProducts), except that the three
    /// terms on systolic BP above the knot reuse the scaled value.
    ScaledProductsExceptSbp,
}

const INTERCEPT_FIRST: [Term; Term::COUNT] = [
    Term::Age,
    Term::Intercept,
    Term::AgeSquared,
    Term::NonHdl,
    Term::Hdl,
    Term::SbpBelow110,
    Term::SbpAbove110,
    Term::Diabetes,
    Term::Smoker,
    Term::EgfrBelow60,
    Term::EgfrAbove60,
    Term::HtnMeds,
    Term::CholesterolMeds,
    Term::HtnMedsBySbp,
    Term::CholesterolMedsByNonHdl,
    Term::AgeByNonHdl,
    Term::AgeByHdl,
    Term::AgeBySbp,
    Term::AgeByDiabetes,
    Term::AgeBySmoker,
    Term::AgeByEgfr,
];

impl Accumulation {
    /// Terms in the order they are added.
    pub const fn order(self) -> &'static [Term; Term::COUNT] {
        match self {
            Accumulation::ScaledTerms => &Term::ALL,
            Accumulation::ScaledProducts | Accumulation::ScaledProductsExceptSbp => {
                &INTERCEPT_FIRST
            }
        }
    }

    /// Whether `term` is divided by its scale before the coefficient is
    /// applied.
    pub const fn scales_before_product(self, term: Term) -> bool {
        match self {
            Accumulation::ScaledTerms => !matches!(term, Term::AgeByHdl),
            Accumulation::ScaledProducts => false,
            Accumulation::ScaledProductsExceptSbp => matches!(
                term,
                Term::SbpAbove110 | Term::HtnMedsBySbp | Term::AgeBySbp
            ),
        }
    }
}

/// Coefficients for one (outcome, horizon, sex) combination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoefficientSet {
    coefficients: [f64; Term::COUNT],
    transform: RiskTransform,
    accumulation: Accumulation,
}

impl CoefficientSet {
    /// Creates a set from coefficients in [`Term::ALL`] order, accumulated as
    /// [`Accumulation::ScaledTerms`].
    pub const fn new(coefficients: [f64; Term::COUNT], transform: RiskTransform) -> Self {
        Self {
            coefficients,
            transform,
            accumulation: Accumulation::ScaledTerms,
        }
    }

    /// Returns a copy of this set with a different transform.
    pub const fn with_transform(mut self, transform: RiskTransform) -> Self {
        self.transform = transform;
        self
    }

    /// Returns a copy of this set with a different evaluation order.
    pub const fn with_accumulation(mut self, accumulation: Accumulation) -> Self {
        self.accumulation = accumulation;
        self
    }

    /// Returns a copy of this set with one coefficient replaced.
    pub fn with_coefficient(mut self, term: Term, value: f64) -> Self {
        self.coefficients[term.index()] = value;
        self
    }

    #[inline]
    pub fn coefficient(&self, term: Term) -> f64 {
        self.coefficients[term.index()]
    }

    /// All coefficients in [`Term::ALL`] order.
    #[inline]
    pub fn coefficients(&self) -> &[f64; Term::COUNT] {
        &self.coefficients
    }

    #[inline]
    pub fn transform(&self) -> RiskTransform {
        self.transform
    }

    #[inline]
    pub fn accumulation(&self) -> Accumulation {
        self.accumulation
    }

    /// Iterates `(term, coefficient)` pairs in [`Term::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Term, f64)> + '_ {
        Term::ALL.iter().map(move |&t| (t, self.coefficient(t)))
    }
}

/// One coefficient set per outcome, horizon and sex.
///
/// Indexed `[outcome][horizon][sex]`; every combination is present, so
/// [`select`](Self::select) cannot fail.
#[derive(Debug, Clone, PartialEq)]
pub struct CoefficientTable {
    version: &'static str,
    sets: [[[CoefficientSet; 2]; 2]; 2],
}

impl CoefficientTable {
    pub(crate) const fn from_sets(
        version: &'static str,
        sets: [[[CoefficientSet; 2]; 2]; 2],
    ) -> Self {
        Self { version, sets }
    }

    /// Builds a table by calling `f` for every combination.
    pub fn from_fn(version: &'static str, f: impl Fn(Equation, Sex) -> CoefficientSet) -> Self {
        let sets = [Outcome::Ascvd, Outcome::Cvd].map(|outcome| {
            [Horizon::TenYear, Horizon::ThirtyYear].map(|horizon| {
                [Sex::Female, Sex::Male].map(|sex| f(Equation::new(outcome, horizon), sex))
            })
        });
        Self { version, sets }
    }

    /// The published PREVENT base-model coefficients.
    pub fn prevent() -> &'static CoefficientTable {
        &prevent::PREVENT_BASE
    }

    /// Version label of the table.
    pub fn version(&self) -> &'static str {
        self.version
    }

    /// Returns the set for `equation` and `sex`.
    #[inline]
    pub fn select(&self, equation: Equation, sex: Sex) -> &CoefficientSet {
        &self.sets[equation.outcome.index()][equation.horizon.index()][sex.index()]
    }

    /// Returns a copy of this table with one set replaced.
    pub fn with_set(mut self, equation: Equation, sex: Sex, set: CoefficientSet) -> Self {
        self.sets[equation.outcome.index()][equation.horizon.index()][sex.index()] = set;
        self
    }
}
