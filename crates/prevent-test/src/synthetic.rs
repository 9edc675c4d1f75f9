//! Synthetic coefficient tables.
//!
//! Intercept-only sets make the linear predictor a known constant, so the
//! engine's transform and clamping can be checked independently of the
//! published coefficients.

use prevent_core::{CoefficientSet, CoefficientTable, RiskTransform, Term};

/// A logistic set whose linear predictor is always `linear_predictor`.
pub fn intercept_only(linear_predictor: f64) -> CoefficientSet {
    CoefficientSet::new([0.0; Term::COUNT], RiskTransform::Logistic)
        .with_coefficient(Term::Intercept, linear_predictor)
}

/// A table with [`intercept_only`] in every slot.
pub fn constant_table(linear_predictor: f64) -> CoefficientTable {
    CoefficientTable::from_fn("synthetic-constant", |_, _| {
        intercept_only(linear_predictor)
    })
}

/// A table of intercept-only sets using the baseline-survival transform.
pub fn survival_table(
    baseline_survival: f64,
    mean_linear_predictor: f64,
    linear_predictor: f64,
) -> CoefficientTable {
    let transform = RiskTransform::BaselineSurvival {
        baseline_survival,
        mean_linear_predictor,
    };
    CoefficientTable::from_fn("synthetic-survival", move |_, _| {
        intercept_only(linear_predictor).with_transform(transform)
    })
}
