//! Linear predictor to percentage risk.

use std::f64::consts::E;

use prevent_core::RiskTransform;

/// Converts a linear predictor into a percentage risk under `transform`.
///
/// The result is not clamped. Logistic overflow (`e^L` infinite) yields 100.
///
/// # Examples
///
/// ```
/// use prevent_core::RiskTransform;
/// use prevent_engine::risk_percent;
///
/// assert_eq!(risk_percent(RiskTransform::Logistic, 0.0), 50.0);
///
/// let cox = RiskTransform::BaselineSurvival {
///     baseline_survival: 0.9,
///     mean_linear_predictor: 1.0,
/// };
/// assert!((risk_percent(cox, 1.0) - 10.0).abs() < 1e-12);
/// ```
pub fn risk_percent(transform: RiskTransform, linear_predictor: f64) -> f64 {
    match transform {
        RiskTransform::Logistic => {
            // e^L via powf: the published reference values were produced this way.
            let odds = E.powf(linear_predictor);
            if odds.is_infinite() {
                return 100.0;
            }
            odds / (1.0 + odds) * 100.0
        }
        RiskTransform::BaselineSurvival {
            baseline_survival,
            mean_linear_predictor,
        } => {
            let relative_hazard = (linear_predictor - mean_linear_predictor).exp();
            100.0 * (1.0 - baseline_survival.powf(relative_hazard))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logistic_midpoint_and_symmetry() {
        assert_eq!(risk_percent(RiskTransform::Logistic, 0.0), 50.0);

        let up = risk_percent(RiskTransform::Logistic, 1.7);
        let down = risk_percent(RiskTransform::Logistic, -1.7);
        assert!((up + down - 100.0).abs() < 1e-12);
    }

    #[test]
    fn test_logistic_extremes_stay_in_range() {
        assert_eq!(risk_percent(RiskTransform::Logistic, 1000.0), 100.0);
        assert_eq!(risk_percent(RiskTransform::Logistic, -1000.0), 0.0);
    }

    #[test]
    fn test_logistic_is_increasing() {
        let mut previous = risk_percent(RiskTransform::Logistic, -10.0);
        for step in 1..=200 {
            let lp = -10.0 + step as f64 * 0.1;
            let current = risk_percent(RiskTransform::Logistic, lp);
            assert!(current >= previous, "decreased at {lp}");
            previous = current;
        }
    }

    #[test]
    fn test_baseline_survival_at_mean() {
        let transform = RiskTransform::BaselineSurvival {
            baseline_survival: 0.95,
            mean_linear_predictor: -0.3,
        };
        // At the mean the risk is exactly 1 - S0.
        assert!((risk_percent(transform, -0.3) - 5.0).abs() < 1e-12);
        assert!(risk_percent(transform, 0.5) > 5.0);
        assert!(risk_percent(transform, -1.0) < 5.0);
    }

    #[test]
    fn test_baseline_survival_bounds() {
        let transform = RiskTransform::BaselineSurvival {
            baseline_survival: 0.8,
            mean_linear_predictor: 0.0,
        };
        assert_eq!(risk_percent(transform, 1000.0), 100.0);
        assert!(risk_percent(transform, -1000.0).abs() < 1e-12);
    }
}
