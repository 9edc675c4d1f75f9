//! Predictor term derivation.
//!
//! Each term is kept as its unscaled value, its scale and whether it is
//! multiplied by centered age, so the linear predictor can be rounded the
//! way the coefficient set prescribes.

use prevent_core::{CoefficientSet, Patient, Term};

/// mg/dL to mmol/L for cholesterol.
pub const MG_DL_TO_MMOL_L: f64 = 0.02586;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Part {
    active: bool,
    by_age: bool,
    raw: f64,
    divisor: f64,
}

impl Part {
    const fn plain(raw: f64, divisor: f64) -> Self {
        Self {
            active: true,
            by_age: false,
            raw,
            divisor,
        }
    }

    const fn by_age(raw: f64, divisor: f64) -> Self {
        Self {
            active: true,
            by_age: true,
            raw,
            divisor,
        }
    }

    const fn when(mut self, active: bool) -> Self {
        self.active = active;
        self
    }
}

/// Values of every [`Term`] for one patient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictorTerms {
    age: f64,
    parts: [Part; Term::COUNT],
}

impl PredictorTerms {
    /// Derives the centered, scaled and interaction terms for `patient`.
    pub fn from_patient(patient: &Patient) -> Self {
        let age = (patient.age() - 55.0) / 10.0;
        let non_hdl = MG_DL_TO_MMOL_L * patient.non_hdl_cholesterol() - 3.5;
        let hdl = MG_DL_TO_MMOL_L * patient.hdl_cholesterol() - 1.3;
        let sbp = patient.systolic_bp();
        let sbp_below_110 = sbp.min(110.0) - 110.0;
        let sbp_above_110 = sbp.max(110.0) - 130.0;
        let egfr = patient.egfr();
        let egfr_below_60 = egfr.min(60.0) - 60.0;
        let egfr_above_60 = egfr.max(60.0) - 90.0;
        let diabetes = patient.has_diabetes();
        let smoker = patient.current_smoker();
        let htn_meds = patient.on_htn_meds();
        let cholesterol_meds = patient.on_cholesterol_meds();

        let mut parts = [Part::plain(0.0, 1.0); Term::COUNT];
        for term in Term::ALL {
            parts[term.index()] = match term {
                Term::Age => Part::plain(age, 1.0),
                Term::AgeSquared => Part::plain(age * age, 1.0),
                Term::Intercept => Part::plain(1.0, 1.0),
                Term::NonHdl => Part::plain(non_hdl, 1.0),
                Term::Hdl => Part::plain(hdl, 0.3),
                Term::SbpBelow110 => Part::plain(sbp_below_110, 20.0),
                Term::SbpAbove110 => Part::plain(sbp_above_110, 20.0),
                Term::Diabetes => Part::plain(1.0, 1.0).when(diabetes),
                Term::Smoker => Part::plain(1.0, 1.0).when(smoker),
                Term::EgfrBelow60 => Part::plain(egfr_below_60, -15.0),
                Term::EgfrAbove60 => Part::plain(egfr_above_60, -15.0),
                Term::HtnMeds => Part::plain(1.0, 1.0).when(htn_meds),
                Term::CholesterolMeds => Part::plain(1.0, 1.0).when(cholesterol_meds),
                Term::HtnMedsBySbp => Part::plain(sbp_above_110, 20.0).when(htn_meds),
                Term::CholesterolMedsByNonHdl => {
                    Part::plain(non_hdl, 1.0).when(cholesterol_meds)
                }
                Term::AgeByNonHdl => Part::by_age(non_hdl, 1.0),
                Term::AgeByHdl => Part::by_age(hdl, 0.3),
                Term::AgeBySbp => Part::by_age(sbp_above_110, 20.0),
                Term::AgeByDiabetes => Part::by_age(1.0, 1.0).when(diabetes),
                Term::AgeBySmoker => Part::by_age(1.0, 1.0).when(smoker),
                Term::AgeByEgfr => Part::by_age(egfr_below_60, -15.0),
            };
        }
        Self { age, parts }
    }

    /// Value of `term`, scaled and multiplied out.
    pub fn get(&self, term: Term) -> f64 {
        let part = self.parts[term.index()];
        if !part.active {
            return 0.0;
        }
        let scaled = part.raw / part.divisor;
        if part.by_age {
            self.age * scaled
        } else {
            scaled
        }
    }

    /// All term values in [`Term::ALL`] order.
    pub fn values(&self) -> [f64; Term::COUNT] {
        Term::ALL.map(|term| self.get(term))
    }

    /// `Σ coefficient × term`, rounded and accumulated in the order of
    /// `coefficients.accumulation()`.
    pub fn linear_predictor(&self, coefficients: &CoefficientSet) -> f64 {
        let accumulation = coefficients.accumulation();
        accumulation
            .order()
            .iter()
            .map(|&term| {
                let part = self.parts[term.index()];
                if !part.active {
                    return 0.0;
                }
                let c = coefficients.coefficient(term);
                let weight = if part.by_age { c * self.age } else { c };
                if accumulation.scales_before_product(term) {
                    weight * (part.raw / part.divisor)
                } else {
                    weight * part.raw / part.divisor
                }
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use prevent_core::{normalize, CoefficientTable, Equation, Horizon, Sex};
    use prevent_test::{female_reference, male_reference};

    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn test_female_reference_terms() {
        let patient = normalize(&female_reference(), Horizon::TenYear).unwrap();
        let terms = PredictorTerms::from_patient(&patient);

        assert!(close(terms.get(Term::Age), -1.5));
        assert!(close(terms.get(Term::AgeSquared), 2.25));
        assert_eq!(terms.get(Term::Intercept), 1.0);
        assert!(close(terms.get(Term::NonHdl), 0.02586 * 150.0 - 3.5));
        assert!(close(terms.get(Term::Hdl), (0.02586 * 50.0 - 1.3) / 0.3));
        // 120 mmHg sits above the 110 knot.
        assert_eq!(terms.get(Term::SbpBelow110), 0.0);
        assert!(close(terms.get(Term::SbpAbove110), -0.5));
        // 70 sits above the eGFR knot.
        assert_eq!(terms.get(Term::EgfrBelow60), 0.0);
        assert!(close(terms.get(Term::EgfrAbove60), 20.0 / 15.0));
        assert_eq!(terms.get(Term::Diabetes), 1.0);
        assert!(close(terms.get(Term::HtnMedsBySbp), -0.5));
        assert!(close(terms.get(Term::AgeBySmoker), -1.5));
        assert_eq!(terms.get(Term::AgeByEgfr), 0.0);

        let values = terms.values();
        for term in Term::ALL {
            assert_eq!(values[term.index()], terms.get(term), "{term}");
        }
    }

    #[test]
    fn test_flags_off_zero_their_terms() {
        let patient = normalize(&male_reference(), Horizon::TenYear).unwrap();
        let terms = PredictorTerms::from_patient(&patient);

        assert_eq!(terms.get(Term::Diabetes), 0.0);
        assert_eq!(terms.get(Term::AgeByDiabetes), 0.0);
        assert_eq!(terms.get(Term::HtnMeds), 0.0);
        assert_eq!(terms.get(Term::HtnMedsBySbp), 0.0);
        assert_eq!(terms.get(Term::Smoker), 1.0);
        assert!(close(terms.get(Term::AgeBySmoker), 1.3));
        assert!(close(terms.get(Term::SbpAbove110), 1.0));
    }

    #[test]
    fn test_knots_below() {
        let mut inputs = female_reference();
        inputs.systolic_bp = 90.0;
        inputs.egfr = 30.0;
        let patient = normalize(&inputs, Horizon::TenYear).unwrap();
        let terms = PredictorTerms::from_patient(&patient);

        assert!(close(terms.get(Term::SbpBelow110), -1.0));
        assert!(close(terms.get(Term::SbpAbove110), -1.0));
        assert!(close(terms.get(Term::EgfrBelow60), 2.0));
        assert!(close(terms.get(Term::EgfrAbove60), 2.0));
        assert!(close(terms.get(Term::AgeByEgfr), -3.0));
    }

    #[test]
    fn test_linear_predictor_close_to_plain_sum() {
        let patient = normalize(&female_reference(), Horizon::ThirtyYear).unwrap();
        let terms = PredictorTerms::from_patient(&patient);

        for equation in Equation::ALL {
            for sex in [Sex::Female, Sex::Male] {
                let set = CoefficientTable::prevent().select(equation, sex);
                let plain: f64 = set.iter().map(|(t, c)| c * terms.get(t)).sum();
                assert!(
                    (terms.linear_predictor(set) - plain).abs() < 1e-12,
                    "{equation} {sex}"
                );
            }
        }
    }

    #[test]
    fn test_ten_year_ascvd_rounding() {
        let patient = normalize(&female_reference(), Horizon::TenYear).unwrap();
        let terms = PredictorTerms::from_patient(&patient);
        let set = CoefficientTable::prevent().select(Equation::ASCVD_10YR, Sex::Female);
        let c = |t: Term| set.coefficient(t);

        let a = (40.0 - 55.0) / 10.0;
        let non_hdl = 0.02586 * 150.0 - 3.5;
        let hdl = 0.02586 * 50.0 - 1.3;
        let sbp = (120.0_f64 - 130.0) / 20.0;
        let egfr_above = 70.0_f64 - 90.0;
        let expected = [
            c(Term::Age) * a,
            c(Term::Intercept),
            c(Term::NonHdl) * non_hdl,
            c(Term::Hdl) * hdl / 0.3,
            c(Term::SbpAbove110) * sbp,
            c(Term::Diabetes),
            c(Term::Smoker),
            c(Term::EgfrAbove60) * egfr_above / -15.0,
            c(Term::HtnMeds),
            c(Term::CholesterolMeds),
            c(Term::HtnMedsBySbp) * sbp,
            c(Term::CholesterolMedsByNonHdl) * non_hdl,
            c(Term::AgeByNonHdl) * a * non_hdl,
            c(Term::AgeByHdl) * a * hdl / 0.3,
            c(Term::AgeBySbp) * a * sbp,
            c(Term::AgeByDiabetes) * a,
            c(Term::AgeBySmoker) * a,
        ]
        .iter()
        .sum::<f64>();

        assert_eq!(terms.linear_predictor(set), expected);
    }

    #[test]
    fn test_thirty_year_cvd_rounding() {
        let patient = normalize(&female_reference(), Horizon::ThirtyYear).unwrap();
        let terms = PredictorTerms::from_patient(&patient);
        let set = CoefficientTable::prevent().select(Equation::CVD_30YR, Sex::Female);
        let c = |t: Term| set.coefficient(t);

        let a = (40.0 - 55.0) / 10.0;
        let non_hdl = 0.02586 * 150.0 - 3.5;
        let hdl = 0.02586 * 50.0 - 1.3;
        let sbp = 120.0_f64 - 130.0;
        let egfr_above = 70.0_f64 - 90.0;
        let expected = [
            c(Term::Age) * a,
            c(Term::Intercept),
            c(Term::AgeSquared) * (a * a),
            c(Term::NonHdl) * non_hdl,
            c(Term::Hdl) * hdl / 0.3,
            c(Term::SbpAbove110) * sbp / 20.0,
            c(Term::Diabetes),
            c(Term::Smoker),
            c(Term::EgfrAbove60) * egfr_above / -15.0,
            c(Term::HtnMeds),
            c(Term::CholesterolMeds),
            c(Term::HtnMedsBySbp) * sbp / 20.0,
            c(Term::CholesterolMedsByNonHdl) * non_hdl,
            c(Term::AgeByNonHdl) * a * non_hdl,
            c(Term::AgeByHdl) * a * hdl / 0.3,
            c(Term::AgeBySbp) * a * sbp / 20.0,
            c(Term::AgeByDiabetes) * a,
            c(Term::AgeBySmoker) * a,
        ]
        .iter()
        .sum::<f64>();

        assert_eq!(terms.linear_predictor(set), expected);
    }

    #[test]
    fn test_inactive_terms_contribute_nothing() {
        let patient = normalize(&male_reference(), Horizon::TenYear).unwrap();
        let terms = PredictorTerms::from_patient(&patient);
        let set = CoefficientSet::new([0.0; Term::COUNT], prevent_core::RiskTransform::Logistic)
            .with_coefficient(Term::Diabetes, 5.0)
            .with_coefficient(Term::AgeByDiabetes, 5.0)
            .with_coefficient(Term::HtnMedsBySbp, 5.0);

        assert_eq!(terms.linear_predictor(&set), 0.0);
    }
}
