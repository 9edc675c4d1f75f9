//! Risk engine.
//!
//! [`RiskEngine`] borrows an immutable [`CoefficientTable`] and computes
//! risks for validated patients. It holds no mutable state, so one engine can
//! be shared freely across threads.

use prevent_config::EngineConfig;
use prevent_core::{
    normalize, CoefficientSet, CoefficientTable, Equation, Outcome, Patient, PatientInputs, Result,
    Sex,
};
use tracing::warn;

use crate::predictor::PredictorTerms;
use crate::transform::risk_percent;

/// Computes risk percentages from a coefficient table.
#[derive(Debug, Clone, Copy)]
pub struct RiskEngine<'t> {
    table: &'t CoefficientTable,
    clamp_warnings: bool,
}

/// Intermediate values of one risk computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredPatient {
    pub equation: Equation,
    pub sex: Sex,
    pub terms: PredictorTerms,
    pub linear_predictor: f64,
    /// Percentage risk, clamped to [0, 100].
    pub risk: f64,
}

impl RiskEngine<'static> {
    /// An engine over the published PREVENT coefficients.
    pub fn prevent() -> Self {
        Self::new(CoefficientTable::prevent())
    }
}

impl Default for RiskEngine<'static> {
    fn default() -> Self {
        Self::prevent()
    }
}

impl<'t> RiskEngine<'t> {
    /// Creates an engine over `table`.
    pub fn new(table: &'t CoefficientTable) -> Self {
        Self {
            table,
            clamp_warnings: true,
        }
    }

    /// Applies the engine-level settings of `config`.
    pub fn with_config(mut self, config: &EngineConfig) -> Self {
        self.clamp_warnings = config.clamp_warnings;
        self
    }

    /// The coefficient table in use.
    pub fn table(&self) -> &'t CoefficientTable {
        self.table
    }

    /// Validates, normalizes and scores one raw record.
    pub fn evaluate(&self, inputs: &PatientInputs, equation: Equation) -> Result<f64> {
        let patient = normalize(inputs, equation.horizon)?;
        Ok(self.compute(&patient, equation.outcome))
    }

    /// Percentage risk of `outcome` for `patient` over the horizon the
    /// patient was validated for.
    pub fn compute(&self, patient: &Patient, outcome: Outcome) -> f64 {
        self.score(patient, outcome).risk
    }

    /// Like [`compute`](Self::compute), keeping the intermediate values.
    pub fn score(&self, patient: &Patient, outcome: Outcome) -> ScoredPatient {
        let equation = Equation::new(outcome, patient.horizon());
        let coefficients = self.table.select(equation, patient.sex());
        let terms = PredictorTerms::from_patient(patient);
        let linear_predictor = terms.linear_predictor(coefficients);
        let risk = self.clamp(
            risk_percent(coefficients.transform(), linear_predictor),
            Some(equation),
            patient.sex(),
            linear_predictor,
        );

        ScoredPatient {
            equation,
            sex: patient.sex(),
            terms,
            linear_predictor,
            risk,
        }
    }

    /// Percentage risk for `patient` under an explicit coefficient set.
    pub fn compute_with(&self, patient: &Patient, coefficients: &CoefficientSet) -> f64 {
        let linear_predictor = PredictorTerms::from_patient(patient).linear_predictor(coefficients);
        self.clamp(
            risk_percent(coefficients.transform(), linear_predictor),
            None,
            patient.sex(),
            linear_predictor,
        )
    }

    // Valid inputs under a sound table never leave [0, 100].
    fn clamp(
        &self,
        risk: f64,
        equation: Option<Equation>,
        sex: Sex,
        linear_predictor: f64,
    ) -> f64 {
        if (0.0..=100.0).contains(&risk) {
            return risk;
        }
        if self.clamp_warnings {
            let equation = equation.map_or_else(|| "explicit set".to_string(), |e| e.to_string());
            warn!(
                equation = %equation,
                sex = %sex,
                linear_predictor,
                risk,
                table = self.table.version(),
                "Risk outside [0, 100]"
            );
        }
        // NaN passes through clamp unchanged.
        risk.clamp(0.0, 100.0)
    }
}
