//! Published PREVENT base-model coefficients.
//!
//! Khan SS et al., "Development and Validation of the American Heart
//! Association's PREVENT Equations", Circulation 2024;149:430-449,
//! supplemental table of base-model coefficients. Values are copied to the
//! printed precision; any edit here changes clinical output.
//!
//! Each set also fixes the evaluation order that reproduces the reference
//! outputs to the last bit.

use super::Accumulation::{self, ScaledProducts, ScaledProductsExceptSbp, ScaledTerms};
use super::{CoefficientSet, CoefficientTable, RiskTransform, Term};

pub(super) static PREVENT_BASE: CoefficientTable = CoefficientTable::from_sets(
    "prevent-2023-base",
    [
        [
            [
                FEMALE_10YR_ASCVD.into_set(ScaledProductsExceptSbp),
                MALE_10YR_ASCVD.into_set(ScaledProductsExceptSbp),
            ],
            [
                FEMALE_30YR_ASCVD.into_set(ScaledProducts),
                MALE_30YR_ASCVD.into_set(ScaledProducts),
            ],
        ],
        [
            [
                FEMALE_10YR_CVD.into_set(ScaledTerms),
                MALE_10YR_CVD.into_set(ScaledTerms),
            ],
            [
                FEMALE_30YR_CVD.into_set(ScaledProducts),
                MALE_30YR_CVD.into_set(ScaledProducts),
            ],
        ],
    ],
);

/// Coefficients as laid out in the publication.
struct Published {
    age: f64,
    age_squared: f64,
    intercept: f64,
    non_hdl: f64,
    hdl: f64,
    sbp_below_110: f64,
    sbp_above_110: f64,
    diabetes: f64,
    smoker: f64,
    egfr_below_60: f64,
    egfr_above_60: f64,
    htn_meds: f64,
    cholesterol_meds: f64,
    htn_meds_x_sbp: f64,
    cholesterol_meds_x_non_hdl: f64,
    age_x_non_hdl: f64,
    age_x_hdl: f64,
    age_x_sbp: f64,
    age_x_diabetes: f64,
    age_x_smoker: f64,
    age_x_egfr: f64,
}

impl Published {
    const fn into_set(self, accumulation: Accumulation) -> CoefficientSet {
        let mut c = [0.0; Term::COUNT];
        c[Term::Age.index()] = self.age;
        c[Term::AgeSquared.index()] = self.age_squared;
        c[Term::Intercept.index()] = self.intercept;
        c[Term::NonHdl.index()] = self.non_hdl;
        c[Term::Hdl.index()] = self.hdl;
        c[Term::SbpBelow110.index()] = self.sbp_below_110;
        c[Term::SbpAbove110.index()] = self.sbp_above_110;
        c[Term::Diabetes.index()] = self.diabetes;
        c[Term::Smoker.index()] = self.smoker;
        c[Term::EgfrBelow60.index()] = self.egfr_below_60;
        c[Term::EgfrAbove60.index()] = self.egfr_above_60;
        c[Term::HtnMeds.index()] = self.htn_meds;
        c[Term::CholesterolMeds.index()] = self.cholesterol_meds;
        c[Term::HtnMedsBySbp.index()] = self.htn_meds_x_sbp;
        c[Term::CholesterolMedsByNonHdl.index()] = self.cholesterol_meds_x_non_hdl;
        c[Term::AgeByNonHdl.index()] = self.age_x_non_hdl;
        c[Term::AgeByHdl.index()] = self.age_x_hdl;
        c[Term::AgeBySbp.index()] = self.age_x_sbp;
        c[Term::AgeByDiabetes.index()] = self.age_x_diabetes;
        c[Term::AgeBySmoker.index()] = self.age_x_smoker;
        c[Term::AgeByEgfr.index()] = self.age_x_egfr;
        CoefficientSet::new(c, RiskTransform::Logistic).with_accumulation(accumulation)
    }
}

// Ten-year equations carry no age-squared term.

const FEMALE_10YR_ASCVD: Published = Published {
    age: 0.719883,
    age_squared: 0.0,
    intercept: -3.819975,
    non_hdl: 0.1176967,
    hdl: -0.151185,
    sbp_below_110: -0.0835358,
    sbp_above_110: 0.3592852,
    diabetes: 0.8348585,
    smoker: 0.4831078,
    egfr_below_60: 0.4864619,
    egfr_above_60: 0.0397779,
    htn_meds: 0.2265309,
    cholesterol_meds: -0.0592374,
    htn_meds_x_sbp: -0.0395762,
    cholesterol_meds_x_non_hdl: 0.0844423,
    age_x_non_hdl: -0.0567839,
    age_x_hdl: 0.0325692,
    age_x_sbp: -0.1035985,
    age_x_diabetes: -0.2417542,
    age_x_smoker: -0.0791142,
    age_x_egfr: -0.1671492,
};

const MALE_10YR_ASCVD: Published = Published {
    age: 0.7099847,
    age_squared: 0.0,
    intercept: -3.500655,
    non_hdl: 0.1658663,
    hdl: -0.1144285,
    sbp_below_110: -0.2837212,
    sbp_above_110: 0.3239977,
    diabetes: 0.7189597,
    smoker: 0.3956973,
    egfr_below_60: 0.3690075,
    egfr_above_60: 0.0203619,
    htn_meds: 0.2036522,
    cholesterol_meds: -0.0865581,
    htn_meds_x_sbp: -0.0322916,
    cholesterol_meds_x_non_hdl: 0.114563,
    age_x_non_hdl: -0.0300005,
    age_x_hdl: 0.0232747,
    age_x_sbp: -0.0927024,
    age_x_diabetes: -0.2018525,
    age_x_smoker: -0.0970527,
    age_x_egfr: -0.1217081,
};

const FEMALE_30YR_ASCVD: Published = Published {
    age: 0.4669202,
    age_squared: -0.0893118,
    intercept: -1.974074,
    non_hdl: 0.1256901,
    hdl: -0.1542255,
    sbp_below_110: -0.0018093,
    sbp_above_110: 0.322949,
    diabetes: 0.6296707,
    smoker: 0.268292,
    egfr_below_60: 0.100106,
    egfr_above_60: 0.0499663,
    htn_meds: 0.1875292,
    cholesterol_meds: 0.0152476,
    htn_meds_x_sbp: -0.0276123,
    cholesterol_meds_x_non_hdl: 0.0736147,
    age_x_non_hdl: -0.0521962,
    age_x_hdl: 0.0316918,
    age_x_sbp: -0.1046101,
    age_x_diabetes: -0.2727793,
    age_x_smoker: -0.1530907,
    age_x_egfr: -0.1299149,
};

const MALE_30YR_ASCVD: Published = Published {
    age: 0.3994099,
    age_squared: -0.0937484,
    intercept: -1.736444,
    non_hdl: 0.1744643,
    hdl: -0.120203,
    sbp_below_110: -0.0665117,
    sbp_above_110: 0.2753037,
    diabetes: 0.4790257,
    smoker: 0.1782635,
    egfr_below_60: -0.0218789,
    egfr_above_60: 0.0602553,
    htn_meds: 0.1421182,
    cholesterol_meds: 0.0135996,
    htn_meds_x_sbp: -0.0218265,
    cholesterol_meds_x_non_hdl: 0.1013148,
    age_x_non_hdl: -0.0312619,
    age_x_hdl: 0.020673,
    age_x_sbp: -0.0920935,
    age_x_diabetes: -0.2159947,
    age_x_smoker: -0.1548811,
    age_x_egfr: -0.0712547,
};

const FEMALE_10YR_CVD: Published = Published {
    age: 0.7939329,
    age_squared: 0.0,
    intercept: -3.307728,
    non_hdl: 0.0305239,
    hdl: -0.1606857,
    sbp_below_110: -0.2394003,
    sbp_above_110: 0.3600781,
    diabetes: 0.8667604,
    smoker: 0.5360739,
    egfr_below_60: 0.6045917,
    egfr_above_60: 0.0433769,
    htn_meds: 0.3151672,
    cholesterol_meds: -0.1477655,
    htn_meds_x_sbp: -0.0663612,
    cholesterol_meds_x_non_hdl: 0.1197879,
    age_x_non_hdl: -0.0819715,
    age_x_hdl: 0.0306769,
    age_x_sbp: -0.0946348,
    age_x_diabetes: -0.27057,
    age_x_smoker: -0.078715,
    age_x_egfr: -0.1637806,
};

const MALE_10YR_CVD: Published = Published {
    age: 0.7688528,
    age_squared: 0.0,
    intercept: -3.031168,
    non_hdl: 0.0736174,
    hdl: -0.0954431,
    sbp_below_110: -0.4347345,
    sbp_above_110: 0.3362658,
    diabetes: 0.7692857,
    smoker: 0.4386871,
    egfr_below_60: 0.5378979,
    egfr_above_60: 0.0164827,
    htn_meds: 0.288879,
    cholesterol_meds: -0.1337349,
    htn_meds_x_sbp: -0.0475924,
    cholesterol_meds_x_non_hdl: 0.150273,
    age_x_non_hdl: -0.0517874,
    age_x_hdl: 0.0191169,
    age_x_sbp: -0.1049477,
    age_x_diabetes: -0.2251948,
    age_x_smoker: -0.0895067,
    age_x_egfr: -0.1543702,
};

const FEMALE_30YR_CVD: Published = Published {
    age: 0.5503079,
    age_squared: -0.0928369,
    intercept: -1.318827,
    non_hdl: 0.0409794,
    hdl: -0.1663306,
    sbp_below_110: -0.1628654,
    sbp_above_110: 0.3299505,
    diabetes: 0.6793894,
    smoker: 0.3196112,
    egfr_below_60: 0.1857101,
    egfr_above_60: 0.0553528,
    htn_meds: 0.2894,
    cholesterol_meds: -0.075688,
    htn_meds_x_sbp: -0.056367,
    cholesterol_meds_x_non_hdl: 0.1071019,
    age_x_non_hdl: -0.0751438,
    age_x_hdl: 0.0301786,
    age_x_sbp: -0.0998776,
    age_x_diabetes: -0.3206166,
    age_x_smoker: -0.1607862,
    age_x_egfr: -0.1450788,
};

const MALE_30YR_CVD: Published = Published {
    age: 0.4627309,
    age_squared: -0.0984281,
    intercept: -1.148204,
    non_hdl: 0.0836088,
    hdl: -0.1029824,
    sbp_below_110: -0.2140352,
    sbp_above_110: 0.2904325,
    diabetes: 0.5331276,
    smoker: 0.2141914,
    egfr_below_60: 0.1155556,
    egfr_above_60: 0.0603775,
    htn_meds: 0.232714,
    cholesterol_meds: -0.0272112,
    htn_meds_x_sbp: -0.0384488,
    cholesterol_meds_x_non_hdl: 0.134192,
    age_x_non_hdl: -0.0511759,
    age_x_hdl: 0.0165865,
    age_x_sbp: -0.1101437,
    age_x_diabetes: -0.2585943,
    age_x_smoker: -0.1566406,
    age_x_egfr: -0.1166776,
};
