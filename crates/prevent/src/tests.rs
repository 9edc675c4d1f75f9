use prevent_test::reference::{
    female_reference, male_midlife_reference, male_reference, male_young_reference, rows,
    with_field, FEMALE_REFERENCE_RISKS, RISK_TOLERANCE,
};

use super::*;

fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} ± {tolerance}, got {actual}"
    );
}

#[test]
fn test_female_reference_single_record() {
    let args = ("female", 40.0, 200.0, 50.0, 120.0, true, true, 25.0, 70.0, true, true);

    let risk = calculate_10yr_ascvd_risk(
        args.0, args.1, args.2, args.3, args.4, args.5, args.6, args.7, args.8, args.9, args.10,
    )
    .unwrap();
    assert_eq!(risk, 4.723678963112583);

    let risk = calculate_30yr_ascvd_risk(
        args.0, args.1, args.2, args.3, args.4, args.5, args.6, args.7, args.8, args.9, args.10,
    )
    .unwrap();
    assert_eq!(risk, 23.4074103963271);

    let risk = calculate_10yr_cvd_risk(
        args.0, args.1, args.2, args.3, args.4, args.5, args.6, args.7, args.8, args.9, args.10,
    )
    .unwrap();
    assert_eq!(risk, 7.899575424594809);

    let risk = calculate_30yr_cvd_risk(
        args.0, args.1, args.2, args.3, args.4, args.5, args.6, args.7, args.8, args.9, args.10,
    )
    .unwrap();
    assert_eq!(risk, 38.87732034588902);
}

#[test]
fn test_female_reference_batch() {
    let input = [female_reference()];
    let batches = [
        batch_calculate_10yr_ascvd_risk(&input).unwrap(),
        batch_calculate_30yr_ascvd_risk(&input).unwrap(),
        batch_calculate_10yr_cvd_risk(&input).unwrap(),
        batch_calculate_30yr_cvd_risk(&input).unwrap(),
    ];
    for (batch, (equation, expected)) in batches.iter().zip(FEMALE_REFERENCE_RISKS) {
        assert_eq!(batch, &vec![expected], "{equation}");
    }
}

#[test]
fn test_male_reference() {
    let risk = calculate_10yr_ascvd_risk(
        "MALE", 68.0, 300.0, 85.0, 150.0, false, true, 35.0, 65.0, false, true,
    )
    .unwrap();
    assert_close(risk, 12.9, RISK_TOLERANCE);

    let risk = calculate_10yr_cvd_risk(
        "MALE", 68.0, 300.0, 85.0, 150.0, false, true, 35.0, 65.0, false, true,
    )
    .unwrap();
    assert_close(risk, 18.2, RISK_TOLERANCE);
}

#[test]
fn test_male_young_and_midlife() {
    assert_close(
        calculate_risk(&male_young_reference(), Equation::CVD_10YR).unwrap(),
        8.1,
        RISK_TOLERANCE,
    );
    assert_close(
        calculate_risk(&male_young_reference(), Equation::ASCVD_30YR).unwrap(),
        23.7,
        RISK_TOLERANCE,
    );
    assert_close(
        calculate_risk(&male_young_reference(), Equation::CVD_30YR).unwrap(),
        37.7,
        RISK_TOLERANCE,
    );
    assert_close(
        calculate_risk(&male_midlife_reference(), Equation::CVD_30YR).unwrap(),
        40.2,
        RISK_TOLERANCE,
    );
}

#[test]
fn test_age_below_range() {
    let err = calculate_10yr_ascvd_risk(
        "female", 29.0, 200.0, 50.0, 120.0, true, true, 25.0, 70.0, true, true,
    )
    .unwrap_err();
    assert_eq!(
        err,
        RiskError::OutOfRange {
            field: Field::Age,
            value: 29.0,
            bound: 30.0,
        }
    );
}

#[test]
fn test_bmi_below_range() {
    let err = calculate_10yr_cvd_risk(
        "female", 40.0, 200.0, 50.0, 120.0, true, true, 18.4, 70.0, true, true,
    )
    .unwrap_err();
    assert_eq!(
        err,
        RiskError::OutOfRange {
            field: Field::Bmi,
            value: 18.4,
            bound: 18.5,
        }
    );
}

#[test]
fn test_unknown_sex() {
    let err = calculate_30yr_cvd_risk(
        "unknown", 40.0, 200.0, 50.0, 120.0, true, true, 25.0, 70.0, true, true,
    )
    .unwrap_err();
    assert_eq!(err, RiskError::InvalidSex("unknown".to_string()));
}

#[test]
fn test_lower_bounds_inclusive() {
    let bounds = [
        (Field::Age, 30.0),
        (Field::TotalCholesterol, 130.0),
        (Field::HdlCholesterol, 20.0),
        (Field::SystolicBp, 90.0),
        (Field::Bmi, 18.5),
        (Field::Egfr, 15.0),
    ];
    for (field, bound) in bounds {
        let at = with_field(&female_reference(), field, bound);
        assert!(calculate_risk(&at, Equation::ASCVD_10YR).is_ok(), "{field}");

        let below = with_field(&female_reference(), field, bound - 1.0);
        let err = calculate_risk(&below, Equation::ASCVD_10YR).unwrap_err();
        assert_eq!(err.field(), Some(field));
    }
}

#[test]
fn test_batch_reports_first_invalid_row() {
    let mut input = rows(&female_reference(), 3);
    input[1].age = 25.0;
    input[2].sex = "x".to_string();

    let err = batch_calculate_10yr_cvd_risk(&input).unwrap_err();
    assert_eq!(err.row, 1);
    assert_eq!(err.source.field(), Some(Field::Age));
}

#[test]
fn test_batch_of_identical_rows() {
    let single = calculate_risk(&male_reference(), Equation::ASCVD_10YR).unwrap();
    let batch = batch_calculate_10yr_ascvd_risk(&rows(&male_reference(), 10)).unwrap();
    assert_eq!(batch, vec![single; 10]);
}

#[test]
fn test_calculate_all() {
    let profile = calculate_all(&female_reference()).unwrap();
    assert_eq!(
        profile,
        RiskProfile {
            ascvd_10yr: 4.723678963112583,
            cvd_10yr: 7.899575424594809,
            ascvd_30yr: Some(23.4074103963271),
            cvd_30yr: Some(38.87732034588902),
        }
    );
}

#[test]
fn test_calculate_all_skips_thirty_year_for_older_patients() {
    let profile = calculate_all(&male_reference()).unwrap();
    assert_close(profile.ascvd_10yr, 12.9, RISK_TOLERANCE);
    assert_close(profile.cvd_10yr, 18.2, RISK_TOLERANCE);
    assert_eq!(profile.ascvd_30yr, None);
    assert_eq!(profile.cvd_30yr, None);
}

#[test]
fn test_calculate_all_rejects_invalid_record() {
    let inputs = with_field(&female_reference(), Field::Egfr, 200.0);
    assert_eq!(
        calculate_all(&inputs).unwrap_err(),
        RiskError::OutOfRange {
            field: Field::Egfr,
            value: 200.0,
            bound: 140.0,
        }
    );
}
