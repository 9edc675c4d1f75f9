use super::*;

const SEXES: [Sex; 2] = [Sex::Female, Sex::Male];

#[test]
fn test_term_order_matches_index() {
    for (i, term) in Term::ALL.iter().enumerate() {
        assert_eq!(term.index(), i, "{term}");
    }
    assert_eq!(Term::ALL.len(), Term::COUNT);
}

#[test]
fn test_select_spot_values() {
    let table = CoefficientTable::prevent();

    let f10a = table.select(Equation::ASCVD_10YR, Sex::Female);
    assert_eq!(f10a.coefficient(Term::Age), 0.719883);
    assert_eq!(f10a.coefficient(Term::AgeByEgfr), -0.1671492);

    let m30a = table.select(Equation::ASCVD_30YR, Sex::Male);
    assert_eq!(m30a.coefficient(Term::AgeSquared), -0.0937484);
    assert_eq!(m30a.coefficient(Term::EgfrBelow60), -0.0218789);

    let f10c = table.select(Equation::CVD_10YR, Sex::Female);
    assert_eq!(f10c.coefficient(Term::Intercept), -3.307728);
    assert_eq!(f10c.coefficient(Term::SbpAbove110), 0.3600781);

    let m30c = table.select(Equation::CVD_30YR, Sex::Male);
    assert_eq!(m30c.coefficient(Term::Intercept), -1.148204);
    assert_eq!(m30c.coefficient(Term::CholesterolMeds), -0.0272112);
    assert_eq!(m30c.coefficient(Term::HtnMedsBySbp), -0.0384488);
}

#[test]
fn test_every_combination_is_distinct() {
    let table = CoefficientTable::prevent();
    let mut seen: Vec<&CoefficientSet> = Vec::new();

    for equation in Equation::ALL {
        for sex in SEXES {
            let set = table.select(equation, sex);
            assert!(
                !seen.iter().any(|s| *s == set),
                "{equation} {sex} duplicates another set"
            );
            seen.push(set);
        }
    }
    assert_eq!(seen.len(), 8);
}

#[test]
fn test_age_squared_only_in_thirty_year_sets() {
    let table = CoefficientTable::prevent();
    for equation in Equation::ALL {
        for sex in SEXES {
            let age_squared = table.select(equation, sex).coefficient(Term::AgeSquared);
            match equation.horizon {
                Horizon::TenYear => assert_eq!(age_squared, 0.0),
                Horizon::ThirtyYear => assert!(age_squared < 0.0),
            }
        }
    }
}

#[test]
fn test_published_sets_are_logistic() {
    let table = CoefficientTable::prevent();
    assert_eq!(table.version(), "prevent-2023-base");
    for equation in Equation::ALL {
        for sex in SEXES {
            assert_eq!(
                table.select(equation, sex).transform(),
                RiskTransform::Logistic
            );
        }
    }
}

#[test]
fn test_from_fn_and_with_set() {
    let intercept_only = |value: f64| {
        CoefficientSet::new([0.0; Term::COUNT], RiskTransform::Logistic)
            .with_coefficient(Term::Intercept, value)
    };

    let table = CoefficientTable::from_fn("synthetic", |_, _| intercept_only(-1.0));
    assert_eq!(table.version(), "synthetic");
    assert_eq!(
        table
            .select(Equation::CVD_30YR, Sex::Male)
            .coefficient(Term::Intercept),
        -1.0
    );

    let table = table.with_set(Equation::ASCVD_10YR, Sex::Female, intercept_only(2.0));
    assert_eq!(
        table
            .select(Equation::ASCVD_10YR, Sex::Female)
            .coefficient(Term::Intercept),
        2.0
    );
    assert_eq!(
        table
            .select(Equation::ASCVD_10YR, Sex::Male)
            .coefficient(Term::Intercept),
        -1.0
    );
}

#[test]
fn test_iter_pairs_in_order() {
    let set = CoefficientTable::prevent().select(Equation::CVD_10YR, Sex::Male);
    let pairs: Vec<_> = set.iter().collect();

    assert_eq!(pairs.len(), Term::COUNT);
    assert_eq!(pairs[0], (Term::Age, 0.7688528));
    assert_eq!(pairs[2], (Term::Intercept, -3.031168));
    assert_eq!(pairs[Term::COUNT - 1], (Term::AgeByEgfr, -0.1543702));
}

#[test]
fn test_published_accumulation_orders() {
    let table = CoefficientTable::prevent();
    for sex in SEXES {
        assert_eq!(
            table.select(Equation::ASCVD_10YR, sex).accumulation(),
            Accumulation::ScaledProductsExceptSbp
        );
        assert_eq!(
            table.select(Equation::ASCVD_30YR, sex).accumulation(),
            Accumulation::ScaledProducts
        );
        assert_eq!(
            table.select(Equation::CVD_10YR, sex).accumulation(),
            Accumulation::ScaledTerms
        );
        assert_eq!(
            table.select(Equation::CVD_30YR, sex).accumulation(),
            Accumulation::ScaledProducts
        );
    }
}

#[test]
fn test_accumulation_orders_cover_every_term() {
    let variants = [
        Accumulation::ScaledTerms,
        Accumulation::ScaledProducts,
        Accumulation::ScaledProductsExceptSbp,
    ];
    for accumulation in variants {
        let mut sorted = *accumulation.order();
        sorted.sort();
        assert_eq!(sorted, Term::ALL, "{accumulation:?}");
    }
    assert_eq!(Accumulation::ScaledProducts.order()[1], Term::Intercept);
    assert_eq!(Accumulation::ScaledTerms.order()[1], Term::AgeSquared);
}

#[test]
fn test_scaling_rules() {
    assert!(Accumulation::ScaledTerms.scales_before_product(Term::Hdl));
    assert!(!Accumulation::ScaledTerms.scales_before_product(Term::AgeByHdl));
    assert!(!Accumulation::ScaledProducts.scales_before_product(Term::SbpAbove110));
    assert!(Accumulation::ScaledProductsExceptSbp.scales_before_product(Term::AgeBySbp));
    assert!(!Accumulation::ScaledProductsExceptSbp.scales_before_product(Term::EgfrBelow60));
}

#[test]
fn test_new_sets_default_to_scaled_terms() {
    let set = CoefficientSet::new([0.0; Term::COUNT], RiskTransform::Logistic);
    assert_eq!(set.accumulation(), Accumulation::ScaledTerms);
    assert_eq!(set.accumulation(), Accumulation::default());

    let set = set.with_accumulation(Accumulation::ScaledProducts);
    assert_eq!(set.accumulation(), Accumulation::ScaledProducts);
}
