use loancalc_core::amortization::{effective_schedule, flat_schedule, LoanSummary, Method};
use loancalc_core::summary::{compare_methods, compute_loan_summaries};
use loancalc_core::{normalize, LoanCalcError, RawLoanInput, TermUnit};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// Fixtures
// ===========================================================================

fn loan(amount: f64, rate: f64, months: f64) -> RawLoanInput {
    RawLoanInput::new(amount, rate, months, TermUnit::Months)
}

/// A spread of inputs: even and uneven splits, long terms, discounts that
/// start, end mid-term or outlast the term, and a zero rate.
fn sample_inputs() -> Vec<RawLoanInput> {
    vec![
        loan(12_000_000.0, 12.0, 12.0),
        loan(1_200_000.0, 0.0, 12.0),
        loan(1_000.0, 7.0, 7.0),
        loan(150_000_000.0, 10.0, 60.0),
        loan(999_999.99, 18.5, 37.0),
        loan(250_000.0, 3.25, 360.0),
        loan(10_000_000.0, 10.0, 12.0).with_intro_discount(4.0, 3.0),
        loan(75_000_000.0, 9.5, 120.0).with_intro_discount(3.5, 24.0),
        loan(5_000_000.0, 6.0, 24.0).with_intro_discount(8.0, 6.0),
        loan(3_000_000.0, 11.0, 10.0).with_intro_discount(2.0, 30.0),
        loan(1.0, 12.0, 1.0),
    ]
}

fn both_methods(raw: &RawLoanInput) -> [LoanSummary; 2] {
    let params = normalize(raw).unwrap();
    [flat_schedule(&params), effective_schedule(&params)]
}

// ===========================================================================
// Properties over every sample
// ===========================================================================

#[test]
fn test_schedule_length_matches_months() {
    for raw in sample_inputs() {
        let months = normalize(&raw).unwrap().months() as usize;
        for summary in both_methods(&raw) {
            assert_eq!(summary.schedule.len(), months);
            for (i, entry) in summary.schedule.iter().enumerate() {
                assert_eq!(entry.month as usize, i + 1);
            }
        }
    }
}

#[test]
fn test_terminal_balance_is_exactly_zero() {
    for raw in sample_inputs() {
        for summary in both_methods(&raw) {
            let last = summary.schedule.last().unwrap();
            assert_eq!(last.remaining_balance, Decimal::ZERO);
        }
    }
}

#[test]
fn test_principal_is_conserved() {
    for raw in sample_inputs() {
        let params = normalize(&raw).unwrap();
        let tolerance = dec!(0.01) * Decimal::from(params.months());
        for summary in both_methods(&raw) {
            let repaid: Decimal = summary.schedule.iter().map(|e| e.principal_portion).sum();
            assert!(
                (repaid - params.principal()).abs() <= tolerance,
                "{:?}: repaid {} of {}",
                summary.method,
                repaid,
                params.principal()
            );
        }
    }
}

#[test]
fn test_ratios_reconcile() {
    let tolerance = dec!(0.000000001);
    for raw in sample_inputs() {
        for summary in both_methods(&raw) {
            for entry in &summary.schedule {
                assert_eq!(entry.payment, entry.principal_portion + entry.interest_portion);
                if entry.payment > Decimal::ZERO {
                    let total = entry.principal_ratio + entry.interest_ratio;
                    assert!((total - Decimal::ONE).abs() <= tolerance);
                } else {
                    assert_eq!(entry.principal_ratio, Decimal::ZERO);
                    assert_eq!(entry.interest_ratio, Decimal::ZERO);
                }
            }
        }
    }
}

#[test]
fn test_balance_is_non_increasing() {
    for raw in sample_inputs() {
        let principal = normalize(&raw).unwrap().principal();
        for summary in both_methods(&raw) {
            assert!(summary.schedule[0].remaining_balance <= principal);
            for pair in summary.schedule.windows(2) {
                assert!(pair[1].remaining_balance <= pair[0].remaining_balance);
            }
        }
    }
}

#[test]
fn test_totals_equal_sum_of_rows() {
    for raw in sample_inputs() {
        for summary in both_methods(&raw) {
            let interest: Decimal = summary.schedule.iter().map(|e| e.interest_portion).sum();
            let payment: Decimal = summary.schedule.iter().map(|e| e.payment).sum();
            assert_eq!(summary.total_interest, interest);
            assert_eq!(summary.total_payment, payment);
            assert_eq!(summary.monthly_payment, summary.schedule[0].payment);
        }
    }
}

#[test]
fn test_discount_flag_follows_window() {
    for raw in sample_inputs() {
        let params = normalize(&raw).unwrap();
        for summary in both_methods(&raw) {
            for entry in &summary.schedule {
                assert_eq!(entry.is_discounted, entry.month <= params.intro_discount_months());
            }
        }
    }
}

#[test]
fn test_zero_rate_methods_are_identical() {
    for amount in [1_200_000.0, 1_000.0, 987_654.32] {
        for months in [1.0, 7.0, 12.0, 240.0] {
            let [flat, effective] = both_methods(&loan(amount, 0.0, months));
            assert_eq!(flat.schedule, effective.schedule);
            assert_eq!(flat.total_interest, Decimal::ZERO);
            assert_eq!(effective.total_interest, Decimal::ZERO);
        }
    }
}

#[test]
fn test_flat_never_cheaper_than_effective() {
    for raw in sample_inputs() {
        let state = compute_loan_summaries(&raw).unwrap();
        let cmp = compare_methods(&state.flat, &state.effective);
        assert!(cmp.interest_delta >= Decimal::ZERO);
    }
}

// ===========================================================================
// Worked scenarios
// ===========================================================================

#[test]
fn test_scenario_flat_twelve_percent() {
    let [flat, _] = both_methods(&loan(12_000_000.0, 12.0, 12.0));
    for entry in &flat.schedule {
        assert_eq!(entry.interest_portion, dec!(120_000));
        assert_eq!(entry.principal_portion, dec!(1_000_000));
        assert_eq!(entry.payment, dec!(1_120_000));
    }
    assert_eq!(flat.total_interest, dec!(1_440_000));
    assert_eq!(flat.total_payment, dec!(13_440_000));
}

#[test]
fn test_scenario_effective_twelve_percent() {
    let [_, effective] = both_methods(&loan(12_000_000.0, 12.0, 12.0));
    let first = &effective.schedule[0];
    assert_eq!(effective.method, Method::Effective);
    assert_eq!(first.interest_portion, dec!(120_000));
    assert!((first.payment - dec!(1_066_186)).abs() < dec!(1));
    assert!((first.principal_portion - dec!(946_186)).abs() < dec!(1));
    assert!(effective.schedule[1].remaining_balance < first.remaining_balance);
    assert_eq!(effective.schedule[11].remaining_balance, Decimal::ZERO);
}

#[test]
fn test_scenario_zero_rate() {
    for summary in both_methods(&loan(1_200_000.0, 0.0, 12.0)) {
        for entry in &summary.schedule {
            assert_eq!(entry.payment, dec!(100_000));
            assert_eq!(entry.interest_portion, Decimal::ZERO);
            assert_eq!(entry.principal_portion, dec!(100_000));
        }
        assert_eq!(summary.total_interest, Decimal::ZERO);
    }
}

#[test]
fn test_scenario_flat_intro_discount() {
    let raw = loan(10_000_000.0, 10.0, 12.0).with_intro_discount(4.0, 3.0);
    let [flat, _] = both_methods(&raw);

    for entry in &flat.schedule[..3] {
        assert_eq!(entry.interest_portion, dec!(50_000));
    }
    for entry in &flat.schedule[3..] {
        assert_eq!(entry.interest_portion, dec!(83_333.33));
    }
    for entry in &flat.schedule[..11] {
        assert_eq!(entry.principal_portion, dec!(833_333.33));
    }
    let last = &flat.schedule[11];
    assert!((last.principal_portion - dec!(833_333.33)).abs() <= dec!(0.01));
    assert_eq!(last.remaining_balance, Decimal::ZERO);
}

#[test]
fn test_scenario_invalid_input() {
    let cases = vec![
        loan(0.0, 10.0, 12.0),
        loan(-1.0, 10.0, 12.0),
        loan(1_000_000.0, 10.0, 0.0),
        loan(1_000_000.0, -1.0, 12.0),
        loan(f64::NAN, 10.0, 12.0),
        RawLoanInput::new(1_000_000.0, 10.0, 0.02, TermUnit::Years),
    ];
    for raw in cases {
        assert!(matches!(
            compute_loan_summaries(&raw),
            Err(LoanCalcError::InvalidInput { .. })
        ));
    }
}

#[test]
fn test_scenario_discount_window_edges() {
    // 2.6 months discounts months 1 and 2 only
    let raw = loan(10_000_000.0, 10.0, 12.0).with_intro_discount(4.0, 2.6);
    let [flat, _] = both_methods(&raw);
    assert_eq!(flat.schedule[1].interest_portion, dec!(50_000));
    assert_eq!(flat.schedule[2].interest_portion, dec!(83_333.33));

    // a window longer than the term discounts every month
    let raw = loan(12_000_000.0, 12.0, 12.0).with_intro_discount(4.0, 1500.0);
    for summary in both_methods(&raw) {
        assert!(summary.schedule.iter().all(|e| e.is_discounted));
        assert_eq!(summary.schedule[11].remaining_balance, Decimal::ZERO);
    }
}

#[test]
fn test_scenario_provision_above_principal() {
    let raw = loan(1_000_000.0, 12.0, 12.0).with_provision(150.0);
    let state = compute_loan_summaries(&raw).unwrap();
    assert_eq!(state.provision_fee, dec!(1_500_000));
    assert_eq!(state.net_disbursement, Decimal::ZERO);
}

#[test]
fn test_json_round_trip_of_raw_input() {
    let raw: RawLoanInput = serde_json::from_str(
        r#"{
            "amount": "10000000",
            "rate": 10,
            "term": 1,
            "term_unit": "years",
            "include_intro_discount": true,
            "intro_discount_rate": "4",
            "intro_discount_duration": 3,
            "include_provision": false,
            "provision_rate": 2.5
        }"#,
    )
    .unwrap();

    let state = compute_loan_summaries(&raw).unwrap();
    assert_eq!(state.months, 12);
    assert_eq!(state.intro_discount_months, 3);
    assert_eq!(state.provision_rate_percent, Decimal::ZERO);
    assert_eq!(state.net_disbursement, dec!(10_000_000));
    assert_eq!(state.flat.schedule[0].interest_portion, dec!(50_000));
}
