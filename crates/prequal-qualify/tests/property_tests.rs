//! Property-based tests for the max-qualifying-loan solver.
//!
//! These tests verify solver invariants across the realistic input space:
//! - The fee-adjusted loan never exceeds the payment-derived ceiling
//! - Purchase price always equals base loan plus down payment
//! - More income never qualifies for less; higher rates never for more

use proptest::prelude::*;
use prequal_core::amortization::principal_from_payment;
use prequal_core::types::LoanProgram;
use prequal_qualify::prelude::*;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn money(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap().round_dp(2)
}

fn inputs(income: f64, rate: f64, down: f64, program: LoanProgram) -> QualifyingInputs {
    QualifyingInputs {
        total_income: money(income),
        other_liabilities: dec!(400),
        taxes_ins_hoa_mi: dec!(500),
        target_front_pct: dec!(31),
        target_back_pct: dec!(45),
        rate_pct: money(rate),
        term_years: 30,
        down_payment: money(down),
        program,
    }
}

fn programs() -> impl Strategy<Value = LoanProgram> {
    prop_oneof![
        Just(LoanProgram::Conventional),
        Just(LoanProgram::Fha),
        Just(LoanProgram::Va),
        Just(LoanProgram::Usda),
        Just(LoanProgram::Jumbo),
    ]
}

proptest! {
    #[test]
    fn adjusted_loan_stays_within_ceiling(
        income in 3_000.0f64..40_000.0,
        rate in 1.0f64..10.0,
        down in 0.0f64..200_000.0,
        program in programs(),
    ) {
        let inputs = inputs(income, rate, down, program);
        let solved = max_qualifying_loan(&inputs, &FeePolicy::default()).unwrap();
        if solved.max_pi > Decimal::ZERO {
            let ceiling =
                principal_from_payment(solved.max_pi, inputs.rate_pct, inputs.term_years)
                    .unwrap();
            // Bisection converges from below; allow a dollar of resolution
            prop_assert!(solved.adjusted_loan <= ceiling + Decimal::ONE);
        }
        prop_assert!(solved.base_loan >= Decimal::ZERO);
    }

    #[test]
    fn purchase_price_is_base_plus_down(
        income in 3_000.0f64..40_000.0,
        rate in 1.0f64..10.0,
        down in 0.0f64..200_000.0,
        program in programs(),
    ) {
        let inputs = inputs(income, rate, down, program);
        let solved = max_qualifying_loan(&inputs, &FeePolicy::default()).unwrap();
        prop_assert_eq!(solved.purchase_price, solved.base_loan + inputs.down_payment);
    }

    #[test]
    fn max_loan_monotone_in_income(
        income in 3_000.0f64..30_000.0,
        bump in 500.0f64..10_000.0,
        rate in 1.0f64..10.0,
        program in programs(),
    ) {
        let low = max_qualifying_loan(
            &inputs(income, rate, 20_000.0, program),
            &FeePolicy::default(),
        ).unwrap();
        let high = max_qualifying_loan(
            &inputs(income + bump, rate, 20_000.0, program),
            &FeePolicy::default(),
        ).unwrap();
        prop_assert!(high.base_loan >= low.base_loan);
    }

    #[test]
    fn max_loan_antitone_in_rate(
        income in 5_000.0f64..30_000.0,
        rate in 1.0f64..8.0,
        bump in 0.5f64..4.0,
        program in programs(),
    ) {
        let cheap = max_qualifying_loan(
            &inputs(income, rate, 20_000.0, program),
            &FeePolicy::default(),
        ).unwrap();
        let dear = max_qualifying_loan(
            &inputs(income, rate + bump, 20_000.0, program),
            &FeePolicy::default(),
        ).unwrap();
        prop_assert!(dear.base_loan <= cheap.base_loan);
    }
}
