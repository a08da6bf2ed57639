//! Maximum qualifying loan solver and scenario grids.
//!
//! The binding affordable P&I converts to an adjusted-loan ceiling via
//! inverse amortization. Because financed upfront fees depend on the base
//! loan (and, through LTV bands, discontinuously so), the base loan is
//! then found by bisection: grow the base until its fee-adjusted balance
//! would exceed the ceiling.

use prequal_core::amortization::principal_from_payment;
use prequal_core::types::{DtiRatios, LoanProgram};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::dti::{dti, max_affordable_pi};
use crate::error::QualifyResult;
use crate::fees::{apply_program_fees, FeePolicy};

/// Bisection depth; 20 halvings resolve a $1M ceiling to about a dollar.
const BISECTION_ITERATIONS: u32 = 20;

/// Inputs to the max-qualifying-loan solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualifyingInputs {
    /// Total monthly qualifying income.
    pub total_income: Decimal,
    /// Monthly liabilities other than housing.
    pub other_liabilities: Decimal,
    /// Monthly taxes, insurance, HOA, and MI assumed for the target home.
    pub taxes_ins_hoa_mi: Decimal,
    /// Target front-end DTI, percent.
    pub target_front_pct: Decimal,
    /// Target back-end DTI, percent.
    pub target_back_pct: Decimal,
    /// Note rate, percent.
    pub rate_pct: Decimal,
    /// Amortization term, years.
    pub term_years: u32,
    /// Cash down payment.
    pub down_payment: Decimal,
    /// Loan program.
    pub program: LoanProgram,
}

/// Result of the max-qualifying-loan solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaxQualifyingLoan {
    /// The binding affordable P&I payment.
    pub max_pi: Decimal,
    /// Maximum base loan before financed fees.
    pub base_loan: Decimal,
    /// Fee-adjusted loan balance at the maximum.
    pub adjusted_loan: Decimal,
    /// Implied purchase price (base loan + down payment).
    pub purchase_price: Decimal,
}

/// Solves for the maximum loan amount given DTI targets and cash down.
///
/// Degenerate inputs (no affordable P&I) return zeros with the purchase
/// price equal to the down payment.
///
/// # Errors
///
/// Returns an error for a zero-year term.
pub fn max_qualifying_loan(
    inputs: &QualifyingInputs,
    policy: &FeePolicy,
) -> QualifyResult<MaxQualifyingLoan> {
    let afford = max_affordable_pi(
        inputs.total_income,
        inputs.other_liabilities,
        inputs.taxes_ins_hoa_mi,
        inputs.target_front_pct,
        inputs.target_back_pct,
    );
    if afford.binding <= Decimal::ZERO {
        return Ok(MaxQualifyingLoan {
            max_pi: Decimal::ZERO,
            base_loan: Decimal::ZERO,
            adjusted_loan: Decimal::ZERO,
            purchase_price: inputs.down_payment,
        });
    }

    let adjusted_limit =
        principal_from_payment(afford.binding, inputs.rate_pct, inputs.term_years)?;

    let mut low = Decimal::ZERO;
    let mut high = adjusted_limit;
    for _ in 0..BISECTION_ITERATIONS {
        let mid = (low + high) / dec!(2);
        let fees = apply_program_fees(
            inputs.program,
            mid + inputs.down_payment,
            mid,
            inputs.down_payment,
            inputs.term_years,
            policy,
        );
        if fees.adjusted_loan > adjusted_limit {
            high = mid;
        } else {
            low = mid;
        }
    }

    let base_loan = low;
    let purchase_price = base_loan + inputs.down_payment;
    let fees = apply_program_fees(
        inputs.program,
        purchase_price,
        base_loan,
        inputs.down_payment,
        inputs.term_years,
        policy,
    );
    tracing::debug!(
        %base_loan,
        adjusted_loan = %fees.adjusted_loan,
        %adjusted_limit,
        "max qualifying loan solved"
    );

    Ok(MaxQualifyingLoan {
        max_pi: afford.binding,
        base_loan,
        adjusted_loan: fees.adjusted_loan,
        purchase_price,
    })
}

/// One solved scenario in a what-if grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioOutcome {
    /// Maximum base loan.
    pub max_loan: Decimal,
    /// Maximum purchase price.
    pub max_purchase: Decimal,
    /// DTI ratios at the maximum payment.
    pub dti: DtiRatios,
}

/// What-if grid around a base qualification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhatIfReport {
    /// The base scenario.
    pub base: ScenarioOutcome,
    /// Down payment increased by $10,000.
    pub down_payment_plus_10k: ScenarioOutcome,
    /// Rate increased by 0.25%.
    pub rate_plus_quarter_pct: ScenarioOutcome,
    /// Other monthly liabilities increased by $300.
    pub debts_plus_300: ScenarioOutcome,
}

/// Solves the standard what-if grid around the base inputs.
///
/// # Errors
///
/// Returns an error for a zero-year term.
pub fn what_if_max_qualifying(
    inputs: &QualifyingInputs,
    policy: &FeePolicy,
) -> QualifyResult<WhatIfReport> {
    let base = solve_outcome(inputs, policy)?;

    let mut more_down = *inputs;
    more_down.down_payment += dec!(10000);
    let down_payment_plus_10k = solve_outcome(&more_down, policy)?;

    let mut higher_rate = *inputs;
    higher_rate.rate_pct += dec!(0.25);
    let rate_plus_quarter_pct = solve_outcome(&higher_rate, policy)?;

    let mut more_debt = *inputs;
    more_debt.other_liabilities += dec!(300);
    let debts_plus_300 = solve_outcome(&more_debt, policy)?;

    Ok(WhatIfReport {
        base,
        down_payment_plus_10k,
        rate_plus_quarter_pct,
        debts_plus_300,
    })
}

/// Base-versus-alternative scenario comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioComparison {
    /// The base scenario.
    pub base: ScenarioOutcome,
    /// The alternative scenario.
    pub alternative: ScenarioOutcome,
}

/// Compares the base inputs against an alternative rate and/or down payment.
///
/// # Errors
///
/// Returns an error for a zero-year term.
pub fn compare_scenarios(
    inputs: &QualifyingInputs,
    policy: &FeePolicy,
    alt_rate_pct: Option<Decimal>,
    alt_down_payment: Option<Decimal>,
) -> QualifyResult<ScenarioComparison> {
    let base = solve_outcome(inputs, policy)?;
    let mut alt = *inputs;
    if let Some(rate) = alt_rate_pct {
        alt.rate_pct = rate;
    }
    if let Some(down) = alt_down_payment {
        alt.down_payment = down;
    }
    let alternative = solve_outcome(&alt, policy)?;
    Ok(ScenarioComparison { base, alternative })
}

fn solve_outcome(inputs: &QualifyingInputs, policy: &FeePolicy) -> QualifyResult<ScenarioOutcome> {
    let solved = max_qualifying_loan(inputs, policy)?;
    let front_housing = solved.max_pi + inputs.taxes_ins_hoa_mi;
    let ratios = dti(
        front_housing,
        front_housing + inputs.other_liabilities,
        inputs.total_income,
    );
    Ok(ScenarioOutcome {
        max_loan: solved.base_loan,
        max_purchase: solved.purchase_price,
        dti: ratios,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(program: LoanProgram) -> QualifyingInputs {
        QualifyingInputs {
            total_income: dec!(10000),
            other_liabilities: dec!(500),
            taxes_ins_hoa_mi: dec!(300),
            target_front_pct: dec!(31),
            target_back_pct: dec!(45),
            rate_pct: dec!(6.5),
            term_years: 30,
            down_payment: dec!(20000),
            program,
        }
    }

    #[test]
    fn test_fha_financed_solution() {
        let result = max_qualifying_loan(&inputs(LoanProgram::Fha), &FeePolicy::default()).unwrap();
        assert!(result.adjusted_loan >= result.base_loan);
        assert!((result.purchase_price - (result.base_loan + dec!(20000))).abs() < dec!(0.000001));
    }

    #[test]
    fn test_adjusted_loan_respects_payment_ceiling() {
        let qualifying = inputs(LoanProgram::Fha);
        let result = max_qualifying_loan(&qualifying, &FeePolicy::default()).unwrap();
        let limit =
            principal_from_payment(result.max_pi, qualifying.rate_pct, qualifying.term_years)
                .unwrap();
        assert!(result.adjusted_loan <= limit + dec!(1));
    }

    #[test]
    fn test_no_affordable_payment_degenerates() {
        let mut broke = inputs(LoanProgram::Conventional);
        broke.total_income = dec!(1000);
        broke.taxes_ins_hoa_mi = dec!(800);
        let result = max_qualifying_loan(&broke, &FeePolicy::default()).unwrap();
        assert_eq!(result.base_loan, dec!(0));
        assert_eq!(result.purchase_price, dec!(20000));
    }

    #[test]
    fn test_what_if_directions() {
        let report =
            what_if_max_qualifying(&inputs(LoanProgram::Conventional), &FeePolicy::default())
                .unwrap();
        assert!(report.down_payment_plus_10k.max_loan >= report.base.max_loan);
        assert!(report.rate_plus_quarter_pct.max_loan < report.base.max_loan);
        assert!(report.debts_plus_300.dti.back_end > report.base.dti.back_end);
    }

    #[test]
    fn test_compare_scenarios_better_terms_win() {
        let comparison = compare_scenarios(
            &inputs(LoanProgram::Conventional),
            &FeePolicy::default(),
            Some(dec!(6.0)),
            Some(dec!(30000)),
        )
        .unwrap();
        assert!(comparison.alternative.max_purchase > comparison.base.max_purchase);
    }
}
