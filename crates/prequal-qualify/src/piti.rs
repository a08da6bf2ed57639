//! PITI decomposition.
//!
//! Breaks the full monthly housing payment into principal & interest,
//! taxes, insurance, HOA dues, and mortgage insurance, with program
//! fees applied first.

use prequal_core::amortization::monthly_payment;
use prequal_core::types::{LoanProgram, MONTHS_PER_YEAR};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::QualifyResult;
use crate::fees::{apply_program_fees, FeePolicy};

/// A purchase scenario to decompose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HousingScenario {
    /// Loan program.
    pub program: LoanProgram,
    /// Purchase price of the subject property.
    pub purchase_price: Decimal,
    /// Base loan amount before financed fees.
    pub base_loan: Decimal,
    /// Note rate, percent.
    pub rate_pct: Decimal,
    /// Amortization term, years.
    pub term_years: u32,
    /// Annual property tax rate, percent of purchase price.
    pub tax_rate_pct: Decimal,
    /// Annual homeowner's insurance premium.
    pub hoi_annual: Decimal,
    /// Monthly HOA dues.
    pub hoa_monthly: Decimal,
}

/// The monthly housing payment, decomposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PitiComponents {
    /// Principal and interest on the adjusted loan.
    pub principal_interest: Decimal,
    /// Monthly property taxes.
    pub taxes: Decimal,
    /// Monthly homeowner's insurance.
    pub insurance: Decimal,
    /// Monthly HOA dues.
    pub hoa: Decimal,
    /// Monthly mortgage insurance or annual-fee equivalent.
    pub mortgage_insurance: Decimal,
    /// Total monthly housing payment (PITIA).
    pub total: Decimal,
    /// Loan balance after financed fees.
    pub adjusted_loan: Decimal,
    /// Loan-to-value percentage on the final balance.
    pub ltv: Decimal,
    /// Upfront fee amount.
    pub upfront_fee: Decimal,
}

/// Decomposes a housing scenario into PITI components.
///
/// The down payment is implied by `purchase_price - base_loan`.
///
/// # Errors
///
/// Returns an error for a zero-year term.
pub fn piti_components(
    scenario: &HousingScenario,
    policy: &FeePolicy,
) -> QualifyResult<PitiComponents> {
    let fees = apply_program_fees(
        scenario.program,
        scenario.purchase_price,
        scenario.base_loan,
        scenario.purchase_price - scenario.base_loan,
        scenario.term_years,
        policy,
    );
    let principal_interest =
        monthly_payment(fees.adjusted_loan, scenario.rate_pct, scenario.term_years)?;
    let taxes =
        scenario.purchase_price * scenario.tax_rate_pct / Decimal::ONE_HUNDRED / MONTHS_PER_YEAR;
    let insurance = scenario.hoi_annual / MONTHS_PER_YEAR;
    let hoa = scenario.hoa_monthly;
    let total = principal_interest + taxes + insurance + hoa + fees.monthly_mi;

    Ok(PitiComponents {
        principal_interest,
        taxes,
        insurance,
        hoa,
        mortgage_insurance: fees.monthly_mi,
        total,
        adjusted_loan: fees.adjusted_loan,
        ltv: fees.ltv,
        upfront_fee: fees.upfront_fee,
    })
}
