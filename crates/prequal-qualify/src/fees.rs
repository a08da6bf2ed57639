//! LTV and program-specific fee application.
//!
//! Each program treats mortgage insurance and upfront fees differently:
//!
//! - **Conventional**: annual private MI by LTV band, no upfront fee
//! - **FHA**: upfront MIP (optionally financed) plus annual MIP on the
//!   adjusted balance
//! - **VA**: upfront funding fee (optionally financed), no monthly MI
//! - **USDA**: upfront guarantee (optionally financed) plus annual fee
//! - **Jumbo**: neither
//!
//! When an upfront fee is financed, LTV is recomputed on the financed
//! balance, which can push FHA loans across an MIP band.

use prequal_core::presets::{
    ConvMiBands, FhaMipTable, UsdaFeeTable, VaFundingFeeTable, CONV_MI_BANDS, FHA_TABLES,
    USDA_TABLE, VA_TABLE,
};
use prequal_core::types::{FicoBucket, LoanProgram, MONTHS_PER_YEAR};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The fee schedule bundle for all programs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeTables {
    /// Conventional MI bands.
    pub conventional_mi: ConvMiBands,
    /// FHA MIP schedule.
    pub fha: FhaMipTable,
    /// VA funding fee schedule.
    pub va: VaFundingFeeTable,
    /// USDA fee table.
    pub usda: UsdaFeeTable,
}

impl Default for FeeTables {
    fn default() -> Self {
        Self {
            conventional_mi: CONV_MI_BANDS,
            fha: FHA_TABLES,
            va: VA_TABLE,
            usda: USDA_TABLE,
        }
    }
}

/// Fee policy for a qualification run: tables plus the toggles that vary
/// per application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeePolicy {
    /// Fee schedules.
    pub tables: FeeTables,
    /// Finance the upfront fee into the loan instead of paying cash.
    pub finance_upfront: bool,
    /// First use of the VA entitlement.
    pub va_first_use: bool,
    /// Credit score bucket for MI lookups.
    pub fico_bucket: FicoBucket,
}

impl Default for FeePolicy {
    fn default() -> Self {
        Self {
            tables: FeeTables::default(),
            finance_upfront: true,
            va_first_use: true,
            fico_bucket: FicoBucket::default(),
        }
    }
}

/// Program fee application result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramFees {
    /// Loan balance after optionally financing the upfront fee.
    pub adjusted_loan: Decimal,
    /// Monthly mortgage insurance (or USDA annual fee) payment.
    pub monthly_mi: Decimal,
    /// Upfront fee amount (UFMIP, funding fee, or guarantee fee).
    pub upfront_fee: Decimal,
    /// Loan-to-value percentage on the final balance.
    pub ltv: Decimal,
}

/// Computes loan-to-value as a percentage.
///
/// A zero purchase price yields zero rather than dividing by zero; the
/// rules engine separately flags meaningless scenarios.
#[must_use]
pub fn compute_ltv(purchase_price: Decimal, loan: Decimal) -> Decimal {
    if purchase_price.is_zero() {
        return Decimal::ZERO;
    }
    Decimal::ONE_HUNDRED * loan / purchase_price
}

/// Applies program-specific fees to a base loan.
///
/// # Example
///
/// ```rust
/// use prequal_qualify::fees::{apply_program_fees, FeePolicy};
/// use prequal_core::types::LoanProgram;
/// use rust_decimal_macros::dec;
///
/// let fees = apply_program_fees(
///     LoanProgram::Va,
///     dec!(500000),
///     dec!(450000),
///     dec!(50000),
///     30,
///     &FeePolicy::default(),
/// );
/// assert!(fees.adjusted_loan > dec!(450000)); // financed funding fee
/// assert_eq!(fees.monthly_mi, dec!(0));       // VA has no monthly MI
/// ```
#[must_use]
pub fn apply_program_fees(
    program: LoanProgram,
    purchase_price: Decimal,
    base_loan: Decimal,
    down_payment: Decimal,
    term_years: u32,
    policy: &FeePolicy,
) -> ProgramFees {
    let ltv = compute_ltv(purchase_price, base_loan);
    let down_payment_pct = if purchase_price.is_zero() {
        Decimal::ZERO
    } else {
        Decimal::ONE_HUNDRED * down_payment / purchase_price
    };

    match program {
        LoanProgram::Conventional => {
            let bands = ConvMiBands::for_bucket(policy.fico_bucket);
            let annual_pct = bands.factor_for_ltv(ltv);
            ProgramFees {
                adjusted_loan: base_loan,
                monthly_mi: monthly_from_annual_pct(base_loan, annual_pct),
                upfront_fee: Decimal::ZERO,
                ltv,
            }
        }
        LoanProgram::Fha => {
            let upfront = base_loan * policy.tables.fha.ufmip_pct / Decimal::ONE_HUNDRED;
            let (adjusted, ltv) = finance(base_loan, upfront, purchase_price, ltv, policy);
            let annual_pct = policy.tables.fha.annual_factor(ltv, term_years);
            ProgramFees {
                adjusted_loan: adjusted,
                monthly_mi: monthly_from_annual_pct(adjusted, annual_pct),
                upfront_fee: upfront,
                ltv,
            }
        }
        LoanProgram::Va => {
            let fee_pct = policy.tables.va.fee_pct(policy.va_first_use, down_payment_pct);
            let upfront = base_loan * fee_pct / Decimal::ONE_HUNDRED;
            let (adjusted, ltv) = finance(base_loan, upfront, purchase_price, ltv, policy);
            ProgramFees {
                adjusted_loan: adjusted,
                monthly_mi: Decimal::ZERO,
                upfront_fee: upfront,
                ltv,
            }
        }
        LoanProgram::Usda => {
            let upfront = base_loan * policy.tables.usda.guarantee_pct / Decimal::ONE_HUNDRED;
            let (adjusted, ltv) = finance(base_loan, upfront, purchase_price, ltv, policy);
            ProgramFees {
                adjusted_loan: adjusted,
                monthly_mi: monthly_from_annual_pct(adjusted, policy.tables.usda.annual_pct),
                upfront_fee: upfront,
                ltv,
            }
        }
        LoanProgram::Jumbo => ProgramFees {
            adjusted_loan: base_loan,
            monthly_mi: Decimal::ZERO,
            upfront_fee: Decimal::ZERO,
            ltv,
        },
    }
}

fn monthly_from_annual_pct(balance: Decimal, annual_pct: Decimal) -> Decimal {
    balance * annual_pct / Decimal::ONE_HUNDRED / MONTHS_PER_YEAR
}

fn finance(
    base_loan: Decimal,
    upfront: Decimal,
    purchase_price: Decimal,
    base_ltv: Decimal,
    policy: &FeePolicy,
) -> (Decimal, Decimal) {
    if policy.finance_upfront {
        let adjusted = base_loan + upfront;
        (adjusted, compute_ltv(purchase_price, adjusted))
    } else {
        (base_loan, base_ltv)
    }
}
