//! Debt-to-income ratios, affordability ceilings, reserves, and DSCR.

use prequal_core::types::{DtiRatios, LoanProgram, Occupancy};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{QualifyError, QualifyResult};

/// Minimum debt-service coverage ratio before flagging.
pub const DSCR_MINIMUM: Decimal = dec!(1.00);

/// Computes front-end and back-end DTI ratios.
///
/// Zero income yields zero ratios; the rules engine raises the
/// no-income finding separately.
///
/// # Example
///
/// ```rust
/// use prequal_qualify::dti::dti;
/// use rust_decimal_macros::dec;
///
/// let ratios = dti(dec!(2800), dec!(3600), dec!(10000));
/// assert_eq!(ratios.front_end, dec!(0.28));
/// assert_eq!(ratios.back_end, dec!(0.36));
/// ```
#[must_use]
pub fn dti(front_housing: Decimal, all_liabilities: Decimal, total_income: Decimal) -> DtiRatios {
    if total_income.is_zero() {
        return DtiRatios::default();
    }
    DtiRatios::new(front_housing / total_income, all_liabilities / total_income)
}

/// Affordable principal & interest under each DTI constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffordablePayment {
    /// Maximum P&I under the front-end target.
    pub front_end_max: Decimal,
    /// Maximum P&I under the back-end target.
    pub back_end_max: Decimal,
    /// The binding constraint (minimum of the two).
    pub binding: Decimal,
}

/// Maximum principal & interest payment given DTI targets.
///
/// Both ceilings floor at zero: DTI room consumed by escrows or other
/// liabilities never turns into a negative allowance.
#[must_use]
pub fn max_affordable_pi(
    total_income: Decimal,
    other_liabilities: Decimal,
    taxes_ins_hoa_mi: Decimal,
    target_front_pct: Decimal,
    target_back_pct: Decimal,
) -> AffordablePayment {
    let front_end_max = (total_income * target_front_pct / Decimal::ONE_HUNDRED
        - taxes_ins_hoa_mi)
        .max(Decimal::ZERO);
    let back_end_max = (total_income * target_back_pct / Decimal::ONE_HUNDRED
        - other_liabilities
        - taxes_ins_hoa_mi)
        .max(Decimal::ZERO);
    AffordablePayment {
        front_end_max,
        back_end_max,
        binding: front_end_max.min(back_end_max),
    }
}

/// Months-of-PITIA reserve requirement by occupancy.
///
/// Primary residences need 2 months, second homes 4, investment
/// properties 6. The program parameter is reserved for lender overlays;
/// the default months do not vary by program.
#[must_use]
pub fn reserve_requirement(
    monthly_pitia: Decimal,
    occupancy: Occupancy,
    _program: LoanProgram,
) -> Decimal {
    let months = match occupancy {
        Occupancy::Primary => dec!(2),
        Occupancy::SecondHome => dec!(4),
        Occupancy::Investment => dec!(6),
    };
    monthly_pitia * months
}

/// Debt-service coverage result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DscrResult {
    /// Market rent over PITIA.
    pub ratio: Decimal,
    /// True when the ratio falls below [`DSCR_MINIMUM`].
    pub below_minimum: bool,
}

/// Computes the debt-service coverage ratio for an investment property.
///
/// # Errors
///
/// Returns [`QualifyError::InvalidInput`] when PITIA is not positive.
pub fn dscr(market_rent: Decimal, monthly_pitia: Decimal) -> QualifyResult<DscrResult> {
    if monthly_pitia <= Decimal::ZERO {
        return Err(QualifyError::invalid_input(
            monthly_pitia,
            "PITIA must be positive for DSCR",
        ));
    }
    let ratio = market_rent / monthly_pitia;
    Ok(DscrResult {
        ratio,
        below_minimum: ratio < DSCR_MINIMUM,
    })
}
