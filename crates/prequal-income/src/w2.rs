//! W-2 income analysis.
//!
//! Separates stable base pay from variable earnings (overtime, bonus,
//! commission), averages the variable portion over documented history,
//! and flags the trend concerns underwriters look for:
//!
//! - variable income included with under 12 months of history
//! - prior-year variable earnings running more than 20% ahead of the
//!   annualized year-to-date pace
//! - prior-year base pay more than 20% above the current annualized base

use std::collections::BTreeMap;

use prequal_core::types::{BorrowerId, MONTHS_PER_YEAR};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::records::{non_negative, PayType, VariableAveraging, W2Record};

const WEEKS_PER_YEAR: Decimal = dec!(52);
const MIN_HISTORY_MONTHS: Decimal = dec!(12);
const DECLINE_RATIO: Decimal = dec!(1.2);

/// Per-borrower W-2 income summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct W2Summary {
    /// Borrower the summary belongs to.
    pub borrower: BorrowerId,
    /// Monthly base pay across all employments.
    pub base_monthly: Decimal,
    /// Averaged monthly variable earnings across all employments.
    pub variable_monthly: Decimal,
    /// Qualifying monthly income (base, plus variable where opted in).
    pub qualifying_monthly: Decimal,
    /// Variable earnings history shorter than 12 months on any employment.
    pub insufficient_history: bool,
    /// Variable earnings trending down on any employment.
    pub declining_variable: bool,
    /// Base pay trending down on any employment.
    pub declining_base: bool,
}

/// Analyzes W-2 records into per-borrower monthly summaries.
///
/// Negative worksheet amounts clamp to zero before use. Output is ordered
/// by borrower id.
///
/// # Example
///
/// ```rust
/// use prequal_income::prelude::*;
/// use rust_decimal_macros::dec;
///
/// let records = vec![W2Record {
///     pay_type: PayType::Hourly,
///     hourly_rate: dec!(20),
///     hours_per_week: dec!(40),
///     ..Default::default()
/// }];
/// let summary = &analyze_w2(&records)[0];
/// assert_eq!(summary.base_monthly.round_dp(2), dec!(3466.67));
/// ```
#[must_use]
pub fn analyze_w2(records: &[W2Record]) -> Vec<W2Summary> {
    let mut by_borrower: BTreeMap<BorrowerId, W2Summary> = BTreeMap::new();

    for record in records {
        let row = analyze_record(record);
        let entry = by_borrower.entry(record.borrower).or_insert(W2Summary {
            borrower: record.borrower,
            ..W2Summary::default()
        });
        entry.base_monthly += row.base_monthly;
        entry.variable_monthly += row.variable_monthly;
        entry.qualifying_monthly += row.qualifying_monthly;
        entry.insufficient_history |= row.insufficient_history;
        entry.declining_variable |= row.declining_variable;
        entry.declining_base |= row.declining_base;
    }

    by_borrower.into_values().collect()
}

fn analyze_record(record: &W2Record) -> W2Summary {
    let base_monthly = match record.pay_type {
        PayType::Salary => non_negative(record.annual_salary) / MONTHS_PER_YEAR,
        PayType::Hourly => {
            non_negative(record.hourly_rate) * non_negative(record.hours_per_week)
                * WEEKS_PER_YEAR
                / MONTHS_PER_YEAR
        }
    };

    let variable_ytd = non_negative(record.overtime_ytd)
        + non_negative(record.bonus_ytd)
        + non_negative(record.commission_ytd);
    let variable_last_year = non_negative(record.overtime_last_year)
        + non_negative(record.bonus_last_year)
        + non_negative(record.commission_last_year);
    let months_ytd = non_negative(record.months_ytd);
    let history_months = months_ytd + non_negative(record.months_last_year);

    let divisor = match record.averaging {
        VariableAveraging::TwentyFourMonths => dec!(24),
        VariableAveraging::ActualMonths => history_months,
    };
    let variable_monthly = if divisor.is_zero() {
        Decimal::ZERO
    } else {
        (variable_ytd + variable_last_year) / divisor
    };

    // Annualize the YTD pace; with no YTD months the pace is zero and any
    // prior-year variable income reads as a decline.
    let ytd_annualized = if months_ytd.is_zero() {
        Decimal::ZERO
    } else {
        variable_ytd / months_ytd * MONTHS_PER_YEAR
    };
    let declining_variable = variable_last_year > DECLINE_RATIO * ytd_annualized;

    let base_annual = base_monthly * MONTHS_PER_YEAR;
    let declining_base = non_negative(record.base_last_year) > DECLINE_RATIO * base_annual;

    let qualifying_monthly = if record.include_variable {
        base_monthly + variable_monthly
    } else {
        base_monthly
    };

    W2Summary {
        borrower: record.borrower,
        base_monthly,
        variable_monthly,
        qualifying_monthly,
        insufficient_history: history_months < MIN_HISTORY_MONTHS,
        declining_variable,
        declining_base,
    }
}
