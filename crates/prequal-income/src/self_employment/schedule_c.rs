//! Schedule C (sole proprietorship) analysis.
//!
//! ## Formula
//!
//! ```text
//! adjusted = net profit
//!          + nonrecurring + depletion + depreciation
//!          + use of home + amortization/casualty
//!          + business miles * mileage depreciation rate
//!          - non-deductible meals
//! ```

use crate::averaging::{AveragingMethod, SourceSummary, YearlyTotals};
use crate::records::ScheduleCRecord;

/// Analyzes Schedule C records into per-borrower monthly summaries.
///
/// Multiple businesses for the same borrower and year sum before
/// averaging. Output is ordered by borrower id.
///
/// # Example
///
/// ```rust
/// use prequal_income::prelude::*;
/// use rust_decimal_macros::dec;
///
/// let record = ScheduleCRecord {
///     year: 2024.into(),
///     net_profit: dec!(84000),
///     depreciation: dec!(6000),
///     ..Default::default()
/// };
/// let summary = &analyze_schedule_c(&[record], AveragingMethod::AllYears)[0];
/// assert_eq!(summary.monthly, dec!(7500));
/// ```
#[must_use]
pub fn analyze_schedule_c(
    records: &[ScheduleCRecord],
    method: AveragingMethod,
) -> Vec<SourceSummary> {
    let mut totals = YearlyTotals::new();
    for record in records {
        let mileage_depreciation = record.business_miles * record.mile_depreciation_rate;
        let adjusted = record.net_profit
            + record.nonrecurring
            + record.depletion
            + record.depreciation
            + record.use_of_home
            + record.amortization_casualty
            + mileage_depreciation
            - record.non_deductible_meals;
        totals.add(record.borrower, record.year, adjusted);
    }
    totals.summarize(method)
}
