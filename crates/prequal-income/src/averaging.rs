//! Multi-year averaging and decline detection.
//!
//! Self-employment and Schedule E analyses share one shape: adjust each
//! record to an annual figure, sum per (borrower, tax year), then average
//! across years (or take the latest year only) and check the year-over-year
//! trend. This module holds that shared machinery.

use std::collections::BTreeMap;

use prequal_core::types::{BorrowerId, TaxYear, MONTHS_PER_YEAR};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// How multi-year income is reduced to a single annual figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AveragingMethod {
    /// Average all documented years
    #[default]
    AllYears,
    /// Use only the most recent year (conservative when trending down)
    MostRecentYear,
}

/// A year-over-year decline beyond this share of the prior year flags.
///
/// Latest-year income below 80% of the prior year (a >20% drop) is the
/// conventional underwriting concern threshold.
pub const DECLINE_THRESHOLD: Decimal = dec!(0.8);

/// Monthly qualifying income for one borrower from one source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSummary {
    /// Borrower the income belongs to.
    pub borrower: BorrowerId,
    /// Monthly qualifying income from this source.
    pub monthly: Decimal,
    /// Whether the latest year declined more than 20% from the prior year.
    pub declining: bool,
}

/// Accumulates annual figures per (borrower, year).
#[derive(Debug, Default)]
pub(crate) struct YearlyTotals {
    totals: BTreeMap<BorrowerId, BTreeMap<TaxYear, Decimal>>,
}

impl YearlyTotals {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Adds an annual amount for a borrower and year.
    pub(crate) fn add(&mut self, borrower: BorrowerId, year: TaxYear, annual: Decimal) {
        *self
            .totals
            .entry(borrower)
            .or_default()
            .entry(year)
            .or_insert(Decimal::ZERO) += annual;
    }

    /// Reduces the accumulated years to per-borrower summaries.
    ///
    /// Years iterate in ascending order (BTreeMap), so "latest" and
    /// "prior" are well defined without explicit sorting.
    pub(crate) fn summarize(self, method: AveragingMethod) -> Vec<SourceSummary> {
        self.totals
            .into_iter()
            .map(|(borrower, years)| {
                let annuals: Vec<Decimal> = years.into_values().collect();
                let annual = match method {
                    AveragingMethod::AllYears => {
                        let count = Decimal::from(annuals.len());
                        annuals.iter().sum::<Decimal>() / count
                    }
                    // Non-empty by construction: every borrower key has
                    // at least one year behind it.
                    AveragingMethod::MostRecentYear => {
                        annuals.last().copied().unwrap_or_default()
                    }
                };
                SourceSummary {
                    borrower,
                    monthly: annual / MONTHS_PER_YEAR,
                    declining: declined(&annuals),
                }
            })
            .collect()
    }
}

/// True when the latest annual figure fell below 80% of the prior year.
fn declined(annuals: &[Decimal]) -> bool {
    match annuals {
        [.., prior, latest] => *latest < DECLINE_THRESHOLD * *prior,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_all_years() {
        let mut totals = YearlyTotals::new();
        totals.add(BorrowerId::new(1), TaxYear::new(2023), dec!(100000));
        totals.add(BorrowerId::new(1), TaxYear::new(2024), dec!(50000));
        let summaries = totals.summarize(AveragingMethod::AllYears);
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].monthly, dec!(75000) / dec!(12));
    }

    #[test]
    fn test_most_recent_year() {
        let mut totals = YearlyTotals::new();
        totals.add(BorrowerId::new(1), TaxYear::new(2023), dec!(100000));
        totals.add(BorrowerId::new(1), TaxYear::new(2024), dec!(50000));
        let summaries = totals.summarize(AveragingMethod::MostRecentYear);
        assert_eq!(summaries[0].monthly, dec!(50000) / dec!(12));
    }

    #[test]
    fn test_decline_needs_two_years() {
        let mut totals = YearlyTotals::new();
        totals.add(BorrowerId::new(1), TaxYear::new(2024), dec!(40000));
        let summaries = totals.summarize(AveragingMethod::AllYears);
        assert!(!summaries[0].declining);
    }

    #[test]
    fn test_decline_threshold_is_strict() {
        // Exactly 80% of the prior year does not flag
        let mut totals = YearlyTotals::new();
        totals.add(BorrowerId::new(1), TaxYear::new(2023), dec!(100000));
        totals.add(BorrowerId::new(1), TaxYear::new(2024), dec!(80000));
        assert!(!totals.summarize(AveragingMethod::AllYears)[0].declining);

        let mut totals = YearlyTotals::new();
        totals.add(BorrowerId::new(1), TaxYear::new(2023), dec!(100000));
        totals.add(BorrowerId::new(1), TaxYear::new(2024), dec!(79999));
        assert!(totals.summarize(AveragingMethod::AllYears)[0].declining);
    }

    #[test]
    fn test_records_out_of_order() {
        // Insertion order must not matter; the map orders years
        let mut totals = YearlyTotals::new();
        totals.add(BorrowerId::new(1), TaxYear::new(2024), dec!(60000));
        totals.add(BorrowerId::new(1), TaxYear::new(2023), dec!(100000));
        let summaries = totals.summarize(AveragingMethod::MostRecentYear);
        assert_eq!(summaries[0].monthly, dec!(5000));
        assert!(summaries[0].declining);
    }

    #[test]
    fn test_multiple_entities_same_year_sum() {
        let mut totals = YearlyTotals::new();
        totals.add(BorrowerId::new(1), TaxYear::new(2024), dec!(30000));
        totals.add(BorrowerId::new(1), TaxYear::new(2024), dec!(18000));
        let summaries = totals.summarize(AveragingMethod::AllYears);
        assert_eq!(summaries[0].monthly, dec!(4000));
    }
}
