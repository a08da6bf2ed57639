//! C-corporation (Form 1120) analysis.
//!
//! Corporate cash flow only counts when the borrower owns the company
//! outright, so records under 100% ownership contribute nothing here.
//! The rules engine raises a critical finding when such records are
//! present, rather than silently dropping the income story.
//!
//! ## Formula
//!
//! ```text
//! adjusted = taxable income - total tax
//!          + nonrecurring + other income/loss
//!          + depreciation + depletion + amortization/casualty
//!          - notes payable < 1yr - non-deductible T&E - dividends paid
//! ```

use rust_decimal::Decimal;

use crate::averaging::{AveragingMethod, SourceSummary, YearlyTotals};
use crate::error::{IncomeError, IncomeResult};
use crate::records::CCorpRecord;

/// Analyzes Form 1120 records into per-borrower monthly summaries.
///
/// # Errors
///
/// Returns [`IncomeError::InvalidOwnership`] when a record's ownership
/// percentage falls outside 0-100.
pub fn analyze_c_corp(
    records: &[CCorpRecord],
    method: AveragingMethod,
) -> IncomeResult<Vec<SourceSummary>> {
    let mut totals = YearlyTotals::new();
    for record in records {
        if record.ownership_pct < Decimal::ZERO || record.ownership_pct > Decimal::ONE_HUNDRED {
            return Err(IncomeError::InvalidOwnership {
                value: record.ownership_pct,
            });
        }
        if record.ownership_pct < Decimal::ONE_HUNDRED {
            continue;
        }
        let adjusted = record.taxable_income - record.total_tax
            + record.nonrecurring
            + record.other_income_loss
            + record.depreciation
            + record.depletion
            + record.amortization_casualty
            - record.notes_under_1yr
            - record.non_deductible_travel
            - record.dividends_paid;
        totals.add(record.borrower, record.year, adjusted);
    }
    Ok(totals.summarize(method))
}

/// Returns true when any record falls short of 100% ownership.
///
/// Feed this into the rules snapshot so the attempt surfaces as a
/// critical finding.
#[must_use]
pub fn any_partial_ownership(records: &[CCorpRecord]) -> bool {
    records
        .iter()
        .any(|r| r.ownership_pct < Decimal::ONE_HUNDRED)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_full_owner_cash_flow() {
        let record = CCorpRecord {
            year: 2024.into(),
            ownership_pct: dec!(100),
            taxable_income: dec!(150000),
            total_tax: dec!(30000),
            depreciation: dec!(12000),
            dividends_paid: dec!(24000),
            ..Default::default()
        };
        let summaries = analyze_c_corp(&[record], AveragingMethod::AllYears).unwrap();
        assert_eq!(summaries[0].monthly, dec!(108000) / dec!(12));
    }

    #[test]
    fn test_partial_owner_excluded() {
        let record = CCorpRecord {
            year: 2024.into(),
            ownership_pct: dec!(60),
            taxable_income: dec!(150000),
            ..Default::default()
        };
        let summaries = analyze_c_corp(&[record.clone()], AveragingMethod::AllYears).unwrap();
        assert!(summaries.is_empty());
        assert!(any_partial_ownership(&[record]));
    }

    #[test]
    fn test_declining_flag() {
        let records = vec![
            CCorpRecord {
                year: 2023.into(),
                ownership_pct: dec!(100),
                taxable_income: dec!(200000),
                ..Default::default()
            },
            CCorpRecord {
                year: 2024.into(),
                ownership_pct: dec!(100),
                taxable_income: dec!(120000),
                ..Default::default()
            },
        ];
        let summaries = analyze_c_corp(&records, AveragingMethod::AllYears).unwrap();
        assert!(summaries[0].declining);
    }

    #[test]
    fn test_invalid_ownership_rejected() {
        let record = CCorpRecord {
            ownership_pct: dec!(-10),
            ..Default::default()
        };
        assert!(analyze_c_corp(&[record], AveragingMethod::AllYears).is_err());
    }
}
