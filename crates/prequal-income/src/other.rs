//! Other income (alimony, SSA, allowances) with non-taxable gross-up.
//!
//! Non-taxable income stretches further against a mortgage payment than
//! taxed wages, so programs allow "grossing it up" by a percentage before
//! it enters qualifying income.

use std::collections::BTreeMap;

use prequal_core::types::{BorrowerId, LoanProgram};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{IncomeError, IncomeResult};
use crate::records::OtherIncomeRecord;

/// Income kinds treated as non-taxable for gross-up defaults.
const NON_TAXABLE_KINDS: &[&str] = &[
    "social security",
    "ssa",
    "disability",
    "child support",
    "va benefit",
];

/// Income kinds treated as support income for the continuance rule.
const SUPPORT_KINDS: &[&str] = &["alimony", "child support", "housing"];

/// Per-borrower other-income summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtherIncomeSummary {
    /// Borrower the income belongs to.
    pub borrower: BorrowerId,
    /// Grossed-up qualifying monthly income.
    pub monthly: Decimal,
}

/// Aggregates other income per borrower with gross-up applied.
///
/// Qualifying monthly = gross monthly * (1 + gross-up% / 100).
///
/// # Errors
///
/// Returns [`IncomeError::InvalidGrossUp`] when a record's gross-up
/// percentage falls outside 0-100.
pub fn analyze_other_income(
    records: &[OtherIncomeRecord],
) -> IncomeResult<Vec<OtherIncomeSummary>> {
    let mut by_borrower: BTreeMap<BorrowerId, Decimal> = BTreeMap::new();
    for record in records {
        if record.gross_up_pct < Decimal::ZERO || record.gross_up_pct > Decimal::ONE_HUNDRED {
            return Err(IncomeError::InvalidGrossUp {
                value: record.gross_up_pct,
            });
        }
        let qualifying =
            record.gross_monthly * (Decimal::ONE + record.gross_up_pct / Decimal::ONE_HUNDRED);
        *by_borrower.entry(record.borrower).or_insert(Decimal::ZERO) += qualifying;
    }
    Ok(by_borrower
        .into_iter()
        .map(|(borrower, monthly)| OtherIncomeSummary { borrower, monthly })
        .collect())
}

/// Default gross-up percentage for an income kind under a program.
///
/// Government programs (FHA/VA/USDA) allow 25% on non-taxable income;
/// Conventional and Jumbo allow 15%. Kinds not recognized as non-taxable
/// default to no gross-up.
///
/// # Example
///
/// ```rust
/// use prequal_income::other::default_gross_up_pct;
/// use prequal_core::types::LoanProgram;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(default_gross_up_pct("Social Security", LoanProgram::Fha), dec!(25));
/// assert_eq!(default_gross_up_pct("Disability", LoanProgram::Conventional), dec!(15));
/// assert_eq!(default_gross_up_pct("Bonus", LoanProgram::Va), dec!(0));
/// ```
#[must_use]
pub fn default_gross_up_pct(kind: &str, program: LoanProgram) -> Decimal {
    let kind = kind.to_lowercase();
    let non_taxable = NON_TAXABLE_KINDS.iter().any(|k| kind.contains(k));
    if !non_taxable {
        return Decimal::ZERO;
    }
    if program.is_government() {
        dec!(25)
    } else {
        dec!(15)
    }
}

/// Filters out support income (alimony, child support, housing allowance)
/// unless it is explicitly included.
///
/// Support income requires documented continuance before it counts; the
/// rules engine raises the continuance finding when included income is
/// unverified.
#[must_use]
pub fn filter_support_income(
    records: &[OtherIncomeRecord],
    include_support: bool,
) -> Vec<OtherIncomeRecord> {
    if include_support {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|r| {
            let kind = r.kind.to_lowercase();
            !SUPPORT_KINDS.iter().any(|k| kind.contains(k))
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(kind: &str, gross_monthly: Decimal, gross_up_pct: Decimal) -> OtherIncomeRecord {
        OtherIncomeRecord {
            kind: kind.into(),
            gross_monthly,
            gross_up_pct,
            ..Default::default()
        }
    }

    #[test]
    fn test_gross_up_applied() {
        let records = vec![record("Social Security", dec!(2000), dec!(25))];
        let summaries = analyze_other_income(&records).unwrap();
        assert_eq!(summaries[0].monthly, dec!(2500));
    }

    #[test]
    fn test_multiple_sources_sum() {
        let records = vec![
            record("Social Security", dec!(2000), dec!(25)),
            record("Pension", dec!(1000), dec!(0)),
        ];
        let summaries = analyze_other_income(&records).unwrap();
        assert_eq!(summaries[0].monthly, dec!(3500));
    }

    #[test]
    fn test_invalid_gross_up_rejected() {
        let records = vec![record("SSA", dec!(2000), dec!(150))];
        assert!(matches!(
            analyze_other_income(&records),
            Err(IncomeError::InvalidGrossUp { .. })
        ));
    }

    #[test]
    fn test_default_gross_up_by_program() {
        assert_eq!(
            default_gross_up_pct("Social Security", LoanProgram::Fha),
            dec!(25)
        );
        assert_eq!(
            default_gross_up_pct("Disability", LoanProgram::Conventional),
            dec!(15)
        );
        assert_eq!(default_gross_up_pct("Unknown", LoanProgram::Va), dec!(0));
        assert_eq!(
            default_gross_up_pct("Child Support", LoanProgram::Usda),
            dec!(25)
        );
    }

    #[test]
    fn test_filter_support_income() {
        let records = vec![
            record("Alimony", dec!(1000), dec!(0)),
            record("Housing Allowance", dec!(500), dec!(0)),
            record("Bonus", dec!(300), dec!(0)),
        ];
        let filtered = filter_support_income(&records, false);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].kind, "Bonus");

        let kept = filter_support_income(&records, true);
        assert_eq!(kept.len(), 3);
    }
}
