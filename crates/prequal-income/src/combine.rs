//! Per-borrower income combination.
//!
//! Runs every document analyzer over an [`IncomeSources`] bundle and
//! merges the per-source summaries into one [`BorrowerIncome`] row per
//! borrower, carrying the union of warning flags alongside the totals.

use std::collections::BTreeMap;

use prequal_core::types::BorrowerId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::averaging::AveragingMethod;
use crate::error::IncomeResult;
use crate::other::analyze_other_income;
use crate::records::{
    CCorpRecord, K1Record, OtherIncomeRecord, RentalRecord, ScheduleCRecord, W2Record,
};
use crate::rental::{analyze_rentals, RentalQualification};
use crate::self_employment::{analyze_c_corp, analyze_k1, analyze_schedule_c};
use crate::w2::analyze_w2;

/// All income documents for a loan application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct IncomeSources {
    /// W-2 employment records.
    pub w2: Vec<W2Record>,
    /// Schedule C tax years.
    pub schedule_c: Vec<ScheduleCRecord>,
    /// K-1 statements.
    pub k1: Vec<K1Record>,
    /// C-corporation tax years.
    pub c_corp: Vec<CCorpRecord>,
    /// Rental property tax years.
    pub rental: Vec<RentalRecord>,
    /// Rental qualification settings.
    pub rental_qualification: RentalQualification,
    /// Miscellaneous income sources.
    pub other: Vec<OtherIncomeRecord>,
}

/// Warning flags accumulated from a borrower's income sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct IncomeFlags {
    /// W-2 variable income has under 12 months of history.
    pub w2_insufficient_history: bool,
    /// W-2 variable income trending down.
    pub w2_declining_variable: bool,
    /// W-2 base pay trending down.
    pub w2_declining_base: bool,
    /// Schedule C income declined >20% year-over-year.
    pub schedule_c_declining: bool,
    /// K-1 income declined >20% year-over-year.
    pub k1_declining: bool,
    /// C-corporation income declined >20% year-over-year.
    pub c_corp_declining: bool,
    /// Rental income declined >20% year-over-year.
    pub rental_declining: bool,
}

impl IncomeFlags {
    /// True when any source shows a declining trend.
    ///
    /// Short W-2 history is a documentation concern, not a decline, so
    /// it does not participate.
    #[must_use]
    pub fn any_declining(&self) -> bool {
        self.w2_declining_variable
            || self.w2_declining_base
            || self.schedule_c_declining
            || self.k1_declining
            || self.c_corp_declining
            || self.rental_declining
    }
}

/// Combined monthly income for one borrower.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BorrowerIncome {
    /// The borrower.
    pub borrower: BorrowerId,
    /// Monthly W-2 qualifying income.
    pub w2_monthly: Decimal,
    /// Monthly Schedule C income.
    pub schedule_c_monthly: Decimal,
    /// Monthly K-1 income.
    pub k1_monthly: Decimal,
    /// Monthly C-corporation income.
    pub c_corp_monthly: Decimal,
    /// Monthly rental income.
    pub rental_monthly: Decimal,
    /// Monthly other income.
    pub other_monthly: Decimal,
    /// Total monthly qualifying income.
    pub total_monthly: Decimal,
    /// Accumulated warning flags.
    pub flags: IncomeFlags,
}

/// Combines all income sources into per-borrower totals.
///
/// Every borrower `1..=num_borrowers` gets a row, with zero income where
/// no documents exist. `self_employment_averaging` applies to Schedule C,
/// K-1, and 1120 analyses alike.
///
/// # Errors
///
/// Propagates record validation failures from the underlying analyzers.
pub fn combine_income(
    num_borrowers: u32,
    sources: &IncomeSources,
    self_employment_averaging: AveragingMethod,
) -> IncomeResult<Vec<BorrowerIncome>> {
    let mut rows: BTreeMap<BorrowerId, BorrowerIncome> = (1..=num_borrowers)
        .map(|id| {
            let borrower = BorrowerId::new(id);
            (
                borrower,
                BorrowerIncome {
                    borrower,
                    ..BorrowerIncome::default()
                },
            )
        })
        .collect();

    for summary in analyze_w2(&sources.w2) {
        if let Some(row) = rows.get_mut(&summary.borrower) {
            row.w2_monthly = summary.qualifying_monthly;
            row.flags.w2_insufficient_history = summary.insufficient_history;
            row.flags.w2_declining_variable = summary.declining_variable;
            row.flags.w2_declining_base = summary.declining_base;
        }
    }

    for summary in analyze_schedule_c(&sources.schedule_c, self_employment_averaging) {
        if let Some(row) = rows.get_mut(&summary.borrower) {
            row.schedule_c_monthly = summary.monthly;
            row.flags.schedule_c_declining = summary.declining;
        }
    }

    for summary in analyze_k1(&sources.k1, self_employment_averaging)? {
        if let Some(row) = rows.get_mut(&summary.borrower) {
            row.k1_monthly = summary.monthly;
            row.flags.k1_declining = summary.declining;
        }
    }

    for summary in analyze_c_corp(&sources.c_corp, self_employment_averaging)? {
        if let Some(row) = rows.get_mut(&summary.borrower) {
            row.c_corp_monthly = summary.monthly;
            row.flags.c_corp_declining = summary.declining;
        }
    }

    for summary in analyze_rentals(&sources.rental, &sources.rental_qualification) {
        if let Some(row) = rows.get_mut(&summary.borrower) {
            row.rental_monthly = summary.monthly;
            row.flags.rental_declining = summary.declining;
        }
    }

    for summary in analyze_other_income(&sources.other)? {
        if let Some(row) = rows.get_mut(&summary.borrower) {
            row.other_monthly = summary.monthly;
        }
    }

    let rows: Vec<BorrowerIncome> = rows
        .into_values()
        .map(|mut row| {
            row.total_monthly = row.w2_monthly
                + row.schedule_c_monthly
                + row.k1_monthly
                + row.c_corp_monthly
                + row.rental_monthly
                + row.other_monthly;
            row
        })
        .collect();

    let scenario_total: Decimal = rows.iter().map(|r| r.total_monthly).sum();
    tracing::debug!(
        borrowers = rows.len(),
        %scenario_total,
        "combined qualifying income"
    );

    Ok(rows)
}

/// Total monthly qualifying income across borrowers.
#[must_use]
pub fn total_monthly_income(rows: &[BorrowerIncome]) -> Decimal {
    rows.iter().map(|r| r.total_monthly).sum()
}

/// True when any borrower carries a declining-income flag.
#[must_use]
pub fn any_declining(rows: &[BorrowerIncome]) -> bool {
    rows.iter().any(|r| r.flags.any_declining())
}
