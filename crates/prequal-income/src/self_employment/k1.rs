//! K-1 (partnership / S-corp) analysis.
//!
//! ## Formula
//!
//! ```text
//! adjusted = ordinary + net rental/other + guaranteed payments
//!          + nonrecurring + depreciation + depletion + amortization/casualty
//!          - notes payable < 1yr - non-deductible T&E
//! weighted = ownership% / 100 * adjusted
//! ```

use rust_decimal::Decimal;

use crate::averaging::{AveragingMethod, SourceSummary, YearlyTotals};
use crate::error::{IncomeError, IncomeResult};
use crate::records::K1Record;

/// Analyzes K-1 records into per-borrower monthly summaries.
///
/// Annual figures are weighted by the borrower's ownership percentage
/// before year aggregation, so a 50% partner counts half the entity
/// cash flow.
///
/// # Errors
///
/// Returns [`IncomeError::InvalidOwnership`] when a record's ownership
/// percentage falls outside 0-100.
pub fn analyze_k1(records: &[K1Record], method: AveragingMethod) -> IncomeResult<Vec<SourceSummary>> {
    let mut totals = YearlyTotals::new();
    for record in records {
        if record.ownership_pct < Decimal::ZERO || record.ownership_pct > Decimal::ONE_HUNDRED {
            return Err(IncomeError::InvalidOwnership {
                value: record.ownership_pct,
            });
        }
        let adjusted = record.ordinary
            + record.net_rental_other
            + record.guaranteed_payments
            + record.nonrecurring
            + record.depreciation
            + record.depletion
            + record.amortization_casualty
            - record.notes_under_1yr
            - record.non_deductible_travel;
        let weighted = record.ownership_pct / Decimal::ONE_HUNDRED * adjusted;
        totals.add(record.borrower, record.year, weighted);
    }
    Ok(totals.summarize(method))
}
