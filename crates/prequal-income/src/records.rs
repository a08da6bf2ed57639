//! Income document records.
//!
//! Each struct mirrors one row of an underwriting worksheet. All amount
//! fields default to zero, so records can be built with struct-update
//! syntax from `Default::default()` and deserialized from sparse JSON.

use prequal_core::types::{BorrowerId, TaxYear};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// W-2 compensation structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PayType {
    /// Fixed annual salary
    #[default]
    Salary,
    /// Hourly rate times scheduled hours
    Hourly,
}

/// Divisor policy for averaging W-2 variable earnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum VariableAveraging {
    /// Average over the actual documented history months
    #[default]
    ActualMonths,
    /// Average over a fixed 24 months regardless of documented history
    TwentyFourMonths,
}

/// One W-2 employment record for a borrower.
///
/// Year-to-date and prior-year variable earnings (overtime, bonus,
/// commission) are tracked separately from base pay so they can be
/// averaged and trend-checked independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct W2Record {
    /// Borrower this employment belongs to.
    pub borrower: BorrowerId,
    /// Employer name (informational).
    pub employer: String,
    /// Salary or hourly compensation.
    pub pay_type: PayType,
    /// Annual salary, for [`PayType::Salary`].
    pub annual_salary: Decimal,
    /// Hourly rate, for [`PayType::Hourly`].
    pub hourly_rate: Decimal,
    /// Scheduled hours per week, for [`PayType::Hourly`].
    pub hours_per_week: Decimal,
    /// Overtime earned year-to-date.
    pub overtime_ytd: Decimal,
    /// Bonus earned year-to-date.
    pub bonus_ytd: Decimal,
    /// Commission earned year-to-date.
    pub commission_ytd: Decimal,
    /// Months covered by the year-to-date figures.
    pub months_ytd: Decimal,
    /// Overtime earned in the prior year.
    pub overtime_last_year: Decimal,
    /// Bonus earned in the prior year.
    pub bonus_last_year: Decimal,
    /// Commission earned in the prior year.
    pub commission_last_year: Decimal,
    /// Months covered by the prior-year figures.
    pub months_last_year: Decimal,
    /// Averaging divisor policy for variable earnings.
    pub averaging: VariableAveraging,
    /// Prior-year base pay, for base decline detection.
    pub base_last_year: Decimal,
    /// Whether variable earnings count toward qualifying income.
    pub include_variable: bool,
}

/// One Schedule C (sole proprietorship) tax year for a borrower.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScheduleCRecord {
    /// Borrower who files this schedule.
    pub borrower: BorrowerId,
    /// Business name (informational).
    pub business_name: String,
    /// Tax year of the return.
    pub year: TaxYear,
    /// Line 31 net profit or loss.
    pub net_profit: Decimal,
    /// Nonrecurring income or loss to back out.
    pub nonrecurring: Decimal,
    /// Depletion add-back.
    pub depletion: Decimal,
    /// Depreciation add-back.
    pub depreciation: Decimal,
    /// Non-deductible meals and entertainment (subtracted).
    pub non_deductible_meals: Decimal,
    /// Business use of home add-back.
    pub use_of_home: Decimal,
    /// Amortization / casualty loss add-back.
    pub amortization_casualty: Decimal,
    /// Business miles driven (for the mileage depreciation add-back).
    pub business_miles: Decimal,
    /// Depreciation portion of the standard mileage rate, per mile.
    pub mile_depreciation_rate: Decimal,
}

/// K-1 source form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum K1Form {
    /// Partnership (Form 1065)
    #[default]
    Form1065,
    /// S corporation (Form 1120-S)
    Form1120S,
}

/// One K-1 statement (partnership or S-corp) for a borrower and tax year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct K1Record {
    /// Borrower who receives this K-1.
    pub borrower: BorrowerId,
    /// Entity name (informational).
    pub entity_name: String,
    /// Tax year of the statement.
    pub year: TaxYear,
    /// Source form.
    pub form: K1Form,
    /// Borrower's ownership percentage (0-100).
    pub ownership_pct: Decimal,
    /// Ordinary business income or loss.
    pub ordinary: Decimal,
    /// Net rental and other income or loss.
    pub net_rental_other: Decimal,
    /// Guaranteed payments to the partner.
    pub guaranteed_payments: Decimal,
    /// Nonrecurring income or loss to back out.
    pub nonrecurring: Decimal,
    /// Depreciation add-back.
    pub depreciation: Decimal,
    /// Depletion add-back.
    pub depletion: Decimal,
    /// Amortization / casualty loss add-back.
    pub amortization_casualty: Decimal,
    /// Notes payable in less than one year (subtracted).
    pub notes_under_1yr: Decimal,
    /// Non-deductible travel and entertainment (subtracted).
    pub non_deductible_travel: Decimal,
}

/// One C-corporation (Form 1120) tax year for a borrower.
///
/// Only records with 100% ownership produce qualifying income; lower
/// ownership is surfaced through the rules engine instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CCorpRecord {
    /// Borrower who owns the corporation.
    pub borrower: BorrowerId,
    /// Corporation name (informational).
    pub corp_name: String,
    /// Tax year of the return.
    pub year: TaxYear,
    /// Borrower's ownership percentage (0-100).
    pub ownership_pct: Decimal,
    /// Taxable income before adjustments.
    pub taxable_income: Decimal,
    /// Total tax (subtracted).
    pub total_tax: Decimal,
    /// Nonrecurring income or loss to back out.
    pub nonrecurring: Decimal,
    /// Other income or loss adjustment.
    pub other_income_loss: Decimal,
    /// Depreciation add-back.
    pub depreciation: Decimal,
    /// Depletion add-back.
    pub depletion: Decimal,
    /// Amortization / casualty loss add-back.
    pub amortization_casualty: Decimal,
    /// Notes payable in less than one year (subtracted).
    pub notes_under_1yr: Decimal,
    /// Non-deductible travel and entertainment (subtracted).
    pub non_deductible_travel: Decimal,
    /// Dividends paid to the owner (subtracted to avoid double counting).
    pub dividends_paid: Decimal,
}

/// One rental property tax year for a borrower.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RentalRecord {
    /// Borrower who owns the property.
    pub borrower: BorrowerId,
    /// Property description (informational).
    pub property: String,
    /// Tax year of the figures.
    pub year: TaxYear,
    /// Annual rents received.
    pub rents: Decimal,
    /// Annual operating expenses.
    pub expenses: Decimal,
    /// Depreciation add-back.
    pub depreciation: Decimal,
}

/// A miscellaneous income source (alimony, SSA, allowances, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OtherIncomeRecord {
    /// Borrower who receives the income.
    pub borrower: BorrowerId,
    /// Free-text kind, e.g. "Social Security" or "Child Support".
    pub kind: String,
    /// Gross monthly amount received.
    pub gross_monthly: Decimal,
    /// Non-taxable gross-up percentage (0-100).
    pub gross_up_pct: Decimal,
}

/// A recurring monthly liability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DebtRecord {
    /// Liability description.
    pub name: String,
    /// Monthly payment amount.
    pub monthly_payment: Decimal,
}

/// Clamps a worksheet amount to zero or above.
///
/// Blank or negative cells in uploaded worksheets must not reduce other
/// earnings categories.
pub(crate) fn non_negative(value: Decimal) -> Decimal {
    value.max(Decimal::ZERO)
}
