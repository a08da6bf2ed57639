//! # Prequal Income
//!
//! Qualifying income calculators for mortgage underwriting documents.
//!
//! This crate normalizes heterogeneous income documents to standardized
//! monthly figures per borrower:
//!
//! - **W-2**: base pay plus averaged variable earnings (OT/bonus/commission)
//! - **Schedule C**: sole proprietorship net profit with standard add-backs
//! - **K-1**: partnership / S-corp income weighted by ownership
//! - **1120**: wholly owned C-corporation income after tax and dividends
//! - **Rental**: Schedule E net income or 75% of gross rent
//! - **Other**: alimony, SSA, and similar, with non-taxable gross-up
//! - **Combination**: per-borrower totals and decline flags
//!
//! ## Architecture
//!
//! `prequal-income` depends on `prequal-core` for shared types, but the
//! qualification crates do NOT depend on this one being consulted first:
//! every analyzer is a standalone pure function over document records.
//!
//! ## Usage
//!
//! ```rust
//! use prequal_income::prelude::*;
//! use prequal_core::types::BorrowerId;
//! use rust_decimal_macros::dec;
//!
//! let records = vec![W2Record {
//!     borrower: BorrowerId::PRIMARY,
//!     pay_type: PayType::Salary,
//!     annual_salary: dec!(96000),
//!     ..Default::default()
//! }];
//!
//! let summaries = analyze_w2(&records);
//! assert_eq!(summaries[0].base_monthly, dec!(8000));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::uninlined_format_args)]

pub mod averaging;
pub mod combine;
pub mod error;
pub mod other;
pub mod records;
pub mod rental;
pub mod self_employment;
pub mod w2;

// Re-export the error type
pub use error::{IncomeError, IncomeResult};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::averaging::{AveragingMethod, SourceSummary};
    pub use crate::combine::{
        any_declining, combine_income, total_monthly_income, BorrowerIncome, IncomeFlags,
        IncomeSources,
    };
    pub use crate::error::{IncomeError, IncomeResult};
    pub use crate::other::{
        analyze_other_income, default_gross_up_pct, filter_support_income, OtherIncomeSummary,
    };
    pub use crate::records::{
        CCorpRecord, DebtRecord, K1Form, K1Record, OtherIncomeRecord, PayType, RentalRecord,
        ScheduleCRecord, VariableAveraging, W2Record,
    };
    pub use crate::rental::{analyze_rentals, RentalMethod, RentalQualification};
    pub use crate::self_employment::{
        analyze_c_corp, analyze_k1, analyze_schedule_c, any_partial_ownership,
    };
    pub use crate::w2::{analyze_w2, W2Summary};
}
