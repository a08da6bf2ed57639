//! # Prequal Rules
//!
//! Advisory underwriting rules over a qualification snapshot.
//!
//! Calculation crates produce numbers; this crate reviews them. Evaluation
//! is a pure pass over a [`QualificationSnapshot`](snapshot::QualificationSnapshot)
//! that emits [`RuleFinding`](finding::RuleFinding)s:
//!
//! - **Warn**: declining or thinly documented income, DTI over target
//! - **Critical**: documentation blockers (unverified K-1 liquidity,
//!   partial C-corp ownership, support continuance, no income)
//! - **Info**: reserves and sanity prompts
//!
//! A [`document_checklist`](checklist::document_checklist) helper lists the
//! paperwork implied by the income sources in use.
//!
//! ## Usage
//!
//! ```rust
//! use prequal_rules::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let snapshot = QualificationSnapshot {
//!     total_income: dec!(8500),
//!     uses_k1: true,
//!     ..QualificationSnapshot::default()
//! };
//! let findings = evaluate(&snapshot);
//! assert!(has_blocking(&findings));
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
#![allow(clippy::struct_field_names)]

pub mod checklist;
pub mod evaluate;
pub mod finding;
pub mod snapshot;

/// Advisory disclaimer for any rendering of these results.
pub const DISCLAIMER: &str = "This tool implements common calculations aligned with \
agency/investor practices (e.g., FNMA-style self-employed analyses, K-1 \
distribution/liquidity checks, and program-aware MI/MIP/funding fees). Results are \
estimates only; AUS findings, lender overlays, and underwriter discretion prevail. \
Income used must be stable and well documented. Demonstrate continuance, trends, and \
business liquidity as applicable.";

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::checklist::{document_checklist, IncomeSource};
    pub use crate::evaluate::evaluate;
    pub use crate::finding::{has_blocking, RuleCode, RuleFinding, Severity};
    pub use crate::snapshot::{QualificationSnapshot, W2HistoryMeta};
    pub use crate::DISCLAIMER;
}

pub use prelude::*;
