//! # Prequal Core
//!
//! Core types, program presets, and amortization math for the Prequal
//! mortgage underwriting library.
//!
//! This crate provides the foundational building blocks used throughout
//! Prequal:
//!
//! - **Types**: Domain-specific types like `BorrowerId`, `TaxYear`,
//!   `LoanProgram`, `FicoBucket`, `DtiRatios`
//! - **Presets**: Agency-style program tables (DTI targets, MI bands,
//!   MIP/funding-fee schedules)
//! - **Amortization**: Fully amortizing payment math and its inverse
//!
//! ## Design Philosophy
//!
//! - **Type Safety**: Newtypes prevent mixing borrower ids, years, and amounts
//! - **Pure Functions**: All calculations are stateless with explicit inputs
//! - **Decimal Money**: Amounts and percentages are `rust_decimal::Decimal`;
//!   power math crosses to `f64` only at a well-defined boundary
//!
//! ## Example
//!
//! ```rust
//! use prequal_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let pmt = monthly_payment(dec!(400000), dec!(6.5), 30).unwrap();
//! assert!(pmt > dec!(2500) && pmt < dec!(2600));
//!
//! let bucket = FicoBucket::from_score(Some(741));
//! assert_eq!(bucket, FicoBucket::Near720To759);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::uninlined_format_args)]

pub mod amortization;
pub mod error;
pub mod presets;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::amortization::{monthly_payment, principal_from_payment};
    pub use crate::error::{PrequalError, PrequalResult};
    pub use crate::presets::{
        dti_targets, ConvMiBands, DtiTargets, FhaMipTable, UsdaFeeTable, VaFundingFeeTable,
        CONV_MI_BANDS, FHA_TABLES, FLORIDA_DEFAULTS, USDA_TABLE, VA_TABLE,
    };
    pub use crate::types::{
        round_cents, BorrowerId, DtiRatios, FicoBucket, LoanProgram, Occupancy, TaxYear,
        MONTHS_PER_YEAR,
    };
}

// Re-export commonly used types at crate root
pub use amortization::{monthly_payment, principal_from_payment};
pub use error::{PrequalError, PrequalResult};
pub use types::{BorrowerId, DtiRatios, FicoBucket, LoanProgram, Occupancy, TaxYear};
