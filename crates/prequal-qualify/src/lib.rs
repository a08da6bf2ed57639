//! # Prequal Qualify
//!
//! Qualification math for mortgage underwriting.
//!
//! Where `prequal-income` answers "how much does the borrower make", this
//! crate answers "what do they qualify for":
//!
//! - **Fees**: LTV and program-specific MI, MIP, funding, and guarantee fees
//! - **PITI**: full housing payment decomposition
//! - **DTI**: front-end / back-end ratios and affordability ceilings
//! - **Solver**: maximum qualifying loan under financed upfront fees
//! - **Scenarios**: reserve requirements, DSCR, what-if comparisons
//!
//! ## Usage
//!
//! ```rust
//! use prequal_qualify::prelude::*;
//! use prequal_core::types::LoanProgram;
//! use rust_decimal_macros::dec;
//!
//! let inputs = QualifyingInputs {
//!     total_income: dec!(10000),
//!     other_liabilities: dec!(500),
//!     taxes_ins_hoa_mi: dec!(300),
//!     target_front_pct: dec!(31),
//!     target_back_pct: dec!(45),
//!     rate_pct: dec!(6.5),
//!     term_years: 30,
//!     down_payment: dec!(20000),
//!     program: LoanProgram::Fha,
//! };
//! let result = max_qualifying_loan(&inputs, &FeePolicy::default()).unwrap();
//! assert!(result.adjusted_loan >= result.base_loan);
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

pub mod dti;
pub mod error;
pub mod fees;
pub mod piti;
pub mod solver;

// Re-export the error type
pub use error::{QualifyError, QualifyResult};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::dti::{
        dti, dscr, max_affordable_pi, reserve_requirement, AffordablePayment, DscrResult,
    };
    pub use crate::error::{QualifyError, QualifyResult};
    pub use crate::fees::{apply_program_fees, compute_ltv, FeePolicy, FeeTables, ProgramFees};
    pub use crate::piti::{piti_components, HousingScenario, PitiComponents};
    pub use crate::solver::{
        compare_scenarios, max_qualifying_loan, what_if_max_qualifying, MaxQualifyingLoan,
        QualifyingInputs, ScenarioComparison, ScenarioOutcome, WhatIfReport,
    };
}

pub use prelude::*;
