//! Core domain types for mortgage underwriting.
//!
//! This module provides type-safe representations of underwriting concepts:
//!
//! - [`BorrowerId`] and [`TaxYear`] newtypes for keys used in aggregation
//! - [`LoanProgram`], [`FicoBucket`], and [`Occupancy`] policy enums
//! - [`DtiRatios`] for front-end/back-end debt-to-income ratios
//! - Money helpers ([`round_cents`], [`MONTHS_PER_YEAR`])

mod borrower;
mod money;
mod program;
mod ratio;

pub use borrower::{BorrowerId, TaxYear};
pub use money::{round_cents, MONTHS_PER_YEAR};
pub use program::{FicoBucket, LoanProgram, Occupancy};
pub use ratio::DtiRatios;
