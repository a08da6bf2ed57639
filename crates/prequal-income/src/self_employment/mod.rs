//! Self-employment income analysis.
//!
//! Three document-specific analyzers share a common pattern: adjust each
//! tax year to a cash-flow annual figure (agency-style add-backs), sum
//! per borrower and year, then average and trend-check via
//! [`crate::averaging`].
//!
//! - [`analyze_schedule_c`] - sole proprietorships (Schedule C)
//! - [`analyze_k1`] - partnerships and S-corps (K-1), ownership-weighted
//! - [`analyze_c_corp`] - wholly owned C-corporations (Form 1120)

mod c_corp;
mod k1;
mod schedule_c;

pub use c_corp::{analyze_c_corp, any_partial_ownership};
pub use k1::analyze_k1;
pub use schedule_c::analyze_schedule_c;
