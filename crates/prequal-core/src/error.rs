//! Error types for the Prequal library.
//!
//! This module defines the error types used throughout Prequal,
//! providing structured error handling with context.

use rust_decimal::Decimal;
use thiserror::Error;

/// A specialized Result type for Prequal operations.
pub type PrequalResult<T> = Result<T, PrequalError>;

/// The main error type for Prequal operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PrequalError {
    /// Amortization term resolves to zero or negative periods.
    #[error("Invalid loan term: {term_years} years")]
    InvalidTerm {
        /// The offending term in years.
        term_years: i64,
    },

    /// A document record failed validation.
    #[error("Invalid record: {reason}")]
    InvalidRecord {
        /// Description of what's invalid.
        reason: String,
    },

    /// An input value is outside its permitted range.
    #[error("Invalid input: {value} - {reason}")]
    InvalidInput {
        /// The invalid value.
        value: Decimal,
        /// Reason for invalidity.
        reason: String,
    },

    /// Mathematical error (division by zero, overflow, etc.).
    #[error("Mathematical error: {reason}")]
    MathError {
        /// Description of the error.
        reason: String,
    },
}

impl PrequalError {
    /// Creates an invalid term error.
    #[must_use]
    pub fn invalid_term(term_years: i64) -> Self {
        Self::InvalidTerm { term_years }
    }

    /// Creates an invalid record error.
    #[must_use]
    pub fn invalid_record(reason: impl Into<String>) -> Self {
        Self::InvalidRecord {
            reason: reason.into(),
        }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(value: Decimal, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            value,
            reason: reason.into(),
        }
    }

    /// Creates a math error.
    #[must_use]
    pub fn math_error(reason: impl Into<String>) -> Self {
        Self::MathError {
            reason: reason.into(),
        }
    }
}
