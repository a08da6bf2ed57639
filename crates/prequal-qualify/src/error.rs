//! Error types for qualification math.

use prequal_core::PrequalError;
use rust_decimal::Decimal;
use thiserror::Error;

/// A specialized Result type for qualification operations.
pub type QualifyResult<T> = Result<T, QualifyError>;

/// Error type for qualification operations.
#[derive(Debug, Error)]
pub enum QualifyError {
    /// An input makes the requested calculation meaningless.
    #[error("invalid input: {value} - {reason}")]
    InvalidInput {
        /// The offending value.
        value: Decimal,
        /// Why it is rejected.
        reason: String,
    },

    /// Error propagated from core math (amortization, terms).
    #[error(transparent)]
    Core(#[from] PrequalError),
}

impl QualifyError {
    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(value: Decimal, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            value,
            reason: reason.into(),
        }
    }
}
