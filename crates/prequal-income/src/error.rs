//! Error types for income analysis.

use prequal_core::PrequalError;
use rust_decimal::Decimal;
use thiserror::Error;

/// A specialized Result type for income analysis.
pub type IncomeResult<T> = Result<T, IncomeError>;

/// Error type for income analysis operations.
#[derive(Debug, Error)]
pub enum IncomeError {
    /// Ownership percentage outside 0-100.
    #[error("invalid ownership percentage: {value} - must be between 0 and 100")]
    InvalidOwnership {
        /// The offending percentage.
        value: Decimal,
    },

    /// Gross-up percentage outside 0-100.
    #[error("invalid gross-up percentage: {value} - must be between 0 and 100")]
    InvalidGrossUp {
        /// The offending percentage.
        value: Decimal,
    },

    /// Error propagated from core types or math.
    #[error(transparent)]
    Core(#[from] PrequalError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_display() {
        let err = IncomeError::InvalidOwnership { value: dec!(120) };
        assert!(err.to_string().contains("ownership"));
    }
}
