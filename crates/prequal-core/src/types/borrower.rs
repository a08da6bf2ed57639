//! Borrower and tax-year identifier newtypes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a borrower on the loan application.
///
/// Borrowers are numbered from 1; borrower 1 is the primary borrower and
/// receives subject-property rent credits where policy allows them.
///
/// # Example
///
/// ```rust
/// use prequal_core::types::BorrowerId;
///
/// let primary = BorrowerId::PRIMARY;
/// assert_eq!(primary, BorrowerId::new(1));
/// assert!(primary.is_primary());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BorrowerId(u32);

impl BorrowerId {
    /// The primary borrower (borrower 1).
    pub const PRIMARY: Self = Self(1);

    /// Creates a borrower id.
    #[must_use]
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the numeric id.
    #[must_use]
    pub fn as_u32(&self) -> u32 {
        self.0
    }

    /// Returns true for the primary borrower.
    #[must_use]
    pub fn is_primary(&self) -> bool {
        self.0 == 1
    }
}

impl Default for BorrowerId {
    fn default() -> Self {
        Self::PRIMARY
    }
}

impl fmt::Display for BorrowerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Borrower {}", self.0)
    }
}

/// A tax filing year (e.g. 2024).
///
/// Self-employment and rental analyses aggregate records per tax year and
/// compare consecutive years for decline detection, so ordering matters.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct TaxYear(i32);

impl TaxYear {
    /// Creates a tax year.
    #[must_use]
    pub fn new(year: i32) -> Self {
        Self(year)
    }

    /// Returns the calendar year.
    #[must_use]
    pub fn as_i32(&self) -> i32 {
        self.0
    }

    /// Returns the immediately preceding tax year.
    #[must_use]
    pub fn prior(&self) -> Self {
        Self(self.0 - 1)
    }
}

impl fmt::Display for TaxYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for TaxYear {
    fn from(year: i32) -> Self {
        Self(year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_borrower_ordering() {
        assert!(BorrowerId::new(1) < BorrowerId::new(2));
        assert!(BorrowerId::PRIMARY.is_primary());
        assert!(!BorrowerId::new(2).is_primary());
    }

    #[test]
    fn test_tax_year_prior() {
        assert_eq!(TaxYear::new(2024).prior(), TaxYear::new(2023));
    }

    #[test]
    fn test_display() {
        assert_eq!(BorrowerId::new(2).to_string(), "Borrower 2");
        assert_eq!(TaxYear::new(2023).to_string(), "2023");
    }

    #[test]
    fn test_transparent_serde() {
        // Newtypes serialize as bare numbers so worksheet JSON stays flat
        assert_eq!(serde_json::to_string(&BorrowerId::new(2)).unwrap(), "2");
        let year: TaxYear = serde_json::from_str("2024").unwrap();
        assert_eq!(year, TaxYear::new(2024));
    }
}
