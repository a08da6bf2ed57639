//! Debt-to-income ratio pair.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Front-end and back-end debt-to-income ratios.
///
/// Ratios are stored as fractions (e.g. `0.31` for 31%). The front-end
/// ratio covers the proposed housing payment only; the back-end ratio
/// covers housing plus all other monthly liabilities.
///
/// # Example
///
/// ```rust
/// use prequal_core::types::DtiRatios;
/// use rust_decimal_macros::dec;
///
/// let dti = DtiRatios::new(dec!(0.28), dec!(0.41));
/// assert_eq!(dti.front_end_pct(), dec!(28));
/// assert_eq!(dti.back_end_pct(), dec!(41));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DtiRatios {
    /// Housing-payment-to-income ratio, as a fraction.
    pub front_end: Decimal,
    /// All-liabilities-to-income ratio, as a fraction.
    pub back_end: Decimal,
}

impl DtiRatios {
    /// Creates a ratio pair from fractions.
    #[must_use]
    pub fn new(front_end: Decimal, back_end: Decimal) -> Self {
        Self {
            front_end,
            back_end,
        }
    }

    /// Front-end ratio as a percentage.
    #[must_use]
    pub fn front_end_pct(&self) -> Decimal {
        self.front_end * Decimal::ONE_HUNDRED
    }

    /// Back-end ratio as a percentage.
    #[must_use]
    pub fn back_end_pct(&self) -> Decimal {
        self.back_end * Decimal::ONE_HUNDRED
    }

    /// Returns true if either ratio exceeds the given percentage targets.
    #[must_use]
    pub fn exceeds_pct(&self, target_front_pct: Decimal, target_back_pct: Decimal) -> bool {
        self.front_end_pct() > target_front_pct || self.back_end_pct() > target_back_pct
    }
}

impl fmt::Display for DtiRatios {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.2}% / {:.2}%",
            self.front_end_pct(),
            self.back_end_pct()
        )
    }
}
