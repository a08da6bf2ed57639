//! Money helpers shared by the calculation crates.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Months in a year, as a `Decimal` divisor for annual-to-monthly conversion.
pub const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Rounds an amount to cents using banker's rounding.
///
/// Calculators keep full precision internally; this is for consumers that
/// present dollar amounts.
///
/// # Example
///
/// ```rust
/// use prequal_core::types::round_cents;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(round_cents(dec!(1234.5678)), dec!(1234.57));
/// assert_eq!(round_cents(dec!(0.125)), dec!(0.12));
/// ```
#[must_use]
pub fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp(2)
}
