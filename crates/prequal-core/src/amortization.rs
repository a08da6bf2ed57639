//! Fully amortizing payment math.
//!
//! ## Formula
//!
//! ```text
//! PMT = r * L / (1 - (1 + r)^-n)
//! ```
//!
//! where:
//! - L = principal
//! - r = monthly rate (annual rate / 12)
//! - n = number of monthly payments
//!
//! The zero-rate case degenerates to straight-line `L / n`.
//!
//! Amounts cross from `Decimal` to `f64` for the power term and back at
//! the boundary; the error from the round trip is far below a cent at
//! realistic loan sizes.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

use crate::error::{PrequalError, PrequalResult};

/// Rates below this (monthly, as a fraction) are treated as zero.
const ZERO_RATE_EPSILON: f64 = 1e-9;

/// Calculates the fully amortizing monthly payment for a loan.
///
/// # Arguments
///
/// * `principal` - Starting loan amount
/// * `annual_rate_pct` - Nominal yearly interest rate (e.g. `6.5` for 6.5%)
/// * `term_years` - Amortization period in years
///
/// # Errors
///
/// Returns [`PrequalError::InvalidTerm`] when the term is zero.
///
/// # Example
///
/// ```rust
/// use prequal_core::amortization::monthly_payment;
/// use rust_decimal_macros::dec;
///
/// let pmt = monthly_payment(dec!(300000), dec!(0), 30).unwrap();
/// assert_eq!(pmt.round_dp(2), dec!(833.33));
/// ```
pub fn monthly_payment(
    principal: Decimal,
    annual_rate_pct: Decimal,
    term_years: u32,
) -> PrequalResult<Decimal> {
    let n = term_years * 12;
    if n == 0 {
        return Err(PrequalError::invalid_term(i64::from(term_years)));
    }
    let monthly_rate = monthly_rate_f64(annual_rate_pct)?;
    if monthly_rate.abs() < ZERO_RATE_EPSILON {
        return Ok(principal / Decimal::from(n));
    }
    let principal_f64 = principal
        .to_f64()
        .ok_or_else(|| PrequalError::math_error("principal not representable as f64"))?;
    let factor = 1.0 - (1.0 + monthly_rate).powi(-(n as i32));
    let pmt = monthly_rate * principal_f64 / factor;
    Decimal::from_f64(pmt).ok_or_else(|| PrequalError::math_error("payment overflowed Decimal"))
}

/// Reverses amortization to find the principal for a given payment.
///
/// Given a payment target, rate, and term, returns the maximum principal
/// that the payment services. This is the inverse of [`monthly_payment`].
///
/// # Errors
///
/// Returns [`PrequalError::InvalidTerm`] when the term is zero.
pub fn principal_from_payment(
    payment: Decimal,
    annual_rate_pct: Decimal,
    term_years: u32,
) -> PrequalResult<Decimal> {
    let n = term_years * 12;
    if n == 0 {
        return Err(PrequalError::invalid_term(i64::from(term_years)));
    }
    let monthly_rate = monthly_rate_f64(annual_rate_pct)?;
    if monthly_rate.abs() < ZERO_RATE_EPSILON {
        return Ok(payment * Decimal::from(n));
    }
    let payment_f64 = payment
        .to_f64()
        .ok_or_else(|| PrequalError::math_error("payment not representable as f64"))?;
    let factor = 1.0 - (1.0 + monthly_rate).powi(-(n as i32));
    let principal = payment_f64 * factor / monthly_rate;
    Decimal::from_f64(principal)
        .ok_or_else(|| PrequalError::math_error("principal overflowed Decimal"))
}

fn monthly_rate_f64(annual_rate_pct: Decimal) -> PrequalResult<f64> {
    let rate = annual_rate_pct
        .to_f64()
        .ok_or_else(|| PrequalError::math_error("rate not representable as f64"))?;
    Ok(rate / 100.0 / 12.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_standard_30yr_payment() {
        // 400k at 6.5% over 30 years is about $2,528.27
        let pmt = monthly_payment(dec!(400000), dec!(6.5), 30).unwrap();
        assert!((pmt - dec!(2528.27)).abs() < dec!(0.05));
    }

    #[test]
    fn test_zero_rate_straight_line() {
        let pmt = monthly_payment(dec!(360000), dec!(0), 30).unwrap();
        assert_eq!(pmt, dec!(1000));
    }

    #[test]
    fn test_zero_term_is_error() {
        assert!(monthly_payment(dec!(100000), dec!(6.5), 0).is_err());
        assert!(principal_from_payment(dec!(1000), dec!(6.5), 0).is_err());
    }

    #[test]
    fn test_inverse_roundtrip() {
        let principal = dec!(400000);
        let pmt = monthly_payment(principal, dec!(6.5), 30).unwrap();
        let back = principal_from_payment(pmt, dec!(6.5), 30).unwrap();
        assert!((back - principal).abs() < dec!(1.5));
    }

    #[test]
    fn test_zero_rate_inverse() {
        let principal = principal_from_payment(dec!(1000), dec!(0), 30).unwrap();
        assert_eq!(principal, dec!(360000));
    }
}
