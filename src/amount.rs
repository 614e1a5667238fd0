//! Exact decimal scaling between human-readable and smallest-unit amounts
//!
//! Human-supplied amounts arrive as decimal strings ("1.234567") and leave
//! as integers in the token's smallest unit. Parsing is exact (no floats)
//! and scaling truncates toward zero, never rounding up, so a caller can
//! never overspend through rounding.

use std::str::FromStr;

use alloy_primitives::U256;
use bigdecimal::num_bigint::{BigInt, Sign};
use bigdecimal::{BigDecimal, RoundingMode};

use crate::errors::AmountError;

/// Scale a human-readable decimal amount to an integer in smallest units
///
/// Parses `amount` as an exact decimal, multiplies by `10^decimals`, and
/// truncates any remaining fraction. Rejects malformed and negative input.
///
/// # Examples
///
/// ```
/// use alloy_primitives::U256;
/// use corebridge::amount::float_amount_to_int;
///
/// let scaled = float_amount_to_int("1.234567", 6).unwrap();
/// assert_eq!(scaled, U256::from(1_234_567u64));
///
/// // Excess precision truncates, never rounds up
/// let scaled = float_amount_to_int("1.9999999", 6).unwrap();
/// assert_eq!(scaled, U256::from(1_999_999u64));
/// ```
pub fn float_amount_to_int(amount: &str, decimals: u8) -> Result<U256, AmountError> {
    let parsed = BigDecimal::from_str(amount.trim())
        .map_err(|e| AmountError::invalid(amount, e.to_string()))?;

    if parsed.sign() == Sign::Minus {
        return Err(AmountError::NegativeAmount {
            value: amount.to_string(),
        });
    }

    // Fixing the scale to `decimals` makes the significand exactly the
    // smallest-unit integer; Down truncates excess fractional digits.
    let scaled = parsed.with_scale_round(i64::from(decimals), RoundingMode::Down);
    let (units, _scale) = scaled.into_bigint_and_exponent();

    U256::from_str_radix(&units.to_string(), 10).map_err(|_| AmountError::Overflow {
        value: amount.to_string(),
        decimals,
    })
}

/// Convert a smallest-unit integer back to its human-readable decimal value
///
/// Exact inverse of [`float_amount_to_int`] for amounts that carried no
/// truncated precision.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use alloy_primitives::U256;
/// use bigdecimal::BigDecimal;
/// use corebridge::amount::int_amount_to_float;
///
/// let human = int_amount_to_float(U256::from(1_234_567u64), 6);
/// assert_eq!(human, BigDecimal::from_str("1.234567").unwrap());
/// ```
pub fn int_amount_to_float(amount: U256, decimals: u8) -> BigDecimal {
    let units = BigInt::from_str(&amount.to_string())
        .unwrap_or_else(|_| unreachable!("U256 display is always a valid decimal integer"));
    BigDecimal::new(units, i64::from(decimals))
}
