// ============================================================================
// Digit Counting
// Fractional digit counts and relative significance over exact decimals
// ============================================================================

use crate::numeric::{pow10_decimal, PrecisionError, PrecisionFloat, PrecisionResult};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Number of decimal digits to the right of the decimal point in the
/// fractional remainder of `value`.
///
/// The remainder is probed as `1 - r`: subtraction against one pins the
/// probe into `(0, 2]` while the decimal subtraction keeps the remainder's
/// scale metadata intact, so the scale of the probe is the scale of the
/// remainder itself.
///
/// ```
/// use floating_precision::count_fractional_digits;
///
/// assert_eq!(count_fractional_digits(3.14159f64).unwrap(), 5);
/// assert_eq!(count_fractional_digits(42.0f64).unwrap(), 0);
/// ```
pub fn count_fractional_digits<T: PrecisionFloat>(value: T) -> PrecisionResult<u32> {
    let remainder = value.to_decimal()?.fract();
    let probe = Decimal::ONE - remainder;
    Ok(probe.scale())
}

/// Number of significant digits in the fractional remainder of `value` once
/// shifted into an integer by `10^fractional_digits`.
///
/// A single scaling pass is not enough: the digit count of the scaled
/// integer includes positions introduced by the shift. Scaling up, counting,
/// and dividing back down by `10^digit_count` forces the decimal to
/// re-derive a trailing-zero-aware scale for the significant digits alone,
/// which drops the leading-zero structure of remainders like `0.012`.
///
/// The scaled remainder must fit an `i64`; wider values return `Overflow`.
pub fn count_relative_significance<T: PrecisionFloat>(
    value: T,
    fractional_digits: u32,
) -> PrecisionResult<u32> {
    let remainder = value.to_decimal()?.fract();
    if remainder.is_zero() {
        return Ok(0);
    }

    let scaled = remainder
        .checked_mul(pow10_decimal(fractional_digits as i64)?)
        .ok_or(PrecisionError::Overflow)?
        .trunc()
        .to_i64()
        .ok_or(PrecisionError::Overflow)?;
    if scaled == 0 {
        return Ok(0);
    }

    let digit_count = scaled.unsigned_abs().ilog10() + 1;
    let normalized = Decimal::from(scaled)
        .checked_div(pow10_decimal(digit_count as i64)?)
        .ok_or(PrecisionError::Overflow)?;
    Ok(normalized.normalize().scale())
}
