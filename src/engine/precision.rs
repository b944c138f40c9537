// ============================================================================
// Precision Engine
// Public surface: precision masking and shift rounding
// ============================================================================

use super::digits::{count_fractional_digits, count_relative_significance};
use super::rounding::round_to_significance;
use crate::numeric::{
    pow10_decimal, PrecisionError, PrecisionFloat, PrecisionResult, MAX_DECIMAL_DIGITS,
    MAX_FRACTIONAL_DIGITS,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Upper bound on rounding passes in [`get_shift_round`]. Each pass drops
/// one fractional digit, so the decimal digit capacity bounds the loop.
const MAX_ROUND_PASSES: u32 = MAX_DECIMAL_DIGITS;

/// Mask `value` down to `precision_shift` digits of relative precision.
///
/// Values below the mask threshold `10^(-precision_shift)` collapse to exact
/// zero; this is a deliberate lossy floor, not a rounding step. Everything
/// else keeps its leading `precision_shift` digits (counted from the most
/// significant digit of the scaled integer form) and has all finer digits
/// truncated, never rounded.
///
/// ```
/// use floating_precision::get_precision_value;
///
/// assert_eq!(get_precision_value(3.14159f64, 2).unwrap(), 3.1);
/// assert_eq!(get_precision_value(0.0009f64, 2).unwrap(), 0.0);
/// ```
pub fn get_precision_value<T: PrecisionFloat>(
    value: T,
    precision_shift: i32,
) -> PrecisionResult<T> {
    let mask = T::pow10(precision_shift.saturating_neg());
    if value.abs() < mask {
        return Ok(T::ZERO);
    }

    let fractional_digits = count_fractional_digits(value)?.min(MAX_FRACTIONAL_DIGITS) as i64;
    if fractional_digits == 0 {
        return Ok(value);
    }

    let mask_value = value
        .to_decimal()?
        .checked_mul(pow10_decimal(fractional_digits)?)
        .ok_or(PrecisionError::Overflow)?
        .trunc()
        .to_i64()
        .ok_or(PrecisionError::Overflow)?;
    if mask_value == 0 {
        // Remainder finer than the accounted digits; nothing survives the mask.
        return Ok(T::ZERO);
    }

    let digit_count = mask_value.unsigned_abs().ilog10() as i64 + 1;
    let relative_index = digit_count - precision_shift as i64;

    let masked = Decimal::from(mask_value)
        .checked_div(pow10_decimal(relative_index)?)
        .ok_or(PrecisionError::Overflow)?
        .trunc();
    let restored = masked
        .checked_div(pow10_decimal(fractional_digits - relative_index)?)
        .ok_or(PrecisionError::Overflow)?;
    T::from_decimal(restored)
}

/// Round `value` until its significant-digit count fits within the `shift`
/// budget.
///
/// A nonzero integer part consumes one unit of the budget (the indexer).
/// A value whose relative significance plus indexer already fits the
/// adjusted budget is returned unchanged. Otherwise single-digit rounding
/// passes are applied until the admission test holds; the pass count is
/// bounded by the decimal digit capacity, and a value left with no
/// fractional digits is returned as-is since further rounding cannot reduce
/// it.
///
/// ```
/// use floating_precision::get_shift_round;
///
/// assert_eq!(get_shift_round(123.456789f64, 3).unwrap(), 123.5);
/// assert_eq!(get_shift_round(0.25f64, 3).unwrap(), 0.25);
/// ```
pub fn get_shift_round<T: PrecisionFloat>(value: T, shift: i32) -> PrecisionResult<T> {
    let value_indexer: i64 = if value.to_decimal()?.trunc().is_zero() {
        0
    } else {
        1
    };
    let budget = shift as i64 - value_indexer;

    let mut current = value;
    for pass in 0..=MAX_ROUND_PASSES {
        let fractional_digits = count_fractional_digits(current)?;
        let significance = count_relative_significance(current, fractional_digits)?;
        if significance as i64 + value_indexer <= budget || fractional_digits == 0 {
            return Ok(current);
        }
        tracing::trace!(?current, pass, significance, "significance over budget, rounding");
        current = round_to_significance(current, 1)?;
    }

    Ok(current)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precision_value_masks_leading_digits() {
        assert_eq!(get_precision_value(3.14159f64, 2).unwrap(), 3.1);
        assert_eq!(get_precision_value(-3.14159f64, 2).unwrap(), -3.1);
        assert_eq!(get_precision_value(3.14159f64, 4).unwrap(), 3.141);
    }

    #[test]
    fn test_precision_value_truncates_not_rounds() {
        // 3.14159 at shift 3 keeps 3.14; the dropped 159 never rounds up.
        assert_eq!(get_precision_value(3.14159f64, 3).unwrap(), 3.14);
        assert_eq!(get_precision_value(123.456f64, 2).unwrap(), 120.0);
    }

    #[test]
    fn test_precision_value_collapses_below_mask() {
        assert_eq!(get_precision_value(0.0009f64, 2).unwrap(), 0.0);
        assert_eq!(get_precision_value(0.0042f64, 2).unwrap(), 0.0);
        assert_eq!(get_precision_value(-0.0009f64, 2).unwrap(), 0.0);
        assert_eq!(get_precision_value(0.0f64, 2).unwrap(), 0.0);
    }

    #[test]
    fn test_precision_value_retains_above_mask() {
        // At shift 3 the mask is 10^-3 and 0.0042 passes through intact.
        assert_eq!(get_precision_value(0.0042f64, 3).unwrap(), 0.0042);
        assert_eq!(get_precision_value(0.5f64, 3).unwrap(), 0.5);
    }

    #[test]
    fn test_precision_value_integers_unchanged() {
        assert_eq!(get_precision_value(42.0f64, 2).unwrap(), 42.0);
        assert_eq!(get_precision_value(-1000.0f64, 5).unwrap(), -1000.0);
    }

    #[test]
    fn test_precision_value_zero_shift() {
        // 10^0 = 1: no division by zero in the mask computation.
        assert_eq!(get_precision_value(0.5f64, 0).unwrap(), 0.0);
        assert_eq!(get_precision_value(5.25f64, 0).unwrap(), 0.0);
    }

    #[test]
    fn test_precision_value_negative_shift_widens_mask() {
        // Shift -1 raises the collapse threshold to 10.
        assert_eq!(get_precision_value(5.25f64, -1).unwrap(), 0.0);
    }

    #[test]
    fn test_precision_value_f32() {
        assert_eq!(get_precision_value(3.14159f32, 2).unwrap(), 3.1f32);
        assert_eq!(get_precision_value(0.0009f32, 2).unwrap(), 0.0f32);
    }

    #[test]
    fn test_precision_value_non_finite() {
        assert_eq!(
            get_precision_value(f64::NAN, 2),
            Err(PrecisionError::NonFinite)
        );
    }

    #[test]
    fn test_precision_value_unrepresentable_shift() {
        // Mask passes but the relative index drives the scale past the
        // decimal digit capacity.
        assert_eq!(
            get_precision_value(0.5f64, 40),
            Err(PrecisionError::UnrepresentableScale)
        );
    }

    #[test]
    fn test_shift_round_within_budget_unchanged() {
        assert_eq!(get_shift_round(0.25f64, 3).unwrap(), 0.25);
        assert_eq!(get_shift_round(1.5f64, 3).unwrap(), 1.5);
        assert_eq!(get_shift_round(0.0f64, 3).unwrap(), 0.0);
        assert_eq!(get_shift_round(42.0f64, 2).unwrap(), 42.0);
    }

    #[test]
    fn test_shift_round_reduces_to_budget() {
        assert_eq!(get_shift_round(123.456789f64, 3).unwrap(), 123.5);
        assert_eq!(get_shift_round(0.123456f64, 3).unwrap(), 0.124);
        assert_eq!(get_shift_round(-123.456789f64, 3).unwrap(), -123.5);
    }

    #[test]
    fn test_shift_round_indexer_consumes_budget() {
        // 1.5 has one significant fractional digit, but the nonzero integer
        // part charges the budget twice at shift 2.
        assert_eq!(get_shift_round(1.5f64, 2).unwrap(), 2.0);
    }

    #[test]
    fn test_shift_round_result_fits_budget() {
        let rounded = get_shift_round(123.456789f64, 3).unwrap();
        let digits = count_fractional_digits(rounded).unwrap();
        assert!(count_relative_significance(rounded, digits).unwrap() <= 3);
    }

    #[test]
    fn test_shift_round_idempotent() {
        let rounded = get_shift_round(123.456789f64, 3).unwrap();
        assert_eq!(get_shift_round(rounded, 3).unwrap(), rounded);

        let rounded = get_shift_round(0.996f64, 2).unwrap();
        assert_eq!(rounded, 1.0);
        assert_eq!(get_shift_round(rounded, 2).unwrap(), rounded);
    }

    #[test]
    fn test_shift_round_non_finite() {
        assert_eq!(get_shift_round(f64::NAN, 3), Err(PrecisionError::NonFinite));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn below_mask_collapses_to_zero(value in -0.009f64..0.009, shift in 0i32..3) {
                prop_assume!(value.abs() < 10f64.powi(-shift));
                prop_assert_eq!(get_precision_value(value, shift).unwrap(), 0.0);
            }

            #[test]
            fn integers_pass_through(value in -1_000_000i64..1_000_000, shift in 0i32..6) {
                let value = value as f64;
                prop_assert_eq!(get_precision_value(value, shift).unwrap(), value);
            }

            #[test]
            fn shift_round_is_idempotent(value in -1000.0f64..1000.0, shift in 2i32..6) {
                let rounded = get_shift_round(value, shift).unwrap();
                prop_assert_eq!(get_shift_round(rounded, shift).unwrap(), rounded);
            }

            #[test]
            fn shift_round_fits_budget(value in -1000.0f64..1000.0, shift in 2i32..6) {
                let rounded = get_shift_round(value, shift).unwrap();
                let digits = count_fractional_digits(rounded).unwrap();
                let significance = count_relative_significance(rounded, digits).unwrap();
                prop_assert!(significance as i32 <= shift);
            }
        }
    }
}
