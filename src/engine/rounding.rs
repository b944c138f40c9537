// ============================================================================
// Significant Rounding
// Away-from-zero midpoint rounding at a relative digit position
// ============================================================================

use super::digits::count_fractional_digits;
use crate::numeric::{pow10_decimal, PrecisionError, PrecisionFloat, PrecisionResult};
use rust_decimal::RoundingStrategy;

/// Round `value` so that `precision_shift` trailing fractional digits are
/// dropped, with midpoints rounding away from zero.
///
/// The target scale is the current fractional digit count minus
/// `precision_shift`, clamped to `[0, current]`. The value is scaled to an
/// integer at that target, rounded, and scaled back, all in exact decimal
/// arithmetic. This is the sole rounding primitive of the engine; the
/// reference environment never uses banker's rounding.
///
/// ```
/// use floating_precision::round_to_significance;
///
/// assert_eq!(round_to_significance(0.125f64, 1).unwrap(), 0.13);
/// assert_eq!(round_to_significance(-0.125f64, 1).unwrap(), -0.13);
/// ```
pub fn round_to_significance<T: PrecisionFloat>(
    value: T,
    precision_shift: i32,
) -> PrecisionResult<T> {
    let current = count_fractional_digits(value)? as i64;
    let target = (current - precision_shift as i64).clamp(0, current);

    let scale = pow10_decimal(target)?;
    let rounded = value
        .to_decimal()?
        .checked_mul(scale)
        .ok_or(PrecisionError::Overflow)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let restored = rounded.checked_div(scale).ok_or(PrecisionError::Overflow)?;
    T::from_decimal(restored)
}
