// ============================================================================
// Powers of Ten
// Checked power-of-ten construction over exact decimals
// ============================================================================

use super::errors::{PrecisionError, PrecisionResult};
use super::MAX_DECIMAL_DIGITS;
use rust_decimal::Decimal;

/// `10^exp` as an exact decimal.
///
/// Valid for exponents in `[-MAX_DECIMAL_DIGITS, MAX_DECIMAL_DIGITS]`.
/// Negative exponents produce sub-unit decimals (`10^-2` is `0.01`), so a
/// division by a non-positive power of ten needs no special casing.
pub(crate) fn pow10_decimal(exp: i64) -> PrecisionResult<Decimal> {
    if exp.unsigned_abs() > MAX_DECIMAL_DIGITS as u64 {
        return Err(PrecisionError::UnrepresentableScale);
    }
    if exp >= 0 {
        Ok(Decimal::from_i128_with_scale(10i128.pow(exp as u32), 0))
    } else {
        Ok(Decimal::new(1, exp.unsigned_abs() as u32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_exponents() {
        assert_eq!(pow10_decimal(0).unwrap(), Decimal::ONE);
        assert_eq!(pow10_decimal(3).unwrap(), Decimal::from(1000));
        assert_eq!(
            pow10_decimal(28).unwrap().to_string(),
            "10000000000000000000000000000"
        );
    }

    #[test]
    fn test_negative_exponents() {
        assert_eq!(pow10_decimal(-1).unwrap().to_string(), "0.1");
        assert_eq!(pow10_decimal(-4).unwrap().to_string(), "0.0001");
    }

    #[test]
    fn test_out_of_range_exponents() {
        assert_eq!(pow10_decimal(29), Err(PrecisionError::UnrepresentableScale));
        assert_eq!(pow10_decimal(-29), Err(PrecisionError::UnrepresentableScale));
    }
}
