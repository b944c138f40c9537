// ============================================================================
// Precision Float
// Conversion boundary between IEEE-754 floats and exact base-10 decimals
// ============================================================================

use super::errors::{PrecisionError, PrecisionResult};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use std::fmt;

/// Floating-point type that can round-trip through an exact base-10 decimal.
///
/// Conversions keep only the decimal digits the float can faithfully carry
/// (`Decimal::from_f64` style, 15 significant digits for `f64`, 7 for `f32`),
/// so binary representation noise never leaks into digit counting. The exact
/// bit-level conversion would turn `0.1 + 0.2` into a 17-digit decimal; the
/// lossy one yields `0.3`, matching the reference environment.
pub trait PrecisionFloat: Copy + PartialOrd + fmt::Debug {
    /// Additive identity.
    const ZERO: Self;

    fn is_finite(self) -> bool;

    fn abs(self) -> Self;

    /// `10^exp` in the float domain, overflowing to infinity and
    /// underflowing to zero at the extremes.
    fn pow10(exp: i32) -> Self;

    /// Convert to an exact decimal.
    ///
    /// # Errors
    /// `NonFinite` for NaN/infinity, `OutOfRange` when the magnitude exceeds
    /// the 96-bit decimal range.
    fn to_decimal(self) -> PrecisionResult<Decimal>;

    /// Convert back from an exact decimal.
    fn from_decimal(value: Decimal) -> PrecisionResult<Self>;
}

macro_rules! impl_precision_float {
    ($ty:ty, $from:ident, $to:ident) => {
        impl PrecisionFloat for $ty {
            const ZERO: Self = 0.0;

            #[inline]
            fn is_finite(self) -> bool {
                <$ty>::is_finite(self)
            }

            #[inline]
            fn abs(self) -> Self {
                <$ty>::abs(self)
            }

            #[inline]
            fn pow10(exp: i32) -> Self {
                (10.0 as $ty).powi(exp)
            }

            fn to_decimal(self) -> PrecisionResult<Decimal> {
                if !self.is_finite() {
                    return Err(PrecisionError::NonFinite);
                }
                Decimal::$from(self).ok_or(PrecisionError::OutOfRange)
            }

            fn from_decimal(value: Decimal) -> PrecisionResult<Self> {
                value.$to().ok_or(PrecisionError::OutOfRange)
            }
        }
    };
}

impl_precision_float!(f32, from_f32, to_f32);
impl_precision_float!(f64, from_f64, to_f64);
