// ============================================================================
// Floating Precision Library
// MAXScript-style precision masking and shift rounding over exact decimals
// ============================================================================

//! # Floating Precision
//!
//! Reproduces the floating-point display and quantization behavior of the
//! MAXScript environment: significant-digit counting, away-from-zero
//! midpoint rounding, and sub-epsilon collapse to zero.
//!
//! ## Features
//!
//! - **Exact base-10 digit analysis** via `rust_decimal`; digit-boundary
//!   decisions never run on binary floating approximations
//! - **Generic over `f32` and `f64`** through the [`PrecisionFloat`] trait
//! - **Explicit errors** for overflow, non-finite input, and values past the
//!   representable decimal range; the library never panics
//! - **Pure and stateless**: every call is independent and re-entrant
//!
//! ## Example
//!
//! ```rust
//! use floating_precision::prelude::*;
//!
//! // Mask 3.14159 down to two digits of relative precision; finer digits
//! // are truncated, never rounded.
//! assert_eq!(get_precision_value(3.14159f64, 2).unwrap(), 3.1);
//!
//! // Values below the mask threshold collapse to exact zero.
//! assert_eq!(get_precision_value(0.0009f64, 2).unwrap(), 0.0);
//!
//! // Squeeze a value into a three-digit significance budget.
//! assert_eq!(get_shift_round(123.456789f64, 3).unwrap(), 123.5);
//! ```

pub mod engine;
pub mod numeric;

pub use engine::{
    count_fractional_digits, count_relative_significance, get_precision_value, get_shift_round,
    round_to_significance,
};
pub use numeric::{
    PrecisionError, PrecisionFloat, PrecisionResult, MAX_DECIMAL_DIGITS, MAX_FRACTIONAL_DIGITS,
};

// Re-exports for convenience
pub mod prelude {
    pub use crate::engine::{
        count_fractional_digits, count_relative_significance, get_precision_value,
        get_shift_round, round_to_significance,
    };
    pub use crate::numeric::{PrecisionError, PrecisionFloat, PrecisionResult};
}
