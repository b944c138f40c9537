// ============================================================================
// Numeric Module
// Exact-decimal foundations for the precision engine
// ============================================================================
//
// This module provides:
// - PrecisionFloat: the float <-> exact-decimal conversion boundary
// - PrecisionError: error types for precision operations
// - The hard digit-count ceilings of the decimal representation
//
// Design principles:
// - All digit-boundary logic runs on exact base-10 decimals, never on
//   binary floating approximations
// - All fallible operations return Result (no panics)

mod errors;
mod float;
mod pow10;

pub use errors::{PrecisionError, PrecisionResult};
pub use float::PrecisionFloat;

pub(crate) use pow10::pow10_decimal;

/// Most fractional digits the engine accounts for in a single value.
pub const MAX_FRACTIONAL_DIGITS: u32 = 16;

/// Total digit capacity of the exact-decimal representation.
pub const MAX_DECIMAL_DIGITS: u32 = 28;
