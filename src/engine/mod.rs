// ============================================================================
// Engine Module
// Contains the core precision emulation logic
// ============================================================================

mod digits;
mod precision;
mod rounding;

pub use digits::{count_fractional_digits, count_relative_significance};
pub use precision::{get_precision_value, get_shift_round};
pub use rounding::round_to_significance;
