// ============================================================================
// Basic Usage Example
// ============================================================================

use floating_precision::prelude::*;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Floating Precision Example ===\n");

    println!("Precision masking (shift = 2):");
    for value in [3.14159f64, 123.456, 0.0042, 0.0009, 42.0] {
        let masked = get_precision_value(value, 2).unwrap();
        println!("  {value:>10} -> {masked}");
    }

    println!("\nShift rounding (budget = 3):");
    for value in [123.456789f64, 0.123456, 1.5, 0.25] {
        let rounded = get_shift_round(value, 3).unwrap();
        println!("  {value:>10} -> {rounded}");
    }

    println!("\nDigit analysis:");
    for value in [0.012f64, 0.105, 3.14159] {
        let digits = count_fractional_digits(value).unwrap();
        let significance = count_relative_significance(value, digits).unwrap();
        println!("  {value:>10} has {digits} fractional digits, {significance} significant");
    }
}
