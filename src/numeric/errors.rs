// ============================================================================
// Precision Errors
// Error types for exact-decimal precision operations
// ============================================================================

use std::fmt;

/// Errors that can occur while masking or rounding a floating-point value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PrecisionError {
    /// A scaled intermediate exceeded the i64 range
    Overflow,
    /// Input was NaN or infinite
    NonFinite,
    /// Value cannot be represented as an exact 96-bit decimal
    OutOfRange,
    /// A power-of-ten exponent fell outside the representable decimal scale
    UnrepresentableScale,
}

impl fmt::Display for PrecisionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrecisionError::Overflow => {
                write!(f, "arithmetic overflow: scaled value exceeded the i64 range")
            },
            PrecisionError::NonFinite => write!(f, "non-finite input: value is NaN or infinite"),
            PrecisionError::OutOfRange => {
                write!(f, "out of range: value is not representable as an exact decimal")
            },
            PrecisionError::UnrepresentableScale => write!(
                f,
                "unrepresentable scale: power-of-ten exponent exceeds the decimal digit limit"
            ),
        }
    }
}

impl std::error::Error for PrecisionError {}

/// Result type alias for precision operations
pub type PrecisionResult<T> = Result<T, PrecisionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            PrecisionError::Overflow.to_string(),
            "arithmetic overflow: scaled value exceeded the i64 range"
        );
        assert_eq!(
            PrecisionError::NonFinite.to_string(),
            "non-finite input: value is NaN or infinite"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(PrecisionError::Overflow, PrecisionError::Overflow);
        assert_ne!(PrecisionError::Overflow, PrecisionError::OutOfRange);
    }
}
