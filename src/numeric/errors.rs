// ============================================================================
// Numeric Errors
// Error types for decimal construction and arithmetic
// ============================================================================

use std::fmt;

/// Errors that can occur while building or combining decimal values.
///
/// Every failure is reported before any value is produced, so no
/// partially built or partially updated `Decimal` is ever observable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// A digit value outside 0..=9 (fill digit or digit list element)
    InvalidDigit(u8),
    /// String contains a non-digit character after the leading zeros
    InvalidNumericString,
    /// Subtraction would produce a negative result
    Underflow,
    /// Digit position at or beyond the stored digit count
    IndexOutOfRange { index: usize, len: usize },
    /// Value does not fit the target primitive or external decimal type
    Overflow,
    /// Conversion would drop a fractional part
    PrecisionLoss,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::InvalidDigit(digit) => {
                write!(f, "invalid decimal digit {}: must be 0-9", digit)
            },
            NumericError::InvalidNumericString => write!(
                f,
                "invalid decimal string: contains non-digit characters"
            ),
            NumericError::Underflow => {
                write!(f, "arithmetic underflow: cannot represent a negative result")
            },
            NumericError::IndexOutOfRange { index, len } => write!(
                f,
                "digit index {} out of range for value with {} digits",
                index, len
            ),
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: value exceeds target range")
            },
            NumericError::PrecisionLoss => write!(
                f,
                "precision loss: value has a fractional part"
            ),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
