// ============================================================================
// Calculator Errors
// Error types for numeral parsing, radix selection and accumulator arithmetic
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors that can occur while parsing numerals or updating the accumulator.
///
/// Every variant is recoverable: callers re-prompt or report and carry on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CalcError {
    /// Operand text does not parse under the active radix
    InvalidNumeral,
    /// Divisor operand is exactly zero
    DivisionByZero,
    /// Base outside {2, 8, 10, 16}
    UnsupportedRadix(u32),
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcError::InvalidNumeral => {
                write!(f, "invalid numeral: not a valid number in the active radix")
            },
            CalcError::DivisionByZero => write!(f, "division by zero"),
            CalcError::UnsupportedRadix(base) => write!(
                f,
                "unsupported radix {}: only 2, 8, 10 and 16 are supported",
                base
            ),
        }
    }
}

impl std::error::Error for CalcError {}

/// Result type alias for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(CalcError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            CalcError::UnsupportedRadix(3).to_string(),
            "unsupported radix 3: only 2, 8, 10 and 16 are supported"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(CalcError::InvalidNumeral, CalcError::InvalidNumeral);
        assert_ne!(CalcError::UnsupportedRadix(3), CalcError::UnsupportedRadix(7));
        assert_ne!(CalcError::InvalidNumeral, CalcError::DivisionByZero);
    }
}
