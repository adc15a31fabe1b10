use std::fmt;
use thiserror::Error as ThisError;

///
/// DigitError
///
/// Failures raised by `DigitNumber` construction and arithmetic.
/// Input errors come from untrusted decimal text; everything else is a
/// broken caller contract (capacity or width sizing).
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum DigitError {
    /// Decimal input had no characters at all.
    #[error("decimal input is empty")]
    EmptyInput,

    /// Decimal input contained something other than `0`..=`9`.
    #[error("invalid decimal digit {found:?} at position {position}")]
    InvalidDigit { position: usize, found: char },

    /// Significant digits do not fit the allocated width.
    #[error("decimal input has {len} significant digits but capacity is {width}")]
    CapacityExceeded { len: usize, width: usize },

    #[error("digit index {index} out of bounds for width {width}")]
    IndexOutOfBounds { index: usize, width: usize },

    #[error("digit value {value} out of range at index {index}")]
    DigitOutOfRange { index: usize, value: u8 },

    /// Carry propagated past the most significant slot.
    #[error("carry out of the most significant digit (width {width})")]
    Overflow { width: usize },

    /// Borrow propagated past the most significant slot.
    #[error("borrow past the most significant digit (width {width})")]
    Underflow { width: usize },

    /// Arithmetic operands were not aligned to the same width.
    #[error("digit width mismatch: {left} vs {right}")]
    WidthMismatch { left: usize, right: usize },
}

impl DigitError {
    /// Classify this error for reporting.
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::EmptyInput | Self::InvalidDigit { .. } | Self::CapacityExceeded { .. } => {
                ErrorClass::InvalidInput
            }
            Self::IndexOutOfBounds { .. }
            | Self::DigitOutOfRange { .. }
            | Self::Overflow { .. }
            | Self::Underflow { .. }
            | Self::WidthMismatch { .. } => ErrorClass::InvariantViolation,
        }
    }
}

///
/// ErrorClass
/// Error taxonomy for reporting.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorClass {
    InvalidInput,
    InvariantViolation,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::InvalidInput => "invalid_input",
            Self::InvariantViolation => "invariant_violation",
        };
        write!(f, "{label}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_errors_are_classified_as_invalid_input() {
        assert_eq!(DigitError::EmptyInput.class(), ErrorClass::InvalidInput);
        assert_eq!(
            DigitError::CapacityExceeded { len: 5, width: 3 }.class(),
            ErrorClass::InvalidInput
        );
        assert_eq!(
            DigitError::InvalidDigit {
                position: 2,
                found: 'x'
            }
            .class(),
            ErrorClass::InvalidInput
        );
    }

    #[test]
    fn contract_errors_are_classified_as_invariant_violations() {
        assert_eq!(
            DigitError::Overflow { width: 4 }.class(),
            ErrorClass::InvariantViolation
        );
        assert_eq!(
            DigitError::WidthMismatch { left: 3, right: 0 }.class(),
            ErrorClass::InvariantViolation
        );
        assert_eq!(ErrorClass::InvariantViolation.to_string(), "invariant_violation");
    }

    #[test]
    fn capacity_message_names_both_sizes() {
        let err = DigitError::CapacityExceeded { len: 7, width: 3 };

        assert_eq!(
            err.to_string(),
            "decimal input has 7 significant digits but capacity is 3"
        );
    }
}
