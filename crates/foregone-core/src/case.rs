//! One input case: a decimal N read from a line, and its fourless answer.

use crate::{
    error::DigitError,
    number::{FORBIDDEN_DIGIT, validate_decimal},
    search::{FourlessPair, solve_decimal},
};
use thiserror::Error as ThisError;

///
/// Case
///
/// Validated decimal text for N. Surrounding whitespace is dropped;
/// leading zeros are kept and only widen the working digit arrays.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Case {
    number: String,
}

impl Case {
    pub fn parse(line: &str) -> Result<Self, DigitError> {
        let number = line.trim();
        validate_decimal(number)?;

        Ok(Self {
            number: number.to_string(),
        })
    }

    #[must_use]
    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn solve(&self) -> Result<FourlessPair, DigitError> {
        solve_decimal(&self.number)
    }
}

///
/// VerifyError
///
/// An answer that fails the fourless-split contract.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum VerifyError {
    #[error("addend {addend} contains the digit 4")]
    ContainsFour { addend: String },

    #[error("addend {addend} is not a decimal number")]
    NotDecimal { addend: String },

    #[error("{high} + {low} = {sum}, expected {expected}")]
    SumMismatch {
        high: String,
        low: String,
        sum: String,
        expected: String,
    },
}

/// Check `pair` against N without going through the search code.
pub fn verify(n: &str, pair: &FourlessPair) -> Result<(), VerifyError> {
    for addend in [&pair.high, &pair.low] {
        if validate_decimal(addend).is_err() {
            return Err(VerifyError::NotDecimal {
                addend: addend.clone(),
            });
        }
        if addend.bytes().any(|byte| byte == b'0' + FORBIDDEN_DIGIT) {
            return Err(VerifyError::ContainsFour {
                addend: addend.clone(),
            });
        }
    }

    let sum = add_decimal(&pair.high, &pair.low);
    let expected = canonical(n);
    if sum != expected {
        return Err(VerifyError::SumMismatch {
            high: pair.high.clone(),
            low: pair.low.clone(),
            sum,
            expected: expected.to_string(),
        });
    }

    Ok(())
}

// Schoolbook addition of two digit strings, canonical result.
fn add_decimal(lhs: &str, rhs: &str) -> String {
    let mut lhs_digits = lhs.bytes().rev();
    let mut rhs_digits = rhs.bytes().rev();
    let mut reversed = Vec::with_capacity(lhs.len().max(rhs.len()) + 1);
    let mut carry = 0;

    loop {
        let (l, r) = (lhs_digits.next(), rhs_digits.next());
        if l.is_none() && r.is_none() {
            break;
        }

        let total = l.map_or(0, |b| b - b'0') + r.map_or(0, |b| b - b'0') + carry;
        reversed.push(b'0' + total % 10);
        carry = total / 10;
    }
    if carry != 0 {
        reversed.push(b'0' + carry);
    }

    let digits: String = reversed.into_iter().rev().map(char::from).collect();
    canonical(&digits).to_string()
}

fn canonical(digits: &str) -> &str {
    match digits.trim_start_matches('0') {
        "" => "0",
        trimmed => trimmed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(high: &str, low: &str) -> FourlessPair {
        FourlessPair {
            high: high.to_string(),
            low: low.to_string(),
        }
    }

    #[test]
    fn parse_trims_and_validates() {
        let case = Case::parse("  0909 \r\n").expect("digits with whitespace");

        assert_eq!(case.number(), "0909");
        assert_eq!(Case::parse("   "), Err(DigitError::EmptyInput));
        assert_eq!(
            Case::parse("9 09"),
            Err(DigitError::InvalidDigit {
                position: 1,
                found: ' '
            })
        );
    }

    #[test]
    fn solved_case_passes_verification() {
        let case = Case::parse("87346598").expect("digits only");
        let answer = case.solve().expect("should solve");

        assert_eq!(answer, pair("50006599", "37339999"));
        assert_eq!(verify(case.number(), &answer), Ok(()));
    }

    #[test]
    fn verify_accepts_zero_in_any_spelling() {
        assert_eq!(verify("000", &pair("0", "0")), Ok(()));
        assert_eq!(verify("10", &pair("10", "0")), Ok(()));
    }

    #[test]
    fn verify_rejects_a_four() {
        assert_eq!(
            verify("8", &pair("4", "4")),
            Err(VerifyError::ContainsFour {
                addend: "4".to_string()
            })
        );
    }

    #[test]
    fn verify_rejects_wrong_sum() {
        let err = verify("999", &pair("500", "398")).expect_err("sum is 898");

        assert_eq!(err.to_string(), "500 + 398 = 898, expected 999");
    }

    #[test]
    fn verify_rejects_non_decimal_addend() {
        assert!(matches!(
            verify("9", &pair("", "9")),
            Err(VerifyError::NotDecimal { .. })
        ));
    }

    #[test]
    fn add_decimal_carries_into_a_new_digit() {
        assert_eq!(add_decimal("999", "1"), "1000");
        assert_eq!(add_decimal("0", "0"), "0");
        assert_eq!(add_decimal("0050", "7"), "57");
    }
}
