//! Fixed-width decimal numbers that track their own most significant `4`.
//!
//! Digits are stored most significant first. Every digit write funnels
//! through [`DigitNumber::set_digit`] (or its unchecked twin used by the
//! arithmetic), so the leading-zero boundary and the topmost-`4` index never
//! drift away from the digit contents.

mod shift;


pub use shift::{Adjustment, Direction};

use crate::error::DigitError;
use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

/// The digit a fourless number must not contain.
pub const FORBIDDEN_DIGIT: u8 = 4;

/// Reject anything that is not a non-empty run of ASCII decimal digits.
pub fn validate_decimal(text: &str) -> Result<(), DigitError> {
    if text.is_empty() {
        return Err(DigitError::EmptyInput);
    }

    match text.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
        Some((position, found)) => Err(DigitError::InvalidDigit { position, found }),
        None => Ok(()),
    }
}

///
/// DigitNumber
///
/// Non-negative decimal integer with a width fixed at construction.
///
/// Invariants:
/// - every digit is in `0..=9`
/// - `leading` is the lowest index holding a nonzero digit, or `width`
/// - `top_four` is the lowest index holding a `4`, or `None`
///
/// Equality, ordering and hashing follow the numeric value, so numbers of
/// different widths compare as their values do. `Default` is `NONE`.
///

#[derive(Clone, Debug, Default)]
pub struct DigitNumber {
    digits: Vec<u8>,
    leading: usize,
    top_four: Option<usize>,
}

impl DigitNumber {
    /// Zero-width number: the zero quantity, always fourless.
    pub const NONE: Self = Self {
        digits: Vec::new(),
        leading: 0,
        top_four: None,
    };

    /// Allocate a zero-valued number with `width` digit slots.
    #[must_use]
    pub fn new(width: usize) -> Self {
        Self {
            digits: vec![0; width],
            leading: width,
            top_four: None,
        }
    }

    /// Allocate `width` slots and load `text` into them.
    pub fn parse_with_width(text: &str, width: usize) -> Result<Self, DigitError> {
        let mut number = Self::new(width);
        number.init_from_decimal_str(text)?;

        Ok(number)
    }

    /// Copy this value into a number with `width` slots.
    pub fn widened(&self, width: usize) -> Result<Self, DigitError> {
        let significant = self.significant_digits();
        let len = significant.len();
        if len > width {
            return Err(DigitError::CapacityExceeded { len, width });
        }

        let mut number = Self::new(width);
        let offset = width - len;
        for (i, &digit) in significant.iter().enumerate() {
            number.write(offset + i, digit);
        }

        Ok(number)
    }

    ///
    /// ACCESSORS
    ///

    #[must_use]
    pub const fn width(&self) -> usize {
        self.digits.len()
    }

    /// All digit slots, most significant first.
    #[must_use]
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    #[must_use]
    pub fn digit(&self, index: usize) -> Option<u8> {
        self.digits.get(index).copied()
    }

    /// Digits from the first nonzero slot onward; empty for zero.
    #[must_use]
    pub fn significant_digits(&self) -> &[u8] {
        &self.digits[self.leading..]
    }

    #[must_use]
    pub const fn significant_len(&self) -> usize {
        self.width() - self.leading
    }

    #[must_use]
    pub const fn leading_zero_boundary(&self) -> usize {
        self.leading
    }

    /// Index of the most significant `4`, if any.
    #[must_use]
    pub const fn top_four_index(&self) -> Option<usize> {
        self.top_four
    }

    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.leading == self.width()
    }

    #[must_use]
    pub const fn is_fourless(&self) -> bool {
        self.top_four.is_none()
    }

    ///
    /// MUTATION
    ///

    /// Reload this number from decimal text.
    ///
    /// Leading zeros are stripped and the remaining digits are right-aligned.
    /// On error the number is left untouched.
    pub fn init_from_decimal_str(&mut self, text: &str) -> Result<(), DigitError> {
        validate_decimal(text)?;

        let significant = text.trim_start_matches('0').as_bytes();
        let width = self.width();
        let len = significant.len();
        if len > width {
            return Err(DigitError::CapacityExceeded { len, width });
        }

        let offset = width - len;
        for index in 0..width {
            let digit = if index < offset {
                0
            } else {
                significant[index - offset] - b'0'
            };
            self.write(index, digit);
        }

        Ok(())
    }

    /// Overwrite one digit, repairing the derived metadata.
    pub fn set_digit(&mut self, index: usize, value: u8) -> Result<(), DigitError> {
        self.check_index(index)?;
        if value > 9 {
            return Err(DigitError::DigitOutOfRange { index, value });
        }
        self.write(index, value);

        Ok(())
    }

    /// Add one with decimal carry.
    ///
    /// Fails without touching any digit when every slot already holds `9`.
    pub fn increment(&mut self) -> Result<(), DigitError> {
        if self.digits.iter().all(|&digit| digit == 9) {
            return Err(DigitError::Overflow {
                width: self.width(),
            });
        }

        self.add_unit_at(self.width() - 1);

        Ok(())
    }

    /// Raw rendering: significant digits only, so zero renders as `""`.
    #[must_use]
    pub fn to_decimal_string(&self) -> String {
        self.significant_digits()
            .iter()
            .map(|&digit| char::from(b'0' + digit))
            .collect()
    }

    ///
    /// INTERNAL
    ///

    // Single write path for every digit store.
    // Caller guarantees `index < width` and `value <= 9`.
    fn write(&mut self, index: usize, value: u8) {
        self.digits[index] = value;

        if value == FORBIDDEN_DIGIT {
            if self.top_four.is_none_or(|top| index < top) {
                self.top_four = Some(index);
            }
        } else if self.top_four == Some(index) {
            self.top_four = self.scan_four(index + 1);
        }

        if value != 0 {
            if index < self.leading {
                self.leading = index;
            }
        } else if index == self.leading {
            self.leading = self.scan_nonzero(index + 1);
        }
    }

    fn scan_four(&self, from: usize) -> Option<usize> {
        self.digits[from..]
            .iter()
            .position(|&digit| digit == FORBIDDEN_DIGIT)
            .map(|offset| from + offset)
    }

    fn scan_nonzero(&self, from: usize) -> usize {
        self.digits[from..]
            .iter()
            .position(|&digit| digit != 0)
            .map_or(self.width(), |offset| from + offset)
    }

    const fn check_index(&self, index: usize) -> Result<(), DigitError> {
        if index < self.width() {
            Ok(())
        } else {
            Err(DigitError::IndexOutOfBounds {
                index,
                width: self.width(),
            })
        }
    }

    const fn check_width(&self, other: &Self) -> Result<(), DigitError> {
        if self.width() == other.width() {
            Ok(())
        } else {
            Err(DigitError::WidthMismatch {
                left: self.width(),
                right: other.width(),
            })
        }
    }

    // Add one unit at `index`, carrying upward.
    // Caller guarantees some slot at or above `index` holds less than 9.
    fn add_unit_at(&mut self, mut index: usize) {
        while self.digits[index] == 9 {
            self.write(index, 0);
            index -= 1;
        }
        self.write(index, self.digits[index] + 1);
    }

    // Remove one unit at `index`, borrowing upward.
    // Caller guarantees some slot at or above `index` is nonzero.
    fn sub_unit_at(&mut self, mut index: usize) {
        while self.digits[index] == 0 {
            self.write(index, 9);
            index -= 1;
        }
        self.write(index, self.digits[index] - 1);
    }
}

impl fmt::Display for DigitNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }

        f.write_str(&self.to_decimal_string())
    }
}

/// Parses with a width equal to the input length, leading zeros included.
impl FromStr for DigitNumber {
    type Err = DigitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with_width(s, s.len())
    }
}

impl PartialEq for DigitNumber {
    fn eq(&self, other: &Self) -> bool {
        self.significant_digits() == other.significant_digits()
    }
}

impl Eq for DigitNumber {}

impl Hash for DigitNumber {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.significant_digits().hash(state);
    }
}

impl Ord for DigitNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_zero(), other.is_zero()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => self
                .significant_len()
                .cmp(&other.significant_len())
                .then_with(|| self.significant_digits().cmp(other.significant_digits())),
        }
    }
}

impl PartialOrd for DigitNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
