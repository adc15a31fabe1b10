use crate::{error::DigitError, number::DigitNumber};

///
/// Direction
///
/// Which way a number moves when it sheds its topmost `4`.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Direction {
    #[default]
    Increase,
    Decrease,
}

impl Direction {
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Self::Increase => Self::Decrease,
            Self::Decrease => Self::Increase,
        }
    }
}

///
/// Adjustment
///
/// Outcome of one shift.
///
/// `Settled` means the number moved by exactly the requested minimum and is
/// fourless. `Carry` holds the nonzero amount it moved beyond that minimum,
/// which the partner number now has to absorb.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Adjustment {
    Settled,
    Carry(DigitNumber),
}

impl Adjustment {
    #[must_use]
    pub const fn is_settled(&self) -> bool {
        matches!(self, Self::Settled)
    }

    #[must_use]
    pub const fn difference(&self) -> Option<&DigitNumber> {
        match self {
            Self::Settled => None,
            Self::Carry(difference) => Some(difference),
        }
    }

    #[must_use]
    pub fn into_difference(self) -> Option<DigitNumber> {
        match self {
            Self::Settled => None,
            Self::Carry(difference) => Some(difference),
        }
    }
}

impl DigitNumber {
    ///
    /// SHIFTS
    ///

    /// Increase by at least `min_difference` and until fourless.
    ///
    /// A zero `min_difference` (of any width, `NONE` included) only clears
    /// the topmost `4`. Otherwise the widths must match.
    pub fn next_number(&mut self, min_difference: &Self) -> Result<Adjustment, DigitError> {
        self.shift(Direction::Increase, min_difference)
    }

    /// Decrease by at least `min_difference` and until fourless.
    pub fn prev_number(&mut self, min_difference: &Self) -> Result<Adjustment, DigitError> {
        self.shift(Direction::Decrease, min_difference)
    }

    /// Move in `direction` by at least `min_difference`, then on to the
    /// nearest fourless value.
    ///
    /// A `4` more significant than every digit of `min_difference` either
    /// survives the move, and is then the topmost `4` to clear, or is carried
    /// past by it. The returned difference is exact in both cases.
    pub fn shift(
        &mut self,
        direction: Direction,
        min_difference: &Self,
    ) -> Result<Adjustment, DigitError> {
        if min_difference.is_zero() {
            return self.settle(direction);
        }

        match direction {
            Direction::Increase => self.increase_by_minimum(min_difference),
            Direction::Decrease => self.decrease_by_minimum(min_difference),
        }
    }

    ///
    /// PRIMITIVES
    ///

    /// Bump the digit at `index` and zero every digit below it.
    ///
    /// Returns the exact amount added: the ten's complement of the cleared
    /// low digits, or a single `1` at `index` when they were all zero.
    pub fn increase_from_index(&mut self, index: usize) -> Result<Self, DigitError> {
        self.check_index(index)?;
        if self.digits[..=index].iter().all(|&digit| digit == 9) {
            return Err(DigitError::Overflow {
                width: self.width(),
            });
        }

        let width = self.width();
        let mut difference = Self::new(width);
        let mut borrow = false;

        for i in (index + 1..width).rev() {
            let low = self.digits[i] + u8::from(borrow);
            if low != 0 {
                difference.write(i, 10 - low);
                borrow = true;
            }
            self.write(i, 0);
        }

        if !borrow {
            difference.write(index, 1);
        }
        self.add_unit_at(index);

        Ok(difference)
    }

    /// Drop the digit at `index` by one and fill every digit below it with `9`.
    ///
    /// Returns the exact amount removed: the cleared low digits plus one.
    pub fn decrease_from_index(&mut self, index: usize) -> Result<Self, DigitError> {
        self.check_index(index)?;
        if self.digits[..=index].iter().all(|&digit| digit == 0) {
            return Err(DigitError::Underflow {
                width: self.width(),
            });
        }

        let width = self.width();
        let mut difference = Self::new(width);
        let mut carry = true;

        for i in (index + 1..width).rev() {
            let low = self.digits[i] + u8::from(carry);
            if low == 10 {
                carry = true;
            } else {
                difference.write(i, low);
                carry = false;
            }
            self.write(i, 9);
        }

        if carry {
            difference.write(index, 1);
        }
        self.sub_unit_at(index);

        Ok(difference)
    }

    /// Add `delta`, then clear the topmost `4` of the sum if one appeared.
    ///
    /// On overflow the number is left untouched.
    pub fn increase_by_minimum(&mut self, delta: &Self) -> Result<Adjustment, DigitError> {
        self.check_width(delta)?;

        let mut sum = vec![0; self.width()];
        let mut carry = 0;
        for i in (0..self.width()).rev() {
            let total = self.digits[i] + delta.digits[i] + carry;
            sum[i] = total % 10;
            carry = total / 10;
        }
        if carry != 0 {
            return Err(DigitError::Overflow {
                width: self.width(),
            });
        }

        self.store_from_bottom(&sum);
        self.settle(Direction::Increase)
    }

    /// Subtract `delta`, then clear the topmost `4` of the result if one
    /// appeared.
    ///
    /// On underflow the number is left untouched.
    pub fn decrease_by_minimum(&mut self, delta: &Self) -> Result<Adjustment, DigitError> {
        self.check_width(delta)?;

        let mut rest = vec![0; self.width()];
        let mut borrow = 0;
        for i in (0..self.width()).rev() {
            let subtrahend = delta.digits[i] + borrow;
            if self.digits[i] >= subtrahend {
                rest[i] = self.digits[i] - subtrahend;
                borrow = 0;
            } else {
                rest[i] = self.digits[i] + 10 - subtrahend;
                borrow = 1;
            }
        }
        if borrow != 0 {
            return Err(DigitError::Underflow {
                width: self.width(),
            });
        }

        self.store_from_bottom(&rest);
        self.settle(Direction::Decrease)
    }

    // Write a full digit image least significant first, as a carry chain would.
    fn store_from_bottom(&mut self, image: &[u8]) {
        for (i, &digit) in image.iter().enumerate().rev() {
            if self.digits[i] != digit {
                self.write(i, digit);
            }
        }
    }

    // Clear the topmost `4`, if any, moving in `direction`.
    fn settle(&mut self, direction: Direction) -> Result<Adjustment, DigitError> {
        let Some(top) = self.top_four else {
            return Ok(Adjustment::Settled);
        };

        let difference = match direction {
            Direction::Increase => self.increase_from_index(top)?,
            Direction::Decrease => self.decrease_from_index(top)?,
        };

        Ok(Adjustment::Carry(difference))
    }
}
