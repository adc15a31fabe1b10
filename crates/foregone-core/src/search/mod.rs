//! Fourless search: split N into the closest pair of fourless addends.


use crate::{
    error::DigitError,
    number::{Adjustment, DigitNumber, Direction},
};
use derive_more::Display;
use serde::Serialize;

///
/// HalfSplit
///
/// Starting point of the search, sized to N's width.
///
/// Invariant: `high + low == N` and `high - low` is `0` or `1`.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HalfSplit {
    pub high: DigitNumber,
    pub low: DigitNumber,
}

impl HalfSplit {
    /// Halve `n` digit by digit, pushing each odd remainder down as a `5`.
    ///
    /// `low` is `floor(N/2)`; a final odd remainder is added back to `high`.
    pub fn of(n: &str) -> Result<Self, DigitError> {
        let number: DigitNumber = n.parse()?;
        let width = number.width();

        let mut low = DigitNumber::new(width);
        let mut odd = false;
        for (index, &digit) in number.digits().iter().enumerate() {
            let half = digit / 2 + if odd { 5 } else { 0 };
            low.set_digit(index, half)?;
            odd = digit % 2 == 1;
        }

        let mut high = low.clone();
        if odd {
            high.increment()?;
        }

        Ok(Self { high, low })
    }
}

///
/// FourlessPair
///
/// Rendered answer for one N: `high + low == N`, neither contains a `4`,
/// and `high` is the smallest such maximum.
///

#[derive(Clone, Debug, Display, Eq, PartialEq, Serialize)]
#[display("{high} {low}")]
pub struct FourlessPair {
    pub high: String,
    pub low: String,
}

impl FourlessPair {
    #[must_use]
    pub fn from_numbers(high: &DigitNumber, low: &DigitNumber) -> Self {
        Self {
            high: high.to_string(),
            low: low.to_string(),
        }
    }
}

///
/// Search
///
/// Alternating search state: `high` only grows, `low` only shrinks, and
/// their sum equals N whenever the pending difference is settled.
///

#[derive(Debug)]
pub struct Search {
    high: DigitNumber,
    low: DigitNumber,
    rounds: usize,
}

impl Search {
    #[must_use]
    pub fn new(split: HalfSplit) -> Self {
        Self {
            high: split.high,
            low: split.low,
            rounds: 0,
        }
    }

    /// Alternate shifts until one side absorbs the pending difference
    /// without carrying anything back.
    ///
    /// `high` moves first, unconditionally; when it is already fourless that
    /// move settles at once and `low` still gets its turn with a zero
    /// minimum before the search can stop.
    pub fn run(&mut self) -> Result<(), DigitError> {
        let mut direction = Direction::Increase;
        let mut difference = DigitNumber::NONE;

        loop {
            self.rounds += 1;

            let adjustment = match direction {
                Direction::Increase => self.high.next_number(&difference)?,
                Direction::Decrease => self.low.prev_number(&difference)?,
            };
            tracing::trace!(
                round = self.rounds,
                ?direction,
                settled = adjustment.is_settled(),
                "fourless search round"
            );

            match adjustment {
                Adjustment::Carry(carried) => difference = carried,
                // high was already fourless; low still takes its turn
                Adjustment::Settled if self.rounds == 1 => {}
                Adjustment::Settled => break,
            }
            direction = direction.reverse();
        }

        tracing::debug!(
            width = self.high.width(),
            rounds = self.rounds,
            "fourless search settled"
        );

        Ok(())
    }

    #[must_use]
    pub const fn high(&self) -> &DigitNumber {
        &self.high
    }

    #[must_use]
    pub const fn low(&self) -> &DigitNumber {
        &self.low
    }

    #[must_use]
    pub const fn rounds(&self) -> usize {
        self.rounds
    }

    #[must_use]
    pub fn into_pair(self) -> FourlessPair {
        FourlessPair::from_numbers(&self.high, &self.low)
    }
}

/// Drive `high` up and `low` down in place until both are fourless.
///
/// Both must share one width. Returns the number of rounds taken.
pub fn solve(high: &mut DigitNumber, low: &mut DigitNumber) -> Result<usize, DigitError> {
    if high.width() != low.width() {
        return Err(DigitError::WidthMismatch {
            left: high.width(),
            right: low.width(),
        });
    }

    let mut search = Search::new(HalfSplit {
        high: std::mem::take(high),
        low: std::mem::take(low),
    });
    let outcome = search.run();

    *high = search.high;
    *low = search.low;
    outcome.map(|()| search.rounds)
}

/// Solve one decimal N end to end.
pub fn solve_decimal(n: &str) -> Result<FourlessPair, DigitError> {
    let mut search = Search::new(HalfSplit::of(n)?);
    search.run()?;

    Ok(search.into_pair())
}
