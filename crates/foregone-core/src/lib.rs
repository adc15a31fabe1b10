//! Fourless splitting for arbitrarily long decimal numbers.
//!
//! Given N, find `A + B == N` where neither addend contains the digit `4`
//! and `max(A, B)` is as small as possible.
//!
//! - `number`: fixed-width decimal digits that track their topmost `4`.
//! - `search`: the alternating search that nudges `A` up and `B` down.
//! - `case`: input validation and independent answer verification.
#![warn(unreachable_pub)]

pub mod case;
pub mod error;
pub mod number;
pub mod search;

pub use error::{DigitError, ErrorClass};
pub use number::DigitNumber;
pub use search::{FourlessPair, solve_decimal};

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        case::Case,
        number::{Adjustment, DigitNumber, Direction},
        search::{FourlessPair, HalfSplit},
    };
}
