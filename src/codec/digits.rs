//! Digit generation.
//!
//! Turns a normalized value into its digit sequence in a given radix. The
//! digits are produced least-significant first into a fixed stack buffer
//! and read back in reverse, so no allocation ever takes place.
//!
//! # Length bound
//!
//! For a declared width of `w` bytes the longest output is:
//! - unsigned: the digit count of `2^(8w) - 1`
//! - signed: one sign character plus the digit count of `2^(8w - 1)`,
//!   the magnitude of the most negative value of that width
//!
//! In radix 2 this is at most `8w` digits, plus the sign. [`max_len`]
//! computes the exact figure; add one slot for the terminator.

use super::params::{LetterCase, Radix, Width};
use crate::carrier::{MaxSigned, MaxUnsigned};

/// Most digits any carrier value can produce (radix 2, all bits set).
const MAX_DIGITS: usize = MaxUnsigned::BITS as usize;

/// Interpretation of a value's top bit.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Signedness {
    Signed,
    Unsigned,
}

/// Digit sequence of a single value, with an optional leading minus sign.
#[derive(Clone, Debug)]
pub struct Digits {
    // Least-significant digit first.
    scratch: [u8; MAX_DIGITS],
    count: usize,
    negative: bool,
}

impl Digits {
    /// Digits of an unsigned effective value.
    pub fn unsigned(value: MaxUnsigned, radix: Radix, case: LetterCase) -> Self {
        Self::from_magnitude(value, false, radix, case)
    }

    /// Digits of a signed effective value.
    ///
    /// The magnitude is taken by negating the bit pattern as unsigned, which
    /// stays correct for the most negative value of any width.
    pub fn signed(value: MaxSigned, radix: Radix, case: LetterCase) -> Self {
        let negative = value < 0;
        let bits = value as MaxUnsigned;
        let magnitude = if negative { bits.wrapping_neg() } else { bits };

        Self::from_magnitude(magnitude, negative, radix, case)
    }

    fn from_magnitude(mut magnitude: MaxUnsigned, negative: bool, radix: Radix, case: LetterCase) -> Self {
        let alphabet = case.alphabet();
        let radix = MaxUnsigned::from(radix.get());

        let mut scratch = [0u8; MAX_DIGITS];
        let mut count = 0;

        loop {
            scratch[count] = alphabet[(magnitude % radix) as usize];
            count += 1;
            magnitude /= radix;

            if magnitude == 0 {
                break;
            }
        }

        Self {
            scratch,
            count,
            negative,
        }
    }

    /// Full output length: sign plus digits, terminator excluded.
    pub fn len(&self) -> usize {
        self.count + usize::from(self.negative)
    }

    /// Always false; zero still renders as `"0"`.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// ASCII characters in output order: sign first, then most-significant
    /// digit first.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.negative
            .then_some(b'-')
            .into_iter()
            .chain(self.scratch[..self.count].iter().rev().copied())
    }
}

fn digit_count(mut value: MaxUnsigned, radix: Radix) -> usize {
    let radix = MaxUnsigned::from(radix.get());
    let mut count = 1;

    while value >= radix {
        value /= radix;
        count += 1;
    }

    count
}

/// Longest content length (sign plus digits, terminator excluded) any value
/// of `width` can produce in `radix`.
pub fn max_len(width: Width, radix: Radix, signedness: Signedness) -> usize {
    let bits = width.bits();

    match signedness {
        Signedness::Unsigned => {
            let max = MaxUnsigned::MAX >> (MaxUnsigned::BITS - bits);
            digit_count(max, radix)
        }
        Signedness::Signed => {
            let min_magnitude: MaxUnsigned = 1 << (bits - 1);
            digit_count(min_magnitude, radix) + 1
        }
    }
}

/// Buffer capacity, terminator included, that never truncates a value of
/// `width` in `radix`.
pub fn required_capacity(width: Width, radix: Radix, signedness: Signedness) -> usize {
    max_len(width, radix, signedness) + 1
}
