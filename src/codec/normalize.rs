//! Width-based sign normalization.
//!
//! Reinterprets a maximal carrier as if the value had really been stored in
//! an integer of the declared width. This is done with an explicit mask and
//! a conditional sign extension rather than through narrowing casts, so the
//! result does not depend on which native types happen to exist.

use super::params::Width;
use crate::carrier::{MaxSigned, MaxUnsigned};

/// Mask selecting the low `width` bytes of a carrier.
#[inline]
const fn low_mask(width: Width) -> MaxUnsigned {
    let bits = width.bits();

    if bits >= MaxUnsigned::BITS {
        MaxUnsigned::MAX
    } else {
        (1 << bits) - 1
    }
}

/// Effective unsigned value of `value` truncated to `width`.
#[inline]
pub fn normalize_unsigned(value: MaxUnsigned, width: Width) -> MaxUnsigned {
    value & low_mask(width)
}

/// Effective signed value of `value` truncated to `width`.
///
/// If bit `width * 8 - 1` of the truncated pattern is set, every higher
/// bit is set as well, which yields the two's-complement negative that the
/// narrower width would represent.
#[inline]
pub fn normalize_signed(value: MaxSigned, width: Width) -> MaxSigned {
    let mask = low_mask(width);
    let truncated = value as MaxUnsigned & mask;
    let sign_bit: MaxUnsigned = 1 << (width.bits() - 1);

    if truncated & sign_bit != 0 {
        (truncated | !mask) as MaxSigned
    } else {
        truncated as MaxSigned
    }
}

