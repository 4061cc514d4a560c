//! Maximal integer carriers
//!
//! Every value handed to the codec travels in the widest native integer
//! type available, regardless of the width it was originally stored in.
//! The declared width passed alongside the value tells the codec how many
//! low-order bytes of the carrier actually mean something.
//!
//! The helpers in this module widen a narrower primitive into a carrier.
//! Widening follows plain `as` semantics:
//! - signed sources are sign-extended
//! - unsigned sources are zero-extended
//! - same-width sources keep their bit pattern
//!
//! Bits above the declared width are don't-care; the codec masks them away
//! before interpreting the value.

use std::mem;

/// Widest signed integer carrier.
pub type MaxSigned = i128;

/// Widest unsigned integer carrier.
pub type MaxUnsigned = u128;

/// Size of the maximal carrier in bytes.
pub const CARRIER_BYTES: usize = mem::size_of::<MaxUnsigned>();

/// Primitive integers that can be widened into a maximal carrier.
pub trait IntoCarrier: Copy {
    /// Natural width of the source type in bytes.
    const WIDTH: usize;

    /// Widens into the signed carrier, keeping the low-order bit pattern.
    fn into_signed_carrier(self) -> MaxSigned;

    /// Widens into the unsigned carrier, keeping the low-order bit pattern.
    fn into_unsigned_carrier(self) -> MaxUnsigned;
}

macro_rules! impl_into_carrier {
    ($($t:ty),* $(,)?) => {
        $(
            impl IntoCarrier for $t {
                const WIDTH: usize = mem::size_of::<$t>();

                #[inline]
                fn into_signed_carrier(self) -> MaxSigned {
                    self as MaxSigned
                }

                #[inline]
                fn into_unsigned_carrier(self) -> MaxUnsigned {
                    self as MaxUnsigned
                }
            }
        )*
    };
}

impl_into_carrier!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Widens any primitive integer into the signed carrier.
///
/// `signed_carrier(u16::MAX)` is `65535`; viewed through a 2-byte signed
/// width it reads back as `-1`.
#[inline]
pub fn signed_carrier<T: IntoCarrier>(value: T) -> MaxSigned {
    value.into_signed_carrier()
}

/// Widens any primitive integer into the unsigned carrier.
///
/// `unsigned_carrier(i16::MIN)` carries `0x8000` in its low 16 bits; viewed
/// through a 2-byte unsigned width it reads back as `32768`.
#[inline]
pub fn unsigned_carrier<T: IntoCarrier>(value: T) -> MaxUnsigned {
    value.into_unsigned_carrier()
}
