//! Bounded integer-to-text conversion
//!
//! This crate renders integers into caller-supplied, fixed-capacity
//! buffers in any radix from 2 to 36, as narrow (byte) or wide text.
//!
//! Values travel in a maximal carrier (`i128` / `u128`) together with a
//! *declared width* in bytes. Only the low `width` bytes of the carrier are
//! significant: the codec truncates to that width and reinterprets the
//! sign the way a real `width`-byte integer would, so `65535` viewed as a
//! 2-byte signed value prints as `-1`.
//!
//! Output follows bounded-formatter conventions: at most `capacity - 1`
//! characters and a terminator are written, and the returned length is
//! always the untruncated one.
//!
//! # Module overview
//!
//! - `carrier`
//!   Carrier types and the helpers that widen narrower integers into them
//!   without disturbing their bit pattern.
//!
//! - `codec`
//!   Width normalization, digit generation, bounded emission, and the four
//!   public entry points (`signed_to_str`, `unsigned_to_str`,
//!   `signed_to_wcs`, `unsigned_to_wcs`).
//!
//! - `error`
//!   Parameter errors (`InvalidWidth`, `InvalidRadix`).
//!
//! # Design goals
//!
//! - No heap allocations
//! - No state shared between calls
//! - Invalid parameters are rejected before the buffer is touched
//!
//! # Example
//!
//! ```
//! use itostr::{codec, unsigned_carrier};
//!
//! let mut buf = [0u8; 8];
//! let len = codec::unsigned_to_str(unsigned_carrier(255u8), 1, &mut buf, 16).unwrap();
//!
//! assert_eq!(len, 2);
//! assert_eq!(&buf[..3], b"ff\0");
//! ```

pub mod carrier;
pub mod codec;
pub mod error;

pub use carrier::{CARRIER_BYTES, IntoCarrier, MaxSigned, MaxUnsigned, signed_carrier, unsigned_carrier};
pub use error::{CodecError, Result};
