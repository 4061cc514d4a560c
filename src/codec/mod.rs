//! Bounded integer-to-text codec.
//!
//! This module renders an integer of a *declared* byte width and
//! signedness into a caller-supplied buffer, in any radix from 2 to 36,
//! as either narrow (byte) or wide text.
//!
//! The implementation is split into small layers:
//!
//! - [`params`]
//!   Validated widths, radixes, and the per-call [`FormatSpec`].
//!
//! - [`normalize`]
//!   Reinterprets a maximal carrier as a value of the declared width,
//!   using explicit masking and two's-complement sign extension.
//!
//! - [`digits`]
//!   Digit generation into a fixed stack buffer, plus the length bound
//!   used to size buffers up front.
//!
//! - [`sink`]
//!   Character units and the bounded sink that performs truncating,
//!   terminated writes into the caller's slice.
//!
//! - [`core`]
//!   The public entry points tying the layers together.
//!
//! ## Design notes
//!
//! - No allocation: every call works on the stack and the caller's buffer.
//! - No state survives a call; concurrent calls on disjoint buffers are
//!   independent.
//! - Alphabetic digits are lowercase unless [`LetterCase::Upper`] is
//!   requested.

pub mod core;
pub mod digits;
pub mod normalize;
pub mod params;
pub mod sink;

pub use self::core::{
    format_signed, format_unsigned, signed_to_str, signed_to_str_with, signed_to_wcs,
    signed_to_wcs_with, unsigned_to_str, unsigned_to_str_with, unsigned_to_wcs,
    unsigned_to_wcs_with,
};
pub use digits::{Digits, Signedness, max_len, required_capacity};
pub use normalize::{normalize_signed, normalize_unsigned};
pub use params::{FormatSpec, LetterCase, Radix, Width};
pub use sink::{BoundedSink, CharSink, CodeUnit, WideChar};
