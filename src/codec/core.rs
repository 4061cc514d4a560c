//! Codec entry points.
//!
//! Every operation follows the same three steps:
//!
//! 1. validate the declared width and radix, before touching the buffer
//! 2. normalize the carrier to the declared width
//! 3. emit the digits into the buffer, truncating and terminating
//!
//! The buffer's length is its capacity. At most `capacity - 1` characters
//! plus a terminator are written; an empty buffer is never written to.
//! The returned length is always the untruncated one, so
//! `len >= buf.len()` means the output was cut short and a buffer of
//! `len + 1` units will hold it.
//!
//! ## Provided operations
//!
//! - [`signed_to_str`] / [`unsigned_to_str`]: narrow (byte) output
//! - [`signed_to_wcs`] / [`unsigned_to_wcs`]: wide ([`WideChar`]) output
//! - `*_with` variants taking a [`FormatSpec`]
//! - [`format_signed`] / [`format_unsigned`]: any [`CodeUnit`] buffer

use super::digits::Digits;
use super::normalize::{normalize_signed, normalize_unsigned};
use super::params::{FormatSpec, Width};
use super::sink::{BoundedSink, CodeUnit, WideChar, emit};
use crate::carrier::{MaxSigned, MaxUnsigned};
use crate::error::Result;

/// Formats a signed carrier truncated to `width` bytes into any code unit
/// buffer.
///
/// # Errors
///
/// `InvalidWidth` or `InvalidRadix`; the buffer is left untouched.
pub fn format_signed<U: CodeUnit>(
    value: MaxSigned,
    width: usize,
    buf: &mut [U],
    spec: FormatSpec,
) -> Result<usize> {
    let width = Width::new(width)?;
    let radix = spec.validate()?;

    let digits = Digits::signed(normalize_signed(value, width), radix, spec.case);

    Ok(emit(&mut BoundedSink::new(buf), digits.iter(), digits.len()))
}

/// Formats an unsigned carrier truncated to `width` bytes into any code
/// unit buffer.
///
/// # Errors
///
/// `InvalidWidth` or `InvalidRadix`; the buffer is left untouched.
pub fn format_unsigned<U: CodeUnit>(
    value: MaxUnsigned,
    width: usize,
    buf: &mut [U],
    spec: FormatSpec,
) -> Result<usize> {
    let width = Width::new(width)?;
    let radix = spec.validate()?;

    let digits = Digits::unsigned(normalize_unsigned(value, width), radix, spec.case);

    Ok(emit(&mut BoundedSink::new(buf), digits.iter(), digits.len()))
}

/// Signed value to narrow text, lowercase digits.
///
/// # Example
///
/// ```
/// use itostr::{codec::signed_to_str, signed_carrier};
///
/// let mut buf = [0u8; 80];
/// let len = signed_to_str(signed_carrier(u16::MAX), 2, &mut buf, 10).unwrap();
///
/// assert_eq!(len, 2);
/// assert_eq!(&buf[..3], b"-1\0");
/// ```
pub fn signed_to_str(value: MaxSigned, width: usize, buf: &mut [u8], radix: u32) -> Result<usize> {
    format_signed(value, width, buf, FormatSpec::radix(radix))
}

/// Unsigned value to narrow text, lowercase digits.
///
/// # Example
///
/// ```
/// use itostr::{codec::unsigned_to_str, unsigned_carrier};
///
/// let mut buf = [0u8; 80];
/// let len = unsigned_to_str(unsigned_carrier(i16::MIN), 2, &mut buf, 10).unwrap();
///
/// assert_eq!(len, 5);
/// assert_eq!(&buf[..6], b"32768\0");
/// ```
pub fn unsigned_to_str(value: MaxUnsigned, width: usize, buf: &mut [u8], radix: u32) -> Result<usize> {
    format_unsigned(value, width, buf, FormatSpec::radix(radix))
}

/// Signed value to wide text, lowercase digits.
pub fn signed_to_wcs(value: MaxSigned, width: usize, buf: &mut [WideChar], radix: u32) -> Result<usize> {
    format_signed(value, width, buf, FormatSpec::radix(radix))
}

/// Unsigned value to wide text, lowercase digits.
pub fn unsigned_to_wcs(value: MaxUnsigned, width: usize, buf: &mut [WideChar], radix: u32) -> Result<usize> {
    format_unsigned(value, width, buf, FormatSpec::radix(radix))
}

pub fn signed_to_str_with(value: MaxSigned, width: usize, buf: &mut [u8], spec: FormatSpec) -> Result<usize> {
    format_signed(value, width, buf, spec)
}

pub fn unsigned_to_str_with(value: MaxUnsigned, width: usize, buf: &mut [u8], spec: FormatSpec) -> Result<usize> {
    format_unsigned(value, width, buf, spec)
}

pub fn signed_to_wcs_with(value: MaxSigned, width: usize, buf: &mut [WideChar], spec: FormatSpec) -> Result<usize> {
    format_signed(value, width, buf, spec)
}

pub fn unsigned_to_wcs_with(
    value: MaxUnsigned,
    width: usize,
    buf: &mut [WideChar],
    spec: FormatSpec,
) -> Result<usize> {
    format_unsigned(value, width, buf, spec)
}
