//! Parameter definitions and validation for the codec.
//!
//! Raw widths and radixes coming from callers are checked once here and
//! carried as validated newtypes afterwards, so the digit and emission
//! stages never see an out-of-range value.

use tracing::debug;

use crate::carrier::{CARRIER_BYTES, IntoCarrier};
use crate::error::{CodecError, Result};

/// Declared width of a value in bytes (`1..=CARRIER_BYTES`).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Width(usize);

impl Width {
    /// Width of the maximal carrier. Normalization is the identity here.
    pub const MAX: Self = Self(CARRIER_BYTES);

    /// Validates a raw byte width.
    ///
    /// Zero is rejected: a value with no significant bytes has no defined
    /// sign or magnitude.
    pub fn new(bytes: usize) -> Result<Self> {
        if bytes == 0 || bytes > CARRIER_BYTES {
            debug!(width = bytes, "rejected declared width");
            return Err(CodecError::InvalidWidth(bytes));
        }

        Ok(Self(bytes))
    }

    /// Natural width of a primitive integer type.
    pub fn of<T: IntoCarrier>() -> Self {
        Self(T::WIDTH)
    }

    /// Width in bytes.
    pub const fn bytes(self) -> usize {
        self.0
    }

    /// Width in bits.
    pub const fn bits(self) -> u32 {
        (self.0 * 8) as u32
    }
}

/// Numeric base for digit generation (`2..=36`).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Radix(u32);

impl Radix {
    pub const BINARY: Self = Self(2);
    pub const OCTAL: Self = Self(8);
    pub const DECIMAL: Self = Self(10);
    pub const HEXADECIMAL: Self = Self(16);

    pub const MIN: u32 = 2;
    pub const MAX: u32 = 36;

    /// Validates a raw radix.
    pub fn new(radix: u32) -> Result<Self> {
        if !(Self::MIN..=Self::MAX).contains(&radix) {
            debug!(radix, "rejected radix");
            return Err(CodecError::InvalidRadix(radix));
        }

        Ok(Self(radix))
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl Default for Radix {
    fn default() -> Self {
        Self::DECIMAL
    }
}

/// Case used for the alphabetic digits `a..=z`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum LetterCase {
    /// `0-9a-z`. Used by the plain entry points.
    #[default]
    Lower,
    /// `0-9A-Z`.
    Upper,
}

impl LetterCase {
    pub(crate) const fn alphabet(self) -> &'static [u8; 36] {
        match self {
            LetterCase::Lower => b"0123456789abcdefghijklmnopqrstuvwxyz",
            LetterCase::Upper => b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ",
        }
    }
}

/// Per-call formatting configuration.
///
/// The radix is kept raw so that a spec built from untrusted input is only
/// rejected when it is used, before any output is written.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FormatSpec {
    /// Numeric base (2..=36).
    pub radix: u32,
    /// Case of alphabetic digits.
    pub case: LetterCase,
}

impl FormatSpec {
    /// Lowercase spec for the given radix.
    pub const fn radix(radix: u32) -> Self {
        Self {
            radix,
            case: LetterCase::Lower,
        }
    }

    /// Same spec with a different letter case.
    pub const fn with_case(self, case: LetterCase) -> Self {
        Self { case, ..self }
    }

    pub(crate) fn validate(&self) -> Result<Radix> {
        Radix::new(self.radix)
    }
}

impl Default for FormatSpec {
    /// Decimal, lowercase.
    fn default() -> Self {
        Self::radix(10)
    }
}
