//! Error types for the integer codec.

use thiserror::Error;

/// Parameter errors reported by the codec.
///
/// Both variants are detected before the output buffer is touched, so a
/// failed call never leaves partial output behind. Truncation is not an
/// error: it is reported through the returned length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Declared width is zero or larger than the carrier.
    #[error("invalid width: {0} bytes (expected 1..=16)")]
    InvalidWidth(usize),

    /// Radix outside `2..=36`.
    #[error("invalid radix: {0} (expected 2..=36)")]
    InvalidRadix(u32),
}

/// Result type for codec operations
pub type Result<T> = std::result::Result<T, CodecError>;
