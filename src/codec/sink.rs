//! Bounded character output.
//!
//! Digit generation only ever produces ASCII. The sink layer widens each
//! character into the caller's code unit and keeps every write inside the
//! caller's buffer, so narrow and wide output share a single code path.

use tracing::trace;

/// A unit of output text.
pub trait CodeUnit: Copy {
    /// Terminator written after the content.
    const NUL: Self;

    /// Widens an ASCII character into this unit.
    fn from_ascii(ch: u8) -> Self;
}

impl CodeUnit for u8 {
    const NUL: Self = 0;

    #[inline]
    fn from_ascii(ch: u8) -> Self {
        ch
    }
}

impl CodeUnit for u16 {
    const NUL: Self = 0;

    #[inline]
    fn from_ascii(ch: u8) -> Self {
        u16::from(ch)
    }
}

impl CodeUnit for u32 {
    const NUL: Self = 0;

    #[inline]
    fn from_ascii(ch: u8) -> Self {
        u32::from(ch)
    }
}

/// Platform wide character unit, matching the width of `wchar_t`.
#[cfg(windows)]
pub type WideChar = u16;

/// Platform wide character unit, matching the width of `wchar_t`.
#[cfg(not(windows))]
pub type WideChar = u32;

/// Destination for emitted characters.
pub trait CharSink {
    /// Content characters that can still be pushed.
    fn remaining(&self) -> usize;

    /// Appends one ASCII character. Callers check `remaining` first.
    fn push(&mut self, ch: u8);

    /// Writes the terminator after the content, if there is room for one.
    fn terminate(&mut self);
}

/// A [`CharSink`] over a caller-owned slice.
///
/// The last slot of the slice is reserved for the terminator. An empty
/// slice accepts no content and receives no terminator.
pub struct BoundedSink<'a, U: CodeUnit> {
    buf: &'a mut [U],
    pos: usize,
}

impl<'a, U: CodeUnit> BoundedSink<'a, U> {
    pub fn new(buf: &'a mut [U]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Content characters written so far.
    pub fn written(&self) -> usize {
        self.pos
    }
}

impl<U: CodeUnit> CharSink for BoundedSink<'_, U> {
    fn remaining(&self) -> usize {
        self.buf.len().saturating_sub(1) - self.pos
    }

    fn push(&mut self, ch: u8) {
        if self.remaining() > 0 {
            self.buf[self.pos] = U::from_ascii(ch);
            self.pos += 1;
        }
    }

    fn terminate(&mut self) {
        if let Some(slot) = self.buf.get_mut(self.pos) {
            *slot = U::NUL;
        }
    }
}

/// Emits `chars` into `sink` up to its capacity, then terminates it.
///
/// Returns `full_len`, the untruncated length, whether or not everything
/// fit.
pub(crate) fn emit<S, I>(sink: &mut S, chars: I, full_len: usize) -> usize
where
    S: CharSink,
    I: IntoIterator<Item = u8>,
{
    for ch in chars {
        if sink.remaining() == 0 {
            trace!(required = full_len, "output truncated");
            break;
        }

        sink.push(ch);
    }

    sink.terminate();

    full_len
}
