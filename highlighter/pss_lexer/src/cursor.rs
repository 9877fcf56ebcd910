//! Byte-offset cursor over the source text.
//!
//! The cursor only tracks position; pattern matching happens on the
//! unconsumed tail returned by [`rest()`](Cursor::rest). Rule matchers
//! report how many bytes they consumed and the engine advances by that
//! amount, so the cursor never moves backwards and always lands on a
//! character boundary.

/// Position tracker over a source string.
///
/// Offsets are `u32` to keep tokens compact; [`Cursor::new`] rejects
/// sources that would overflow them.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'src> {
    source: &'src str,
    pos: u32,
}

impl<'src> Cursor<'src> {
    /// Create a cursor at position 0.
    ///
    /// # Panics
    ///
    /// Panics if `source` is longer than `u32::MAX` bytes.
    pub fn new(source: &'src str) -> Self {
        assert!(
            u32::try_from(source.len()).is_ok(),
            "source length {} exceeds supported maximum ({} bytes)",
            source.len(),
            u32::MAX
        );
        Cursor { source, pos: 0 }
    }

    /// Current byte offset.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Total source length in bytes.
    #[inline]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "length was validated against u32::MAX at construction"
    )]
    pub fn source_len(&self) -> u32 {
        self.source.len() as u32
    }

    /// Whether the whole source has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len()
    }

    /// The unconsumed tail of the source.
    #[inline]
    pub fn rest(&self) -> &'src str {
        &self.source[self.pos as usize..]
    }

    /// Advance by `n` bytes.
    ///
    /// The engine only passes lengths reported by rule matchers, which are
    /// in bounds and on character boundaries by construction.
    #[inline]
    pub fn advance(&mut self, n: u32) {
        debug_assert!(
            self.pos + n <= self.source_len(),
            "advance past end of source"
        );
        debug_assert!(
            self.source.is_char_boundary((self.pos + n) as usize),
            "advance to non-boundary offset"
        );
        self.pos += n;
    }

    /// Advance past exactly one Unicode scalar value, returning its width
    /// in bytes. Used by the fallback rule, which consumes unmatched input
    /// one character at a time.
    #[inline]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "len_utf8 is at most 4"
    )]
    pub fn advance_char(&mut self) -> u32 {
        let width = match self.rest().chars().next() {
            Some(c) => c.len_utf8() as u32,
            None => 0,
        };
        self.pos += width;
        width
    }

    /// Slice of the source between two byte offsets.
    #[inline]
    pub fn slice(&self, start: u32, end: u32) -> &'src str {
        &self.source[start as usize..end as usize]
    }
}
