//! Zero-copy views over Standard ML source text.
//!
//! A [`Source`] wraps a complete input text and lends out [`Slice`]s of
//! it. Slices share storage with the parent text and are value-like:
//! copying one is copying a pointer, a length and an offset. Every token
//! produced by the lexer carries one of these slices, so the source
//! buffer must outlive any retained token.

use std::fmt;

#[cfg(feature = "deser")]
use serde::{Deserialize, Serialize};

/// An immutable view over a complete source text.
///
/// The lexer addresses the text byte by byte; token boundaries always
/// fall on ASCII characters, so sub-slicing at those boundaries is
/// always valid UTF-8.
#[derive(Debug, Clone, Copy)]
pub struct Source<'s> {
    text: &'s str,
}

impl<'s> Source<'s> {
    /// Creates a new source view over `text`.
    #[inline]
    pub fn new(text: &'s str) -> Self {
        Self { text }
    }

    /// The length of the source in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Checks if the source is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Gets the byte at offset `i`, if any.
    #[inline]
    pub fn get(&self, i: usize) -> Option<u8> {
        self.text.as_bytes().get(i).copied()
    }

    /// Lends the sub-view `[start, end)`.
    ///
    /// # Panics
    ///
    /// Panics if the range is out of bounds or does not fall on
    /// character boundaries.
    #[inline]
    pub fn slice(&self, start: usize, end: usize) -> Slice<'s> {
        Slice {
            text: &self.text[start..end],
            start,
        }
    }

    /// The full text of the source.
    #[inline]
    pub fn as_str(&self) -> &'s str {
        self.text
    }
}

impl fmt::Display for Source<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text)
    }
}

/// A sub-view of a [`Source`], independently addressable.
///
/// Carries both the text and the byte offset at which the text starts in
/// the parent source, which is all a token needs to report positions.
#[cfg_attr(feature = "deser", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slice<'s> {
    text: &'s str,
    start: usize,
}

impl<'s> Slice<'s> {
    /// The byte offset of the first character of this slice.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// The byte offset one past the last character of this slice.
    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }

    /// The length of this slice in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Checks if the slice is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The text of this slice.
    #[inline]
    pub fn as_str(&self) -> &'s str {
        self.text
    }
}

impl fmt::Display for Slice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text)
    }
}
