// Copyright 2026 the Hyperlabel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use crate::{Error, ErrorKind, TextStorage};

/// A validated byte range into a UTF-8 text.
///
/// Holds these invariants for the text it was validated against:
///
/// - `start <= end`
/// - `start` and `end` are within the text bounds
/// - `start` and `end` lie on UTF-8 codepoint boundaries
///
/// A `TextRange` does not remember which text it was validated for. Reusing it
/// with a different text is a logic error (but never undefined behavior).
///
/// ## Example
///
/// ```
/// use styled_runs::TextRange;
///
/// let range = TextRange::new(&"Hello!", 0..5).unwrap();
/// assert_eq!(range.as_range(), 0..5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextRange {
    start: usize,
    end: usize,
}

impl TextRange {
    /// Returns a validated `TextRange` for the provided text.
    #[inline]
    pub fn new<T: TextStorage>(text: &T, range: Range<usize>) -> Result<Self, Error> {
        validate_range(text, &range)?;
        Ok(Self {
            start: range.start,
            end: range.end,
        })
    }

    /// The start byte offset.
    #[must_use]
    #[inline]
    pub const fn start(self) -> usize {
        self.start
    }

    /// The end byte offset (exclusive).
    #[must_use]
    #[inline]
    pub const fn end(self) -> usize {
        self.end
    }

    /// Returns `true` if the range covers no bytes.
    #[must_use]
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// Returns this range as a `Range<usize>`.
    #[must_use]
    #[inline]
    pub fn as_range(self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<TextRange> for Range<usize> {
    #[inline]
    fn from(value: TextRange) -> Self {
        value.as_range()
    }
}

pub(crate) fn validate_range<T: TextStorage>(text: &T, range: &Range<usize>) -> Result<(), Error> {
    let len = text.len();
    if range.start > range.end {
        return Err(Error::new(ErrorKind::InvalidRange, range, len));
    }
    if range.end > len {
        return Err(Error::new(ErrorKind::InvalidBounds, range, len));
    }
    if !text.is_char_boundary(range.start) || !text.is_char_boundary(range.end) {
        return Err(Error::new(ErrorKind::NotOnCharBoundary, range, len));
    }
    Ok(())
}
