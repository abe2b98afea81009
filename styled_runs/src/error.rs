// Copyright 2026 the Hyperlabel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

/// Error type for run buffer operations.
///
/// Carries a non-exhaustive [`ErrorKind`] plus the offending byte range and
/// the length of the text it was checked against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    start: usize,
    end: usize,
    len: usize,
}

#[expect(
    clippy::len_without_is_empty,
    reason = "`Error::len` reports source text length context; an `is_empty` method would be misleading and unused."
)]
impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The start byte index of the offending range.
    pub fn start(&self) -> usize {
        self.start
    }

    /// The end byte index (exclusive) of the offending range.
    pub fn end(&self) -> usize {
        self.end
    }

    /// The offending range.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The length in bytes of the text at the time of the error.
    pub fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn new(kind: ErrorKind, range: &Range<usize>, len: usize) -> Self {
        Self {
            kind,
            start: range.start,
            end: range.end,
            len,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let (start, end, len) = (self.start, self.end, self.len);
        match self.kind {
            ErrorKind::InvalidRange => write!(f, "invalid range {start}..{end}: start > end"),
            ErrorKind::InvalidBounds => {
                write!(f, "range {start}..{end} out of bounds for len {len}")
            }
            ErrorKind::NotOnCharBoundary => {
                write!(f, "range {start}..{end} not on UTF-8 boundary")
            }
            ErrorKind::NotContiguous => {
                write!(f, "run {start}..{end} leaves a gap or overlaps its neighbor")
            }
            ErrorKind::EmptyRun => write!(f, "run {start}..{end} is empty"),
        }
    }
}

impl core::error::Error for Error {}

/// The non-exhaustive category of an [`Error`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The provided range had `start > end`.
    InvalidRange,

    /// Provided range indices were out of bounds relative to the text length.
    InvalidBounds,

    /// Either `start` or `end` was not aligned to a UTF-8 character boundary.
    NotOnCharBoundary,

    /// A run list did not tile the text: a run started somewhere other than
    /// where its predecessor ended, or the last run did not reach the end.
    NotContiguous,

    /// A run list contained a zero-length run.
    EmptyRun,
}
