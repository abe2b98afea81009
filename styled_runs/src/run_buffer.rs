// Copyright 2026 the Hyperlabel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::fmt::Debug;
use core::ops::Range;

use crate::text_range::validate_range;
use crate::{Error, ErrorKind, TextRange, TextStorage};

/// A text partitioned into contiguous runs, each carrying one attribute value.
///
/// The runs always tile the text exactly: they are ordered, non-empty, start at
/// `0`, end at `len()`, and each run starts where the previous one ended. An
/// empty text has no runs.
#[derive(Clone, Debug, PartialEq)]
pub struct RunBuffer<T: Debug + TextStorage, A: Debug> {
    text: T,
    runs: Vec<(Range<usize>, A)>,
}

impl<T: Debug + TextStorage, A: Debug> RunBuffer<T, A> {
    /// Create a buffer with a single run covering all of `text`.
    pub fn new(text: T, attrs: A) -> Self {
        let len = text.len();
        let runs = if len == 0 {
            Vec::new()
        } else {
            alloc::vec![(0..len, attrs)]
        };
        Self { text, runs }
    }

    /// Create a buffer from an explicit run list.
    ///
    /// The list must tile `text` exactly; see the type level documentation.
    pub fn from_runs(
        text: T,
        runs: impl IntoIterator<Item = (Range<usize>, A)>,
    ) -> Result<Self, Error> {
        let len = text.len();
        let mut expected_start = 0;
        let mut collected = Vec::new();
        for (range, attrs) in runs {
            validate_range(&text, &range)?;
            if range.is_empty() {
                return Err(Error::new(ErrorKind::EmptyRun, &range, len));
            }
            if range.start != expected_start {
                return Err(Error::new(ErrorKind::NotContiguous, &range, len));
            }
            expected_start = range.end;
            collected.push((range, attrs));
        }
        if expected_start != len {
            return Err(Error::new(
                ErrorKind::NotContiguous,
                &(expected_start..len),
                len,
            ));
        }
        Ok(Self {
            text,
            runs: collected,
        })
    }

    /// Borrow the underlying text storage.
    pub fn text(&self) -> &T {
        &self.text
    }

    /// Borrow the underlying text.
    pub fn as_str(&self) -> &str {
        self.text.as_ref()
    }

    /// Returns the length of the underlying text, in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` if the underlying text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns the number of runs.
    pub fn runs_len(&self) -> usize {
        self.runs.len()
    }

    /// Iterate over the runs in text order.
    pub fn runs(&self) -> impl ExactSizeIterator<Item = (Range<usize>, &A)> + Clone {
        self.runs.iter().map(|(range, attrs)| (range.clone(), attrs))
    }

    /// The attributes of the first run, if the text is not empty.
    pub fn first(&self) -> Option<&A> {
        self.runs.first().map(|(_, attrs)| attrs)
    }

    /// The run containing the byte at `index`.
    pub fn run_at(&self, index: usize) -> Option<(Range<usize>, &A)> {
        let ix = self.run_index(index)?;
        let (range, attrs) = &self.runs[ix];
        Some((range.clone(), attrs))
    }

    /// Apply `f` to the attributes of every run.
    pub fn update_all(&mut self, mut f: impl FnMut(&mut A)) {
        for (_, attrs) in &mut self.runs {
            f(attrs);
        }
    }

    fn run_index(&self, index: usize) -> Option<usize> {
        if index >= self.len() {
            return None;
        }
        // Runs tile the text, so the last run starting at or before `index` contains it.
        let ix = self.runs.partition_point(|(range, _)| range.start <= index);
        ix.checked_sub(1)
    }
}

impl<T: Debug + TextStorage, A: Debug + Clone> RunBuffer<T, A> {
    /// Apply `f` to the attributes covering `range`.
    ///
    /// Runs that straddle either end of `range` are split first, so `f` only
    /// ever sees runs lying entirely inside `range`. Runs are never merged, even
    /// when `f` makes neighbors equal.
    pub fn update(&mut self, range: TextRange, mut f: impl FnMut(&mut A)) -> Result<(), Error> {
        let range = range.as_range();
        validate_range(&self.text, &range)?;
        if range.is_empty() {
            return Ok(());
        }
        self.split_at(range.start);
        self.split_at(range.end);
        for (run, attrs) in &mut self.runs {
            if run.start >= range.start && run.end <= range.end {
                f(attrs);
            }
        }
        Ok(())
    }

    /// Ensure a run boundary exists at `index`.
    fn split_at(&mut self, index: usize) {
        let Some(ix) = self.run_index(index) else {
            return;
        };
        let (range, attrs) = &mut self.runs[ix];
        if range.start == index {
            return;
        }
        let tail = (index..range.end, attrs.clone());
        range.end = index;
        self.runs.insert(ix + 1, tail);
    }
}
