// Copyright 2026 the Hyperlabel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;
use std::sync::Arc;

use styled_runs::{RunBuffer, TextRange};

use crate::{Attributes, LinkValue};

/// A text partitioned into runs of [`Attributes`].
///
/// This is the pre-styled form of label content. Cloning is cheap for the text
/// itself, which is shared.
///
/// ```
/// use hyperlabel::{Attributes, StyledText};
///
/// let mut text = StyledText::new("Visit OurSite today", Attributes::default());
/// text.set_link(6..13, "https://example.com").unwrap();
/// assert_eq!(text.runs().count(), 3);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct StyledText {
    runs: RunBuffer<Arc<str>, Attributes>,
}

impl StyledText {
    /// Creates a styled text where every character has `attrs`.
    pub fn new(text: impl Into<Arc<str>>, attrs: Attributes) -> Self {
        Self {
            runs: RunBuffer::new(text.into(), attrs),
        }
    }

    /// Creates a styled text with no attributes at all.
    pub fn plain(text: impl Into<Arc<str>>) -> Self {
        Self::new(text, Attributes::default())
    }

    /// Creates a styled text from an explicit list of runs.
    ///
    /// The runs must cover the text exactly, in order, without gaps.
    pub fn from_runs(
        text: impl Into<Arc<str>>,
        runs: impl IntoIterator<Item = (Range<usize>, Attributes)>,
    ) -> Result<Self, styled_runs::Error> {
        Ok(Self {
            runs: RunBuffer::from_runs(text.into(), runs)?,
        })
    }

    /// The empty text.
    pub fn empty() -> Self {
        Self::plain("")
    }

    /// The underlying text.
    pub fn as_str(&self) -> &str {
        self.runs.as_str()
    }

    /// Length of the text in bytes.
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    /// Returns `true` if there is no text.
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Iterate over the runs in text order.
    pub fn runs(&self) -> impl ExactSizeIterator<Item = (Range<usize>, &Attributes)> + Clone {
        self.runs.runs()
    }

    /// The attributes of the run containing the byte at `index`.
    pub fn attributes_at(&self, index: usize) -> Option<&Attributes> {
        self.runs.run_at(index).map(|(_, attrs)| attrs)
    }

    /// The attributes of the first run.
    pub fn first_attributes(&self) -> Option<&Attributes> {
        self.runs.first()
    }

    /// Modify the attributes covering `range`, splitting runs at its ends.
    pub fn update(
        &mut self,
        range: Range<usize>,
        f: impl FnMut(&mut Attributes),
    ) -> Result<(), styled_runs::Error> {
        let range = TextRange::new(self.runs.text(), range)?;
        self.runs.update(range, f)
    }

    /// Modify the attributes of every run.
    pub fn update_all(&mut self, f: impl FnMut(&mut Attributes)) {
        self.runs.update_all(f);
    }

    /// Replace the attributes covering `range` with `attrs`.
    pub fn set_attributes(
        &mut self,
        range: Range<usize>,
        attrs: &Attributes,
    ) -> Result<(), styled_runs::Error> {
        self.update(range, |run| run.clone_from(attrs))
    }

    /// Attach a link annotation to `range`.
    pub fn set_link(
        &mut self,
        range: Range<usize>,
        link: impl Into<LinkValue>,
    ) -> Result<(), styled_runs::Error> {
        let link = link.into();
        self.update(range, |attrs| attrs.link = Some(link.clone()))
    }
}

impl Default for StyledText {
    fn default() -> Self {
        Self::empty()
    }
}
