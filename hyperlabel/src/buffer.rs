// Copyright 2026 the Hyperlabel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use crate::{Attributes, StyledText};

/// The label's styled text content.
///
/// Two forms are kept side by side:
///
/// - the *source*, which is exactly what the caller supplied, link annotations
///   included, with label-wide style properties applied on top;
/// - the *display* text, which is the source with resolved link styles
///   committed into the link runs and the link annotations stripped. This is
///   what gets laid out and drawn.
///
/// The display text is regenerated from the source on every rebuild, which is
/// what keeps rebuilding idempotent.
#[derive(Clone, Debug, Default)]
pub struct StyledTextBuffer {
    source: StyledText,
    display: StyledText,
    generation: u64,
}

impl StyledTextBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// The content as supplied by the caller.
    pub fn source(&self) -> &StyledText {
        &self.source
    }

    /// The content as committed for layout and drawing.
    pub fn display(&self) -> &StyledText {
        &self.display
    }

    /// A counter bumped on every content or attribute change.
    ///
    /// Anything derived from the buffer (glyph ranges, link records) is only
    /// valid for the generation it was computed from.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Replace the whole content.
    pub fn replace(&mut self, text: StyledText) {
        self.display = text.clone();
        self.source = text;
        self.generation += 1;
    }

    /// Remove all content.
    pub fn clear(&mut self) {
        self.replace(StyledText::empty());
    }

    /// Apply `f` to the attributes of every source run.
    pub fn update_all(&mut self, f: impl FnMut(&mut Attributes)) {
        self.source.update_all(f);
        self.generation += 1;
    }

    /// Start a new display text from the current source.
    pub(crate) fn reset_display(&mut self) {
        self.display = self.source.clone();
    }

    /// Commit resolved attributes for one link run into the display text.
    pub(crate) fn commit(
        &mut self,
        range: Range<usize>,
        attrs: &Attributes,
    ) -> Result<(), styled_runs::Error> {
        self.display.set_attributes(range, attrs)
    }
}
