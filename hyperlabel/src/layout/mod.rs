// Copyright 2026 the Hyperlabel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The boundary between the label and a text layout engine.
//!
//! Shaping and line breaking are not done here. Anything that implements
//! [`TextLayout`] can back a label; [`LayoutBridge`] owns the engine and
//! sequences the queries the label needs, and [`CellLayout`] is a small
//! fixed-cell engine for grid surfaces and tests.

mod bridge;
mod cell;

use core::ops::Range;

use peniko::kurbo::{Point, Rect};

use crate::{LineBreakMode, StyledText};

pub use bridge::LayoutBridge;
pub use cell::CellLayout;

/// The region text is laid out into.
///
/// Only the width is constrained; height grows with the text.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TextContainer {
    /// Available width. `f64::INFINITY` means lines never wrap.
    pub width: f64,
    /// Maximum number of lines, or `0` for no limit.
    pub max_lines: usize,
    /// How lines that do not fit are broken.
    pub line_break: LineBreakMode,
}

impl Default for TextContainer {
    fn default() -> Self {
        Self {
            width: f64::INFINITY,
            max_lines: 0,
            line_break: LineBreakMode::WordWrapping,
        }
    }
}

/// One visual line of laid-out text.
#[derive(Clone, Debug, PartialEq)]
pub struct LineFragment {
    /// The glyphs on this line.
    pub glyph_range: Range<usize>,
    /// The line's rectangle, spanning the container width and the line height.
    pub rect: Rect,
}

/// The operations a text layout engine provides to a label.
///
/// Glyph indices are the engine's own. Text ranges are UTF-8 byte ranges into
/// the text last passed to [`set_text`](Self::set_text).
pub trait TextLayout {
    /// Replace the text being laid out, discarding any previous layout.
    fn set_text(&mut self, text: &StyledText);

    /// Lay out the current text into `container`.
    fn layout(&mut self, container: &TextContainer);

    /// The glyphs generated for the characters in `text_range`.
    ///
    /// Does not depend on the container, so it is valid before layout.
    fn glyph_range(&self, text_range: Range<usize>) -> Range<usize>;

    /// Number of line fragments in the current layout.
    fn line_fragment_count(&self) -> usize;

    /// The line fragment at `index`.
    fn line_fragment(&self, index: usize) -> Option<LineFragment>;

    /// The bounding rectangle of the laid-out glyphs in `glyph_range`.
    fn bounding_rect(&self, glyph_range: Range<usize>) -> Rect;

    /// The laid-out glyph nearest to `point`, if any glyph was laid out.
    fn glyph_index_at(&self, point: Point) -> Option<usize>;

    /// The bounding rectangle of all laid-out glyphs.
    fn used_rect(&self) -> Rect;
}
