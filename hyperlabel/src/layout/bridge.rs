// Copyright 2026 the Hyperlabel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use peniko::kurbo::{Point, Rect, Size};
use smallvec::SmallVec;

use super::{TextContainer, TextLayout};
use crate::{LineBreakMode, StyledText};

/// Owns a [`TextLayout`] engine and sequences the queries made against it.
///
/// Geometry queries (`bounding_rects`, `glyph_index`, `used_rect`) lay out
/// lazily for the width last passed to [`pin_width`](Self::pin_width).
#[derive(Debug)]
pub struct LayoutBridge<L: TextLayout> {
    engine: L,
    container: TextContainer,
    needs_layout: bool,
}

impl<L: TextLayout> LayoutBridge<L> {
    /// Wrap `engine` with an unconstrained container.
    pub fn new(engine: L) -> Self {
        Self {
            engine,
            container: TextContainer::default(),
            needs_layout: true,
        }
    }

    /// The wrapped engine.
    pub fn engine(&self) -> &L {
        &self.engine
    }

    /// The container used for the next layout.
    pub fn container(&self) -> &TextContainer {
        &self.container
    }

    /// Hand new content to the engine.
    pub fn set_text(&mut self, text: &StyledText) {
        self.engine.set_text(text);
        self.needs_layout = true;
    }

    /// Set the maximum line count; `0` means unlimited.
    pub fn set_max_lines(&mut self, max_lines: usize) {
        if self.container.max_lines != max_lines {
            self.container.max_lines = max_lines;
            self.needs_layout = true;
        }
    }

    /// Set the container's line break mode.
    pub fn set_line_break_mode(&mut self, line_break: LineBreakMode) {
        if self.container.line_break != line_break {
            self.container.line_break = line_break;
            self.needs_layout = true;
        }
    }

    /// Constrain layout to `width`, leave height unconstrained, and make sure
    /// layout for that width is complete.
    pub fn pin_width(&mut self, width: f64) {
        if self.container.width != width {
            self.container.width = width;
            self.needs_layout = true;
        }
        self.ensure_layout();
    }

    /// Run layout now if anything changed since the last run.
    pub fn ensure_layout(&mut self) {
        if self.needs_layout {
            self.engine.layout(&self.container);
            self.needs_layout = false;
        }
    }

    /// The glyphs generated for the characters in `text_range`.
    pub fn glyph_range(&self, text_range: Range<usize>) -> Range<usize> {
        self.engine.glyph_range(text_range)
    }

    /// The rectangles covering `glyph_range`, one per visual line.
    pub fn bounding_rects(&mut self, glyph_range: Range<usize>) -> SmallVec<[Rect; 2]> {
        let mut rects = SmallVec::new();
        self.bounding_rects_with(glyph_range, |rect| rects.push(rect));
        rects
    }

    /// Invokes `f` with the rectangle covering `glyph_range` on each visual
    /// line it touches, in line order.
    ///
    /// Each rectangle is confined to its own line, so a range that wraps never
    /// produces a box reaching across the lines in between.
    pub fn bounding_rects_with(&mut self, glyph_range: Range<usize>, mut f: impl FnMut(Rect)) {
        self.ensure_layout();
        if glyph_range.is_empty() {
            return;
        }
        for index in 0..self.engine.line_fragment_count() {
            let Some(fragment) = self.engine.line_fragment(index) else {
                continue;
            };
            let start = glyph_range.start.max(fragment.glyph_range.start);
            let end = glyph_range.end.min(fragment.glyph_range.end);
            if start >= end {
                continue;
            }
            let rect = self.engine.bounding_rect(start..end).intersect(fragment.rect);
            if rect.width() > 0.0 && rect.height() > 0.0 {
                f(rect);
            }
        }
    }

    /// The glyph under `point`.
    ///
    /// Points outside the laid-out text never resolve, even though the engine
    /// would report the nearest glyph for them.
    pub fn glyph_index(&mut self, point: Point) -> Option<usize> {
        self.ensure_layout();
        if !self.engine.used_rect().contains(point) {
            return None;
        }
        self.engine.glyph_index_at(point)
    }

    /// The bounding rectangle of all laid-out glyphs.
    pub fn used_rect(&mut self) -> Rect {
        self.ensure_layout();
        self.engine.used_rect()
    }

    /// The size of the laid-out glyph bounds at `width`.
    ///
    /// Alignment offsets do not count towards the size.
    pub fn size_for_width(&mut self, width: f64) -> Size {
        self.pin_width(width);
        self.engine.used_rect().size()
    }
}
