// Copyright 2026 the Hyperlabel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use peniko::kurbo::{Point, Rect};
use unicode_width::UnicodeWidthChar;

use super::{LineFragment, TextContainer, TextLayout};
use crate::{Alignment, LineBreakMode, StyledText};

/// A layout engine for fixed-cell surfaces such as terminals.
///
/// Every `char` becomes one glyph, `unicode-width` cells wide, and every line
/// is the same height. Lines break greedily: at explicit newlines, and when a
/// glyph would overflow the container, at the last whitespace (word wrapping)
/// or right before the glyph (character wrapping). Truncating modes wrap like
/// word wrapping; glyphs past the last permitted line are simply not laid out.
/// Justified and natural alignment lay out as left aligned.
#[derive(Clone, Debug)]
pub struct CellLayout {
    cell_width: f64,
    line_height: f64,
    glyphs: Vec<Glyph>,
    lines: Vec<Line>,
}

#[derive(Clone, Debug)]
struct Glyph {
    /// Byte offset of the source character.
    text_index: usize,
    ch: char,
    advance: f64,
    alignment: Alignment,
    /// Position relative to the start of its line.
    x: f64,
}

#[derive(Clone, Debug)]
struct Line {
    glyph_range: Range<usize>,
    /// Horizontal offset from alignment.
    offset: f64,
    /// Advance excluding trailing whitespace.
    advance: f64,
    /// Width of the line fragment.
    width: f64,
    top: f64,
}

impl CellLayout {
    /// Creates an engine with the given cell width and line height.
    pub fn new(cell_width: f64, line_height: f64) -> Self {
        Self {
            cell_width,
            line_height,
            glyphs: Vec::new(),
            lines: Vec::new(),
        }
    }

    /// The width of one cell.
    pub fn cell_width(&self) -> f64 {
        self.cell_width
    }

    /// The height of every line.
    pub fn line_height(&self) -> f64 {
        self.line_height
    }

    /// Number of laid-out lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn break_lines(&self, container: &TextContainer) -> Vec<Range<usize>> {
        let wraps = container.width.is_finite() && container.line_break != LineBreakMode::Clipping;
        let by_word = container.line_break != LineBreakMode::CharWrapping;
        let mut ranges = Vec::new();
        let mut start = 0;
        while start < self.glyphs.len() {
            if container.max_lines != 0 && ranges.len() == container.max_lines {
                break;
            }
            let mut end = start;
            let mut x = 0.0;
            let mut last_break = None;
            while let Some(glyph) = self.glyphs.get(end) {
                if glyph.ch == '\n' {
                    end += 1;
                    break;
                }
                let overflows = x + glyph.advance > container.width;
                // Whitespace may hang past the edge; anything else wraps.
                if wraps && overflows && end > start && !glyph.ch.is_whitespace() {
                    if let Some(word_end) = last_break.filter(|_| by_word) {
                        end = word_end;
                    }
                    break;
                }
                x += glyph.advance;
                end += 1;
                if glyph.ch.is_whitespace() {
                    last_break = Some(end);
                }
            }
            ranges.push(start..end);
            start = end;
        }
        ranges
    }
}

impl TextLayout for CellLayout {
    fn set_text(&mut self, text: &StyledText) {
        self.lines.clear();
        self.glyphs.clear();
        let source = text.as_str();
        for (range, attrs) in text.runs() {
            let alignment = attrs
                .paragraph
                .map(|paragraph| paragraph.alignment)
                .unwrap_or_default();
            for (offset, ch) in source[range.clone()].char_indices() {
                let cells = if ch == '\n' { 0 } else { ch.width().unwrap_or(0) };
                self.glyphs.push(Glyph {
                    text_index: range.start + offset,
                    ch,
                    advance: cells as f64 * self.cell_width,
                    alignment,
                    x: 0.0,
                });
            }
        }
    }

    fn layout(&mut self, container: &TextContainer) {
        let ranges = self.break_lines(container);
        self.lines.clear();
        for (index, glyph_range) in ranges.into_iter().enumerate() {
            let mut x = 0.0;
            for glyph in &mut self.glyphs[glyph_range.clone()] {
                glyph.x = x;
                x += glyph.advance;
            }
            let trailing: f64 = self.glyphs[glyph_range.clone()]
                .iter()
                .rev()
                .take_while(|glyph| glyph.ch.is_whitespace())
                .map(|glyph| glyph.advance)
                .sum();
            self.lines.push(Line {
                glyph_range,
                offset: 0.0,
                advance: x - trailing,
                width: x,
                top: index as f64 * self.line_height,
            });
        }

        let alignment_width = if container.width.is_finite() {
            container.width
        } else {
            self.lines
                .iter()
                .map(|line| line.advance)
                .max_by(f64::total_cmp)
                .unwrap_or(0.0)
        };
        for line in &mut self.lines {
            let free_space = (alignment_width - line.advance).max(0.0);
            let alignment = self.glyphs[line.glyph_range.start].alignment;
            line.offset = match alignment {
                Alignment::Center => free_space * 0.5,
                Alignment::Right => free_space,
                Alignment::Left | Alignment::Justified | Alignment::Natural => 0.0,
            };
            line.width = alignment_width.max(line.offset + line.width);
        }
    }

    fn glyph_range(&self, text_range: Range<usize>) -> Range<usize> {
        let start = self
            .glyphs
            .partition_point(|glyph| glyph.text_index < text_range.start);
        let end = self
            .glyphs
            .partition_point(|glyph| glyph.text_index < text_range.end);
        start..end.max(start)
    }

    fn line_fragment_count(&self) -> usize {
        self.lines.len()
    }

    fn line_fragment(&self, index: usize) -> Option<LineFragment> {
        let line = self.lines.get(index)?;
        Some(LineFragment {
            glyph_range: line.glyph_range.clone(),
            rect: Rect::new(0.0, line.top, line.width, line.top + self.line_height),
        })
    }

    fn bounding_rect(&self, glyph_range: Range<usize>) -> Rect {
        let mut bounds: Option<Rect> = None;
        for line in &self.lines {
            let start = glyph_range.start.max(line.glyph_range.start);
            let end = glyph_range.end.min(line.glyph_range.end);
            if start >= end {
                continue;
            }
            let first = &self.glyphs[start];
            let last = &self.glyphs[end - 1];
            let rect = Rect::new(
                line.offset + first.x,
                line.top,
                line.offset + last.x + last.advance,
                line.top + self.line_height,
            );
            bounds = Some(bounds.map_or(rect, |bounds| bounds.union(rect)));
        }
        bounds.unwrap_or(Rect::ZERO)
    }

    fn glyph_index_at(&self, point: Point) -> Option<usize> {
        let line_index = self
            .lines
            .partition_point(|line| line.top + self.line_height <= point.y)
            .min(self.lines.len().checked_sub(1)?);
        let line = &self.lines[line_index];
        let mut candidates = line.glyph_range.clone();
        // A line's hard break is never the nearest glyph unless it is alone.
        if candidates.len() > 1 && self.glyphs[candidates.end - 1].ch == '\n' {
            candidates.end -= 1;
        }
        let last = candidates.end - 1;
        Some(
            candidates
                .find(|&ix| {
                    let glyph = &self.glyphs[ix];
                    point.x < line.offset + glyph.x + glyph.advance
                })
                .unwrap_or(last),
        )
    }

    fn used_rect(&self) -> Rect {
        self.lines
            .iter()
            .map(|line| {
                Rect::new(
                    line.offset,
                    line.top,
                    line.offset + line.advance,
                    line.top + self.line_height,
                )
            })
            .reduce(|a, b| a.union(b))
            .unwrap_or(Rect::ZERO)
    }
}
