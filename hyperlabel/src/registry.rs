// Copyright 2026 the Hyperlabel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use url::Url;

use crate::extract::extract_links;
use crate::layout::{LayoutBridge, TextLayout};
use crate::{StyleResolver, StyledTextBuffer};

/// A link in the current content, located in both text and glyph space.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkRecord {
    /// Where the link points.
    pub target: Url,
    /// Byte range of the link run in the buffer.
    pub text_range: Range<usize>,
    /// Glyphs generated for `text_range`.
    pub glyph_range: Range<usize>,
}

/// The links of the current buffer content, in text order.
#[derive(Clone, Debug, Default)]
pub struct LinkRegistry {
    records: Vec<LinkRecord>,
    generation: Option<u64>,
}

impl LinkRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the registry from `buffer`.
    ///
    /// Link runs are found in the buffer's source text, styled through
    /// `resolver` and committed into its display text, and the display text is
    /// handed to `bridge` to compute glyph ranges. The previous records are
    /// replaced in one step once the new list is complete.
    pub fn rebuild<L: TextLayout>(
        &mut self,
        buffer: &mut StyledTextBuffer,
        resolver: &mut StyleResolver,
        bridge: &mut LayoutBridge<L>,
    ) {
        buffer.reset_display();
        let candidates = extract_links(buffer.source());
        for candidate in &candidates {
            let Some(original) = buffer.source().attributes_at(candidate.range.start) else {
                continue;
            };
            let resolved = resolver.resolve(&candidate.target, original);
            if let Err(err) = buffer.commit(candidate.range.clone(), &resolved) {
                // Candidates are runs of the same text, so this cannot fail.
                log::error!("failed to commit link style for {:?}: {err}", candidate.range);
            }
        }
        bridge.set_text(buffer.display());

        let records = candidates
            .into_iter()
            .map(|candidate| LinkRecord {
                glyph_range: bridge.glyph_range(candidate.range.clone()),
                target: candidate.target,
                text_range: candidate.range,
            })
            .collect::<Vec<_>>();
        log::debug!(
            "rebuilt link registry: {} link(s) in {} bytes",
            records.len(),
            buffer.display().len()
        );
        self.records = records;
        self.generation = Some(buffer.generation());
    }

    /// Drop every record.
    pub fn clear(&mut self) {
        self.records.clear();
        self.generation = None;
    }

    /// The records, in text order.
    pub fn records(&self) -> &[LinkRecord] {
        &self.records
    }

    /// Returns `true` if there are no links.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns `true` if the records were built from `buffer`'s current content.
    pub fn is_current(&self, buffer: &StyledTextBuffer) -> bool {
        self.generation == Some(buffer.generation())
    }

    /// The link whose glyphs include `glyph_index`.
    ///
    /// If malformed input ever produced overlapping ranges, the first record
    /// in text order wins.
    pub fn link_at(&self, glyph_index: usize) -> Option<&LinkRecord> {
        self.records
            .iter()
            .find(|record| record.glyph_range.contains(&glyph_index))
    }
}
