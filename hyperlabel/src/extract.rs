// Copyright 2026 the Hyperlabel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scanning styled text for link annotations.

use core::ops::Range;

use url::Url;

use crate::StyledText;

/// A link run found in styled text, with its target already normalized.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkCandidate {
    /// The byte range of the annotated run.
    pub range: Range<usize>,
    /// The normalized target.
    pub target: Url,
}

/// Find every run carrying a usable link annotation, in text order.
///
/// Each annotated run yields its own candidate; adjacent runs pointing at the
/// same target are not merged. Runs whose annotation does not normalize to a
/// target are skipped.
pub fn extract_links(text: &StyledText) -> Vec<LinkCandidate> {
    text.runs()
        .filter_map(|(range, attrs)| {
            let link = attrs.link.as_ref()?;
            match link.target() {
                Some(target) => Some(LinkCandidate { range, target }),
                None => {
                    log::trace!("ignoring unparseable link annotation {link:?} at {range:?}");
                    None
                }
            }
        })
        .collect()
}
