// Copyright 2026 the Hyperlabel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use hyperlabel::LabelHost;
use url::Url;

/// A host that counts requests and records opened targets instead of opening them.
#[derive(Debug, Default)]
pub(crate) struct RecordingHost {
    pub(crate) redraws: usize,
    pub(crate) content_size_invalidations: usize,
    pub(crate) opened: Vec<Url>,
}

impl RecordingHost {
    /// Forget everything recorded so far.
    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}

impl LabelHost for RecordingHost {
    fn request_redraw(&mut self) {
        self.redraws += 1;
    }

    fn invalidate_content_size(&mut self) {
        self.content_size_invalidations += 1;
    }

    fn open_target(&mut self, target: &Url) {
        self.opened.push(target.clone());
    }
}
