// Copyright 2026 the Hyperlabel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use url::Url;

/// The view system a label is embedded in.
pub trait LabelHost {
    /// The label's appearance changed and it should be drawn again.
    fn request_redraw(&mut self) {}

    /// The label's content size changed and its container should lay out again.
    fn invalidate_content_size(&mut self) {}

    /// Open `target` with the platform's default handler.
    ///
    /// Called for taps on links when no tap callback is registered.
    fn open_target(&mut self, target: &Url);
}

/// A host that opens links with the system's default browser.
///
/// Redraw and content size requests are dropped; embed the label in a real
/// host to receive them.
#[cfg(feature = "open")]
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemHost;

#[cfg(feature = "open")]
impl LabelHost for SystemHost {
    fn open_target(&mut self, target: &Url) {
        if let Err(err) = webbrowser::open(target.as_str()) {
            log::warn!("failed to open {target}: {err}");
        }
    }
}
