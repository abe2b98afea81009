// Copyright 2026 the Hyperlabel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolution of the attributes committed for link runs.

use peniko::Color;
use url::Url;

use crate::{Attributes, Underline};

/// The default link color: the platform accent blue.
pub const DEFAULT_LINK_COLOR: Color = Color::from_rgba8(0x00, 0x7a, 0xff, 0xff);

/// Attributes filled into link runs that do not specify their own.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LinkStyle {
    /// Foreground color for links without one.
    pub color: Color,
    /// Underline for links without one.
    pub underline: Underline,
}

impl Default for LinkStyle {
    fn default() -> Self {
        Self {
            color: DEFAULT_LINK_COLOR,
            underline: Underline::Single,
        }
    }
}

/// Caller hook deciding the final attributes of a link run.
///
/// Receives the link target, the run's original attributes, and the proposed
/// attributes (original plus [`LinkStyle`] defaults). Whatever it returns is
/// committed as is, apart from the link annotation, which is always stripped.
pub type StyleOverride = dyn FnMut(&Url, &Attributes, &Attributes) -> Attributes;

/// The original attributes with link defaults filled into missing fields.
///
/// Fields the run already specifies are never replaced.
pub fn proposed_attributes(original: &Attributes, style: &LinkStyle) -> Attributes {
    let mut proposed = original.clone();
    proposed.color.get_or_insert(style.color);
    proposed.underline.get_or_insert(style.underline);
    proposed
}

/// Computes the attributes committed for each link run.
#[derive(Default)]
pub struct StyleResolver {
    link_style: LinkStyle,
    style_override: Option<Box<StyleOverride>>,
}

impl StyleResolver {
    /// Creates a resolver using `link_style` for defaults and no override.
    pub fn new(link_style: LinkStyle) -> Self {
        Self {
            link_style,
            style_override: None,
        }
    }

    /// The defaults filled into link runs.
    pub fn link_style(&self) -> &LinkStyle {
        &self.link_style
    }

    /// Replace the defaults filled into link runs.
    pub fn set_link_style(&mut self, link_style: LinkStyle) {
        self.link_style = link_style;
    }

    /// Install or remove the caller override.
    pub fn set_override(&mut self, style_override: Option<Box<StyleOverride>>) {
        self.style_override = style_override;
    }

    /// Returns `true` if a caller override is installed.
    pub fn has_override(&self) -> bool {
        self.style_override.is_some()
    }

    /// The final attributes for a link run pointing at `target`.
    pub fn resolve(&mut self, target: &Url, original: &Attributes) -> Attributes {
        let proposed = proposed_attributes(original, &self.link_style);
        let mut resolved = match self.style_override.as_mut() {
            Some(style_override) => style_override(target, original, &proposed),
            None => proposed,
        };
        // Link annotations never reach the renderer.
        resolved.link = None;
        resolved
    }
}

impl core::fmt::Debug for StyleResolver {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StyleResolver")
            .field("link_style", &self.link_style)
            .field("has_override", &self.has_override())
            .finish()
    }
}
