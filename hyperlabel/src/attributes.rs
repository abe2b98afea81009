// Copyright 2026 the Hyperlabel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The closed set of attributes a run of label text can carry.

use std::sync::Arc;

use peniko::kurbo::Vec2;
use peniko::Color;
use url::Url;

/// Font family used when nothing more specific is requested.
pub const SYSTEM_FONT_FAMILY: &str = "system-ui";

/// Point size of the default label font.
pub const DEFAULT_FONT_SIZE: f32 = 17.0;

/// A font request: a family name and a point size.
#[derive(Clone, Debug, PartialEq)]
pub struct Font {
    /// The font family name.
    pub family: Arc<str>,
    /// The font size in points.
    pub size: f32,
}

impl Font {
    /// Creates a font request for the given family and size.
    pub fn new(family: impl Into<Arc<str>>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
        }
    }

    /// The system font at the given size.
    pub fn system(size: f32) -> Self {
        Self::new(SYSTEM_FONT_FAMILY, size)
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::system(DEFAULT_FONT_SIZE)
    }
}

/// Horizontal alignment of the lines of a paragraph.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Alignment {
    /// Align to the left edge.
    Left,
    /// Center each line.
    Center,
    /// Align to the right edge.
    Right,
    /// Stretch lines to fill the container width.
    Justified,
    /// The writing system's default alignment.
    #[default]
    Natural,
}

/// How lines that do not fit the container width are broken or cut.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum LineBreakMode {
    /// Wrap at word boundaries, falling back to characters for long words.
    #[default]
    WordWrapping,
    /// Wrap before the first character that does not fit.
    CharWrapping,
    /// Never wrap; text past the container edge is not drawn.
    Clipping,
    /// Cut text from the start of the last visible line.
    TruncatingHead,
    /// Cut text from the end of the last visible line.
    TruncatingTail,
    /// Cut text from the middle of the last visible line.
    TruncatingMiddle,
}

/// Paragraph-level attributes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ParagraphStyle {
    /// Line alignment.
    pub alignment: Alignment,
    /// Line breaking behavior.
    pub line_break: LineBreakMode,
}

/// Offset applied to a shadow when only its color was specified.
pub const DEFAULT_SHADOW_OFFSET: Vec2 = Vec2::new(0.0, -3.0);

/// A drop shadow drawn behind glyphs.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Shadow {
    /// The shadow color.
    pub color: Color,
    /// The shadow offset from the glyphs, in points.
    pub offset: Vec2,
}

/// Underline decoration style.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Underline {
    /// A single thin line.
    Single,
    /// Two thin lines.
    Double,
    /// A single thick line.
    Thick,
}

/// The raw value of a link annotation, as it was attached to a run.
///
/// Links may be stored either already parsed or as text; [`LinkValue::target`]
/// is the single point where the two forms are normalized.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LinkValue {
    /// A parsed target.
    Url(Url),
    /// A textual target, parsed on demand.
    Text(String),
}

impl LinkValue {
    /// The canonical target this annotation points at.
    ///
    /// Returns `None` for text that does not parse as an absolute URL. Such
    /// annotations are treated as plain text rather than as errors.
    pub fn target(&self) -> Option<Url> {
        match self {
            Self::Url(url) => Some(url.clone()),
            Self::Text(text) => Url::parse(text).ok(),
        }
    }
}

impl From<Url> for LinkValue {
    fn from(value: Url) -> Self {
        Self::Url(value)
    }
}

impl From<&str> for LinkValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for LinkValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// The attributes of one run of text.
///
/// Every field is optional: a missing value means "whatever the renderer
/// would do by default", which matters for link styling because defaults are
/// only ever filled into missing fields.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Attributes {
    /// The font.
    pub font: Option<Font>,
    /// The foreground color.
    pub color: Option<Color>,
    /// Alignment and line breaking.
    pub paragraph: Option<ParagraphStyle>,
    /// Drop shadow.
    pub shadow: Option<Shadow>,
    /// Underline decoration.
    pub underline: Option<Underline>,
    /// Link annotation.
    pub link: Option<LinkValue>,
}

impl Attributes {
    /// Returns these attributes with the font set.
    #[must_use]
    pub fn with_font(mut self, font: Font) -> Self {
        self.font = Some(font);
        self
    }

    /// Returns these attributes with the foreground color set.
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Returns these attributes with the paragraph style set.
    #[must_use]
    pub fn with_paragraph(mut self, paragraph: ParagraphStyle) -> Self {
        self.paragraph = Some(paragraph);
        self
    }

    /// Returns these attributes with the shadow set.
    #[must_use]
    pub fn with_shadow(mut self, shadow: Shadow) -> Self {
        self.shadow = Some(shadow);
        self
    }

    /// Returns these attributes with the underline set.
    #[must_use]
    pub fn with_underline(mut self, underline: Underline) -> Self {
        self.underline = Some(underline);
        self
    }

    /// Returns these attributes with a link annotation.
    #[must_use]
    pub fn with_link(mut self, link: impl Into<LinkValue>) -> Self {
        self.link = Some(link.into());
        self
    }
}
