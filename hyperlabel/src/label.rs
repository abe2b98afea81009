// Copyright 2026 the Hyperlabel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::kurbo::{Point, RoundedRect, Size, Vec2};
use peniko::Color;
use smallvec::SmallVec;
use url::Url;

use crate::interaction::{EventStatus, InteractionController, LinkNotification, PointerEvent};
use crate::layout::{LayoutBridge, TextLayout};
use crate::{
    Alignment, Attributes, Error, Font, LabelHost, LineBreakMode, LinkRecord, LinkRegistry,
    LinkStyle, ParagraphStyle, Shadow, StyleOverride, StyleResolver, StyledText,
    StyledTextBuffer, DEFAULT_SHADOW_OFFSET,
};

/// Callback receiving the target of a tapped or long-pressed link.
pub type LinkCallback = dyn FnMut(&Url);

/// Label-wide text style properties.
///
/// These apply to the whole text: setting one rewrites that attribute in every
/// run of the current content.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelStyle {
    /// Font of the text.
    pub font: Font,
    /// Foreground color of the text.
    pub text_color: Color,
    /// Line alignment.
    pub alignment: Alignment,
    /// Line breaking behavior.
    pub line_break: LineBreakMode,
    /// Shadow color; no shadow is drawn without one.
    pub shadow_color: Option<Color>,
    /// Shadow offset; [`DEFAULT_SHADOW_OFFSET`] when unset.
    pub shadow_offset: Option<Vec2>,
    /// Maximum number of lines, or `0` for no limit.
    pub max_lines: usize,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            font: Font::default(),
            text_color: peniko::color::palette::css::BLACK,
            alignment: Alignment::Left,
            line_break: LineBreakMode::TruncatingTail,
            shadow_color: None,
            shadow_offset: None,
            max_lines: 1,
        }
    }
}

impl LabelStyle {
    /// The paragraph style implied by these properties.
    pub fn paragraph(&self) -> ParagraphStyle {
        ParagraphStyle {
            alignment: self.alignment,
            line_break: self.line_break,
        }
    }

    /// The shadow implied by these properties.
    pub fn shadow(&self) -> Option<Shadow> {
        self.shadow_color.map(|color| Shadow {
            color,
            offset: self.shadow_offset.unwrap_or(DEFAULT_SHADOW_OFFSET),
        })
    }

    /// The attributes given to plain text.
    pub fn attributes(&self) -> Attributes {
        Attributes {
            font: Some(self.font.clone()),
            color: Some(self.text_color),
            paragraph: Some(self.paragraph()),
            shadow: self.shadow(),
            underline: None,
            link: None,
        }
    }

    /// Adopt whatever `attrs` specifies.
    fn adopt(&mut self, attrs: &Attributes) {
        if let Some(font) = &attrs.font {
            self.font = font.clone();
        }
        if let Some(color) = attrs.color {
            self.text_color = color;
        }
        if let Some(paragraph) = attrs.paragraph {
            self.alignment = paragraph.alignment;
            self.line_break = paragraph.line_break;
        }
        if let Some(shadow) = attrs.shadow {
            self.shadow_color = Some(shadow.color);
            self.shadow_offset = Some(shadow.offset);
        }
    }
}

/// Appearance of the pressed-link highlight.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HighlightStyle {
    /// Fill color.
    pub color: Color,
    /// Corner radius of each rectangle.
    pub corner_radius: f64,
}

impl Default for HighlightStyle {
    fn default() -> Self {
        Self {
            color: Color::from_rgba8(0, 0, 0, 51),
            corner_radius: 2.0,
        }
    }
}

/// The pressed-link highlight to draw behind the text.
#[derive(Clone, Debug, PartialEq)]
pub struct Highlight {
    /// Fill color.
    pub color: Color,
    /// One rounded rectangle per line the link covers.
    pub rects: SmallVec<[RoundedRect; 2]>,
}

/// A single label configuration change.
#[derive(Clone, Debug, PartialEq)]
pub enum LabelProperty {
    /// Font of the whole text.
    Font(Font),
    /// Foreground color of the whole text.
    TextColor(Color),
    /// Alignment of every line.
    Alignment(Alignment),
    /// Line breaking of the whole text.
    LineBreakMode(LineBreakMode),
    /// Shadow color; `None` removes the shadow.
    ShadowColor(Option<Color>),
    /// Shadow offset; `None` uses [`DEFAULT_SHADOW_OFFSET`].
    ShadowOffset(Option<Vec2>),
    /// Maximum number of lines, or `0` for no limit.
    MaxLines(usize),
    /// Fill color of the pressed-link highlight.
    LinkHighlightColor(Color),
    /// Corner radius of the pressed-link highlight.
    LinkHighlightCornerRadius(f64),
    /// Defaults filled into link runs.
    LinkStyle(LinkStyle),
    /// Shrinking the font to fit the available width. Only `false` is supported.
    AdjustsFontSizeToFit(bool),
}

/// A rich text label whose links can be tapped and long-pressed.
///
/// The label owns its content, a [`TextLayout`] engine, and a [`LabelHost`].
/// Every content or style change rebuilds the link registry before returning,
/// so hit-testing always sees the current content.
pub struct LinkLabel<L: TextLayout, H: LabelHost> {
    buffer: StyledTextBuffer,
    bridge: LayoutBridge<L>,
    registry: LinkRegistry,
    resolver: StyleResolver,
    controller: InteractionController,
    style: LabelStyle,
    highlight: HighlightStyle,
    size: Size,
    on_link_tap: Option<Box<LinkCallback>>,
    on_link_long_press: Option<Box<LinkCallback>>,
    host: H,
}

impl<L: TextLayout, H: LabelHost> LinkLabel<L, H> {
    /// Creates an empty label laid out by `engine` inside `host`.
    pub fn new(engine: L, host: H) -> Self {
        let style = LabelStyle::default();
        let mut bridge = LayoutBridge::new(engine);
        bridge.set_max_lines(style.max_lines);
        bridge.set_line_break_mode(style.line_break);
        let mut label = Self {
            buffer: StyledTextBuffer::new(),
            bridge,
            registry: LinkRegistry::new(),
            resolver: StyleResolver::default(),
            controller: InteractionController::new(),
            style,
            highlight: HighlightStyle::default(),
            size: Size::ZERO,
            on_link_tap: None,
            on_link_long_press: None,
            host,
        };
        label
            .registry
            .rebuild(&mut label.buffer, &mut label.resolver, &mut label.bridge);
        label
    }

    /// Replace the content with plain text styled by the label's properties.
    ///
    /// `None` clears the label.
    pub fn set_text(&mut self, text: Option<&str>) {
        match text {
            Some(text) => {
                let styled = StyledText::new(text, self.style.attributes());
                self.buffer.replace(styled);
            }
            None => self.buffer.clear(),
        }
        self.content_changed();
    }

    /// Replace the content with pre-styled text.
    ///
    /// The label's style properties are updated from the first run. `None`
    /// clears the label.
    pub fn set_styled_text(&mut self, text: Option<StyledText>) {
        match text {
            Some(text) => {
                if let Some(attrs) = text.first_attributes() {
                    self.style.adopt(attrs);
                    self.bridge.set_line_break_mode(self.style.line_break);
                }
                self.buffer.replace(text);
            }
            None => self.buffer.clear(),
        }
        self.content_changed();
    }

    /// The plain text of the content.
    pub fn text(&self) -> &str {
        self.buffer.source().as_str()
    }

    /// The content as supplied, link annotations included.
    pub fn styled_text(&self) -> &StyledText {
        self.buffer.source()
    }

    /// The content as it should be drawn, with link styles committed.
    pub fn display_text(&self) -> &StyledText {
        self.buffer.display()
    }

    /// The current style properties.
    pub fn style(&self) -> &LabelStyle {
        &self.style
    }

    /// The current highlight appearance.
    pub fn highlight_style(&self) -> &HighlightStyle {
        &self.highlight
    }

    /// The defaults filled into link runs.
    pub fn link_style(&self) -> &LinkStyle {
        self.resolver.link_style()
    }

    /// Apply one configuration change.
    ///
    /// Unsupported values are rejected with
    /// [`ErrorKind::UnsupportedConfiguration`](crate::ErrorKind::UnsupportedConfiguration)
    /// and leave the label unchanged.
    pub fn set_property(&mut self, property: LabelProperty) -> Result<(), Error> {
        match property {
            LabelProperty::Font(font) => {
                self.style.font = font.clone();
                self.update_text(|attrs| attrs.font = Some(font.clone()));
            }
            LabelProperty::TextColor(color) => {
                self.style.text_color = color;
                self.update_text(|attrs| attrs.color = Some(color));
            }
            LabelProperty::Alignment(alignment) => {
                self.style.alignment = alignment;
                let paragraph = self.style.paragraph();
                self.update_text(|attrs| attrs.paragraph = Some(paragraph));
            }
            LabelProperty::LineBreakMode(line_break) => {
                self.style.line_break = line_break;
                self.bridge.set_line_break_mode(line_break);
                let paragraph = self.style.paragraph();
                self.update_text(|attrs| attrs.paragraph = Some(paragraph));
            }
            LabelProperty::ShadowColor(color) => {
                self.style.shadow_color = color;
                let shadow = self.style.shadow();
                self.update_text(|attrs| attrs.shadow = shadow);
            }
            LabelProperty::ShadowOffset(offset) => {
                self.style.shadow_offset = offset;
                let shadow = self.style.shadow();
                self.update_text(|attrs| attrs.shadow = shadow);
            }
            LabelProperty::MaxLines(max_lines) => {
                self.style.max_lines = max_lines;
                self.bridge.set_max_lines(max_lines);
                self.host.request_redraw();
                self.host.invalidate_content_size();
            }
            LabelProperty::LinkHighlightColor(color) => {
                self.highlight.color = color;
                self.host.request_redraw();
            }
            LabelProperty::LinkHighlightCornerRadius(radius) => {
                self.highlight.corner_radius = radius;
                self.host.request_redraw();
            }
            LabelProperty::LinkStyle(link_style) => {
                self.resolver.set_link_style(link_style);
                self.content_changed();
            }
            LabelProperty::AdjustsFontSizeToFit(false) => {}
            LabelProperty::AdjustsFontSizeToFit(true) => {
                log::error!("adjusting the font size to fit is not supported");
                return Err(Error::unsupported("adjusts_font_size_to_fit"));
            }
        }
        Ok(())
    }

    /// Set the font of the whole text.
    pub fn set_font(&mut self, font: Font) {
        self.apply(LabelProperty::Font(font));
    }

    /// Set the foreground color of the whole text.
    pub fn set_text_color(&mut self, color: Color) {
        self.apply(LabelProperty::TextColor(color));
    }

    /// Set the alignment of every line.
    pub fn set_alignment(&mut self, alignment: Alignment) {
        self.apply(LabelProperty::Alignment(alignment));
    }

    /// Set how lines are broken.
    pub fn set_line_break_mode(&mut self, line_break: LineBreakMode) {
        self.apply(LabelProperty::LineBreakMode(line_break));
    }

    /// Set or remove the shadow color.
    pub fn set_shadow_color(&mut self, color: Option<Color>) {
        self.apply(LabelProperty::ShadowColor(color));
    }

    /// Set or reset the shadow offset.
    pub fn set_shadow_offset(&mut self, offset: Option<Vec2>) {
        self.apply(LabelProperty::ShadowOffset(offset));
    }

    /// Set the maximum number of lines, `0` for no limit.
    pub fn set_max_lines(&mut self, max_lines: usize) {
        self.apply(LabelProperty::MaxLines(max_lines));
    }

    /// Set the fill color of the pressed-link highlight.
    pub fn set_link_highlight_color(&mut self, color: Color) {
        self.apply(LabelProperty::LinkHighlightColor(color));
    }

    /// Set the corner radius of the pressed-link highlight.
    pub fn set_link_highlight_corner_radius(&mut self, radius: f64) {
        self.apply(LabelProperty::LinkHighlightCornerRadius(radius));
    }

    /// Set the defaults filled into link runs.
    pub fn set_link_style(&mut self, link_style: LinkStyle) {
        self.apply(LabelProperty::LinkStyle(link_style));
    }

    /// Request font shrinking to fit the width. Only `false` is supported.
    pub fn set_adjusts_font_size_to_fit(&mut self, enabled: bool) -> Result<(), Error> {
        self.set_property(LabelProperty::AdjustsFontSizeToFit(enabled))
    }

    /// Set or remove the callback for tapped links.
    ///
    /// Without one, tapped links are opened through [`LabelHost::open_target`].
    pub fn set_link_tap_handler(&mut self, handler: Option<Box<LinkCallback>>) {
        self.on_link_tap = handler;
    }

    /// Set or remove the callback for long-pressed links.
    pub fn set_link_long_press_handler(&mut self, handler: Option<Box<LinkCallback>>) {
        self.on_link_long_press = handler;
    }

    /// Set or remove the hook deciding the final attributes of link runs.
    pub fn set_style_override(&mut self, style_override: Option<Box<StyleOverride>>) {
        self.resolver.set_override(style_override);
        self.content_changed();
    }

    /// The label's size in its host.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Update the label's size in its host.
    pub fn set_size(&mut self, size: Size) {
        if self.size == size {
            return;
        }
        let width_changed = self.size.width != size.width;
        self.size = size;
        self.host.request_redraw();
        if width_changed {
            self.host.invalidate_content_size();
        }
    }

    /// The size of the laid-out text at the label's current width.
    pub fn content_size(&mut self) -> Size {
        let width = self.layout_width();
        self.bridge.size_for_width(width)
    }

    /// The size of the laid-out text if the label were `proposal` wide.
    pub fn size_that_fits(&mut self, proposal: Size) -> Size {
        self.bridge.size_for_width(available_width(proposal.width))
    }

    /// The links of the current content, in text order.
    pub fn links(&self) -> &[LinkRecord] {
        self.registry.records()
    }

    /// The link under `point`, in label coordinates.
    pub fn link_at_point(&mut self, point: Point) -> Option<&LinkRecord> {
        let width = self.layout_width();
        self.bridge.pin_width(width);
        let glyph_index = self.bridge.glyph_index(point)?;
        self.registry.link_at(glyph_index)
    }

    /// Feed a pointer or gesture event to the label.
    ///
    /// Returns [`EventStatus::Ignored`] when the event did not involve a link,
    /// so the host can pass it on.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> EventStatus {
        debug_assert!(
            self.registry.is_current(&self.buffer),
            "link registry is stale"
        );
        let width = self.layout_width();
        self.bridge.pin_width(width);
        let response = self
            .controller
            .handle(event, &self.registry, &mut self.bridge);
        match response.notification {
            Some(LinkNotification::Tapped(target)) => match self.on_link_tap.as_mut() {
                Some(on_link_tap) => on_link_tap(&target),
                None => self.host.open_target(&target),
            },
            Some(LinkNotification::LongPressed(target)) => {
                if let Some(on_link_long_press) = self.on_link_long_press.as_mut() {
                    on_link_long_press(&target);
                }
            }
            None => {}
        }
        if response.highlight_changed {
            self.host.request_redraw();
        }
        response.status
    }

    /// The highlight for the pressed link, if one is pressed.
    pub fn highlight(&mut self) -> Option<Highlight> {
        let width = self.layout_width();
        self.bridge.pin_width(width);
        let rects = self.controller.highlight_rects(&mut self.bridge);
        if rects.is_empty() {
            return None;
        }
        let radius = self.highlight.corner_radius;
        Some(Highlight {
            color: self.highlight.color,
            rects: rects
                .into_iter()
                .map(|rect| rect.to_rounded_rect(radius))
                .collect(),
        })
    }

    /// The layout engine.
    pub fn engine(&self) -> &L {
        self.bridge.engine()
    }

    /// The host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The host, mutably.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    fn apply(&mut self, property: LabelProperty) {
        if let Err(err) = self.set_property(property) {
            log::error!("{err}");
        }
    }

    fn update_text(&mut self, f: impl FnMut(&mut Attributes)) {
        self.buffer.update_all(f);
        self.content_changed();
    }

    fn content_changed(&mut self) {
        self.registry
            .rebuild(&mut self.buffer, &mut self.resolver, &mut self.bridge);
        if self.controller.reset() {
            log::trace!("content changed under a pressed link");
        }
        self.host.request_redraw();
        self.host.invalidate_content_size();
    }

    fn layout_width(&self) -> f64 {
        available_width(self.size.width)
    }
}

impl<L, H> core::fmt::Debug for LinkLabel<L, H>
where
    L: TextLayout + core::fmt::Debug,
    H: LabelHost + core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LinkLabel")
            .field("buffer", &self.buffer)
            .field("bridge", &self.bridge)
            .field("registry", &self.registry)
            .field("resolver", &self.resolver)
            .field("controller", &self.controller)
            .field("style", &self.style)
            .field("highlight", &self.highlight)
            .field("size", &self.size)
            .field("has_link_tap_handler", &self.on_link_tap.is_some())
            .field(
                "has_link_long_press_handler",
                &self.on_link_long_press.is_some(),
            )
            .field("host", &self.host)
            .finish()
    }
}

/// Non-positive widths mean the host has not sized the label yet.
fn available_width(width: f64) -> f64 {
    if width > 0.0 {
        width
    } else {
        f64::INFINITY
    }
}
