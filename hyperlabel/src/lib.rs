// Copyright 2026 the Hyperlabel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hyperlabel is a rich text label engine with tappable links.
//!
//! A [`LinkLabel`] takes styled text in which some runs carry a link
//! annotation. It finds those runs, gives them a link style (which the caller
//! can override per link), lays the text out through a pluggable
//! [`TextLayout`](layout::TextLayout) engine, and maps pointer events back to
//! the link under them.
//!
//! The pieces are usable on their own:
//!
//! - [`extract_links`] lists the link runs of a [`StyledText`].
//! - [`StyleResolver`] computes the attributes committed for a link run.
//! - [`LayoutBridge`](layout::LayoutBridge) sequences width pinning, hit-testing
//!   and per-line bounding rectangles against the engine.
//! - [`LinkRegistry`] holds the current links in text and glyph space.
//! - [`InteractionController`] turns pointer events into link notifications.
//!
//! ## Example
//!
//! ```
//! use hyperlabel::layout::CellLayout;
//! use hyperlabel::peniko::kurbo::{Point, Size};
//! use hyperlabel::{EventStatus, LabelHost, LinkLabel, PointerEvent, StyledText};
//!
//! struct Host;
//!
//! impl LabelHost for Host {
//!     fn open_target(&mut self, target: &hyperlabel::url::Url) {
//!         println!("opening {target}");
//!     }
//! }
//!
//! let mut text = StyledText::plain("Visit OurSite today");
//! text.set_link(6..13, "https://example.com").unwrap();
//!
//! let mut label = LinkLabel::new(CellLayout::new(10.0, 20.0), Host);
//! label.set_styled_text(Some(text));
//! label.set_size(Size::new(400.0, 20.0));
//!
//! let over_link = Point::new(85.0, 10.0);
//! assert_eq!(label.handle_pointer(PointerEvent::Down(over_link)), EventStatus::Consumed);
//! assert!(label.highlight().is_some());
//! assert_eq!(label.handle_pointer(PointerEvent::Tap(over_link)), EventStatus::Consumed);
//! ```
//!
//! ## Features
//!
//! - `open` (enabled by default): Provides [`SystemHost`], which opens tapped
//!   links with the platform's default handler.

// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use peniko;
pub use url;

mod attributes;
mod buffer;
mod error;
mod extract;
mod host;
mod interaction;
mod label;
mod registry;
mod style;
mod text;

pub mod layout;

pub use attributes::{
    Alignment, Attributes, Font, LineBreakMode, LinkValue, ParagraphStyle, Shadow, Underline,
    DEFAULT_FONT_SIZE, DEFAULT_SHADOW_OFFSET, SYSTEM_FONT_FAMILY,
};
pub use buffer::StyledTextBuffer;
pub use error::{Error, ErrorKind};
pub use extract::{extract_links, LinkCandidate};
#[cfg(feature = "open")]
pub use host::SystemHost;
pub use host::LabelHost;
pub use interaction::{
    EventStatus, InteractionController, LinkNotification, PointerEvent, PressState, Response,
};
pub use label::{
    Highlight, HighlightStyle, LabelProperty, LabelStyle, LinkCallback, LinkLabel,
};
pub use registry::{LinkRecord, LinkRegistry};
pub use style::{
    proposed_attributes, LinkStyle, StyleOverride, StyleResolver, DEFAULT_LINK_COLOR,
};
pub use text::StyledText;
