// Copyright 2026 the Hyperlabel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Utility functions and types shared across tests.

mod host;

use std::cell::RefCell;
use std::rc::Rc;

use hyperlabel::layout::CellLayout;
use hyperlabel::{LinkCallback, LinkLabel, StyledText};
use peniko::kurbo::{Point, Size};
use url::Url;

pub(crate) use host::RecordingHost;

pub(crate) type TestLabel = LinkLabel<CellLayout, RecordingHost>;

pub(crate) const CELL_WIDTH: f64 = 10.0;
pub(crate) const LINE_HEIGHT: f64 = 20.0;

/// The target used by [`example_text`].
pub(crate) const EXAMPLE_URL: &str = "https://example.com/";

/// "Visit OurSite today" with "OurSite" linked to [`EXAMPLE_URL`].
pub(crate) fn example_text() -> StyledText {
    linked_text("Visit OurSite today", 6..13, EXAMPLE_URL)
}

pub(crate) fn linked_text(text: &str, range: core::ops::Range<usize>, target: &str) -> StyledText {
    let mut text = StyledText::plain(text);
    text.set_link(range, target).unwrap();
    text
}

pub(crate) fn example_url() -> Url {
    Url::parse(EXAMPLE_URL).unwrap()
}

/// An empty label laid out with 10 by 20 cells.
pub(crate) fn label() -> TestLabel {
    LinkLabel::new(
        CellLayout::new(CELL_WIDTH, LINE_HEIGHT),
        RecordingHost::default(),
    )
}

/// A label showing `text`, `width` wide, with no line limit.
pub(crate) fn label_with(text: StyledText, width: f64) -> TestLabel {
    let mut label = label();
    label.set_max_lines(0);
    label.set_styled_text(Some(text));
    label.set_size(Size::new(width, LINE_HEIGHT));
    label
}

/// The center of the cell at `column` on `line`, for left aligned text.
pub(crate) fn cell_center(column: usize, line: usize) -> Point {
    Point::new(
        (column as f64 + 0.5) * CELL_WIDTH,
        (line as f64 + 0.5) * LINE_HEIGHT,
    )
}

/// A link callback that records every target it receives.
pub(crate) fn recorder() -> (Box<LinkCallback>, Rc<RefCell<Vec<Url>>>) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    let callback: Box<LinkCallback> = Box::new(move |target: &Url| sink.borrow_mut().push(target.clone()));
    (callback, seen)
}
