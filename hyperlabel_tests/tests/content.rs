// Copyright 2026 the Hyperlabel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for setting, replacing, and clearing label content.

use hyperlabel::{Alignment, Attributes, Font, LineBreakMode, ParagraphStyle, StyledText};
use peniko::color::palette::css;
use peniko::kurbo::Size;

use crate::util::{example_text, example_url, label, label_with, linked_text};

#[test]
fn content_empty_label_has_no_links() {
    let mut label = label();
    assert!(label.links().is_empty());
    assert!(label.display_text().is_empty());
    assert_eq!(label.content_size(), Size::ZERO);
}

#[test]
fn content_plain_text_has_no_links() {
    let mut label = label();
    label.set_text(Some("nothing to see here"));
    assert_eq!(label.text(), "nothing to see here");
    assert!(label.links().is_empty());
}

#[test]
fn content_example_link_is_registered() {
    let label = label_with(example_text(), 400.0);
    let links = label.links();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].target, example_url());
    assert_eq!(links[0].text_range, 6..13);
    assert_eq!(links[0].glyph_range, 6..13);
}

#[test]
fn content_links_are_in_text_order() {
    let mut text = linked_text("one two three", 0..3, "https://one.example/");
    text.set_link(8..13, "https://three.example/").unwrap();
    let label = label_with(text, 400.0);
    let targets = label
        .links()
        .iter()
        .map(|link| link.target.as_str())
        .collect::<Vec<_>>();
    assert_eq!(targets, ["https://one.example/", "https://three.example/"]);
}

#[test]
fn content_unparseable_links_are_skipped() {
    let mut text = linked_text("good bad", 0..4, "https://good.example/");
    text.set_link(5..8, "not a url").unwrap();
    let label = label_with(text, 400.0);
    assert_eq!(label.links().len(), 1);
    assert_eq!(label.links()[0].text_range, 0..4);
}

#[test]
fn content_set_text_none_clears() {
    let mut label = label_with(example_text(), 400.0);
    label.set_text(None);
    assert_eq!(label.text(), "");
    assert!(label.links().is_empty());

    let mut label = label_with(example_text(), 400.0);
    label.set_styled_text(None);
    assert!(label.links().is_empty());
    assert!(label.display_text().is_empty());
}

#[test]
fn content_replacement_discards_old_links() {
    let mut label = label_with(example_text(), 400.0);
    label.set_text(Some("Visit OurSite today"));
    assert!(label.links().is_empty());
}

#[test]
fn content_rebuild_is_idempotent() {
    let mut label = label_with(example_text(), 400.0);
    let links = label.links().to_vec();
    let display = label.display_text().clone();

    label.set_styled_text(Some(example_text()));
    assert_eq!(label.links(), links.as_slice());
    assert_eq!(label.display_text(), &display);

    label.set_text_color(css::RED);
    label.set_text_color(css::RED);
    assert_eq!(label.links(), links.as_slice());
}

#[test]
fn content_plain_text_uses_label_style() {
    let mut label = label();
    label.set_text(Some("hi"));
    let attrs = label.display_text().attributes_at(0).unwrap();
    assert_eq!(attrs.font, Some(Font::default()));
    assert_eq!(attrs.color, Some(css::BLACK));
    assert_eq!(
        attrs.paragraph,
        Some(ParagraphStyle {
            alignment: Alignment::Left,
            line_break: LineBreakMode::TruncatingTail,
        })
    );
    assert_eq!(attrs.shadow, None);
}

#[test]
fn content_styled_text_sets_label_style() {
    let attrs = Attributes::default()
        .with_font(Font::new("serif", 12.0))
        .with_color(css::RED)
        .with_paragraph(ParagraphStyle {
            alignment: Alignment::Center,
            line_break: LineBreakMode::CharWrapping,
        });
    let mut label = label();
    label.set_styled_text(Some(StyledText::new("styled", attrs)));
    let style = label.style();
    assert_eq!(style.font, Font::new("serif", 12.0));
    assert_eq!(style.text_color, css::RED);
    assert_eq!(style.alignment, Alignment::Center);
    assert_eq!(style.line_break, LineBreakMode::CharWrapping);
}

#[test]
fn content_changes_notify_host() {
    let mut label = label();
    label.host_mut().reset();
    label.set_text(Some("hello"));
    assert!(label.host().redraws > 0);
    assert!(label.host().content_size_invalidations > 0);
}

#[test]
fn content_size_follows_text() {
    let mut label = label();
    label.set_text(Some("Visit OurSite today"));
    assert_eq!(label.content_size(), Size::new(190.0, 20.0));
}

#[test]
fn content_size_that_fits_wraps_to_proposal() {
    let mut label = label();
    label.set_max_lines(0);
    label.set_text(Some("Visit OurSite today"));
    // "Visit " / "OurSite " / "today"
    assert_eq!(
        label.size_that_fits(Size::new(100.0, 0.0)),
        Size::new(70.0, 60.0)
    );
    label.set_max_lines(2);
    assert_eq!(
        label.size_that_fits(Size::new(100.0, 0.0)),
        Size::new(70.0, 40.0)
    );
}

#[test]
fn content_single_line_by_default() {
    let mut label = label();
    label.set_text(Some("Visit OurSite today"));
    assert_eq!(
        label.size_that_fits(Size::new(100.0, 0.0)),
        Size::new(50.0, 20.0)
    );
}

#[test]
fn content_size_ignores_alignment() {
    for alignment in [Alignment::Left, Alignment::Center, Alignment::Right] {
        let mut label = label();
        label.set_alignment(alignment);
        label.set_text(Some("Visit OurSite today"));
        label.set_size(Size::new(400.0, 20.0));
        let size = label.content_size();
        assert_eq!(size, Size::new(190.0, 20.0), "{alignment:?}");

        label.set_size(size);
        assert_eq!(
            label.content_size(),
            size,
            "{alignment:?} content size is stable when sized to fit"
        );
    }
}

#[test]
fn content_size_invalidated_by_width_changes() {
    let mut label = label();
    label.set_text(Some("Visit OurSite today"));
    label.set_size(Size::new(400.0, 20.0));
    label.host_mut().reset();

    label.set_size(Size::new(400.0, 40.0));
    assert_eq!(label.host().redraws, 1);
    assert_eq!(
        label.host().content_size_invalidations,
        0,
        "height alone does not change the content size"
    );

    label.set_size(Size::new(100.0, 40.0));
    assert_eq!(label.host().redraws, 2);
    assert_eq!(label.host().content_size_invalidations, 1);

    label.set_size(Size::new(100.0, 40.0));
    assert_eq!(label.host().redraws, 2, "unchanged size is a no-op");
}
