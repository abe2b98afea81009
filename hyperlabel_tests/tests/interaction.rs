// Copyright 2026 the Hyperlabel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the press, tap, and long-press lifecycle.

use hyperlabel::{EventStatus, PointerEvent};

use crate::util::{cell_center, example_text, example_url, label, label_with, recorder};

#[test]
fn interaction_example_scenario() {
    let mut label = label_with(example_text(), 400.0);
    let over_link = cell_center(8, 0);
    assert_eq!(
        label.handle_pointer(PointerEvent::Down(over_link)),
        EventStatus::Consumed
    );
    assert_eq!(
        label.handle_pointer(PointerEvent::Tap(over_link)),
        EventStatus::Consumed
    );
    assert_eq!(label.host().opened, [example_url()]);
}

#[test]
fn interaction_tap_notifies_handler() {
    let mut label = label_with(example_text(), 400.0);
    let (on_tap, taps) = recorder();
    label.set_link_tap_handler(Some(on_tap));

    label.handle_pointer(PointerEvent::Down(cell_center(6, 0)));
    let status = label.handle_pointer(PointerEvent::Tap(cell_center(6, 0)));
    assert_eq!(status, EventStatus::Consumed);
    assert_eq!(*taps.borrow(), [example_url()]);
    assert!(
        label.host().opened.is_empty(),
        "a handler replaces opening the target"
    );
}

#[test]
fn interaction_long_press_suppresses_tap() {
    let mut label = label_with(example_text(), 400.0);
    let (on_tap, taps) = recorder();
    let (on_long_press, long_presses) = recorder();
    label.set_link_tap_handler(Some(on_tap));
    label.set_link_long_press_handler(Some(on_long_press));

    label.handle_pointer(PointerEvent::Down(cell_center(8, 0)));
    assert_eq!(
        label.handle_pointer(PointerEvent::LongPress(cell_center(8, 0))),
        EventStatus::Consumed
    );
    assert_eq!(
        label.handle_pointer(PointerEvent::Tap(cell_center(8, 0))),
        EventStatus::Ignored
    );
    assert_eq!(*long_presses.borrow(), [example_url()]);
    assert!(taps.borrow().is_empty());
}

#[test]
fn interaction_long_press_without_handler() {
    let mut label = label_with(example_text(), 400.0);
    label.handle_pointer(PointerEvent::Down(cell_center(8, 0)));
    assert_eq!(
        label.handle_pointer(PointerEvent::LongPress(cell_center(8, 0))),
        EventStatus::Consumed
    );
    assert!(label.host().opened.is_empty());
}

#[test]
fn interaction_off_link_is_ignored() {
    let mut label = label_with(example_text(), 400.0);
    let (on_tap, taps) = recorder();
    label.set_link_tap_handler(Some(on_tap));
    let off_link = cell_center(2, 0);
    assert_eq!(
        label.handle_pointer(PointerEvent::Down(off_link)),
        EventStatus::Ignored
    );
    assert_eq!(
        label.handle_pointer(PointerEvent::Tap(off_link)),
        EventStatus::Ignored
    );
    assert!(taps.borrow().is_empty());
    assert!(label.host().opened.is_empty());
}

#[test]
fn interaction_empty_label_ignores_everything() {
    let mut label = label();
    for event in [
        PointerEvent::Down(cell_center(0, 0)),
        PointerEvent::Tap(cell_center(0, 0)),
        PointerEvent::LongPress(cell_center(0, 0)),
        PointerEvent::Cancel,
    ] {
        assert_eq!(label.handle_pointer(event), EventStatus::Ignored);
    }
    assert!(label.highlight().is_none());
}

#[test]
fn interaction_tap_without_press_is_ignored() {
    let mut label = label_with(example_text(), 400.0);
    assert_eq!(
        label.handle_pointer(PointerEvent::Tap(cell_center(8, 0))),
        EventStatus::Ignored
    );
    assert!(label.host().opened.is_empty());
}

#[test]
fn interaction_cancel_drops_press() {
    let mut label = label_with(example_text(), 400.0);
    label.handle_pointer(PointerEvent::Down(cell_center(8, 0)));
    assert_eq!(
        label.handle_pointer(PointerEvent::Cancel),
        EventStatus::Consumed
    );
    assert_eq!(
        label.handle_pointer(PointerEvent::Tap(cell_center(8, 0))),
        EventStatus::Ignored
    );
    assert!(label.host().opened.is_empty());
}

#[test]
fn interaction_press_requests_redraws() {
    let mut label = label_with(example_text(), 400.0);
    label.host_mut().reset();
    label.handle_pointer(PointerEvent::Down(cell_center(8, 0)));
    assert_eq!(label.host().redraws, 1);
    label.handle_pointer(PointerEvent::Tap(cell_center(8, 0)));
    assert_eq!(label.host().redraws, 2);
    label.handle_pointer(PointerEvent::Down(cell_center(2, 0)));
    assert_eq!(label.host().redraws, 2, "no highlight, nothing to redraw");
}

#[test]
fn interaction_content_change_drops_press() {
    let mut label = label_with(example_text(), 400.0);
    label.handle_pointer(PointerEvent::Down(cell_center(8, 0)));
    label.set_styled_text(Some(example_text()));
    assert!(label.highlight().is_none());
    assert_eq!(
        label.handle_pointer(PointerEvent::Tap(cell_center(8, 0))),
        EventStatus::Ignored
    );
    assert!(label.host().opened.is_empty());
}

#[test]
fn interaction_each_press_targets_its_own_link() {
    let mut text = example_text();
    text.set_link(14..19, "https://today.example/").unwrap();
    let mut label = label_with(text, 400.0);
    let (on_tap, taps) = recorder();
    label.set_link_tap_handler(Some(on_tap));

    for column in [8, 16] {
        label.handle_pointer(PointerEvent::Down(cell_center(column, 0)));
        label.handle_pointer(PointerEvent::Tap(cell_center(column, 0)));
    }
    let taps = taps.borrow();
    assert_eq!(taps.len(), 2);
    assert_eq!(taps[0], example_url());
    assert_eq!(taps[1].as_str(), "https://today.example/");
}
