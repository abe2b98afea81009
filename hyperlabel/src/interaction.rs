// Copyright 2026 the Hyperlabel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Turning pointer and gesture events into link notifications.
//!
//! Gesture recognition itself (tap versus long press thresholds) belongs to
//! the host; the controller only sees the recognized outcome.

use peniko::kurbo::{Point, Rect};
use smallvec::SmallVec;
use url::Url;

use crate::layout::{LayoutBridge, TextLayout};
use crate::{LinkRecord, LinkRegistry};

/// A pointer or gesture event in label coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PointerEvent {
    /// The pointer went down.
    Down(Point),
    /// The host recognized a tap.
    Tap(Point),
    /// The host recognized a long press.
    LongPress(Point),
    /// The host cancelled the pointer sequence.
    Cancel,
}

/// Whether the label used an event.
///
/// Ignored events should be offered to an enclosing view.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EventStatus {
    /// The event was over a link and was handled.
    Consumed,
    /// The event had nothing to do with a link.
    Ignored,
}

/// A resolved gesture on a link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LinkNotification {
    /// The link was tapped.
    Tapped(Url),
    /// The link was long-pressed.
    LongPressed(Url),
}

impl LinkNotification {
    /// The link target.
    pub fn target(&self) -> &Url {
        match self {
            Self::Tapped(target) | Self::LongPressed(target) => target,
        }
    }
}

/// The state of the single pointer the label tracks.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PressState {
    /// No press in progress.
    #[default]
    Idle,
    /// Pressed over a link; a tap or long press will fire for it.
    PressCandidate(LinkRecord),
    /// Pressed, but not over a link.
    NoCandidate,
}

/// What the label should do in response to an event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Response {
    /// Whether the event was used.
    pub status: EventStatus,
    /// The notification to deliver, if a gesture resolved over a link.
    pub notification: Option<LinkNotification>,
    /// Whether the pressed-link highlight appeared, moved or disappeared.
    pub highlight_changed: bool,
}

impl Response {
    fn ignored() -> Self {
        Self {
            status: EventStatus::Ignored,
            notification: None,
            highlight_changed: false,
        }
    }
}

/// Tracks the pressed link across a pointer sequence.
#[derive(Clone, Debug, Default)]
pub struct InteractionController {
    state: PressState,
}

impl InteractionController {
    /// Creates an idle controller.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current state.
    pub fn state(&self) -> &PressState {
        &self.state
    }

    /// The link currently pressed, if any.
    pub fn pressed_link(&self) -> Option<&LinkRecord> {
        match &self.state {
            PressState::PressCandidate(link) => Some(link),
            PressState::Idle | PressState::NoCandidate => None,
        }
    }

    /// Return to idle without notifying.
    ///
    /// Returns `true` if a highlight was showing.
    pub fn reset(&mut self) -> bool {
        matches!(
            core::mem::take(&mut self.state),
            PressState::PressCandidate(_)
        )
    }

    /// Advance the state machine with `event`.
    ///
    /// `bridge` must already be pinned to the label's current width.
    pub fn handle<L: TextLayout>(
        &mut self,
        event: PointerEvent,
        registry: &LinkRegistry,
        bridge: &mut LayoutBridge<L>,
    ) -> Response {
        match event {
            PointerEvent::Down(point) => {
                let was_highlighted = self.reset();
                let hit = bridge
                    .glyph_index(point)
                    .and_then(|glyph_index| registry.link_at(glyph_index))
                    .cloned();
                log::trace!("pointer down at {point:?} over {hit:?}");
                match hit {
                    Some(link) => {
                        self.state = PressState::PressCandidate(link);
                        Response {
                            status: EventStatus::Consumed,
                            notification: None,
                            highlight_changed: true,
                        }
                    }
                    None => {
                        self.state = PressState::NoCandidate;
                        Response {
                            highlight_changed: was_highlighted,
                            ..Response::ignored()
                        }
                    }
                }
            }
            PointerEvent::Tap(_) => self.finish(LinkNotification::Tapped),
            PointerEvent::LongPress(_) => self.finish(LinkNotification::LongPressed),
            PointerEvent::Cancel => {
                if self.reset() {
                    Response {
                        status: EventStatus::Consumed,
                        notification: None,
                        highlight_changed: true,
                    }
                } else {
                    Response::ignored()
                }
            }
        }
    }

    /// The rectangles to highlight for the pressed link, one per line.
    pub fn highlight_rects<L: TextLayout>(
        &self,
        bridge: &mut LayoutBridge<L>,
    ) -> SmallVec<[Rect; 2]> {
        match self.pressed_link() {
            Some(link) => bridge.bounding_rects(link.glyph_range.clone()),
            None => SmallVec::new(),
        }
    }

    fn finish(&mut self, notify: fn(Url) -> LinkNotification) -> Response {
        match core::mem::take(&mut self.state) {
            PressState::PressCandidate(link) => Response {
                status: EventStatus::Consumed,
                notification: Some(notify(link.target)),
                highlight_changed: true,
            },
            PressState::Idle | PressState::NoCandidate => Response::ignored(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{EventStatus, InteractionController, LinkNotification, PointerEvent, PressState};
    use crate::layout::{CellLayout, LayoutBridge};
    use crate::{LinkRegistry, StyleResolver, StyledText, StyledTextBuffer};
    use peniko::kurbo::Point;
    use url::Url;

    fn setup() -> (LinkRegistry, LayoutBridge<CellLayout>) {
        let mut text = StyledText::plain("Visit OurSite today");
        text.set_link(6..13, "https://example.com").unwrap();
        let mut buffer = StyledTextBuffer::new();
        buffer.replace(text);
        let mut bridge = LayoutBridge::new(CellLayout::new(10.0, 20.0));
        let mut registry = LinkRegistry::new();
        registry.rebuild(&mut buffer, &mut StyleResolver::default(), &mut bridge);
        bridge.pin_width(400.0);
        (registry, bridge)
    }

    const ON_LINK: Point = Point::new(85.0, 10.0);
    const OFF_LINK: Point = Point::new(15.0, 10.0);

    fn example() -> Url {
        Url::parse("https://example.com").unwrap()
    }

    #[test]
    fn press_then_tap_notifies_once() {
        let (registry, mut bridge) = setup();
        let mut controller = InteractionController::new();
        let down = controller.handle(PointerEvent::Down(ON_LINK), &registry, &mut bridge);
        assert_eq!(down.status, EventStatus::Consumed);
        assert!(down.highlight_changed);
        assert!(matches!(controller.state(), PressState::PressCandidate(_)));

        let tap = controller.handle(PointerEvent::Tap(ON_LINK), &registry, &mut bridge);
        assert_eq!(tap.notification, Some(LinkNotification::Tapped(example())));
        assert_eq!(controller.state(), &PressState::Idle);

        let again = controller.handle(PointerEvent::Tap(ON_LINK), &registry, &mut bridge);
        assert_eq!(again.notification, None, "a press only resolves once");
    }

    #[test]
    fn press_then_long_press_never_taps() {
        let (registry, mut bridge) = setup();
        let mut controller = InteractionController::new();
        controller.handle(PointerEvent::Down(ON_LINK), &registry, &mut bridge);
        let long = controller.handle(PointerEvent::LongPress(ON_LINK), &registry, &mut bridge);
        assert_eq!(long.notification, Some(LinkNotification::LongPressed(example())));
        let tap = controller.handle(PointerEvent::Tap(ON_LINK), &registry, &mut bridge);
        assert_eq!(tap.notification, None);
        assert_eq!(tap.status, EventStatus::Ignored);
    }

    #[test]
    fn press_off_link_is_ignored() {
        let (registry, mut bridge) = setup();
        let mut controller = InteractionController::new();
        let down = controller.handle(PointerEvent::Down(OFF_LINK), &registry, &mut bridge);
        assert_eq!(down.status, EventStatus::Ignored);
        assert_eq!(controller.state(), &PressState::NoCandidate);
        let tap = controller.handle(PointerEvent::Tap(OFF_LINK), &registry, &mut bridge);
        assert_eq!(tap.status, EventStatus::Ignored);
        assert_eq!(tap.notification, None);
        assert_eq!(controller.state(), &PressState::Idle);
    }

    #[test]
    fn cancel_clears_candidate() {
        let (registry, mut bridge) = setup();
        let mut controller = InteractionController::new();
        controller.handle(PointerEvent::Down(ON_LINK), &registry, &mut bridge);
        let cancel = controller.handle(PointerEvent::Cancel, &registry, &mut bridge);
        assert!(cancel.highlight_changed);
        assert_eq!(cancel.notification, None);
        assert_eq!(controller.state(), &PressState::Idle);
        assert!(controller.highlight_rects(&mut bridge).is_empty());
    }

    #[test]
    fn repeated_down_restarts_evaluation() {
        let (registry, mut bridge) = setup();
        let mut controller = InteractionController::new();
        controller.handle(PointerEvent::Down(ON_LINK), &registry, &mut bridge);
        let moved = controller.handle(PointerEvent::Down(OFF_LINK), &registry, &mut bridge);
        assert!(moved.highlight_changed, "the old highlight goes away");
        assert_eq!(controller.state(), &PressState::NoCandidate);
        let tap = controller.handle(PointerEvent::Tap(ON_LINK), &registry, &mut bridge);
        assert_eq!(tap.notification, None);
    }

    #[test]
    fn highlight_follows_pressed_link() {
        let (registry, mut bridge) = setup();
        let mut controller = InteractionController::new();
        assert!(controller.highlight_rects(&mut bridge).is_empty());
        controller.handle(PointerEvent::Down(ON_LINK), &registry, &mut bridge);
        let rects = controller.highlight_rects(&mut bridge);
        assert_eq!(rects.len(), 1);
        assert_eq!((rects[0].x0, rects[0].x1), (60.0, 130.0));
    }
}
