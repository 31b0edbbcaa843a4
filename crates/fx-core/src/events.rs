//! Input delivered as plain values instead of closures.
//!
//! Listeners on the web side only translate DOM events into these and push
//! them onto a queue; the frame callback drains the queue into
//! [`crate::stage::Stage::handle_event`] before each tick. Scroll position is
//! deliberately absent: the scroll-reveal effect is driven entirely by the
//! page's external scroll-trigger facility.

/// One discrete input, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    PointerMoved { x: f32, y: f32 },
    PointerLeft,
    Resized { width: f32, height: f32 },
}
