//! Pointer coordinates captured from the triggering mouse event.

use serde::{Deserialize, Serialize};

/// A position in viewport coordinates (CSS pixels from the top-left corner),
/// as reported by `clientX`/`clientY` on mouse events.
///
/// Ephemeral: a show call consumes it and only the last-write snapshot in
/// [`TooltipState`](crate::TooltipState) remembers it.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
