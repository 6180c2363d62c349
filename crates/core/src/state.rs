//! Last-write snapshot of what the surface displays.

use serde::{Deserialize, Serialize};

use crate::position::PointerPosition;

/// Mirror of the most recent successful show or hide call.
///
/// There is no queue and no history; each call overwrites the previous
/// snapshot wholesale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TooltipState {
    /// Whether the surface is on screen.
    pub visible: bool,

    /// Where the surface is pinned, in viewport coordinates.
    pub position: PointerPosition,

    /// The text payload on display; empty after a hide.
    pub payload: String,
}

impl Default for TooltipState {
    fn default() -> Self {
        Self {
            visible: false,
            position: PointerPosition::default(),
            payload: String::new(),
        }
    }
}
