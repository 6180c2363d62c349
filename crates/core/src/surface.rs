//! The mutation seam between the presenter and whatever displays the payload.

use crate::errors::TooltipResult;
use crate::position::PointerPosition;
use crate::style::TooltipStyle;

/// Capability trait for the element used as the tooltip surface.
///
/// The presenter drives exactly this interface; implementations decide what
/// a "surface" is (a live DOM element in the browser build, a recording fake
/// in tests). Implementations do not own the element's lifecycle: they mutate
/// an existing surface and never create or destroy it.
pub trait TooltipSurface {
    /// Replace the surface's text content with `text` (may be empty).
    fn set_text(&mut self, text: &str) -> TooltipResult<()>;

    /// Pin the surface to a viewport position.
    fn set_position(&mut self, position: PointerPosition) -> TooltipResult<()>;

    /// Apply the fixed visual presentation.
    fn apply_style(&mut self, style: &TooltipStyle) -> TooltipResult<()>;

    /// Put the surface on or take it off screen.
    fn set_visible(&mut self, visible: bool) -> TooltipResult<()>;
}
