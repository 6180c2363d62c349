//! The show/hide pair that is the whole public contract.

use log::debug;

use crate::errors::TooltipResult;
use crate::position::PointerPosition;
use crate::state::TooltipState;
use crate::style::TooltipStyle;
use crate::surface::TooltipSurface;

/// Drives a single tooltip surface.
///
/// Owns the injected surface and mirrors the most recent successful call in
/// [`TooltipState`]. Both operations are synchronous and immediate; the
/// surface always reflects whichever call ran last, with no queue and no
/// history. The surface is the single piece of shared mutable UI state in
/// the system, and this presenter is its single writer.
pub struct TooltipPresenter<S> {
    surface: S,
    style: TooltipStyle,
    state: TooltipState,
}

impl<S: TooltipSurface> TooltipPresenter<S> {
    /// Presenter over `surface` with the default look.
    pub fn new(surface: S) -> Self {
        Self::with_style(surface, TooltipStyle::default())
    }

    /// Presenter over `surface` with a custom look.
    ///
    /// The style is fixed for the lifetime of the presenter; it is never
    /// configurable per call.
    pub fn with_style(surface: S, style: TooltipStyle) -> Self {
        Self {
            surface,
            style,
            state: TooltipState::default(),
        }
    }

    /// Display `text` pinned to `position`, replacing whatever the previous
    /// call displayed.
    ///
    /// On return the surface is visible at `position` showing exactly `text`.
    /// The full style is re-applied on every call, so a surface whose inline
    /// styles were tampered with between calls comes back to the fixed look.
    pub fn show(&mut self, position: PointerPosition, text: &str) -> TooltipResult<()> {
        debug!(
            "show tooltip at ({}, {}): {text:?}",
            position.x, position.y
        );
        self.surface.set_text(text)?;
        self.surface.set_position(position)?;
        self.surface.apply_style(&self.style)?;
        self.surface.set_visible(true)?;
        self.state = TooltipState {
            visible: true,
            position,
            payload: text.to_string(),
        };
        Ok(())
    }

    /// Clear the payload and take the surface off screen.
    ///
    /// Also hides the surface: a blanked payload inside a padded, bordered
    /// box would otherwise stay on screen as a small empty pill. Position
    /// styles are left as-is; they are irrelevant while hidden and the next
    /// show overwrites them.
    pub fn hide(&mut self) -> TooltipResult<()> {
        debug!("hide tooltip");
        self.surface.set_text("")?;
        self.surface.set_visible(false)?;
        self.state = TooltipState::default();
        Ok(())
    }

    /// Snapshot of the most recent successful call.
    pub fn state(&self) -> &TooltipState {
        &self.state
    }

    /// Whether the most recent successful operation was a show.
    pub fn visible(&self) -> bool {
        self.state.visible
    }

    /// The style applied on every show.
    pub fn style(&self) -> &TooltipStyle {
        &self.style
    }

    /// Access the underlying surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }
}
