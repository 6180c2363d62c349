//! Error types shared by the presenter and its surface implementations.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Everything that can go wrong while mutating the tooltip surface.
///
/// Serialized with a tagged representation so an error crossing the JS
/// boundary stays inspectable as `{ type, details }`.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "details")]
pub enum TooltipError {
    /// The reserved surface element is not in the document.
    #[error("tooltip surface '{id}' not found in document")]
    MissingSurface { id: String },

    /// An element with the reserved identifier exists but cannot carry
    /// inline style or text content.
    #[error("tooltip surface '{id}' is not an HTML element")]
    SurfaceType { id: String },

    /// Not running inside a browsing context (no window or document).
    #[error("no browsing context: {message}")]
    Detached { message: String },

    /// The DOM rejected a style or text mutation.
    #[error("DOM mutation failed: {message}")]
    Dom { message: String },
}

impl TooltipError {
    /// A missing surface is cosmetic, not fatal: the policy is to log and
    /// carry on rather than fail the host page. Everything else indicates a
    /// broken environment and is worth surfacing.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, TooltipError::MissingSurface { .. })
    }
}

/// Result alias for tooltip operations.
pub type TooltipResult<T> = Result<T, TooltipError>;
