//! Core presenter logic for hovertip, a cursor-anchored text tooltip.
//!
//! This crate is display-agnostic: the presenter drives the [`TooltipSurface`]
//! trait and never touches the DOM itself, so the whole show/hide contract can
//! be exercised on native targets with a fake surface. The browser half (the
//! web-sys surface and the wasm-bindgen API) lives in the companion
//! `hovertip-wasm` crate.

pub mod errors;
pub mod position;
pub mod presenter;
pub mod state;
pub mod style;
pub mod surface;

pub use errors::{TooltipError, TooltipResult};
pub use position::PointerPosition;
pub use presenter::TooltipPresenter;
pub use state::TooltipState;
pub use style::{css_px, TooltipStyle};
pub use surface::TooltipSurface;
