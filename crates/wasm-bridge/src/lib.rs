//! Browser-facing API for hovertip, a cursor-anchored text tooltip.
//!
//! The host page reserves one element as the tooltip surface and calls
//! [`Tooltip::show`] / [`Tooltip::hide`] from its pointer event handlers:
//!
//! ```js
//! const tip = new Tooltip();
//! link.onmousemove = (e) => tip.showEvent(e, link.href);
//! link.onmouseout = () => tip.hide();
//! ```
//!
//! or lets this crate attach the listeners itself with `bindHover`. The
//! surface element (`<span id="hovertip"></span>` by default) must live in
//! the host document; this crate only mutates it.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, MouseEvent};

use hovertip_core::{PointerPosition, TooltipError, TooltipPresenter, TooltipStyle};

// Core modules
pub mod dom;
pub mod hover;

use dom::DomSurface;
use hover::{HoverBinding, SharedPresenter};

/// Install the panic hook and console logger once per page.
fn init_runtime() {
    use std::sync::Once;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Debug);
    });
}

/// The tooltip presenter exported to the host page.
///
/// One instance drives one surface element; every hover target on the page
/// shares it, and whichever event fired last wins.
#[wasm_bindgen]
pub struct Tooltip {
    presenter: SharedPresenter,
    bindings: Vec<HoverBinding>,
}

#[wasm_bindgen]
impl Tooltip {
    /// Tooltip over the element with the default `hovertip` identifier.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Tooltip {
        init_runtime();
        Self::from_presenter(TooltipPresenter::new(DomSurface::new()))
    }

    /// Tooltip over the element with a custom identifier.
    #[wasm_bindgen(js_name = withId)]
    pub fn with_id(surface_id: &str) -> Tooltip {
        init_runtime();
        Self::from_presenter(TooltipPresenter::new(DomSurface::with_id(surface_id)))
    }

    /// Tooltip with a custom look, deserialized from a plain JS object
    /// (camelCase keys; missing fields keep the default look).
    #[wasm_bindgen(js_name = withStyle)]
    pub fn with_style(surface_id: &str, style: JsValue) -> Result<Tooltip, JsValue> {
        init_runtime();
        let style: TooltipStyle = serde_wasm_bindgen::from_value(style)
            .map_err(|e| js_sys::Error::new(&format!("invalid tooltip style: {e}")))?;
        Ok(Self::from_presenter(TooltipPresenter::with_style(
            DomSurface::with_id(surface_id),
            style,
        )))
    }

    /// Display `text` pinned to viewport coordinates (`x`, `y`).
    pub fn show(&mut self, x: f64, y: f64, text: &str) -> Result<(), JsValue> {
        forgive_missing(
            self.presenter
                .borrow_mut()
                .show(PointerPosition::new(x, y), text),
        )
    }

    /// Display `text` at the position of `event` (its `clientX`/`clientY`).
    #[wasm_bindgen(js_name = showEvent)]
    pub fn show_event(&mut self, event: &MouseEvent, text: &str) -> Result<(), JsValue> {
        self.show(event.client_x() as f64, event.client_y() as f64, text)
    }

    /// Clear the payload and take the surface off screen.
    pub fn hide(&mut self) -> Result<(), JsValue> {
        forgive_missing(self.presenter.borrow_mut().hide())
    }

    /// Whether the most recent successful operation was a show.
    pub fn visible(&self) -> bool {
        self.presenter.borrow().visible()
    }

    /// Snapshot of the most recent successful call as a plain JS object
    /// (`{ visible, position: { x, y }, payload }`).
    pub fn state(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.presenter.borrow().state())
            .map_err(|e| js_sys::Error::new(&format!("state serialization failed: {e}")).into())
    }

    /// Attach `mousemove`/`mouseout` listeners to `element` that show `text`
    /// near the cursor while it hovers and hide the tooltip on the way out.
    #[wasm_bindgen(js_name = bindHover)]
    pub fn bind_hover(&mut self, element: &HtmlElement, text: String) -> Result<(), JsValue> {
        let binding = HoverBinding::attach(self.presenter.clone(), element.clone(), text)?;
        self.bindings.push(binding);
        Ok(())
    }

    /// Detach every listener installed through `bindHover`.
    #[wasm_bindgen(js_name = unbindAll)]
    pub fn unbind_all(&mut self) {
        self.bindings.clear();
    }
}

impl Tooltip {
    fn from_presenter(presenter: TooltipPresenter<DomSurface>) -> Tooltip {
        Tooltip {
            presenter: Rc::new(RefCell::new(presenter)),
            bindings: Vec::new(),
        }
    }
}

impl Default for Tooltip {
    fn default() -> Self {
        Self::new()
    }
}

/// A missing surface is cosmetic: log it and report success so the host page
/// keeps running with no tooltip rather than an exception.
fn forgive_missing(result: Result<(), TooltipError>) -> Result<(), JsValue> {
    match result {
        Ok(()) => Ok(()),
        Err(e) if e.is_recoverable() => {
            log::warn!("{e}; tooltip call ignored");
            Ok(())
        }
        Err(e) => Err(js_sys::Error::new(&e.to_string()).into()),
    }
}
