//! Raw listener plumbing: wire a host element's hover events to the presenter.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlElement, MouseEvent};

use hovertip_core::{PointerPosition, TooltipError, TooltipPresenter};

use crate::dom::DomSurface;

/// Shared handle to the presenter. Single-threaded browser state: one writer
/// at a time, borrows never overlap because the event loop delivers one
/// event callback at a time.
pub(crate) type SharedPresenter = Rc<RefCell<TooltipPresenter<DomSurface>>>;

/// Listeners attached to one hover target.
///
/// Keeps the closures alive for as long as the binding exists and detaches
/// them from the target on drop, so dropping the owning tooltip unhooks
/// every element it was bound to.
pub struct HoverBinding {
    target: HtmlElement,
    on_move: Closure<dyn FnMut(MouseEvent)>,
    on_out: Closure<dyn FnMut(MouseEvent)>,
}

impl HoverBinding {
    /// Attach `mousemove`/`mouseout` listeners to `target` that show `text`
    /// at the cursor while it hovers and hide the tooltip on the way out.
    pub(crate) fn attach(
        presenter: SharedPresenter,
        target: HtmlElement,
        text: String,
    ) -> Result<Self, JsValue> {
        let on_move = {
            let presenter = presenter.clone();
            Closure::wrap(Box::new(move |event: MouseEvent| {
                let position =
                    PointerPosition::new(event.client_x() as f64, event.client_y() as f64);
                report(presenter.borrow_mut().show(position, &text));
            }) as Box<dyn FnMut(MouseEvent)>)
        };
        let on_out = Closure::wrap(Box::new(move |_event: MouseEvent| {
            report(presenter.borrow_mut().hide());
        }) as Box<dyn FnMut(MouseEvent)>);

        target.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
        target.add_event_listener_with_callback("mouseout", on_out.as_ref().unchecked_ref())?;

        Ok(Self {
            target,
            on_move,
            on_out,
        })
    }
}

impl Drop for HoverBinding {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback("mousemove", self.on_move.as_ref().unchecked_ref());
        let _ = self
            .target
            .remove_event_listener_with_callback("mouseout", self.on_out.as_ref().unchecked_ref());
    }
}

/// Inside an event callback there is nobody to return an error to; log it
/// at a severity matching the recovery policy and move on.
fn report(result: Result<(), TooltipError>) {
    match result {
        Ok(()) => {}
        Err(e) if e.is_recoverable() => log::warn!("{e}; hover event ignored"),
        Err(e) => log::error!("hover event failed: {e}"),
    }
}
