//! Browser tests for the DOM-backed surface and the exported tooltip API.
//!
//! These run under `wasm-pack test --headless --chrome` (or any browser
//! wasm-bindgen-test runner); they share one page, so every test uses its
//! own surface identifier and removes its elements when done.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlElement, MouseEvent, MouseEventInit};

use hovertip_core::{TooltipState, TooltipStyle};
use hovertip_wasm::Tooltip;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Insert a fresh element with `id` into the body and hand it back.
fn install_element(id: &str) -> HtmlElement {
    let doc = document();
    let element: HtmlElement = doc.create_element("span").unwrap().dyn_into().unwrap();
    element.set_id(id);
    doc.body().unwrap().append_child(&element).unwrap();
    element
}

fn mouse_event(name: &str, x: i32, y: i32) -> MouseEvent {
    let init = MouseEventInit::new();
    init.set_client_x(x);
    init.set_client_y(y);
    MouseEvent::new_with_mouse_event_init_dict(name, &init).unwrap()
}

#[wasm_bindgen_test]
fn show_pins_text_to_position() {
    let surface = install_element("hovertip-show");
    let mut tip = Tooltip::with_id("hovertip-show");

    tip.show(100.0, 50.0, "https://example.com").unwrap();

    assert_eq!(surface.text_content().as_deref(), Some("https://example.com"));
    let style = surface.style();
    assert_eq!(style.get_property_value("left").unwrap(), "100px");
    assert_eq!(style.get_property_value("top").unwrap(), "50px");
    assert_eq!(style.get_property_value("position").unwrap(), "fixed");
    assert_eq!(style.get_property_value("z-index").unwrap(), "10000");
    assert_eq!(style.get_property_value("font-size").unwrap(), "14px");
    assert_eq!(style.get_property_value("visibility").unwrap(), "visible");
    assert!(tip.visible());

    let state: TooltipState = serde_wasm_bindgen::from_value(tip.state().unwrap()).unwrap();
    assert!(state.visible);
    assert_eq!(state.position.x, 100.0);
    assert_eq!(state.position.y, 50.0);
    assert_eq!(state.payload, "https://example.com");

    surface.remove();
}

#[wasm_bindgen_test]
fn hide_clears_text_and_visibility() {
    let surface = install_element("hovertip-hide");
    let mut tip = Tooltip::with_id("hovertip-hide");

    tip.show(10.0, 20.0, "payload").unwrap();
    tip.hide().unwrap();

    assert_eq!(surface.text_content().as_deref(), Some(""));
    assert_eq!(
        surface.style().get_property_value("visibility").unwrap(),
        "hidden"
    );
    assert!(!tip.visible());

    surface.remove();
}

#[wasm_bindgen_test]
fn show_event_reads_client_coordinates() {
    let surface = install_element("hovertip-event");
    let mut tip = Tooltip::with_id("hovertip-event");

    let event = mouse_event("mousemove", 42, 7);
    tip.show_event(&event, "from event").unwrap();

    assert_eq!(surface.text_content().as_deref(), Some("from event"));
    assert_eq!(surface.style().get_property_value("left").unwrap(), "42px");
    assert_eq!(surface.style().get_property_value("top").unwrap(), "7px");

    surface.remove();
}

#[wasm_bindgen_test]
fn missing_surface_is_a_logged_noop() {
    // No element with this identifier exists anywhere on the page.
    let mut tip = Tooltip::with_id("hovertip-absent");

    tip.show(1.0, 2.0, "nobody sees this").unwrap();
    tip.hide().unwrap();

    assert!(!tip.visible());
}

#[wasm_bindgen_test]
fn surface_inserted_after_construction_is_found() {
    let mut tip = Tooltip::with_id("hovertip-late");
    tip.show(1.0, 2.0, "too early").unwrap();
    assert!(!tip.visible());

    let surface = install_element("hovertip-late");
    tip.show(3.0, 4.0, "on time").unwrap();

    assert_eq!(surface.text_content().as_deref(), Some("on time"));
    assert!(tip.visible());

    surface.remove();
}

#[wasm_bindgen_test]
fn custom_style_overrides_apply() {
    let surface = install_element("hovertip-style");
    let style = TooltipStyle {
        z_index: 42,
        font_size_px: 11.0,
        ..TooltipStyle::default()
    };
    let style_obj = serde_wasm_bindgen::to_value(&style).unwrap();
    let mut tip = Tooltip::with_style("hovertip-style", style_obj).unwrap();

    tip.show(0.0, 0.0, "styled").unwrap();

    assert_eq!(surface.style().get_property_value("z-index").unwrap(), "42");
    assert_eq!(
        surface.style().get_property_value("font-size").unwrap(),
        "11px"
    );

    surface.remove();
}

#[wasm_bindgen_test]
fn partial_style_object_keeps_defaults() {
    let obj = js_sys::Object::new();
    js_sys::Reflect::set(&obj, &"zIndex".into(), &99.into()).unwrap();
    let surface = install_element("hovertip-partial");
    let mut tip = Tooltip::with_style("hovertip-partial", obj.into()).unwrap();

    tip.show(0.0, 0.0, "partial").unwrap();

    let style = surface.style();
    assert_eq!(style.get_property_value("z-index").unwrap(), "99");
    // Unnamed fields keep the default look.
    assert_eq!(style.get_property_value("font-size").unwrap(), "14px");

    surface.remove();
}

#[wasm_bindgen_test]
fn bind_hover_wires_move_and_out() {
    let surface = install_element("hovertip-bind");
    let target = install_element("hovertip-bind-target");
    let mut tip = Tooltip::with_id("hovertip-bind");

    tip.bind_hover(&target, "bound text".to_string()).unwrap();

    target.dispatch_event(&mouse_event("mousemove", 30, 60)).unwrap();
    assert_eq!(surface.text_content().as_deref(), Some("bound text"));
    assert_eq!(surface.style().get_property_value("left").unwrap(), "30px");
    assert_eq!(surface.style().get_property_value("top").unwrap(), "60px");

    target.dispatch_event(&mouse_event("mouseout", 0, 0)).unwrap();
    assert_eq!(surface.text_content().as_deref(), Some(""));
    assert_eq!(
        surface.style().get_property_value("visibility").unwrap(),
        "hidden"
    );

    // After unbinding, events on the target no longer reach the presenter.
    tip.unbind_all();
    target.dispatch_event(&mouse_event("mousemove", 1, 1)).unwrap();
    assert_eq!(surface.text_content().as_deref(), Some(""));

    target.remove();
    surface.remove();
}
