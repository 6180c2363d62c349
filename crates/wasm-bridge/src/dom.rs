//! DOM-backed tooltip surface.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlElement;

use hovertip_core::{
    css_px, PointerPosition, TooltipError, TooltipResult, TooltipStyle, TooltipSurface,
};

/// Identifier of the element reserved as the tooltip surface when the host
/// page does not pick one.
pub const DEFAULT_SURFACE_ID: &str = "hovertip";

/// [`TooltipSurface`] backed by a live DOM element.
///
/// The element is resolved by identifier on every call rather than held
/// across calls: the surface belongs to the host document, which may insert
/// it late or swap the node out, and a cached handle would keep mutating the
/// detached one.
pub struct DomSurface {
    element_id: String,
}

impl DomSurface {
    /// Surface over the element with the default identifier.
    pub fn new() -> Self {
        Self::with_id(DEFAULT_SURFACE_ID)
    }

    /// Surface over the element with a custom identifier.
    pub fn with_id(element_id: impl Into<String>) -> Self {
        Self {
            element_id: element_id.into(),
        }
    }

    pub fn element_id(&self) -> &str {
        &self.element_id
    }

    /// Look the surface element up in the current document.
    fn element(&self) -> TooltipResult<HtmlElement> {
        let window = web_sys::window().ok_or_else(|| TooltipError::Detached {
            message: "no window object".to_string(),
        })?;
        let document = window.document().ok_or_else(|| TooltipError::Detached {
            message: "no document object".to_string(),
        })?;
        let element =
            document
                .get_element_by_id(&self.element_id)
                .ok_or_else(|| TooltipError::MissingSurface {
                    id: self.element_id.clone(),
                })?;
        element
            .dyn_into::<HtmlElement>()
            .map_err(|_| TooltipError::SurfaceType {
                id: self.element_id.clone(),
            })
    }

    fn set_property(element: &HtmlElement, name: &str, value: &str) -> TooltipResult<()> {
        element
            .style()
            .set_property(name, value)
            .map_err(|e| TooltipError::Dom {
                message: format!("set {name}: {}", describe_js_value(&e)),
            })
    }
}

impl Default for DomSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl TooltipSurface for DomSurface {
    fn set_text(&mut self, text: &str) -> TooltipResult<()> {
        let element = self.element()?;
        element.set_text_content(Some(text));
        Ok(())
    }

    fn set_position(&mut self, position: PointerPosition) -> TooltipResult<()> {
        let element = self.element()?;
        Self::set_property(&element, "left", &css_px(position.x))?;
        Self::set_property(&element, "top", &css_px(position.y))
    }

    fn apply_style(&mut self, style: &TooltipStyle) -> TooltipResult<()> {
        let element = self.element()?;
        // Pinned to the viewport so left/top track the cursor even on a
        // scrolled page.
        Self::set_property(&element, "position", "fixed")?;
        Self::set_property(&element, "background-color", &style.background_color)?;
        Self::set_property(&element, "border", &style.border)?;
        Self::set_property(&element, "padding", &style.padding)?;
        Self::set_property(&element, "border-radius", &style.border_radius)?;
        Self::set_property(&element, "z-index", &style.z_index.to_string())?;
        Self::set_property(&element, "font-size", &css_px(style.font_size_px as f64))?;
        Self::set_property(&element, "box-shadow", &style.box_shadow)
    }

    fn set_visible(&mut self, visible: bool) -> TooltipResult<()> {
        let element = self.element()?;
        let value = if visible { "visible" } else { "hidden" };
        Self::set_property(&element, "visibility", value)
    }
}

/// Render a JS value from a rejected DOM call into something loggable.
pub(crate) fn describe_js_value(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_ids() {
        assert_eq!(DomSurface::new().element_id(), DEFAULT_SURFACE_ID);
        assert_eq!(DomSurface::with_id("quote-surface").element_id(), "quote-surface");
    }
}
