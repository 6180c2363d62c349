//! Fixed visual presentation applied to the tooltip surface.

use serde::{Deserialize, Serialize};

/// Inline styles applied to the surface on every show call.
///
/// The defaults render a small white pill with a thin grey border floating
/// above all other content. A custom style can be supplied once at presenter
/// construction; styling is never configurable per call. Field values are CSS
/// strings applied verbatim (except the numeric z-index and font size), and
/// the serde names are camelCase so a plain JS object deserializes directly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct TooltipStyle {
    /// Background fill behind the payload.
    pub background_color: String,

    /// Shorthand border, e.g. `1px solid #ccc`.
    pub border: String,

    /// Shorthand padding between border and payload.
    pub padding: String,

    /// Corner rounding.
    pub border_radius: String,

    /// Stacking order; high enough to sit above host page content.
    pub z_index: i32,

    /// Payload font size in pixels.
    pub font_size_px: f32,

    /// Drop shadow under the surface.
    pub box_shadow: String,
}

impl Default for TooltipStyle {
    fn default() -> Self {
        Self {
            background_color: "#fff".to_string(),
            border: "1px solid #ccc".to_string(),
            padding: "5px 10px".to_string(),
            border_radius: "3px".to_string(),
            z_index: 10_000,
            font_size_px: 14.0,
            box_shadow: "0 2px 5px rgba(0,0,0,0.2)".to_string(),
        }
    }
}

/// Format a coordinate as a CSS pixel length: `100.0` → `"100px"`,
/// `12.5` → `"12.5px"`.
pub fn css_px(value: f64) -> String {
    format!("{value}px")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_px_formatting() {
        assert_eq!(css_px(100.0), "100px");
        assert_eq!(css_px(0.0), "0px");
        assert_eq!(css_px(12.5), "12.5px");
        assert_eq!(css_px(-3.0), "-3px");
    }

    #[test]
    fn test_default_style_constants() {
        let style = TooltipStyle::default();
        assert_eq!(style.background_color, "#fff");
        assert_eq!(style.border, "1px solid #ccc");
        assert_eq!(style.padding, "5px 10px");
        assert_eq!(style.border_radius, "3px");
        assert_eq!(style.z_index, 10_000);
        assert_eq!(style.font_size_px, 14.0);
        assert_eq!(style.box_shadow, "0 2px 5px rgba(0,0,0,0.2)");
    }

    #[test]
    fn test_partial_override_fills_defaults() {
        let style: TooltipStyle =
            serde_json::from_str(r##"{"backgroundColor": "#222", "zIndex": 42}"##).unwrap();
        assert_eq!(style.background_color, "#222");
        assert_eq!(style.z_index, 42);
        // Everything not named falls back to the default look.
        assert_eq!(style.border, "1px solid #ccc");
        assert_eq!(style.font_size_px, 14.0);
    }

    #[test]
    fn test_style_round_trip() {
        let style = TooltipStyle::default();
        let json = serde_json::to_string(&style).unwrap();
        assert!(json.contains("backgroundColor"));
        assert!(json.contains("boxShadow"));
        let back: TooltipStyle = serde_json::from_str(&json).unwrap();
        assert_eq!(style, back);
    }
}
