//! Layer tree types.
//!
//! A screen version carries a strict tree of layers. Every layer's rect is in
//! the same absolute coordinate space as its parent's, and children arrive in
//! no particular geometric order. The tree is a read-only snapshot.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Colour, Rect};

/// What kind of node a layer is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerKind {
    Text,
    Shape,
    Group,
    #[serde(other)]
    Other,
}

impl fmt::Display for LayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayerKind::Text => write!(f, "text"),
            LayerKind::Shape => write!(f, "shape"),
            LayerKind::Group => write!(f, "group"),
            LayerKind::Other => write!(f, "other"),
        }
    }
}

/// A node of the design's visual tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(rename = "type")]
    pub kind: LayerKind,

    #[serde(default)]
    pub name: Option<String>,

    pub rect: Rect,

    #[serde(default = "full_opacity")]
    pub opacity: f64,

    #[serde(default)]
    pub blend_mode: Option<String>,

    #[serde(default)]
    pub border_radius: Option<f64>,

    #[serde(default)]
    pub rotation: Option<f64>,

    #[serde(default)]
    pub fills: Vec<Fill>,

    #[serde(default)]
    pub borders: Vec<Border>,

    #[serde(default)]
    pub shadows: Vec<Shadow>,

    #[serde(default)]
    pub blur: Option<Blur>,

    /// Text content, only meaningful for text layers.
    #[serde(default)]
    pub content: Option<String>,

    #[serde(default)]
    pub text_styles: Vec<TextStyleRun>,

    #[serde(default)]
    pub component_name: Option<String>,

    #[serde(default)]
    pub exportable: bool,

    /// Direct children (empty for leaves).
    #[serde(default)]
    pub layers: Vec<Layer>,
}

fn full_opacity() -> f64 {
    1.0
}

/// Placeholder printed for layers without a name.
pub const UNNAMED: &str = "(unnamed)";

impl Layer {
    /// Create a bare layer with no styling.
    pub fn new(kind: LayerKind, name: impl Into<String>, rect: Rect) -> Self {
        Self {
            id: None,
            kind,
            name: Some(name.into()),
            rect,
            opacity: 1.0,
            blend_mode: None,
            border_radius: None,
            rotation: None,
            fills: vec![],
            borders: vec![],
            shadows: vec![],
            blur: None,
            content: None,
            text_styles: vec![],
            component_name: None,
            exportable: false,
            layers: vec![],
        }
    }

    /// Builder-style child attachment.
    pub fn with_children(mut self, children: Vec<Layer>) -> Self {
        self.layers = children;
        self
    }

    /// Display name, or the unnamed placeholder.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNNAMED)
    }

    pub fn is_text(&self) -> bool {
        self.kind == LayerKind::Text
    }

    pub fn has_children(&self) -> bool {
        !self.layers.is_empty()
    }
}

/// A solid or gradient paint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fill {
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default)]
    pub color: Option<Colour>,

    #[serde(default)]
    pub gradient: Option<Gradient>,

    #[serde(default)]
    pub blend_mode: Option<String>,
}

impl Fill {
    pub fn solid(color: Colour) -> Self {
        Self {
            kind: "color".to_string(),
            color: Some(color),
            gradient: None,
            blend_mode: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradientKind {
    Linear,
    Radial,
    Angular,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gradient {
    #[serde(rename = "type", default)]
    pub kind: Option<GradientKind>,

    #[serde(default)]
    pub angle: Option<f64>,

    #[serde(default)]
    pub color_stops: Vec<ColorStop>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    pub color: Colour,
    /// 0-1 position along the gradient.
    pub position: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Border {
    #[serde(default)]
    pub position: Option<String>,

    #[serde(default)]
    pub thickness: Option<f64>,

    #[serde(default)]
    pub fill: Option<Fill>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShadowKind {
    Outer,
    Inner,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    #[serde(rename = "type", default = "outer")]
    pub kind: ShadowKind,

    #[serde(default)]
    pub offset_x: f64,

    #[serde(default)]
    pub offset_y: f64,

    #[serde(default)]
    pub blur_radius: f64,

    #[serde(default)]
    pub spread: f64,

    #[serde(default)]
    pub color: Option<Colour>,
}

fn outer() -> ShadowKind {
    ShadowKind::Outer
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlurKind {
    Gaussian,
    Background,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blur {
    #[serde(rename = "type", default)]
    pub kind: Option<BlurKind>,

    #[serde(default)]
    pub radius: f64,
}

impl Blur {
    /// Background blurs render as backdrop filters.
    pub fn is_background(&self) -> bool {
        self.kind == Some(BlurKind::Background)
    }
}

/// A text style applied to a range of a text layer's content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyleRun {
    #[serde(default)]
    pub style: Option<TextStyle>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    #[serde(default)]
    pub font_family: String,

    #[serde(default)]
    pub postscript_name: Option<String>,

    #[serde(default)]
    pub font_size: f64,

    #[serde(default)]
    pub font_weight: f64,

    #[serde(default)]
    pub line_height: Option<f64>,

    #[serde(default)]
    pub letter_spacing: Option<f64>,

    #[serde(default)]
    pub text_align: Option<String>,

    #[serde(default)]
    pub color: Option<Colour>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_layer_tree() {
        let json = r#"{
            "type": "group",
            "name": "Card",
            "rect": {"x": 0, "y": 0, "width": 100, "height": 50},
            "layers": [
                {"type": "text", "name": "Title", "content": "Hi",
                 "rect": {"x": 8, "y": 8, "width": 40, "height": 20},
                 "text_styles": [{"style": {"font_family": "Inter", "font_size": 14, "font_weight": 600}}]}
            ]
        }"#;
        let layer: Layer = serde_json::from_str(json).unwrap();

        assert_eq!(layer.kind, LayerKind::Group);
        assert_eq!(layer.opacity, 1.0);
        assert_eq!(layer.layers.len(), 1);

        let title = &layer.layers[0];
        assert!(title.is_text());
        assert_eq!(title.content.as_deref(), Some("Hi"));
        let style = title.text_styles[0].style.as_ref().unwrap();
        assert_eq!(style.font_family, "Inter");
        assert_eq!(style.font_weight, 600.0);
    }

    #[test]
    fn test_unknown_kinds_are_tolerated() {
        let json = r#"{"type": "slice", "rect": {"x": 0, "y": 0, "width": 1, "height": 1},
                       "blur": {"type": "motion", "radius": 3}}"#;
        let layer: Layer = serde_json::from_str(json).unwrap();
        assert_eq!(layer.kind, LayerKind::Other);
        assert_eq!(layer.blur.unwrap().kind, Some(BlurKind::Other));
    }

    #[test]
    fn test_display_name_placeholder() {
        let mut layer = Layer::new(LayerKind::Shape, "Box", Rect::default());
        assert_eq!(layer.display_name(), "Box");
        layer.name = None;
        assert_eq!(layer.display_name(), UNNAMED);
    }

    #[test]
    fn test_shadow_defaults_to_outer() {
        let shadow: Shadow = serde_json::from_str(r#"{"offset_y": 2, "blur_radius": 4}"#).unwrap();
        assert_eq!(shadow.kind, ShadowKind::Outer);
        assert_eq!(shadow.offset_y, 2.0);
    }
}
