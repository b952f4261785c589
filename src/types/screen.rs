//! Screen, version, annotation and link records.

use serde::{Deserialize, Serialize};

use super::{Asset, Colour, Layer, Rect};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Screen {
    pub id: String,
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub section: Option<SectionRef>,

    /// Unix timestamp in seconds.
    #[serde(default)]
    pub created: i64,

    #[serde(default)]
    pub updated: Option<i64>,

    #[serde(default)]
    pub number_of_notes: u32,

    #[serde(default)]
    pub number_of_annotations: u32,

    #[serde(default)]
    pub number_of_versions: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionRef {
    pub id: String,
}

/// One version of a screen: the layer tree plus its exportable assets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenVersion {
    #[serde(default)]
    pub id: Option<String>,

    pub width: f64,
    pub height: f64,

    #[serde(default = "unit_density")]
    pub density_scale: f64,

    #[serde(default)]
    pub background_color: Option<Colour>,

    #[serde(default)]
    pub layers: Vec<Layer>,

    #[serde(default)]
    pub assets: Vec<Asset>,

    #[serde(default)]
    pub links: Vec<Link>,
}

fn unit_density() -> f64 {
    1.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub rect: Rect,
    pub destination: LinkDestination,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkDestination {
    #[serde(default)]
    pub name: String,

    #[serde(rename = "type", default)]
    pub kind: String,
}

/// A note pinned to a screen at a normalized (0-1) position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    #[serde(default)]
    pub id: Option<String>,

    pub content: String,

    #[serde(rename = "type")]
    pub kind: AnnotationType,

    pub position: AnnotationPosition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationType {
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnnotationPosition {
    pub x: f64,
    pub y: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_version() {
        let json = r#"{
            "width": 375, "height": 812, "density_scale": 2,
            "background_color": {"r": 255, "g": 255, "b": 255, "a": 1},
            "layers": [], "assets": [],
            "links": [{"rect": {"x": 0, "y": 0, "width": 10, "height": 10},
                       "destination": {"name": "Home", "type": "screen"}}]
        }"#;
        let version: ScreenVersion = serde_json::from_str(json).unwrap();
        assert_eq!(version.density_scale, 2.0);
        assert_eq!(version.background_color, Some(Colour::WHITE));
        assert_eq!(version.links[0].destination.kind, "screen");
    }

    #[test]
    fn test_deserialize_annotation() {
        let json = r#"{"content": "Hero banner", "type": {"name": "Note"},
                       "position": {"x": 0.5, "y": 0.25}}"#;
        let annotation: Annotation = serde_json::from_str(json).unwrap();
        assert_eq!(annotation.kind.name, "Note");
        assert_eq!(annotation.position.y, 0.25);
    }
}
