//! Exportable assets and their content variants.

use std::fmt;

use serde::{Deserialize, Serialize};

/// File format of an asset content variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetFormat {
    Svg,
    Pdf,
    Png,
    Jpg,
    Webp,
    #[serde(other)]
    Other,
}

impl AssetFormat {
    /// Vector formats carry no density.
    pub fn is_vector(self) -> bool {
        matches!(self, AssetFormat::Svg | AssetFormat::Pdf)
    }

    /// File extension for raw (not re-encoded) bytes of this format.
    pub fn extension(self) -> &'static str {
        match self {
            AssetFormat::Svg => "svg",
            AssetFormat::Pdf => "pdf",
            AssetFormat::Png => "png",
            AssetFormat::Jpg => "jpg",
            AssetFormat::Webp => "webp",
            AssetFormat::Other => "bin",
        }
    }
}

impl fmt::Display for AssetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetFormat::Other => write!(f, "other"),
            format => write!(f, "{}", format.extension()),
        }
    }
}

/// One concrete downloadable representation of an asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetContent {
    pub url: String,
    pub format: AssetFormat,
    /// Pixel-scale multiplier (`@2x`); absent for vector content.
    #[serde(default)]
    pub density: Option<f64>,
}

impl AssetContent {
    pub fn new(url: impl Into<String>, format: AssetFormat, density: Option<f64>) -> Self {
        Self {
            url: url.into(),
            format,
            density,
        }
    }

    /// Short description such as `svg` or `png @2x`.
    pub fn describe(&self) -> String {
        match self.density {
            Some(d) => format!("{} @{}x", self.format, d),
            None => self.format.to_string(),
        }
    }
}

/// An exportable asset. Display names are not guaranteed unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub display_name: String,

    #[serde(default)]
    pub layer_name: Option<String>,

    #[serde(default)]
    pub contents: Vec<AssetContent>,
}

impl Asset {
    pub fn new(display_name: impl Into<String>, contents: Vec<AssetContent>) -> Self {
        Self {
            display_name: display_name.into(),
            layer_name: None,
            contents,
        }
    }
}
