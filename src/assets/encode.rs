//! Raster re-encoding.
//!
//! Non-icon rasters are re-encoded before being written. The codec and
//! quality come from configuration; decoding and encoding go through the
//! `image` crate.

use std::fmt;
use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::codecs::webp::WebPEncoder;
use image::DynamicImage;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ZeplinError};

/// Target codec for re-encoded rasters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Codec {
    #[default]
    Webp,
    Png,
    Jpeg,
}

impl Codec {
    pub fn extension(self) -> &'static str {
        match self {
            Codec::Webp => "webp",
            Codec::Png => "png",
            Codec::Jpeg => "jpg",
        }
    }
}

impl fmt::Display for Codec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Re-encode raster bytes to another codec.
pub trait ReEncoder {
    /// `quality` is 1-100; codecs without a lossy mode ignore it.
    fn reencode(&self, bytes: &[u8], codec: Codec, quality: u8) -> Result<Vec<u8>>;
}

/// `image`-backed encoder. WebP output is lossless, so quality only
/// affects JPEG.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageReEncoder;

impl ReEncoder for ImageReEncoder {
    fn reencode(&self, bytes: &[u8], codec: Codec, quality: u8) -> Result<Vec<u8>> {
        let img = image::load_from_memory(bytes).map_err(|e| ZeplinError::Encode {
            message: format!("Failed to decode image: {}", e),
        })?;

        let mut out = Cursor::new(Vec::new());
        let encoded = match codec {
            Codec::Webp => DynamicImage::ImageRgba8(img.to_rgba8())
                .write_with_encoder(WebPEncoder::new_lossless(&mut out)),
            Codec::Png => img.write_with_encoder(PngEncoder::new(&mut out)),
            Codec::Jpeg => DynamicImage::ImageRgb8(img.to_rgb8())
                .write_with_encoder(JpegEncoder::new_with_quality(&mut out, quality.clamp(1, 100))),
        };
        encoded.map_err(|e| ZeplinError::Encode {
            message: format!("Failed to encode {}: {}", codec, e),
        })?;

        Ok(out.into_inner())
    }
}
