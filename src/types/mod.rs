//! Core domain types for zeplin-cli.
//!
//! This module contains the read-only snapshot shapes served by the design API:
//! - `Layer` - one node of a screen's visual tree
//! - `Asset` - an exportable asset with format/density content variants
//! - `Screen` / `ScreenVersion` - screen metadata and its layer tree
//! - `Colour` / `Rect` - shared value types

mod asset;
mod colour;
mod geometry;
mod layer;
mod screen;

pub use asset::{Asset, AssetContent, AssetFormat};
pub use colour::Colour;
pub use geometry::{round2, round_half_up, Rect};
pub use layer::{
    Blur, BlurKind, Border, ColorStop, Fill, Gradient, GradientKind, Layer, LayerKind, Shadow,
    ShadowKind, TextStyle, TextStyleRun, UNNAMED,
};
pub use screen::{
    Annotation, AnnotationPosition, AnnotationType, Link, LinkDestination, Screen, ScreenVersion,
    SectionRef,
};
