//! Rendering module for zeplin-cli.
//!
//! This module turns layer trees into line-oriented text: the compact
//! structural spec, the verbose detail tree, and asset/link listings. All
//! renderers return lines; callers decide where they are written.

pub mod detail;
pub mod spec;
pub mod style;

pub use detail::{asset_list, format_subtree, layer_detail, layer_title, layer_tree, link_list};
pub use spec::{filter_by_section, render_header, render_layers, SpecRenderer, DEFAULT_DEPTH};
pub use style::ColourStyle;
