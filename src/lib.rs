//! zeplin-cli - Zeplin screen inspection and asset export
//!
//! Turns Zeplin screens into compact structural specs with inferred layout
//! (padding, flow direction, gap), and classifies and downloads a screen's
//! exportable assets.

pub mod api;
pub mod assets;
pub mod cli;
pub mod config;
pub mod error;
pub mod layout;
pub mod output;
pub mod render;
pub mod types;

pub use api::{parse_screen_url, HttpFetcher, ScreenRef, ZeplinClient};
pub use assets::{
    classify_assets, Chooser, ClassifiedAsset, Codec, DownloadReport, Downloader, Fetcher,
    FileNames, ImageReEncoder, ReEncoder, ReencodeOptions,
};
pub use config::Config;
pub use error::{Result, ZeplinError};
pub use layout::{infer, infer_layout, Direction, LayoutInfo, Padding};
pub use render::{render_header, render_layers};
pub use types::{Asset, AssetContent, AssetFormat, Colour, Layer, LayerKind, Rect, Screen, ScreenVersion};
