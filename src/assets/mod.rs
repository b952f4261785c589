//! Asset pipeline: classify exportable assets, then download them.
//!
//! Classification is pure apart from the interactive density prompt, which
//! goes through the [`Chooser`] capability. Downloading goes through
//! [`Fetcher`] and [`ReEncoder`] so it can run against in-memory fakes.

pub mod chooser;
pub mod classify;
pub mod download;
pub mod encode;
pub mod naming;

pub use chooser::{Chooser, ScriptedChooser, TerminalChooser};
pub use classify::{classify_assets, prompt_for_density, select_content, ClassifiedAsset, Selection};
pub use download::{
    output_file_name, DownloadReport, Downloaded, Downloader, FailedDownload, Fetcher,
    ReencodeOptions,
};
pub use encode::{Codec, ImageReEncoder, ReEncoder};
pub use naming::{is_icon, sanitize_file_name, FileNames};
