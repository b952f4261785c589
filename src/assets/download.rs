//! Download orchestration.
//!
//! Fetches each classified asset in order and writes it to the output
//! directory. Vector content and raster icons are written as fetched; other
//! rasters are re-encoded first. A failure for one asset is recorded and the
//! loop moves on.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, ZeplinError};
use crate::output::Printer;

use super::classify::ClassifiedAsset;
use super::encode::{Codec, ReEncoder};

/// Fetch the bytes behind a content reference.
pub trait Fetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

/// Codec and quality for re-encoded rasters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReencodeOptions {
    pub codec: Codec,
    pub quality: u8,
}

impl Default for ReencodeOptions {
    fn default() -> Self {
        Self {
            codec: Codec::Webp,
            quality: 80,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Downloaded {
    pub file_name: String,
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FailedDownload {
    pub file_name: String,
    pub error: String,
}

/// Per-run outcome, both lists in asset order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DownloadReport {
    pub success: Vec<Downloaded>,
    pub failed: Vec<FailedDownload>,
}

impl DownloadReport {
    pub fn total(&self) -> usize {
        self.success.len() + self.failed.len()
    }
}

/// True when the fetched bytes go to disk untouched.
fn is_written_raw(asset: &ClassifiedAsset) -> bool {
    asset.format.is_vector() || asset.is_icon
}

/// Output file name: the unique base name plus the extension of what is
/// actually written.
pub fn output_file_name(asset: &ClassifiedAsset, options: &ReencodeOptions) -> String {
    let extension = if is_written_raw(asset) {
        asset.format.extension()
    } else {
        options.codec.extension()
    };
    format!("{}.{}", asset.file_name, extension)
}

/// Runs the fetch / re-encode / write loop.
pub struct Downloader<F, E> {
    fetcher: F,
    encoder: E,
    options: ReencodeOptions,
}

impl<F: Fetcher, E: ReEncoder> Downloader<F, E> {
    pub fn new(fetcher: F, encoder: E, options: ReencodeOptions) -> Self {
        Self {
            fetcher,
            encoder,
            options,
        }
    }

    /// Download every asset into `output_dir`.
    ///
    /// Only failing to create `output_dir` is an error; per-asset failures
    /// end up in the report.
    pub fn download_all(
        &self,
        assets: &[ClassifiedAsset],
        output_dir: &Path,
        printer: &Printer,
    ) -> Result<DownloadReport> {
        fs::create_dir_all(output_dir).map_err(|e| ZeplinError::Io {
            path: output_dir.to_path_buf(),
            message: format!("Failed to create output directory: {}", e),
        })?;

        let mut report = DownloadReport::default();

        for asset in assets {
            let file_name = output_file_name(asset, &self.options);
            let path = output_dir.join(&file_name);

            match self.download_one(asset, &path) {
                Ok(()) => {
                    printer.status(
                        "Downloaded",
                        &format!("{} {}", file_name, printer.dim(&format!("({})", asset.content.describe()))),
                    );
                    report.success.push(Downloaded { file_name, path });
                }
                Err(e) => {
                    printer.error("Failed", &format!("{}: {}", file_name, e));
                    report.failed.push(FailedDownload {
                        file_name,
                        error: e.to_string(),
                    });
                }
            }
        }

        Ok(report)
    }

    fn download_one(&self, asset: &ClassifiedAsset, path: &Path) -> Result<()> {
        let bytes = self.fetcher.fetch(&asset.content.url)?;

        let bytes = if is_written_raw(asset) {
            bytes
        } else {
            self.encoder
                .reencode(&bytes, self.options.codec, self.options.quality)?
        };

        fs::write(path, bytes).map_err(|e| ZeplinError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to write asset: {}", e),
        })
    }
}
