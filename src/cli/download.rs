//! `screen download`: classify a screen's assets and write them to disk.

use std::path::PathBuf;

use clap::Args;

use crate::api::{parse_screen_url, HttpFetcher};
use crate::assets::{classify_assets, Downloader, FileNames, ImageReEncoder, TerminalChooser};
use crate::error::Result;
use crate::output::{display_path, plural};

use super::Context;

/// Download the screen's assets
#[derive(Args, Debug)]
pub struct DownloadArgs {
    /// Zeplin screen URL
    pub url: String,

    /// Output directory (default: config `output`, else ./assets)
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

pub fn run(args: DownloadArgs, ctx: &Context) -> Result<()> {
    let printer = &ctx.printer;
    let screen_ref = parse_screen_url(&args.url)?;
    let output_dir = args.output.unwrap_or_else(|| ctx.config.output.clone());

    printer.status("Fetching", &format!("screen {}", screen_ref.screen_id));
    let client = ctx.client()?;
    let version = client.latest_version(&screen_ref.project_id, &screen_ref.screen_id)?;

    if version.assets.is_empty() {
        printer.info("Skipped", "screen has no assets");
        return Ok(());
    }

    printer.status("Classifying", &plural(version.assets.len(), "asset", "assets"));
    let mut names = FileNames::new();
    let mut chooser = TerminalChooser::stdio();
    let classified = classify_assets(&version.assets, &mut names, &mut chooser)?;

    if classified.is_empty() {
        printer.info("Skipped", "no asset has a downloadable format");
        return Ok(());
    }

    printer.status(
        "Downloading",
        &format!(
            "{} to {}",
            plural(classified.len(), "asset", "assets"),
            printer.cyan(&display_path(&output_dir))
        ),
    );
    let downloader = Downloader::new(HttpFetcher::new()?, ImageReEncoder, ctx.config.reencode);
    let report = downloader.download_all(&classified, &output_dir, printer)?;

    if report.failed.is_empty() {
        printer.status("Finished", &plural(report.success.len(), "asset", "assets"));
    } else {
        printer.warning(
            "Finished",
            &format!(
                "{} downloaded, {} failed",
                report.success.len(),
                report.failed.len()
            ),
        );
    }
    Ok(())
}
