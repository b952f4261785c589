pub mod annotation;
pub mod clip;
pub mod completions;
pub mod download;
pub mod get;
pub mod list;
pub mod spec;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::api::ZeplinClient;
use crate::config::Config;
use crate::error::Result;
use crate::output::Printer;

/// zeplin-cli - Inspect Zeplin screens and export their assets
#[derive(Parser, Debug)]
#[command(name = "zeplin-cli")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Config file (default: ./zeplin.yaml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Screen commands
    #[command(subcommand)]
    Screen(ScreenCommands),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

#[derive(Subcommand, Debug)]
pub enum ScreenCommands {
    /// Show screen details, the full layer tree, assets and links
    Get(get::GetArgs),

    /// List a project's screens as JSON
    List(list::ListArgs),

    /// Print a compact CSS-style structural spec
    Spec(spec::SpecArgs),

    /// Download the screen's assets
    Download(download::DownloadArgs),

    /// Copy a top-level section's detail to the clipboard
    Clip(clip::ClipArgs),

    /// Find the section an annotation points at
    Annotation(annotation::AnnotationArgs),
}

/// Loaded configuration and the status printer, shared by commands.
pub struct Context {
    pub config: Config,
    pub printer: Printer,
}

impl Context {
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        Ok(Self {
            config: Config::discover(Path::new("."), config_path)?,
            printer: Printer::new(),
        })
    }

    pub fn client(&self) -> Result<ZeplinClient> {
        ZeplinClient::new(&self.config.api_url, &self.config.effective_token()?)
    }
}

pub fn run(cli: Cli) -> Result<()> {
    let command = match cli.command {
        Commands::Completions(args) => return completions::run(args),
        Commands::Screen(command) => command,
    };

    let ctx = Context::load(cli.config.as_deref())?;
    match command {
        ScreenCommands::Get(args) => get::run(args, &ctx),
        ScreenCommands::List(args) => list::run(args, &ctx),
        ScreenCommands::Spec(args) => spec::run(args, &ctx),
        ScreenCommands::Download(args) => download::run(args, &ctx),
        ScreenCommands::Clip(args) => clip::run(args, &ctx),
        ScreenCommands::Annotation(args) => annotation::run(args, &ctx),
    }
}
