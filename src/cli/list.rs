//! `screen list`: a project's screens as pretty JSON on stdout.

use clap::Args;

use crate::error::{Result, ZeplinError};

use super::Context;

/// List a project's screens
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Project ID
    #[arg(long = "project-id", short = 'p')]
    pub project_id: String,

    /// Maximum number of screens to return
    #[arg(long, short)]
    pub limit: Option<u32>,

    /// Pagination offset
    #[arg(long)]
    pub offset: Option<u32>,
}

pub fn run(args: ListArgs, ctx: &Context) -> Result<()> {
    let client = ctx.client()?;
    let screens = client.project_screens(&args.project_id, args.limit, args.offset)?;

    let json = serde_json::to_string_pretty(&screens).map_err(|e| ZeplinError::Parse {
        message: format!("Failed to format screen list: {}", e),
        help: None,
    })?;
    println!("{}", json);
    Ok(())
}
