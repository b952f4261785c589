//! `screen spec`: compact structural spec of a screen.

use clap::Args;

use crate::api::parse_screen_url;
use crate::error::Result;
use crate::render::{filter_by_section, render_header, render_layers};
use crate::types::Layer;

use super::Context;

/// Print a compact CSS-style structural spec
#[derive(Args, Debug)]
pub struct SpecArgs {
    /// Zeplin screen URL
    pub url: String,

    /// Layer tree depth to print (default: config `depth`, else 3)
    #[arg(long)]
    pub depth: Option<usize>,

    /// Only print top-level layers whose name contains this text
    #[arg(long)]
    pub section: Option<String>,
}

pub fn run(args: SpecArgs, ctx: &Context) -> Result<()> {
    let screen_ref = parse_screen_url(&args.url)?;
    let client = ctx.client()?;

    let screen = client.screen(&screen_ref.project_id, &screen_ref.screen_id)?;
    let version = client.latest_version(&screen_ref.project_id, &screen_ref.screen_id)?;

    for line in render_header(&screen.name, &version) {
        println!("{}", line);
    }

    let layers: Vec<&Layer> = match &args.section {
        Some(section) => {
            let found = filter_by_section(&version.layers, section);
            if found.is_empty() {
                println!("No layer name contains \"{}\".", section);
                return Ok(());
            }
            found
        }
        None => version.layers.iter().collect(),
    };

    let depth = args.depth.unwrap_or(ctx.config.depth);
    println!("{}", render_layers(&layers, depth));
    Ok(())
}
