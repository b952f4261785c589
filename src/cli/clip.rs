//! `screen clip`: copy a top-level section's detail to the clipboard.
//!
//! Lists the direct children of the screen's root layer, then loops asking
//! for a number until 0 is entered or input closes.

use std::io::{self, BufRead, Write};

use clap::Args;

use crate::api::parse_screen_url;
use crate::error::Result;
use crate::output::Printer;
use crate::render::{format_subtree, layer_title};
use crate::types::{Layer, ScreenVersion};

use super::Context;

/// Copy a top-level section's detail to the clipboard
#[derive(Args, Debug)]
pub struct ClipArgs {
    /// Zeplin screen URL
    pub url: String,
}

/// One answer at the section prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipAnswer {
    Quit,
    /// 0-based section index.
    Section(usize),
    Invalid,
}

pub fn parse_answer(answer: &str, count: usize) -> ClipAnswer {
    match answer.trim().parse::<usize>() {
        Ok(0) => ClipAnswer::Quit,
        Ok(n) if n <= count => ClipAnswer::Section(n - 1),
        _ => ClipAnswer::Invalid,
    }
}

/// Direct children of the first root layer.
pub fn sections(version: &ScreenVersion) -> &[Layer] {
    version
        .layers
        .first()
        .map(|root| root.layers.as_slice())
        .unwrap_or_default()
}

pub fn run(args: ClipArgs, ctx: &Context) -> Result<()> {
    let screen_ref = parse_screen_url(&args.url)?;
    let client = ctx.client()?;
    let version = client.latest_version(&screen_ref.project_id, &screen_ref.screen_id)?;

    let sections = sections(&version);
    if sections.is_empty() {
        ctx.printer.info("Skipped", "root layer has no sections");
        return Ok(());
    }

    let root_name = version.layers.first().map_or("", |root| root.display_name());
    println!("\n=== {}: sections ===", root_name);
    for (i, section) in sections.iter().enumerate() {
        println!("  [{}] {}", i + 1, layer_title(section));
    }
    println!("  [0] Quit");

    let stdin = io::stdin();
    clip_loop(sections, stdin.lock(), &ctx.printer)
}

fn clip_loop<R: BufRead>(sections: &[Layer], mut input: R, printer: &Printer) -> Result<()> {
    loop {
        print!("\nSection number to copy: ");
        io::stdout().flush()?;

        let mut answer = String::new();
        if input.read_line(&mut answer)? == 0 {
            return Ok(());
        }

        match parse_answer(&answer, sections.len()) {
            ClipAnswer::Quit => return Ok(()),
            ClipAnswer::Invalid => {
                println!("Enter a number between 1 and {}, or 0 to quit.", sections.len());
            }
            ClipAnswer::Section(index) => {
                let section = &sections[index];
                match copy_to_clipboard(format_subtree(section)) {
                    Ok(()) => printer.status("Copied", &format!("\"{}\" to clipboard", section.display_name())),
                    Err(e) => printer.error("Failed", &format!("clipboard copy: {}", e)),
                }
            }
        }
    }
}

fn copy_to_clipboard(text: String) -> std::result::Result<(), arboard::Error> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{LayerKind, Rect};

    #[test]
    fn test_parse_answer() {
        assert_eq!(parse_answer("0\n", 3), ClipAnswer::Quit);
        assert_eq!(parse_answer(" 2 ", 3), ClipAnswer::Section(1));
        assert_eq!(parse_answer("3", 3), ClipAnswer::Section(2));
        assert_eq!(parse_answer("4", 3), ClipAnswer::Invalid);
        assert_eq!(parse_answer("two", 3), ClipAnswer::Invalid);
        assert_eq!(parse_answer("-1", 3), ClipAnswer::Invalid);
    }

    #[test]
    fn test_sections_are_root_children() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        let root = Layer::new(LayerKind::Group, "Root", rect).with_children(vec![
            Layer::new(LayerKind::Group, "Header", rect),
            Layer::new(LayerKind::Group, "Footer", rect),
        ]);
        let version = ScreenVersion {
            id: None,
            width: 10.0,
            height: 10.0,
            density_scale: 1.0,
            background_color: None,
            layers: vec![root],
            assets: vec![],
            links: vec![],
        };

        let names: Vec<&str> = sections(&version).iter().map(|l| l.display_name()).collect();
        assert_eq!(names, vec!["Header", "Footer"]);
    }

    #[test]
    fn test_quit_and_closed_input_end_loop() {
        let printer = Printer::new();
        assert!(clip_loop(&[], "0\n".as_bytes(), &printer).is_ok());
        assert!(clip_loop(&[], "".as_bytes(), &printer).is_ok());
        assert!(clip_loop(&[], "7\n0\n".as_bytes(), &printer).is_ok());
    }
}
