//! `screen annotation`: find the top-level section an annotation points at.
//!
//! Annotation positions are normalized to the screen size. The matched
//! section is the first top-level layer whose rect contains the pixel
//! point, edges included.

use clap::Args;

use crate::api::parse_screen_url;
use crate::error::Result;
use crate::render::{layer_detail, layer_title};
use crate::types::{round_half_up, Annotation, AnnotationPosition, Layer};

use super::Context;

/// Find the section an annotation points at
#[derive(Args, Debug)]
pub struct AnnotationArgs {
    /// Zeplin screen URL
    pub url: String,

    /// Text to search for in annotation content
    pub text: String,
}

pub fn run(args: AnnotationArgs, ctx: &Context) -> Result<()> {
    let screen_ref = parse_screen_url(&args.url)?;
    let client = ctx.client()?;

    let annotations = client.annotations(&screen_ref.project_id, &screen_ref.screen_id)?;
    let version = client.latest_version(&screen_ref.project_id, &screen_ref.screen_id)?;

    let matched = filter_annotations(&annotations, &args.text);
    println!("=== Annotation search ===");
    println!("Query: \"{}\"", args.text);
    println!("Matches: {}", matched.len());

    for (i, annotation) in matched.iter().enumerate() {
        let point = to_pixel(annotation.position, version.width, version.height);
        let section = find_root_layer_at(&version.layers, point);
        for line in match_report(i, annotation, point, section) {
            println!("{}", line);
        }
    }
    Ok(())
}

/// Annotations whose content contains `text`, ignoring case.
pub fn filter_annotations<'a>(annotations: &'a [Annotation], text: &str) -> Vec<&'a Annotation> {
    let needle = text.to_lowercase();
    annotations
        .iter()
        .filter(|a| a.content.to_lowercase().contains(&needle))
        .collect()
}

/// Normalized position to rounded screen pixels.
pub fn to_pixel(position: AnnotationPosition, width: f64, height: f64) -> (f64, f64) {
    (
        round_half_up(position.x * width),
        round_half_up(position.y * height),
    )
}

pub fn find_root_layer_at(layers: &[Layer], (x, y): (f64, f64)) -> Option<&Layer> {
    layers.iter().find(|layer| layer.rect.contains(x, y))
}

fn match_report(
    index: usize,
    annotation: &Annotation,
    (x, y): (f64, f64),
    section: Option<&Layer>,
) -> Vec<String> {
    let mut lines = vec![
        String::new(),
        format!("--- Annotation #{} ---", index + 1),
        format!("Content: \"{}\"", annotation.content),
        format!("Type: {}", annotation.kind.name),
        format!(
            "Position (normalized): ({}, {})",
            annotation.position.x, annotation.position.y
        ),
        format!("Position (pixels): ({}, {})", x, y),
        String::new(),
    ];

    match section {
        Some(layer) => {
            lines.push("Matched root layer:".to_string());
            lines.push(format!("  {}", layer_title(layer)));
            lines.extend(layer_detail(layer, "  "));
        }
        None => lines.push("Matched root layer: (none)".to_string()),
    }
    lines
}
