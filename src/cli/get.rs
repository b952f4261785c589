//! `screen get`: everything known about a screen.

use chrono::{DateTime, Local};
use clap::Args;

use crate::api::parse_screen_url;
use crate::error::Result;
use crate::render::{asset_list, layer_tree, link_list};
use crate::types::{Screen, ScreenVersion};

use super::Context;

const NONE: &str = "(none)";

/// Show screen details, the full layer tree, assets and links
#[derive(Args, Debug)]
pub struct GetArgs {
    /// Zeplin screen URL
    pub url: String,
}

pub fn run(args: GetArgs, ctx: &Context) -> Result<()> {
    let screen_ref = parse_screen_url(&args.url)?;
    let client = ctx.client()?;

    let screen = client.screen(&screen_ref.project_id, &screen_ref.screen_id)?;
    let version = client.latest_version(&screen_ref.project_id, &screen_ref.screen_id)?;

    for line in screen_report(&screen, &version) {
        println!("{}", line);
    }
    Ok(())
}

/// Local date-time for a Unix timestamp in seconds.
pub fn format_timestamp(secs: i64) -> String {
    DateTime::from_timestamp(secs, 0)
        .map(|utc| utc.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| secs.to_string())
}

fn or_none(value: Option<&str>) -> &str {
    value.filter(|v| !v.is_empty()).unwrap_or(NONE)
}

/// All sections of the report, in print order.
pub fn screen_report(screen: &Screen, version: &ScreenVersion) -> Vec<String> {
    let tags = if screen.tags.is_empty() {
        NONE.to_string()
    } else {
        screen.tags.join(", ")
    };

    let mut lines = vec![
        "=== Screen ===".to_string(),
        format!("Name: {}", screen.name),
        format!("Description: {}", or_none(screen.description.as_deref())),
        format!("ID: {}", screen.id),
        format!("Tags: {}", tags),
        format!("Section: {}", or_none(screen.section.as_ref().map(|s| s.id.as_str()))),
        format!("Created: {}", format_timestamp(screen.created)),
        format!(
            "Updated: {}",
            screen.updated.map_or_else(|| NONE.to_string(), format_timestamp)
        ),
        String::new(),
        "=== Latest version ===".to_string(),
        format!("Size: {} x {}", version.width, version.height),
        format!("Density: {}x", version.density_scale),
        format!(
            "Background: {}",
            version.background_color.map_or_else(|| NONE.to_string(), |c| c.to_string())
        ),
        format!("Layers: {}", version.layers.len()),
        format!("Assets: {}", version.assets.len()),
        format!("Links: {}", version.links.len()),
        String::new(),
        "=== Stats ===".to_string(),
        format!("Notes: {}", screen.number_of_notes),
        format!("Annotations: {}", screen.number_of_annotations),
        format!("Versions: {}", screen.number_of_versions),
    ];

    if !version.layers.is_empty() {
        lines.push(String::new());
        lines.push("=== Layers ===".to_string());
        lines.extend(layer_tree(&version.layers, ""));
    }
    if !version.assets.is_empty() {
        lines.push(String::new());
        lines.push("=== Assets ===".to_string());
        lines.extend(asset_list(&version.assets));
    }
    if !version.links.is_empty() {
        lines.push(String::new());
        lines.push("=== Links ===".to_string());
        lines.extend(link_list(&version.links));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Asset, AssetContent, AssetFormat, Layer, LayerKind, Rect};

    fn screen() -> Screen {
        serde_json::from_str(
            r#"{"id": "s1", "name": "Home", "tags": ["main", "v2"], "created": 1700000000,
                "number_of_notes": 2, "number_of_annotations": 1, "number_of_versions": 4}"#,
        )
        .unwrap()
    }

    fn version() -> ScreenVersion {
        serde_json::from_str(r#"{"width": 375, "height": 812, "density_scale": 2}"#).unwrap()
    }

    #[test]
    fn test_report_sections() {
        let lines = screen_report(&screen(), &version());

        assert!(lines.contains(&"Name: Home".to_string()));
        assert!(lines.contains(&"Description: (none)".to_string()));
        assert!(lines.contains(&"Tags: main, v2".to_string()));
        assert!(lines.contains(&"Updated: (none)".to_string()));
        assert!(lines.contains(&"Size: 375 x 812".to_string()));
        assert!(lines.contains(&"Density: 2x".to_string()));
        assert!(lines.contains(&"Versions: 4".to_string()));
        assert!(!lines.contains(&"=== Layers ===".to_string()));
        assert!(!lines.contains(&"=== Assets ===".to_string()));
    }

    #[test]
    fn test_report_includes_tree_and_assets() {
        let mut version = version();
        version.layers = vec![Layer::new(LayerKind::Group, "Header", Rect::new(0.0, 0.0, 375.0, 80.0))];
        version.assets = vec![Asset::new(
            "ic_close",
            vec![AssetContent::new("u", AssetFormat::Svg, None)],
        )];

        let lines = screen_report(&screen(), &version);
        assert!(lines.contains(&"=== Layers ===".to_string()));
        assert!(lines.iter().any(|l| l.contains("[group] Header")));
        assert!(lines.iter().any(|l| l.contains("[1] ic_close")));
    }

    #[test]
    fn test_format_timestamp_shape() {
        let formatted = format_timestamp(1_700_000_000);
        assert_eq!(formatted.len(), "2023-11-14 22:13:20".len());
        assert!(formatted.starts_with("2023-11-1"));
    }
}
