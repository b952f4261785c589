//! Verbose layer tree renderer.
//!
//! Prints every layer with its full style details (fills, borders, shadows,
//! blur, text styles). Walks the whole tree with an explicit stack since
//! design files can nest arbitrarily deep.

use crate::types::{Asset, Layer, Link, ShadowKind, TextStyleRun};

use super::style::{format_blur, format_border, format_box_shadow, format_drop_shadow, format_fill, ColourStyle};

const RGBA: ColourStyle = ColourStyle::Rgba;

/// `[type] name (component: X)`.
pub fn layer_title(layer: &Layer) -> String {
    let component = layer
        .component_name
        .as_ref()
        .map(|c| format!(" (component: {})", c))
        .unwrap_or_default();
    format!("[{}] {}{}", layer.kind, layer.display_name(), component)
}

/// Detail lines for a single layer, each prefixed with `indent`.
pub fn layer_detail(layer: &Layer, indent: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut push = |line: String| lines.push(format!("{}{}", indent, line));
    let rect = &layer.rect;

    push(format!(
        "Position: ({}, {}) Size: {} x {}",
        rect.x, rect.y, rect.width, rect.height
    ));
    push(format!("Opacity: {}", layer.opacity));
    if let Some(mode) = &layer.blend_mode {
        push(format!("Blend mode: {}", mode));
    }
    if let Some(radius) = layer.border_radius {
        push(format!("Corner radius: {}", radius));
    }
    if let Some(rotation) = layer.rotation {
        push(format!("Rotation: {}°", rotation));
    }

    for fill in &layer.fills {
        push(format!("Fill: {}", format_fill(fill, RGBA)));
    }
    for border in &layer.borders {
        push(format!("Border: {}", format_border(border, RGBA)));
    }
    for shadow in &layer.shadows {
        push(format!("box-shadow: {}", format_box_shadow(shadow, RGBA)));
        if shadow.kind != ShadowKind::Inner {
            push(format!("drop-shadow: {}", format_drop_shadow(shadow, RGBA)));
        }
    }
    if let Some(blur) = &layer.blur {
        push(format_blur(blur));
    }

    if layer.is_text() {
        if let Some(content) = &layer.content {
            push(format!("Content: \"{}\"", content));
        }
        for run in &layer.text_styles {
            for line in text_style_lines(run) {
                push(line);
            }
        }
    }

    if layer.exportable {
        push("Exportable".to_string());
    }

    lines
}

fn text_style_lines(run: &TextStyleRun) -> Vec<String> {
    let Some(style) = &run.style else {
        return Vec::new();
    };

    let postscript = style.postscript_name.as_deref().unwrap_or("-");
    let line_height = style
        .line_height
        .map_or_else(|| "-".to_string(), |v| format!("{}px", v));
    let letter_spacing = style
        .letter_spacing
        .map_or_else(|| "-".to_string(), |v| format!("{}px", v));

    let mut lines = vec![
        "Text style:".to_string(),
        format!("  Font: {} ({})", style.font_family, postscript),
        format!("  Size: {}px / Weight: {}", style.font_size, style.font_weight),
        format!("  Line height: {} / Letter spacing: {}", line_height, letter_spacing),
    ];
    if let Some(align) = &style.text_align {
        lines.push(format!("  Align: {}", align));
    }
    if let Some(colour) = style.color {
        lines.push(format!("  Color: {}", colour));
    }
    lines
}

enum Frame<'a> {
    Layer {
        layer: &'a Layer,
        prefix: String,
        is_last: bool,
    },
    Separator(String),
}

/// Render sibling layers and all their descendants as a box-drawing tree.
pub fn layer_tree(layers: &[Layer], prefix: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut stack: Vec<Frame<'_>> = Vec::new();
    push_siblings(&mut stack, layers, prefix);

    while let Some(frame) = stack.pop() {
        let (layer, prefix, is_last) = match frame {
            Frame::Separator(prefix) => {
                lines.push(format!("{}│", prefix));
                continue;
            }
            Frame::Layer {
                layer,
                prefix,
                is_last,
            } => (layer, prefix, is_last),
        };

        let connector = if is_last { "└─" } else { "├─" };
        let child_prefix = if is_last {
            format!("{}    ", prefix)
        } else {
            format!("{}│   ", prefix)
        };

        lines.push(format!("{}{} {}", prefix, connector, layer_title(layer)));
        lines.extend(layer_detail(layer, &format!("{} ", child_prefix)));

        if !is_last && layer.has_children() {
            stack.push(Frame::Separator(prefix));
        }
        push_siblings(&mut stack, &layer.layers, &child_prefix);
    }

    lines
}

/// Push siblings in reverse so the first one pops first.
fn push_siblings<'a>(stack: &mut Vec<Frame<'a>>, layers: &'a [Layer], prefix: &str) {
    for (i, layer) in layers.iter().enumerate().rev() {
        stack.push(Frame::Layer {
            layer,
            prefix: prefix.to_string(),
            is_last: i + 1 == layers.len(),
        });
    }
}

/// A single layer and its subtree as standalone text.
pub fn format_subtree(layer: &Layer) -> String {
    let mut lines = vec![layer_title(layer)];
    lines.extend(layer_detail(layer, "  "));
    if layer.has_children() {
        lines.extend(layer_tree(&layer.layers, "  "));
    }
    lines.join("\n")
}

/// Numbered asset listing with content variant descriptions.
pub fn asset_list(assets: &[Asset]) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, asset) in assets.iter().enumerate() {
        let layer = asset
            .layer_name
            .as_ref()
            .map(|name| format!(" (layer: {})", name))
            .unwrap_or_default();
        lines.push(format!("  [{}] {}{}", i + 1, asset.display_name, layer));

        let contents: Vec<String> = asset.contents.iter().map(|c| c.describe()).collect();
        lines.push(format!("      {}", contents.join(", ")));
    }
    lines
}

/// Numbered hotspot link listing.
pub fn link_list(links: &[Link]) -> Vec<String> {
    links
        .iter()
        .enumerate()
        .map(|(i, link)| {
            let r = &link.rect;
            format!(
                "  [{}] ({}, {}) {}x{} -> \"{}\" ({})",
                i + 1,
                r.x,
                r.y,
                r.width,
                r.height,
                link.destination.name,
                link.destination.kind
            )
        })
        .collect()
}
