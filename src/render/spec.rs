//! Compact structural spec renderer.
//!
//! Walks a layer tree and emits one line per layer with its size, compact
//! style properties and inferred layout (padding, direction, gap), nested
//! with tree connectors. Children are ordered along the inferred flow, and
//! non-uniform spacing between siblings is annotated individually.

use crate::layout::{infer_layout, order_children, sibling_gaps, Direction, LayoutInfo};
use crate::types::{round2, round_half_up, Layer, ScreenVersion};

use super::style::{format_blur, format_border, format_box_shadow, format_fill, format_padding, ColourStyle};

/// Default number of nested levels printed below each top-level layer.
pub const DEFAULT_DEPTH: usize = 3;

/// Longest text content printed before truncation, in characters.
const MAX_TEXT_CHARS: usize = 100;

/// Header block: screen name, size, density and background.
pub fn render_header(screen_name: &str, version: &ScreenVersion) -> Vec<String> {
    let background = version
        .background_color
        .map_or_else(|| "none".to_string(), |c| c.css());

    vec![
        format!(
            "Screen: {} ({}×{}, @{}x)",
            screen_name, version.width, version.height, version.density_scale
        ),
        format!("Background: {}", background),
        "=".repeat(64),
        String::new(),
    ]
}

/// Render several top-level layers, separated by blank lines.
pub fn render_layers(layers: &[&Layer], max_depth: usize) -> String {
    let blocks: Vec<String> = layers
        .iter()
        .enumerate()
        .map(|(i, layer)| {
            let mut renderer = SpecRenderer::new(max_depth);
            renderer.layer(layer, 0, "", i + 1 == layers.len());
            renderer.finish().join("\n")
        })
        .collect();
    blocks.join("\n\n")
}

/// Line-collecting tree walker.
///
/// Recursion stops at `max_depth`, where the remaining subtree collapses
/// into a single `[...N children]` line, so stack depth stays bounded.
pub struct SpecRenderer {
    max_depth: usize,
    lines: Vec<String>,
}

impl SpecRenderer {
    pub fn new(max_depth: usize) -> Self {
        Self {
            max_depth,
            lines: Vec::new(),
        }
    }

    pub fn finish(self) -> Vec<String> {
        self.lines
    }

    pub fn layer(&mut self, layer: &Layer, depth: usize, prefix: &str, is_last: bool) {
        let connector = if is_last { "└" } else { "├" };
        let child_prefix = if is_last {
            format!("{}  ", prefix)
        } else {
            format!("{}│ ", prefix)
        };

        let layout = infer_layout(layer);

        let mut header = vec![format!("[{}]{}", layer.display_name(), size_suffix(layer))];
        if let Some(props) = compact_props(layer) {
            header.push(props);
        }
        if let Some(info) = &layout {
            header.extend(layout_parts(layer, info));
        }
        self.lines
            .push(format!("{}{} {}", prefix, connector, header.join(" | ")));

        if layer.is_text() {
            if let Some(font) = compact_text(layer) {
                self.lines.push(format!("{}  {}", child_prefix, font));
            }
            if let Some(content) = &layer.content {
                self.lines
                    .push(format!("{}  text: {}", child_prefix, quote_text(content)));
            }
        }

        if !layer.has_children() {
            return;
        }

        if depth >= self.max_depth {
            self.lines.push(format!(
                "{}  [...{} children]",
                child_prefix,
                layer.layers.len()
            ));
            return;
        }

        let direction = layout.and_then(|info| info.direction);
        let uniform = layout.and_then(|info| info.gap).is_some();
        let gaps = match direction {
            Some(direction) if !uniform => sibling_gaps(&layer.layers, direction),
            _ => Vec::new(),
        };

        let children = order_children(&layer.layers, direction);
        for (i, child) in children.iter().enumerate() {
            let child_is_last = i + 1 == children.len();
            self.layer(child, depth + 1, &child_prefix, child_is_last);

            if child_is_last {
                continue;
            }
            if let Some(gap) = gaps.get(i).filter(|g| g.gap != 0.0) {
                self.lines.push(format!("{}│", child_prefix));
                self.lines.push(format!("{}│ {}", child_prefix, gap));
                self.lines.push(format!("{}│", child_prefix));
            }
        }
    }
}

fn size_suffix(layer: &Layer) -> String {
    let size = format!(
        "{}×{}",
        round_half_up(layer.rect.width),
        round_half_up(layer.rect.height)
    );
    if layer.is_text() {
        format!(" text {}", size)
    } else {
        format!(" {}", size)
    }
}

fn compact_props(layer: &Layer) -> Option<String> {
    let css = ColourStyle::Css;
    let mut parts = Vec::new();

    if !layer.fills.is_empty() {
        let fills: Vec<String> = layer.fills.iter().map(|f| format_fill(f, css)).collect();
        parts.push(format!("bg: {}", fills.join(", ")));
    }
    if let Some(radius) = layer.border_radius.filter(|r| *r > 0.0) {
        parts.push(format!("rounded: {}px", round2(radius)));
    }
    if !layer.borders.is_empty() {
        let borders: Vec<String> = layer.borders.iter().map(|b| format_border(b, css)).collect();
        parts.push(format!("border: {}", borders.join(", ")));
    }
    if !layer.shadows.is_empty() {
        let shadows: Vec<String> = layer
            .shadows
            .iter()
            .map(|s| format_box_shadow(s, css))
            .collect();
        parts.push(format!("shadow: {}", shadows.join(", ")));
    }
    if layer.opacity != 1.0 {
        parts.push(format!("opacity: {}", round2(layer.opacity)));
    }
    if let Some(blur) = &layer.blur {
        parts.push(format_blur(blur));
    }

    (!parts.is_empty()).then(|| parts.join(" | "))
}

fn layout_parts(layer: &Layer, info: &LayoutInfo) -> Vec<String> {
    let mut parts = Vec::new();

    if info.padding.fits(layer.rect.width, layer.rect.height) {
        if let Some(padding) = format_padding(&info.padding) {
            parts.push(format!("pad: {}", padding));
        }
    }
    match info.direction {
        Some(Direction::Column) => parts.push("col".to_string()),
        Some(Direction::Row) => parts.push("row".to_string()),
        None => {}
    }
    if let Some(gap) = info.gap.filter(|g| *g > 0.0) {
        parts.push(format!("gap: {}px", gap));
    }
    parts
}

/// First text style run as `font: <family> <weight> <size>px[/<lh>px] | ...`.
fn compact_text(layer: &Layer) -> Option<String> {
    let style = layer.text_styles.first()?.style.as_ref()?;
    let mut parts = Vec::new();

    let line_height = style
        .line_height
        .map(|lh| format!("/{}px", lh))
        .unwrap_or_default();
    parts.push(format!(
        "font: {} {} {}px{}",
        style.font_family, style.font_weight, style.font_size, line_height
    ));

    if let Some(colour) = style.color {
        parts.push(format!("color: {}", colour.css()));
    }
    if let Some(spacing) = style.letter_spacing.filter(|s| *s != 0.0) {
        parts.push(format!("ls: {}px", spacing));
    }
    if let Some(align) = &style.text_align {
        parts.push(format!("align: {}", align));
    }

    Some(parts.join(" | "))
}

/// Quote text content, escaping newlines and truncating long strings.
fn quote_text(content: &str) -> String {
    let escaped = content.replace('\n', "\\n");
    if escaped.chars().count() > MAX_TEXT_CHARS {
        let head: String = escaped.chars().take(MAX_TEXT_CHARS - 3).collect();
        format!("\"{}...\"", head)
    } else {
        format!("\"{}\"", escaped)
    }
}

/// Top-level layers whose name contains `section` (case-insensitive),
/// falling back to matching their direct children.
pub fn filter_by_section<'a>(layers: &'a [Layer], section: &str) -> Vec<&'a Layer> {
    let needle = section.to_lowercase();
    let matches = |layer: &Layer| {
        layer
            .name
            .as_deref()
            .is_some_and(|name| name.to_lowercase().contains(&needle))
    };

    let top: Vec<&Layer> = layers.iter().filter(|l| matches(l)).collect();
    if !top.is_empty() {
        return top;
    }

    layers
        .iter()
        .flat_map(|l| l.layers.iter())
        .filter(|l| matches(l))
        .collect()
}
