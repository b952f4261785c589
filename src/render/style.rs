//! Style value formatting shared by the spec and detail renderers.

use crate::layout::Padding;
use crate::types::{round2, round_half_up, Blur, Border, Colour, Fill, Gradient, GradientKind, Shadow, ShadowKind};

/// How colours are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColourStyle {
    /// `#RRGGBB` / `rgba(...)` with rounded alpha.
    Css,
    /// Always `rgba(r, g, b, a)`.
    Rgba,
}

impl ColourStyle {
    pub fn format(self, colour: Colour) -> String {
        match self {
            ColourStyle::Css => colour.css(),
            ColourStyle::Rgba => colour.to_string(),
        }
    }
}

pub fn format_gradient(gradient: &Gradient, style: ColourStyle) -> String {
    let stops = gradient
        .color_stops
        .iter()
        .map(|stop| {
            format!(
                "{} {}%",
                style.format(stop.color),
                round_half_up(stop.position * 100.0)
            )
        })
        .collect::<Vec<_>>()
        .join(", ");

    match gradient.kind.unwrap_or(GradientKind::Linear) {
        GradientKind::Linear => {
            format!("linear-gradient({}deg, {})", gradient.angle.unwrap_or(0.0), stops)
        }
        GradientKind::Radial => format!("radial-gradient({})", stops),
        _ => format!("angular-gradient({})", stops),
    }
}

/// Gradient, else colour, else the raw fill type; blend mode appended.
pub fn format_fill(fill: &Fill, style: ColourStyle) -> String {
    let mut result = match (&fill.gradient, fill.color) {
        (Some(gradient), _) if fill.kind == "gradient" => format_gradient(gradient, style),
        (_, Some(colour)) => style.format(colour),
        _ => fill.kind.clone(),
    };

    if let Some(mode) = fill.blend_mode.as_deref().filter(|m| *m != "normal") {
        result.push_str(&format!(" ({})", mode));
    }
    result
}

/// `<thickness>px <fill> <position>`.
pub fn format_border(border: &Border, style: ColourStyle) -> String {
    let thickness = border.thickness.unwrap_or(1.0);
    let fill = border
        .fill
        .as_ref()
        .map_or_else(|| "none".to_string(), |f| format_fill(f, style));
    let position = border.position.as_deref().unwrap_or("center");
    format!("{}px {} {}", thickness, fill, position)
}

/// CSS `box-shadow` value.
pub fn format_box_shadow(shadow: &Shadow, style: ColourStyle) -> String {
    let inset = if shadow.kind == ShadowKind::Inner { "inset " } else { "" };
    format!(
        "{}{}px {}px {}px {}px {}",
        inset,
        shadow.offset_x,
        shadow.offset_y,
        shadow.blur_radius,
        shadow.spread,
        shadow_colour(shadow, style)
    )
}

/// CSS `drop-shadow()` value (no spread, never inset).
pub fn format_drop_shadow(shadow: &Shadow, style: ColourStyle) -> String {
    format!(
        "{}px {}px {}px {}",
        shadow.offset_x,
        shadow.offset_y,
        shadow.blur_radius,
        shadow_colour(shadow, style)
    )
}

fn shadow_colour(shadow: &Shadow, style: ColourStyle) -> String {
    shadow
        .color
        .map_or_else(|| "transparent".to_string(), |c| style.format(c))
}

/// `blur: Npx` or `backdrop-blur: Npx`.
pub fn format_blur(blur: &Blur) -> String {
    let label = if blur.is_background() { "backdrop-blur" } else { "blur" };
    format!("{}: {}px", label, round2(blur.radius))
}

/// CSS padding shorthand, `None` when all sides are zero.
pub fn format_padding(padding: &Padding) -> Option<String> {
    if padding.is_zero() {
        return None;
    }
    let Padding {
        top,
        right,
        bottom,
        left,
    } = *padding;

    let shorthand = if top == bottom && left == right && top == left {
        format!("{}px", top)
    } else if top == bottom && left == right {
        format!("{}px {}px", top, right)
    } else if left == right {
        format!("{}px {}px {}px", top, right, bottom)
    } else {
        format!("{}px {}px {}px {}px", top, right, bottom, left)
    };
    Some(shorthand)
}
