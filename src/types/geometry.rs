//! Rectangles and pixel rounding.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in screen pixel space (y grows downwards).
///
/// Child rectangles share their parent's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (`x + width`).
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge (`y + height`).
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Inclusive point containment.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.right() && y >= self.y && y <= self.bottom()
    }
}

/// Round half-up (`floor(v + 0.5)`), so `-2.5` becomes `-2`.
pub fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

/// Round to two decimal places, half-up.
pub fn round2(v: f64) -> f64 {
    round_half_up(v * 100.0) / 100.0
}
