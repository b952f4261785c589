//! Per-sibling spacing along an inferred direction.
//!
//! Used when a container has a direction but no uniform gap, so each
//! adjacent pair's spacing is reported on its own.

use std::fmt;

use crate::types::{round_half_up, Layer};

use super::Direction;

/// Axis a sibling gap is measured on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GapAxis {
    Vertical,
    Horizontal,
}

impl GapAxis {
    /// Arrow glyph used in rendered specs.
    pub fn symbol(self) -> char {
        match self {
            GapAxis::Vertical => '↕',
            GapAxis::Horizontal => '↔',
        }
    }
}

impl From<Direction> for GapAxis {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Column => GapAxis::Vertical,
            Direction::Row => GapAxis::Horizontal,
        }
    }
}

/// Spacing between two adjacent siblings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiblingGap {
    pub gap: f64,
    pub axis: GapAxis,
}

impl fmt::Display for SiblingGap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}px", self.axis.symbol(), self.gap)
    }
}

/// Children in flow order: by top edge for columns, left edge for rows,
/// input order when no direction was inferred.
pub fn order_children(children: &[Layer], direction: Option<Direction>) -> Vec<&Layer> {
    let mut ordered: Vec<&Layer> = children.iter().collect();
    match direction {
        Some(Direction::Column) => ordered.sort_by(|a, b| a.rect.y.total_cmp(&b.rect.y)),
        Some(Direction::Row) => ordered.sort_by(|a, b| a.rect.x.total_cmp(&b.rect.x)),
        None => {}
    }
    ordered
}

/// Gap between each pair of adjacent children in flow order.
///
/// Entry `i` is the spacing between ordered child `i` and `i + 1`.
pub fn sibling_gaps(children: &[Layer], direction: Direction) -> Vec<SiblingGap> {
    let ordered = order_children(children, Some(direction));
    let axis = GapAxis::from(direction);

    ordered
        .windows(2)
        .map(|pair| {
            let (current, next) = (&pair[0].rect, &pair[1].rect);
            let gap = match direction {
                Direction::Column => next.y - current.bottom(),
                Direction::Row => next.x - current.right(),
            };
            SiblingGap {
                gap: round_half_up(gap),
                axis,
            }
        })
        .collect()
}
