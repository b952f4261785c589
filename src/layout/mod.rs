//! Flow-layout inference from absolute geometry.
//!
//! The design source has no flex metadata, so padding, direction and gap are
//! reconstructed from the children's rectangles alone. Everything here is a
//! pure function of geometry: degenerate input yields some `LayoutInfo` or
//! `None`, never an error.

mod gaps;

use std::fmt;

use crate::types::{round_half_up, Layer, Rect};

pub use gaps::{order_children, sibling_gaps, GapAxis, SiblingGap};

/// Gaps below this (after rounding) mean siblings overlap on that axis.
/// Small negatives come from rounding and anti-aliasing and are tolerated.
pub const OVERLAP_TOLERANCE: f64 = -5.0;

/// Maximum deviation from the first gap for spacing to count as uniform.
pub const GAP_TOLERANCE: f64 = 2.0;

/// Primary flow axis of a container's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Row,
    Column,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Row => write!(f, "row"),
            Direction::Column => write!(f, "column"),
        }
    }
}

/// Distances from the children's bounding box to the parent edges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Padding {
    pub fn is_zero(&self) -> bool {
        self.top == 0.0 && self.right == 0.0 && self.bottom == 0.0 && self.left == 0.0
    }

    /// Whether the padding fits inside a `width` x `height` box.
    pub fn fits(&self, width: f64, height: f64) -> bool {
        self.left + self.right <= width && self.top + self.bottom <= height
    }
}

/// Inferred layout of one parent's direct children.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutInfo {
    pub padding: Padding,
    pub direction: Option<Direction>,
    /// Single spacing explaining every adjacent gap, when one exists.
    pub gap: Option<f64>,
}

/// Infer the layout of a layer's direct children.
pub fn infer_layout(parent: &Layer) -> Option<LayoutInfo> {
    let children: Vec<Rect> = parent.layers.iter().map(|l| l.rect).collect();
    infer(&parent.rect, &children)
}

/// Infer layout for `children` placed inside `parent`.
///
/// Returns `None` when there are no children. A single child yields padding
/// only. Direction is decided by which axis is free of overlap, with ties
/// broken by total extent; when both axes overlap the layout is
/// indeterminate and only padding is reported.
pub fn infer(parent: &Rect, children: &[Rect]) -> Option<LayoutInfo> {
    let padding = padding(parent, children)?;

    if children.len() == 1 {
        return Some(LayoutInfo {
            padding,
            direction: None,
            gap: None,
        });
    }

    let by_y = sorted_by(children, |r| r.y);
    let by_x = sorted_by(children, |r| r.x);

    let vertical_gaps = adjacent_gaps(&by_y, |r| r.y, Rect::bottom);
    let horizontal_gaps = adjacent_gaps(&by_x, |r| r.x, Rect::right);

    let vertical_overlap = has_overlap(&vertical_gaps);
    let horizontal_overlap = has_overlap(&horizontal_gaps);

    let (direction, candidates) = match (vertical_overlap, horizontal_overlap) {
        (false, true) => (Direction::Column, vertical_gaps),
        (true, false) => (Direction::Row, horizontal_gaps),
        (false, false) => {
            let vertical_span = span(&by_y, |r| r.y, Rect::bottom);
            let horizontal_span = span(&by_x, |r| r.x, Rect::right);
            if vertical_span >= horizontal_span {
                (Direction::Column, vertical_gaps)
            } else {
                (Direction::Row, horizontal_gaps)
            }
        }
        (true, true) => {
            return Some(LayoutInfo {
                padding,
                direction: None,
                gap: None,
            })
        }
    };

    Some(LayoutInfo {
        padding,
        direction: Some(direction),
        gap: uniform_gap(&candidates),
    })
}

fn padding(parent: &Rect, children: &[Rect]) -> Option<Padding> {
    let first = children.first()?;
    let (mut min_x, mut min_y) = (first.x, first.y);
    let (mut max_x, mut max_y) = (first.right(), first.bottom());

    for child in &children[1..] {
        min_x = min_x.min(child.x);
        min_y = min_y.min(child.y);
        max_x = max_x.max(child.right());
        max_y = max_y.max(child.bottom());
    }

    let clamp = |d: f64| round_half_up(d).max(0.0);

    Some(Padding {
        top: clamp(min_y - parent.y),
        right: clamp(parent.right() - max_x),
        bottom: clamp(parent.bottom() - max_y),
        left: clamp(min_x - parent.x),
    })
}

/// Stable sort by one edge.
pub(crate) fn sorted_by(rects: &[Rect], key: impl Fn(&Rect) -> f64) -> Vec<Rect> {
    let mut sorted = rects.to_vec();
    sorted.sort_by(|a, b| key(a).total_cmp(&key(b)));
    sorted
}

/// `next.start - current.end` for each adjacent pair, rounded.
pub(crate) fn adjacent_gaps(
    sorted: &[Rect],
    start: impl Fn(&Rect) -> f64,
    end: impl Fn(&Rect) -> f64,
) -> Vec<f64> {
    sorted
        .windows(2)
        .map(|pair| round_half_up(start(&pair[1]) - end(&pair[0])))
        .collect()
}

fn has_overlap(gaps: &[f64]) -> bool {
    gaps.iter().any(|&g| g < OVERLAP_TOLERANCE)
}

/// Last child's end minus first child's start, in sorted order.
fn span(sorted: &[Rect], start: impl Fn(&Rect) -> f64, end: impl Fn(&Rect) -> f64) -> f64 {
    match (sorted.first(), sorted.last()) {
        (Some(first), Some(last)) => end(last) - start(first),
        _ => 0.0,
    }
}

/// The first gap, if it is positive and every gap is within tolerance of it.
fn uniform_gap(gaps: &[f64]) -> Option<f64> {
    let first = *gaps.first()?;
    if first <= 0.0 {
        return None;
    }
    gaps.iter()
        .all(|g| (g - first).abs() <= GAP_TOLERANCE)
        .then_some(first)
}
