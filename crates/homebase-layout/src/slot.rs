//! The fixed set of positions a widget can occupy.
//!
//! Slots are never created or destroyed at runtime. A [`SlotLayout`]
//! decides which slots exist and in what canonical order they are
//! enumerated; that order drives both first-free placement and the
//! nearest-slot tie-break.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four screen corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl Corner {
    /// Canonical enumeration order.
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomRight,
        Corner::BottomLeft,
    ];
}

/// Which viewport edge a slot hugs vertically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAnchor {
    Top,
    Bottom,
}

/// A placement slot: a corner, or the n-th stacked box (0-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    Corner(Corner),
    Box(u8),
}

impl Slot {
    pub const TOP_LEFT: Slot = Slot::Corner(Corner::TopLeft);
    pub const TOP_RIGHT: Slot = Slot::Corner(Corner::TopRight);
    pub const BOTTOM_RIGHT: Slot = Slot::Corner(Corner::BottomRight);
    pub const BOTTOM_LEFT: Slot = Slot::Corner(Corner::BottomLeft);

    /// Bottom-anchored slots grow upward when resized.
    pub fn vertical_anchor(&self) -> VerticalAnchor {
        match self {
            Slot::Corner(Corner::BottomLeft | Corner::BottomRight) => VerticalAnchor::Bottom,
            Slot::Corner(_) | Slot::Box(_) => VerticalAnchor::Top,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Corner(Corner::TopLeft) => write!(f, "top-left"),
            Slot::Corner(Corner::TopRight) => write!(f, "top-right"),
            Slot::Corner(Corner::BottomRight) => write!(f, "bottom-right"),
            Slot::Corner(Corner::BottomLeft) => write!(f, "bottom-left"),
            Slot::Box(i) => write!(f, "box-{i}"),
        }
    }
}

/// Anchor strategy for the slot set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
#[derive(Default)]
pub enum SlotLayout {
    /// Four corners of the viewport.
    #[default]
    Corners,
    /// Up to [`SlotLayout::MAX_BOXES`] boxes stacked down the right edge,
    /// starting below `top_offset`.
    StackedBoxes { count: u8, top_offset: f64 },
}

impl SlotLayout {
    pub const MAX_BOXES: u8 = 3;

    /// Stacked layout with `count` clamped to `1..=MAX_BOXES`.
    pub fn stacked(count: u8, top_offset: f64) -> Self {
        SlotLayout::StackedBoxes {
            count: count.clamp(1, Self::MAX_BOXES),
            top_offset: top_offset.max(0.0),
        }
    }

    /// All slots in canonical enumeration order.
    pub fn slots(&self) -> Vec<Slot> {
        match self {
            SlotLayout::Corners => Corner::ALL.iter().copied().map(Slot::Corner).collect(),
            SlotLayout::StackedBoxes { count, .. } => (0..*count).map(Slot::Box).collect(),
        }
    }

    pub fn slot_count(&self) -> usize {
        match self {
            SlotLayout::Corners => Corner::ALL.len(),
            SlotLayout::StackedBoxes { count, .. } => *count as usize,
        }
    }

    pub fn contains(&self, slot: Slot) -> bool {
        match (self, slot) {
            (SlotLayout::Corners, Slot::Corner(_)) => true,
            (SlotLayout::StackedBoxes { count, .. }, Slot::Box(i)) => i < *count,
            _ => false,
        }
    }
}
