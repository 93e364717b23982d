//! Slot layout configuration types.

use serde::{Deserialize, Serialize};

/// How widget slots are arranged on screen.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum LayoutMode {
    /// Four screen corners.
    #[default]
    Corners,
    /// Boxes stacked down the right edge.
    Stacked,
}

/// Slot layout configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub mode: LayoutMode,
    /// Distance from widgets to the screen edges in pixels (valid range: 0-100).
    pub padding: u32,
    /// Number of stacked boxes (valid range: 1-3). Ignored in corner mode.
    pub box_count: u32,
    /// Space above the first stacked box in pixels (valid range: 0-400).
    pub top_offset: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            mode: LayoutMode::Corners,
            padding: 20,
            box_count: 3,
            top_offset: 60,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
