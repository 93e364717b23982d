//! Widget sizing configuration types.

use serde::{Deserialize, Serialize};

/// Default outer size of one widget kind, in pixels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct WidgetSize {
    pub width: u32,
    pub height: u32,
}

impl WidgetSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Widget sizing and resize behavior.
///
/// Each `[widgets.<kind>]` table may set `width`, `height`, both or
/// neither; missing fields fall back to that kind's default size.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "WidgetsConfigFile")]
pub struct WidgetsConfig {
    /// Resize height floor in pixels (valid range: 40-400).
    pub min_height: u32,
    /// Fraction of default height at or below which a widget renders
    /// compact / audio-only (valid range: 0.5-1.0).
    pub compact_threshold: f64,
    pub youtube: WidgetSize,
    pub spotify: WidgetSize,
    pub calendar: WidgetSize,
}

impl Default for WidgetsConfig {
    fn default() -> Self {
        Self {
            min_height: 100,
            compact_threshold: 0.9,
            youtube: WidgetSize::new(416, 360),
            spotify: WidgetSize::new(416, 240),
            calendar: WidgetSize::new(416, 380),
        }
    }
}

/// `[widgets]` as written in the file, before per-kind defaults apply.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WidgetsConfigFile {
    min_height: Option<u32>,
    compact_threshold: Option<f64>,
    youtube: WidgetSizeOverride,
    spotify: WidgetSizeOverride,
    calendar: WidgetSizeOverride,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WidgetSizeOverride {
    width: Option<u32>,
    height: Option<u32>,
}

impl WidgetSizeOverride {
    fn over(self, base: WidgetSize) -> WidgetSize {
        WidgetSize::new(
            self.width.unwrap_or(base.width),
            self.height.unwrap_or(base.height),
        )
    }
}

impl From<WidgetsConfigFile> for WidgetsConfig {
    fn from(file: WidgetsConfigFile) -> Self {
        let base = Self::default();
        Self {
            min_height: file.min_height.unwrap_or(base.min_height),
            compact_threshold: file.compact_threshold.unwrap_or(base.compact_threshold),
            youtube: file.youtube.over(base.youtube),
            spotify: file.spotify.over(base.spotify),
            calendar: file.calendar.over(base.calendar),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
