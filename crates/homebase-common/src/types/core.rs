use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn from_origin(origin: Point, size: Dimensions) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            width: size.width,
            height: size.height,
        }
    }

    pub fn origin(&self) -> Point {
        Point {
            x: self.x,
            y: self.y,
        }
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.x + self.width && p.y >= self.y && p.y <= self.bottom()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance between two points.
    pub fn distance_to(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Outer size of a widget or the viewport, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WidgetId(pub u32);

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "widget-{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetKind {
    Youtube,
    Spotify,
    Calendar,
}

impl WidgetKind {
    pub const ALL: [WidgetKind; 3] = [WidgetKind::Youtube, WidgetKind::Spotify, WidgetKind::Calendar];

    /// Label shown in the add-widget menu.
    pub fn label(&self) -> &'static str {
        match self {
            WidgetKind::Youtube => "YouTube Widget",
            WidgetKind::Spotify => "Spotify Widget",
            WidgetKind::Calendar => "Calendar Widget",
        }
    }

    /// Built-in outer size, used when config does not override it.
    pub fn default_dimensions(&self) -> Dimensions {
        match self {
            WidgetKind::Youtube => Dimensions::new(416.0, 360.0),
            WidgetKind::Spotify => Dimensions::new(416.0, 240.0),
            WidgetKind::Calendar => Dimensions::new(416.0, 380.0),
        }
    }
}

/// Rendering density of a widget, derived from its current height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeTier {
    Compact,
    Full,
}

impl SizeTier {
    /// Fraction of the default height at or below which a widget is compact.
    pub const DEFAULT_THRESHOLD: f64 = 0.9;

    pub fn from_height(height: f64, default_height: f64, threshold: f64) -> Self {
        if height <= default_height * threshold {
            SizeTier::Compact
        } else {
            SizeTier::Full
        }
    }

    /// Compact widgets hide their video surface and keep only controls.
    pub fn audio_only(&self) -> bool {
        matches!(self, SizeTier::Compact)
    }
}
