//! Slot geometry configuration.

use crate::slot::SlotLayout;

/// Computes slot anchors for a layout. Holds no viewport state: every
/// query takes the current viewport so anchors follow window resizes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotGeometry {
    pub layout: SlotLayout,
    /// Distance in pixels between a widget and the viewport edges.
    pub padding: f64,
}

impl SlotGeometry {
    pub const DEFAULT_PADDING: f64 = 20.0;

    pub fn new(layout: SlotLayout, padding: f64) -> Self {
        Self { layout, padding }
    }
}

impl Default for SlotGeometry {
    fn default() -> Self {
        Self {
            layout: SlotLayout::Corners,
            padding: Self::DEFAULT_PADDING,
        }
    }
}
