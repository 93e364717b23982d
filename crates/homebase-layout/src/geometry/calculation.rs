//! Anchor calculation and nearest-slot search.

use homebase_common::types::{Dimensions, Point, Rect};

use crate::slot::{Corner, Slot, SlotLayout};

use super::SlotGeometry;

/// Top-left anchor of a widget placed in `corner`.
pub fn corner_position(
    corner: Corner,
    viewport: Dimensions,
    widget: Dimensions,
    padding: f64,
) -> Point {
    let right = viewport.width - widget.width - padding;
    let bottom = viewport.height - widget.height - padding;
    match corner {
        Corner::TopLeft => Point::new(padding, padding),
        Corner::TopRight => Point::new(right, padding),
        Corner::BottomRight => Point::new(right, bottom),
        Corner::BottomLeft => Point::new(padding, bottom),
    }
}

/// Height of one stacked box: the space below `top_offset`, minus the
/// padding around and between boxes, split evenly.
pub fn box_height(count: u8, top_offset: f64, viewport_height: f64, padding: f64) -> f64 {
    let count = count.max(1) as f64;
    let remaining = viewport_height - top_offset - padding * (count + 1.0);
    (remaining / count).max(0.0)
}

/// Top-left anchor of a widget placed in stacked box `index`.
pub fn box_position(
    index: u8,
    count: u8,
    top_offset: f64,
    viewport: Dimensions,
    widget: Dimensions,
    padding: f64,
) -> Point {
    let h = box_height(count, top_offset, viewport.height, padding);
    Point::new(
        viewport.width - widget.width - padding,
        top_offset + padding + index as f64 * (h + padding),
    )
}

/// The slot whose anchor is closest to `position`. On an exact tie the
/// slot enumerated first wins.
pub fn nearest_slot(position: Point, anchors: &[(Slot, Point)]) -> Option<Slot> {
    let mut best: Option<(Slot, f64)> = None;
    for (slot, anchor) in anchors {
        let d = position.distance_to(*anchor);
        match best {
            Some((_, best_d)) if d >= best_d => {}
            _ => best = Some((*slot, d)),
        }
    }
    best.map(|(slot, _)| slot)
}

impl SlotGeometry {
    /// Anchor of `slot` for a widget of the given size, or `None` if the
    /// slot does not belong to this layout.
    pub fn slot_position(&self, slot: Slot, viewport: Dimensions, widget: Dimensions) -> Option<Point> {
        match (self.layout, slot) {
            (SlotLayout::Corners, Slot::Corner(corner)) => {
                Some(corner_position(corner, viewport, widget, self.padding))
            }
            (SlotLayout::StackedBoxes { count, top_offset }, Slot::Box(index)) if index < count => {
                Some(box_position(index, count, top_offset, viewport, widget, self.padding))
            }
            _ => None,
        }
    }

    /// Anchors of every slot, in enumeration order.
    pub fn anchors(&self, viewport: Dimensions, widget: Dimensions) -> Vec<(Slot, Point)> {
        self.layout
            .slots()
            .into_iter()
            .filter_map(|slot| {
                self.slot_position(slot, viewport, widget)
                    .map(|p| (slot, p))
            })
            .collect()
    }

    /// Size a widget is drawn at. Stacked boxes cap the height at the box
    /// height so neighbouring boxes never overlap; corners keep the size.
    pub fn fitted_size(&self, viewport: Dimensions, widget: Dimensions) -> Dimensions {
        match self.layout {
            SlotLayout::Corners => widget,
            SlotLayout::StackedBoxes { count, top_offset } => {
                let h = box_height(count, top_offset, viewport.height, self.padding);
                Dimensions::new(widget.width, widget.height.min(h))
            }
        }
    }

    /// Full rect a widget of the given size occupies at `slot`.
    pub fn slot_rect(&self, slot: Slot, viewport: Dimensions, widget: Dimensions) -> Option<Rect> {
        let size = self.fitted_size(viewport, widget);
        self.slot_position(slot, viewport, size)
            .map(|origin| Rect::from_origin(origin, size))
    }

    pub fn nearest_slot(&self, position: Point, viewport: Dimensions, widget: Dimensions) -> Option<Slot> {
        nearest_slot(position, &self.anchors(viewport, widget))
    }
}
