//! View computation and command dispatch for PlacementController.

use homebase_common::types::{Dimensions, Point, Rect, SizeTier, WidgetId, WidgetKind};
use serde::Serialize;
use tracing::debug;

use crate::commands::PlacementCommand;
use crate::slot::Slot;

use super::PlacementController;

/// Where and how one widget is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WidgetFrame {
    pub id: WidgetId,
    pub kind: WidgetKind,
    pub slot: Slot,
    pub rect: Rect,
    pub tier: SizeTier,
}

impl PlacementController {
    /// Execute a placement command. Returns `true` if state changed or the
    /// command was a valid no-op.
    pub fn execute(&mut self, cmd: PlacementCommand) -> bool {
        let result = match cmd {
            PlacementCommand::Add(kind) => self.add_widget(kind).map(|_| ()),
            PlacementCommand::Delete(id) => self.delete_widget(id).map(|_| ()),
            PlacementCommand::Move { from, to } => self.on_drag_end(from, to).map(|_| ()),
            PlacementCommand::Resize { id, height } => {
                let width = self.widget(id).map(|w| w.dimensions.width).unwrap_or_default();
                self.on_resize_finalized(id, Dimensions::new(width, height))
                    .map(|_| ())
            }
        };
        match result {
            Ok(()) => true,
            Err(e) => {
                debug!("placement command {cmd:?} rejected: {e}");
                false
            }
        }
    }

    /// Frames for every widget in slot enumeration order. A pure function
    /// of the widget set and `viewport`.
    pub fn compute_view(&self, viewport: Dimensions) -> Vec<WidgetFrame> {
        self.occupancy
            .occupied()
            .filter_map(|(slot, id)| {
                let w = self.widgets.get(&id)?;
                let rect = self.geometry.slot_rect(slot, viewport, w.dimensions)?;
                Some(WidgetFrame {
                    id,
                    kind: w.kind,
                    slot,
                    rect,
                    tier: SizeTier::from_height(
                        rect.height,
                        w.default_dimensions.height,
                        self.settings.compact_threshold,
                    ),
                })
            })
            .collect()
    }

    /// Current rect of one widget.
    pub fn frame_of(&self, id: WidgetId, viewport: Dimensions) -> Option<Rect> {
        let w = self.widgets.get(&id)?;
        self.geometry
            .slot_rect(w.slot, viewport, w.dimensions)
    }

    /// Slot anchors computed for this widget's own size, used as snap
    /// targets while it is dragged.
    pub fn anchors_for(&self, id: WidgetId, viewport: Dimensions) -> Vec<(Slot, Point)> {
        match self.widgets.get(&id) {
            Some(w) => self.geometry.anchors(viewport, w.dimensions),
            None => Vec::new(),
        }
    }
}
