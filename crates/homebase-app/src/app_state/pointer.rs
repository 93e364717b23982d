//! Pointer gestures: drag to move between slots, resize handle to change
//! height. Both only start in edit mode.

use homebase_common::types::{Point, WidgetId};
use homebase_layout::{PlacementCommand, PointerTarget};
use tracing::debug;

use crate::ipc::PointerRegion;

use super::core::OverlayApp;

impl OverlayApp {
    pub(super) fn pointer_down(
        &mut self,
        widget: WidgetId,
        pointer: Point,
        target: PointerTarget,
        region: PointerRegion,
    ) -> bool {
        if !self.overlay.can_edit() {
            debug!(%widget, "pointer-down ignored outside edit mode");
            return false;
        }
        let (Some(instance), Some(rect)) = (
            self.placement.widget(widget),
            self.placement.frame_of(widget, self.viewport),
        ) else {
            debug!(%widget, "pointer-down on unknown widget");
            return false;
        };
        let slot = instance.slot;
        let default_height = instance.default_dimensions.height;

        let started = match region {
            PointerRegion::Body => {
                self.pointer
                    .begin_drag(widget, slot, rect.origin(), pointer, target)
            }
            PointerRegion::ResizeHandle => self.pointer.begin_resize(
                widget,
                slot.vertical_anchor(),
                rect,
                pointer.y,
                default_height,
            ),
        };
        if started {
            debug!(%widget, ?region, "gesture started");
        }
        started
    }

    pub(super) fn pointer_move(&mut self, pointer: Point) -> bool {
        if let Some(widget) = self.pointer.drag().map(|d| d.widget) {
            let anchors = self.placement.anchors_for(widget, self.viewport);
            return self
                .pointer
                .drag_session()
                .update(pointer, &anchors)
                .is_some();
        }
        self.pointer.resize_session().update(pointer.y).is_some()
    }

    pub(super) fn pointer_up(&mut self, pointer: Point) -> bool {
        let handled = if let Some(widget) = self.pointer.drag().map(|d| d.widget) {
            let anchors = self.placement.anchors_for(widget, self.viewport);
            if let Some(release) = self.pointer.drag_session().end(pointer, &anchors) {
                self.placement.execute(PlacementCommand::Move {
                    from: release.from,
                    to: release.to,
                });
            }
            true
        } else if let Some(release) = self.pointer.resize_session().end(pointer.y) {
            self.placement.execute(PlacementCommand::Resize {
                id: release.widget,
                height: release.dimensions.height,
            });
            true
        } else {
            false
        };

        // Hover left during the gesture; hand the pointer back to the desktop.
        if handled && self.overlay.hover_depth() == 0 {
            self.set_passthrough(true);
        }
        handled
    }
}
