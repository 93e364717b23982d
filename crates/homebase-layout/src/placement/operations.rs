//! Add, delete, drop and resize operations on the PlacementController.

use homebase_common::types::{Dimensions, SizeTier, WidgetId, WidgetKind};
use tracing::{debug, info};

use crate::error::PlacementError;
use crate::occupancy::MoveOutcome;
use crate::resize::snap_height;
use crate::slot::Slot;
use crate::widget::WidgetInstance;

use super::PlacementController;

impl PlacementController {
    /// Place a new widget in the first free slot. Fails without touching
    /// any state when every slot is taken.
    pub fn add_widget(&mut self, kind: WidgetKind) -> Result<WidgetId, PlacementError> {
        let exhausted = PlacementError::CapacityExhausted {
            slots: self.occupancy.capacity(),
        };
        let slot = self.occupancy.first_free().ok_or(exhausted.clone())?;
        let id = self.lowest_free_id().ok_or(exhausted)?;

        self.occupancy.assign(slot, id)?;
        let dims = self.settings.default_dimensions(kind);
        self.widgets
            .insert(id, WidgetInstance::new(id, kind, slot, dims));

        info!(%id, ?kind, %slot, "widget added");
        Ok(id)
    }

    /// Remove a widget, freeing its slot and id. Other ids are untouched.
    pub fn delete_widget(&mut self, id: WidgetId) -> Result<WidgetInstance, PlacementError> {
        let widget = self
            .widgets
            .remove(&id)
            .ok_or(PlacementError::UnknownWidget(id))?;
        self.occupancy.release(widget.slot);
        info!(%id, slot = %widget.slot, "widget deleted");
        Ok(widget)
    }

    /// Commit a drop of whatever occupies `from` onto `to`. An occupied
    /// target swaps; dropping on the origin is a no-op.
    pub fn on_drag_end(&mut self, from: Slot, to: Slot) -> Result<MoveOutcome, PlacementError> {
        let id = self
            .occupancy
            .occupant(from)
            .ok_or(PlacementError::EmptySlot(from))?;
        let outcome = self.occupancy.move_widget(id, from, to)?;

        match outcome {
            MoveOutcome::Unchanged => {
                debug!(%id, %from, "drop on origin slot");
            }
            MoveOutcome::Moved => {
                self.set_slot(id, to);
                info!(%id, %from, %to, "widget moved");
            }
            MoveOutcome::Swapped { displaced } => {
                self.set_slot(id, to);
                self.set_slot(displaced, from);
                info!(%id, %displaced, %from, %to, "widgets swapped");
            }
        }
        Ok(outcome)
    }

    /// Move a widget by id to `to`, with the same semantics as a drop.
    pub fn move_widget(&mut self, id: WidgetId, to: Slot) -> Result<MoveOutcome, PlacementError> {
        let from = self
            .widgets
            .get(&id)
            .map(|w| w.slot)
            .ok_or(PlacementError::UnknownWidget(id))?;
        self.on_drag_end(from, to)
    }

    /// Store the finalized height of a resize. The height is snapped to the
    /// half or full default tier and never drops below the floor. Width is
    /// never changed. Returns the new size tier.
    pub fn on_resize_finalized(
        &mut self,
        id: WidgetId,
        dims: Dimensions,
    ) -> Result<SizeTier, PlacementError> {
        let threshold = self.settings.compact_threshold;
        let min_height = self.settings.min_height;
        let widget = self
            .widgets
            .get_mut(&id)
            .ok_or(PlacementError::UnknownWidget(id))?;
        let height = snap_height(dims.height, widget.default_dimensions.height);
        widget.dimensions.height = height.max(min_height);
        let tier = widget.size_tier(threshold);
        info!(%id, height = widget.dimensions.height, ?tier, "resize finalized");
        Ok(tier)
    }

    fn set_slot(&mut self, id: WidgetId, slot: Slot) {
        if let Some(w) = self.widgets.get_mut(&id) {
            w.slot = slot;
        }
    }
}
