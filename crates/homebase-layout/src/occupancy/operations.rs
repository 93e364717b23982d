//! Mutating operations on SlotOccupancy: assign, release, move.

use homebase_common::types::WidgetId;

use crate::error::PlacementError;
use crate::slot::Slot;

use super::{MoveOutcome, SlotOccupancy};

impl SlotOccupancy {
    fn entry_mut(&mut self, slot: Slot) -> Result<&mut Option<WidgetId>, PlacementError> {
        self.entries
            .iter_mut()
            .find(|(s, _)| *s == slot)
            .map(|(_, w)| w)
            .ok_or(PlacementError::SlotNotInLayout(slot))
    }

    /// Put `widget` into a free slot.
    pub fn assign(&mut self, slot: Slot, widget: WidgetId) -> Result<(), PlacementError> {
        let entry = self.entry_mut(slot)?;
        if entry.is_some() {
            return Err(PlacementError::SlotOccupied(slot));
        }
        *entry = Some(widget);
        Ok(())
    }

    /// Free a slot, returning its former occupant.
    pub fn release(&mut self, slot: Slot) -> Option<WidgetId> {
        self.entry_mut(slot).ok().and_then(|w| w.take())
    }

    /// Move `widget` from `from` to `to`. If `to` is held by another
    /// widget, that widget takes `from`; nothing is ever evicted.
    pub fn move_widget(
        &mut self,
        widget: WidgetId,
        from: Slot,
        to: Slot,
    ) -> Result<MoveOutcome, PlacementError> {
        if !self.contains(to) {
            return Err(PlacementError::SlotNotInLayout(to));
        }
        if self.occupant(from) != Some(widget) {
            if !self.contains(from) {
                return Err(PlacementError::SlotNotInLayout(from));
            }
            return Err(PlacementError::NotAtSlot { widget, slot: from });
        }
        if from == to {
            return Ok(MoveOutcome::Unchanged);
        }

        let displaced = self.occupant(to);
        *self.entry_mut(to)? = Some(widget);
        *self.entry_mut(from)? = displaced;

        Ok(match displaced {
            Some(displaced) => MoveOutcome::Swapped { displaced },
            None => MoveOutcome::Moved,
        })
    }
}
