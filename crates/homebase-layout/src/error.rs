use homebase_common::WidgetId;

use crate::slot::Slot;

/// Recoverable placement failures. None of these leave the engine in a
/// partially-updated state.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlacementError {
    #[error("all {slots} slots are occupied")]
    CapacityExhausted { slots: usize },

    #[error("unknown widget: {0}")]
    UnknownWidget(WidgetId),

    #[error("slot {0} is empty")]
    EmptySlot(Slot),

    #[error("slot {0} is not part of the current layout")]
    SlotNotInLayout(Slot),

    #[error("slot {0} is already occupied")]
    SlotOccupied(Slot),

    #[error("{widget} is not at slot {slot}")]
    NotAtSlot { widget: WidgetId, slot: Slot },
}
