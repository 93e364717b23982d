//! Core types for slot occupancy.

use homebase_common::types::WidgetId;
use serde::{Deserialize, Serialize};

use crate::slot::{Slot, SlotLayout};

/// Authoritative slot → occupant map. Entries stay in the layout's
/// canonical order so scans for a free slot are deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotOccupancy {
    pub(super) entries: Vec<(Slot, Option<WidgetId>)>,
}

/// What a move did to the occupancy map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum MoveOutcome {
    /// Source and target were the same slot.
    Unchanged,
    /// The target was free.
    Moved,
    /// The target's occupant was moved into the source slot.
    Swapped { displaced: WidgetId },
}

impl SlotOccupancy {
    /// Empty occupancy for every slot of `layout`.
    pub fn new(layout: &SlotLayout) -> Self {
        Self {
            entries: layout.slots().into_iter().map(|s| (s, None)).collect(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.entries.len()
    }

    pub fn occupied_count(&self) -> usize {
        self.entries.iter().filter(|(_, w)| w.is_some()).count()
    }

    pub fn contains(&self, slot: Slot) -> bool {
        self.entries.iter().any(|(s, _)| *s == slot)
    }

    pub fn is_occupied(&self, slot: Slot) -> bool {
        self.occupant(slot).is_some()
    }

    pub fn occupant(&self, slot: Slot) -> Option<WidgetId> {
        self.entries
            .iter()
            .find(|(s, _)| *s == slot)
            .and_then(|(_, w)| *w)
    }

    /// Slot currently held by `widget`.
    pub fn slot_of(&self, widget: WidgetId) -> Option<Slot> {
        self.entries
            .iter()
            .find(|(_, w)| *w == Some(widget))
            .map(|(s, _)| *s)
    }

    /// First free slot in enumeration order.
    pub fn first_free(&self) -> Option<Slot> {
        self.entries
            .iter()
            .find(|(_, w)| w.is_none())
            .map(|(s, _)| *s)
    }

    /// Occupied slots in enumeration order.
    pub fn occupied(&self) -> impl Iterator<Item = (Slot, WidgetId)> + '_ {
        self.entries
            .iter()
            .filter_map(|(s, w)| w.map(|id| (*s, id)))
    }
}
