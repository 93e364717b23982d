use homebase_common::types::{WidgetId, WidgetKind};

use crate::slot::Slot;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlacementCommand {
    Add(WidgetKind),
    Delete(WidgetId),
    Move { from: Slot, to: Slot },
    Resize { id: WidgetId, height: f64 },
}
