use homebase_common::types::{Dimensions, SizeTier, WidgetId, WidgetKind};
use serde::{Deserialize, Serialize};

use crate::slot::Slot;

/// A widget placed on the overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetInstance {
    pub id: WidgetId,
    pub kind: WidgetKind,
    pub slot: Slot,
    /// Current outer size. Only a finalized resize changes it.
    pub dimensions: Dimensions,
    /// Size the widget was created with; the reference for its size tier.
    pub default_dimensions: Dimensions,
}

impl WidgetInstance {
    pub fn new(id: WidgetId, kind: WidgetKind, slot: Slot, default_dimensions: Dimensions) -> Self {
        Self {
            id,
            kind,
            slot,
            dimensions: default_dimensions,
            default_dimensions,
        }
    }

    /// Derived every time from the current height; never stored.
    pub fn size_tier(&self, threshold: f64) -> SizeTier {
        SizeTier::from_height(
            self.dimensions.height,
            self.default_dimensions.height,
            threshold,
        )
    }
}
