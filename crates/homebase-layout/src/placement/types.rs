//! Core types and constructors for PlacementController.

use std::collections::BTreeMap;

use homebase_common::types::{Dimensions, SizeTier, WidgetId, WidgetKind};

use crate::geometry::SlotGeometry;
use crate::occupancy::SlotOccupancy;
use crate::resize::ResizeLimits;
use crate::slot::SlotLayout;
use crate::widget::WidgetInstance;

/// Sizes and thresholds the controller applies to new and resized widgets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementSettings {
    pub padding: f64,
    pub min_height: f64,
    pub compact_threshold: f64,
    pub youtube: Dimensions,
    pub spotify: Dimensions,
    pub calendar: Dimensions,
}

impl PlacementSettings {
    pub fn default_dimensions(&self, kind: WidgetKind) -> Dimensions {
        match kind {
            WidgetKind::Youtube => self.youtube,
            WidgetKind::Spotify => self.spotify,
            WidgetKind::Calendar => self.calendar,
        }
    }

    pub fn resize_limits(&self) -> ResizeLimits {
        ResizeLimits {
            min_height: self.min_height,
            compact_threshold: self.compact_threshold,
        }
    }
}

impl Default for PlacementSettings {
    fn default() -> Self {
        Self {
            padding: SlotGeometry::DEFAULT_PADDING,
            min_height: 100.0,
            compact_threshold: SizeTier::DEFAULT_THRESHOLD,
            youtube: WidgetKind::Youtube.default_dimensions(),
            spotify: WidgetKind::Spotify.default_dimensions(),
            calendar: WidgetKind::Calendar.default_dimensions(),
        }
    }
}

/// Owns every widget on the overlay, the slot each one holds, and its
/// dimensions. The only writer of slot occupancy.
#[derive(Debug, Clone)]
pub struct PlacementController {
    pub(super) geometry: SlotGeometry,
    pub(super) settings: PlacementSettings,
    pub(super) occupancy: SlotOccupancy,
    pub(super) widgets: BTreeMap<WidgetId, WidgetInstance>,
}

impl PlacementController {
    pub fn new(layout: SlotLayout, settings: PlacementSettings) -> Self {
        Self {
            geometry: SlotGeometry::new(layout, settings.padding),
            occupancy: SlotOccupancy::new(&layout),
            settings,
            widgets: BTreeMap::new(),
        }
    }

    // -- Accessors --

    pub fn layout(&self) -> SlotLayout {
        self.geometry.layout
    }

    pub fn geometry(&self) -> &SlotGeometry {
        &self.geometry
    }

    pub fn settings(&self) -> &PlacementSettings {
        &self.settings
    }

    pub fn occupancy(&self) -> &SlotOccupancy {
        &self.occupancy
    }

    pub fn widget_count(&self) -> usize {
        self.widgets.len()
    }

    pub fn widget(&self, id: WidgetId) -> Option<&WidgetInstance> {
        self.widgets.get(&id)
    }

    /// Widgets in id order.
    pub fn widgets(&self) -> impl Iterator<Item = &WidgetInstance> {
        self.widgets.values()
    }

    pub fn size_tier(&self, id: WidgetId) -> Option<SizeTier> {
        self.widgets
            .get(&id)
            .map(|w| w.size_tier(self.settings.compact_threshold))
    }

    /// Lowest id not held by an active widget. The pool is as large as
    /// the slot set, so a free slot always implies a free id.
    pub(super) fn lowest_free_id(&self) -> Option<WidgetId> {
        (0..self.occupancy.capacity() as u32)
            .map(WidgetId)
            .find(|id| !self.widgets.contains_key(id))
    }
}

impl Default for PlacementController {
    fn default() -> Self {
        Self::new(SlotLayout::Corners, PlacementSettings::default())
    }
}
