//! Config → layout engine settings.

use homebase_common::types::Dimensions;
use homebase_config::schema::{LayoutConfig, LayoutMode, WidgetSize};
use homebase_config::HomebaseConfig;
use homebase_layout::{PlacementSettings, SlotLayout};

fn dimensions(size: WidgetSize) -> Dimensions {
    Dimensions::new(f64::from(size.width), f64::from(size.height))
}

pub(super) fn slot_layout(layout: &LayoutConfig) -> SlotLayout {
    match layout.mode {
        LayoutMode::Corners => SlotLayout::Corners,
        LayoutMode::Stacked => {
            let count = u8::try_from(layout.box_count).unwrap_or(SlotLayout::MAX_BOXES);
            SlotLayout::stacked(count, f64::from(layout.top_offset))
        }
    }
}

pub(super) fn placement_settings(config: &HomebaseConfig) -> PlacementSettings {
    let widgets = &config.widgets;
    PlacementSettings {
        padding: f64::from(config.layout.padding),
        min_height: f64::from(widgets.min_height),
        compact_threshold: widgets.compact_threshold,
        youtube: dimensions(widgets.youtube),
        spotify: dimensions(widgets.spotify),
        calendar: dimensions(widgets.calendar),
    }
}

/// Viewport assumed until the UI reports its real size.
pub(super) fn initial_viewport(config: &HomebaseConfig) -> Dimensions {
    Dimensions::new(
        f64::from(config.window.width),
        f64::from(config.window.height),
    )
}
