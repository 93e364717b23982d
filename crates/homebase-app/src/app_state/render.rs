//! Builds the OverlayView sent to the UI.

use homebase_common::types::{Dimensions, SizeTier, WidgetKind};
use homebase_widgets::{ContentProvider, WidgetProps};

use super::core::OverlayApp;
use super::types::{AddMenuEntry, NoticeView, OverlayView, WidgetFrameView};

impl OverlayApp {
    pub fn render(&mut self) -> OverlayView {
        let drag = self.pointer.drag().copied();
        let resize = self.pointer.resize().copied();
        let threshold = self.placement.settings().compact_threshold;
        let visible = !self.overlay.collapsed;
        let geometry = *self.placement.geometry();

        let widgets = self
            .placement
            .compute_view(self.viewport)
            .into_iter()
            .map(|frame| {
                let mut rect = frame.rect;
                let mut tier = frame.tier;

                let dragging = drag.filter(|d| d.widget == frame.id);
                if let Some(d) = dragging {
                    rect.x = d.position.x;
                    rect.y = d.position.y;
                }
                let resizing = resize.filter(|r| r.widget == frame.id);
                if let Some(r) = resizing {
                    rect = r.rect(rect.x);
                    rect.height = geometry
                        .fitted_size(self.viewport, Dimensions::new(rect.width, rect.height))
                        .height;
                    tier = SizeTier::from_height(rect.height, r.default_height, threshold);
                }

                let props = WidgetProps {
                    audio_only: tier.audio_only(),
                };
                WidgetFrameView {
                    id: frame.id,
                    kind: frame.kind,
                    slot: frame.slot,
                    rect,
                    tier,
                    visible,
                    dragging: dragging.is_some(),
                    resizing: resizing.is_some(),
                    content: self.contents.get(&frame.id).map(|c| c.render(&props)),
                }
            })
            .collect();

        let drop_preview = drag.and_then(|d| {
            let dims = self.placement.widget(d.widget)?.dimensions;
            self.placement
                .geometry()
                .slot_rect(d.nearest, self.viewport, dims)
        });

        let occupancy = self.placement.occupancy();
        let add_menu = if occupancy.first_free().is_some() {
            WidgetKind::ALL
                .iter()
                .map(|&kind| AddMenuEntry {
                    kind,
                    label: kind.label(),
                })
                .collect()
        } else {
            Vec::new()
        };

        OverlayView {
            edit_mode: self.overlay.edit_mode,
            collapsed: self.overlay.collapsed,
            viewport: self.viewport,
            layout: self.placement.layout(),
            widgets,
            highlighted_slot: drag.map(|d| d.nearest),
            drop_preview,
            add_menu,
            notices: self
                .notices
                .visible()
                .into_iter()
                .map(NoticeView::from)
                .collect(),
        }
    }
}
