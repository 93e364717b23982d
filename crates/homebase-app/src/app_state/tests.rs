//! End-to-end tests of the overlay shell driven through UI messages.

use std::cell::RefCell;
use std::rc::Rc;

use homebase_common::errors::PlatformError;
use homebase_common::types::{SizeTier, WidgetId, WidgetKind};
use homebase_common::NotificationLevel;
use homebase_config::HomebaseConfig;
use homebase_layout::{HostBridge, PointerTarget, Slot};
use homebase_widgets::{CalendarView, WidgetView};
use serde_json::json;

use super::*;
use crate::ipc::{HostMessage, PointerRegion, UiMessage};

#[derive(Clone, Default)]
struct Recording(Rc<RefCell<Vec<bool>>>);

impl HostBridge for Recording {
    fn set_pointer_passthrough(&mut self, ignore: bool) -> Result<(), PlatformError> {
        self.0.borrow_mut().push(ignore);
        Ok(())
    }
}

struct Harness {
    app: OverlayApp,
    passthrough: Rc<RefCell<Vec<bool>>>,
}

impl Harness {
    fn new() -> Self {
        let recording = Recording::default();
        let passthrough = recording.0.clone();
        let mut app = OverlayApp::new(&HomebaseConfig::default(), Box::new(recording));
        app.handle(UiMessage::ViewportResized {
            width: 1920.0,
            height: 1080.0,
        });
        Self { app, passthrough }
    }

    fn editing() -> Self {
        let mut h = Self::new();
        h.app.handle(UiMessage::ToggleEditMode);
        h
    }

    fn send(&mut self, msg: UiMessage) -> Vec<HostMessage> {
        self.app.handle(msg)
    }

    fn view(&mut self, msg: UiMessage) -> OverlayView {
        match self.send(msg).into_iter().last() {
            Some(HostMessage::Render(view)) => view,
            other => panic!("expected render, got {other:?}"),
        }
    }

    fn add(&mut self, kind: WidgetKind) {
        self.send(UiMessage::AddWidget { kind });
    }

    fn down(&mut self, widget: u32, x: f64, y: f64, region: PointerRegion) -> Vec<HostMessage> {
        self.send(UiMessage::PointerDown {
            widget: WidgetId(widget),
            x,
            y,
            target: PointerTarget::Surface,
            region,
        })
    }

    fn slot_of(&self, widget: u32) -> Option<Slot> {
        self.app.placement().widget(WidgetId(widget)).map(|w| w.slot)
    }

    fn passthrough(&self) -> Vec<bool> {
        self.passthrough.borrow().clone()
    }
}

// =============================================================================
// Passthrough
// =============================================================================

#[test]
fn mount_enables_passthrough() {
    let mut h = Harness::new();
    let out = h.send(UiMessage::Mount);
    assert!(matches!(out.last(), Some(HostMessage::Render(_))));
    assert_eq!(h.passthrough(), vec![true]);
}

#[test]
fn hover_toggles_passthrough() {
    let mut h = Harness::new();
    h.send(UiMessage::Mount);
    h.send(UiMessage::HoverEnter);
    h.send(UiMessage::HoverEnter);
    h.send(UiMessage::HoverLeave);
    assert_eq!(h.passthrough(), vec![true, false, false]);
    h.send(UiMessage::HoverLeave);
    assert_eq!(h.passthrough(), vec![true, false, false, true]);
}

#[test]
fn gesture_keeps_overlay_interactive_until_release() {
    let mut h = Harness::editing();
    h.add(WidgetKind::Youtube);
    h.send(UiMessage::HoverEnter);
    h.down(0, 50.0, 50.0, PointerRegion::Body);
    h.send(UiMessage::HoverLeave);
    assert_eq!(h.passthrough(), vec![false]);

    h.send(UiMessage::PointerUp { x: 60.0, y: 60.0 });
    assert_eq!(h.passthrough(), vec![false, true]);
}

#[test]
fn unmount_resets_hover() {
    let mut h = Harness::new();
    h.send(UiMessage::HoverEnter);
    let out = h.send(UiMessage::Unmount);
    assert!(out.is_empty());
    assert_eq!(h.app.overlay().hover_depth(), 0);
    assert_eq!(h.passthrough(), vec![false, true]);
}

// =============================================================================
// Adding and deleting
// =============================================================================

#[test]
fn widgets_fill_slots_in_order() {
    let mut h = Harness::new();
    h.add(WidgetKind::Youtube);
    h.add(WidgetKind::Spotify);
    h.add(WidgetKind::Calendar);
    assert_eq!(h.slot_of(0), Some(Slot::TOP_LEFT));
    assert_eq!(h.slot_of(1), Some(Slot::TOP_RIGHT));
    assert_eq!(h.slot_of(2), Some(Slot::BOTTOM_RIGHT));
    assert!(h.app.content(WidgetId(2)).is_some());
}

#[test]
fn capacity_exhaustion_sends_notice() {
    let mut h = Harness::new();
    for _ in 0..4 {
        h.add(WidgetKind::Spotify);
    }
    let out = h.send(UiMessage::AddWidget {
        kind: WidgetKind::Calendar,
    });
    assert_eq!(out.len(), 2);
    match &out[0] {
        HostMessage::Notice(notice) => {
            assert_eq!(notice.level, NotificationLevel::Warning);
            assert!(notice.body.contains("All 4 slots"));
        }
        other => panic!("expected notice, got {other:?}"),
    }
    match &out[1] {
        HostMessage::Render(view) => {
            assert_eq!(view.widgets.len(), 4);
            assert_eq!(view.notices.len(), 1);
            assert!(view.add_menu.is_empty());
        }
        other => panic!("expected render, got {other:?}"),
    }
    assert_eq!(h.app.placement().widget_count(), 4);
}

#[test]
fn add_menu_lists_every_kind() {
    let mut h = Harness::new();
    let view = h.view(UiMessage::Mount);
    let labels: Vec<&str> = view.add_menu.iter().map(|e| e.label).collect();
    assert_eq!(
        labels,
        vec!["YouTube Widget", "Spotify Widget", "Calendar Widget"]
    );
}

#[test]
fn delete_requires_edit_mode() {
    let mut h = Harness::new();
    h.add(WidgetKind::Youtube);
    assert!(h.send(UiMessage::DeleteWidget { id: WidgetId(0) }).is_empty());
    assert_eq!(h.app.placement().widget_count(), 1);

    h.send(UiMessage::ToggleEditMode);
    let view = h.view(UiMessage::DeleteWidget { id: WidgetId(0) });
    assert!(view.widgets.is_empty());
    assert!(h.app.content(WidgetId(0)).is_none());
}

#[test]
fn deleted_id_and_slot_are_reused() {
    let mut h = Harness::editing();
    h.add(WidgetKind::Youtube);
    h.add(WidgetKind::Spotify);
    h.send(UiMessage::DeleteWidget { id: WidgetId(0) });
    h.add(WidgetKind::Calendar);
    assert_eq!(h.slot_of(0), Some(Slot::TOP_LEFT));
    assert_eq!(
        h.app.content(WidgetId(0)).map(|c| c.kind()),
        Some(WidgetKind::Calendar)
    );
}

#[test]
fn deleting_dragged_widget_cancels_drag() {
    let mut h = Harness::editing();
    h.add(WidgetKind::Youtube);
    h.down(0, 50.0, 50.0, PointerRegion::Body);
    h.send(UiMessage::DeleteWidget { id: WidgetId(0) });
    assert!(h.app.pointer().is_idle());
}

// =============================================================================
// Drag
// =============================================================================

#[test]
fn drag_shows_live_position_and_highlight() {
    let mut h = Harness::editing();
    h.add(WidgetKind::Youtube);
    h.down(0, 50.0, 50.0, PointerRegion::Body);

    let view = h.view(UiMessage::PointerMove {
        x: 1500.0,
        y: 750.0,
    });
    let frame = &view.widgets[0];
    assert!(frame.dragging);
    assert!((frame.rect.x - 1470.0).abs() < 0.001);
    assert!((frame.rect.y - 720.0).abs() < 0.001);
    assert_eq!(view.highlighted_slot, Some(Slot::BOTTOM_RIGHT));
    let preview = view.drop_preview.unwrap();
    assert!((preview.x - 1484.0).abs() < 0.001);
    assert!((preview.y - 700.0).abs() < 0.001);

    // Slot is only committed on release.
    assert_eq!(h.slot_of(0), Some(Slot::TOP_LEFT));
    let view = h.view(UiMessage::PointerUp {
        x: 1500.0,
        y: 750.0,
    });
    assert_eq!(h.slot_of(0), Some(Slot::BOTTOM_RIGHT));
    assert!(!view.widgets[0].dragging);
    assert_eq!(view.highlighted_slot, None);
}

#[test]
fn drop_on_occupied_slot_swaps() {
    let mut h = Harness::editing();
    h.add(WidgetKind::Youtube);
    h.add(WidgetKind::Spotify);
    h.down(0, 50.0, 50.0, PointerRegion::Body);
    h.send(UiMessage::PointerUp {
        x: 1514.0,
        y: 50.0,
    });
    assert_eq!(h.slot_of(0), Some(Slot::TOP_RIGHT));
    assert_eq!(h.slot_of(1), Some(Slot::TOP_LEFT));
}

#[test]
fn drop_on_origin_is_noop() {
    let mut h = Harness::editing();
    h.add(WidgetKind::Youtube);
    h.down(0, 50.0, 50.0, PointerRegion::Body);
    h.send(UiMessage::PointerUp { x: 80.0, y: 90.0 });
    assert_eq!(h.slot_of(0), Some(Slot::TOP_LEFT));
}

#[test]
fn no_drag_outside_edit_mode() {
    let mut h = Harness::new();
    h.add(WidgetKind::Youtube);
    assert!(h.down(0, 50.0, 50.0, PointerRegion::Body).is_empty());
    assert!(h.app.pointer().is_idle());
    assert!(h
        .send(UiMessage::PointerUp {
            x: 1500.0,
            y: 750.0
        })
        .is_empty());
    assert_eq!(h.slot_of(0), Some(Slot::TOP_LEFT));
}

#[test]
fn interactive_target_does_not_drag() {
    let mut h = Harness::editing();
    h.add(WidgetKind::Youtube);
    h.send(UiMessage::PointerDown {
        widget: WidgetId(0),
        x: 50.0,
        y: 50.0,
        target: PointerTarget::Input,
        region: PointerRegion::Body,
    });
    assert!(h.app.pointer().is_idle());
}

#[test]
fn leaving_edit_mode_cancels_gesture() {
    let mut h = Harness::editing();
    h.add(WidgetKind::Youtube);
    h.down(0, 50.0, 50.0, PointerRegion::Body);
    h.send(UiMessage::PointerMove {
        x: 1500.0,
        y: 750.0,
    });
    h.send(UiMessage::ToggleEditMode);
    h.send(UiMessage::PointerUp {
        x: 1500.0,
        y: 750.0,
    });
    assert_eq!(h.slot_of(0), Some(Slot::TOP_LEFT));
}

#[test]
fn move_widget_message_uses_drop_semantics() {
    let mut h = Harness::editing();
    h.add(WidgetKind::Youtube);
    h.add(WidgetKind::Spotify);
    h.view(UiMessage::MoveWidget {
        id: WidgetId(1),
        to: Slot::TOP_LEFT,
    });
    assert_eq!(h.slot_of(0), Some(Slot::TOP_RIGHT));
    assert_eq!(h.slot_of(1), Some(Slot::TOP_LEFT));
}

// =============================================================================
// Resize
// =============================================================================

#[test]
fn resize_top_slot_goes_compact() {
    let mut h = Harness::editing();
    h.add(WidgetKind::Youtube);
    // Bottom edge of the top-left widget is at y = 380.
    h.down(0, 200.0, 380.0, PointerRegion::ResizeHandle);

    let view = h.view(UiMessage::PointerMove { x: 200.0, y: 150.0 });
    let frame = &view.widgets[0];
    assert!(frame.resizing);
    assert!((frame.rect.height - 130.0).abs() < 0.001);
    assert_eq!(frame.tier, SizeTier::Compact);
    match &frame.content {
        Some(WidgetView::Youtube { show_video, .. }) => assert!(!show_video),
        other => panic!("unexpected content: {other:?}"),
    }

    h.send(UiMessage::PointerUp { x: 200.0, y: 150.0 });
    let widget = h.app.placement().widget(WidgetId(0)).unwrap();
    assert_eq!(widget.dimensions.height, 180.0);
    assert_eq!(widget.dimensions.width, 416.0);
    assert_eq!(
        h.app.placement().size_tier(WidgetId(0)),
        Some(SizeTier::Compact)
    );
}

#[test]
fn resize_bottom_slot_grows_upward() {
    let mut h = Harness::editing();
    h.add(WidgetKind::Youtube);
    h.send(UiMessage::MoveWidget {
        id: WidgetId(0),
        to: Slot::BOTTOM_LEFT,
    });
    // Bottom-left: y = 700, bottom edge at 1060.
    h.down(0, 100.0, 700.0, PointerRegion::ResizeHandle);
    let view = h.view(UiMessage::PointerMove { x: 100.0, y: 800.0 });
    assert!((view.widgets[0].rect.bottom() - 1060.0).abs() < 0.001);

    let view = h.view(UiMessage::PointerUp { x: 100.0, y: 900.0 });
    let rect = view.widgets[0].rect;
    assert_eq!(rect.height, 180.0);
    assert!((rect.y - 880.0).abs() < 0.001);
}

#[test]
fn resize_back_above_half_restores_full() {
    let mut h = Harness::editing();
    h.add(WidgetKind::Youtube);
    h.down(0, 200.0, 380.0, PointerRegion::ResizeHandle);
    h.send(UiMessage::PointerUp { x: 200.0, y: 150.0 });
    // Compact height 180, bottom edge now at 200.
    h.down(0, 200.0, 200.0, PointerRegion::ResizeHandle);
    h.send(UiMessage::PointerUp { x: 200.0, y: 330.0 });
    assert_eq!(
        h.app.placement().widget(WidgetId(0)).unwrap().dimensions.height,
        360.0
    );
}

// =============================================================================
// Collapse
// =============================================================================

#[test]
fn collapse_hides_frames_and_blocks_edits() {
    let mut h = Harness::editing();
    h.add(WidgetKind::Youtube);
    let view = h.view(UiMessage::ToggleCollapse);
    assert!(view.collapsed);
    assert!(view.widgets.iter().all(|w| !w.visible));

    assert!(h.down(0, 50.0, 50.0, PointerRegion::Body).is_empty());
    assert!(h.send(UiMessage::DeleteWidget { id: WidgetId(0) }).is_empty());

    let view = h.view(UiMessage::ToggleCollapse);
    assert!(view.widgets[0].visible);
    assert_eq!(h.slot_of(0), Some(Slot::TOP_LEFT));
}

// =============================================================================
// Content
// =============================================================================

#[test]
fn invalid_link_sends_notice() {
    let mut h = Harness::new();
    h.add(WidgetKind::Youtube);
    let out = h.send(UiMessage::LoadLink {
        widget: WidgetId(0),
        url: "https://example.com".into(),
    });
    match &out[0] {
        HostMessage::Notice(notice) => {
            assert_eq!(notice.title, "Invalid YouTube link");
            assert_eq!(notice.body, "https://example.com");
        }
        other => panic!("expected notice, got {other:?}"),
    }
}

#[test]
fn valid_link_renders_player() {
    let mut h = Harness::new();
    h.add(WidgetKind::Youtube);
    let view = h.view(UiMessage::LoadLink {
        widget: WidgetId(0),
        url: "https://youtu.be/abc".into(),
    });
    match &view.widgets[0].content {
        Some(WidgetView::Youtube {
            video_id,
            show_video,
            ..
        }) => {
            assert_eq!(video_id.as_deref(), Some("abc"));
            assert!(show_video);
        }
        other => panic!("unexpected content: {other:?}"),
    }
    let view = h.view(UiMessage::TogglePlayback {
        widget: WidgetId(0),
    });
    assert!(matches!(
        view.widgets[0].content,
        Some(WidgetView::Youtube { playing: true, .. })
    ));
}

#[test]
fn spotify_playback_toggles_after_loading_a_track() {
    let mut h = Harness::new();
    h.add(WidgetKind::Spotify);
    let widget = WidgetId(0);

    assert!(h.send(UiMessage::TogglePlayback { widget }).is_empty());
    h.send(UiMessage::LoadLink {
        widget,
        url: "https://open.spotify.com/track/abc".into(),
    });
    let view = h.view(UiMessage::TogglePlayback { widget });
    match &view.widgets[0].content {
        Some(WidgetView::Spotify {
            playing, controls, ..
        }) => {
            assert!(playing);
            assert_eq!(controls.len(), 3);
        }
        other => panic!("unexpected content: {other:?}"),
    }
}

#[test]
fn calendar_flow_renders_agenda() {
    let mut h = Harness::new();
    h.add(WidgetKind::Calendar);
    let widget = WidgetId(0);

    let view = h.view(UiMessage::CalendarLoading { widget });
    assert_eq!(
        view.widgets[0].content,
        Some(WidgetView::Calendar(CalendarView::Loading))
    );

    h.send(UiMessage::CalendarSignIn { widget, ok: true });
    let view = h.view(UiMessage::CalendarEvents {
        widget,
        events: json!([{
            "id": "e1",
            "summary": "Lunch",
            "start": { "dateTime": "2024-03-04T12:00:00Z" },
            "end": { "dateTime": "2024-03-04T13:00:00Z" }
        }]),
    });
    match &view.widgets[0].content {
        Some(WidgetView::Calendar(CalendarView::Agenda { items, .. })) => {
            assert_eq!(items.len(), 1);
            assert_eq!(items[0].time, "12:00 – 13:00");
        }
        other => panic!("unexpected content: {other:?}"),
    }
}

#[test]
fn content_messages_for_wrong_kind_are_ignored() {
    let mut h = Harness::new();
    h.add(WidgetKind::Spotify);
    assert!(h
        .send(UiMessage::CalendarSignIn {
            widget: WidgetId(0),
            ok: true
        })
        .is_empty());
    assert!(h
        .send(UiMessage::TogglePlayback {
            widget: WidgetId(0)
        })
        .is_empty());
    assert!(h
        .send(UiMessage::LoadLink {
            widget: WidgetId(7),
            url: "https://youtu.be/abc".into()
        })
        .is_empty());
}

#[test]
fn render_serializes_for_the_ui() {
    let mut h = Harness::editing();
    h.add(WidgetKind::Spotify);
    let line = HostMessage::Render(h.app.render()).to_line().unwrap();
    let value: serde_json::Value = serde_json::from_str(&line).unwrap();
    let widget = &value["payload"]["widgets"][0];
    assert_eq!(widget["slot"], json!({"corner": "top-left"}));
    assert_eq!(widget["tier"], "full");
    assert_eq!(widget["content"]["type"], "spotify");
    assert_eq!(value["payload"]["layout"]["mode"], "corners");
}
