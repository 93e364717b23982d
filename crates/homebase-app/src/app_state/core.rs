//! OverlayApp struct definition and constructor.

use std::collections::BTreeMap;

use homebase_common::types::{Dimensions, WidgetId};
use homebase_common::{Notification, NotificationQueue};
use homebase_config::HomebaseConfig;
use homebase_layout::{HostBridge, PlacementController};
use homebase_widgets::WidgetContent;
use tracing::warn;

use crate::ipc::HostMessage;

use super::init;
use super::types::{NoticeView, OverlayState, PointerSessions};

/// The overlay host: placement, widget content, and UI flags.
pub struct OverlayApp {
    pub(super) placement: PlacementController,
    pub(super) contents: BTreeMap<WidgetId, WidgetContent>,
    pub(super) overlay: OverlayState,
    pub(super) pointer: PointerSessions,
    pub(super) viewport: Dimensions,
    pub(super) notices: NotificationQueue,
    pub(super) bridge: Box<dyn HostBridge>,
    /// Messages produced while handling the current inbound message.
    pub(super) outbox: Vec<HostMessage>,
}

impl OverlayApp {
    pub fn new(config: &HomebaseConfig, bridge: Box<dyn HostBridge>) -> Self {
        let settings = init::placement_settings(config);
        let placement = PlacementController::new(init::slot_layout(&config.layout), settings);
        Self {
            pointer: PointerSessions::new(settings.resize_limits()),
            placement,
            contents: BTreeMap::new(),
            overlay: OverlayState::default(),
            viewport: init::initial_viewport(config),
            notices: NotificationQueue::default(),
            bridge,
            outbox: Vec::new(),
        }
    }

    pub fn placement(&self) -> &PlacementController {
        &self.placement
    }

    pub fn overlay(&self) -> &OverlayState {
        &self.overlay
    }

    pub fn pointer(&self) -> &PointerSessions {
        &self.pointer
    }

    pub fn viewport(&self) -> Dimensions {
        self.viewport
    }

    pub fn content(&self, id: WidgetId) -> Option<&WidgetContent> {
        self.contents.get(&id)
    }

    pub(super) fn set_passthrough(&mut self, ignore: bool) {
        if let Err(e) = self.bridge.set_pointer_passthrough(ignore) {
            warn!(ignore, "failed to set pointer passthrough: {e}");
        }
    }

    /// Queue a notice and send it to the UI right away.
    pub(super) fn notify(&mut self, notification: Notification) {
        self.outbox
            .push(HostMessage::Notice(NoticeView::from(&notification)));
        self.notices.push(notification);
    }
}
