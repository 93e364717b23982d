//! Widget content messages routed to the owning widget.

use homebase_common::types::WidgetId;
use homebase_common::Notification;
use homebase_widgets::{WidgetContent, WidgetError};
use serde_json::Value;
use tracing::{debug, warn};

use super::core::OverlayApp;

impl OverlayApp {
    fn content_mut(&mut self, widget: WidgetId) -> Option<&mut WidgetContent> {
        let content = self.contents.get_mut(&widget);
        if content.is_none() {
            debug!(%widget, "content message for unknown widget");
        }
        content
    }

    pub(super) fn load_link(&mut self, widget: WidgetId, url: &str) -> bool {
        let Some(content) = self.content_mut(widget) else {
            return false;
        };
        match content.load_link(url) {
            Ok(()) => true,
            Err(e @ WidgetError::InvalidLink { .. }) => {
                self.notify(Notification::warning(e.to_string(), url));
                true
            }
            Err(e) => {
                debug!(%widget, "load-link rejected: {e}");
                false
            }
        }
    }

    pub(super) fn toggle_playback(&mut self, widget: WidgetId) -> bool {
        let Some(content) = self.content_mut(widget) else {
            return false;
        };
        match content.toggle_playback() {
            Ok(playing) => playing.is_some(),
            Err(e) => {
                debug!(%widget, "toggle-playback rejected: {e}");
                false
            }
        }
    }

    pub(super) fn calendar_loading(&mut self, widget: WidgetId) -> bool {
        let Some(content) = self.content_mut(widget) else {
            return false;
        };
        match content.calendar_loading() {
            Ok(()) => true,
            Err(e) => {
                debug!(%widget, "calendar-loading rejected: {e}");
                false
            }
        }
    }

    pub(super) fn calendar_sign_in(&mut self, widget: WidgetId, ok: bool) -> bool {
        let Some(content) = self.content_mut(widget) else {
            return false;
        };
        match content.calendar_sign_in(ok) {
            Ok(()) => true,
            Err(e) => {
                debug!(%widget, "calendar-sign-in rejected: {e}");
                false
            }
        }
    }

    /// Calendar errors are shown inside the widget, so every outcome on a
    /// calendar re-renders.
    pub(super) fn calendar_events(&mut self, widget: WidgetId, events: &Value) -> bool {
        let Some(content) = self.content_mut(widget) else {
            return false;
        };
        match content.calendar_events(events) {
            Ok(count) => {
                debug!(%widget, count, "calendar events loaded");
                true
            }
            Err(e @ WidgetError::Unsupported { .. }) => {
                debug!(%widget, "calendar-events rejected: {e}");
                false
            }
            Err(e) => {
                warn!(%widget, "calendar events failed: {e}");
                true
            }
        }
    }
}
