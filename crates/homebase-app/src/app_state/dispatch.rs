//! Inbound message dispatch.

use homebase_common::types::{Dimensions, Point, WidgetId, WidgetKind};
use homebase_common::Notification;
use homebase_layout::{PlacementCommand, PlacementError, Slot};
use homebase_widgets::WidgetContent;
use tracing::{debug, info, warn};

use crate::ipc::{HostMessage, UiMessage};

use super::core::OverlayApp;

impl OverlayApp {
    /// Apply one UI message. Returns the messages to send back, ending
    /// with a fresh `render` whenever visible state changed.
    pub fn handle(&mut self, msg: UiMessage) -> Vec<HostMessage> {
        debug!(?msg, "ui message");
        let changed = match msg {
            UiMessage::Mount => {
                self.overlay.reset_hover();
                self.set_passthrough(true);
                true
            }
            UiMessage::Unmount => {
                self.overlay.reset_hover();
                self.pointer.cancel();
                self.set_passthrough(true);
                false
            }
            UiMessage::ViewportResized { width, height } => {
                self.viewport = Dimensions::new(width.max(0.0), height.max(0.0));
                true
            }
            UiMessage::HoverEnter => {
                self.overlay.hover_enter();
                self.set_passthrough(false);
                false
            }
            UiMessage::HoverLeave => {
                // A live gesture keeps the overlay interactive until release.
                if self.overlay.hover_leave() && self.pointer.is_idle() {
                    self.set_passthrough(true);
                }
                false
            }
            UiMessage::ToggleEditMode => {
                self.overlay.edit_mode = !self.overlay.edit_mode;
                self.pointer.cancel();
                info!(edit_mode = self.overlay.edit_mode, "edit mode toggled");
                true
            }
            UiMessage::ToggleCollapse => {
                self.overlay.collapsed = !self.overlay.collapsed;
                self.pointer.cancel();
                info!(collapsed = self.overlay.collapsed, "overlay collapse toggled");
                true
            }
            UiMessage::AddWidget { kind } => self.add_widget(kind),
            UiMessage::DeleteWidget { id } => self.delete_widget(id),
            UiMessage::MoveWidget { id, to } => self.move_widget(id, to),
            UiMessage::PointerDown {
                widget,
                x,
                y,
                target,
                region,
            } => self.pointer_down(widget, Point::new(x, y), target, region),
            UiMessage::PointerMove { x, y } => self.pointer_move(Point::new(x, y)),
            UiMessage::PointerUp { x, y } => self.pointer_up(Point::new(x, y)),
            UiMessage::LoadLink { widget, url } => self.load_link(widget, &url),
            UiMessage::CalendarLoading { widget } => self.calendar_loading(widget),
            UiMessage::CalendarSignIn { widget, ok } => self.calendar_sign_in(widget, ok),
            UiMessage::CalendarEvents { widget, events } => self.calendar_events(widget, &events),
            UiMessage::TogglePlayback { widget } => self.toggle_playback(widget),
        };

        let mut out = std::mem::take(&mut self.outbox);
        if changed {
            out.push(HostMessage::Render(self.render()));
        }
        out
    }

    fn add_widget(&mut self, kind: WidgetKind) -> bool {
        match self.placement.add_widget(kind) {
            Ok(id) => {
                self.contents.insert(id, WidgetContent::new(kind));
                true
            }
            Err(PlacementError::CapacityExhausted { slots }) => {
                warn!(?kind, slots, "cannot add widget: no free slot");
                self.notify(Notification::warning(
                    "No free slot",
                    format!("All {slots} slots are occupied. Remove a widget to add another."),
                ));
                true
            }
            Err(e) => {
                warn!(?kind, "cannot add widget: {e}");
                false
            }
        }
    }

    fn delete_widget(&mut self, id: WidgetId) -> bool {
        if !self.overlay.can_edit() {
            debug!(%id, "delete ignored outside edit mode");
            return false;
        }
        if !self.placement.execute(PlacementCommand::Delete(id)) {
            return false;
        }
        self.contents.remove(&id);
        if self.pointer.widget() == Some(id) {
            self.pointer.cancel();
        }
        true
    }

    fn move_widget(&mut self, id: WidgetId, to: Slot) -> bool {
        if !self.overlay.can_edit() || !self.pointer.is_idle() {
            debug!(%id, %to, "move ignored");
            return false;
        }
        let Some(from) = self.placement.widget(id).map(|w| w.slot) else {
            debug!(%id, "move of unknown widget");
            return false;
        };
        self.placement.execute(PlacementCommand::Move { from, to })
    }
}
