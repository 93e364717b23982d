//! Shell state types and the serializable overlay view.

use homebase_common::types::{Dimensions, Point, Rect, SizeTier, WidgetId, WidgetKind};
use homebase_common::{Notification, NotificationLevel};
use homebase_layout::drag::ActiveDrag;
use homebase_layout::resize::{ActiveResize, ResizeLimits};
use homebase_layout::{DragSession, PointerTarget, ResizeSession, Slot, SlotLayout, VerticalAnchor};
use homebase_widgets::WidgetView;
use serde::Serialize;

// =============================================================================
// OVERLAY FLAGS
// =============================================================================

/// Edit/collapse flags plus how many widgets the pointer is currently over.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverlayState {
    pub edit_mode: bool,
    pub collapsed: bool,
    hover_depth: u32,
}

impl OverlayState {
    pub fn hover_depth(&self) -> u32 {
        self.hover_depth
    }

    /// Drag, resize and delete are only allowed in this state.
    pub fn can_edit(&self) -> bool {
        self.edit_mode && !self.collapsed
    }

    pub fn hover_enter(&mut self) {
        self.hover_depth += 1;
    }

    /// Returns `true` when the pointer has left the last widget.
    pub fn hover_leave(&mut self) -> bool {
        self.hover_depth = self.hover_depth.saturating_sub(1);
        self.hover_depth == 0
    }

    pub fn reset_hover(&mut self) {
        self.hover_depth = 0;
    }
}

// =============================================================================
// POINTER SESSIONS
// =============================================================================

/// At most one live gesture: a drag or a resize, never both.
#[derive(Debug, Clone)]
pub struct PointerSessions {
    drag: DragSession,
    resize: ResizeSession,
    limits: ResizeLimits,
}

impl PointerSessions {
    pub fn new(limits: ResizeLimits) -> Self {
        Self {
            drag: DragSession::new(),
            resize: ResizeSession::new(limits),
            limits,
        }
    }

    pub fn is_idle(&self) -> bool {
        !self.drag.is_dragging() && !self.resize.is_resizing()
    }

    pub fn drag(&self) -> Option<&ActiveDrag> {
        self.drag.active()
    }

    pub fn resize(&self) -> Option<&ActiveResize> {
        self.resize.active()
    }

    /// Widget under the live gesture, if any.
    pub fn widget(&self) -> Option<WidgetId> {
        self.drag()
            .map(|d| d.widget)
            .or_else(|| self.resize().map(|r| r.widget))
    }

    pub fn drag_session(&mut self) -> &mut DragSession {
        &mut self.drag
    }

    pub fn resize_session(&mut self) -> &mut ResizeSession {
        &mut self.resize
    }

    pub fn begin_drag(
        &mut self,
        widget: WidgetId,
        origin: Slot,
        widget_origin: Point,
        pointer: Point,
        target: PointerTarget,
    ) -> bool {
        self.is_idle() && self.drag.begin(widget, origin, widget_origin, pointer, target)
    }

    pub fn begin_resize(
        &mut self,
        widget: WidgetId,
        anchor: VerticalAnchor,
        rect: Rect,
        pointer_y: f64,
        default_height: f64,
    ) -> bool {
        self.is_idle()
            && self
                .resize
                .begin(widget, anchor, rect, pointer_y, default_height)
    }

    /// Drop any live gesture without committing it.
    pub fn cancel(&mut self) {
        *self = Self::new(self.limits);
    }
}

// =============================================================================
// VIEW
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NoticeView {
    pub level: NotificationLevel,
    pub title: String,
    pub body: String,
}

impl From<&Notification> for NoticeView {
    fn from(n: &Notification) -> Self {
        Self {
            level: n.level,
            title: n.title.clone(),
            body: n.body.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddMenuEntry {
    pub kind: WidgetKind,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WidgetFrameView {
    pub id: WidgetId,
    pub kind: WidgetKind,
    pub slot: Slot,
    /// Live rect: follows the pointer while dragged or resized.
    pub rect: Rect,
    pub tier: SizeTier,
    pub visible: bool,
    pub dragging: bool,
    pub resizing: bool,
    pub content: Option<WidgetView>,
}

/// Everything the UI needs to draw the overlay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlayView {
    pub edit_mode: bool,
    pub collapsed: bool,
    pub viewport: Dimensions,
    pub layout: SlotLayout,
    pub widgets: Vec<WidgetFrameView>,
    /// Slot the dragged widget would snap to on release.
    pub highlighted_slot: Option<Slot>,
    /// Where the dragged widget would land, drawn as a drop preview.
    pub drop_preview: Option<Rect>,
    /// Empty when every slot is occupied.
    pub add_menu: Vec<AddMenuEntry>,
    pub notices: Vec<NoticeView>,
}
