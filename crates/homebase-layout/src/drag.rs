//! Pointer drag session for moving a widget between slots.
//!
//! The session only tracks where the widget is while the pointer is held
//! and which slot it would land in. It never touches occupancy: on
//! release it hands a [`DragRelease`] to the placement controller, which
//! commits the move.

use homebase_common::types::{Point, WidgetId};
use serde::{Deserialize, Serialize};

use crate::geometry::nearest_slot;
use crate::slot::Slot;

// =============================================================================
// TYPES
// =============================================================================

/// The element a pointer-down landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerTarget {
    /// Widget chrome or background; drags start here.
    #[default]
    Surface,
    Button,
    Input,
    TextArea,
    Select,
    Link,
}

impl PointerTarget {
    /// Interactive controls keep their own click handling and never
    /// start a drag.
    pub fn is_interactive(&self) -> bool {
        !matches!(self, PointerTarget::Surface)
    }
}

/// Live state of an in-progress drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveDrag {
    pub widget: WidgetId,
    /// Slot the widget occupied when the drag began.
    pub origin: Slot,
    /// Pointer position relative to the widget's top-left corner.
    pub grab_offset: Point,
    /// Free-form top-left position of the widget.
    pub position: Point,
    /// Slot the widget would snap to if released now.
    pub nearest: Slot,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(ActiveDrag),
}

/// Result of releasing a drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragRelease {
    pub widget: WidgetId,
    pub from: Slot,
    pub to: Slot,
    pub position: Point,
}

/// Per-widget drag state machine: `Idle → Dragging → Idle`.
#[derive(Debug, Clone, Default)]
pub struct DragSession {
    state: DragState,
}

// =============================================================================
// STATE MACHINE
// =============================================================================

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    pub fn active(&self) -> Option<&ActiveDrag> {
        match &self.state {
            DragState::Dragging(drag) => Some(drag),
            DragState::Idle => None,
        }
    }

    /// Start dragging `widget` from `origin`. Returns `false` when the
    /// pointer landed on an interactive control or a drag is already live.
    pub fn begin(
        &mut self,
        widget: WidgetId,
        origin: Slot,
        widget_origin: Point,
        pointer: Point,
        target: PointerTarget,
    ) -> bool {
        if target.is_interactive() || self.is_dragging() {
            return false;
        }
        self.state = DragState::Dragging(ActiveDrag {
            widget,
            origin,
            grab_offset: Point::new(pointer.x - widget_origin.x, pointer.y - widget_origin.y),
            position: widget_origin,
            nearest: origin,
        });
        true
    }

    /// Follow the pointer and recompute the nearest slot. Ignored when idle.
    pub fn update(&mut self, pointer: Point, anchors: &[(Slot, Point)]) -> Option<Slot> {
        let DragState::Dragging(drag) = &mut self.state else {
            return None;
        };
        drag.position = Point::new(pointer.x - drag.grab_offset.x, pointer.y - drag.grab_offset.y);
        if let Some(slot) = nearest_slot(drag.position, anchors) {
            drag.nearest = slot;
        }
        Some(drag.nearest)
    }

    /// Release at `pointer`. The position at release alone decides the
    /// target slot. Returns `None` when no drag was active.
    pub fn end(&mut self, pointer: Point, anchors: &[(Slot, Point)]) -> Option<DragRelease> {
        self.update(pointer, anchors)?;
        match std::mem::take(&mut self.state) {
            DragState::Dragging(drag) => Some(DragRelease {
                widget: drag.widget,
                from: drag.origin,
                to: drag.nearest,
                position: drag.position,
            }),
            DragState::Idle => None,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
