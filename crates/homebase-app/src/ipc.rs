//! JSON-lines protocol between the overlay UI process and this host.
//!
//! Every message is one line: `{"kind": "...", "payload": ...}`. Unit
//! messages omit the payload.

use homebase_common::types::{WidgetId, WidgetKind};
use homebase_common::HomebaseError;
use homebase_layout::{PointerTarget, Slot};
use serde::{Deserialize, Serialize};

use crate::app_state::{NoticeView, OverlayView};

/// Part of a widget a pointer-down landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PointerRegion {
    #[default]
    Body,
    ResizeHandle,
}

/// UI → host.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", content = "payload", rename_all = "kebab-case")]
pub enum UiMessage {
    Mount,
    Unmount,
    ViewportResized {
        width: f64,
        height: f64,
    },
    HoverEnter,
    HoverLeave,
    ToggleEditMode,
    ToggleCollapse,
    AddWidget {
        kind: WidgetKind,
    },
    DeleteWidget {
        id: WidgetId,
    },
    MoveWidget {
        id: WidgetId,
        to: Slot,
    },
    PointerDown {
        widget: WidgetId,
        x: f64,
        y: f64,
        #[serde(default)]
        target: PointerTarget,
        #[serde(default)]
        region: PointerRegion,
    },
    PointerMove {
        x: f64,
        y: f64,
    },
    PointerUp {
        x: f64,
        y: f64,
    },
    LoadLink {
        widget: WidgetId,
        url: String,
    },
    CalendarLoading {
        widget: WidgetId,
    },
    CalendarSignIn {
        widget: WidgetId,
        ok: bool,
    },
    CalendarEvents {
        widget: WidgetId,
        events: serde_json::Value,
    },
    TogglePlayback {
        widget: WidgetId,
    },
}

/// Host → UI.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", content = "payload", rename_all = "kebab-case")]
pub enum HostMessage {
    /// `true` lets pointer input fall through the overlay.
    SetIgnoreMouseEvents(bool),
    Render(OverlayView),
    Notice(NoticeView),
}

/// Parse one inbound line.
pub fn parse_line(line: &str) -> Result<UiMessage, HomebaseError> {
    serde_json::from_str(line.trim()).map_err(|e| HomebaseError::Ipc(format!("bad message: {e}")))
}

impl HostMessage {
    /// Serialize as a single line, without the trailing newline.
    pub fn to_line(&self) -> Result<String, HomebaseError> {
        serde_json::to_string(self).map_err(|e| HomebaseError::Ipc(format!("encode failed: {e}")))
    }
}
