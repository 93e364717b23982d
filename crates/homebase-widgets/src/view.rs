//! Serializable widget content views sent to the UI process.

use serde::Serialize;

/// Seconds moved by the skip controls.
pub const SKIP_SECONDS: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum PlayerControl {
    PlayPause,
    Skip { seconds: f64 },
}

impl PlayerControl {
    /// Play/pause plus skip back and forward.
    pub fn transport() -> Vec<PlayerControl> {
        vec![
            PlayerControl::PlayPause,
            PlayerControl::Skip {
                seconds: -SKIP_SECONDS,
            },
            PlayerControl::Skip {
                seconds: SKIP_SECONDS,
            },
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgendaItem {
    pub id: String,
    pub summary: String,
    /// `HH:MM – HH:MM`, or `All day`.
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum CalendarView {
    SignedOut { error: Option<String> },
    Loading,
    Agenda {
        title: &'static str,
        items: Vec<AgendaItem>,
        empty_message: Option<&'static str>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WidgetView {
    Youtube {
        placeholder: &'static str,
        video_id: Option<String>,
        show_video: bool,
        playing: bool,
        controls: Vec<PlayerControl>,
    },
    Spotify {
        placeholder: &'static str,
        track_id: Option<String>,
        embed_url: Option<String>,
        show_embed: bool,
        playing: bool,
        controls: Vec<PlayerControl>,
    },
    Calendar(CalendarView),
}
