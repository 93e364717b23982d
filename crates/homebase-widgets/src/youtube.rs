//! YouTube link parsing and player state.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use crate::content::{ContentProvider, WidgetProps};
use crate::error::WidgetError;
use crate::view::{PlayerControl, WidgetView};

/// `youtube.com/watch?v=ID` or `youtu.be/ID`, optional scheme and `www.`.
static VIDEO_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:https?://)?(?:www\.)?(?:youtube\.com/watch\?v=|youtu\.be/)([^\s&]+)")
        .expect("youtube: static regex pattern must compile")
});

/// Extract the video id from a YouTube link. The id ends at the first `&`
/// or whitespace.
pub fn extract_video_id(url: &str) -> Option<&str> {
    VIDEO_RE
        .captures(url)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct YoutubeState {
    video_id: Option<String>,
    playing: bool,
}

impl YoutubeState {
    pub fn video_id(&self) -> Option<&str> {
        self.video_id.as_deref()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Load a new video. A newly loaded video starts paused. An invalid
    /// link leaves the current video in place.
    pub fn load_link(&mut self, url: &str) -> Result<(), WidgetError> {
        let id = extract_video_id(url).ok_or_else(|| {
            debug!(url, "rejected youtube link");
            WidgetError::InvalidLink { service: "YouTube" }
        })?;
        self.video_id = Some(id.to_string());
        self.playing = false;
        Ok(())
    }

    /// Flip play/pause. Returns the new playing flag, or `None` when no
    /// video is loaded.
    pub fn toggle_playback(&mut self) -> Option<bool> {
        self.video_id.as_ref()?;
        self.playing = !self.playing;
        Some(self.playing)
    }
}

impl ContentProvider for YoutubeState {
    fn render(&self, props: &WidgetProps) -> WidgetView {
        let loaded = self.video_id.is_some();
        WidgetView::Youtube {
            placeholder: "Paste YouTube link",
            video_id: self.video_id.clone(),
            show_video: loaded && !props.audio_only,
            playing: self.playing,
            controls: if loaded {
                PlayerControl::transport()
            } else {
                Vec::new()
            },
        }
    }
}
