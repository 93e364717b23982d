//! Spotify track link parsing.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use crate::content::{ContentProvider, WidgetProps};
use crate::error::WidgetError;
use crate::view::{PlayerControl, WidgetView};

/// `open.spotify.com/track/ID`, with an optional `intl-xx/` locale segment.
static TRACK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:https?://)?open\.spotify\.com/(?:intl-[a-z]+/)?track/([^\s?]+)")
        .expect("spotify: static regex pattern must compile")
});

/// Extract the track id from a Spotify link. The id ends at the first `?`
/// or whitespace.
pub fn extract_track_id(url: &str) -> Option<&str> {
    TRACK_RE
        .captures(url)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

pub fn embed_url(track_id: &str) -> String {
    format!("https://open.spotify.com/embed/track/{track_id}")
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpotifyState {
    track_id: Option<String>,
    playing: bool,
}

impl SpotifyState {
    pub fn track_id(&self) -> Option<&str> {
        self.track_id.as_deref()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Load a new track, paused. An invalid link keeps the current track.
    pub fn load_link(&mut self, url: &str) -> Result<(), WidgetError> {
        let id = extract_track_id(url).ok_or_else(|| {
            debug!(url, "rejected spotify link");
            WidgetError::InvalidLink { service: "Spotify" }
        })?;
        self.track_id = Some(id.to_string());
        self.playing = false;
        Ok(())
    }

    /// Flip play/pause. `None` when no track is loaded.
    pub fn toggle_playback(&mut self) -> Option<bool> {
        self.track_id.as_ref()?;
        self.playing = !self.playing;
        Some(self.playing)
    }
}

impl ContentProvider for SpotifyState {
    fn render(&self, props: &WidgetProps) -> WidgetView {
        let loaded = self.track_id.is_some();
        WidgetView::Spotify {
            placeholder: "Paste Spotify track link",
            track_id: self.track_id.clone(),
            embed_url: self.track_id.as_deref().map(embed_url),
            show_embed: loaded && !props.audio_only,
            playing: self.playing,
            controls: if loaded {
                PlayerControl::transport()
            } else {
                Vec::new()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_track_links() {
        assert_eq!(
            extract_track_id("https://open.spotify.com/track/4uLU6hMCjMI75M1A2tKUQC?si=abc"),
            Some("4uLU6hMCjMI75M1A2tKUQC")
        );
        assert_eq!(
            extract_track_id("open.spotify.com/intl-de/track/4uLU6hMCjMI75M1A2tKUQC"),
            Some("4uLU6hMCjMI75M1A2tKUQC")
        );
    }

    #[test]
    fn rejects_non_track_links() {
        assert_eq!(extract_track_id("https://open.spotify.com/album/123"), None);
        assert_eq!(extract_track_id("https://youtu.be/abc"), None);
    }

    #[test]
    fn embed_url_format() {
        assert_eq!(
            embed_url("abc"),
            "https://open.spotify.com/embed/track/abc"
        );
    }

    #[test]
    fn render_hides_embed_when_audio_only() {
        let mut state = SpotifyState::default();
        state
            .load_link("https://open.spotify.com/track/abc")
            .unwrap();

        let full = state.render(&WidgetProps { audio_only: false });
        let compact = state.render(&WidgetProps { audio_only: true });
        match (full, compact) {
            (
                WidgetView::Spotify {
                    show_embed: true,
                    embed_url: Some(url),
                    ..
                },
                WidgetView::Spotify {
                    show_embed: false, ..
                },
            ) => assert!(url.ends_with("/abc")),
            other => panic!("unexpected views: {other:?}"),
        }
    }

    #[test]
    fn toggle_requires_track() {
        let mut state = SpotifyState::default();
        assert_eq!(state.toggle_playback(), None);
        state
            .load_link("https://open.spotify.com/track/abc")
            .unwrap();
        assert_eq!(state.toggle_playback(), Some(true));
        assert_eq!(state.toggle_playback(), Some(false));
    }

    #[test]
    fn new_track_starts_paused() {
        let mut state = SpotifyState::default();
        state
            .load_link("https://open.spotify.com/track/abc")
            .unwrap();
        state.toggle_playback();
        state
            .load_link("https://open.spotify.com/track/def")
            .unwrap();
        assert!(!state.is_playing());
    }

    #[test]
    fn controls_appear_once_a_track_is_loaded() {
        let mut state = SpotifyState::default();
        match state.render(&WidgetProps::default()) {
            WidgetView::Spotify { controls, .. } => assert!(controls.is_empty()),
            other => panic!("unexpected view: {other:?}"),
        }

        state
            .load_link("https://open.spotify.com/track/abc")
            .unwrap();
        state.toggle_playback();
        match state.render(&WidgetProps { audio_only: true }) {
            WidgetView::Spotify {
                controls,
                playing,
                show_embed,
                ..
            } => {
                assert_eq!(controls, PlayerControl::transport());
                assert!(playing);
                assert!(!show_embed);
            }
            other => panic!("unexpected view: {other:?}"),
        }
    }

    #[test]
    fn invalid_link_is_reported() {
        let mut state = SpotifyState::default();
        let err = state.load_link("spotify rocks").unwrap_err();
        assert_eq!(err.to_string(), "Invalid Spotify link");
        assert_eq!(state.track_id(), None);
    }
}
