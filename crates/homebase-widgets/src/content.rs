//! Per-widget content state and dispatch by kind.

use homebase_common::types::{Dimensions, WidgetKind};
use serde_json::Value;

use crate::calendar::CalendarState;
use crate::error::WidgetError;
use crate::spotify::SpotifyState;
use crate::view::WidgetView;
use crate::youtube::YoutubeState;

/// Render-time inputs derived from the widget's placement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WidgetProps {
    /// Widget is in the compact tier; media is reduced to audio.
    pub audio_only: bool,
}

/// Anything that can render widget content for the UI.
pub trait ContentProvider {
    fn render(&self, props: &WidgetProps) -> WidgetView;
}

/// Content of one widget instance.
#[derive(Debug, Clone)]
pub enum WidgetContent {
    Youtube(YoutubeState),
    Spotify(SpotifyState),
    Calendar(CalendarState),
}

impl WidgetContent {
    pub fn new(kind: WidgetKind) -> Self {
        match kind {
            WidgetKind::Youtube => WidgetContent::Youtube(YoutubeState::default()),
            WidgetKind::Spotify => WidgetContent::Spotify(SpotifyState::default()),
            WidgetKind::Calendar => WidgetContent::Calendar(CalendarState::default()),
        }
    }

    pub fn kind(&self) -> WidgetKind {
        match self {
            WidgetContent::Youtube(_) => WidgetKind::Youtube,
            WidgetContent::Spotify(_) => WidgetKind::Spotify,
            WidgetContent::Calendar(_) => WidgetKind::Calendar,
        }
    }

    /// Built-in outer size of this kind; config may override it.
    pub fn default_dimensions(&self) -> Dimensions {
        self.kind().default_dimensions()
    }

    fn unsupported(&self, action: &'static str) -> WidgetError {
        WidgetError::Unsupported {
            kind: self.kind(),
            action,
        }
    }

    pub fn load_link(&mut self, url: &str) -> Result<(), WidgetError> {
        match self {
            WidgetContent::Youtube(s) => s.load_link(url),
            WidgetContent::Spotify(s) => s.load_link(url),
            WidgetContent::Calendar(_) => Err(self.unsupported("load-link")),
        }
    }

    /// Returns the new playing flag, or `None` when nothing is loaded.
    pub fn toggle_playback(&mut self) -> Result<Option<bool>, WidgetError> {
        match self {
            WidgetContent::Youtube(s) => Ok(s.toggle_playback()),
            WidgetContent::Spotify(s) => Ok(s.toggle_playback()),
            WidgetContent::Calendar(_) => Err(self.unsupported("toggle-playback")),
        }
    }

    pub fn calendar_loading(&mut self) -> Result<(), WidgetError> {
        match self {
            WidgetContent::Calendar(s) => {
                s.begin_loading();
                Ok(())
            }
            _ => Err(self.unsupported("calendar-loading")),
        }
    }

    pub fn calendar_sign_in(&mut self, ok: bool) -> Result<(), WidgetError> {
        match self {
            WidgetContent::Calendar(s) => {
                s.finish_sign_in(ok);
                Ok(())
            }
            _ => Err(self.unsupported("calendar-sign-in")),
        }
    }

    pub fn calendar_events(&mut self, raw: &Value) -> Result<usize, WidgetError> {
        match self {
            WidgetContent::Calendar(s) => s.set_events(raw),
            _ => Err(self.unsupported("calendar-events")),
        }
    }
}

impl ContentProvider for WidgetContent {
    fn render(&self, props: &WidgetProps) -> WidgetView {
        match self {
            WidgetContent::Youtube(s) => s.render(props),
            WidgetContent::Spotify(s) => s.render(props),
            WidgetContent::Calendar(s) => s.render(props),
        }
    }
}
