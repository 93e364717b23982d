//! Content providers for the widgets that live in layout slots.
//!
//! Each provider owns the state of one widget's content (loaded video,
//! track, calendar agenda) and renders it into a serializable
//! [`WidgetView`] for the UI process. Placement is not their concern.

pub mod calendar;
pub mod content;
pub mod error;
pub mod spotify;
pub mod view;
pub mod youtube;

pub use calendar::{normalize_events, CalendarEvent, CalendarState, EventTime};
pub use content::{ContentProvider, WidgetContent, WidgetProps};
pub use error::WidgetError;
pub use spotify::{extract_track_id, SpotifyState};
pub use view::{AgendaItem, CalendarView, PlayerControl, WidgetView};
pub use youtube::{extract_video_id, YoutubeState};
