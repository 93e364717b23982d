//! Calendar sign-in and agenda state.

use serde_json::Value;
use tracing::{debug, warn};

use crate::content::{ContentProvider, WidgetProps};
use crate::error::WidgetError;
use crate::view::{AgendaItem, CalendarView, WidgetView};

use super::events::{normalize_events, CalendarEvent};

pub const AGENDA_TITLE: &str = "Today's Events";
pub const NO_EVENTS: &str = "No events scheduled for today";
pub const AUTH_FAILED: &str = "Authentication failed. Please try again.";
pub const FETCH_FAILED: &str = "Failed to fetch events. Please try again.";

#[derive(Debug, Clone, Default)]
pub struct CalendarState {
    signed_in: bool,
    loading: bool,
    error: Option<String>,
    events: Vec<CalendarEvent>,
}

impl CalendarState {
    pub fn is_signed_in(&self) -> bool {
        self.signed_in
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }

    /// Sign-in or fetch started on the UI side.
    pub fn begin_loading(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn finish_sign_in(&mut self, ok: bool) {
        self.loading = false;
        self.signed_in = ok;
        self.error = if ok { None } else { Some(AUTH_FAILED.into()) };
        debug!(ok, "calendar sign-in finished");
    }

    /// Replace the agenda with freshly fetched provider events. Returns
    /// the number of events kept.
    pub fn set_events(&mut self, raw: &Value) -> Result<usize, WidgetError> {
        self.loading = false;
        if !self.signed_in {
            self.error = Some(WidgetError::NotSignedIn.to_string());
            return Err(WidgetError::NotSignedIn);
        }

        match normalize_events(raw) {
            Ok(events) => {
                self.events = events;
                self.error = None;
                Ok(self.events.len())
            }
            Err(e) => {
                warn!("calendar events rejected: {e}");
                self.events.clear();
                self.error = Some(FETCH_FAILED.into());
                Err(e)
            }
        }
    }
}

impl ContentProvider for CalendarState {
    fn render(&self, _props: &WidgetProps) -> WidgetView {
        let view = if self.loading {
            CalendarView::Loading
        } else if !self.signed_in || self.error.is_some() {
            CalendarView::SignedOut {
                error: self.error.clone(),
            }
        } else {
            CalendarView::Agenda {
                title: AGENDA_TITLE,
                items: self
                    .events
                    .iter()
                    .map(|e| AgendaItem {
                        id: e.id.clone(),
                        summary: e.summary.clone(),
                        time: e.time_label(),
                    })
                    .collect(),
                empty_message: self.events.is_empty().then_some(NO_EVENTS),
            }
        };
        WidgetView::Calendar(view)
    }
}
