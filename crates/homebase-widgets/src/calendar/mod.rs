//! Calendar widget: provider event normalization and agenda rendering.
//!
//! Fetching and OAuth happen in the UI process; this side only keeps the
//! sign-in state and the normalized agenda.

mod events;
mod state;

pub use events::{normalize_events, CalendarEvent, EventTime};
pub use state::{CalendarState, AGENDA_TITLE, AUTH_FAILED, FETCH_FAILED, NO_EVENTS};

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ContentProvider, WidgetProps};
    use crate::error::WidgetError;
    use crate::view::{CalendarView, WidgetView};
    use serde_json::json;

    fn sample_events() -> serde_json::Value {
        json!([
            {
                "id": "b",
                "summary": "Standup",
                "start": { "dateTime": "2024-03-04T09:30:00-05:00" },
                "end": { "dateTime": "2024-03-04T09:45:00-05:00" }
            },
            {
                "id": "a",
                "summary": "Holiday",
                "start": { "date": "2024-03-04" },
                "end": { "date": "2024-03-05" }
            },
            {
                "id": "c",
                "start": { "dateTime": "2024-03-04T14:00:00-05:00" },
                "end": { "dateTime": "2024-03-04T15:00:00-05:00" }
            }
        ])
    }

    fn agenda(state: &CalendarState) -> CalendarView {
        match state.render(&WidgetProps::default()) {
            WidgetView::Calendar(view) => view,
            other => panic!("unexpected view: {other:?}"),
        }
    }

    // =========================================================================
    // normalize_events
    // =========================================================================

    #[test]
    fn normalize_sorts_by_start() {
        let events = normalize_events(&sample_events()).unwrap();
        let ids: Vec<&str> = events.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn normalize_sorts_mixed_offsets_by_instant() {
        // 10:00+02:00 is 08:00 UTC, before 09:00Z despite the later clock.
        let raw = json!([
            {
                "id": "utc",
                "start": { "dateTime": "2024-03-04T09:00:00Z" },
                "end": { "dateTime": "2024-03-04T09:30:00Z" }
            },
            {
                "id": "cest",
                "start": { "dateTime": "2024-03-04T10:00:00+02:00" },
                "end": { "dateTime": "2024-03-04T10:30:00+02:00" }
            }
        ]);
        let events = normalize_events(&raw).unwrap();
        let ids: Vec<&str> = events.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["cest", "utc"]);
    }

    #[test]
    fn normalize_falls_back_to_date() {
        let events = normalize_events(&sample_events()).unwrap();
        assert!(matches!(events[0].start, EventTime::AllDay(_)));
        assert_eq!(events[0].time_label(), "All day");
    }

    #[test]
    fn time_label_uses_event_offset() {
        let events = normalize_events(&sample_events()).unwrap();
        assert_eq!(events[1].time_label(), "09:30 – 09:45");
    }

    #[test]
    fn missing_summary_gets_placeholder() {
        let events = normalize_events(&sample_events()).unwrap();
        assert_eq!(events[2].summary, "(No title)");
    }

    #[test]
    fn normalize_rejects_non_array() {
        let err = normalize_events(&json!({"items": []})).unwrap_err();
        assert!(matches!(err, WidgetError::MalformedEvent(_)));
    }

    #[test]
    fn normalize_rejects_missing_times() {
        let err = normalize_events(&json!([{ "id": "x", "start": {}, "end": {} }])).unwrap_err();
        assert!(err.to_string().contains("x: start"));
    }

    #[test]
    fn normalize_rejects_bad_timestamp() {
        let raw = json!([{
            "id": "x",
            "start": { "dateTime": "yesterday" },
            "end": { "dateTime": "2024-03-04T10:00:00Z" }
        }]);
        assert!(normalize_events(&raw).is_err());
    }

    // =========================================================================
    // CalendarState
    // =========================================================================

    #[test]
    fn starts_signed_out() {
        let state = CalendarState::default();
        assert_eq!(agenda(&state), CalendarView::SignedOut { error: None });
    }

    #[test]
    fn loading_view_while_signing_in() {
        let mut state = CalendarState::default();
        state.begin_loading();
        assert_eq!(agenda(&state), CalendarView::Loading);
    }

    #[test]
    fn failed_sign_in_shows_auth_error() {
        let mut state = CalendarState::default();
        state.begin_loading();
        state.finish_sign_in(false);
        assert_eq!(
            agenda(&state),
            CalendarView::SignedOut {
                error: Some(AUTH_FAILED.to_string())
            }
        );
    }

    #[test]
    fn empty_agenda_has_message() {
        let mut state = CalendarState::default();
        state.finish_sign_in(true);
        assert_eq!(state.set_events(&json!([])).unwrap(), 0);
        match agenda(&state) {
            CalendarView::Agenda {
                title,
                items,
                empty_message,
            } => {
                assert_eq!(title, AGENDA_TITLE);
                assert!(items.is_empty());
                assert_eq!(empty_message, Some(NO_EVENTS));
            }
            other => panic!("unexpected view: {other:?}"),
        }
    }

    #[test]
    fn agenda_lists_events_in_order() {
        let mut state = CalendarState::default();
        state.finish_sign_in(true);
        assert_eq!(state.set_events(&sample_events()).unwrap(), 3);
        match agenda(&state) {
            CalendarView::Agenda {
                items,
                empty_message,
                ..
            } => {
                assert_eq!(items.len(), 3);
                assert_eq!(items[0].time, "All day");
                assert_eq!(items[1].summary, "Standup");
                assert!(empty_message.is_none());
            }
            other => panic!("unexpected view: {other:?}"),
        }
    }

    #[test]
    fn events_before_sign_in_are_refused() {
        let mut state = CalendarState::default();
        let err = state.set_events(&sample_events()).unwrap_err();
        assert_eq!(err, WidgetError::NotSignedIn);
        assert_eq!(state.error(), Some("Please sign in first"));
        assert!(state.events().is_empty());
    }

    #[test]
    fn malformed_batch_clears_agenda() {
        let mut state = CalendarState::default();
        state.finish_sign_in(true);
        state.set_events(&sample_events()).unwrap();
        assert!(state.set_events(&json!("oops")).is_err());
        assert!(state.events().is_empty());
        assert_eq!(state.error(), Some(FETCH_FAILED));
    }
}
