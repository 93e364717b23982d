//! Normalization of raw calendar provider events.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use serde_json::Value;

use crate::error::WidgetError;

/// Start or end of an event: a timestamp, or a whole day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventTime {
    At(DateTime<FixedOffset>),
    AllDay(NaiveDate),
}

impl EventTime {
    /// Reads `{"dateTime": rfc3339}` or, failing that, `{"date": "YYYY-MM-DD"}`.
    fn from_json(value: &Value, field: &str, id: &str) -> Result<Self, WidgetError> {
        let malformed = |what: String| WidgetError::MalformedEvent(format!("{id}: {what}"));

        if let Some(ts) = value.get("dateTime").and_then(Value::as_str) {
            return DateTime::parse_from_rfc3339(ts)
                .map(EventTime::At)
                .map_err(|e| malformed(format!("{field}.dateTime {ts:?}: {e}")));
        }
        if let Some(day) = value.get("date").and_then(Value::as_str) {
            return NaiveDate::parse_from_str(day, "%Y-%m-%d")
                .map(EventTime::AllDay)
                .map_err(|e| malformed(format!("{field}.date {day:?}: {e}")));
        }
        Err(malformed(format!("{field} has neither dateTime nor date")))
    }

    /// Ordering key: the UTC instant of a timestamp, so mixed offsets sort
    /// by when they happen. All-day events sort at midnight.
    pub fn sort_key(&self) -> NaiveDateTime {
        match self {
            EventTime::At(dt) => dt.naive_utc(),
            EventTime::AllDay(date) => date.and_time(NaiveTime::MIN),
        }
    }

    /// `HH:MM` for timestamps, `None` for all-day.
    pub fn clock(&self) -> Option<String> {
        match self {
            EventTime::At(dt) => Some(dt.format("%H:%M").to_string()),
            EventTime::AllDay(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEvent {
    pub id: String,
    pub summary: String,
    pub start: EventTime,
    pub end: EventTime,
}

impl CalendarEvent {
    /// `HH:MM – HH:MM`, or `All day` when either end is a date.
    pub fn time_label(&self) -> String {
        match (self.start.clock(), self.end.clock()) {
            (Some(start), Some(end)) => format!("{start} – {end}"),
            _ => "All day".to_string(),
        }
    }
}

/// Convert the provider's event list into [`CalendarEvent`]s sorted by start.
///
/// Expects a JSON array of objects with `id`, optional `summary`, and
/// `start`/`end` objects. Any malformed entry fails the whole batch.
pub fn normalize_events(raw: &Value) -> Result<Vec<CalendarEvent>, WidgetError> {
    let items = raw
        .as_array()
        .ok_or_else(|| WidgetError::MalformedEvent("expected an array of events".into()))?;

    let mut events = items
        .iter()
        .enumerate()
        .map(|(index, item)| -> Result<CalendarEvent, WidgetError> {
            let id = item
                .get("id")
                .and_then(Value::as_str)
                .ok_or_else(|| WidgetError::MalformedEvent(format!("event #{index} has no id")))?;
            let summary = item
                .get("summary")
                .and_then(Value::as_str)
                .unwrap_or("(No title)");
            let start = item.get("start").unwrap_or(&Value::Null);
            let end = item.get("end").unwrap_or(&Value::Null);

            Ok(CalendarEvent {
                id: id.to_string(),
                summary: summary.to_string(),
                start: EventTime::from_json(start, "start", id)?,
                end: EventTime::from_json(end, "end", id)?,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    events.sort_by_key(|e| e.start.sort_key());
    Ok(events)
}
