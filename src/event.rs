//! Business event records and date resolution.
//!
//! Events arrive as JSON with camelCase keys and carry their dates as
//! Gregorian `YYYY-MM-DD` strings. Resolution turns each string into a
//! [`NepaliDateInfo`] so screens can render BS dates directly.

use serde::{Deserialize, Serialize};

use crate::convert::DateConverter;
use crate::date::NepaliDateInfo;
use crate::error::{PatroError, PatroResult};

/// A business event with one or more scheduled dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub client: Option<String>,
    #[serde(default)]
    pub venue: Option<String>,
    /// Gregorian dates in `YYYY-MM-DD` form, as stored upstream.
    #[serde(default)]
    pub event_dates: Vec<String>,
}

/// An event with every date string resolved to the Nepali calendar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedEvent {
    pub event: Event,
    pub dates: Vec<NepaliDateInfo>,
}

/// Parses a JSON array of events.
pub fn parse_events(json: &str) -> PatroResult<Vec<Event>> {
    serde_json::from_str(json).map_err(|e| PatroError::Serialization(e.to_string()))
}

/// Resolves all of an event's dates, failing on the first bad one.
///
/// Grouping paths that prefer to skip bad dates resolve per-date
/// instead; this strict form is for callers showing a single event.
pub fn resolve_event(conv: &DateConverter, event: &Event) -> PatroResult<ResolvedEvent> {
    let dates = event
        .event_dates
        .iter()
        .map(|raw| conv.resolve(raw))
        .collect::<PatroResult<Vec<_>>>()?;
    Ok(ResolvedEvent {
        event: event.clone(),
        dates,
    })
}
