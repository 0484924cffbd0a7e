//! Grouping, windowing, and past/upcoming classification for events.
//!
//! Dashboards show events bucketed by Nepali month with a rolling
//! window around the current month. Grouping is lenient: an event date
//! that fails to resolve is logged and skipped so one bad record does
//! not blank the whole screen.

use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::convert::DateConverter;
use crate::date::{NepaliDate, NepaliDateInfo};
use crate::event::Event;

/// Default rolling window: two months back through one month ahead.
pub const DEFAULT_WINDOW_OFFSETS: [i32; 4] = [-2, -1, 0, 1];

/// Month offsets (relative to the current month) kept by the window
/// filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    #[serde(default = "default_offsets")]
    pub offsets: Vec<i32>,
}

fn default_offsets() -> Vec<i32> {
    DEFAULT_WINDOW_OFFSETS.to_vec()
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            offsets: default_offsets(),
        }
    }
}

impl WindowConfig {
    /// Applies this window around the current month.
    pub fn apply(&self, grouped: &GroupedEvents, current: &NepaliDate) -> GroupedEvents {
        filter_window(grouped, current, &self.offsets)
    }
}

/// One event occurrence inside a month bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventEntry {
    pub event: Event,
    pub date: NepaliDateInfo,
    pub is_today: bool,
}

/// Events bucketed by `YYYY-MM` Nepali month key.
///
/// `BTreeMap` keeps keys in chronological order, since zero-padded
/// keys sort lexically.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupedEvents {
    pub buckets: BTreeMap<String, Vec<EventEntry>>,
}

impl GroupedEvents {
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn entry_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// Month keys in chronological order.
    pub fn month_keys(&self) -> impl Iterator<Item = &str> {
        self.buckets.keys().map(String::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&[EventEntry]> {
        self.buckets.get(key).map(Vec::as_slice)
    }
}

/// Groups events into Nepali month buckets, sorted by day within each
/// bucket.
///
/// `today` marks matching entries via [`EventEntry::is_today`]; callers
/// get it from [`DateConverter::today`] or inject a fixed date in tests.
/// Multi-date events appear once per date, in the bucket each date
/// falls in.
pub fn group_by_month(
    conv: &DateConverter,
    events: &[Event],
    today: &NepaliDate,
) -> GroupedEvents {
    let mut grouped = GroupedEvents::default();

    for event in events {
        for raw in &event.event_dates {
            let info = match conv.resolve(raw) {
                Ok(info) => info,
                Err(error) => {
                    tracing::warn!(
                        event_id = %event.id,
                        date = %raw,
                        error = %error,
                        "skipping unresolvable event date"
                    );
                    continue;
                }
            };
            let entry = EventEntry {
                event: event.clone(),
                is_today: info.date == *today,
                date: info,
            };
            grouped
                .buckets
                .entry(entry.date.date.year_month_key())
                .or_default()
                .push(entry);
        }
    }

    for bucket in grouped.buckets.values_mut() {
        bucket.sort_by_key(|entry| entry.date.date);
    }

    grouped
}

/// Keeps only the buckets whose month lies at one of the given offsets
/// from the current month. Offsets count months and roll across year
/// boundaries.
pub fn filter_window(
    grouped: &GroupedEvents,
    current: &NepaliDate,
    offsets: &[i32],
) -> GroupedEvents {
    let wanted: HashSet<i64> = offsets
        .iter()
        .map(|offset| current.linear_month() + i64::from(*offset))
        .collect();

    let buckets = grouped
        .buckets
        .iter()
        .filter(|(_, entries)| {
            entries
                .first()
                .is_some_and(|entry| wanted.contains(&entry.date.date.linear_month()))
        })
        .map(|(key, entries)| (key.clone(), entries.clone()))
        .collect();

    GroupedEvents { buckets }
}

/// Whether a date lies in the past, on the current day, or ahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Standing {
    Past,
    Today,
    Upcoming,
}

/// A classified event date with its distance from today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayStanding {
    pub standing: Standing,
    /// Signed day count from today to the event date.
    pub days_difference: i64,
}

impl DayStanding {
    pub fn is_today(&self) -> bool {
        self.standing == Standing::Today
    }

    /// Today counts as upcoming: the event has not passed yet.
    pub fn is_upcoming(&self) -> bool {
        matches!(self.standing, Standing::Today | Standing::Upcoming)
    }

    pub fn is_past(&self) -> bool {
        self.standing == Standing::Past
    }
}

/// Classifies an event date against today, both on the Gregorian axis.
pub fn classify(event_date: NaiveDate, today: NaiveDate) -> DayStanding {
    let days_difference = (event_date - today).num_days();
    let standing = match days_difference {
        d if d < 0 => Standing::Past,
        0 => Standing::Today,
        _ => Standing::Upcoming,
    };
    DayStanding {
        standing,
        days_difference,
    }
}
