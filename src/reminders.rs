//! Deduplication ledger for reminder scheduling.
//!
//! The app layer schedules a local notification per upcoming event
//! date. The ledger records which (event, date) pairs already have one
//! so re-renders and refreshes do not double-schedule. It is plain
//! data; callers persist it through serde however they store state.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Tracks which event dates already have a reminder scheduled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReminderLedger {
    scheduled: HashSet<(String, NaiveDate)>,
}

impl ReminderLedger {
    pub fn new() -> Self {
        ReminderLedger::default()
    }

    /// Records a scheduled reminder. Returns false if that event date
    /// was already marked, in which case the caller should skip
    /// scheduling.
    pub fn mark_scheduled(&mut self, event_id: &str, date: NaiveDate) -> bool {
        self.scheduled.insert((event_id.to_string(), date))
    }

    pub fn is_scheduled(&self, event_id: &str, date: NaiveDate) -> bool {
        self.scheduled.contains(&(event_id.to_string(), date))
    }

    /// Drops every marked date for an event, e.g. after it is deleted
    /// or rescheduled wholesale.
    pub fn clear_event(&mut self, event_id: &str) {
        self.scheduled.retain(|(id, _)| id != event_id);
    }

    pub fn len(&self) -> usize {
        self.scheduled.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scheduled.is_empty()
    }
}
