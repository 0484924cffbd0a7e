//! Bikram Sambat calendar core.
//!
//! This crate provides the calendar layer consumed in-process by app screens and hooks:
//! - `DateConverter` for AD/BS conversion anchored to a month length table
//! - `MonthGrid` for week-aligned calendar views
//! - event grouping, rolling window filtering, and Devanagari date labels

pub mod convert;
pub mod date;
pub mod error;
pub mod event;
pub mod format;
pub mod grouping;
pub mod month_grid;
pub mod numeral;
pub mod reminders;
pub mod table;

// Re-export the types most callers need at the crate root
pub use convert::{DateConverter, KATHMANDU_OFFSET_SECONDS, kathmandu_offset, parse_iso};
pub use date::{NepaliDate, NepaliDateInfo};
pub use error::{PatroError, PatroResult};
pub use event::{Event, ResolvedEvent, parse_events, resolve_event};
pub use format::{format_date_label, month_name, month_name_ne, weekday_name_ne};
pub use grouping::{
    DayStanding, EventEntry, GroupedEvents, Standing, WindowConfig, classify, filter_window,
    group_by_month,
};
pub use month_grid::{MonthGrid, Week};
pub use reminders::ReminderLedger;
pub use table::{BsTable, MonthLength};
