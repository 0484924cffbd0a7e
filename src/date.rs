//! Bikram Sambat date types.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{PatroError, PatroResult};

/// A calendar date in the Bikram Sambat system.
///
/// Months and days are 1-based. Ordering is derived from the field
/// order, so dates compare chronologically.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct NepaliDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl NepaliDate {
    /// Builds a date after structural validation: month 1-12, day 1-32.
    ///
    /// This does not consult the month table; a day of 32 in a 29-day
    /// month passes here and is caught at conversion time.
    pub fn new(year: i32, month: u32, day: u32) -> PatroResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(PatroError::MonthOutOfRange(month));
        }
        if !(1..=32).contains(&day) {
            return Err(PatroError::DayOutOfRange {
                year,
                month,
                day,
                max: 32,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Zero-based month, for indexing.
    pub fn month0(&self) -> u32 {
        self.month - 1
    }

    /// Grouping key in `YYYY-MM` form, e.g. `"2081-02"`.
    pub fn year_month_key(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }

    /// Months since year zero, for cross-year month arithmetic.
    pub fn linear_month(&self) -> i64 {
        linear_month(self.year, self.month)
    }
}

impl fmt::Display for NepaliDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Maps a (year, 1-based month) pair onto a single month axis.
///
/// Adjacent months differ by exactly one even across year boundaries,
/// which is what rolling-window filters need.
pub fn linear_month(year: i32, month: u32) -> i64 {
    i64::from(year) * 12 + i64::from(month) - 1
}

/// Inverse of [`linear_month`].
pub fn from_linear_month(index: i64) -> (i32, u32) {
    let year = index.div_euclid(12);
    let month0 = index.rem_euclid(12);
    (year as i32, month0 as u32 + 1)
}

/// A resolved Nepali date bundled with its presentation fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NepaliDateInfo {
    pub date: NepaliDate,
    /// Day of month rendered in Devanagari digits, e.g. `"१५"`.
    pub day_glyph: String,
    /// The equivalent Gregorian date.
    pub english_date: NaiveDate,
    /// True when the conversion relied on fallback month lengths.
    pub approximate: bool,
}
