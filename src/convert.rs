//! Conversion between Gregorian and Bikram Sambat dates.
//!
//! All conversions walk day counts from the table's epoch anchor
//! (Gregorian date of the first BS year's first day). "Today" is
//! always evaluated on the Kathmandu wall clock, since the Nepali
//! civil day flips at UTC+05:45 regardless of where the host runs.

use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, Utc, Weekday};

use crate::date::{NepaliDate, NepaliDateInfo};
use crate::error::{PatroError, PatroResult};
use crate::numeral::to_devanagari;
use crate::table::BsTable;

/// Kathmandu's UTC offset in seconds (+05:45).
///
/// Nepal has used this offset without daylight saving since 1986, so it
/// is hardcoded rather than read from a timezone database.
pub const KATHMANDU_OFFSET_SECONDS: i32 = 5 * 3600 + 45 * 60;

/// Years past the end of the table that conversions will still cover
/// using fallback month lengths.
pub const SLACK_YEARS: i32 = 10;

/// The fixed Kathmandu offset as a chrono timezone.
pub fn kathmandu_offset() -> FixedOffset {
    FixedOffset::east_opt(KATHMANDU_OFFSET_SECONDS).unwrap()
}

/// Gregorian/Bikram Sambat converter over a month length table.
#[derive(Debug, Clone)]
pub struct DateConverter {
    table: BsTable,
}

impl DateConverter {
    pub fn new(table: BsTable) -> Self {
        Self { table }
    }

    /// Converter over the bundled BS 2000-2090 table.
    pub fn bundled() -> Self {
        Self {
            table: BsTable::bundled().clone(),
        }
    }

    pub fn table(&self) -> &BsTable {
        &self.table
    }

    /// Converts a Gregorian date to the Nepali date it falls on.
    ///
    /// Dates past the end of the table are still converted, best-effort,
    /// through fallback-length years for up to [`SLACK_YEARS`] years.
    /// Only dates before the epoch or beyond that slack fail, with a
    /// [`PatroError::DateOutOfRange`].
    pub fn to_nepali(&self, date: NaiveDate) -> PatroResult<NepaliDate> {
        let mut remaining = (date - self.table.epoch()).num_days();
        if remaining < 0 {
            return Err(PatroError::DateOutOfRange(date));
        }

        let mut year = self.table.first_year();
        loop {
            let (days, _) = self.table.days_in_year(year);
            if remaining < i64::from(days) {
                break;
            }
            remaining -= i64::from(days);
            year += 1;
            if year > self.table.last_year() + SLACK_YEARS {
                return Err(PatroError::DateOutOfRange(date));
            }
        }

        // remaining < days_in_year(year), so this walk stays within 1-12.
        let mut month = 1;
        loop {
            let len = self.table.days_in_month(year, month)?;
            if remaining < i64::from(len.days) {
                break;
            }
            remaining -= i64::from(len.days);
            month += 1;
        }

        NepaliDate::new(year, month, remaining as u32 + 1)
    }

    /// Converts a Nepali date to its Gregorian equivalent.
    ///
    /// The day is validated against the actual (or fallback) month
    /// length, so `2081-09-30` fails even though 30 is structurally
    /// valid, Poush 2081 having only 29 days.
    pub fn to_gregorian(&self, date: &NepaliDate) -> PatroResult<NaiveDate> {
        if date.year < self.table.first_year()
            || date.year > self.table.last_year() + SLACK_YEARS
        {
            return Err(PatroError::YearOutOfRange(date.year));
        }
        let len = self.table.days_in_month(date.year, date.month)?;
        if date.day == 0 || date.day > u32::from(len.days) {
            return Err(PatroError::DayOutOfRange {
                year: date.year,
                month: date.month,
                day: date.day,
                max: len.days,
            });
        }

        let mut days: i64 = 0;
        for year in self.table.first_year()..date.year {
            days += i64::from(self.table.days_in_year(year).0);
        }
        for month in 1..date.month {
            days += i64::from(self.table.days_in_month(date.year, month)?.days);
        }
        days += i64::from(date.day) - 1;

        Ok(self.table.epoch() + Duration::days(days))
    }

    /// Weekday of a Nepali date, via its Gregorian equivalent.
    pub fn weekday(&self, date: &NepaliDate) -> PatroResult<Weekday> {
        Ok(self.to_gregorian(date)?.weekday())
    }

    /// Resolves a Gregorian date into a [`NepaliDateInfo`] with the
    /// Devanagari day glyph filled in.
    pub fn date_info(&self, english: NaiveDate) -> PatroResult<NepaliDateInfo> {
        let date = self.to_nepali(english)?;
        Ok(NepaliDateInfo {
            date,
            day_glyph: to_devanagari(&date.day.to_string()),
            english_date: english,
            approximate: !self.table.contains_year(date.year),
        })
    }

    /// Parses a strict `YYYY-MM-DD` string and resolves it.
    pub fn resolve(&self, input: &str) -> PatroResult<NepaliDateInfo> {
        self.date_info(parse_iso(input)?)
    }

    /// Nepali date at the given instant, on the Kathmandu wall clock.
    pub fn nepali_date_at(&self, instant: DateTime<Utc>) -> PatroResult<NepaliDateInfo> {
        let local = instant.with_timezone(&kathmandu_offset());
        self.date_info(local.date_naive())
    }

    /// Today's Nepali date in Kathmandu.
    pub fn today(&self) -> PatroResult<NepaliDateInfo> {
        self.nepali_date_at(Utc::now())
    }
}

/// Parses a date in strict `YYYY-MM-DD` form.
///
/// Exactly ten characters, ASCII digits, zero-padded. Anything looser
/// (single-digit months, slashes, trailing time parts) is rejected.
pub fn parse_iso(input: &str) -> PatroResult<NaiveDate> {
    let bytes = input.as_bytes();
    let shape_ok = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| matches!(i, 4 | 7) || b.is_ascii_digit());
    if !shape_ok {
        return Err(PatroError::InvalidDate(format!(
            "'{input}' does not match YYYY-MM-DD"
        )));
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|_| PatroError::InvalidDate(format!("'{input}' is not a real calendar date")))
}
