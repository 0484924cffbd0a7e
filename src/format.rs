//! Month and weekday names, and human-readable date labels.
//!
//! Labels follow the convention Nepali business apps use: Latin month
//! transliterations with Devanagari day and year numerals, e.g.
//! `"Jestha ५, १२"`.

use chrono::Weekday;

use crate::date::NepaliDate;
use crate::error::{PatroError, PatroResult};
use crate::numeral::to_devanagari;

/// Transliterated month names, Baisakh (1) through Chaitra (12).
pub const MONTH_NAMES: [&str; 12] = [
    "Baisakh", "Jestha", "Asar", "Shrawan", "Bhadra", "Asoj", "Kartik", "Mangsir", "Poush",
    "Magh", "Falgun", "Chaitra",
];

/// Devanagari month names, Baisakh (1) through Chaitra (12).
pub const MONTH_NAMES_NE: [&str; 12] = [
    "बैशाख", "जेठ", "असार", "साउन", "भदौ", "असोज", "कात्तिक", "मंसिर", "पुष", "माघ", "फागुन", "चैत",
];

/// Devanagari weekday names, Sunday first.
pub const WEEKDAY_NAMES_NE: [&str; 7] = [
    "आइतबार", "सोमबार", "मंगलबार", "बुधबार", "बिहिबार", "शुक्रबार", "शनिबार",
];

/// Transliterated name of a BS month (1-12).
pub fn month_name(month: u32) -> PatroResult<&'static str> {
    if !(1..=12).contains(&month) {
        return Err(PatroError::MonthOutOfRange(month));
    }
    Ok(MONTH_NAMES[(month - 1) as usize])
}

/// Devanagari name of a BS month (1-12).
pub fn month_name_ne(month: u32) -> PatroResult<&'static str> {
    if !(1..=12).contains(&month) {
        return Err(PatroError::MonthOutOfRange(month));
    }
    Ok(MONTH_NAMES_NE[(month - 1) as usize])
}

/// Devanagari weekday name.
pub fn weekday_name_ne(weekday: Weekday) -> &'static str {
    WEEKDAY_NAMES_NE[weekday.num_days_from_sunday() as usize]
}

/// Formats a set of event dates as one label, preserving input order.
///
/// Dates within a single month collapse onto one month name
/// (`"Jestha ५, १२"`); dates across months are listed fully qualified
/// (`"Jestha ३२, Asar १"`). With `show_year`, a shared year is appended
/// once; disagreeing years are spelled per entry. An empty slice
/// formats as an empty string.
pub fn format_date_label(dates: &[NepaliDate], show_year: bool) -> PatroResult<String> {
    let Some(first) = dates.first() else {
        return Ok(String::new());
    };

    let same_month = dates
        .iter()
        .all(|d| d.year == first.year && d.month == first.month);
    let same_year = dates.iter().all(|d| d.year == first.year);

    let label = if same_month {
        let days: Vec<String> = dates.iter().map(|d| localize(d.day)).collect();
        let mut label = format!("{} {}", month_name(first.month)?, days.join(", "));
        if show_year {
            label.push_str(&format!(", {}", localize(first.year)));
        }
        label
    } else if same_year || !show_year {
        let entries: Vec<String> = dates
            .iter()
            .map(|d| Ok(format!("{} {}", month_name(d.month)?, localize(d.day))))
            .collect::<PatroResult<_>>()?;
        let mut label = entries.join(", ");
        if show_year && same_year {
            label.push_str(&format!(", {}", localize(first.year)));
        }
        label
    } else {
        let entries: Vec<String> = dates
            .iter()
            .map(|d| {
                Ok(format!(
                    "{} {} {}",
                    month_name(d.month)?,
                    localize(d.day),
                    localize(d.year)
                ))
            })
            .collect::<PatroResult<_>>()?;
        entries.join(", ")
    };

    Ok(label)
}

fn localize(value: impl ToString) -> String {
    to_devanagari(&value.to_string())
}
