//! Month length data for the Bikram Sambat calendar.
//!
//! BS months do not follow a formula. Each year's lengths come from
//! published panchanga data, so the calendar is driven by a lookup table
//! keyed by year. The bundled table covers BS 2000 through 2090
//! (1943 through 2034 AD); years outside it fall back to a 30-day
//! approximation that callers can detect through [`MonthLength::approximate`].

use std::borrow::Cow;
use std::sync::OnceLock;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{PatroError, PatroResult};

/// Assumed month length for years missing from the table.
pub const FALLBACK_MONTH_DAYS: u8 = 30;

/// First Bikram Sambat year in the bundled table.
pub const BUNDLED_FIRST_YEAR: i32 = 2000;

/// Length of a single Nepali month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthLength {
    pub days: u8,
    /// True when the year was missing from the table and
    /// [`FALLBACK_MONTH_DAYS`] was substituted.
    pub approximate: bool,
}

/// Per-year month lengths anchored to a Gregorian epoch.
///
/// The epoch is the Gregorian date of `first_year`-01-01; every
/// conversion walks forward from there.
#[derive(Debug, Clone)]
pub struct BsTable {
    first_year: i32,
    epoch: NaiveDate,
    rows: Cow<'static, [[u8; 12]]>,
}

impl BsTable {
    /// Builds a table from caller-supplied rows, one `[u8; 12]` per year
    /// starting at `first_year`. Rejects month lengths outside 29-32.
    pub fn new(first_year: i32, epoch: NaiveDate, rows: Vec<[u8; 12]>) -> PatroResult<Self> {
        if rows.is_empty() {
            return Err(PatroError::Table("table must cover at least one year".into()));
        }
        for (offset, row) in rows.iter().enumerate() {
            for (m, &days) in row.iter().enumerate() {
                if !(29..=32).contains(&days) {
                    return Err(PatroError::Table(format!(
                        "BS {}-{:02} has invalid month length {days} (expected 29-32)",
                        first_year + offset as i32,
                        m + 1,
                    )));
                }
            }
        }
        Ok(Self {
            first_year,
            epoch,
            rows: Cow::Owned(rows),
        })
    }

    /// The bundled BS 2000-2090 table.
    pub fn bundled() -> &'static BsTable {
        static BUNDLED: OnceLock<BsTable> = OnceLock::new();
        BUNDLED.get_or_init(|| BsTable {
            first_year: BUNDLED_FIRST_YEAR,
            // BS 2000-01-01 fell on Wednesday, 14 April 1943.
            epoch: NaiveDate::from_ymd_opt(1943, 4, 14).unwrap(),
            rows: Cow::Borrowed(&BUNDLED_ROWS),
        })
    }

    /// First year covered by the table.
    pub fn first_year(&self) -> i32 {
        self.first_year
    }

    /// Last year covered by the table.
    pub fn last_year(&self) -> i32 {
        self.first_year + self.rows.len() as i32 - 1
    }

    /// Gregorian date of `first_year`-01-01.
    pub fn epoch(&self) -> NaiveDate {
        self.epoch
    }

    pub fn contains_year(&self, year: i32) -> bool {
        self.row(year).is_some()
    }

    /// Days in the given BS month (1-12).
    ///
    /// Unknown years resolve to the fallback length with
    /// `approximate: true` rather than failing, so month math keeps
    /// working near the edges of the table.
    pub fn days_in_month(&self, year: i32, month: u32) -> PatroResult<MonthLength> {
        if !(1..=12).contains(&month) {
            return Err(PatroError::MonthOutOfRange(month));
        }
        match self.row(year) {
            Some(row) => Ok(MonthLength {
                days: row[(month - 1) as usize],
                approximate: false,
            }),
            None => {
                tracing::warn!(
                    year,
                    month,
                    "year missing from calendar table, using fallback month length"
                );
                Ok(MonthLength {
                    days: FALLBACK_MONTH_DAYS,
                    approximate: true,
                })
            }
        }
    }

    /// Total days in the given BS year, plus whether the value is a
    /// fallback approximation.
    pub fn days_in_year(&self, year: i32) -> (u16, bool) {
        match self.row(year) {
            Some(row) => (row.iter().map(|&d| u16::from(d)).sum(), false),
            None => (12 * u16::from(FALLBACK_MONTH_DAYS), true),
        }
    }

    fn row(&self, year: i32) -> Option<&[u8; 12]> {
        if year < self.first_year {
            return None;
        }
        self.rows.get((year - self.first_year) as usize)
    }
}

/// Month lengths for BS 2000-2090, Baisakh through Chaitra.
const BUNDLED_ROWS: [[u8; 12]; 91] = [
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2000
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2001
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2002
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2003
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2004
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2005
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2006
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2007
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 29, 31], // 2008
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2009
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2010
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2011
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], // 2012
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2013
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2014
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2015
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], // 2016
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2017
    [31, 32, 31, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2018
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2019
    [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 2020
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2021
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 2022
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2023
    [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 2024
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2025
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2026
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2027
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2028
    [31, 31, 32, 31, 32, 30, 30, 29, 30, 29, 30, 30], // 2029
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2030
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2031
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2032
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2033
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2034
    [30, 32, 31, 32, 31, 31, 29, 30, 30, 29, 29, 31], // 2035
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2036
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2037
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2038
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], // 2039
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2040
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2041
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2042
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], // 2043
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2044
    [31, 32, 31, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2045
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2046
    [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 2047
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2048
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 2049
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2050
    [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 2051
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2052
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 2053
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2054
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2055
    [31, 31, 32, 31, 32, 30, 30, 29, 30, 29, 30, 30], // 2056
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2057
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2058
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2059
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2060
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2061
    [30, 32, 31, 32, 31, 31, 29, 30, 29, 30, 29, 31], // 2062
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2063
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2064
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2065
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 29, 31], // 2066
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2067
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2068
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2069
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], // 2070
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2071
    [31, 32, 31, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2072
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2073
    [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 2074
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2075
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 2076
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2077
    [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 2078
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2079
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 2080
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 30, 30], // 2081
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 30, 30], // 2082
    [31, 31, 32, 31, 31, 30, 30, 30, 29, 30, 30, 30], // 2083
    [31, 31, 32, 31, 31, 30, 30, 30, 29, 30, 30, 30], // 2084
    [31, 32, 31, 32, 30, 31, 30, 30, 29, 30, 30, 30], // 2085
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 30, 30], // 2086
    [31, 31, 32, 31, 31, 31, 30, 30, 29, 30, 30, 30], // 2087
    [30, 31, 32, 32, 30, 31, 30, 30, 29, 30, 30, 30], // 2088
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 30, 30], // 2089
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 30, 30], // 2090
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_covers_expected_range() {
        let table = BsTable::bundled();
        assert_eq!(table.first_year(), 2000);
        assert_eq!(table.last_year(), 2090);
        assert!(table.contains_year(2000));
        assert!(table.contains_year(2090));
        assert!(!table.contains_year(1999));
        assert!(!table.contains_year(2091));
    }

    #[test]
    fn test_bundled_month_lengths_are_plausible() {
        let table = BsTable::bundled();
        for year in table.first_year()..=table.last_year() {
            for month in 1..=12 {
                let len = table
                    .days_in_month(year, month)
                    .expect("Should look up bundled month");
                assert!(
                    (29..=32).contains(&len.days),
                    "BS {year}-{month:02} has implausible length {}",
                    len.days
                );
                assert!(!len.approximate);
            }
        }
    }

    #[test]
    fn test_bundled_year_lengths_are_plausible() {
        let table = BsTable::bundled();
        for year in table.first_year()..=table.last_year() {
            let (days, approximate) = table.days_in_year(year);
            assert!(
                (365..=366).contains(&days),
                "BS {year} has implausible length {days}"
            );
            assert!(!approximate);
        }
    }

    #[test]
    fn test_known_month_lengths() {
        let table = BsTable::bundled();
        // Jestha 2081 ran 32 days (15 May - 14 June 2024).
        let jestha = table
            .days_in_month(2081, 2)
            .expect("Should look up Jestha 2081");
        assert_eq!(jestha.days, 32);
        // Poush is the short month in most years.
        let poush = table
            .days_in_month(2081, 9)
            .expect("Should look up Poush 2081");
        assert_eq!(poush.days, 29);
    }

    #[test]
    fn test_unknown_year_falls_back() {
        let table = BsTable::bundled();
        let len = table
            .days_in_month(2200, 5)
            .expect("Fallback lookup should not fail");
        assert_eq!(len.days, FALLBACK_MONTH_DAYS);
        assert!(len.approximate);

        let (days, approximate) = table.days_in_year(1998);
        assert_eq!(days, 360);
        assert!(approximate);
    }

    #[test]
    fn test_month_out_of_range() {
        let table = BsTable::bundled();
        assert!(matches!(
            table.days_in_month(2081, 0),
            Err(PatroError::MonthOutOfRange(0))
        ));
        assert!(matches!(
            table.days_in_month(2081, 13),
            Err(PatroError::MonthOutOfRange(13))
        ));
    }

    #[test]
    fn test_new_rejects_bad_lengths() {
        let epoch = NaiveDate::from_ymd_opt(1943, 4, 14).unwrap();
        let err = BsTable::new(2000, epoch, vec![[28; 12]]).unwrap_err();
        assert!(matches!(err, PatroError::Table(_)));

        let err = BsTable::new(2000, epoch, vec![]).unwrap_err();
        assert!(matches!(err, PatroError::Table(_)));
    }

    #[test]
    fn test_new_accepts_valid_rows() {
        let epoch = NaiveDate::from_ymd_opt(1943, 4, 14).unwrap();
        let table = BsTable::new(2000, epoch, vec![[30; 12], [31; 12]])
            .expect("Should accept valid rows");
        assert_eq!(table.last_year(), 2001);
        assert_eq!(table.days_in_year(2001), (372, false));
    }
}
