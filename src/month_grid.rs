//! Week-aligned month grids for calendar views.
//!
//! A grid is the classic wall calendar shape: rows of seven slots,
//! Sunday first, with `None` padding before the 1st and after the last
//! day so every row is full width.

use chrono::{Datelike, Duration};
use serde::{Deserialize, Serialize};

use crate::convert::DateConverter;
use crate::date::{self, NepaliDate, NepaliDateInfo};
use crate::error::PatroResult;
use crate::numeral::to_devanagari;

/// One grid row, Sunday through Saturday.
pub type Week = [Option<NepaliDateInfo>; 7];

/// A Nepali month laid out in week rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub weeks: Vec<Week>,
}

impl MonthGrid {
    /// Lays out the given BS month.
    ///
    /// Only the first day goes through a full conversion; the remaining
    /// cells extend it one Gregorian day at a time.
    pub fn build(conv: &DateConverter, year: i32, month: u32) -> PatroResult<MonthGrid> {
        let len = conv.table().days_in_month(year, month)?;
        let first = NepaliDate::new(year, month, 1)?;
        let first_english = conv.to_gregorian(&first)?;
        let leading = first_english.weekday().num_days_from_sunday() as usize;

        let mut cells: Vec<Option<NepaliDateInfo>> = vec![None; leading];
        for day in 1..=u32::from(len.days) {
            cells.push(Some(NepaliDateInfo {
                date: NepaliDate::new(year, month, day)?,
                day_glyph: to_devanagari(&day.to_string()),
                english_date: first_english + Duration::days(i64::from(day) - 1),
                approximate: len.approximate,
            }));
        }
        while cells.len() % 7 != 0 {
            cells.push(None);
        }

        let weeks = cells
            .chunks_exact(7)
            .map(|chunk| std::array::from_fn(|i| chunk[i].clone()))
            .collect();

        Ok(MonthGrid { year, month, weeks })
    }

    /// Number of real days in the grid, excluding padding.
    pub fn day_count(&self) -> usize {
        self.weeks
            .iter()
            .flatten()
            .filter(|cell| cell.is_some())
            .count()
    }
}

/// The month after the given one, rolling into the next year.
pub fn next_month(year: i32, month: u32) -> (i32, u32) {
    date::from_linear_month(date::linear_month(year, month) + 1)
}

/// The month before the given one, rolling into the previous year.
pub fn prev_month(year: i32, month: u32) -> (i32, u32) {
    date::from_linear_month(date::linear_month(year, month) - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_jestha_2081_layout() {
        let conv = DateConverter::bundled();
        // Jestha 2081 has 32 days and starts on Tuesday, 14 May 2024.
        let grid = MonthGrid::build(&conv, 2081, 2).expect("Should build grid");

        assert_eq!(grid.year, 2081);
        assert_eq!(grid.month, 2);
        assert_eq!(grid.day_count(), 32);
        assert_eq!(grid.weeks.len(), 5);

        assert!(grid.weeks[0][0].is_none());
        assert!(grid.weeks[0][1].is_none());
        let first = grid.weeks[0][2].as_ref().expect("Cell should hold day 1");
        assert_eq!(first.date.day, 1);
        assert_eq!(
            first.english_date,
            NaiveDate::from_ymd_opt(2024, 5, 14).unwrap()
        );

        let last = grid.weeks[4][5].as_ref().expect("Cell should hold day 32");
        assert_eq!(last.date.day, 32);
        assert!(grid.weeks[4][6].is_none());
    }

    #[test]
    fn test_baisakh_2081_starts_on_saturday() {
        let conv = DateConverter::bundled();
        // Baisakh 2081 starts 13 April 2024, a Saturday, so the first
        // row is all padding except the final slot.
        let grid = MonthGrid::build(&conv, 2081, 1).expect("Should build grid");

        assert_eq!(grid.weeks.len(), 6);
        for slot in 0..6 {
            assert!(grid.weeks[0][slot].is_none());
        }
        assert_eq!(
            grid.weeks[0][6].as_ref().expect("Cell should hold day 1").date.day,
            1
        );
        assert_eq!(grid.day_count(), 31);
    }

    #[test]
    fn test_days_are_contiguous() {
        let conv = DateConverter::bundled();
        let grid = MonthGrid::build(&conv, 2081, 9).expect("Should build grid");
        let days: Vec<u32> = grid
            .weeks
            .iter()
            .flatten()
            .filter_map(|cell| cell.as_ref().map(|info| info.date.day))
            .collect();
        let expected: Vec<u32> = (1..=29).collect();
        assert_eq!(days, expected);
    }

    #[test]
    fn test_cells_agree_with_full_conversion() {
        let conv = DateConverter::bundled();
        // Cells are derived from the first day of the month; every one
        // must still equal a from-scratch conversion of its Gregorian
        // date, inside the table and in the fallback years past it.
        for (year, month) in [(2081, 2), (2095, 3)] {
            let grid = MonthGrid::build(&conv, year, month).expect("Should build grid");
            for cell in grid.weeks.iter().flatten().flatten() {
                let full = conv
                    .date_info(cell.english_date)
                    .expect("Should convert cell date");
                assert_eq!(*cell, full);
            }
        }
    }

    #[test]
    fn test_fallback_year_grid_is_approximate() {
        let conv = DateConverter::bundled();
        let grid = MonthGrid::build(&conv, 2095, 3).expect("Should build fallback grid");
        assert_eq!(grid.day_count(), 30);
        for cell in grid.weeks.iter().flatten().flatten() {
            assert!(cell.approximate);
        }
    }

    #[test]
    fn test_invalid_month_is_rejected() {
        let conv = DateConverter::bundled();
        assert!(MonthGrid::build(&conv, 2081, 0).is_err());
        assert!(MonthGrid::build(&conv, 2081, 13).is_err());
    }

    #[test]
    fn test_month_rollover() {
        assert_eq!(next_month(2081, 5), (2081, 6));
        assert_eq!(next_month(2080, 12), (2081, 1));
        assert_eq!(prev_month(2081, 1), (2080, 12));
        assert_eq!(prev_month(2081, 6), (2081, 5));
    }
}
