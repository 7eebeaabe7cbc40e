use chrono::{Datelike, NaiveDate, Weekday};
use serde_with::DeserializeFromStr;
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, ErrorKind};

/// Number of days in `month0` (zero-based) of `year`.
///
/// `month0` may lie outside of `0..12` and rolls over into the adjacent
/// years, so `days_in_month(2023, -1)` is the length of December 2022. The
/// length is the day number of the day before the first of the following
/// month, which keeps leap years out of our hands.
///
/// # Panics
///
/// If the month lies outside of the range supported by [`NaiveDate`].
pub fn days_in_month(year: i32, month0: i32) -> u32 {
    let next = i64::from(year) * 12 + i64::from(month0) + 1;
    let next_month = next.rem_euclid(12) as u32 + 1;
    let after_last = i64::from(NaiveDate::MAX.year()) * 12 + 12;

    i32::try_from(next.div_euclid(12))
        .ok()
        .and_then(|next_year| NaiveDate::from_ymd_opt(next_year, next_month, 1))
        .and_then(|first_of_next| first_of_next.pred_opt())
        .map(|last| last.day())
        // the last supported month has no following month to step back from
        .or_else(|| (next == after_last).then(|| NaiveDate::MAX.day()))
        .expect("month outside of the supported calendar range")
}

/// The weekday shown in the first grid column together with the lookup table
/// mapping chrono's sunday based weekday numbers onto grid columns.
#[derive(Clone, Copy, PartialEq, Eq, DeserializeFromStr)]
pub struct WeekStart {
    first: Weekday,
    columns: [u8; 7],
}

impl WeekStart {
    pub fn new(first: Weekday) -> Self {
        let offset = first.num_days_from_sunday();
        let mut columns = [0; 7];

        for (from_sunday, column) in columns.iter_mut().enumerate() {
            *column = ((from_sunday as u32 + 7 - offset) % 7) as u8;
        }

        WeekStart { first, columns }
    }

    pub fn first(&self) -> Weekday {
        self.first
    }

    pub fn last(&self) -> Weekday {
        self.first.pred()
    }

    /// Grid column of `date`, `0` being the column of [`WeekStart::first`].
    pub fn column<D: Datelike>(&self, date: &D) -> u32 {
        u32::from(self.columns[date.weekday().num_days_from_sunday() as usize])
    }

    /// The seven weekdays in column order.
    pub fn weekdays(&self) -> impl Iterator<Item = Weekday> {
        std::iter::successors(Some(self.first), |day| Some(day.succ())).take(7)
    }
}

impl Default for WeekStart {
    fn default() -> Self {
        WeekStart::new(Weekday::Mon)
    }
}

impl From<Weekday> for WeekStart {
    fn from(first: Weekday) -> Self {
        WeekStart::new(first)
    }
}

impl fmt::Debug for WeekStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("WeekStart").field(&self.first).finish()
    }
}

impl FromStr for WeekStart {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<Weekday>().map(WeekStart::new).map_err(|_| {
            Error::new(
                ErrorKind::InvalidWeekday,
                &format!("'{}' is not a weekday", s),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2023, 0), 31);
        assert_eq!(days_in_month(2023, 1), 28);
        assert_eq!(days_in_month(2024, 1), 29);
        assert_eq!(days_in_month(2023, 3), 30);
        assert_eq!(days_in_month(2023, 11), 31);
    }

    #[test]
    fn century_leap_years() {
        assert_eq!(days_in_month(1900, 1), 28);
        assert_eq!(days_in_month(2000, 1), 29);
        assert_eq!(days_in_month(2100, 1), 28);
    }

    #[test]
    fn month_rolls_over_into_adjacent_years() {
        // December 2022 and January 2024
        assert_eq!(days_in_month(2023, -1), 31);
        assert_eq!(days_in_month(2023, 12), 31);
        // February 2024
        assert_eq!(days_in_month(2023, 13), 29);
        assert_eq!(days_in_month(2025, -11), 29);
    }

    #[test]
    fn lengths_at_the_calendar_limits() {
        let last = NaiveDate::MAX;
        assert_eq!(days_in_month(last.year(), last.month0() as i32), 31);
        assert_eq!(days_in_month(last.year() + 1, -1), 31);

        let first = NaiveDate::MIN;
        assert_eq!(days_in_month(first.year(), first.month0() as i32), 31);
    }

    #[test]
    fn lengths_are_always_in_range() {
        for year in 1990..2030 {
            for month0 in 0..12 {
                let days = days_in_month(year, month0);
                assert!((28..=31).contains(&days), "{}-{}: {}", year, month0, days);
            }
        }
    }

    #[test]
    fn monday_first_table() {
        let week_start = WeekStart::default();
        assert_eq!(week_start.columns, [6, 0, 1, 2, 3, 4, 5]);

        // 2024-02-01 is a thursday
        let date = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        assert_eq!(week_start.column(&date), 3);

        let sunday = NaiveDate::from_ymd_opt(2024, 2, 4).unwrap();
        assert_eq!(week_start.column(&sunday), 6);
    }

    #[test]
    fn sunday_first_table() {
        let week_start = WeekStart::new(Weekday::Sun);
        assert_eq!(week_start.columns, [0, 1, 2, 3, 4, 5, 6]);

        let thursday = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        assert_eq!(week_start.column(&thursday), 4);
        assert_eq!(week_start.last(), Weekday::Sat);
    }

    #[test]
    fn weekdays_in_column_order() {
        let week_start = WeekStart::new(Weekday::Sat);
        let days: Vec<Weekday> = week_start.weekdays().collect();
        assert_eq!(days.len(), 7);
        assert_eq!(days[0], Weekday::Sat);
        assert_eq!(days[1], Weekday::Sun);
        assert_eq!(days[6], Weekday::Fri);

        for (column, day) in days.iter().enumerate() {
            assert_eq!(week_start.columns[day.num_days_from_sunday() as usize] as usize, column);
        }
    }

    #[test]
    fn parse_week_start() {
        assert_eq!(
            "sunday".parse::<WeekStart>().unwrap(),
            WeekStart::new(Weekday::Sun)
        );
        assert_eq!(" Mon ".parse::<WeekStart>().unwrap(), WeekStart::default());

        let err = "someday".parse::<WeekStart>().unwrap_err();
        assert!(matches!(err.kind, ErrorKind::InvalidWeekday));
    }
}
