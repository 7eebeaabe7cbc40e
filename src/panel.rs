use chrono::{Datelike, Month, NaiveDate};
use std::fmt;
use std::ops::RangeInclusive;

use crate::calendar;
use crate::date::CalendarDate;

const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

/// Years a panel can show. The grids of the first and the last of them still
/// reach into the neighbouring year, which has to be a valid [`NaiveDate`].
pub fn panel_years() -> RangeInclusive<i32> {
    (NaiveDate::MIN.year() + 1)..=(NaiveDate::MAX.year() - 1)
}

/// The month currently shown by the picker. It is independent from the
/// selected date until it is synced again on commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelPosition {
    year: i32,
    month: Month,
}

impl PanelPosition {
    /// `month0` is zero based. Returns `None` for months outside of `0..12` and
    /// years outside of [`panel_years`].
    pub fn new(year: i32, month0: u32) -> Option<Self> {
        let month = *MONTHS.get(month0 as usize)?;
        PanelPosition::checked(year, month)
    }

    fn checked(year: i32, month: Month) -> Option<Self> {
        if panel_years().contains(&year) {
            Some(PanelPosition { year, month })
        } else {
            None
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> Month {
        self.month
    }

    pub fn month0(&self) -> u32 {
        self.month.number_from_month() - 1
    }

    /// Navigation stops at the first and the last month of [`panel_years`].
    pub fn next_month(self) -> Self {
        let year = if self.month == Month::December {
            self.year + 1
        } else {
            self.year
        };
        PanelPosition::checked(year, self.month.succ()).unwrap_or(self)
    }

    pub fn prev_month(self) -> Self {
        let year = if self.month == Month::January {
            self.year - 1
        } else {
            self.year
        };
        PanelPosition::checked(year, self.month.pred()).unwrap_or(self)
    }

    pub fn next_year(self) -> Self {
        PanelPosition::checked(self.year + 1, self.month).unwrap_or(self)
    }

    pub fn prev_year(self) -> Self {
        PanelPosition::checked(self.year - 1, self.month).unwrap_or(self)
    }

    pub fn days(&self) -> u32 {
        calendar::days_in_month(self.year, self.month0() as i32)
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month.number_from_month(), 1)
            .expect("panel years are valid dates")
    }

    pub fn contains(&self, date: &CalendarDate) -> bool {
        date.year() == self.year && date.month0() == self.month0()
    }
}

/// The panel showing `date`. Dates in the first or the last year chrono
/// supports get the closest panel instead.
impl From<&CalendarDate> for PanelPosition {
    fn from(date: &CalendarDate) -> Self {
        let years = panel_years();
        PanelPosition {
            year: date.year().max(*years.start()).min(*years.end()),
            month: MONTHS[date.month0() as usize],
        }
    }
}

impl From<CalendarDate> for PanelPosition {
    fn from(date: CalendarDate) -> Self {
        PanelPosition::from(&date)
    }
}

impl fmt::Display for PanelPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month.name(), self.year)
    }
}
