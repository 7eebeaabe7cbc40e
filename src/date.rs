use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use std::convert::From;
use std::fmt;
use std::str::FromStr;

use crate::codec;
use crate::error::Error;

/// A real calendar date, optionally carrying the time of day it was created
/// with. The time of day is never looked at by the grid or the text codec,
/// it only travels along so a new selection can keep it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CalendarDate {
    date: NaiveDate,
    time: Option<NaiveTime>,
}

impl CalendarDate {
    /// `month0` is zero based. Returns `None` if the triple is not a date.
    pub fn from_ymd(year: i32, month0: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month0.checked_add(1)?, day).map(CalendarDate::from)
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn month0(&self) -> u32 {
        self.date.month0()
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }

    pub fn hour(&self) -> Option<u32> {
        self.time.map(|t| t.hour())
    }

    pub fn minute(&self) -> Option<u32> {
        self.time.map(|t| t.minute())
    }

    pub fn time(&self) -> Option<NaiveTime> {
        self.time
    }

    pub fn naive_date(&self) -> NaiveDate {
        self.date
    }

    /// Combined date and time, midnight if no time of day is carried.
    pub fn naive_datetime(&self) -> NaiveDateTime {
        self.date.and_time(self.time.unwrap_or(NaiveTime::MIN))
    }

    pub fn with_time(self, time: Option<NaiveTime>) -> Self {
        CalendarDate {
            date: self.date,
            time,
        }
    }

    /// Same day without the time of day.
    pub fn date_only(self) -> Self {
        self.with_time(None)
    }

    pub fn is_same_day(&self, other: &CalendarDate) -> bool {
        self.date == other.date
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        CalendarDate { date, time: None }
    }
}

impl From<NaiveDateTime> for CalendarDate {
    fn from(datetime: NaiveDateTime) -> Self {
        CalendarDate {
            date: datetime.date(),
            time: Some(datetime.time()),
        }
    }
}

impl From<CalendarDate> for NaiveDate {
    fn from(date: CalendarDate) -> Self {
        date.date
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&codec::format_date(self))
    }
}

impl FromStr for CalendarDate {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        codec::parse_date(s)
    }
}
