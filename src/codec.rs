//! Conversion between [`CalendarDate`] and the `DD-MM-YYYY` text shown in the
//! picker input.

use nom::{
    bytes::complete::take_while_m_n,
    character::complete::char,
    combinator::{all_consuming, map_res},
    sequence::{preceded, tuple},
    IResult,
};
use std::str::FromStr;

use crate::calendar;
use crate::date::CalendarDate;
use crate::error::{Error, ErrorKind, Result};

pub const DATE_TEXT_FORMAT: &str = "DD-MM-YYYY";

fn digits<T: FromStr>(count: usize) -> impl Fn(&str) -> IResult<&str, T> {
    move |input| {
        map_res(
            take_while_m_n(count, count, |c: char| c.is_ascii_digit()),
            |s: &str| s.parse::<T>(),
        )(input)
    }
}

fn date_text(input: &str) -> IResult<&str, (u32, u32, i32)> {
    all_consuming(tuple((
        digits::<u32>(2),
        preceded(char('-'), digits::<u32>(2)),
        preceded(char('-'), digits::<i32>(4)),
    )))(input)
}

pub fn format_date(date: &CalendarDate) -> String {
    format!(
        "{:02}-{:02}-{:04}",
        date.day(),
        date.month0() + 1,
        date.year()
    )
}

/// Parses the canonical `DD-MM-YYYY` text into a date without time of day.
///
/// Anything that does not match the pattern exactly or does not name a real
/// day is rejected with [`ErrorKind::InvalidDateText`]; there is no attempt to
/// correct the input.
pub fn parse_date(text: &str) -> Result<CalendarDate> {
    let (_, (day, month, year)) = date_text(text).map_err(|_| {
        Error::new(
            ErrorKind::InvalidDateText,
            &format!("'{}' does not match {}", text, DATE_TEXT_FORMAT),
        )
    })?;

    if month < 1 || month > 12 {
        return Err(Error::new(
            ErrorKind::InvalidDateText,
            &format!("month {} out of range", month),
        ));
    }

    let days = calendar::days_in_month(year, month as i32 - 1);
    if day < 1 || day > days {
        return Err(Error::new(
            ErrorKind::InvalidDateText,
            &format!("day {} out of range, {:02}-{:04} has {} days", day, month, year, days),
        ));
    }

    CalendarDate::from_ymd(year, month - 1, day).ok_or_else(|| {
        Error::new(
            ErrorKind::InvalidDateText,
            &format!("'{}' is not a calendar date", text),
        )
    })
}
