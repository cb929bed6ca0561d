//! UTC calendar dates parsed from fixed-position `YYYY-MM-DD` strings.
//!
//! A [`CalendarDate`] has no time-of-day and no timezone, so weekday and
//! month-end checks give the same answer on every machine.

use crate::domain::error::DateParseError;
use chrono::{Datelike, NaiveDate, Weekday};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Parse by character position: year at 0..4, month at 5..7, day at 8..10.
    ///
    /// Anything after position 10 must start with `T` or a space and is
    /// ignored, so `2024-01-05T00:00:00Z` parses as 2024-01-05.
    pub fn parse(s: &str) -> Result<Self, DateParseError> {
        let bytes = s.as_bytes();
        if bytes.len() < 10 {
            return Err(DateParseError::new(
                format!("expected YYYY-MM-DD, got {} characters", bytes.len()),
                bytes.len(),
            ));
        }

        for &pos in &[4usize, 7] {
            if bytes[pos] != b'-' {
                return Err(DateParseError::new("expected '-'", pos));
            }
        }

        if matches!(bytes.get(10), Some(&next) if next != b'T' && next != b' ') {
            return Err(DateParseError::new("unexpected trailing characters", 10));
        }

        let year = digits(bytes, 0, 4)? as i32;
        let month = digits(bytes, 5, 2)?;
        let day = digits(bytes, 8, 2)?;

        if !(1..=12).contains(&month) {
            return Err(DateParseError::new("month out of range", 5));
        }

        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| DateParseError::new("day out of range for month", 8))
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    pub fn is_friday(&self) -> bool {
        self.weekday() == Weekday::Fri
    }

    /// Last calendar day of this date's month (28..=31).
    pub fn month_end_day(&self) -> u32 {
        month_end_day(self.year(), self.month())
    }

    pub fn is_month_end(&self) -> bool {
        self.day() == self.month_end_day()
    }

    pub fn is_year_end(&self) -> bool {
        self.month() == 12 && self.day() == 31
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Day before the first of the following month.
pub fn month_end_day(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month >= 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(31)
}

fn digits(bytes: &[u8], start: usize, len: usize) -> Result<u32, DateParseError> {
    let mut value = 0u32;
    for (offset, &b) in bytes[start..start + len].iter().enumerate() {
        if !b.is_ascii_digit() {
            return Err(DateParseError::new("expected digit", start + offset));
        }
        value = value * 10 + u32::from(b - b'0');
    }
    Ok(value)
}
