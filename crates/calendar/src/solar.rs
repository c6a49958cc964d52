//! Proleptic Gregorian dates.

use std::fmt;
use std::str::FromStr;

use chrono::format::ParseErrorKind;
use chrono::{Datelike, NaiveDate, TimeDelta};

use crate::error::CalendarError;

/// Returns `true` if `year` is a Gregorian leap year.
pub fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}

/// Returns the number of days in `month` of `year`, or `None` if `month` is
/// outside 1..=12.
pub fn days_in_month(year: i32, month: u8) -> Option<u8> {
    let first = NaiveDate::from_ymd_opt(year, u32::from(month), 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year.checked_add(1)?, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, u32::from(month) + 1, 1)?
    };
    u8::try_from(next.signed_duration_since(first).num_days()).ok()
}

/// A date in the proleptic Gregorian calendar.
///
/// Wraps [`NaiveDate`], so the supported years are chrono's
/// (roughly ±262,000). `Ord` is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SolarDate(NaiveDate);

impl SolarDate {
    /// Creates a new `SolarDate`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidSolarDate`] if the month is outside
    /// 1..=12, the day does not exist in that month (Feb 29 is accepted in
    /// leap years only), or the year is beyond chrono's range.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        NaiveDate::from_ymd_opt(year, u32::from(month), u32::from(day))
            .map(Self)
            .ok_or(CalendarError::InvalidSolarDate { year, month, day })
    }

    /// Returns the underlying chrono date.
    pub fn naive(self) -> NaiveDate {
        self.0
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.0.month() as u8
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.0.day() as u8
    }

    /// Returns the date `days` days later (or earlier, if negative), or
    /// `None` if that leaves chrono's range.
    pub fn checked_add_days(self, days: i64) -> Option<Self> {
        TimeDelta::try_days(days)
            .and_then(|delta| self.0.checked_add_signed(delta))
            .map(Self)
    }

    /// Returns the following day, or `None` at the end of chrono's range.
    pub fn succ(self) -> Option<Self> {
        self.0.succ_opt().map(Self)
    }

    /// Number of days from `earlier` to `self`.
    pub fn days_since(self, earlier: SolarDate) -> i64 {
        self.0.signed_duration_since(earlier.0).num_days()
    }

    /// Formats the date as a compact `YYYYMMDD` string.
    pub fn to_basic_string(self) -> String {
        self.0.format("%Y%m%d").to_string()
    }
}

impl From<NaiveDate> for SolarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for SolarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for SolarDate {
    type Err = CalendarError;

    /// Parses an ISO-8601 calendar date (`YYYY-MM-DD`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Self)
            .map_err(|e| CalendarError::Parse {
                input: s.to_string(),
                expected: match e.kind() {
                    ParseErrorKind::OutOfRange | ParseErrorKind::Impossible => {
                        "an existing calendar date"
                    }
                    _ => "YYYY-MM-DD",
                },
            })
    }
}
