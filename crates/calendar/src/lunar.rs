//! Lunisolar calendar dates.

use std::fmt;
use std::str::FromStr;

use crate::error::CalendarError;

/// A date in the lunisolar calendar.
///
/// `month` is the month number (1..=12); a leap month carries the number of
/// the regular month it follows and has `is_leap_month` set. Field order
/// makes the derived `Ord` chronological within the lunar calendar.
///
/// Construction only checks nominal bounds. Whether the date exists in a
/// given year is decided against the table by
/// [`LunarSolarConverter::lunar_to_solar`](crate::LunarSolarConverter::lunar_to_solar).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LunarDate {
    year: i32,
    month: u8,
    is_leap_month: bool,
    day: u8,
}

impl LunarDate {
    /// Creates a new `LunarDate`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidLunarDate`] if `month` is outside
    /// 1..=12 or `day` is outside 1..=30.
    pub fn new(year: i32, month: u8, day: u8, is_leap_month: bool) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) || !(1..=30).contains(&day) {
            return Err(CalendarError::InvalidLunarDate { month, day });
        }
        Ok(Self {
            year,
            month,
            is_leap_month,
            day,
        })
    }

    pub(crate) fn from_parts(year: i32, month: u8, day: u8, is_leap_month: bool) -> Self {
        Self {
            year,
            month,
            is_leap_month,
            day,
        }
    }

    /// Returns the lunar year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month number (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=30).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns `true` for a day in a leap month.
    pub fn is_leap_month(self) -> bool {
        self.is_leap_month
    }

    /// Returns the same month and day in another lunar year.
    pub fn with_year(self, year: i32) -> Self {
        Self { year, ..self }
    }

    /// Returns the same date on another day of the month.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidLunarDate`] if `day` is outside 1..=30.
    pub fn with_day(self, day: u8) -> Result<Self, CalendarError> {
        Self::new(self.year, self.month, day, self.is_leap_month)
    }
}

impl fmt::Display for LunarDate {
    /// Formats as `YYYY-MM-DD`, or `YYYY-LMM-DD` for a leap month.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let leap = if self.is_leap_month { "L" } else { "" };
        write!(f, "{:04}-{leap}{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for LunarDate {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err = || CalendarError::Parse {
            input: s.to_string(),
            expected: "YYYY-MM-DD or YYYY-LMM-DD",
        };
        let mut parts = s.trim().splitn(3, '-');
        let (Some(y), Some(m), Some(d)) = (parts.next(), parts.next(), parts.next()) else {
            return Err(parse_err());
        };
        let (m, is_leap) = match m.strip_prefix(['L', 'l']) {
            Some(rest) => (rest, true),
            None => (m, false),
        };
        let year = y.parse().map_err(|_| parse_err())?;
        let month = m.parse().map_err(|_| parse_err())?;
        let day = d.parse().map_err(|_| parse_err())?;
        Self::new(year, month, day, is_leap)
    }
}
