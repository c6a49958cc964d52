//! Error types for the lunical-calendar crate.

use crate::lunar::LunarDate;
use crate::solar::SolarDate;
use crate::table::{FIRST_YEAR, LAST_YEAR};

/// Coarse classification of a [`CalendarError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The requested year or date lies outside the tabulated span.
    OutOfRange,
    /// The lunar date does not exist in the tabulated calendar.
    InvalidLunarDate,
    /// The Gregorian date does not exist.
    InvalidSolarDate,
}

/// Error type for all fallible operations in the lunical-calendar crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a lunar year has no table entry.
    #[error(
        "lunar year {year} is outside the supported range {}..={}",
        FIRST_YEAR,
        LAST_YEAR
    )]
    YearOutOfRange {
        /// The requested lunar year.
        year: i32,
    },

    /// Returned when a Gregorian date falls before the first or after the
    /// last tabulated lunar day.
    #[error("solar date {date} is outside the supported range {first}..={last}")]
    DateOutOfRange {
        /// The requested date.
        date: SolarDate,
        /// First convertible date.
        first: SolarDate,
        /// Last convertible date.
        last: SolarDate,
    },

    /// Returned when the lunar month or day is outside its nominal bounds.
    #[error("invalid lunar date: month {month} day {day} (must be 1..=12 and 1..=30)")]
    InvalidLunarDate {
        /// The month that was provided.
        month: u8,
        /// The day that was provided.
        day: u8,
    },

    /// Returned when a leap month is requested that the year does not have.
    #[error("lunar year {year} has no leap month {month} (leap month: {})", fmt_leap(.leap_month))]
    NoSuchLeapMonth {
        /// The lunar year.
        year: i32,
        /// The requested leap month.
        month: u8,
        /// The year's actual leap month, if any.
        leap_month: Option<u8>,
    },

    /// Returned when the day exceeds the tabulated length of its month.
    #[error("invalid day for {date}: month has {max_day} days")]
    DayOutOfMonth {
        /// The requested lunar date.
        date: LunarDate,
        /// Tabulated length of the month.
        max_day: u8,
    },

    /// Returned when a Gregorian year/month/day triple does not exist.
    #[error("invalid solar date: {year:04}-{month:02}-{day:02}")]
    InvalidSolarDate {
        /// The year that was provided.
        year: i32,
        /// The month that was provided.
        month: u8,
        /// The day that was provided.
        day: u8,
    },

    /// Returned when a date string cannot be parsed.
    #[error("cannot parse date {input:?}: expected {expected}")]
    Parse {
        /// The rejected input.
        input: String,
        /// Description of the accepted format.
        expected: &'static str,
    },
}

fn fmt_leap(leap_month: &Option<u8>) -> String {
    match leap_month {
        Some(m) => m.to_string(),
        None => "none".to_string(),
    }
}

impl CalendarError {
    /// Returns the error kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::YearOutOfRange { .. } | Self::DateOutOfRange { .. } => ErrorKind::OutOfRange,
            Self::InvalidLunarDate { .. }
            | Self::NoSuchLeapMonth { .. }
            | Self::DayOutOfMonth { .. } => ErrorKind::InvalidLunarDate,
            Self::InvalidSolarDate { .. } | Self::Parse { .. } => ErrorKind::InvalidSolarDate,
        }
    }

    /// Returns `true` if the error is of kind [`ErrorKind::OutOfRange`].
    pub fn is_out_of_range(&self) -> bool {
        self.kind() == ErrorKind::OutOfRange
    }
}
