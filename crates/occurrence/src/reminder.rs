//! Reminder offsets.

use std::fmt;
use std::str::FromStr;

use crate::error::OccurrenceError;

const MINUTES_PER_HOUR: u32 = 60;
const MINUTES_PER_DAY: u32 = 24 * MINUTES_PER_HOUR;

/// How long before the start of an event a reminder fires, in whole minutes.
///
/// The textual form is a sequence of `<number><unit>` groups with units
/// `d`, `h` and `m`, e.g. `1d`, `3h`, `1d12h`, `0m`. A bare number is read
/// as minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReminderOffset {
    minutes: u32,
}

impl ReminderOffset {
    /// A reminder at the start of the event.
    pub const AT_START: Self = Self { minutes: 0 };

    /// Creates an offset of `minutes` minutes.
    pub fn minutes(minutes: u32) -> Self {
        Self { minutes }
    }

    /// Creates an offset of `hours` hours.
    pub fn hours(hours: u32) -> Self {
        Self::minutes(hours.saturating_mul(MINUTES_PER_HOUR))
    }

    /// Creates an offset of `days` days.
    pub fn days(days: u32) -> Self {
        Self::minutes(days.saturating_mul(MINUTES_PER_DAY))
    }

    /// Returns the offset in minutes.
    pub fn as_minutes(self) -> u32 {
        self.minutes
    }

    /// Splits the offset into `(days, hours, minutes)`.
    pub fn parts(self) -> (u32, u32, u32) {
        (
            self.minutes / MINUTES_PER_DAY,
            self.minutes % MINUTES_PER_DAY / MINUTES_PER_HOUR,
            self.minutes % MINUTES_PER_HOUR,
        )
    }
}

impl fmt::Display for ReminderOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.minutes == 0 {
            return f.write_str("0m");
        }
        let (d, h, m) = self.parts();
        for (value, unit) in [(d, 'd'), (h, 'h'), (m, 'm')] {
            if value > 0 {
                write!(f, "{value}{unit}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for ReminderOffset {
    type Err = OccurrenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| OccurrenceError::InvalidReminder {
            input: s.to_string(),
            reason: reason.to_string(),
        };
        let s_trim = s.trim();
        if s_trim.is_empty() {
            return Err(invalid("empty"));
        }
        if let Ok(minutes) = s_trim.parse::<u32>() {
            return Ok(Self::minutes(minutes));
        }

        let mut total: u32 = 0;
        let mut digits = String::new();
        for c in s_trim.chars() {
            if c.is_ascii_digit() {
                digits.push(c);
                continue;
            }
            let scale = match c.to_ascii_lowercase() {
                'd' => MINUTES_PER_DAY,
                'h' => MINUTES_PER_HOUR,
                'm' => 1,
                _ => return Err(invalid("expected units d, h or m")),
            };
            let value: u32 = digits
                .parse()
                .map_err(|_| invalid("each unit needs a number before it"))?;
            total = value
                .checked_mul(scale)
                .and_then(|v| total.checked_add(v))
                .ok_or_else(|| invalid("too large"))?;
            digits.clear();
        }
        if !digits.is_empty() {
            return Err(invalid("trailing number without a unit"));
        }
        Ok(Self::minutes(total))
    }
}
