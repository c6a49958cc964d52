//! Configuration for occurrence generation.

use std::ops::RangeInclusive;

use crate::error::OccurrenceError;

/// What to do when an event's day does not exist in a given year's month,
/// e.g. day 30 of a 29-day month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingDayPolicy {
    /// Abort generation with the underlying calendar error.
    #[default]
    Fail,
    /// Produce no occurrence for that year.
    Skip,
    /// Use the last day of the month instead.
    LastDay,
}

/// Parameters for expanding events over a span of lunar years.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateConfig {
    /// First lunar year to generate.
    start_year: i32,
    /// Number of consecutive years.
    span: u32,
    /// Handling of days past the end of a short month.
    missing_day: MissingDayPolicy,
}

impl GenerateConfig {
    /// Creates a configuration covering lunar years
    /// `start_year..start_year + span`.
    pub fn new(start_year: i32, span: u32) -> Self {
        Self {
            start_year,
            span,
            missing_day: MissingDayPolicy::default(),
        }
    }

    /// Sets the missing-day policy.
    pub fn with_missing_day(mut self, policy: MissingDayPolicy) -> Self {
        self.missing_day = policy;
        self
    }

    /// Returns the first year.
    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    /// Returns the number of years.
    pub fn span(&self) -> u32 {
        self.span
    }

    /// Returns the missing-day policy.
    pub fn missing_day(&self) -> MissingDayPolicy {
        self.missing_day
    }

    /// Returns the last year, or `None` if the span is empty or overflows.
    pub fn end_year(&self) -> Option<i32> {
        self.start_year.checked_add_unsigned(self.span.checked_sub(1)?)
    }

    /// Iterates over the lunar years covered.
    ///
    /// Empty when [`end_year`](Self::end_year) is `None`.
    pub fn years(&self) -> RangeInclusive<i32> {
        match self.end_year() {
            Some(end) => self.start_year..=end,
            None => 1..=0,
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), OccurrenceError> {
        if self.span == 0 {
            return Err(OccurrenceError::InvalidSpan { span: self.span });
        }
        Ok(())
    }
}
