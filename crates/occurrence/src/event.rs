//! Recurring lunar-date events.

use std::collections::BTreeSet;

use lunical_calendar::{CalendarError, LunarDate};

use crate::error::OccurrenceError;
use crate::reminder::ReminderOffset;

/// An event that recurs every lunar year on the same month and day.
///
/// Owned by the caller; the generator only borrows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecurringLunarEvent {
    title: String,
    lunar_month: u8,
    lunar_day: u8,
    is_leap_month: bool,
    reminder_offsets: BTreeSet<ReminderOffset>,
    notes: Option<String>,
}

impl RecurringLunarEvent {
    /// Creates an event on `lunar_month`/`lunar_day` of every year, in the
    /// regular (non-leap) month, with no reminders.
    ///
    /// # Errors
    ///
    /// Returns [`OccurrenceError::MalformedEvent`] if the title is blank,
    /// `lunar_month` is outside 1..=12 or `lunar_day` is outside 1..=30.
    pub fn new(
        title: impl Into<String>,
        lunar_month: u8,
        lunar_day: u8,
    ) -> Result<Self, OccurrenceError> {
        let event = Self {
            title: title.into(),
            lunar_month,
            lunar_day,
            is_leap_month: false,
            reminder_offsets: BTreeSet::new(),
            notes: None,
        };
        event.validate()?;
        Ok(event)
    }

    /// Sets whether the event falls in the leap month of `lunar_month`.
    pub fn with_leap_month(mut self, is_leap_month: bool) -> Self {
        self.is_leap_month = is_leap_month;
        self
    }

    /// Adds a reminder. Duplicate offsets are kept once.
    pub fn with_reminder(mut self, offset: ReminderOffset) -> Self {
        self.reminder_offsets.insert(offset);
        self
    }

    /// Adds several reminders.
    pub fn with_reminders(mut self, offsets: impl IntoIterator<Item = ReminderOffset>) -> Self {
        self.reminder_offsets.extend(offsets);
        self
    }

    /// Sets free-text notes. Blank notes are treated as none.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        let notes = notes.into();
        self.notes = (!notes.trim().is_empty()).then_some(notes);
        self
    }

    /// Returns the title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the lunar month (1..=12).
    pub fn lunar_month(&self) -> u8 {
        self.lunar_month
    }

    /// Returns the lunar day (1..=30).
    pub fn lunar_day(&self) -> u8 {
        self.lunar_day
    }

    /// Returns `true` if the event falls in a leap month.
    pub fn is_leap_month(&self) -> bool {
        self.is_leap_month
    }

    /// Returns the reminder offsets, shortest first.
    pub fn reminder_offsets(&self) -> &BTreeSet<ReminderOffset> {
        &self.reminder_offsets
    }

    /// Returns the notes, if any.
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Checks for a non-blank title and the nominal bounds of the lunar
    /// month and day.
    pub fn validate(&self) -> Result<(), OccurrenceError> {
        let malformed = |reason: String| OccurrenceError::MalformedEvent {
            title: self.title.clone(),
            reason,
        };
        if self.title.trim().is_empty() {
            return Err(malformed("title is empty".to_string()));
        }
        if !(1..=12).contains(&self.lunar_month) {
            return Err(malformed(format!(
                "lunar month {} is outside 1..=12",
                self.lunar_month
            )));
        }
        if !(1..=30).contains(&self.lunar_day) {
            return Err(malformed(format!(
                "lunar day {} is outside 1..=30",
                self.lunar_day
            )));
        }
        Ok(())
    }

    /// Returns a string identifying the event independently of its position
    /// in any list, stable across runs.
    pub fn identity_key(&self) -> String {
        format!(
            "{}\u{1f}{}\u{1f}{}\u{1f}{}",
            self.title,
            self.lunar_month,
            self.lunar_day,
            if self.is_leap_month { "leap" } else { "regular" }
        )
    }

    /// Returns the event's date in lunar year `year`.
    pub fn lunar_date(&self, year: i32) -> Result<LunarDate, CalendarError> {
        LunarDate::new(year, self.lunar_month, self.lunar_day, self.is_leap_month)
    }
}
