//! Generated occurrences.

use lunical_calendar::{LunarDate, SolarDate};

use crate::event::RecurringLunarEvent;

/// One concrete Gregorian date on which a recurring event falls.
///
/// Borrows its event; produced fresh by every generation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occurrence<'a> {
    event: &'a RecurringLunarEvent,
    event_index: usize,
    lunar_date: LunarDate,
    solar_date: SolarDate,
}

impl<'a> Occurrence<'a> {
    pub(crate) fn new(
        event: &'a RecurringLunarEvent,
        event_index: usize,
        lunar_date: LunarDate,
        solar_date: SolarDate,
    ) -> Self {
        Self {
            event,
            event_index,
            lunar_date,
            solar_date,
        }
    }

    /// Returns the source event.
    pub fn event(&self) -> &'a RecurringLunarEvent {
        self.event
    }

    /// Returns the position of the source event in the caller's input.
    pub fn event_index(&self) -> usize {
        self.event_index
    }

    /// Returns the lunar date the occurrence was computed from.
    ///
    /// Differs from the event's own day only under
    /// [`MissingDayPolicy::LastDay`](crate::MissingDayPolicy::LastDay).
    pub fn lunar_date(&self) -> LunarDate {
        self.lunar_date
    }

    /// Returns the lunar year used.
    pub fn lunar_year(&self) -> i32 {
        self.lunar_date.year()
    }

    /// Returns the Gregorian date.
    pub fn solar_date(&self) -> SolarDate {
        self.solar_date
    }
}
