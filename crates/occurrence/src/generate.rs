//! Expansion of recurring events into occurrences.

use std::cmp::Ordering;

use lunical_calendar::{CalendarError, LunarCalendarTable, LunarSolarConverter};
use tracing::debug;

use crate::config::{GenerateConfig, MissingDayPolicy};
use crate::error::OccurrenceError;
use crate::event::RecurringLunarEvent;
use crate::occurrence::Occurrence;

/// Expands recurring lunar events over a span of lunar years.
#[derive(Debug, Clone)]
pub struct OccurrenceGenerator<'t> {
    converter: LunarSolarConverter<'t>,
    config: GenerateConfig,
}

impl OccurrenceGenerator<'static> {
    /// Creates a generator backed by the global calendar table.
    pub fn new(config: GenerateConfig) -> Self {
        Self::with_converter(LunarSolarConverter::default(), config)
    }
}

impl<'t> OccurrenceGenerator<'t> {
    /// Creates a generator backed by a specific converter.
    pub fn with_converter(converter: LunarSolarConverter<'t>, config: GenerateConfig) -> Self {
        Self { converter, config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &GenerateConfig {
        &self.config
    }

    /// Expands one event.
    ///
    /// For each lunar year `y` in the span the event's month and day are
    /// converted to a Gregorian date. A year lacking the requested leap
    /// month contributes no occurrence; the date is never moved to the
    /// regular month of the same number. Days past the end of a short
    /// month are handled per [`MissingDayPolicy`].
    ///
    /// The result is strictly increasing by solar date.
    ///
    /// # Errors
    ///
    /// - [`OccurrenceError::InvalidSpan`] if the span is zero.
    /// - [`OccurrenceError::MalformedEvent`] if the event is out of bounds.
    /// - [`OccurrenceError::Calendar`] if any year of the span is not
    ///   tabulated, or a day is missing under [`MissingDayPolicy::Fail`].
    pub fn generate<'a>(
        &self,
        event: &'a RecurringLunarEvent,
    ) -> Result<Vec<Occurrence<'a>>, OccurrenceError> {
        self.config.validate()?;
        self.check_years()?;
        self.expand(event, 0)
    }

    /// Expands several events and merges the results.
    ///
    /// Occurrences are ordered by solar date, then event title, then input
    /// position.
    ///
    /// # Errors
    ///
    /// Fails on the first event that fails; see [`generate`](Self::generate).
    #[tracing::instrument(skip(self, events), fields(n_events = events.len()))]
    pub fn generate_all<'a>(
        &self,
        events: &'a [RecurringLunarEvent],
    ) -> Result<Vec<Occurrence<'a>>, OccurrenceError> {
        self.config.validate()?;
        self.check_years()?;

        let mut all = Vec::with_capacity(events.len() * self.config.span() as usize);
        for (index, event) in events.iter().enumerate() {
            all.extend(self.expand(event, index)?);
        }
        all.sort_by(merge_order);
        debug!(n_occurrences = all.len(), "merged occurrences");
        Ok(all)
    }

    /// Checks that both ends of the span are tabulated, so expansion cannot
    /// fail halfway through on range.
    fn check_years(&self) -> Result<(), OccurrenceError> {
        let table = self.table();
        let end = self.config.end_year().ok_or(CalendarError::YearOutOfRange {
            year: self.config.start_year().saturating_add_unsigned(self.config.span()),
        })?;
        table.lookup(self.config.start_year())?;
        table.lookup(end)?;
        Ok(())
    }

    fn table(&self) -> &'t LunarCalendarTable {
        self.converter.table()
    }

    fn expand<'a>(
        &self,
        event: &'a RecurringLunarEvent,
        index: usize,
    ) -> Result<Vec<Occurrence<'a>>, OccurrenceError> {
        event.validate()?;
        let mut out = Vec::with_capacity(self.config.span() as usize);

        for year in self.config.years() {
            let info = self.table().lookup(year)?;
            if event.is_leap_month() && info.leap_month() != Some(event.lunar_month()) {
                debug!(
                    title = event.title(),
                    year,
                    month = event.lunar_month(),
                    leap_month = ?info.leap_month(),
                    "no such leap month, skipping year"
                );
                continue;
            }

            let lunar = event.lunar_date(year)?;
            let (lunar, solar) = match self.converter.lunar_to_solar(lunar) {
                Ok(solar) => (lunar, solar),
                Err(CalendarError::DayOutOfMonth { date, max_day }) => {
                    match self.config.missing_day() {
                        MissingDayPolicy::Fail => {
                            return Err(CalendarError::DayOutOfMonth { date, max_day }.into());
                        }
                        MissingDayPolicy::Skip => {
                            debug!(
                                title = event.title(),
                                %date,
                                max_day,
                                "day past month end, skipping year"
                            );
                            continue;
                        }
                        MissingDayPolicy::LastDay => {
                            let last = date.with_day(max_day)?;
                            debug!(
                                title = event.title(),
                                %date,
                                used = %last,
                                "day past month end, using last day"
                            );
                            (last, self.converter.lunar_to_solar(last)?)
                        }
                    }
                }
                Err(e) => return Err(e.into()),
            };
            out.push(Occurrence::new(event, index, lunar, solar));
        }

        debug_assert!(out.windows(2).all(|w| w[0].solar_date() < w[1].solar_date()));
        Ok(out)
    }
}

fn merge_order(a: &Occurrence<'_>, b: &Occurrence<'_>) -> Ordering {
    a.solar_date()
        .cmp(&b.solar_date())
        .then_with(|| a.event().title().cmp(b.event().title()))
        .then_with(|| a.event_index().cmp(&b.event_index()))
}

/// Expands one event using the global calendar table.
///
/// See [`OccurrenceGenerator::generate`].
#[tracing::instrument(skip(event, config), fields(title = event.title()))]
pub fn generate_occurrences<'a>(
    event: &'a RecurringLunarEvent,
    config: &GenerateConfig,
) -> Result<Vec<Occurrence<'a>>, OccurrenceError> {
    OccurrenceGenerator::new(config.clone()).generate(event)
}

/// Expands and merges several events using the global calendar table.
///
/// See [`OccurrenceGenerator::generate_all`].
pub fn generate_all<'a>(
    events: &'a [RecurringLunarEvent],
    config: &GenerateConfig,
) -> Result<Vec<Occurrence<'a>>, OccurrenceError> {
    OccurrenceGenerator::new(config.clone()).generate_all(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lunical_calendar::SolarDate;

    fn solar(y: i32, m: u8, d: u8) -> SolarDate {
        SolarDate::new(y, m, d).unwrap()
    }

    #[test]
    fn mid_autumn_three_years() {
        let event = RecurringLunarEvent::new("Mid-Autumn", 8, 15).unwrap();
        let occ = generate_occurrences(&event, &GenerateConfig::new(2024, 3)).unwrap();
        let dates: Vec<_> = occ.iter().map(|o| o.solar_date()).collect();
        assert_eq!(
            dates,
            vec![solar(2024, 9, 17), solar(2025, 10, 6), solar(2026, 9, 25)]
        );
        let years: Vec<_> = occ.iter().map(|o| o.lunar_year()).collect();
        assert_eq!(years, vec![2024, 2025, 2026]);
    }

    #[test]
    fn zero_span() {
        let event = RecurringLunarEvent::new("x", 1, 1).unwrap();
        let err = generate_occurrences(&event, &GenerateConfig::new(2024, 0)).unwrap_err();
        assert_eq!(err, OccurrenceError::InvalidSpan { span: 0 });
    }

    #[test]
    fn span_past_table_fails_before_expanding() {
        let event = RecurringLunarEvent::new("x", 1, 1).unwrap();
        let err = generate_occurrences(&event, &GenerateConfig::new(2099, 3)).unwrap_err();
        assert_eq!(
            err,
            OccurrenceError::Calendar(CalendarError::YearOutOfRange { year: 2101 })
        );
    }

    #[test]
    fn overflowing_span_is_out_of_range() {
        let event = RecurringLunarEvent::new("x", 1, 1).unwrap();
        let err = generate_occurrences(&event, &GenerateConfig::new(2000, u32::MAX)).unwrap_err();
        assert!(matches!(err, OccurrenceError::Calendar(e) if e.is_out_of_range()));
    }

    #[test]
    fn merge_order_tie_breaks() {
        let events = vec![
            RecurringLunarEvent::new("b", 1, 1).unwrap(),
            RecurringLunarEvent::new("a", 1, 1).unwrap(),
            RecurringLunarEvent::new("b", 1, 1).unwrap(),
        ];
        let occ = generate_all(&events, &GenerateConfig::new(2024, 1)).unwrap();
        let order: Vec<_> = occ
            .iter()
            .map(|o| (o.event().title(), o.event_index()))
            .collect();
        assert_eq!(order, vec![("a", 1), ("b", 0), ("b", 2)]);
    }
}
