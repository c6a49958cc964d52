//! Bidirectional lunar/Gregorian date conversion.

use crate::error::CalendarError;
use crate::lunar::LunarDate;
use crate::solar::SolarDate;
use crate::table::LunarCalendarTable;

/// Converts single dates between the Gregorian and lunisolar calendars.
///
/// Holds only a shared reference to an immutable table, so a converter can
/// be copied freely and used from several threads at once.
#[derive(Debug, Clone, Copy)]
pub struct LunarSolarConverter<'t> {
    table: &'t LunarCalendarTable,
}

impl Default for LunarSolarConverter<'static> {
    fn default() -> Self {
        Self::new(LunarCalendarTable::global())
    }
}

impl<'t> LunarSolarConverter<'t> {
    /// Creates a converter backed by `table`.
    pub fn new(table: &'t LunarCalendarTable) -> Self {
        Self { table }
    }

    /// Returns the backing table.
    pub fn table(&self) -> &'t LunarCalendarTable {
        self.table
    }

    /// Converts a Gregorian date to the lunar date it falls on.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::DateOutOfRange`] if `date` is before the
    /// first or after the last tabulated lunar day.
    ///
    /// # Example
    ///
    /// ```
    /// use lunical_calendar::{LunarSolarConverter, SolarDate};
    ///
    /// let converter = LunarSolarConverter::default();
    /// let lunar = converter
    ///     .solar_to_lunar(SolarDate::new(2024, 9, 17).unwrap())
    ///     .unwrap();
    /// assert_eq!(lunar.to_string(), "2024-08-15");
    /// ```
    pub fn solar_to_lunar(&self, date: SolarDate) -> Result<LunarDate, CalendarError> {
        let out_of_range = || CalendarError::DateOutOfRange {
            date,
            first: self.table.first_day(),
            last: self.table.last_day(),
        };
        let offset = u32::try_from(date.days_since(self.table.epoch()))
            .map_err(|_| out_of_range())?;
        let info = self.table.year_containing(offset).ok_or_else(out_of_range)?;

        let day_of_year = offset - info.epoch_offset_days();
        let entry = info
            .months()
            .take_while(|m| m.offset <= day_of_year)
            .last()
            .ok_or_else(out_of_range)?;
        let day = (day_of_year - entry.offset + 1) as u8;
        Ok(LunarDate::from_parts(info.year(), entry.month, day, entry.is_leap))
    }

    /// Converts a lunar date to its Gregorian date.
    ///
    /// # Errors
    ///
    /// - [`CalendarError::YearOutOfRange`] if the lunar year is not tabulated.
    /// - [`CalendarError::NoSuchLeapMonth`] if a leap month is requested that
    ///   the year does not have.
    /// - [`CalendarError::DayOutOfMonth`] if the day exceeds the month's length.
    ///
    /// # Example
    ///
    /// ```
    /// use lunical_calendar::{LunarDate, LunarSolarConverter};
    ///
    /// let converter = LunarSolarConverter::default();
    /// let solar = converter
    ///     .lunar_to_solar(LunarDate::new(2023, 2, 1, true).unwrap())
    ///     .unwrap();
    /// assert_eq!(solar.to_string(), "2023-03-22");
    /// ```
    pub fn lunar_to_solar(&self, date: LunarDate) -> Result<SolarDate, CalendarError> {
        let info = self.table.lookup(date.year())?;
        let (month, is_leap) = (date.month(), date.is_leap_month());

        let (Some(offset), Some(max_day)) = (
            info.month_offset(month, is_leap),
            info.month_length(month, is_leap),
        ) else {
            return Err(CalendarError::NoSuchLeapMonth {
                year: date.year(),
                month,
                leap_month: info.leap_month(),
            });
        };
        if date.day() > max_day {
            return Err(CalendarError::DayOutOfMonth { date, max_day });
        }

        let days = offset + u32::from(date.day()) - 1;
        info.new_year()
            .checked_add_days(i64::from(days))
            .ok_or(CalendarError::YearOutOfRange { year: date.year() })
    }
}

/// Converts a Gregorian date to a lunar date using the global table.
///
/// See [`LunarSolarConverter::solar_to_lunar`].
pub fn solar_to_lunar(date: SolarDate) -> Result<LunarDate, CalendarError> {
    LunarSolarConverter::default().solar_to_lunar(date)
}

/// Converts a lunar date to a Gregorian date using the global table.
///
/// See [`LunarSolarConverter::lunar_to_solar`].
pub fn lunar_to_solar(date: LunarDate) -> Result<SolarDate, CalendarError> {
    LunarSolarConverter::default().lunar_to_solar(date)
}
