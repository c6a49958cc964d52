//! Embedded lunisolar calendar table.
//!
//! Leap-month placement and month lengths follow astronomical new-moon and
//! solar-term computations with no closed form, so every supported year is
//! tabulated. Each year is packed into one word:
//!
//! | Bits | Meaning |
//! |------|---------|
//! | 0..4 | leap month number (0 = no leap month) |
//! | 4..16 | length of regular months 12..=1 (bit set = 30 days, clear = 29) |
//! | 16 | length of the leap month (set = 30 days) |

use std::sync::LazyLock;

use crate::error::CalendarError;
use crate::solar::SolarDate;

/// First tabulated lunar year.
pub const FIRST_YEAR: i32 = 1900;

/// Last tabulated lunar year.
pub const LAST_YEAR: i32 = 2100;

/// Reference date 1900-01-31 (lunar 1900-01-01) as (year, month, day).
const EPOCH: (i32, u8, u8) = (1900, 1, 31);

#[rustfmt::skip]
const PACKED_YEARS: [u32; (LAST_YEAR - FIRST_YEAR + 1) as usize] = [
    0x04bd8, 0x04ae0, 0x0a570, 0x054d5, 0x0d260, 0x0d950, 0x16554, 0x056a0, 0x09ad0, 0x055d2, // 1900..=1909
    0x04ae0, 0x0a5b6, 0x0a4d0, 0x0d250, 0x1d255, 0x0b540, 0x0d6a0, 0x0ada2, 0x095b0, 0x14977, // 1910..=1919
    0x04970, 0x0a4b0, 0x0b4b5, 0x06a50, 0x06d40, 0x1ab54, 0x02b60, 0x09570, 0x052f2, 0x04970, // 1920..=1929
    0x06566, 0x0d4a0, 0x0ea50, 0x16a95, 0x05ad0, 0x02b60, 0x186e3, 0x092e0, 0x1c8d7, 0x0c950, // 1930..=1939
    0x0d4a0, 0x1d8a6, 0x0b550, 0x056a0, 0x1a5b4, 0x025d0, 0x092d0, 0x0d2b2, 0x0a950, 0x0b557, // 1940..=1949
    0x06ca0, 0x0b550, 0x15355, 0x04da0, 0x0a5b0, 0x14573, 0x052b0, 0x0a9a8, 0x0e950, 0x06aa0, // 1950..=1959
    0x0aea6, 0x0ab50, 0x04b60, 0x0aae4, 0x0a570, 0x05260, 0x0f263, 0x0d950, 0x05b57, 0x056a0, // 1960..=1969
    0x096d0, 0x04dd5, 0x04ad0, 0x0a4d0, 0x0d4d4, 0x0d250, 0x0d558, 0x0b540, 0x0b6a0, 0x195a6, // 1970..=1979
    0x095b0, 0x049b0, 0x0a974, 0x0a4b0, 0x0b27a, 0x06a50, 0x06d40, 0x0af46, 0x0ab60, 0x09570, // 1980..=1989
    0x04af5, 0x04970, 0x064b0, 0x074a3, 0x0ea50, 0x06b58, 0x05ac0, 0x0ab60, 0x096d5, 0x092e0, // 1990..=1999
    0x0c960, 0x0d954, 0x0d4a0, 0x0da50, 0x07552, 0x056a0, 0x0abb7, 0x025d0, 0x092d0, 0x0cab5, // 2000..=2009
    0x0a950, 0x0b4a0, 0x0baa4, 0x0ad50, 0x055d9, 0x04ba0, 0x0a5b0, 0x15176, 0x052b0, 0x0a930, // 2010..=2019
    0x07954, 0x06aa0, 0x0ad50, 0x05b52, 0x04b60, 0x0a6e6, 0x0a4e0, 0x0d260, 0x0ea65, 0x0d530, // 2020..=2029
    0x05aa0, 0x076a3, 0x096d0, 0x04afb, 0x04ad0, 0x0a4d0, 0x1d0b6, 0x0d250, 0x0d520, 0x0dd45, // 2030..=2039
    0x0b5a0, 0x056d0, 0x055b2, 0x049b0, 0x0a577, 0x0a4b0, 0x0aa50, 0x1b255, 0x06d20, 0x0ada0, // 2040..=2049
    0x14b63, 0x09370, 0x049f8, 0x04970, 0x064b0, 0x168a6, 0x0ea50, 0x06b20, 0x1a6c4, 0x0aae0, // 2050..=2059
    0x092e0, 0x0d2e3, 0x0c960, 0x0d557, 0x0d4a0, 0x0da50, 0x05d55, 0x056a0, 0x0a6d0, 0x055d4, // 2060..=2069
    0x052d0, 0x0a9b8, 0x0a950, 0x0b4a0, 0x0b6a6, 0x0ad50, 0x055a0, 0x0aba4, 0x0a5b0, 0x052b0, // 2070..=2079
    0x0b273, 0x06930, 0x07337, 0x06aa0, 0x0ad50, 0x14b55, 0x04b60, 0x0a570, 0x054e4, 0x0d160, // 2080..=2089
    0x0e968, 0x0d520, 0x0daa0, 0x16aa6, 0x056d0, 0x04ae0, 0x0a9d4, 0x0a2d0, 0x0d150, 0x0f252, // 2090..=2099
    0x0d520, // 2100
];

static GLOBAL: LazyLock<LunarCalendarTable> = LazyLock::new(LunarCalendarTable::build);

/// One month of a lunar year, as laid out in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthEntry {
    /// Month number (1..=12).
    pub month: u8,
    /// Whether this is the year's leap month.
    pub is_leap: bool,
    /// Length in days (29 or 30).
    pub length: u8,
    /// Days from the first day of the year to the first day of this month.
    pub offset: u32,
}

/// Calendar structure of one lunar year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LunarYearInfo {
    year: i32,
    leap_month: u8,
    month_lengths: Vec<u8>,
    epoch_offset_days: u32,
    new_year: SolarDate,
}

impl LunarYearInfo {
    fn unpack(year: i32, bits: u32, epoch_offset_days: u32, new_year: SolarDate) -> Self {
        let leap_month = (bits & 0xf) as u8;
        let length = |set: bool| if set { 30 } else { 29 };
        let mut month_lengths = Vec::with_capacity(13);
        for month in 1..=12u8 {
            month_lengths.push(length(bits & (0x10000 >> month) != 0));
            if month == leap_month {
                month_lengths.push(length(bits & 0x10000 != 0));
            }
        }
        Self {
            year,
            leap_month,
            month_lengths,
            epoch_offset_days,
            new_year,
        }
    }

    /// Returns the lunar year number.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the leap month number, or `None` for a year without one.
    pub fn leap_month(&self) -> Option<u8> {
        (self.leap_month != 0).then_some(self.leap_month)
    }

    /// Returns month lengths in calendar order, the leap month directly
    /// after the regular month of the same number.
    pub fn month_lengths(&self) -> &[u8] {
        &self.month_lengths
    }

    /// Returns the number of days from 1900-01-31 to the first day of this year.
    pub fn epoch_offset_days(&self) -> u32 {
        self.epoch_offset_days
    }

    /// Returns the total number of days in the year.
    pub fn days_in_year(&self) -> u32 {
        self.month_lengths.iter().map(|&l| u32::from(l)).sum()
    }

    /// Returns the Gregorian date of the first day of the year.
    pub fn new_year(&self) -> SolarDate {
        self.new_year
    }

    /// Returns the position of a month in [`month_lengths`](Self::month_lengths),
    /// or `None` if the month does not exist in this year.
    fn month_index(&self, month: u8, is_leap: bool) -> Option<usize> {
        if !(1..=12).contains(&month) {
            return None;
        }
        let after_leap = self.leap_month != 0 && month > self.leap_month;
        match is_leap {
            true if month == self.leap_month => Some(month as usize),
            true => None,
            false if after_leap => Some(month as usize),
            false => Some(month as usize - 1),
        }
    }

    /// Returns the length of a month, or `None` if it does not exist in this year.
    pub fn month_length(&self, month: u8, is_leap: bool) -> Option<u8> {
        self.month_index(month, is_leap).map(|i| self.month_lengths[i])
    }

    /// Returns the number of days from the first day of the year to the first
    /// day of a month, or `None` if the month does not exist in this year.
    pub fn month_offset(&self, month: u8, is_leap: bool) -> Option<u32> {
        self.month_index(month, is_leap).map(|i| {
            self.month_lengths[..i]
                .iter()
                .map(|&l| u32::from(l))
                .sum()
        })
    }

    /// Iterates over the months of the year in calendar order.
    pub fn months(&self) -> impl Iterator<Item = MonthEntry> + '_ {
        let leap = self.leap_month as usize;
        let mut offset = 0;
        self.month_lengths.iter().enumerate().map(move |(i, &length)| {
            let (month, is_leap) = if leap == 0 || i < leap {
                (i as u8 + 1, false)
            } else {
                (i as u8, i == leap)
            };
            let entry = MonthEntry {
                month,
                is_leap,
                length,
                offset,
            };
            offset += u32::from(length);
            entry
        })
    }
}

/// The immutable lunisolar calendar table for years
/// [`FIRST_YEAR`]..=[`LAST_YEAR`].
#[derive(Debug)]
pub struct LunarCalendarTable {
    years: Vec<LunarYearInfo>,
    epoch: SolarDate,
    last_day: SolarDate,
}

impl LunarCalendarTable {
    /// Returns the process-wide table, unpacking it on first use.
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    fn build() -> Self {
        let (y, m, d) = EPOCH;
        let epoch = SolarDate::new(y, m, d).expect("reference date is a valid Gregorian date");
        let after_epoch = |days: u32| {
            epoch
                .checked_add_days(i64::from(days))
                .expect("tabulated years lie within chrono's date range")
        };

        let mut offset = 0;
        let years: Vec<_> = PACKED_YEARS
            .iter()
            .zip(FIRST_YEAR..)
            .map(|(&bits, year)| {
                let info = LunarYearInfo::unpack(year, bits, offset, after_epoch(offset));
                offset += info.days_in_year();
                info
            })
            .collect();
        Self {
            years,
            epoch,
            last_day: after_epoch(offset - 1),
        }
    }

    /// Looks up the structure of a lunar year.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearOutOfRange`] if `year` is not tabulated.
    pub fn lookup(&self, year: i32) -> Result<&LunarYearInfo, CalendarError> {
        usize::try_from(year - FIRST_YEAR)
            .ok()
            .and_then(|i| self.years.get(i))
            .ok_or(CalendarError::YearOutOfRange { year })
    }

    /// Returns the first tabulated lunar year.
    pub fn first_year(&self) -> i32 {
        FIRST_YEAR
    }

    /// Returns the last tabulated lunar year.
    pub fn last_year(&self) -> i32 {
        FIRST_YEAR + self.years.len() as i32 - 1
    }

    /// Returns the reference date all offsets are measured from.
    pub fn epoch(&self) -> SolarDate {
        self.epoch
    }

    /// Returns the first convertible Gregorian date.
    pub fn first_day(&self) -> SolarDate {
        self.epoch()
    }

    /// Returns the last convertible Gregorian date.
    pub fn last_day(&self) -> SolarDate {
        self.last_day
    }

    /// Returns the number of days covered by the table.
    pub fn total_days(&self) -> u32 {
        self.years
            .last()
            .map_or(0, |y| y.epoch_offset_days + y.days_in_year())
    }

    /// Iterates over all tabulated years.
    pub fn years(&self) -> impl Iterator<Item = &LunarYearInfo> {
        self.years.iter()
    }

    /// Returns the year containing the day `offset` days after the epoch.
    pub(crate) fn year_containing(&self, offset: u32) -> Option<&LunarYearInfo> {
        if offset >= self.total_days() {
            return None;
        }
        let idx = self
            .years
            .partition_point(|y| y.epoch_offset_days <= offset);
        idx.checked_sub(1).map(|i| &self.years[i])
    }
}
