//! # lunical-calendar
//!
//! Exact conversion between the East-Asian lunisolar calendar and the
//! Gregorian calendar for lunar years 1900..=2100.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["PACKED_YEARS"] -->|"unpacked once"| B["LunarCalendarTable"]
//!     B -->|".lookup(year)"| C["LunarYearInfo"]
//!     B --> D["LunarSolarConverter"]
//!     E["SolarDate"] -->|".solar_to_lunar()"| F["LunarDate"]
//!     F -->|".lunar_to_solar()"| E
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use lunical_calendar::{LunarDate, SolarDate, lunar_to_solar, solar_to_lunar};
//!
//! let mid_autumn = LunarDate::new(2024, 8, 15, false).unwrap();
//! let solar = lunar_to_solar(mid_autumn).unwrap();
//! assert_eq!(solar, SolarDate::new(2024, 9, 17).unwrap());
//! assert_eq!(solar_to_lunar(solar).unwrap(), mid_autumn);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `table` | Embedded per-year data and lookup |
//! | `convert` | Single-date conversion in both directions |
//! | `solar` | Gregorian date with Julian day arithmetic |
//! | `lunar` | Lunar date value type |
//! | `error` | Error types |

mod convert;
mod error;
mod lunar;
mod solar;
mod table;

pub use convert::{LunarSolarConverter, lunar_to_solar, solar_to_lunar};
pub use error::{CalendarError, ErrorKind};
pub use lunar::LunarDate;
pub use solar::{SolarDate, days_in_month, is_leap_year};
pub use table::{FIRST_YEAR, LAST_YEAR, LunarCalendarTable, LunarYearInfo, MonthEntry};
