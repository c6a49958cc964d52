//! # lunical-io
//!
//! File boundary for lunical: JSON events files in, iCalendar documents out.
//!
//! An events file is a JSON array of records:
//!
//! ```json
//! [
//!   {
//!     "title": "媽祖生日",
//!     "lunar_month": 3,
//!     "lunar_day": 23,
//!     "is_leap_month": false,
//!     "reminder_offsets": ["1d"],
//!     "notes": "optional"
//!   }
//! ]
//! ```

mod error;
mod events;
mod record;

pub use error::{IoError, RecordError};
pub use events::{events_to_json, parse_events, read_events, write_calendar, write_events};
pub use record::{EventRecord, LEGACY_DEFAULT_ALARM_MINUTES, OffsetValue};
