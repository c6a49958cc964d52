//! # lunical-ics
//!
//! Writes generated occurrences as an iCalendar (RFC 5545) document that
//! common calendar applications import directly.
//!
//! Every occurrence becomes one all-day `VEVENT` with a stable UID, and
//! every reminder offset on its event becomes a `VALARM`. Text values are
//! escaped and content lines folded at 75 octets with CRLF line breaks.
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use lunical_ics::{IcsConfig, IcsEncoder};
//! use lunical_occurrence::{GenerateConfig, RecurringLunarEvent, generate_all};
//!
//! let events = vec![RecurringLunarEvent::new("Mid-Autumn", 8, 15).unwrap()];
//! let occurrences = generate_all(&events, &GenerateConfig::new(2024, 1)).unwrap();
//! let stamp = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
//! let ics = IcsEncoder::new(IcsConfig::default()).encode_at(&occurrences, stamp);
//! assert!(ics.contains("DTSTART;VALUE=DATE:20240917\r\n"));
//! ```

mod config;
mod encode;
mod text;
mod uid;

pub use config::{DEFAULT_CALENDAR_NAME, DEFAULT_PRODUCT_ID, IcsConfig};
pub use encode::{IcsEncoder, encode_calendar};
pub use text::{CRLF, MAX_LINE_OCTETS, escape_text, fold_line};
pub use uid::{UID_DOMAIN, occurrence_uid};
