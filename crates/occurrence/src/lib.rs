//! # lunical-occurrence
//!
//! Expands events that recur on a fixed lunar month and day ("8th month,
//! 15th day") into concrete Gregorian dates over a span of lunar years.
//!
//! ## Pipeline
//!
//! 1. **Validate** the span and each event's nominal bounds
//! 2. **Check range** of the first and last lunar year against the table
//! 3. **Convert** month/day per year, skipping years without the requested
//!    leap month
//! 4. **Merge** all events by solar date, title, input position
//!
//! ## Quick Start
//!
//! ```
//! use lunical_occurrence::{GenerateConfig, RecurringLunarEvent, ReminderOffset, generate_all};
//!
//! let events = vec![
//!     RecurringLunarEvent::new("Mid-Autumn", 8, 15)
//!         .unwrap()
//!         .with_reminder(ReminderOffset::days(1)),
//! ];
//! let occurrences = generate_all(&events, &GenerateConfig::new(2024, 3)).unwrap();
//! assert_eq!(occurrences.len(), 3);
//! assert_eq!(occurrences[0].solar_date().to_string(), "2024-09-17");
//! ```

mod config;
mod error;
mod event;
mod generate;
mod occurrence;
mod reminder;

pub use config::{GenerateConfig, MissingDayPolicy};
pub use error::OccurrenceError;
pub use event::RecurringLunarEvent;
pub use generate::{OccurrenceGenerator, generate_all, generate_occurrences};
pub use occurrence::Occurrence;
pub use reminder::ReminderOffset;
