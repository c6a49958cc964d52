//! Error types for the lunical-occurrence crate.

use lunical_calendar::CalendarError;

/// Error type for all fallible operations in the lunical-occurrence crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OccurrenceError {
    /// Returned when an event record has a field outside its nominal bounds.
    #[error("malformed event {title:?}: {reason}")]
    MalformedEvent {
        /// Title of the offending event.
        title: String,
        /// Description of the problem.
        reason: String,
    },

    /// Returned when the number of years to generate is zero.
    #[error("invalid span: {span} (must be >= 1)")]
    InvalidSpan {
        /// The span that was provided.
        span: u32,
    },

    /// Returned when a reminder offset string cannot be parsed.
    #[error("invalid reminder offset {input:?}: {reason}")]
    InvalidReminder {
        /// The rejected input.
        input: String,
        /// Description of the problem.
        reason: String,
    },

    /// Wrapped error from the calendar crate.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}
