//! Error types for lunical-io.

use std::path::PathBuf;

use lunical_occurrence::OccurrenceError;

/// Error type for all fallible operations in the lunical-io crate.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Reading an existing file failed.
    #[error("failed to read {}", path.display())]
    Read {
        /// File being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Writing a file failed.
    #[error("failed to write {}", path.display())]
    Write {
        /// File being written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid JSON, or could not be serialized.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The top-level JSON value is not an array of records.
    #[error("expected a JSON array of events, found {found}")]
    NotAnArray {
        /// JSON type that was found instead.
        found: &'static str,
    },

    /// A single record could not be turned into an event.
    #[error("event record {index}: {source}")]
    InvalidRecord {
        /// Zero-based position of the record in the array.
        index: usize,
        /// What was wrong with it.
        #[source]
        source: RecordError,
    },
}

/// Problem with one event record.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    /// The record is missing fields or has fields of the wrong type.
    #[error(transparent)]
    Shape(#[from] serde_json::Error),

    /// The fields are well-typed but do not form a valid event.
    #[error(transparent)]
    Event(#[from] OccurrenceError),
}
