//! Reading and writing events files and calendar documents.

use std::fs;
use std::path::Path;

use lunical_occurrence::RecurringLunarEvent;
use serde_json::Value;
use tracing::{debug, info};

use crate::error::{IoError, RecordError};
use crate::record::EventRecord;

/// Parses an events document: a JSON array of [`EventRecord`]s.
///
/// # Errors
///
/// - [`IoError::Json`] if the text is not JSON.
/// - [`IoError::NotAnArray`] if the top-level value is not an array.
/// - [`IoError::InvalidRecord`] for the first record that is malformed.
pub fn parse_events(json: &str) -> Result<Vec<RecurringLunarEvent>, IoError> {
    let value: Value = serde_json::from_str(json)?;
    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(IoError::NotAnArray {
                found: json_type(&other),
            });
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value::<EventRecord>(item)
                .map_err(RecordError::from)
                .and_then(|record| record.into_event().map_err(RecordError::from))
                .map_err(|source| IoError::InvalidRecord { index, source })
        })
        .collect()
}

/// Reads and parses an events file.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if `path` does not exist,
/// [`IoError::Read`] if it cannot be read, or any error from
/// [`parse_events`].
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn read_events(path: &Path) -> Result<Vec<RecurringLunarEvent>, IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let text = fs::read_to_string(path).map_err(|source| IoError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let events = parse_events(&text)?;
    info!(n_events = events.len(), "read events");
    Ok(events)
}

/// Serializes events as a pretty-printed JSON array.
///
/// # Errors
///
/// Returns [`IoError::Json`] if serialization fails.
pub fn events_to_json(events: &[RecurringLunarEvent]) -> Result<String, IoError> {
    let records: Vec<EventRecord> = events.iter().map(EventRecord::from).collect();
    let mut json = serde_json::to_string_pretty(&records)?;
    json.push('\n');
    Ok(json)
}

/// Writes events to `path` in the events file format.
///
/// # Errors
///
/// Returns [`IoError::Json`] or [`IoError::Write`].
#[tracing::instrument(skip_all, fields(path = %path.display(), n_events = events.len()))]
pub fn write_events(path: &Path, events: &[RecurringLunarEvent]) -> Result<(), IoError> {
    let json = events_to_json(events)?;
    write_file(path, &json)
}

/// Writes an encoded calendar document to `path`.
///
/// # Errors
///
/// Returns [`IoError::Write`] if the file cannot be written.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn write_calendar(path: &Path, document: &str) -> Result<(), IoError> {
    write_file(path, document)
}

fn write_file(path: &Path, contents: &str) -> Result<(), IoError> {
    let write_err = |source: std::io::Error| IoError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(path, contents).map_err(write_err)?;
    debug!(n_bytes = contents.len(), "wrote file");
    Ok(())
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
