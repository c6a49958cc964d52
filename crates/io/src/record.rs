//! On-disk event record format.

use lunical_occurrence::{OccurrenceError, RecurringLunarEvent, ReminderOffset};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Reminder the earlier web tool applied when a record had no
/// `alarm_minutes_before` key.
pub const LEGACY_DEFAULT_ALARM_MINUTES: u32 = 1440;

/// One event as stored in an events file.
///
/// Besides the native fields, records exported by the earlier web tool are
/// accepted: `alarm_minutes_before` (a number or `null`) adds a reminder.
/// A record carrying that tool's `time` or `duration_minutes` fields but no
/// `alarm_minutes_before` key gets its one-day default. Other unknown fields
/// are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub title: String,
    pub lunar_month: u8,
    pub lunar_day: u8,
    #[serde(default)]
    pub is_leap_month: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reminder_offsets: Vec<OffsetValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// `None` if the key is absent, `Some(None)` if it is `null`.
    #[serde(default, skip_serializing, deserialize_with = "present")]
    pub alarm_minutes_before: Option<Option<u32>>,
    #[serde(default, skip_serializing)]
    pub time: Option<Value>,
    #[serde(default, skip_serializing)]
    pub duration_minutes: Option<Value>,
}

fn present<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Option<u32>>, D::Error> {
    Option::<u32>::deserialize(deserializer).map(Some)
}

/// A reminder offset as written in a file: `"1d"`, `"2h30m"`, or a bare
/// number of minutes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OffsetValue {
    Minutes(u32),
    Text(String),
}

impl OffsetValue {
    fn to_offset(&self) -> Result<ReminderOffset, OccurrenceError> {
        match self {
            OffsetValue::Minutes(m) => Ok(ReminderOffset::minutes(*m)),
            OffsetValue::Text(s) => s.parse(),
        }
    }
}

impl EventRecord {
    /// Converts the record into a validated event.
    ///
    /// # Errors
    ///
    /// Returns [`OccurrenceError`] for an unparsable reminder or out-of-bounds
    /// month or day.
    pub fn into_event(self) -> Result<RecurringLunarEvent, OccurrenceError> {
        let mut reminders = self
            .reminder_offsets
            .iter()
            .map(OffsetValue::to_offset)
            .collect::<Result<Vec<_>, _>>()?;
        let is_legacy = self.time.is_some() || self.duration_minutes.is_some();
        let alarm = match self.alarm_minutes_before {
            Some(alarm) => alarm,
            None if is_legacy => Some(LEGACY_DEFAULT_ALARM_MINUTES),
            None => None,
        };
        if let Some(minutes) = alarm {
            reminders.push(ReminderOffset::minutes(minutes));
        }

        let mut event = RecurringLunarEvent::new(self.title, self.lunar_month, self.lunar_day)?
            .with_leap_month(self.is_leap_month)
            .with_reminders(reminders);
        if let Some(notes) = self.notes {
            event = event.with_notes(notes);
        }
        Ok(event)
    }
}

impl From<&RecurringLunarEvent> for EventRecord {
    fn from(event: &RecurringLunarEvent) -> Self {
        Self {
            title: event.title().to_string(),
            lunar_month: event.lunar_month(),
            lunar_day: event.lunar_day(),
            is_leap_month: event.is_leap_month(),
            reminder_offsets: event
                .reminder_offsets()
                .iter()
                .map(|o| OffsetValue::Text(o.to_string()))
                .collect(),
            notes: event.notes().map(str::to_string),
            alarm_minutes_before: None,
            time: None,
            duration_minutes: None,
        }
    }
}
