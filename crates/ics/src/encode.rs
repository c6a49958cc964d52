//! Calendar document assembly.

use chrono::{DateTime, Utc};
use lunical_occurrence::{Occurrence, ReminderOffset};
use tracing::debug;

use crate::config::IcsConfig;
use crate::text::{CRLF, escape_text, fold_line};
use crate::uid::UidAllocator;

/// Encodes occurrences as an iCalendar document.
#[derive(Debug, Clone, Default)]
pub struct IcsEncoder {
    config: IcsConfig,
}

impl IcsEncoder {
    /// Creates an encoder with the given document settings.
    pub fn new(config: IcsConfig) -> Self {
        Self { config }
    }

    /// Returns the document settings.
    pub fn config(&self) -> &IcsConfig {
        &self.config
    }

    /// Encodes occurrences, stamping every event with the current time.
    pub fn encode(&self, occurrences: &[Occurrence<'_>]) -> String {
        self.encode_at(occurrences, Utc::now())
    }

    /// Encodes occurrences with an explicit `DTSTAMP`.
    ///
    /// Events are written in the order given. Output for a fixed
    /// `dtstamp` is fully deterministic.
    #[tracing::instrument(skip_all, fields(n_occurrences = occurrences.len()))]
    pub fn encode_at(&self, occurrences: &[Occurrence<'_>], dtstamp: DateTime<Utc>) -> String {
        let stamp = dtstamp.format("%Y%m%dT%H%M%SZ").to_string();
        let mut w = ContentWriter::default();

        w.property("BEGIN", "VCALENDAR");
        w.property("VERSION", "2.0");
        w.text("PRODID", self.config.product_id());
        w.property("CALSCALE", "GREGORIAN");
        w.property("METHOD", "PUBLISH");
        if !self.config.calendar_name().is_empty() {
            w.text("X-WR-CALNAME", self.config.calendar_name());
        }

        let mut uids = UidAllocator::default();
        for occ in occurrences {
            write_event(&mut w, occ, &uids.allocate(occ), &stamp);
        }

        w.property("END", "VCALENDAR");
        debug!(n_octets = w.buf.len(), "encoded calendar");
        w.buf
    }
}

/// Encodes occurrences with the given settings and the current time.
pub fn encode_calendar(occurrences: &[Occurrence<'_>], config: &IcsConfig) -> String {
    IcsEncoder::new(config.clone()).encode(occurrences)
}

fn write_event(w: &mut ContentWriter, occ: &Occurrence<'_>, uid: &str, stamp: &str) {
    let event = occ.event();
    let start = occ.solar_date();

    w.property("BEGIN", "VEVENT");
    w.property("UID", uid);
    w.property("DTSTAMP", stamp);
    w.property("DTSTART;VALUE=DATE", &start.to_basic_string());
    if let Some(end) = start.succ() {
        w.property("DTEND;VALUE=DATE", &end.to_basic_string());
    }
    w.text("SUMMARY", event.title());
    if let Some(notes) = event.notes() {
        w.text("DESCRIPTION", notes);
    }
    for &offset in event.reminder_offsets() {
        w.property("BEGIN", "VALARM");
        w.property("ACTION", "DISPLAY");
        w.text("DESCRIPTION", event.title());
        w.property("TRIGGER", &trigger(offset));
        w.property("END", "VALARM");
    }
    w.property("END", "VEVENT");
}

/// Formats a reminder as a negative duration before the event start.
fn trigger(offset: ReminderOffset) -> String {
    if offset.as_minutes() == 0 {
        return "PT0M".to_string();
    }
    let (days, hours, minutes) = offset.parts();
    let mut out = String::from("-P");
    if days > 0 {
        out.push_str(&format!("{days}D"));
    }
    if hours > 0 || minutes > 0 {
        out.push('T');
        if hours > 0 {
            out.push_str(&format!("{hours}H"));
        }
        if minutes > 0 {
            out.push_str(&format!("{minutes}M"));
        }
    }
    out
}

#[derive(Default)]
struct ContentWriter {
    buf: String,
}

impl ContentWriter {
    fn property(&mut self, name: &str, value: &str) {
        self.buf.push_str(&fold_line(&format!("{name}:{value}")));
        self.buf.push_str(CRLF);
    }

    fn text(&mut self, name: &str, value: &str) {
        self.property(name, &escape_text(value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigger_formats() {
        assert_eq!(trigger(ReminderOffset::AT_START), "PT0M");
        assert_eq!(trigger(ReminderOffset::minutes(30)), "-PT30M");
        assert_eq!(trigger(ReminderOffset::hours(2)), "-PT2H");
        assert_eq!(trigger(ReminderOffset::days(1)), "-P1D");
        assert_eq!(trigger(ReminderOffset::minutes(1440 + 90)), "-P1DT1H30M");
        assert_eq!(trigger(ReminderOffset::minutes(2 * 1440 + 5)), "-P2DT5M");
    }

    #[test]
    fn writer_terminates_lines() {
        let mut w = ContentWriter::default();
        w.text("SUMMARY", "a,b");
        assert_eq!(w.buf, "SUMMARY:a\\,b\r\n");
    }
}
