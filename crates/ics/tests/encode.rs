use chrono::{DateTime, TimeZone, Utc};
use lunical_ics::{IcsConfig, IcsEncoder, MAX_LINE_OCTETS, occurrence_uid};
use lunical_occurrence::{GenerateConfig, RecurringLunarEvent, ReminderOffset, generate_all};

fn stamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 30, 0).unwrap()
}

fn mazu() -> RecurringLunarEvent {
    RecurringLunarEvent::new("媽祖生日", 3, 23)
        .unwrap()
        .with_reminder(ReminderOffset::days(1))
}

fn encode(events: &[RecurringLunarEvent], start: i32, span: u32) -> String {
    let occurrences = generate_all(events, &GenerateConfig::new(start, span)).unwrap();
    IcsEncoder::new(IcsConfig::default()).encode_at(&occurrences, stamp())
}

/// Joins folded continuation lines back into logical lines.
fn logical_lines(ics: &str) -> Vec<String> {
    ics.replace("\r\n ", "")
        .split("\r\n")
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

#[test]
fn document_structure() {
    let ics = encode(&[mazu()], 2026, 2);
    let lines = logical_lines(&ics);
    assert_eq!(lines[0], "BEGIN:VCALENDAR");
    assert_eq!(lines[1], "VERSION:2.0");
    assert_eq!(lines[2], "PRODID:-//lunical//Lunar ICS Generator//EN");
    assert!(lines.contains(&"CALSCALE:GREGORIAN".to_string()));
    assert!(lines.contains(&"METHOD:PUBLISH".to_string()));
    assert!(lines.contains(&"X-WR-CALNAME:農曆提醒".to_string()));
    assert_eq!(lines.last().unwrap(), "END:VCALENDAR");

    let begins = lines.iter().filter(|l| *l == "BEGIN:VEVENT").count();
    let alarms = lines.iter().filter(|l| *l == "BEGIN:VALARM").count();
    assert_eq!(begins, 2);
    assert_eq!(alarms, 2);
}

#[test]
fn all_day_dates_and_stamp() {
    let ics = encode(&[mazu()], 2026, 2);
    assert!(ics.contains("DTSTART;VALUE=DATE:20260509\r\n"));
    assert!(ics.contains("DTEND;VALUE=DATE:20260510\r\n"));
    assert!(ics.contains("DTSTART;VALUE=DATE:20270429\r\n"));
    assert!(ics.contains("DTEND;VALUE=DATE:20270430\r\n"));
    assert!(ics.contains("DTSTAMP:20240601T123000Z\r\n"));
    assert!(ics.contains("SUMMARY:媽祖生日\r\n"));
    assert!(ics.contains("TRIGGER:-P1D\r\n"));
}

#[test]
fn every_line_is_crlf_terminated() {
    let ics = encode(&[mazu()], 2026, 3);
    assert!(ics.ends_with("\r\n"));
    let bytes = ics.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b == b'\n' {
            assert!(i > 0 && bytes[i - 1] == b'\r', "bare LF at {i}");
        }
    }
}

#[test]
fn text_is_escaped() {
    let event = RecurringLunarEvent::new("Tea, cake; and \\more", 1, 1)
        .unwrap()
        .with_notes("line one\nline two");
    let ics = encode(&[event], 2024, 1);
    let lines = logical_lines(&ics);
    assert!(lines.contains(&r"SUMMARY:Tea\, cake\; and \\more".to_string()));
    assert!(lines.contains(&r"DESCRIPTION:line one\nline two".to_string()));
}

#[test]
fn long_lines_are_folded() {
    let title = "農曆".repeat(40);
    let event = RecurringLunarEvent::new(title.clone(), 1, 1)
        .unwrap()
        .with_notes("x".repeat(300));
    let ics = encode(&[event], 2024, 1);
    for line in ics.split("\r\n") {
        assert!(line.len() <= MAX_LINE_OCTETS, "{} octets: {line}", line.len());
    }
    let lines = logical_lines(&ics);
    assert!(lines.contains(&format!("SUMMARY:{title}")));
    assert!(lines.contains(&format!("DESCRIPTION:{}", "x".repeat(300))));
}

#[test]
fn no_description_without_notes() {
    let event = RecurringLunarEvent::new("Plain", 5, 5).unwrap();
    let ics = encode(&[event], 2024, 1);
    assert!(!ics.contains("DESCRIPTION"));
    assert!(!ics.contains("VALARM"));
}

#[test]
fn alarms_follow_offset_order() {
    let event = RecurringLunarEvent::new("Festival", 1, 15)
        .unwrap()
        .with_reminders([ReminderOffset::days(2), ReminderOffset::hours(3)]);
    let ics = encode(&[event], 2024, 1);
    let lines = logical_lines(&ics);
    let triggers: Vec<_> = lines.iter().filter(|l| l.starts_with("TRIGGER:")).collect();
    assert_eq!(triggers, ["TRIGGER:-PT3H", "TRIGGER:-P2D"]);
    assert!(lines.contains(&"ACTION:DISPLAY".to_string()));
    assert!(lines.contains(&"DESCRIPTION:Festival".to_string()));
}

#[test]
fn uids_are_stable_across_runs() {
    let a = encode(&[mazu()], 2026, 3);
    let b = encode(&[mazu()], 2026, 3);
    assert_eq!(a, b);

    // A later stamp changes only DTSTAMP.
    let events = [mazu()];
    let occurrences = generate_all(&events, &GenerateConfig::new(2026, 3)).unwrap();
    let later = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
    let c = IcsEncoder::default().encode_at(&occurrences, later);
    let uids = |s: &str| -> Vec<String> {
        logical_lines(s)
            .into_iter()
            .filter(|l| l.starts_with("UID:"))
            .collect()
    };
    assert_eq!(uids(&a), uids(&c));
}

#[test]
fn uids_are_distinct_per_date_and_event() {
    let events = vec![
        mazu(),
        RecurringLunarEvent::new("Mid-Autumn", 8, 15).unwrap(),
    ];
    let occurrences = generate_all(&events, &GenerateConfig::new(2024, 5)).unwrap();
    let mut uids: Vec<_> = occurrences.iter().map(occurrence_uid).collect();
    assert!(uids.iter().all(|u| u.ends_with("@lunical")));
    uids.sort();
    uids.dedup();
    assert_eq!(uids.len(), occurrences.len());
}

#[test]
fn uid_ignores_reminders_and_notes() {
    let plain = vec![mazu()];
    let dressed = vec![
        mazu()
            .with_reminder(ReminderOffset::hours(2))
            .with_notes("bring incense"),
    ];
    let config = GenerateConfig::new(2026, 1);
    let a = generate_all(&plain, &config).unwrap();
    let b = generate_all(&dressed, &config).unwrap();
    assert_eq!(occurrence_uid(&a[0]), occurrence_uid(&b[0]));
}

#[test]
fn custom_config() {
    let events = [mazu()];
    let occurrences = generate_all(&events, &GenerateConfig::new(2026, 1)).unwrap();
    let config = IcsConfig::new()
        .with_calendar_name("Family, Temple")
        .with_product_id("-//example//test//EN");
    let ics = IcsEncoder::new(config).encode_at(&occurrences, stamp());
    assert!(ics.contains("X-WR-CALNAME:Family\\, Temple\r\n"));
    assert!(ics.contains("PRODID:-//example//test//EN\r\n"));

    let unnamed = IcsEncoder::new(IcsConfig::new().with_calendar_name(""))
        .encode_at(&occurrences, stamp());
    assert!(!unnamed.contains("X-WR-CALNAME"));
}

#[test]
fn empty_calendar() {
    let ics = IcsEncoder::default().encode_at(&[], stamp());
    assert!(ics.starts_with("BEGIN:VCALENDAR\r\n"));
    assert!(ics.ends_with("END:VCALENDAR\r\n"));
    assert!(!ics.contains("VEVENT"));
}

#[test]
fn repeated_identities_get_distinct_uids() {
    let events = vec![
        RecurringLunarEvent::new("拜拜", 1, 15).unwrap().with_notes("morning"),
        RecurringLunarEvent::new("拜拜", 1, 15).unwrap().with_notes("evening"),
    ];
    let occurrences = generate_all(&events, &GenerateConfig::new(2024, 2)).unwrap();
    assert_eq!(occurrence_uid(&occurrences[0]), occurrence_uid(&occurrences[1]));

    let ics = IcsEncoder::default().encode_at(&occurrences, stamp());
    let uids: Vec<String> = logical_lines(&ics)
        .into_iter()
        .filter(|l| l.starts_with("UID:"))
        .collect();
    assert_eq!(uids.len(), 4);
    let mut unique = uids.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), 4);

    let base = occurrence_uid(&occurrences[0]);
    assert_eq!(uids[0], format!("UID:{base}"));
    assert_eq!(uids[1], format!("UID:{}", base.replace("@lunical", "-2@lunical")));

    assert_eq!(ics, IcsEncoder::default().encode_at(&occurrences, stamp()));
}
