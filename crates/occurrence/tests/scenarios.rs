use lunical_calendar::{CalendarError, LunarDate, SolarDate};
use lunical_occurrence::{
    GenerateConfig, MissingDayPolicy, OccurrenceError, OccurrenceGenerator, RecurringLunarEvent,
    ReminderOffset, generate_all, generate_occurrences,
};

fn solar(y: i32, m: u8, d: u8) -> SolarDate {
    SolarDate::new(y, m, d).unwrap()
}

#[test]
fn mid_autumn_one_per_year() {
    let event = RecurringLunarEvent::new("Mid-Autumn", 8, 15)
        .unwrap()
        .with_reminder(ReminderOffset::days(1));
    let occ = generate_occurrences(&event, &GenerateConfig::new(2024, 3)).unwrap();
    assert_eq!(occ.len(), 3);
    assert_eq!(occ[0].solar_date(), solar(2024, 9, 17));
    assert_eq!(occ[1].solar_date(), solar(2025, 10, 6));
    assert_eq!(occ[2].solar_date(), solar(2026, 9, 25));
    for o in &occ {
        assert!(std::ptr::eq(o.event(), &event));
        assert_eq!(o.lunar_date().month(), 8);
        assert_eq!(o.lunar_date().day(), 15);
    }
}

#[test]
fn missing_leap_month_is_skipped_not_remapped() {
    // 2025's leap month is the sixth, so a leap-fourth-month event has no
    // occurrence that year.
    let event = RecurringLunarEvent::new("leap four", 4, 1)
        .unwrap()
        .with_leap_month(true);
    let occ = generate_occurrences(&event, &GenerateConfig::new(2025, 1)).unwrap();
    assert!(occ.is_empty());
}

#[test]
fn leap_month_produced_only_where_tabulated() {
    let event = RecurringLunarEvent::new("leap four", 4, 1)
        .unwrap()
        .with_leap_month(true);
    let occ = generate_occurrences(&event, &GenerateConfig::new(2019, 3)).unwrap();
    assert_eq!(occ.len(), 1);
    assert_eq!(occ[0].lunar_year(), 2020);
    assert_eq!(occ[0].solar_date(), solar(2020, 5, 23));
    assert!(occ[0].lunar_date().is_leap_month());
}

#[test]
fn regular_month_in_leap_year_still_occurs() {
    let event = RecurringLunarEvent::new("six", 6, 1).unwrap();
    let occ = generate_occurrences(&event, &GenerateConfig::new(2025, 1)).unwrap();
    assert_eq!(occ.len(), 1);
    assert!(!occ[0].lunar_date().is_leap_month());
}

#[test]
fn missing_day_fails_by_default() {
    // The twelfth month of 2024 has 29 days.
    let event = RecurringLunarEvent::new("year end", 12, 30).unwrap();
    let err = generate_occurrences(&event, &GenerateConfig::new(2022, 3)).unwrap_err();
    assert_eq!(
        err,
        OccurrenceError::Calendar(CalendarError::DayOutOfMonth {
            date: LunarDate::new(2024, 12, 30, false).unwrap(),
            max_day: 29,
        })
    );
}

#[test]
fn missing_day_skip_and_last_day() {
    let event = RecurringLunarEvent::new("year end", 12, 30).unwrap();

    let skip = GenerateConfig::new(2022, 3).with_missing_day(MissingDayPolicy::Skip);
    let occ = generate_occurrences(&event, &skip).unwrap();
    let dates: Vec<_> = occ.iter().map(|o| o.solar_date()).collect();
    assert_eq!(dates, vec![solar(2023, 1, 21), solar(2024, 2, 9)]);

    let last = GenerateConfig::new(2022, 3).with_missing_day(MissingDayPolicy::LastDay);
    let occ = generate_occurrences(&event, &last).unwrap();
    assert_eq!(occ.len(), 3);
    assert_eq!(occ[2].solar_date(), solar(2025, 1, 28));
    assert_eq!(occ[2].lunar_date(), LunarDate::new(2024, 12, 29, false).unwrap());
}

#[test]
fn missing_leap_day_policy() {
    // The leap fourth month of 2020 has 29 days.
    let event = RecurringLunarEvent::new("leap four end", 4, 30)
        .unwrap()
        .with_leap_month(true);
    let cfg = GenerateConfig::new(2020, 1).with_missing_day(MissingDayPolicy::LastDay);
    let occ = generate_occurrences(&event, &cfg).unwrap();
    assert_eq!(occ[0].solar_date(), solar(2020, 6, 20));
}

#[test]
fn merged_events_sorted_by_date() {
    let events = vec![
        RecurringLunarEvent::new("Mid-Autumn", 8, 15).unwrap(),
        RecurringLunarEvent::new("New Year", 1, 1).unwrap(),
    ];
    let occ = generate_all(&events, &GenerateConfig::new(2024, 2)).unwrap();
    let summary: Vec<_> = occ
        .iter()
        .map(|o| (o.event().title(), o.solar_date()))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("New Year", solar(2024, 2, 10)),
            ("Mid-Autumn", solar(2024, 9, 17)),
            ("New Year", solar(2025, 1, 29)),
            ("Mid-Autumn", solar(2025, 10, 6)),
        ]
    );
}

#[test]
fn generation_is_deterministic() {
    let events = vec![
        RecurringLunarEvent::new("a", 3, 23).unwrap(),
        RecurringLunarEvent::new("b", 9, 9).unwrap(),
    ];
    let generator = OccurrenceGenerator::new(GenerateConfig::new(2000, 40));
    let first = generator.generate_all(&events).unwrap();
    let second = generator.generate_all(&events).unwrap();
    assert_eq!(first, second);
}

#[test]
fn boundary_years() {
    let event = RecurringLunarEvent::new("New Year", 1, 1).unwrap();
    assert_eq!(
        generate_occurrences(&event, &GenerateConfig::new(1900, 1))
            .unwrap()
            .len(),
        1
    );
    assert_eq!(
        generate_occurrences(&event, &GenerateConfig::new(2100, 1))
            .unwrap()
            .len(),
        1
    );
    for cfg in [GenerateConfig::new(1899, 2), GenerateConfig::new(2100, 2)] {
        let err = generate_occurrences(&event, &cfg).unwrap_err();
        assert!(
            matches!(&err, OccurrenceError::Calendar(e) if e.is_out_of_range()),
            "{cfg:?} gave {err:?}"
        );
    }
}
