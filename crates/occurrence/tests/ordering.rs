use lunical_occurrence::{GenerateConfig, MissingDayPolicy, RecurringLunarEvent, generate_all};
use proptest::prelude::*;

proptest! {
    #[test]
    fn single_event_strictly_increasing(
        month in 1u8..=12,
        day in 1u8..=30,
        leap in any::<bool>(),
        start in 1900i32..=2080,
        span in 1u32..=20,
    ) {
        let event = RecurringLunarEvent::new("e", month, day)
            .unwrap()
            .with_leap_month(leap);
        let cfg = GenerateConfig::new(start, span).with_missing_day(MissingDayPolicy::Skip);
        let events = [event];
        let occ = generate_all(&events, &cfg).unwrap();
        prop_assert!(occ.len() <= span as usize);
        for w in occ.windows(2) {
            prop_assert!(w[0].solar_date() < w[1].solar_date());
            prop_assert!(w[0].lunar_year() < w[1].lunar_year());
        }
        if !leap && day <= 29 {
            prop_assert_eq!(occ.len(), span as usize);
        }
    }

    #[test]
    fn merged_events_non_decreasing(
        dates in prop::collection::vec((1u8..=12, 1u8..=29), 1..6),
        start in 1900i32..=2090,
        span in 1u32..=10,
    ) {
        let events: Vec<_> = dates
            .iter()
            .enumerate()
            .map(|(i, &(m, d))| RecurringLunarEvent::new(format!("e{i}"), m, d).unwrap())
            .collect();
        let occ = generate_all(&events, &GenerateConfig::new(start, span)).unwrap();
        prop_assert_eq!(occ.len(), events.len() * span as usize);
        for w in occ.windows(2) {
            prop_assert!(w[0].solar_date() <= w[1].solar_date());
        }
    }
}
