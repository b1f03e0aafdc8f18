#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use hourbank::libs::overtime::HoursMinutes;
    use hourbank::libs::record::BankRecord;
    use hourbank::libs::summary::BankSummary;
    use hourbank::libs::time::TimeOfDay;

    fn record(day: u32, scheduled: (u32, u32), actual: (u32, u32), holiday: bool) -> BankRecord {
        BankRecord::new(
            NaiveDate::from_ymd_opt(2025, 4, day).unwrap(),
            TimeOfDay::new(scheduled.0, scheduled.1).unwrap(),
            TimeOfDay::new(actual.0, actual.1).unwrap(),
            holiday,
            "overtime".to_string(),
        )
    }

    #[test]
    fn test_empty_collection_yields_zero_buckets() {
        let summary = BankSummary::of(&[]);

        assert_eq!(summary.day, HoursMinutes::zero());
        assert_eq!(summary.night, HoursMinutes::zero());
        assert_eq!(summary.holiday_day, HoursMinutes::zero());
        assert_eq!(summary.holiday_night, HoursMinutes::zero());
        assert_eq!(summary.holiday_count, 0);
        assert_eq!(summary.day.to_string(), "0h 0m");
    }

    #[test]
    fn test_regular_and_holiday_records_feed_separate_buckets() {
        let records = vec![
            // 17:00 -> 23:30: day 5h 0m, night 1h 30m.
            record(1, (17, 0), (23, 30), false),
            // 17:00 -> 02:00 next day on a holiday: day 5h 0m, night 4h 0m.
            record(2, (17, 0), (2, 0), true),
        ];
        let summary = BankSummary::of(&records);

        assert_eq!(summary.day, HoursMinutes { hours: 5, minutes: 0 });
        assert_eq!(summary.night, HoursMinutes { hours: 1, minutes: 30 });
        assert_eq!(summary.holiday_day, HoursMinutes { hours: 5, minutes: 0 });
        assert_eq!(summary.holiday_night, HoursMinutes { hours: 4, minutes: 0 });
        assert_eq!(summary.holiday_count, 1);
    }

    #[test]
    fn test_minute_parts_accumulate_before_normalizing() {
        // Three 50-minute day entries: minute parts sum to 150 and spill
        // into hours only once, at the end.
        let records = vec![
            record(1, (17, 0), (17, 50), false),
            record(2, (17, 0), (17, 50), false),
            record(3, (17, 0), (17, 50), false),
        ];
        let summary = BankSummary::of(&records);

        assert_eq!(summary.day, HoursMinutes { hours: 2, minutes: 30 });
        assert_eq!(summary.night, HoursMinutes::zero());
    }

    #[test]
    fn test_holiday_count_tracks_only_holiday_records() {
        let records = vec![
            record(1, (17, 0), (18, 0), false),
            record(2, (17, 0), (18, 0), true),
            record(3, (17, 0), (18, 0), true),
        ];
        let summary = BankSummary::of(&records);

        assert_eq!(summary.holiday_count, 2);
        assert_eq!(summary.day, HoursMinutes { hours: 1, minutes: 0 });
        assert_eq!(summary.holiday_day, HoursMinutes { hours: 2, minutes: 0 });
    }
}
