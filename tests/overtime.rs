#[cfg(test)]
mod tests {
    use hourbank::libs::overtime::{split, HoursMinutes, OvertimeMinutes, OvertimeSplit};
    use hourbank::libs::time::TimeOfDay;
    use proptest::prelude::*;

    fn time(hour: u32, minute: u32) -> TimeOfDay {
        TimeOfDay::new(hour, minute).unwrap()
    }

    #[test]
    fn test_equal_times_yield_no_overtime() {
        let result = split(time(17, 0), time(17, 0));
        assert_eq!(result, OvertimeMinutes { day: 0, night: 0 });
    }

    #[test]
    fn test_rollover_treats_earlier_actual_as_next_day() {
        // 17:00 -> 02:00 reads as 26:00 on the unrolled scale: 540 extra minutes.
        let result = split(time(17, 0), time(2, 0));
        assert_eq!(result.day + result.night, 540);
    }

    #[test]
    fn test_evening_overtime_splits_at_ten_pm() {
        // 17:00 -> 23:30: 390 extra minutes, 90 of them past 22:00.
        let result = split(time(17, 0), time(23, 30));
        assert_eq!(result.day, 300);
        assert_eq!(result.night, 90);
    }

    #[test]
    fn test_past_midnight_overtime() {
        // 17:00 -> 02:00 next day: the night bucket covers 22:00 to 02:00.
        let result = split(time(17, 0), time(2, 0));
        assert_eq!(result.day, 300);
        assert_eq!(result.night, 240);
    }

    #[test]
    fn test_overtime_ending_exactly_at_ten_pm_is_all_day() {
        let result = split(time(17, 0), time(22, 0));
        assert_eq!(result.day, 300);
        assert_eq!(result.night, 0);
    }

    #[test]
    fn test_first_minute_past_ten_pm_is_night() {
        let result = split(time(17, 0), time(22, 1));
        assert_eq!(result.day, 300);
        assert_eq!(result.night, 1);
    }

    #[test]
    fn test_shift_entirely_in_small_hours_is_all_night() {
        // 01:00 -> 03:00 with no rollover sits fully in the night window.
        let result = split(time(1, 0), time(3, 0));
        assert_eq!(result.day, 0);
        assert_eq!(result.night, 120);
    }

    #[test]
    fn test_shift_ending_exactly_at_five_am_is_clamped_to_extra() {
        // 01:00 -> 05:00: the branch credits the 22:00-24:00 segment too,
        // but the clamp caps night at the 240 minutes actually worked.
        let result = split(time(1, 0), time(5, 0));
        assert_eq!(result.day, 0);
        assert_eq!(result.night, 240);
    }

    #[test]
    fn test_late_scheduled_end_only_counts_actual_night_minutes() {
        // 23:00 -> 01:30 next day: every extra minute is past 22:00.
        let result = split(time(23, 0), time(1, 30));
        assert_eq!(result.day, 0);
        assert_eq!(result.night, 150);
    }

    #[test]
    fn test_hours_minutes_conversion() {
        assert_eq!(HoursMinutes::from_minutes(0), HoursMinutes { hours: 0, minutes: 0 });
        assert_eq!(HoursMinutes::from_minutes(90), HoursMinutes { hours: 1, minutes: 30 });
        assert_eq!(HoursMinutes::from_minutes(300), HoursMinutes { hours: 5, minutes: 0 });
        assert_eq!(HoursMinutes::from_minutes(59), HoursMinutes { hours: 0, minutes: 59 });
    }

    #[test]
    fn test_hours_minutes_display() {
        assert_eq!(HoursMinutes::from_minutes(300).to_string(), "5h 0m");
        assert_eq!(HoursMinutes::from_minutes(90).to_string(), "1h 30m");
        assert_eq!(HoursMinutes::zero().to_string(), "0h 0m");
    }

    #[test]
    fn test_holiday_flag_selects_holiday_buckets() {
        let regular = OvertimeSplit::from_times(time(17, 0), time(23, 30), false);
        let holiday = OvertimeSplit::from_times(time(17, 0), time(23, 30), true);

        assert!(!regular.is_holiday());
        assert!(holiday.is_holiday());

        // Same arithmetic, different destination.
        assert_eq!(regular.day(), holiday.day());
        assert_eq!(regular.night(), holiday.night());
        assert_eq!(holiday.day(), HoursMinutes { hours: 5, minutes: 0 });
        assert_eq!(holiday.night(), HoursMinutes { hours: 1, minutes: 30 });
    }

    proptest! {
        #[test]
        fn test_split_partitions_extra_minutes(
            scheduled_hour in 0u32..24,
            scheduled_minute in 0u32..60,
            actual_hour in 0u32..24,
            actual_minute in 0u32..60,
        ) {
            let scheduled = TimeOfDay::new(scheduled_hour, scheduled_minute).unwrap();
            let actual = TimeOfDay::new(actual_hour, actual_minute).unwrap();
            let result = split(scheduled, actual);

            let mut actual_total = actual.total_minutes();
            if actual_total < scheduled.total_minutes() {
                actual_total += 24 * 60;
            }
            let extra = actual_total - scheduled.total_minutes();

            prop_assert!(result.night <= extra);
            prop_assert_eq!(result.day + result.night, extra);
        }
    }
}
