//! Recurrence resolution for availability records.
//!
//! Decides whether a stored record applies to a target calendar date, and
//! which record wins when several apply. The winner rule is deliberate
//! last-write-wins by `updated_at` (ties broken by id) so overlapping
//! declarations resolve the same way on every request.

use chrono::{Datelike, NaiveDate};

use crate::domain::models::availability::{AvailabilityRecord, RepeatSchedule};

/// Does `record` apply to `target`?
///
/// - `once`: only the start date itself.
/// - `weekly`: every 7th day from the start date, within the range.
/// - `monthly`: the start date's day-of-month, within the range. Months
///   lacking that day (day 31 in a 30-day month) contribute no match; the
///   day is never clamped.
///
/// A missing `end_date` bounds nothing: `once` already pins a single day
/// and `weekly`/`monthly` repeat forever.
pub fn applies(record: &AvailabilityRecord, target: NaiveDate) -> bool {
    if target < record.start_date {
        return false;
    }
    if let Some(end) = record.end_date {
        if target > end {
            return false;
        }
    }

    match record.repeat_schedule {
        RepeatSchedule::Once => target == record.start_date,
        RepeatSchedule::Weekly => (target - record.start_date).num_days() % 7 == 0,
        RepeatSchedule::Monthly => target.day() == record.start_date.day(),
    }
}

/// Pick the record that governs `target`, if any.
///
/// Among applying records the most recently updated wins; equal timestamps
/// fall back to the larger id so the rule stays total.
pub fn pick_applicable(
    records: &[AvailabilityRecord],
    target: NaiveDate,
) -> Option<&AvailabilityRecord> {
    records
        .iter()
        .filter(|record| applies(record, target))
        .max_by(|a, b| {
            a.updated_at
                .cmp(&b.updated_at)
                .then_with(|| a.id.cmp(&b.id))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    use crate::domain::models::availability::{AvailabilityStatus, SlotGrid, SlotSetting};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn all_busy_grid() -> SlotGrid {
        let setting = SlotSetting {
            available: false,
            status: AvailabilityStatus::Busy,
        };
        SlotGrid {
            morning: setting,
            afternoon: setting,
            evening: setting,
            night: setting,
        }
    }

    fn record(
        id: &str,
        repeat: RepeatSchedule,
        start: NaiveDate,
        end: Option<NaiveDate>,
    ) -> AvailabilityRecord {
        AvailabilityRecord {
            id: id.to_string(),
            owner_id: "owner-1".to_string(),
            slots: all_busy_grid(),
            repeat_schedule: repeat,
            start_date: start,
            end_date: end,
            notes: None,
            created_at: Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn once_applies_only_on_start_date() {
        let start = date(2025, 7, 10);
        let rec = record("a", RepeatSchedule::Once, start, Some(start));

        assert!(applies(&rec, start));
        assert!(!applies(&rec, date(2025, 7, 9)));
        assert!(!applies(&rec, date(2025, 7, 11)));
        assert!(!applies(&rec, date(2026, 7, 10)));
    }

    #[test]
    fn weekly_matches_only_seven_day_steps() {
        let rec = record(
            "a",
            RepeatSchedule::Weekly,
            date(2025, 7, 1),
            Some(date(2025, 7, 31)),
        );

        assert!(applies(&rec, date(2025, 7, 1)));
        assert!(applies(&rec, date(2025, 7, 8)));
        assert!(applies(&rec, date(2025, 7, 15)));
        assert!(applies(&rec, date(2025, 7, 22)));
        assert!(applies(&rec, date(2025, 7, 29)));

        assert!(!applies(&rec, date(2025, 7, 2)));
        assert!(!applies(&rec, date(2025, 7, 9)));
        assert!(!applies(&rec, date(2025, 7, 30)));
    }

    #[test]
    fn weekly_is_false_just_past_the_range_boundary() {
        let rec = record(
            "a",
            RepeatSchedule::Weekly,
            date(2025, 7, 1),
            Some(date(2025, 7, 15)),
        );

        assert!(applies(&rec, date(2025, 7, 15)));
        // 2025-07-16 is end_date + 1; 07-22 would be the next 7-day step.
        assert!(!applies(&rec, date(2025, 7, 16)));
        assert!(!applies(&rec, date(2025, 7, 22)));
        assert!(!applies(&rec, date(2025, 6, 24)));
    }

    #[test]
    fn weekly_without_end_date_repeats_forever() {
        let rec = record("a", RepeatSchedule::Weekly, date(2025, 7, 1), None);

        assert!(applies(&rec, date(2025, 12, 30)));
        assert!(applies(&rec, date(2030, 7, 2)));
        assert!(!applies(&rec, date(2025, 12, 31)));
    }

    #[test]
    fn monthly_matches_same_day_of_month() {
        let rec = record(
            "a",
            RepeatSchedule::Monthly,
            date(2025, 1, 15),
            Some(date(2025, 12, 31)),
        );

        assert!(applies(&rec, date(2025, 1, 15)));
        assert!(applies(&rec, date(2025, 2, 15)));
        assert!(applies(&rec, date(2025, 12, 15)));
        assert!(!applies(&rec, date(2025, 2, 14)));
        assert!(!applies(&rec, date(2025, 3, 16)));
    }

    #[test]
    fn monthly_skips_months_lacking_the_day() {
        let rec = record("a", RepeatSchedule::Monthly, date(2025, 1, 31), None);

        assert!(applies(&rec, date(2025, 1, 31)));
        assert!(applies(&rec, date(2025, 3, 31)));
        assert!(applies(&rec, date(2025, 5, 31)));
        // February and April have no 31st; nothing is clamped to the 28th/30th.
        assert!(!applies(&rec, date(2025, 2, 28)));
        assert!(!applies(&rec, date(2025, 4, 30)));
    }

    #[test]
    fn nothing_applies_before_the_start_date() {
        for repeat in [
            RepeatSchedule::Once,
            RepeatSchedule::Weekly,
            RepeatSchedule::Monthly,
        ] {
            let rec = record("a", repeat, date(2025, 7, 10), None);
            assert!(!applies(&rec, date(2025, 7, 3)), "{repeat:?}");
        }
    }

    #[test]
    fn most_recently_updated_record_wins() {
        let mut older = record(
            "older",
            RepeatSchedule::Weekly,
            date(2025, 7, 1),
            Some(date(2025, 7, 31)),
        );
        older.updated_at = Utc.with_ymd_and_hms(2025, 6, 1, 8, 0, 0).unwrap();

        let mut newer = record("newer", RepeatSchedule::Once, date(2025, 7, 8), None);
        newer.end_date = Some(date(2025, 7, 8));
        newer.updated_at = Utc.with_ymd_and_hms(2025, 6, 2, 8, 0, 0).unwrap();

        let records = vec![older, newer];

        // Both apply on 07-08; the later update wins.
        let winner = pick_applicable(&records, date(2025, 7, 8)).unwrap();
        assert_eq!(winner.id, "newer");

        // Only the weekly record applies on 07-15.
        let winner = pick_applicable(&records, date(2025, 7, 15)).unwrap();
        assert_eq!(winner.id, "older");

        assert!(pick_applicable(&records, date(2025, 7, 9)).is_none());
    }

    #[test]
    fn equal_update_times_break_ties_deterministically() {
        let a = record("aaa", RepeatSchedule::Weekly, date(2025, 7, 1), None);
        let b = record("bbb", RepeatSchedule::Weekly, date(2025, 7, 1), None);
        let records = vec![a, b];

        let first = pick_applicable(&records, date(2025, 7, 8)).unwrap().id.clone();
        let second = pick_applicable(&records, date(2025, 7, 8)).unwrap().id.clone();
        assert_eq!(first, second);
        assert_eq!(first, "bbb");
    }
}
