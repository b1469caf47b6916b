//! Calendar projection logic.
//!
//! Turns a resolved availability record (or the absence of one) into the
//! slot-by-slot view for a single date, and enumerates the dates of a
//! month for the month aggregation in the availability service.

use chrono::NaiveDate;

use crate::domain::models::availability::{
    AvailabilityRecord, AvailabilityStatus, SlotSetting, TimeSlot,
};
use crate::domain::models::user::User;

/// One slot of a projected day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectedSlot {
    pub slot: TimeSlot,
    pub available: bool,
    pub status: AvailabilityStatus,
}

/// The per-slot view of a single calendar date. Always carries exactly four
/// slots in catalog order, whether or not a record applied.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedDay {
    pub date: NaiveDate,
    pub slots: [ProjectedSlot; 4],
    pub notes: Option<String>,
    /// Id of the originating record, when one applied.
    pub availability_id: Option<String>,
}

/// Day-by-day projection of one calendar month for one owner.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthView {
    pub year: i32,
    pub month: u32,
    pub owner: User,
    pub days: Vec<ProjectedDay>,
}

/// Project one date from the record that governs it.
///
/// With no record the day is a full default object: every slot disabled and
/// busy. Consumers always get four slots, never an absent day.
pub fn project_day(record: Option<&AvailabilityRecord>, date: NaiveDate) -> ProjectedDay {
    let slot_for = |slot: TimeSlot| -> ProjectedSlot {
        let setting = match record {
            Some(record) => record.slots.get(slot),
            None => SlotSetting {
                available: false,
                status: AvailabilityStatus::Busy,
            },
        };
        ProjectedSlot {
            slot,
            available: setting.available,
            status: setting.status,
        }
    };

    ProjectedDay {
        date,
        slots: [
            slot_for(TimeSlot::Morning),
            slot_for(TimeSlot::Afternoon),
            slot_for(TimeSlot::Evening),
            slot_for(TimeSlot::Night),
        ],
        notes: record.and_then(|r| r.notes.clone()),
        availability_id: record.map(|r| r.id.clone()),
    }
}

/// Number of days in a given month and year.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Gregorian leap year rule.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Every calendar date of `(year, month)` in ascending order.
///
/// Callers validate year/month first; out-of-range input yields an empty
/// vector rather than a panic.
pub fn month_dates(year: i32, month: u32) -> Vec<NaiveDate> {
    (1..=days_in_month(year, month))
        .filter_map(|day| NaiveDate::from_ymd_opt(year, month, day))
        .collect()
}

/// Slots counted as available for the view totals: enabled and declared
/// available.
pub fn available_slot_count(day: &ProjectedDay) -> usize {
    day.slots
        .iter()
        .filter(|slot| slot.available && slot.status == AvailabilityStatus::Available)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    use crate::domain::models::availability::{RepeatSchedule, SlotGrid};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_record() -> AvailabilityRecord {
        AvailabilityRecord {
            id: "rec-1".to_string(),
            owner_id: "owner-1".to_string(),
            slots: SlotGrid {
                morning: SlotSetting {
                    available: true,
                    status: AvailabilityStatus::Available,
                },
                afternoon: SlotSetting {
                    available: false,
                    status: AvailabilityStatus::Busy,
                },
                evening: SlotSetting {
                    available: true,
                    status: AvailabilityStatus::Maybe,
                },
                night: SlotSetting {
                    available: false,
                    status: AvailabilityStatus::Busy,
                },
            },
            repeat_schedule: RepeatSchedule::Once,
            start_date: date(2025, 7, 1),
            end_date: Some(date(2025, 7, 1)),
            notes: Some("picnic day".to_string()),
            created_at: Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn default_day_has_four_busy_slots_in_order() {
        let day = project_day(None, date(2025, 7, 9));

        assert_eq!(day.slots.len(), 4);
        let order: Vec<TimeSlot> = day.slots.iter().map(|s| s.slot).collect();
        assert_eq!(order, TimeSlot::ALL.to_vec());

        for slot in &day.slots {
            assert!(!slot.available);
            assert_eq!(slot.status, AvailabilityStatus::Busy);
        }
        assert!(day.notes.is_none());
        assert!(day.availability_id.is_none());
        assert_eq!(available_slot_count(&day), 0);
    }

    #[test]
    fn projected_day_sources_slots_from_the_record() {
        let record = sample_record();
        let day = project_day(Some(&record), date(2025, 7, 1));

        let order: Vec<TimeSlot> = day.slots.iter().map(|s| s.slot).collect();
        assert_eq!(order, TimeSlot::ALL.to_vec());

        assert!(day.slots[0].available);
        assert_eq!(day.slots[0].status, AvailabilityStatus::Available);
        assert!(!day.slots[1].available);
        assert_eq!(day.slots[2].status, AvailabilityStatus::Maybe);

        assert_eq!(day.notes.as_deref(), Some("picnic day"));
        assert_eq!(day.availability_id.as_deref(), Some("rec-1"));
        // Evening is enabled but only "maybe"; morning alone counts.
        assert_eq!(available_slot_count(&day), 1);
    }

    #[test]
    fn days_in_month_handles_leap_years() {
        assert_eq!(days_in_month(2025, 1), 31);
        assert_eq!(days_in_month(2025, 4), 30);
        assert_eq!(days_in_month(2025, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2000));
    }

    #[test]
    fn month_dates_enumerates_every_day_ascending() {
        let dates = month_dates(2025, 7);
        assert_eq!(dates.len(), 31);
        assert_eq!(dates[0], date(2025, 7, 1));
        assert_eq!(dates[30], date(2025, 7, 31));

        let feb = month_dates(2024, 2);
        assert_eq!(feb.len(), 29);
    }
}
