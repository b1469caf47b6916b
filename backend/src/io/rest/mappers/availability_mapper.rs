use chrono::{Datelike, SecondsFormat};

use crate::domain::calendar::{MonthView, ProjectedDay};
use crate::domain::commands::availability::{QuickUpdateCommand, UpsertAvailabilityCommand};
use crate::domain::models::availability::{
    AvailabilityRecord, AvailabilityStatus as DomainStatus,
    RepeatSchedule as DomainRepeat, SlotGrid, SlotSetting, TimeSlot,
};
use crate::domain::models::user::User;
use shared::{
    AllTimeSlots, Availability, AvailabilityStatus as SharedStatus, CreateAvailabilityRequest,
    DayAvailability, MonthAvailability, QuickUpdateRequest,
    RepeatSchedule as SharedRepeat, SlotStatusEntry, TimeSlot as SharedTimeSlot, TimeSlotView,
    UserInfo,
};

pub struct AvailabilityMapper;

impl AvailabilityMapper {
    pub fn to_upsert_command(request: CreateAvailabilityRequest) -> UpsertAvailabilityCommand {
        UpsertAvailabilityCommand {
            slots: SlotGrid {
                morning: SlotSetting {
                    available: request.morning_available,
                    status: Self::to_domain_status(request.morning_status),
                },
                afternoon: SlotSetting {
                    available: request.afternoon_available,
                    status: Self::to_domain_status(request.afternoon_status),
                },
                evening: SlotSetting {
                    available: request.evening_available,
                    status: Self::to_domain_status(request.evening_status),
                },
                night: SlotSetting {
                    available: request.night_available,
                    status: Self::to_domain_status(request.night_status),
                },
            },
            repeat_schedule: Self::to_domain_repeat(request.repeat_schedule),
            start_date: request.start_date,
            end_date: request.end_date,
            notes: request.notes,
        }
    }

    pub fn to_quick_update_command(request: QuickUpdateRequest) -> QuickUpdateCommand {
        QuickUpdateCommand {
            date: request.date,
            slots: SlotGrid {
                morning: SlotSetting {
                    available: request.morning_available,
                    status: Self::to_domain_status(request.morning_status),
                },
                afternoon: SlotSetting {
                    available: request.afternoon_available,
                    status: Self::to_domain_status(request.afternoon_status),
                },
                evening: SlotSetting {
                    available: request.evening_available,
                    status: Self::to_domain_status(request.evening_status),
                },
                night: SlotSetting {
                    available: request.night_available,
                    status: Self::to_domain_status(request.night_status),
                },
            },
            notes: request.notes,
        }
    }

    /// Serialize a stored record for the API, deriving the per-slot display
    /// fields and slot views.
    pub fn to_dto(record: AvailabilityRecord, owner: &User) -> Availability {
        let available_time_slots = record
            .slots
            .iter()
            .filter(|(_, setting)| setting.available)
            .map(|(slot, setting)| Self::slot_view(slot, setting))
            .collect();

        let entry = |slot: TimeSlot| -> SlotStatusEntry {
            let setting = record.slots.get(slot);
            SlotStatusEntry {
                name: slot.label().to_string(),
                time: slot.clock_range().to_string(),
                available: setting.available,
                status: Self::to_shared_status(setting.status),
                status_display: setting.status.display().to_string(),
            }
        };
        let all_time_slots_with_status = AllTimeSlots {
            morning: entry(TimeSlot::Morning),
            afternoon: entry(TimeSlot::Afternoon),
            evening: entry(TimeSlot::Evening),
            night: entry(TimeSlot::Night),
        };

        Availability {
            id: record.id,

            morning_available: record.slots.morning.available,
            morning_status: Self::to_shared_status(record.slots.morning.status),
            morning_status_display: record.slots.morning.status.display().to_string(),

            afternoon_available: record.slots.afternoon.available,
            afternoon_status: Self::to_shared_status(record.slots.afternoon.status),
            afternoon_status_display: record.slots.afternoon.status.display().to_string(),

            evening_available: record.slots.evening.available,
            evening_status: Self::to_shared_status(record.slots.evening.status),
            evening_status_display: record.slots.evening.status.display().to_string(),

            night_available: record.slots.night.available,
            night_status: Self::to_shared_status(record.slots.night.status),
            night_status_display: record.slots.night.status.display().to_string(),

            available_time_slots,
            all_time_slots_with_status,

            repeat_schedule: Self::to_shared_repeat(record.repeat_schedule),
            repeat_schedule_display: record.repeat_schedule.display().to_string(),

            start_date: record.start_date.to_string(),
            end_date: record.end_date.map(|d| d.to_string()),

            notes: record.notes,
            user_name: owner.name.clone(),

            created_at: record
                .created_at
                .to_rfc3339_opts(SecondsFormat::Micros, true),
            updated_at: record
                .updated_at
                .to_rfc3339_opts(SecondsFormat::Micros, true),
        }
    }

    pub fn to_day_dto(day: ProjectedDay) -> DayAvailability {
        let total_available_slots = crate::domain::calendar::available_slot_count(&day);
        let time_slots = day
            .slots
            .iter()
            .map(|projected| {
                Self::slot_view(
                    projected.slot,
                    SlotSetting {
                        available: projected.available,
                        status: projected.status,
                    },
                )
            })
            .collect();

        DayAvailability {
            date: day.date.to_string(),
            day: day.date.day(),
            time_slots,
            notes: day.notes,
            availability_id: day.availability_id,
            total_available_slots,
        }
    }

    pub fn to_month_dto(view: MonthView) -> MonthAvailability {
        MonthAvailability {
            year: view.year,
            month: view.month,
            user: UserInfo {
                id: view.owner.id,
                name: view.owner.name,
            },
            days: view.days.into_iter().map(Self::to_day_dto).collect(),
        }
    }

    fn slot_view(slot: TimeSlot, setting: SlotSetting) -> TimeSlotView {
        TimeSlotView {
            name: slot.label().to_string(),
            time: slot.clock_range().to_string(),
            slot_type: Self::to_shared_slot(slot),
            available: setting.available,
            status: Self::to_shared_status(setting.status),
            status_display: setting.status.display().to_string(),
        }
    }

    fn to_domain_status(status: SharedStatus) -> DomainStatus {
        match status {
            SharedStatus::Available => DomainStatus::Available,
            SharedStatus::Maybe => DomainStatus::Maybe,
            SharedStatus::Busy => DomainStatus::Busy,
        }
    }

    fn to_shared_status(status: DomainStatus) -> SharedStatus {
        match status {
            DomainStatus::Available => SharedStatus::Available,
            DomainStatus::Maybe => SharedStatus::Maybe,
            DomainStatus::Busy => SharedStatus::Busy,
        }
    }

    fn to_domain_repeat(repeat: SharedRepeat) -> DomainRepeat {
        match repeat {
            SharedRepeat::Once => DomainRepeat::Once,
            SharedRepeat::Weekly => DomainRepeat::Weekly,
            SharedRepeat::Monthly => DomainRepeat::Monthly,
        }
    }

    fn to_shared_repeat(repeat: DomainRepeat) -> SharedRepeat {
        match repeat {
            DomainRepeat::Once => SharedRepeat::Once,
            DomainRepeat::Weekly => SharedRepeat::Weekly,
            DomainRepeat::Monthly => SharedRepeat::Monthly,
        }
    }

    fn to_shared_slot(slot: TimeSlot) -> SharedTimeSlot {
        match slot {
            TimeSlot::Morning => SharedTimeSlot::Morning,
            TimeSlot::Afternoon => SharedTimeSlot::Afternoon,
            TimeSlot::Evening => SharedTimeSlot::Evening,
            TimeSlot::Night => SharedTimeSlot::Night,
        }
    }
}
