//! Domain model for availability declarations.
//!
//! The slot catalog and the status/repeat vocabularies are fixed tables with
//! no write path; they live here as enum match arms so every lookup goes
//! through one place.

use chrono::{DateTime, NaiveDate, Utc};

/// The four fixed daily time slots, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeSlot {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeSlot {
    /// All slots in display order: Morning, Afternoon, Evening, Night.
    pub const ALL: [TimeSlot; 4] = [
        TimeSlot::Morning,
        TimeSlot::Afternoon,
        TimeSlot::Evening,
        TimeSlot::Night,
    ];

    /// Display label from the slot catalog.
    pub fn label(&self) -> &'static str {
        match self {
            TimeSlot::Morning => "Morning",
            TimeSlot::Afternoon => "Afternoon",
            TimeSlot::Evening => "Evening",
            TimeSlot::Night => "Night",
        }
    }

    /// Clock range from the slot catalog.
    pub fn clock_range(&self) -> &'static str {
        match self {
            TimeSlot::Morning => "8:00-12:00",
            TimeSlot::Afternoon => "12:00-17:00",
            TimeSlot::Evening => "17:00-20:00",
            TimeSlot::Night => "20:00-22:00",
        }
    }
}

/// Availability state of a single slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvailabilityStatus {
    Available,
    Maybe,
    Busy,
}

impl AvailabilityStatus {
    /// Wire/storage value.
    pub fn as_str(&self) -> &'static str {
        match self {
            AvailabilityStatus::Available => "available",
            AvailabilityStatus::Maybe => "maybe",
            AvailabilityStatus::Busy => "busy",
        }
    }

    /// Display label from the status vocabulary.
    pub fn display(&self) -> &'static str {
        match self {
            AvailabilityStatus::Available => "Available",
            AvailabilityStatus::Maybe => "Maybe",
            AvailabilityStatus::Busy => "Busy",
        }
    }

    /// Parse a stored value. Anything outside the vocabulary is an error at
    /// the call site, never coerced.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "available" => Some(AvailabilityStatus::Available),
            "maybe" => Some(AvailabilityStatus::Maybe),
            "busy" => Some(AvailabilityStatus::Busy),
            _ => None,
        }
    }
}

/// How a declaration repeats over its date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepeatSchedule {
    Once,
    Weekly,
    Monthly,
}

impl RepeatSchedule {
    /// Wire/storage value.
    pub fn as_str(&self) -> &'static str {
        match self {
            RepeatSchedule::Once => "once",
            RepeatSchedule::Weekly => "weekly",
            RepeatSchedule::Monthly => "monthly",
        }
    }

    /// Display label, matching the option labels in the declaration form.
    pub fn display(&self) -> &'static str {
        match self {
            RepeatSchedule::Once => "Just this once",
            RepeatSchedule::Weekly => "Repeat weekly",
            RepeatSchedule::Monthly => "Repeat monthly",
        }
    }

    /// Parse a stored value.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "once" => Some(RepeatSchedule::Once),
            "weekly" => Some(RepeatSchedule::Weekly),
            "monthly" => Some(RepeatSchedule::Monthly),
            _ => None,
        }
    }
}

/// Declared state of one slot within a record. `status` stays meaningful
/// even when `available` is false.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotSetting {
    pub available: bool,
    pub status: AvailabilityStatus,
}

/// Fixed-size mapping from slot name to its setting. Exactly the four
/// catalog slots exist; the struct shape enforces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotGrid {
    pub morning: SlotSetting,
    pub afternoon: SlotSetting,
    pub evening: SlotSetting,
    pub night: SlotSetting,
}

impl SlotGrid {
    pub fn get(&self, slot: TimeSlot) -> SlotSetting {
        match slot {
            TimeSlot::Morning => self.morning,
            TimeSlot::Afternoon => self.afternoon,
            TimeSlot::Evening => self.evening,
            TimeSlot::Night => self.night,
        }
    }

    /// Iterate slot settings in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (TimeSlot, SlotSetting)> + '_ {
        TimeSlot::ALL.into_iter().map(|slot| (slot, self.get(slot)))
    }
}

/// A stored availability declaration, owned by exactly one user.
#[derive(Debug, Clone, PartialEq)]
pub struct AvailabilityRecord {
    /// Opaque id, assigned at creation, immutable.
    pub id: String,
    /// Owning user; never changes and never comes from request data.
    pub owner_id: String,
    pub slots: SlotGrid,
    pub repeat_schedule: RepeatSchedule,
    pub start_date: NaiveDate,
    /// `once` rows are stored with `end_date == start_date`; for
    /// `weekly`/`monthly`, None means the repetition is unbounded.
    pub end_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Error taxonomy for availability operations.
#[derive(Debug, thiserror::Error)]
pub enum AvailabilityError {
    /// Caller sent a well-formed request with invalid content. Carries the
    /// offending field for the response payload.
    #[error("{message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// The record does not exist or belongs to another owner; the two cases
    /// are indistinguishable to the caller.
    #[error("Availability not found")]
    NotFound,

    #[error("Month must be between 1 and 12")]
    InvalidMonth(u32),

    #[error("Year must be between 1 and 9999")]
    InvalidYear(i32),

    /// Store-layer failure; surfaced as a generic server fault.
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

impl AvailabilityError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        AvailabilityError::Validation {
            field,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_catalog_is_fixed_and_ordered() {
        let labels: Vec<&str> = TimeSlot::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(labels, vec!["Morning", "Afternoon", "Evening", "Night"]);

        assert_eq!(TimeSlot::Morning.clock_range(), "8:00-12:00");
        assert_eq!(TimeSlot::Afternoon.clock_range(), "12:00-17:00");
        assert_eq!(TimeSlot::Evening.clock_range(), "17:00-20:00");
        assert_eq!(TimeSlot::Night.clock_range(), "20:00-22:00");
    }

    #[test]
    fn status_vocabulary_round_trips() {
        for status in [
            AvailabilityStatus::Available,
            AvailabilityStatus::Maybe,
            AvailabilityStatus::Busy,
        ] {
            assert_eq!(AvailabilityStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(AvailabilityStatus::parse("tentative"), None);
        assert_eq!(AvailabilityStatus::Maybe.display(), "Maybe");
    }

    #[test]
    fn repeat_vocabulary_round_trips() {
        for repeat in [
            RepeatSchedule::Once,
            RepeatSchedule::Weekly,
            RepeatSchedule::Monthly,
        ] {
            assert_eq!(RepeatSchedule::parse(repeat.as_str()), Some(repeat));
        }
        assert_eq!(RepeatSchedule::parse("daily"), None);
        assert_eq!(RepeatSchedule::Weekly.display(), "Repeat weekly");
    }

    #[test]
    fn slot_grid_iterates_in_catalog_order() {
        let grid = SlotGrid {
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
        };

        let order: Vec<TimeSlot> = grid.iter().map(|(slot, _)| slot).collect();
        assert_eq!(order.len(), 4);
        assert_eq!(order, TimeSlot::ALL.to_vec());
        assert_eq!(grid.get(TimeSlot::Evening).status, AvailabilityStatus::Maybe);
    }
}
