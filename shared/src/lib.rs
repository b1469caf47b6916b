use serde::{Deserialize, Serialize};

/// The four fixed daily time slots. The set is closed; nothing may add or
/// remove a slot at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeSlot {
    Morning,
    Afternoon,
    Evening,
    Night,
}

/// Availability state of a single slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvailabilityStatus {
    Available,
    Maybe,
    Busy,
}

impl Default for AvailabilityStatus {
    fn default() -> Self {
        AvailabilityStatus::Available
    }
}

/// How an availability declaration repeats over its date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatSchedule {
    Once,
    Weekly,
    Monthly,
}

impl Default for RepeatSchedule {
    fn default() -> Self {
        RepeatSchedule::Once
    }
}

/// One slot as it appears in day and month views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSlotView {
    /// Display label from the slot catalog ("Morning", ...)
    pub name: String,
    /// Clock range from the slot catalog ("8:00-12:00", ...)
    pub time: String,
    #[serde(rename = "type")]
    pub slot_type: TimeSlot,
    pub available: bool,
    pub status: AvailabilityStatus,
    pub status_display: String,
}

/// One slot entry in the `all_time_slots_with_status` map of a serialized
/// record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotStatusEntry {
    pub name: String,
    pub time: String,
    pub available: bool,
    pub status: AvailabilityStatus,
    pub status_display: String,
}

/// Fixed-size slot map keyed by slot name. A struct rather than a generic
/// map so the four keys always serialize in catalog order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllTimeSlots {
    pub morning: SlotStatusEntry,
    pub afternoon: SlotStatusEntry,
    pub evening: SlotStatusEntry,
    pub night: SlotStatusEntry,
}

/// A fully serialized availability record, including the derived slot views
/// and display fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Availability {
    pub id: String,

    pub morning_available: bool,
    pub morning_status: AvailabilityStatus,
    pub morning_status_display: String,

    pub afternoon_available: bool,
    pub afternoon_status: AvailabilityStatus,
    pub afternoon_status_display: String,

    pub evening_available: bool,
    pub evening_status: AvailabilityStatus,
    pub evening_status_display: String,

    pub night_available: bool,
    pub night_status: AvailabilityStatus,
    pub night_status_display: String,

    /// Only the slots declared available, in catalog order.
    pub available_time_slots: Vec<TimeSlotView>,
    /// All four slots with their individual availability and status.
    pub all_time_slots_with_status: AllTimeSlots,

    pub repeat_schedule: RepeatSchedule,
    pub repeat_schedule_display: String,

    /// Calendar date, `YYYY-MM-DD`.
    pub start_date: String,
    /// Calendar date, `YYYY-MM-DD`. Absent means single-day for `once` and
    /// unbounded repetition for `weekly`/`monthly`.
    pub end_date: Option<String>,

    pub notes: Option<String>,
    pub user_name: String,

    /// RFC 3339 timestamp with UTC designator, maintained by the backend.
    pub created_at: String,
    /// RFC 3339 timestamp with UTC designator, maintained by the backend.
    pub updated_at: String,
}

/// Request body for `POST /availability`.
///
/// Slot fields default to disabled/"available" like the original form; the
/// owner is always the authenticated caller and is never part of the body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateAvailabilityRequest {
    #[serde(default)]
    pub morning_available: bool,
    #[serde(default)]
    pub morning_status: AvailabilityStatus,

    #[serde(default)]
    pub afternoon_available: bool,
    #[serde(default)]
    pub afternoon_status: AvailabilityStatus,

    #[serde(default)]
    pub evening_available: bool,
    #[serde(default)]
    pub evening_status: AvailabilityStatus,

    #[serde(default)]
    pub night_available: bool,
    #[serde(default)]
    pub night_status: AvailabilityStatus,

    #[serde(default)]
    pub repeat_schedule: RepeatSchedule,

    /// Calendar date, `YYYY-MM-DD`.
    pub start_date: String,
    /// Calendar date, `YYYY-MM-DD`.
    #[serde(default)]
    pub end_date: Option<String>,

    #[serde(default)]
    pub notes: Option<String>,
}

/// Request body for `POST /quick-update`: create-or-replace the caller's
/// single-day declaration for `date`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickUpdateRequest {
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,

    #[serde(default)]
    pub morning_available: bool,
    #[serde(default)]
    pub morning_status: AvailabilityStatus,

    #[serde(default)]
    pub afternoon_available: bool,
    #[serde(default)]
    pub afternoon_status: AvailabilityStatus,

    #[serde(default)]
    pub evening_available: bool,
    #[serde(default)]
    pub evening_status: AvailabilityStatus,

    #[serde(default)]
    pub night_available: bool,
    #[serde(default)]
    pub night_status: AvailabilityStatus,

    #[serde(default)]
    pub notes: Option<String>,
}

/// Projected availability for a single calendar date. Always carries exactly
/// four slot entries in catalog order, even when no record applies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayAvailability {
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
    /// Day of month, 1-31.
    pub day: u32,
    pub time_slots: Vec<TimeSlotView>,
    pub notes: Option<String>,
    /// Id of the record the slots were projected from, if any applied.
    pub availability_id: Option<String>,
    /// Slots that are both enabled and have status "available".
    pub total_available_slots: usize,
}

/// The owner a view was computed for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub name: String,
}

/// Day-by-day availability for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthAvailability {
    pub year: i32,
    pub month: u32,
    pub user: UserInfo,
    /// One entry per calendar date, ascending (28-31 entries).
    pub days: Vec<DayAvailability>,
}

/// Error payload returned by all 4xx responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    /// Set for validation errors that concern a single field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            field: None,
        }
    }

    pub fn for_field(field: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            field: Some(field.into()),
        }
    }
}
