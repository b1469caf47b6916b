//! Domain-level command and query types.
//!
//! These structs are used by services inside the domain layer and are not
//! exposed over the public API. The REST layer maps the public DTOs from the
//! `shared` crate to these internal types; dates stay as strings here so the
//! service can report malformed values as field-level validation errors.

pub mod availability {
    use crate::domain::models::availability::{RepeatSchedule, SlotGrid};

    /// Input for creating or fully replacing an availability record.
    #[derive(Debug, Clone)]
    pub struct UpsertAvailabilityCommand {
        pub slots: SlotGrid,
        pub repeat_schedule: RepeatSchedule,
        /// Calendar date, `YYYY-MM-DD`.
        pub start_date: String,
        /// Calendar date, `YYYY-MM-DD`.
        pub end_date: Option<String>,
        pub notes: Option<String>,
    }

    /// Input for the single-day create-or-replace path.
    #[derive(Debug, Clone)]
    pub struct QuickUpdateCommand {
        /// Calendar date, `YYYY-MM-DD`.
        pub date: String,
        pub slots: SlotGrid,
        pub notes: Option<String>,
    }
}
