//! Availability service: validation, CRUD orchestration, and the day/month
//! view queries built on the recurrence resolver and calendar projection.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tracing::info;
use uuid::Uuid;

use crate::domain::calendar::{self, MonthView, ProjectedDay};
use crate::domain::commands::availability::{QuickUpdateCommand, UpsertAvailabilityCommand};
use crate::domain::models::availability::{
    AvailabilityError, AvailabilityRecord, RepeatSchedule,
};
use crate::domain::models::user::User;
use crate::domain::recurrence;
use crate::storage::traits::AvailabilityStore;

/// Supported year range for month views.
const MIN_YEAR: i32 = 1;
const MAX_YEAR: i32 = 9999;

#[derive(Clone)]
pub struct AvailabilityService {
    store: Arc<dyn AvailabilityStore>,
}

impl AvailabilityService {
    pub fn new(store: Arc<dyn AvailabilityStore>) -> Self {
        Self { store }
    }

    /// Create a new availability record for `owner`.
    pub async fn create(
        &self,
        owner: &User,
        command: UpsertAvailabilityCommand,
    ) -> Result<AvailabilityRecord, AvailabilityError> {
        let (start_date, end_date) = Self::validated_range(&command)?;

        let now = Utc::now();
        let record = AvailabilityRecord {
            id: Uuid::new_v4().to_string(),
            owner_id: owner.id.clone(),
            slots: command.slots,
            repeat_schedule: command.repeat_schedule,
            start_date,
            end_date,
            notes: command.notes,
            created_at: now,
            updated_at: now,
        };

        self.store.insert(&record).await?;
        info!("Created availability {} for user {}", record.id, owner.id);
        Ok(record)
    }

    /// Replace an existing record owned by `owner` in full.
    ///
    /// Unlike quick-update this never guesses which record to replace: the
    /// caller names it by id, and an id that is absent or owned by someone
    /// else is the same `NotFound`.
    pub async fn update(
        &self,
        owner: &User,
        id: &str,
        command: UpsertAvailabilityCommand,
    ) -> Result<AvailabilityRecord, AvailabilityError> {
        let existing = self
            .store
            .get(&owner.id, id)
            .await?
            .ok_or(AvailabilityError::NotFound)?;

        let (start_date, end_date) = Self::validated_range(&command)?;

        let record = AvailabilityRecord {
            id: existing.id,
            owner_id: existing.owner_id,
            slots: command.slots,
            repeat_schedule: command.repeat_schedule,
            start_date,
            end_date,
            notes: command.notes,
            created_at: existing.created_at,
            updated_at: Utc::now(),
        };

        if !self.store.update(&record).await? {
            return Err(AvailabilityError::NotFound);
        }
        info!("Updated availability {} for user {}", record.id, owner.id);
        Ok(record)
    }

    /// All records of `owner`, most recently created first.
    pub async fn list_for_owner(
        &self,
        owner: &User,
    ) -> Result<Vec<AvailabilityRecord>, AvailabilityError> {
        Ok(self.store.list_for_owner(&owner.id).await?)
    }

    /// Project a single date through the recurrence resolver.
    pub async fn day_view(
        &self,
        owner: &User,
        date: &str,
    ) -> Result<ProjectedDay, AvailabilityError> {
        let date = Self::parse_date("date", date)?;
        let candidates = self.store.candidates_through(&owner.id, date).await?;
        let winner = recurrence::pick_applicable(&candidates, date);
        Ok(calendar::project_day(winner, date))
    }

    /// Project every date of a month. Fails before touching the store when
    /// year or month is out of range; never returns a partial month.
    pub async fn month_view(
        &self,
        owner: &User,
        year: i32,
        month: u32,
    ) -> Result<MonthView, AvailabilityError> {
        if !(1..=12).contains(&month) {
            return Err(AvailabilityError::InvalidMonth(month));
        }
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(AvailabilityError::InvalidYear(year));
        }

        let dates = calendar::month_dates(year, month);
        let last_day = match dates.last() {
            Some(date) => *date,
            None => return Err(AvailabilityError::InvalidMonth(month)),
        };

        // One candidate fetch covers the whole month; recurrence is
        // resolved per date below.
        let candidates = self.store.candidates_through(&owner.id, last_day).await?;

        let days = dates
            .into_iter()
            .map(|date| {
                let winner = recurrence::pick_applicable(&candidates, date);
                calendar::project_day(winner, date)
            })
            .collect();

        Ok(MonthView {
            year,
            month,
            owner: owner.clone(),
            days,
        })
    }

    /// Create-or-replace the owner's single-day declaration for a date.
    ///
    /// This is the only path allowed to silently overwrite prior state for
    /// an (owner, date) pair.
    pub async fn quick_update(
        &self,
        owner: &User,
        command: QuickUpdateCommand,
    ) -> Result<AvailabilityRecord, AvailabilityError> {
        let date = Self::parse_date("date", &command.date)?;
        let now = Utc::now();

        if let Some(mut existing) = self.store.find_single_day(&owner.id, date).await? {
            existing.slots = command.slots;
            existing.notes = command.notes;
            existing.end_date = Some(date);
            existing.updated_at = now;
            if !self.store.update(&existing).await? {
                return Err(AvailabilityError::Storage(anyhow::anyhow!(
                    "availability {} disappeared during quick-update",
                    existing.id
                )));
            }
            info!(
                "Quick-update replaced availability {} for user {} on {}",
                existing.id, owner.id, date
            );
            return Ok(existing);
        }

        let record = AvailabilityRecord {
            id: Uuid::new_v4().to_string(),
            owner_id: owner.id.clone(),
            slots: command.slots,
            repeat_schedule: RepeatSchedule::Once,
            start_date: date,
            end_date: Some(date),
            notes: command.notes,
            created_at: now,
            updated_at: now,
        };
        self.store.insert(&record).await?;
        info!(
            "Quick-update created availability {} for user {} on {}",
            record.id, owner.id, date
        );
        Ok(record)
    }

    fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, AvailabilityError> {
        NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
            AvailabilityError::validation(field, "Invalid date format. Use YYYY-MM-DD")
        })
    }

    fn validated_range(
        command: &UpsertAvailabilityCommand,
    ) -> Result<(NaiveDate, Option<NaiveDate>), AvailabilityError> {
        let start = Self::parse_date("start_date", &command.start_date)?;
        let end = command
            .end_date
            .as_deref()
            .map(|value| Self::parse_date("end_date", value))
            .transpose()?;

        if let Some(end) = end {
            if end < start {
                return Err(AvailabilityError::validation(
                    "end_date",
                    "end_date must be on or after start_date",
                ));
            }
            if command.repeat_schedule == RepeatSchedule::Once && end != start {
                return Err(AvailabilityError::validation(
                    "end_date",
                    "end_date must equal start_date when repeat_schedule is once",
                ));
            }
        }

        // `once` rows are always stored with end_date == start_date, so the
        // single-day lookup matches however the caller spelled the range.
        let end = match command.repeat_schedule {
            RepeatSchedule::Once => Some(start),
            _ => end,
        };

        Ok((start, end))
    }
}
