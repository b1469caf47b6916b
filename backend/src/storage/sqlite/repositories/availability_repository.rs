use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use crate::domain::models::availability::{
    AvailabilityRecord, AvailabilityStatus, RepeatSchedule, SlotGrid, SlotSetting,
};
use crate::storage::sqlite::db::DbConnection;
use crate::storage::traits::AvailabilityStore;

/// Repository for availability record operations
#[derive(Clone)]
pub struct AvailabilityRepository {
    db: DbConnection,
}

impl AvailabilityRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }
}

/// Fixed-width RFC 3339 so lexicographic string order in SQL matches
/// chronological order.
fn encode_timestamp(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn decode_timestamp(value: &str) -> Result<DateTime<Utc>> {
    Ok(DateTime::parse_from_rfc3339(value)
        .map_err(|e| anyhow!("Invalid stored timestamp '{}': {}", value, e))?
        .with_timezone(&Utc))
}

fn decode_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| anyhow!("Invalid stored date '{}': {}", value, e))
}

fn decode_status(value: &str) -> Result<AvailabilityStatus> {
    AvailabilityStatus::parse(value)
        .ok_or_else(|| anyhow!("Invalid stored availability status '{}'", value))
}

fn slot_setting(row: &SqliteRow, available_col: &str, status_col: &str) -> Result<SlotSetting> {
    let status: String = row.get(status_col);
    Ok(SlotSetting {
        available: row.get(available_col),
        status: decode_status(&status)?,
    })
}

fn record_from_row(row: &SqliteRow) -> Result<AvailabilityRecord> {
    let repeat: String = row.get("repeat_schedule");
    let start_date: String = row.get("start_date");
    let end_date: Option<String> = row.get("end_date");
    let created_at: String = row.get("created_at");
    let updated_at: String = row.get("updated_at");

    Ok(AvailabilityRecord {
        id: row.get("id"),
        owner_id: row.get("user_id"),
        slots: SlotGrid {
            morning: slot_setting(row, "morning_available", "morning_status")?,
            afternoon: slot_setting(row, "afternoon_available", "afternoon_status")?,
            evening: slot_setting(row, "evening_available", "evening_status")?,
            night: slot_setting(row, "night_available", "night_status")?,
        },
        repeat_schedule: RepeatSchedule::parse(&repeat)
            .ok_or_else(|| anyhow!("Invalid stored repeat schedule '{}'", repeat))?,
        start_date: decode_date(&start_date)?,
        end_date: end_date.as_deref().map(decode_date).transpose()?,
        notes: row.get("notes"),
        created_at: decode_timestamp(&created_at)?,
        updated_at: decode_timestamp(&updated_at)?,
    })
}

const RECORD_COLUMNS: &str = r#"
    id, user_id,
    morning_available, morning_status,
    afternoon_available, afternoon_status,
    evening_available, evening_status,
    night_available, night_status,
    repeat_schedule, start_date, end_date, notes,
    created_at, updated_at
"#;

#[async_trait]
impl AvailabilityStore for AvailabilityRepository {
    async fn insert(&self, record: &AvailabilityRecord) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO availabilities (
                id, user_id,
                morning_available, morning_status,
                afternoon_available, afternoon_status,
                evening_available, evening_status,
                night_available, night_status,
                repeat_schedule, start_date, end_date, notes,
                created_at, updated_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&record.id)
        .bind(&record.owner_id)
        .bind(record.slots.morning.available)
        .bind(record.slots.morning.status.as_str())
        .bind(record.slots.afternoon.available)
        .bind(record.slots.afternoon.status.as_str())
        .bind(record.slots.evening.available)
        .bind(record.slots.evening.status.as_str())
        .bind(record.slots.night.available)
        .bind(record.slots.night.status.as_str())
        .bind(record.repeat_schedule.as_str())
        .bind(record.start_date.to_string())
        .bind(record.end_date.map(|d| d.to_string()))
        .bind(&record.notes)
        .bind(encode_timestamp(record.created_at))
        .bind(encode_timestamp(record.updated_at))
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    async fn update(&self, record: &AvailabilityRecord) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE availabilities
            SET morning_available = ?, morning_status = ?,
                afternoon_available = ?, afternoon_status = ?,
                evening_available = ?, evening_status = ?,
                night_available = ?, night_status = ?,
                repeat_schedule = ?, start_date = ?, end_date = ?, notes = ?,
                updated_at = ?
            WHERE id = ? AND user_id = ?
            "#,
        )
        .bind(record.slots.morning.available)
        .bind(record.slots.morning.status.as_str())
        .bind(record.slots.afternoon.available)
        .bind(record.slots.afternoon.status.as_str())
        .bind(record.slots.evening.available)
        .bind(record.slots.evening.status.as_str())
        .bind(record.slots.night.available)
        .bind(record.slots.night.status.as_str())
        .bind(record.repeat_schedule.as_str())
        .bind(record.start_date.to_string())
        .bind(record.end_date.map(|d| d.to_string()))
        .bind(&record.notes)
        .bind(encode_timestamp(record.updated_at))
        .bind(&record.id)
        .bind(&record.owner_id)
        .execute(self.db.pool())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn get(&self, owner_id: &str, id: &str) -> Result<Option<AvailabilityRecord>> {
        let row = sqlx::query(&format!(
            "SELECT {RECORD_COLUMNS} FROM availabilities WHERE user_id = ? AND id = ?"
        ))
        .bind(owner_id)
        .bind(id)
        .fetch_optional(self.db.pool())
        .await?;

        match row {
            Some(r) => Ok(Some(record_from_row(&r)?)),
            None => Ok(None),
        }
    }

    async fn list_for_owner(&self, owner_id: &str) -> Result<Vec<AvailabilityRecord>> {
        let rows = sqlx::query(&format!(
            r#"
            SELECT {RECORD_COLUMNS} FROM availabilities
            WHERE user_id = ?
            ORDER BY created_at DESC, id DESC
            "#
        ))
        .bind(owner_id)
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(record_from_row).collect()
    }

    async fn candidates_through(
        &self,
        owner_id: &str,
        through: NaiveDate,
    ) -> Result<Vec<AvailabilityRecord>> {
        let rows = sqlx::query(&format!(
            r#"
            SELECT {RECORD_COLUMNS} FROM availabilities
            WHERE user_id = ? AND start_date <= ?
            ORDER BY start_date ASC, id ASC
            "#
        ))
        .bind(owner_id)
        .bind(through.to_string())
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(record_from_row).collect()
    }

    async fn find_single_day(
        &self,
        owner_id: &str,
        date: NaiveDate,
    ) -> Result<Option<AvailabilityRecord>> {
        let row = sqlx::query(&format!(
            r#"
            SELECT {RECORD_COLUMNS} FROM availabilities
            WHERE user_id = ?
              AND repeat_schedule = 'once'
              AND start_date = ?
              AND end_date = ?
            ORDER BY updated_at DESC, id DESC
            LIMIT 1
            "#
        ))
        .bind(owner_id)
        .bind(date.to_string())
        .bind(date.to_string())
        .fetch_optional(self.db.pool())
        .await?;

        match row {
            Some(r) => Ok(Some(record_from_row(&r)?)),
            None => Ok(None),
        }
    }
}
