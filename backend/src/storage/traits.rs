//! # Storage Traits
//!
//! Storage abstraction for the domain layer: services talk to these traits
//! and never to a concrete database. The SQLite implementation lives in
//! `storage::sqlite`; tests may substitute anything else that satisfies the
//! contracts.

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::models::availability::AvailabilityRecord;
use crate::domain::models::user::User;

/// Persistence contract for availability records.
///
/// Every operation is scoped by owner; no call can observe or modify another
/// owner's records. Create and update must be atomic per record (no partial
/// writes visible), which the SQLite backend gets from statement-level
/// atomicity.
#[async_trait]
pub trait AvailabilityStore: Send + Sync {
    /// Persist a new record.
    async fn insert(&self, record: &AvailabilityRecord) -> Result<()>;

    /// Replace a stored record in full, matching on (owner, id).
    /// Returns false when no such record exists.
    async fn update(&self, record: &AvailabilityRecord) -> Result<bool>;

    /// Fetch one record by id, scoped to its owner.
    async fn get(&self, owner_id: &str, id: &str) -> Result<Option<AvailabilityRecord>>;

    /// All records of one owner, most recently created first.
    async fn list_for_owner(&self, owner_id: &str) -> Result<Vec<AvailabilityRecord>>;

    /// Records of one owner with `start_date <= through`, the candidate
    /// pre-filter for day and month views. Recurrence is resolved by the
    /// caller.
    async fn candidates_through(
        &self,
        owner_id: &str,
        through: NaiveDate,
    ) -> Result<Vec<AvailabilityRecord>>;

    /// The owner's single-day (`once`) record for `date`, most recently
    /// updated first if historical duplicates exist.
    async fn find_single_day(
        &self,
        owner_id: &str,
        date: NaiveDate,
    ) -> Result<Option<AvailabilityRecord>>;
}

/// Lookup contract for the identity collaborator.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Resolve a bearer token to its user, if the token is known.
    async fn find_by_token(&self, token: &str) -> Result<Option<User>>;

    /// Provision a user with an API token. Used by out-of-band setup and
    /// tests; there is no self-service signup surface.
    async fn insert_user(&self, user: &User, token: &str) -> Result<()>;
}
