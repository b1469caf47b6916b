//! # Domain Module
//!
//! Business logic for the availability planner.
//!
//! ## Module Organization
//!
//! - **models**: Core entities, the slot catalog, and the error taxonomy
//! - **commands**: Internal command/query input types used by services
//! - **recurrence**: Which record applies to a date, and who wins overlaps
//! - **calendar**: Day projection and month date enumeration
//! - **availability_service**: Validation and CRUD over availability records
//! - **user_service**: Token authentication and user provisioning
//!
//! Services own all validation and orchestration; they talk to storage
//! through the traits in `crate::storage::traits` and know nothing about
//! HTTP or SQLite.

pub mod availability_service;
pub mod calendar;
pub mod commands;
pub mod models;
pub mod recurrence;
pub mod user_service;

pub use availability_service::AvailabilityService;
pub use user_service::UserService;
