//! # SQLite Storage Module
//!
//! SQLite-backed implementations of the storage traits.
//!
//! ## Components
//!
//! - **db.rs** - database connection and schema management
//! - **repositories/** - repository implementations of the storage traits

pub mod db;
pub mod repositories;

// Re-export the main types for external use
pub use db::DbConnection;
pub use repositories::{
    AvailabilityRepository as SqliteAvailabilityRepository,
    UserRepository as SqliteUserRepository,
};
