//! # Storage Module
//!
//! Data persistence for the availability backend.
//!
//! The domain layer depends only on the traits defined here; the SQLite
//! implementation can be swapped without touching services or the REST
//! layer.

pub mod sqlite;
pub mod traits;
