//! Domain entities, separate from the wire DTOs in the `shared` crate.

pub mod availability;
pub mod user;
