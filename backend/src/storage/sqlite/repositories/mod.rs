// Repository modules
pub mod availability_repository;
pub mod user_repository;

// Re-export repository types
pub use availability_repository::AvailabilityRepository;
pub use user_repository::UserRepository;
