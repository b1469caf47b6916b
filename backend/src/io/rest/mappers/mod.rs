pub mod availability_mapper;

pub use availability_mapper::AvailabilityMapper;
