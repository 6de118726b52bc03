//! Repositorios
//!
//! Puerto de persistencia de vehículos y sus adaptadores (PostgreSQL y memoria).

pub mod memory_vehicle_repository;
pub mod pg_vehicle_repository;
pub mod vehicle_filter;
pub mod vehicle_record;
pub mod vehicle_repository;

pub use memory_vehicle_repository::InMemoryVehicleRepository;
pub use pg_vehicle_repository::PgVehicleRepository;
pub use vehicle_filter::{VehiclePredicate, VehicleSearch};
pub use vehicle_repository::VehicleRepository;
