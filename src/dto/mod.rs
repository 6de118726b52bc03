//! DTOs
//!
//! Estructuras de request/response para la API REST.

pub mod vehicle_dto;

pub use vehicle_dto::{VehicleRequest, VehicleResponse, VehicleSearchQuery};
