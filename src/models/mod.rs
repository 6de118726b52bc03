//! Modelos del sistema
//!
//! Este módulo contiene el modelo de dominio del vehículo y sus value
//! objects. Todo lo que vive aquí se valida al construirse.

pub mod error;
pub mod vehicle;
pub mod vehicle_id;
pub mod vin;

pub use error::{DomainError, DomainResult};
pub use vehicle::{FuelType, Vehicle, VehicleAttributes, VehicleType};
pub use vehicle_id::VehicleId;
pub use vin::Vin;
