//! Controllers
//!
//! Traducen entre DTOs HTTP y el servicio de vehículos.

pub mod vehicle_controller;

pub use vehicle_controller::VehicleController;
