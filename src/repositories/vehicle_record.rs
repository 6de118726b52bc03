//! Registro de la tabla `vehicles`
//!
//! Forma de almacenamiento del vehículo: tipos y combustible como texto.
//! La conversión a dominio vuelve a pasar por las validaciones del modelo.

use sqlx::FromRow;

use crate::models::{
    error::DomainResult,
    vehicle::{FuelType, Vehicle, VehicleType},
    vehicle_id::VehicleId,
    vin::Vin,
};

/// Columnas en el orden de los SELECT / RETURNING del adaptador
pub const VEHICLE_COLUMNS: &str =
    "id, vin, type, make, model, model_year, fuel_type, color, registration_number";

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct VehicleRecord {
    pub id: i64,
    pub vin: String,
    #[sqlx(rename = "type")]
    pub vehicle_type: String,
    pub make: String,
    pub model: String,
    pub model_year: i32,
    pub fuel_type: String,
    pub color: Option<String>,
    pub registration_number: Option<String>,
}

impl VehicleRecord {
    pub fn into_domain(self) -> DomainResult<Vehicle> {
        Vehicle::new(
            VehicleId::new(self.id)?,
            Vin::new(&self.vin)?,
            self.vehicle_type.parse::<VehicleType>()?,
            &self.make,
            &self.model,
            self.model_year,
            self.fuel_type.parse::<FuelType>()?,
            self.color.as_deref(),
            self.registration_number.as_deref(),
        )
    }
}

impl From<&Vehicle> for VehicleRecord {
    fn from(vehicle: &Vehicle) -> Self {
        Self {
            id: vehicle.id().value(),
            vin: vehicle.vin().value().to_string(),
            vehicle_type: vehicle.vehicle_type().as_str().to_string(),
            make: vehicle.make().to_string(),
            model: vehicle.model().to_string(),
            model_year: vehicle.model_year(),
            fuel_type: vehicle.fuel_type().as_str().to_string(),
            color: vehicle.color().map(str::to_string),
            registration_number: vehicle.registration_number().map(str::to_string),
        }
    }
}
