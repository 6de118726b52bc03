//! Modelo de Vehicle
//!
//! Agregado raíz inmutable: se valida al construirse y no tiene setters.
//! Cualquier cambio pasa por el flujo de update, que persiste un reemplazo
//! completo bajo el mismo id.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::{DomainError, DomainResult};
use super::vehicle_id::VehicleId;
use super::vin::Vin;

/// Año del primer automóvil
pub const MIN_MODEL_YEAR: i32 = 1886;

/// Tipo de vehículo - se guarda como texto con el nombre en mayúsculas
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum VehicleType {
    Car,
    Motorcycle,
    Truck,
    Van,
    Bus,
    Other,
}

impl VehicleType {
    pub const ALL: [VehicleType; 6] = [
        VehicleType::Car,
        VehicleType::Motorcycle,
        VehicleType::Truck,
        VehicleType::Van,
        VehicleType::Bus,
        VehicleType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleType::Car => "CAR",
            VehicleType::Motorcycle => "MOTORCYCLE",
            VehicleType::Truck => "TRUCK",
            VehicleType::Van => "VAN",
            VehicleType::Bus => "BUS",
            VehicleType::Other => "OTHER",
        }
    }
}

impl FromStr for VehicleType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VehicleType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| DomainError::invalid("type", format!("unknown vehicle type '{}'", s)))
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tipo de combustible / energía
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum FuelType {
    Petrol,
    Diesel,
    Electric,
    Hybrid,
    Lpg,
    Other,
}

impl FuelType {
    pub const ALL: [FuelType; 6] = [
        FuelType::Petrol,
        FuelType::Diesel,
        FuelType::Electric,
        FuelType::Hybrid,
        FuelType::Lpg,
        FuelType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FuelType::Petrol => "PETROL",
            FuelType::Diesel => "DIESEL",
            FuelType::Electric => "ELECTRIC",
            FuelType::Hybrid => "HYBRID",
            FuelType::Lpg => "LPG",
            FuelType::Other => "OTHER",
        }
    }
}

impl FromStr for FuelType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FuelType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| DomainError::invalid("fuelType", format!("unknown fuel type '{}'", s)))
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Atributos validados de un vehículo, sin identidad.
///
/// Es lo que se entrega al repositorio en create/update: el id lo asigna
/// el almacenamiento o lo aporta la ruta.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleAttributes {
    vin: Vin,
    vehicle_type: VehicleType,
    make: String,
    model: String,
    model_year: i32,
    fuel_type: FuelType,
    color: Option<String>,
    registration_number: Option<String>,
}

impl VehicleAttributes {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        vin: Vin,
        vehicle_type: VehicleType,
        make: &str,
        model: &str,
        model_year: i32,
        fuel_type: FuelType,
        color: Option<&str>,
        registration_number: Option<&str>,
    ) -> DomainResult<Self> {
        let make = required_text("make", make)?;
        let model = required_text("model", model)?;
        if model_year < MIN_MODEL_YEAR {
            return Err(DomainError::invalid(
                "modelYear",
                format!("model year must be >= {}", MIN_MODEL_YEAR),
            ));
        }

        Ok(Self {
            vin,
            vehicle_type,
            make,
            model,
            model_year,
            fuel_type,
            color: optional_text(color),
            registration_number: optional_text(registration_number).map(|r| r.to_uppercase()),
        })
    }

    pub fn vin(&self) -> &Vin {
        &self.vin
    }

    pub fn vehicle_type(&self) -> VehicleType {
        self.vehicle_type
    }

    pub fn make(&self) -> &str {
        &self.make
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn model_year(&self) -> i32 {
        self.model_year
    }

    pub fn fuel_type(&self) -> FuelType {
        self.fuel_type
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    pub fn registration_number(&self) -> Option<&str> {
        self.registration_number.as_deref()
    }
}

/// Vehicle principal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vehicle {
    id: VehicleId,
    attributes: VehicleAttributes,
}

impl Vehicle {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: VehicleId,
        vin: Vin,
        vehicle_type: VehicleType,
        make: &str,
        model: &str,
        model_year: i32,
        fuel_type: FuelType,
        color: Option<&str>,
        registration_number: Option<&str>,
    ) -> DomainResult<Self> {
        let attributes = VehicleAttributes::new(
            vin,
            vehicle_type,
            make,
            model,
            model_year,
            fuel_type,
            color,
            registration_number,
        )?;
        Ok(Self::from_parts(id, attributes))
    }

    pub fn from_parts(id: VehicleId, attributes: VehicleAttributes) -> Self {
        Self { id, attributes }
    }

    pub fn id(&self) -> VehicleId {
        self.id
    }

    pub fn attributes(&self) -> &VehicleAttributes {
        &self.attributes
    }

    pub fn vin(&self) -> &Vin {
        self.attributes.vin()
    }

    pub fn vehicle_type(&self) -> VehicleType {
        self.attributes.vehicle_type()
    }

    pub fn make(&self) -> &str {
        self.attributes.make()
    }

    pub fn model(&self) -> &str {
        self.attributes.model()
    }

    pub fn model_year(&self) -> i32 {
        self.attributes.model_year()
    }

    pub fn fuel_type(&self) -> FuelType {
        self.attributes.fuel_type()
    }

    pub fn color(&self) -> Option<&str> {
        self.attributes.color()
    }

    pub fn registration_number(&self) -> Option<&str> {
        self.attributes.registration_number()
    }
}

fn required_text(field: &'static str, value: &str) -> DomainResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::invalid(field, format!("{} is required", field)));
    }
    Ok(trimmed.to_string())
}

fn optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
