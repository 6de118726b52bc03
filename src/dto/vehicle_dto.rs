use std::{fmt, str::FromStr};

use serde::{de, Deserialize, Deserializer, Serialize};
use validator::Validate;

use crate::models::{
    vehicle::{FuelType, Vehicle, VehicleAttributes, VehicleType},
    vin::Vin,
};
use crate::repositories::vehicle_filter::VehicleSearch;
use crate::utils::errors::{AppError, AppResult};
use crate::utils::validation::{
    non_blank, validate_not_blank, validate_registration_number, validate_vin,
};

// Request para crear o reemplazar un vehículo (POST y PUT comparten forma)
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct VehicleRequest {
    #[validate(required(message = "vin is required"), custom = "validate_vin")]
    pub vin: Option<String>,

    #[serde(rename = "type")]
    #[validate(required(message = "type is required"))]
    pub vehicle_type: Option<VehicleType>,

    #[validate(
        required(message = "make is required"),
        length(max = 100, message = "make must be at most 100 characters"),
        custom = "validate_not_blank"
    )]
    pub make: Option<String>,

    #[validate(
        required(message = "model is required"),
        length(max = 100, message = "model must be at most 100 characters"),
        custom = "validate_not_blank"
    )]
    pub model: Option<String>,

    #[serde(rename = "modelYear")]
    #[validate(
        required(message = "modelYear is required"),
        range(min = 1886, message = "modelYear must be >= 1886")
    )]
    pub model_year: Option<i32>,

    #[serde(rename = "fuelType")]
    #[validate(required(message = "fuelType is required"))]
    pub fuel_type: Option<FuelType>,

    #[validate(length(max = 50, message = "color must be at most 50 characters"))]
    pub color: Option<String>,

    #[serde(rename = "registrationNumber")]
    #[validate(
        length(max = 20, message = "registrationNumber must be at most 20 characters"),
        custom = "validate_registration_number"
    )]
    pub registration_number: Option<String>,
}

impl VehicleRequest {
    /// Valida la forma del request y construye los atributos de dominio
    pub fn into_attributes(self) -> AppResult<VehicleAttributes> {
        self.validate()?;

        let vin = Vin::new(&required(self.vin, "vin")?)?;
        let attributes = VehicleAttributes::new(
            vin,
            required(self.vehicle_type, "type")?,
            &required(self.make, "make")?,
            &required(self.model, "model")?,
            required(self.model_year, "modelYear")?,
            required(self.fuel_type, "fuelType")?,
            self.color.as_deref(),
            self.registration_number.as_deref(),
        )?;

        Ok(attributes)
    }
}

fn required<T>(value: Option<T>, field: &str) -> AppResult<T> {
    value.ok_or_else(|| AppError::InvalidArgument {
        field: field.to_string(),
        message: format!("{} is required", field),
    })
}

// Response de vehículo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleResponse {
    pub id: i64,
    pub vin: String,
    #[serde(rename = "type")]
    pub vehicle_type: VehicleType,
    pub make: String,
    pub model: String,
    #[serde(rename = "modelYear")]
    pub model_year: i32,
    #[serde(rename = "fuelType")]
    pub fuel_type: FuelType,
    pub color: Option<String>,
    #[serde(rename = "registrationNumber")]
    pub registration_number: Option<String>,
}

impl From<&Vehicle> for VehicleResponse {
    fn from(vehicle: &Vehicle) -> Self {
        Self {
            id: vehicle.id().value(),
            vin: vehicle.vin().value().to_string(),
            vehicle_type: vehicle.vehicle_type(),
            make: vehicle.make().to_string(),
            model: vehicle.model().to_string(),
            model_year: vehicle.model_year(),
            fuel_type: vehicle.fuel_type(),
            color: vehicle.color().map(str::to_string),
            registration_number: vehicle.registration_number().map(str::to_string),
        }
    }
}

// Filtros de búsqueda en query string
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VehicleSearchQuery {
    pub make: Option<String>,
    pub model: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub year: Option<i32>,
    #[serde(rename = "type", default, deserialize_with = "empty_string_as_none")]
    pub vehicle_type: Option<VehicleType>,
    #[serde(rename = "fuelType", default, deserialize_with = "empty_string_as_none")]
    pub fuel_type: Option<FuelType>,
    pub vin: Option<String>,
    #[serde(rename = "registrationNumber")]
    pub registration_number: Option<String>,
}

/// `?year=` o `?type=` vacíos cuentan como filtro ausente
fn empty_string_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let value = Option::<String>::deserialize(deserializer)?;
    match non_blank(value.as_deref()) {
        None => Ok(None),
        Some(s) => s.trim().parse::<T>().map(Some).map_err(de::Error::custom),
    }
}

impl VehicleSearchQuery {
    /// VIN y matrícula juntos son ambiguos: cada uno es una búsqueda exacta
    pub fn is_ambiguous(&self) -> bool {
        non_blank(self.vin.as_deref()).is_some()
            && non_blank(self.registration_number.as_deref()).is_some()
    }
}

impl From<VehicleSearchQuery> for VehicleSearch {
    fn from(query: VehicleSearchQuery) -> Self {
        Self {
            make: query.make,
            model: query.model,
            model_year: query.year,
            vehicle_type: query.vehicle_type,
            fuel_type: query.fuel_type,
            vin: query.vin,
            registration_number: query.registration_number,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request() -> VehicleRequest {
        serde_json::from_value(json!({
            "vin": "1HGCM82633A004352",
            "type": "CAR",
            "make": "Toyota",
            "model": "Yaris",
            "modelYear": 2022,
            "fuelType": "PETROL",
            "color": "Blue",
            "registrationNumber": "abc123"
        }))
        .unwrap()
    }

    #[test]
    fn test_valid_request_builds_attributes() {
        let attrs = request().into_attributes().unwrap();
        assert_eq!(attrs.vin().value(), "1HGCM82633A004352");
        assert_eq!(attrs.vehicle_type(), VehicleType::Car);
        assert_eq!(attrs.model_year(), 2022);
        assert_eq!(attrs.registration_number(), Some("ABC123"));
    }

    #[test]
    fn test_missing_fields_are_reported_per_field() {
        let err = VehicleRequest::default().into_attributes().unwrap_err();
        match err {
            AppError::Validation(errors) => {
                // vin, type, make, model, modelYear, fuelType
                assert_eq!(errors.field_errors().len(), 6);
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_vin_and_year_fail_validation() {
        let mut req = request();
        req.vin = Some("1HGCM82633A00435I".to_string());
        assert!(matches!(req.into_attributes(), Err(AppError::Validation(_))));

        let mut req = request();
        req.model_year = Some(1885);
        assert!(matches!(req.into_attributes(), Err(AppError::Validation(_))));

        let mut req = request();
        req.make = Some("   ".to_string());
        assert!(matches!(req.into_attributes(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_response_uses_wire_names() {
        let attrs = request().into_attributes().unwrap();
        let id = crate::models::vehicle_id::VehicleId::new(5).unwrap();
        let vehicle = Vehicle::from_parts(id, attrs);
        let body = serde_json::to_value(VehicleResponse::from(&vehicle)).unwrap();
        assert_eq!(body["id"], 5);
        assert_eq!(body["type"], "CAR");
        assert_eq!(body["modelYear"], 2022);
        assert_eq!(body["fuelType"], "PETROL");
        assert_eq!(body["registrationNumber"], "ABC123");
    }

    #[test]
    fn test_search_query_ambiguity() {
        let mut query = VehicleSearchQuery {
            vin: Some("1HGCM82633A004352".to_string()),
            registration_number: Some("ABC123".to_string()),
            ..Default::default()
        };
        assert!(query.is_ambiguous());
        query.registration_number = Some(" ".to_string());
        assert!(!query.is_ambiguous());

        let search = VehicleSearch::from(VehicleSearchQuery {
            year: Some(2022),
            ..Default::default()
        });
        assert_eq!(search.model_year, Some(2022));
    }

    #[test]
    fn test_search_query_empty_values_are_absent() {
        let query: VehicleSearchQuery = serde_json::from_value(json!({
            "make": "",
            "year": "",
            "type": " ",
            "fuelType": ""
        }))
        .unwrap();
        assert_eq!(query.year, None);
        assert_eq!(query.vehicle_type, None);
        assert_eq!(query.fuel_type, None);
        assert!(VehicleSearch::from(query).predicates().is_empty());

        let query: VehicleSearchQuery = serde_json::from_value(json!({
            "year": "2019",
            "type": "VAN",
            "fuelType": "DIESEL"
        }))
        .unwrap();
        assert_eq!(query.year, Some(2019));
        assert_eq!(query.vehicle_type, Some(VehicleType::Van));
        assert_eq!(query.fuel_type, Some(FuelType::Diesel));

        let bad: Result<VehicleSearchQuery, _> =
            serde_json::from_value(json!({ "type": "SPACESHIP" }));
        assert!(bad.is_err());
    }
}
