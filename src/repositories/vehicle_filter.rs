//! Filtros de búsqueda de vehículos
//!
//! Cada filtro es opcional: sólo los presentes generan un predicado y la
//! búsqueda es la conjunción (AND) de esa lista. Sin predicados, todo
//! registro coincide. Los adaptadores de persistencia traducen la lista a
//! su propio lenguaje (SQL, comparación en memoria...).

use crate::models::vehicle::{FuelType, Vehicle, VehicleType};
use crate::utils::validation::non_blank;

/// Criterios de búsqueda tal como llegan al repositorio
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VehicleSearch {
    pub make: Option<String>,
    pub model: Option<String>,
    pub model_year: Option<i32>,
    pub vehicle_type: Option<VehicleType>,
    pub fuel_type: Option<FuelType>,
    pub vin: Option<String>,
    pub registration_number: Option<String>,
}

/// Predicado individual ya normalizado
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VehiclePredicate {
    /// lower(make) = valor (ya en minúsculas), coincidencia exacta
    Make(String),
    /// lower(model) = valor (ya en minúsculas), coincidencia exacta
    Model(String),
    ModelYear(i32),
    Type(VehicleType),
    Fuel(FuelType),
    /// VIN normalizado a mayúsculas
    Vin(String),
    /// Matrícula normalizada a mayúsculas
    RegistrationNumber(String),
}

impl VehicleSearch {
    /// Construye la lista de predicados de los filtros presentes.
    ///
    /// Texto vacío o sólo espacios cuenta como ausente.
    pub fn predicates(&self) -> Vec<VehiclePredicate> {
        let mut predicates = Vec::new();

        if let Some(make) = non_blank(self.make.as_deref()) {
            predicates.push(VehiclePredicate::Make(make.to_lowercase()));
        }
        if let Some(model) = non_blank(self.model.as_deref()) {
            predicates.push(VehiclePredicate::Model(model.to_lowercase()));
        }
        if let Some(year) = self.model_year {
            predicates.push(VehiclePredicate::ModelYear(year));
        }
        if let Some(vehicle_type) = self.vehicle_type {
            predicates.push(VehiclePredicate::Type(vehicle_type));
        }
        if let Some(fuel_type) = self.fuel_type {
            predicates.push(VehiclePredicate::Fuel(fuel_type));
        }
        if let Some(vin) = non_blank(self.vin.as_deref()) {
            predicates.push(VehiclePredicate::Vin(vin.to_uppercase()));
        }
        if let Some(reg) = non_blank(self.registration_number.as_deref()) {
            predicates.push(VehiclePredicate::RegistrationNumber(reg.to_uppercase()));
        }

        predicates
    }

    /// Copia de los criterios sin las claves únicas (vin / matrícula)
    pub fn without_unique_keys(&self) -> Self {
        Self {
            vin: None,
            registration_number: None,
            ..self.clone()
        }
    }

    pub fn vin(&self) -> Option<&str> {
        non_blank(self.vin.as_deref())
    }

    pub fn registration_number(&self) -> Option<&str> {
        non_blank(self.registration_number.as_deref())
    }

    /// Evalúa los criterios contra un vehículo ya cargado
    pub fn matches(&self, vehicle: &Vehicle) -> bool {
        self.predicates().iter().all(|p| p.matches(vehicle))
    }
}

impl VehiclePredicate {
    pub fn matches(&self, vehicle: &Vehicle) -> bool {
        match self {
            VehiclePredicate::Make(make) => vehicle.make().to_lowercase() == *make,
            VehiclePredicate::Model(model) => vehicle.model().to_lowercase() == *model,
            VehiclePredicate::ModelYear(year) => vehicle.model_year() == *year,
            VehiclePredicate::Type(vehicle_type) => vehicle.vehicle_type() == *vehicle_type,
            VehiclePredicate::Fuel(fuel_type) => vehicle.fuel_type() == *fuel_type,
            VehiclePredicate::Vin(vin) => vehicle.vin().value() == vin,
            VehiclePredicate::RegistrationNumber(reg) => vehicle
                .registration_number()
                .map(|r| r.to_uppercase() == *reg)
                .unwrap_or(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{vehicle_id::VehicleId, vin::Vin};

    fn yaris() -> Vehicle {
        Vehicle::new(
            VehicleId::new(1).unwrap(),
            Vin::new("1HGCM82633A004352").unwrap(),
            VehicleType::Car,
            "Toyota",
            "Yaris",
            2022,
            FuelType::Petrol,
            Some("Blue"),
            Some("ABC123"),
        )
        .unwrap()
    }

    #[test]
    fn test_no_filters_means_no_predicates() {
        let search = VehicleSearch::default();
        assert!(search.predicates().is_empty());
        assert!(search.matches(&yaris()));
    }

    #[test]
    fn test_blank_text_filters_are_ignored() {
        let search = VehicleSearch {
            make: Some(String::new()),
            model: Some("   ".to_string()),
            vin: Some(String::new()),
            ..Default::default()
        };
        assert!(search.predicates().is_empty());
    }

    #[test]
    fn test_only_present_filters_are_composed() {
        let search = VehicleSearch {
            make: Some("Toyota".to_string()),
            model_year: Some(2022),
            fuel_type: Some(FuelType::Petrol),
            ..Default::default()
        };
        assert_eq!(
            search.predicates(),
            vec![
                VehiclePredicate::Make("toyota".to_string()),
                VehiclePredicate::ModelYear(2022),
                VehiclePredicate::Fuel(FuelType::Petrol),
            ]
        );
    }

    #[test]
    fn test_make_is_case_insensitive_exact_match() {
        let v = yaris();
        let search = |make: &str| VehicleSearch {
            make: Some(make.to_string()),
            ..Default::default()
        };
        assert!(search("toyota").matches(&v));
        assert!(search("TOYOTA").matches(&v));
        assert!(!search("Toy").matches(&v));
        assert!(!search("Toyota Motors").matches(&v));
    }

    #[test]
    fn test_conjunction_requires_every_predicate() {
        let v = yaris();
        let search = VehicleSearch {
            model: Some("yaris".to_string()),
            vehicle_type: Some(VehicleType::Truck),
            ..Default::default()
        };
        assert!(!search.matches(&v));
    }

    #[test]
    fn test_unique_keys_match_exactly() {
        let v = yaris();
        let by_reg = VehicleSearch {
            registration_number: Some("abc123".to_string()),
            ..Default::default()
        };
        assert!(by_reg.matches(&v));
        let by_vin = VehicleSearch {
            vin: Some("1hgcm82633a004352".to_string()),
            ..Default::default()
        };
        assert!(by_vin.matches(&v));
        assert!(by_vin.without_unique_keys().predicates().is_empty());
    }
}
