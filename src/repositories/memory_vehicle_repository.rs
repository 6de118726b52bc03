//! Repositorio de vehículos en memoria
//!
//! Misma semántica que el adaptador PostgreSQL (ids secuenciales, unicidad
//! de VIN y matrícula, búsqueda por conjunción de filtros). Se usa en los
//! tests y con `STORAGE_BACKEND=memory` para desarrollo local.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::models::{
    vehicle::{Vehicle, VehicleAttributes},
    vehicle_id::VehicleId,
    vin::Vin,
};
use crate::repositories::vehicle_filter::VehicleSearch;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::{conflict_error, not_found_error, AppError, AppResult};

#[derive(Default)]
struct Store {
    next_id: i64,
    vehicles: BTreeMap<VehicleId, Vehicle>,
}

impl Store {
    /// Comprueba unicidad ignorando el propio registro en un update
    fn check_unique(
        &self,
        attributes: &VehicleAttributes,
        except: Option<VehicleId>,
    ) -> AppResult<()> {
        for (id, existing) in &self.vehicles {
            if Some(*id) == except {
                continue;
            }
            if existing.vin() == attributes.vin() {
                return Err(conflict_error("Vehicle", "vin", attributes.vin().value()));
            }
            if let (Some(a), Some(b)) =
                (existing.registration_number(), attributes.registration_number())
            {
                if same_registration(a, b) {
                    return Err(conflict_error("Vehicle", "registrationNumber", b));
                }
            }
        }
        Ok(())
    }
}

/// Misma normalización que `VehiclePredicate::RegistrationNumber`
fn same_registration(a: &str, b: &str) -> bool {
    a.trim().to_uppercase() == b.trim().to_uppercase()
}

#[derive(Default)]
pub struct InMemoryVehicleRepository {
    store: RwLock<Store>,
}

impl InMemoryVehicleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Número de vehículos guardados
    pub async fn len(&self) -> usize {
        self.store.read().await.vehicles.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl VehicleRepository for InMemoryVehicleRepository {
    async fn find_by_id(&self, id: &VehicleId) -> AppResult<Option<Vehicle>> {
        Ok(self.store.read().await.vehicles.get(id).cloned())
    }

    async fn find_by_vin(&self, vin: &Vin) -> AppResult<Option<Vehicle>> {
        let store = self.store.read().await;
        Ok(store.vehicles.values().find(|v| v.vin() == vin).cloned())
    }

    async fn find_by_registration_number(
        &self,
        registration_number: &str,
    ) -> AppResult<Option<Vehicle>> {
        let store = self.store.read().await;
        Ok(store
            .vehicles
            .values()
            .find(|v| {
                v.registration_number()
                    .map(|r| same_registration(r, registration_number))
                    .unwrap_or(false)
            })
            .cloned())
    }

    async fn search(&self, criteria: &VehicleSearch) -> AppResult<Vec<Vehicle>> {
        let store = self.store.read().await;
        Ok(store
            .vehicles
            .values()
            .filter(|v| criteria.matches(v))
            .cloned()
            .collect())
    }

    async fn create(&self, attributes: &VehicleAttributes) -> AppResult<Vehicle> {
        let mut store = self.store.write().await;
        store.check_unique(attributes, None)?;

        store.next_id += 1;
        let id = VehicleId::new(store.next_id).map_err(|e| AppError::Internal(e.to_string()))?;
        let vehicle = Vehicle::from_parts(id, attributes.clone());
        store.vehicles.insert(id, vehicle.clone());
        Ok(vehicle)
    }

    async fn update(&self, id: &VehicleId, attributes: &VehicleAttributes) -> AppResult<Vehicle> {
        let mut store = self.store.write().await;
        if !store.vehicles.contains_key(id) {
            return Err(not_found_error("Vehicle", &id.to_string()));
        }
        store.check_unique(attributes, Some(*id))?;

        let vehicle = Vehicle::from_parts(*id, attributes.clone());
        store.vehicles.insert(*id, vehicle.clone());
        Ok(vehicle)
    }

    async fn delete(&self, id: &VehicleId) -> AppResult<()> {
        self.store.write().await.vehicles.remove(id);
        Ok(())
    }
}
