//! Servicio de aplicación de vehículos
//!
//! Orquesta el repositorio: traduce el "no encontrado" del puerto a
//! `AppError::NotFound` y comprueba la existencia antes de update/delete.

use std::sync::Arc;

use tracing::{debug, info};

use crate::models::{
    vehicle::{Vehicle, VehicleAttributes},
    vehicle_id::VehicleId,
    vin::Vin,
};
use crate::repositories::vehicle_filter::VehicleSearch;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::{not_found_error, AppResult};

#[derive(Clone)]
pub struct VehicleService {
    repository: Arc<dyn VehicleRepository>,
}

impl VehicleService {
    pub fn new(repository: Arc<dyn VehicleRepository>) -> Self {
        Self { repository }
    }

    pub async fn get_by_id(&self, id: &VehicleId) -> AppResult<Vehicle> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", &id.to_string()))
    }

    /// Con VIN o matrícula la búsqueda se reduce a una consulta exacta
    /// (0 o 1 resultado); si no, se delega en la búsqueda por filtros.
    pub async fn search(&self, criteria: &VehicleSearch) -> AppResult<Vec<Vehicle>> {
        if let Some(vin) = criteria.vin() {
            let vin = Vin::new(vin)?;
            debug!("🔍 Búsqueda exacta por VIN {}", vin);
            return Ok(self.repository.find_by_vin(&vin).await?.into_iter().collect());
        }

        if let Some(registration_number) = criteria.registration_number() {
            debug!("🔍 Búsqueda exacta por matrícula {}", registration_number);
            return Ok(self
                .repository
                .find_by_registration_number(registration_number)
                .await?
                .into_iter()
                .collect());
        }

        self.repository.search(&criteria.without_unique_keys()).await
    }

    pub async fn create(&self, attributes: &VehicleAttributes) -> AppResult<Vehicle> {
        let vehicle = self.repository.create(attributes).await?;
        info!("✅ Vehículo {} creado (VIN {})", vehicle.id(), vehicle.vin());
        Ok(vehicle)
    }

    pub async fn update(
        &self,
        id: &VehicleId,
        attributes: &VehicleAttributes,
    ) -> AppResult<Vehicle> {
        self.get_by_id(id).await?;
        let vehicle = self.repository.update(id, attributes).await?;
        info!("✅ Vehículo {} actualizado", id);
        Ok(vehicle)
    }

    pub async fn delete(&self, id: &VehicleId) -> AppResult<()> {
        self.get_by_id(id).await?;
        self.repository.delete(id).await?;
        info!("🗑️ Vehículo {} eliminado", id);
        Ok(())
    }
}
