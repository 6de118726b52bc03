//! Puerto de persistencia de vehículos
//!
//! Contrato independiente del motor de almacenamiento. "No encontrado" en
//! las búsquedas se expresa con `None`; convertirlo en error es tarea del
//! servicio.

use async_trait::async_trait;

use crate::models::{
    vehicle::{Vehicle, VehicleAttributes},
    vehicle_id::VehicleId,
    vin::Vin,
};
use crate::repositories::vehicle_filter::VehicleSearch;
use crate::utils::errors::AppResult;

#[async_trait]
pub trait VehicleRepository: Send + Sync {
    async fn find_by_id(&self, id: &VehicleId) -> AppResult<Option<Vehicle>>;

    async fn find_by_vin(&self, vin: &Vin) -> AppResult<Option<Vehicle>>;

    /// Búsqueda sin distinguir mayúsculas
    async fn find_by_registration_number(
        &self,
        registration_number: &str,
    ) -> AppResult<Option<Vehicle>>;

    /// Conjunción de los filtros presentes, ordenada por id
    async fn search(&self, criteria: &VehicleSearch) -> AppResult<Vec<Vehicle>>;

    /// Asigna siempre un id nuevo. `Conflict` si el VIN o la matrícula ya existen.
    async fn create(&self, attributes: &VehicleAttributes) -> AppResult<Vehicle>;

    /// Reemplaza todos los campos. `NotFound` si el id no existe.
    async fn update(&self, id: &VehicleId, attributes: &VehicleAttributes) -> AppResult<Vehicle>;

    /// Idempotente: borrar un id inexistente no es un error.
    async fn delete(&self, id: &VehicleId) -> AppResult<()>;
}
