use tracing::info;

use crate::dto::vehicle_dto::{VehicleRequest, VehicleResponse, VehicleSearchQuery};
use crate::models::vehicle_id::VehicleId;
use crate::services::vehicle_service::VehicleService;
use crate::utils::errors::{bad_request_error, AppResult};

/// Traduce entre DTOs HTTP y el servicio de aplicación
#[derive(Clone)]
pub struct VehicleController {
    service: VehicleService,
}

impl VehicleController {
    pub fn new(service: VehicleService) -> Self {
        Self { service }
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<VehicleResponse> {
        let id = VehicleId::new(id)?;
        let vehicle = self.service.get_by_id(&id).await?;
        Ok(VehicleResponse::from(&vehicle))
    }

    pub async fn search(&self, query: VehicleSearchQuery) -> AppResult<Vec<VehicleResponse>> {
        // Se rechaza antes de llegar al servicio
        if query.is_ambiguous() {
            return Err(bad_request_error(
                "Provide either vin or registrationNumber, not both",
            ));
        }

        let vehicles = self.service.search(&query.into()).await?;
        info!("📋 Búsqueda de vehículos: {} resultados", vehicles.len());
        Ok(vehicles.iter().map(VehicleResponse::from).collect())
    }

    pub async fn create(&self, request: VehicleRequest) -> AppResult<VehicleResponse> {
        let attributes = request.into_attributes()?;
        let vehicle = self.service.create(&attributes).await?;
        Ok(VehicleResponse::from(&vehicle))
    }

    pub async fn update(&self, id: i64, request: VehicleRequest) -> AppResult<VehicleResponse> {
        let id = VehicleId::new(id)?;
        let attributes = request.into_attributes()?;
        let vehicle = self.service.update(&id, &attributes).await?;
        Ok(VehicleResponse::from(&vehicle))
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let id = VehicleId::new(id)?;
        self.service.delete(&id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        vehicle::{Vehicle, VehicleAttributes},
        vin::Vin,
    };
    use crate::repositories::memory_vehicle_repository::InMemoryVehicleRepository;
    use crate::repositories::vehicle_filter::VehicleSearch;
    use crate::repositories::vehicle_repository::VehicleRepository;
    use crate::utils::errors::AppError;
    use async_trait::async_trait;
    use std::sync::Arc;

    /// Repositorio que falla si se le llama: demuestra que el controller
    /// rechaza la petición antes de llegar al almacenamiento.
    struct UnreachableRepo;

    #[async_trait]
    impl VehicleRepository for UnreachableRepo {
        async fn find_by_id(&self, _: &VehicleId) -> AppResult<Option<Vehicle>> {
            Err(AppError::Internal("storage reached".to_string()))
        }
        async fn find_by_vin(&self, _: &Vin) -> AppResult<Option<Vehicle>> {
            Err(AppError::Internal("storage reached".to_string()))
        }
        async fn find_by_registration_number(&self, _: &str) -> AppResult<Option<Vehicle>> {
            Err(AppError::Internal("storage reached".to_string()))
        }
        async fn search(&self, _: &VehicleSearch) -> AppResult<Vec<Vehicle>> {
            Err(AppError::Internal("storage reached".to_string()))
        }
        async fn create(&self, _: &VehicleAttributes) -> AppResult<Vehicle> {
            Err(AppError::Internal("storage reached".to_string()))
        }
        async fn update(&self, _: &VehicleId, _: &VehicleAttributes) -> AppResult<Vehicle> {
            Err(AppError::Internal("storage reached".to_string()))
        }
        async fn delete(&self, _: &VehicleId) -> AppResult<()> {
            Err(AppError::Internal("storage reached".to_string()))
        }
    }

    #[tokio::test]
    async fn test_ambiguous_search_rejected_before_storage() {
        let controller = VehicleController::new(VehicleService::new(Arc::new(UnreachableRepo)));
        let query = VehicleSearchQuery {
            vin: Some("1HGCM82633A004352".to_string()),
            registration_number: Some("ABC123".to_string()),
            ..Default::default()
        };
        let err = controller.search(query).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[tokio::test]
    async fn test_non_positive_id_is_invalid_argument() {
        let controller = VehicleController::new(VehicleService::new(Arc::new(UnreachableRepo)));
        for id in [0, -5] {
            let err = controller.get_by_id(id).await.unwrap_err();
            assert!(matches!(err, AppError::InvalidArgument { ref field, .. } if field == "id"));
        }
    }

    #[tokio::test]
    async fn test_search_returns_responses() {
        let controller = VehicleController::new(VehicleService::new(Arc::new(
            InMemoryVehicleRepository::new(),
        )));
        assert!(controller.search(VehicleSearchQuery::default()).await.unwrap().is_empty());
    }
}
