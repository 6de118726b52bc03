//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. Todo se construye explícitamente al
//! arrancar: repositorio -> servicio -> controller.

use std::sync::Arc;

use crate::config::environment::EnvironmentConfig;
use crate::controllers::vehicle_controller::VehicleController;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::vehicle_service::VehicleService;

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub vehicles: VehicleController,
}

impl AppState {
    pub fn new(config: EnvironmentConfig, repository: Arc<dyn VehicleRepository>) -> Self {
        let service = VehicleService::new(repository);
        Self {
            config,
            vehicles: VehicleController::new(service),
        }
    }
}
