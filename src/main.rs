use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use vehicle_registry::config::{DatabaseConfig, EnvironmentConfig, StorageBackend};
use vehicle_registry::database::DatabaseConnection;
use vehicle_registry::repositories::{
    memory_vehicle_repository::InMemoryVehicleRepository,
    pg_vehicle_repository::PgVehicleRepository,
    vehicle_repository::VehicleRepository,
};
use vehicle_registry::routes::create_app;
use vehicle_registry::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::from_env()?;

    // Configurar logging
    let default_level = if config.is_development() { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    info!("🚗 Vehicle Registry - API REST de vehículos");
    info!("================================================");

    // Inicializar almacenamiento
    let repository: Arc<dyn VehicleRepository> = match config.storage_backend {
        StorageBackend::Postgres => {
            let db_config = DatabaseConfig::from_env()?;
            let db_connection = match DatabaseConnection::new(&db_config).await {
                Ok(conn) => conn,
                Err(e) => {
                    error!("❌ Error conectando a la base de datos: {:#}", e);
                    return Err(e);
                }
            };
            info!("✅ PostgreSQL conectado exitosamente");
            Arc::new(PgVehicleRepository::new(db_connection.pool().clone()))
        }
        StorageBackend::Memory => {
            info!("🧪 Usando almacenamiento en memoria");
            Arc::new(InMemoryVehicleRepository::new())
        }
    };

    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .with_context(|| format!("Dirección inválida: {}", config.server_addr()))?;

    let app = create_app(AppState::new(config, repository));

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET    /health - Estado del servicio");
    info!("   GET    /vehicles - Buscar vehículos");
    info!("   POST   /vehicles - Crear vehículo");
    info!("   GET    /vehicles/:id - Obtener vehículo");
    info!("   PUT    /vehicles/:id - Actualizar vehículo");
    info!("   DELETE /vehicles/:id - Eliminar vehículo");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            e
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
