//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del sistema
//! y su conversión a respuestas HTTP apropiadas. Es el único lugar donde
//! un error se traduce a código de estado.

use std::collections::BTreeMap;

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::{error, warn};

use crate::models::error::DomainError;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid argument '{field}': {message}")]
    InvalidArgument { field: String, message: String },

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict on '{field}': {message}")]
    Conflict { field: String, message: String },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<BTreeMap<String, Vec<String>>>,
}

impl ErrorResponse {
    fn new(error: &str, message: String, code: &str) -> Self {
        Self {
            error: error.to_string(),
            message,
            code: code.to_string(),
            field: None,
            fields: None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            AppError::InvalidArgument { field, message } => {
                warn!("⚠️ Invalid argument '{}': {}", field, message);
                let mut body =
                    ErrorResponse::new("Invalid Argument", message.clone(), "INVALID_ARGUMENT");
                body.fields = Some(BTreeMap::from([(field.clone(), vec![message])]));
                body.field = Some(field);
                (StatusCode::BAD_REQUEST, body)
            }

            AppError::Validation(e) => {
                warn!("⚠️ Validation error: {}", e);
                let mut body = ErrorResponse::new(
                    "Validation Error",
                    "The provided data is invalid".to_string(),
                    "VALIDATION_ERROR",
                );
                body.fields = Some(field_messages(&e));
                (StatusCode::BAD_REQUEST, body)
            }

            AppError::BadRequest(msg) => {
                warn!("⚠️ Bad request: {}", msg);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::new("Bad Request", msg, "BAD_REQUEST"),
                )
            }

            AppError::NotFound(msg) => {
                warn!("🔍 Resource not found: {}", msg);
                (
                    StatusCode::NOT_FOUND,
                    ErrorResponse::new("Not Found", msg, "NOT_FOUND"),
                )
            }

            AppError::Conflict { field, message } => {
                warn!("⚠️ Conflict on '{}': {}", field, message);
                let mut body = ErrorResponse::new("Conflict", message, "CONFLICT");
                body.field = Some(field);
                (StatusCode::CONFLICT, body)
            }

            AppError::Database(e) => {
                error!("❌ Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new(
                        "Internal Server Error",
                        "An unexpected error occurred".to_string(),
                        "INTERNAL_ERROR",
                    ),
                )
            }

            AppError::Internal(msg) => {
                error!("❌ Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new(
                        "Internal Server Error",
                        "An unexpected error occurred".to_string(),
                        "INTERNAL_ERROR",
                    ),
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Agrupa los errores de validator por campo: `{campo: [mensajes]}`
fn field_messages(errors: &validator::ValidationErrors) -> BTreeMap<String, Vec<String>> {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let messages = errs
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect()
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidArgument { field, message } => AppError::InvalidArgument {
                field: field.to_string(),
                message,
            },
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(resource: &str, id: &str) -> AppError {
    AppError::NotFound(format!("{} not found: {}", resource, id))
}

/// Función helper para crear errores de conflicto
pub fn conflict_error(resource: &str, field: &str, value: &str) -> AppError {
    AppError::Conflict {
        field: field.to_string(),
        message: format!("{} with {} '{}' already exists", resource, field, value),
    }
}

/// Función helper para crear errores de solicitud incorrecta
pub fn bad_request_error(message: &str) -> AppError {
    AppError::BadRequest(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::ValidationError;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_maps_to_404() {
        let response = not_found_error("Vehicle", "9").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["code"], "NOT_FOUND");
        assert_eq!(body["message"], "Vehicle not found: 9");
    }

    #[tokio::test]
    async fn test_conflict_carries_field() {
        let response = conflict_error("Vehicle", "vin", "1HGCM82633A004352").into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
        let body = body_json(response).await;
        assert_eq!(body["field"], "vin");
        assert_eq!(body["code"], "CONFLICT");
    }

    #[tokio::test]
    async fn test_domain_error_maps_to_400() {
        let err: AppError = DomainError::invalid("modelYear", "model year must be >= 1886").into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["code"], "INVALID_ARGUMENT");
        assert_eq!(body["fields"]["modelYear"][0], "model year must be >= 1886");
    }

    #[tokio::test]
    async fn test_validation_errors_grouped_by_field() {
        let mut errors = validator::ValidationErrors::new();
        let mut error = ValidationError::new("required");
        error.message = Some("make is required".into());
        errors.add("make", error);
        errors.add("vin", ValidationError::new("vin"));

        let response = AppError::Validation(errors).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["code"], "VALIDATION_ERROR");
        assert_eq!(body["fields"]["make"][0], "make is required");
        assert_eq!(body["fields"]["vin"][0], "vin");
    }

    #[tokio::test]
    async fn test_internal_errors_do_not_leak_details() {
        let response = AppError::Internal("pool exhausted at 10.0.0.3".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["message"], "An unexpected error occurred");
        assert!(!body.to_string().contains("10.0.0.3"));

        let response = AppError::Database(sqlx::Error::PoolTimedOut).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
