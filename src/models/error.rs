//! Errores del modelo de dominio
//!
//! Los value objects y la entidad Vehicle fallan con `DomainError` al
//! construirse. Este tipo no conoce HTTP ni la base de datos; la conversión
//! a `AppError` vive en `utils::errors`.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("{field}: {message}")]
    InvalidArgument {
        field: &'static str,
        message: String,
    },
}

impl DomainError {
    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        DomainError::InvalidArgument {
            field,
            message: message.into(),
        }
    }

    /// Campo que provocó el error
    pub fn field(&self) -> &'static str {
        match self {
            DomainError::InvalidArgument { field, .. } => field,
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
