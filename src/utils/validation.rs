//! Utilidades de validación
//!
//! Validadores `custom` para los DTOs de entrada. Revisan forma y rango de
//! cada campo antes de llegar al servicio; los value objects vuelven a
//! validar al construirse.

use validator::ValidationError;

use crate::models::vin::is_valid_vin;

/// Validar formato de VIN (17 caracteres, sin I/O/Q)
pub fn validate_vin(value: &str) -> Result<(), ValidationError> {
    if !is_valid_vin(value) {
        let mut error = ValidationError::new("vin");
        error.message = Some("must be 17 chars A-HJ-NPR-Z0-9".into());
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que un string no esté vacío
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_blank");
        error.message = Some("must not be blank".into());
        return Err(error);
    }
    Ok(())
}

/// Validar formato de matrícula: letras, dígitos, espacios y guiones
pub fn validate_registration_number(value: &str) -> Result<(), ValidationError> {
    let valid = value
        .trim()
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == ' ' || c == '-');
    if !valid {
        let mut error = ValidationError::new("registration_number");
        error.message = Some("may only contain letters, digits, spaces and dashes".into());
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Un filtro de texto cuenta como presente sólo si no está en blanco
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_vin() {
        assert!(validate_vin("1HGCM82633A004352").is_ok());
        assert!(validate_vin("1hgcm82633a004352").is_ok());
        assert!(validate_vin("1HGCM82633A00435O").is_err());
        assert!(validate_vin("SHORT").is_err());
    }

    #[test]
    fn test_validate_not_blank() {
        assert!(validate_not_blank("Toyota").is_ok());
        assert!(validate_not_blank("   ").is_err());
        assert!(validate_not_blank("").is_err());
    }

    #[test]
    fn test_validate_registration_number() {
        assert!(validate_registration_number("AB-123-CD").is_ok());
        assert!(validate_registration_number("abc 123").is_ok());
        assert!(validate_registration_number("AB_123").is_err());
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(Some(" toyota ")), Some("toyota"));
        assert_eq!(non_blank(Some("  ")), None);
        assert_eq!(non_blank(None), None);
    }
}
