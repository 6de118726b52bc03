//! Vehicle Identification Number
//!
//! ISO 3779: 17 caracteres, sin las letras I, O ni Q. El valor se guarda
//! normalizado (sin espacios alrededor y en mayúsculas).

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::fmt;

use super::error::{DomainError, DomainResult};

lazy_static! {
    static ref VIN_PATTERN: Regex =
        Regex::new(r"^[A-HJ-NPR-Z0-9]{17}$").expect("VIN pattern must compile");
}

/// Indica si `value` (ya normalizado o no) es un VIN válido
pub fn is_valid_vin(value: &str) -> bool {
    VIN_PATTERN.is_match(&normalize(value))
}

fn normalize(value: &str) -> String {
    value.trim().to_uppercase()
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Vin(String);

impl Vin {
    pub fn new(value: &str) -> DomainResult<Self> {
        let normalized = normalize(value);
        if !VIN_PATTERN.is_match(&normalized) {
            return Err(DomainError::invalid(
                "vin",
                "Invalid VIN: must be 17 chars A-HJ-NPR-Z0-9",
            ));
        }
        Ok(Self(normalized))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Vin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_valid_vin() {
        let vin = Vin::new("1HGCM82633A004352").unwrap();
        assert_eq!(vin.value(), "1HGCM82633A004352");
    }

    #[test]
    fn test_normalizes_case_and_whitespace() {
        let vin = Vin::new("  1hgcm82633a004352 ").unwrap();
        assert_eq!(vin.value(), "1HGCM82633A004352");
        assert_eq!(vin, Vin::new("1HGCM82633A004352").unwrap());
    }

    #[test]
    fn test_rejects_wrong_length() {
        assert!(Vin::new("1HGCM82633A00435").is_err());
        assert!(Vin::new("1HGCM82633A0043521").is_err());
        assert!(Vin::new("").is_err());
    }

    #[test]
    fn test_rejects_excluded_letters() {
        for bad in ["IHGCM82633A004352", "OHGCM82633A004352", "QHGCM82633A004352"] {
            let err = Vin::new(bad).unwrap_err();
            assert_eq!(err.field(), "vin");
        }
        assert!(Vin::new("1HGCM82633A00435-").is_err());
    }

    #[test]
    fn test_is_valid_vin() {
        assert!(is_valid_vin("11111111111111111"));
        assert!(is_valid_vin("abcdefghjklmnprst"));
        assert!(!is_valid_vin("abcdefghiklmnprst"));
    }
}
