//! Utilidades de validación
//!
//! Validadores de campo de bajo nivel. Devuelven `ValidationError` con el
//! código de la regla y los parámetros relevantes; el controlador decide
//! el mensaje que ve el usuario.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use validator::ValidationError;

lazy_static! {
    /// Matrícula: cuatro letras mayúsculas, guion, tres dígitos (ej: "AAAA-000")
    pub static ref LICENSE_PLATE_REGEX: Regex =
        Regex::new(r"^[A-Z]{4}-[0-9]{3}$").expect("license plate regex must compile");
}

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::new("not_empty"));
    }
    Ok(())
}

/// Validar que un valor coincida por completo con un patrón
pub fn validate_pattern(
    value: &str,
    pattern: &Regex,
    code: &'static str,
) -> Result<(), ValidationError> {
    if !pattern.is_match(value) {
        let mut error = ValidationError::new(code);
        error.add_param("value".into(), &value.to_string());
        error.add_param("pattern".into(), &pattern.as_str().to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar formato de matrícula de vehículo
pub fn validate_license_plate(value: &str) -> Result<(), ValidationError> {
    validate_pattern(value, &LICENSE_PLATE_REGEX, "license_plate")
}

/// Validar que un valor sea positivo
pub fn validate_positive<T: PartialOrd + num_traits::Zero + Serialize>(
    value: T,
) -> Result<(), ValidationError> {
    if value <= T::zero() {
        let mut error = ValidationError::new("positive");
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor sea no negativo
pub fn validate_non_negative<T: PartialOrd + num_traits::Zero + Serialize>(
    value: T,
) -> Result<(), ValidationError> {
    if value < T::zero() {
        let mut error = ValidationError::new("non_negative");
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor sea estrictamente mayor que `min`
pub fn validate_greater_than<T: PartialOrd + Serialize>(
    value: T,
    min: T,
) -> Result<(), ValidationError> {
    if value <= min {
        let mut error = ValidationError::new("greater_than");
        error.add_param("min".into(), &min);
        error.add_param("actual".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor no supere `max` (años, fechas)
pub fn validate_not_after<T: PartialOrd + Serialize>(
    value: T,
    max: T,
) -> Result<(), ValidationError> {
    if value > max {
        let mut error = ValidationError::new("not_after");
        error.add_param("max".into(), &max);
        error.add_param("actual".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor esté en un rango específico (ambos extremos incluidos)
pub fn validate_range<T: PartialOrd + Serialize>(
    value: T,
    min: T,
    max: T,
) -> Result<(), ValidationError> {
    if value < min || value > max {
        let mut error = ValidationError::new("range");
        error.add_param("min".into(), &min);
        error.add_param("max".into(), &max);
        error.add_param("actual".into(), &value);
        return Err(error);
    }
    Ok(())
}
