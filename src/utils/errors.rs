//! Sistema de manejo de errores
//!
//! Este módulo define los tipos de errores del registro de vehículos
//! y su conversión a códigos de estado y respuestas serializables.

use http::StatusCode;
use serde::Serialize;
use thiserror::Error;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Empty collection: {0}")]
    EmptyCollection(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Respuesta de error serializable
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub code: String,
}

impl AppError {
    /// Código de estado HTTP equivalente al tipo de error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) | AppError::EmptyCollection(_) => StatusCode::NOT_FOUND,
            AppError::Config(_) | AppError::Io(_) | AppError::Json(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Código estable para clientes (ej: "BAD_REQUEST")
    pub fn code(&self) -> &'static str {
        match self {
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::EmptyCollection(_) => "EMPTY_COLLECTION",
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::Io(_) => "IO_ERROR",
            AppError::Json(_) => "JSON_ERROR",
        }
    }

    /// Mensaje legible sin el prefijo del tipo de error
    pub fn message(&self) -> String {
        match self {
            AppError::BadRequest(msg)
            | AppError::NotFound(msg)
            | AppError::EmptyCollection(msg)
            | AppError::Config(msg) => msg.clone(),
            AppError::Io(e) => e.to_string(),
            AppError::Json(e) => e.to_string(),
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        let error = match self {
            AppError::BadRequest(_) => "Bad Request",
            AppError::NotFound(_) => "Not Found",
            AppError::EmptyCollection(_) => "Empty Collection",
            AppError::Config(_) => "Configuration Error",
            AppError::Io(_) => "IO Error",
            AppError::Json(_) => "JSON Error",
        };

        ErrorResponse {
            error: error.to_string(),
            message: self.message(),
            code: self.code().to_string(),
        }
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(resource: &str, id: &str) -> AppError {
    AppError::NotFound(format!("{} with id '{}' not found", resource, id))
}

/// Función helper para crear errores de solicitud incorrecta
pub fn bad_request_error(message: &str) -> AppError {
    AppError::BadRequest(message.to_string())
}

/// Función helper para crear errores de colección vacía
pub fn empty_collection_error(message: &str) -> AppError {
    AppError::EmptyCollection(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(bad_request_error("x").status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(not_found_error("Vehicle", "AAAA-111").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(empty_collection_error("x").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::Config("x".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_not_found_message() {
        let error = not_found_error("Vehicle", "AAAA-111");
        assert_eq!(error.message(), "Vehicle with id 'AAAA-111' not found");
        assert_eq!(error.to_string(), "Not found: Vehicle with id 'AAAA-111' not found");
    }

    #[test]
    fn test_error_response() {
        let response = empty_collection_error("No hay vehículos").to_response();
        assert_eq!(response.error, "Empty Collection");
        assert_eq!(response.message, "No hay vehículos");
        assert_eq!(response.code, "EMPTY_COLLECTION");

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["code"], "EMPTY_COLLECTION");
    }
}
