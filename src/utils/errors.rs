//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del sistema
//! y su conversión a respuestas HTTP con el sobre uniforme
//! `{code, error_desc}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_desc) = match self {
            AppError::Database(msg) => {
                eprintln!("Database error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }

            AppError::Validation(e) => {
                eprintln!("Validation error: {}", e);
                (StatusCode::BAD_REQUEST, e.to_string())
            }

            AppError::NotFound(msg) => {
                eprintln!("Resource not found: {}", msg);
                (StatusCode::NOT_FOUND, msg)
            }

            // El contrato del API usa 502 para un autobús ocupado
            AppError::Conflict(msg) => {
                eprintln!("Conflict: {}", msg);
                (StatusCode::BAD_GATEWAY, msg)
            }

            AppError::BadRequest(msg) => {
                eprintln!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, msg)
            }
        };

        let body = Json(json!({
            "code": status.as_u16(),
            "error_desc": error_desc,
        }));

        (status, body).into_response()
    }
}

/// Función helper para crear errores de validación
pub fn validation_error(field: &'static str, message: &'static str) -> AppError {
    use validator::ValidationError;

    let mut error = ValidationError::new("invalid");
    error.message = Some(message.into());

    let mut errors = validator::ValidationErrors::new();
    errors.add(field, error);

    AppError::Validation(errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_envelope() {
        let response = AppError::NotFound("Bus 7 not found".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["code"], 404);
        assert_eq!(body["error_desc"], "Bus 7 not found");
        assert!(body.get("value").is_none());
    }

    #[tokio::test]
    async fn test_conflict_maps_to_502() {
        let response = AppError::Conflict("El autobús está ocupado".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let body = body_json(response).await;
        assert_eq!(body["code"], 502);
    }

    #[tokio::test]
    async fn test_validation_error_envelope() {
        let response = validation_error("date_to", "empty time window").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["code"], 400);
        assert!(body["error_desc"]
            .as_str()
            .unwrap()
            .contains("empty time window"));
    }
}
