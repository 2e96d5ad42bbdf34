//! Sobre uniforme de respuesta
//!
//! Todas las respuestas de la API comparten la forma
//! `{code, error_desc, value}`; los listados usan `values`.
//! `code` refleja el status HTTP de la respuesta.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Respuesta genérica con un único valor
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn ok(value: T) -> Self {
        Self {
            code: 200,
            error_desc: None,
            value: Some(value),
        }
    }
}

/// Respuesta genérica para listados
#[derive(Debug, Serialize)]
pub struct ApiListResponse<T> {
    pub code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<T>>,
}

impl<T> ApiListResponse<T> {
    pub fn ok(values: Vec<T>) -> Self {
        Self {
            code: 200,
            error_desc: None,
            values: Some(values),
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

impl<T: Serialize> IntoResponse for ApiListResponse<T> {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_omits_error_desc() {
        let response = ApiResponse::ok(42);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["code"], 200);
        assert_eq!(json["value"], 42);
        assert!(json.get("error_desc").is_none());
    }

    #[test]
    fn test_list_uses_values_key() {
        let response = ApiListResponse::ok(vec![1, 2, 3]);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["code"], 200);
        assert_eq!(json["values"], serde_json::json!([1, 2, 3]));
        assert!(json.get("value").is_none());
    }
}
