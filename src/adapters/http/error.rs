//! Shared JSON error body and application error mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::application::{CatalogError, TravelInfoError};
use crate::domain::foundation::ValidationError;

/// Error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }

    /// Validation failure naming the offending field.
    pub fn validation(error: &ValidationError) -> Self {
        Self {
            details: Some(serde_json::json!({ "field": error.field() })),
            ..Self::new("VALIDATION_FAILED", error.to_string())
        }
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self::new("NOT_FOUND", format!("{} not found: {}", resource_type, id))
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new("INTERNAL_ERROR", message)
    }
}

/// Maps catalog handler errors to HTTP responses.
pub fn catalog_error_response(error: CatalogError) -> Response {
    match error {
        CatalogError::Validation(e) => {
            (StatusCode::BAD_REQUEST, Json(ErrorResponse::validation(&e))).into_response()
        }
        CatalogError::DestinationNotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Destination", &id.to_string())),
        )
            .into_response(),
        CatalogError::AccommodationNotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Accommodation", &id.to_string())),
        )
            .into_response(),
        CatalogError::Repository(e) => {
            tracing::error!(error = %e, "Catalog repository failure");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal("Catalog storage unavailable")),
            )
                .into_response()
        }
    }
}

/// Maps travel info handler errors to HTTP responses.
pub fn travel_info_error_response(error: TravelInfoError) -> Response {
    match error {
        TravelInfoError::Validation(e) => {
            (StatusCode::BAD_REQUEST, Json(ErrorResponse::validation(&e))).into_response()
        }
        TravelInfoError::UnknownDestination(name) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Destination", &name)),
        )
            .into_response(),
        TravelInfoError::Repository(e) => {
            tracing::error!(error = %e, "Travel info repository failure");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal("Catalog storage unavailable")),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DestinationId, DomainError, ErrorCode};

    #[test]
    fn validation_error_names_the_field() {
        let body = ErrorResponse::validation(&ValidationError::too_long("name", 100));
        assert_eq!(body.code, "VALIDATION_FAILED");
        assert_eq!(body.details.unwrap()["field"], "name");
    }

    #[test]
    fn catalog_errors_map_to_distinct_statuses() {
        let cases = [
            (CatalogError::Validation(ValidationError::empty_field("name")), StatusCode::BAD_REQUEST),
            (CatalogError::DestinationNotFound(DestinationId::new(3)), StatusCode::NOT_FOUND),
            (
                CatalogError::Repository(DomainError::new(ErrorCode::DatabaseError, "down")),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (error, status) in cases {
            assert_eq!(catalog_error_response(error).status(), status);
        }
    }

    #[test]
    fn internal_details_are_not_serialized_when_absent() {
        let json = serde_json::to_string(&ErrorResponse::internal("x")).unwrap();
        assert!(!json.contains("details"));
    }
}
