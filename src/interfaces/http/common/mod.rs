//! Shared HTTP response types

pub mod validated_json;

pub use validated_json::ValidatedJson;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::DomainError;

/// JSON message body used by every route for non-payload responses
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Transport-level error: a status code plus a `{"message": ...}` body
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::UNAUTHORIZED,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        let status = match &e {
            DomainError::Validation(_) | DomainError::Conflict(_) | DomainError::Payment(_) => {
                StatusCode::BAD_REQUEST
            }
            DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
            DomainError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            DomainError::Upstream(_) | DomainError::Database(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let message = match e {
            DomainError::Validation(m)
            | DomainError::Conflict(m)
            | DomainError::Unauthorized(m)
            | DomainError::Upstream(m) => m,
            DomainError::Payment(_) => "Payment failed".to_string(),
            DomainError::NotFound { entity, .. } => format!("{} not found", entity),
            DomainError::Database(m) => m,
        };
        Self { status, message }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(MessageResponse::new(self.message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_error_mapping() {
        let e = ApiError::from(DomainError::Validation("bad".into()));
        assert_eq!(e.status, StatusCode::BAD_REQUEST);
        assert_eq!(e.message, "bad");

        let e = ApiError::from(DomainError::not_found("Slot", 3));
        assert_eq!(e.status, StatusCode::NOT_FOUND);
        assert_eq!(e.message, "Slot not found");

        let e = ApiError::from(DomainError::Unauthorized("nope".into()));
        assert_eq!(e.status, StatusCode::UNAUTHORIZED);

        let e = ApiError::from(DomainError::Payment("declined".into()));
        assert_eq!(e.status, StatusCode::BAD_REQUEST);
        assert_eq!(e.message, "Payment failed");

        let e = ApiError::from(DomainError::Database("boom".into()));
        assert_eq!(e.status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
