//! Response types and error handling for API endpoints
//!
//! Provides unified error handling and JSON response formatting.

use axum::{
    http::{HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use inventory_common::ErrorResponse;
use inventory_service::{Audited, ServiceError};
use serde::Serialize;
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

/// Header telling the client whether the audit entry for a mutation was written
pub const AUDIT_STATUS_HEADER: &str = "x-audit-status";

/// API error type for consistent error responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Service(#[from] ServiceError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("{0}")]
    InvalidPath(String),

    #[error("{0}")]
    InvalidBody(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Service(e) => {
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            Self::Validation(_) | Self::InvalidPath(_) | Self::InvalidBody(_) => {
                StatusCode::BAD_REQUEST
            }
        }
    }

    /// Get error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &str {
        match self {
            Self::Service(e) => e.error_code(),
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvalidPath(_) => "INVALID_PATH_PARAMETER",
            Self::InvalidBody(_) => "INVALID_BODY",
        }
    }

    /// Create an invalid path parameter error
    pub fn invalid_path(msg: impl Into<String>) -> Self {
        Self::InvalidPath(msg.into())
    }

    /// Create an unreadable request body error
    pub fn invalid_body(msg: impl Into<String>) -> Self {
        Self::InvalidBody(msg.into())
    }

    /// Build the JSON body. Server errors never expose their cause.
    fn body(&self) -> ErrorResponse {
        let status = self.status_code();
        let code = self.error_code();

        if status.is_server_error() {
            return ErrorResponse::new(code, "Internal server error");
        }

        match self {
            Self::Service(ServiceError::InsufficientStock {
                current_stock,
                requested_amount,
            }) => ErrorResponse::new(code, self.to_string())
                .with("currentStock", *current_stock)
                .with("requestedAmount", *requested_amount),
            Self::Validation(errors) => {
                let message =
                    first_message(errors).unwrap_or_else(|| "Validation error".to_string());
                ErrorResponse::new(code, message).with(
                    "details",
                    serde_json::to_value(errors).unwrap_or_default(),
                )
            }
            _ => ErrorResponse::new(code, self.to_string()),
        }
    }
}

/// First field message, by field name, so the summary is stable
fn first_message(errors: &ValidationErrors) -> Option<String> {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(_, errs)| errs.iter())
        .find_map(|e| e.message.as_ref().map(ToString::to_string))
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            error!(error = ?self, code = self.error_code(), "Server error occurred");
        }

        (status, Json(self.body())).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

/// Mutation result carrying its audit outcome in `x-audit-status`
pub struct AuditedJson<T>(pub Audited<T>);

impl<T: Serialize> IntoResponse for AuditedJson<T> {
    fn into_response(self) -> Response {
        let Audited { value, audit } = self.0;
        let mut response = Json(value).into_response();
        response.headers_mut().insert(
            HeaderName::from_static(AUDIT_STATUS_HEADER),
            HeaderValue::from_static(audit.status()),
        );
        response
    }
}

/// Created response (201) with JSON body
pub struct Created<T>(pub T);

impl<T: IntoResponse> IntoResponse for Created<T> {
    fn into_response(self) -> Response {
        let mut response = self.0.into_response();
        *response.status_mut() = StatusCode::CREATED;
        response
    }
}
