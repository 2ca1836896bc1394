//! Service layer error types
//!
//! Provides a unified error type for all service operations. Domain errors
//! that callers react to (missing product, bad input, insufficient stock) are
//! lifted into dedicated variants; storage failures stay wrapped.

use inventory_core::DomainError;
use std::fmt;

/// Service layer error type
#[derive(Debug)]
pub enum ServiceError {
    /// Domain failure with no dedicated variant (storage, internal)
    Domain(DomainError),

    /// Resource not found
    NotFound { resource: &'static str, id: String },

    /// Validation error
    Validation(String),

    /// Decrease larger than the stock on hand
    InsufficientStock {
        current_stock: i64,
        requested_amount: i64,
    },
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain(e) => write!(f, "{e}"),
            Self::NotFound { resource, .. } => write!(f, "{resource} not found"),
            Self::Validation(msg) => write!(f, "{msg}"),
            Self::InsufficientStock { .. } => write!(f, "Insufficient stock"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Domain(e) => Some(e),
            _ => None,
        }
    }
}

impl ServiceError {
    /// Create a not found error
    pub fn not_found(resource: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource,
            id: id.into(),
        }
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Domain(e) => {
                if e.is_not_found() {
                    404
                } else if e.is_validation() || e.is_rule_violation() {
                    400
                } else {
                    500
                }
            }
            Self::NotFound { .. } => 404,
            Self::Validation(_) | Self::InsufficientStock { .. } => 400,
        }
    }

    /// Get the error code for API responses
    pub fn error_code(&self) -> &str {
        match self {
            Self::Domain(e) => e.code(),
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InsufficientStock { .. } => "INSUFFICIENT_STOCK",
        }
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::ProductNotFound(id) => Self::not_found("Product", id.to_string()),
            DomainError::ValidationError(msg) => Self::Validation(msg),
            DomainError::InsufficientStock {
                current_stock,
                requested_amount,
            } => Self::InsufficientStock {
                current_stock,
                requested_amount,
            },
            other => Self::Domain(other),
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
