//! Error handling utilities for repositories

use inventory_core::{DomainError, ProductId};
use sqlx::Error as SqlxError;

/// SQLSTATE raised when an arithmetic result leaves the column's range
const NUMERIC_VALUE_OUT_OF_RANGE: &str = "22003";

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Like [`map_db_error`], but reports BIGINT overflow as a validation failure
pub fn map_stock_error(e: SqlxError) -> DomainError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.code().as_deref() == Some(NUMERIC_VALUE_OUT_OF_RANGE) {
            return DomainError::ValidationError(
                "Amount exceeds the supported stock range".to_string(),
            );
        }
    }
    map_db_error(e)
}

/// Create a "product not found" error
pub fn product_not_found(id: ProductId) -> DomainError {
    DomainError::ProductNotFound(id)
}
