//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! Required fields are `Option` so that a missing field is reported through
//! validation rather than as a JSON syntax error.

use serde::Deserialize;
use validator::Validate;

use inventory_core::{NewProduct, ProductPatch};

use crate::services::ServiceError;

const REQUIRED_FIELDS: &str = "Name, description, and stock quantity are required";
const NON_POSITIVE_AMOUNT: &str = "Amount must be a positive number";

// ============================================================================
// Product Requests
// ============================================================================

/// Create product request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateProductRequest {
    #[validate(
        required(message = "Name, description, and stock quantity are required"),
        length(min = 1, message = "Name and description cannot be empty")
    )]
    pub name: Option<String>,

    #[validate(
        required(message = "Name, description, and stock quantity are required"),
        length(min = 1, message = "Name and description cannot be empty")
    )]
    pub description: Option<String>,

    #[validate(
        required(message = "Name, description, and stock quantity are required"),
        range(min = 0, message = "Stock quantity cannot be negative")
    )]
    pub stock_quantity: Option<i64>,

    #[validate(range(min = 0, message = "Low stock threshold cannot be negative"))]
    pub low_stock_threshold: Option<i64>,
}

impl CreateProductRequest {
    /// Convert into domain input, rejecting missing required fields
    pub fn into_new_product(self) -> Result<NewProduct, ServiceError> {
        match (self.name, self.description, self.stock_quantity) {
            (Some(name), Some(description), Some(stock_quantity)) => Ok(NewProduct {
                name,
                description,
                stock_quantity,
                low_stock_threshold: self.low_stock_threshold,
            }),
            _ => Err(ServiceError::validation(REQUIRED_FIELDS)),
        }
    }
}

/// Update product request; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProductRequest {
    #[validate(length(min = 1, message = "Name and description cannot be empty"))]
    pub name: Option<String>,

    #[validate(length(min = 1, message = "Name and description cannot be empty"))]
    pub description: Option<String>,

    #[validate(range(min = 0, message = "Stock quantity cannot be negative"))]
    pub stock_quantity: Option<i64>,

    #[validate(range(min = 0, message = "Low stock threshold cannot be negative"))]
    pub low_stock_threshold: Option<i64>,
}

impl From<UpdateProductRequest> for ProductPatch {
    fn from(request: UpdateProductRequest) -> Self {
        Self {
            name: request.name,
            description: request.description,
            stock_quantity: request.stock_quantity,
            low_stock_threshold: request.low_stock_threshold,
        }
    }
}

// ============================================================================
// Stock Requests
// ============================================================================

/// Increase / decrease stock request
#[derive(Debug, Clone, Copy, Default, Deserialize, Validate)]
pub struct StockAdjustmentRequest {
    #[validate(
        required(message = "Amount must be a positive number"),
        range(min = 1, message = "Amount must be a positive number")
    )]
    pub amount: Option<i64>,
}

impl StockAdjustmentRequest {
    pub fn new(amount: i64) -> Self {
        Self {
            amount: Some(amount),
        }
    }

    /// Get the requested amount, which must be present and strictly positive
    pub fn positive_amount(&self) -> Result<i64, ServiceError> {
        match self.amount {
            Some(amount) if amount > 0 => Ok(amount),
            _ => Err(ServiceError::validation(NON_POSITIVE_AMOUNT)),
        }
    }
}
