//! Product entity - an inventory item with a tracked stock level

use chrono::{DateTime, Utc};

use super::timestamp_now;

use crate::error::DomainError;
use crate::value_objects::ProductId;

use super::audit_log::ProductSnapshot;

/// Threshold applied when a product is created without one
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 10;

/// Rejection message for a blank name or description
pub const EMPTY_TEXT_MESSAGE: &str = "Name and description cannot be empty";

/// Product entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// Never below zero
    pub stock_quantity: i64,
    pub low_stock_threshold: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated-on-construction input for a new product
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub stock_quantity: i64,
    pub low_stock_threshold: Option<i64>,
}

/// Partial update; `None` fields keep their current value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub stock_quantity: Option<i64>,
    pub low_stock_threshold: Option<i64>,
}

impl Product {
    /// Create a new product, enforcing the field invariants
    pub fn new(id: ProductId, input: NewProduct) -> Result<Self, DomainError> {
        let name = require_text(input.name)?;
        let description = require_text(input.description)?;
        require_non_negative("Stock quantity", input.stock_quantity)?;
        let low_stock_threshold = input
            .low_stock_threshold
            .unwrap_or(DEFAULT_LOW_STOCK_THRESHOLD);
        require_non_negative("Low stock threshold", low_stock_threshold)?;

        let now = timestamp_now();
        Ok(Self {
            id,
            name,
            description,
            stock_quantity: input.stock_quantity,
            low_stock_threshold,
            created_at: now,
            updated_at: now,
        })
    }

    /// Check if the product is at or below its low-stock threshold
    #[inline]
    pub fn is_low_stock(&self) -> bool {
        self.stock_quantity <= self.low_stock_threshold
    }

    /// Apply a partial update.
    ///
    /// The whole patch is validated before any field is touched, so a rejected
    /// patch leaves the product unchanged. `updated_at` is bumped on success.
    pub fn apply(&mut self, patch: ProductPatch) -> Result<(), DomainError> {
        let name = patch.name.map(require_text).transpose()?;
        let description = patch
            .description
            .map(require_text)
            .transpose()?;
        if let Some(quantity) = patch.stock_quantity {
            require_non_negative("Stock quantity", quantity)?;
        }
        if let Some(threshold) = patch.low_stock_threshold {
            require_non_negative("Low stock threshold", threshold)?;
        }

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(quantity) = patch.stock_quantity {
            self.stock_quantity = quantity;
        }
        if let Some(threshold) = patch.low_stock_threshold {
            self.low_stock_threshold = threshold;
        }
        self.updated_at = timestamp_now();

        Ok(())
    }

    /// Capture the full record for the audit trail
    pub fn snapshot(&self) -> ProductSnapshot {
        ProductSnapshot::from(self)
    }
}

fn require_text(value: String) -> Result<String, DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::ValidationError(EMPTY_TEXT_MESSAGE.to_string()));
    }
    Ok(value)
}

fn require_non_negative(label: &str, value: i64) -> Result<(), DomainError> {
    if value < 0 {
        return Err(DomainError::ValidationError(format!(
            "{label} cannot be negative"
        )));
    }
    Ok(())
}
