//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use inventory_core::{AuditLogEntry, Product};

use super::responses::{AuditLogResponse, ProductResponse};

// ============================================================================
// Product Mappers
// ============================================================================

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            stock_quantity: product.stock_quantity,
            low_stock_threshold: product.low_stock_threshold,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

// ============================================================================
// Audit Log Mappers
// ============================================================================

/// Audit entry joined with the name of the product it describes
#[derive(Debug, Clone)]
pub struct AuditLogWithProduct {
    pub entry: AuditLogEntry,
    pub product_name: Option<String>,
}

impl From<AuditLogWithProduct> for AuditLogResponse {
    fn from(data: AuditLogWithProduct) -> Self {
        Self {
            id: data.entry.id,
            product_id: data.entry.product_id,
            product_name: data.product_name,
            change: data.entry.change,
            timestamp: data.entry.timestamp,
        }
    }
}
