//! Test fixtures and data generators
//!
//! Provides reusable request and response bodies for integration tests.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Create product request
#[derive(Debug, Serialize)]
pub struct CreateProduct {
    pub name: String,
    pub description: String,
    pub stock_quantity: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low_stock_threshold: Option<i64>,
}

impl CreateProduct {
    pub fn unique(stock_quantity: i64) -> Self {
        Self {
            name: format!("Product {}", unique_suffix()),
            description: "integration test product".to_string(),
            stock_quantity,
            low_stock_threshold: None,
        }
    }

    pub fn widget() -> Self {
        Self {
            name: "Widget".to_string(),
            description: "d".to_string(),
            stock_quantity: 5,
            low_stock_threshold: Some(10),
        }
    }
}

/// Stock adjustment request
#[derive(Debug, Serialize)]
pub struct Amount {
    pub amount: i64,
}

/// Product body
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub stock_quantity: i64,
    pub low_stock_threshold: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Audit entry body
#[derive(Debug, Deserialize)]
pub struct AuditLog {
    pub id: Uuid,
    pub product_id: Uuid,
    pub product_name: Option<String>,
    pub action_type: String,
    pub old_values: Option<Value>,
    pub new_values: Option<Value>,
    pub timestamp: DateTime<Utc>,
}

/// Error body
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub code: String,
    #[serde(flatten)]
    pub context: Map<String, Value>,
}

/// Path of a product
pub fn product_path(id: Uuid) -> String {
    format!("/products/{id}")
}

/// Path of a stock adjustment
pub fn stock_path(id: Uuid, direction: &str) -> String {
    format!("/stocks/{id}/{direction}")
}

/// Path of a product's audit log
pub fn audit_path(id: impl std::fmt::Display) -> String {
    format!("/products/{id}/audit-logs")
}
