//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, Utc};
use serde::Serialize;

use inventory_core::{AuditChange, AuditLogId, ProductId};

// ============================================================================
// Product Responses
// ============================================================================

/// Product as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductResponse {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub stock_quantity: i64,
    pub low_stock_threshold: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Audit Log Responses
// ============================================================================

/// Audit entry as returned by the API
///
/// The change is flattened, so the body carries `action_type` plus whichever
/// of `old_values` / `new_values` the action records.
#[derive(Debug, Clone, Serialize)]
pub struct AuditLogResponse {
    pub id: AuditLogId,
    pub product_id: ProductId,
    /// Current product name, `null` once the product is deleted
    pub product_name: Option<String>,
    #[serde(flatten)]
    pub change: AuditChange,
    pub timestamp: DateTime<Utc>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub message: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            message: "Inventory API is running!".to_string(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
