//! Audit log database model

use chrono::{DateTime, Utc};
use serde_json::Value as JsonValue;
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for audit_logs table
#[derive(Debug, Clone, FromRow)]
pub struct AuditLogModel {
    pub id: Uuid,
    pub product_id: Uuid,
    pub action_type: String,
    pub old_values: Option<JsonValue>,
    pub new_values: Option<JsonValue>,
    pub timestamp: DateTime<Utc>,
}
