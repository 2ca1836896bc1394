//! Audit log entity <-> model mapper

use serde_json::Value as JsonValue;
use uuid::Uuid;

use inventory_core::{AuditAction, AuditChange, AuditLogEntry, AuditLogId, DomainError, ProductId};

use crate::models::AuditLogModel;

/// Convert AuditLogModel to AuditLogEntry, rejecting malformed payloads
impl TryFrom<AuditLogModel> for AuditLogEntry {
    type Error = DomainError;

    fn try_from(model: AuditLogModel) -> Result<Self, Self::Error> {
        let action: AuditAction = model.action_type.parse()?;
        let change = AuditChange::from_parts(action, model.old_values, model.new_values)?;

        Ok(AuditLogEntry {
            id: AuditLogId::from_uuid(model.id),
            product_id: ProductId::from_uuid(model.product_id),
            change,
            timestamp: model.timestamp,
        })
    }
}

/// Column values for inserting an audit entry
#[derive(Debug)]
pub struct AuditLogInsert {
    pub id: Uuid,
    pub product_id: Uuid,
    pub action_type: &'static str,
    pub old_values: Option<JsonValue>,
    pub new_values: Option<JsonValue>,
}

impl AuditLogInsert {
    pub fn new(entry: &AuditLogEntry) -> Result<Self, DomainError> {
        let (action, old_values, new_values) = entry.change.to_parts()?;
        Ok(Self {
            id: entry.id.into_inner(),
            product_id: entry.product_id.into_inner(),
            action_type: action.as_str(),
            old_values,
            new_values,
        })
    }
}
