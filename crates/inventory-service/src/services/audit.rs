//! Two-phase results for mutations followed by an audit write
//!
//! A mutation is persisted first and its audit entry written second. The
//! second write may fail without undoing the first, so every state-changing
//! operation reports both outcomes.

use tracing::{debug, warn};

use inventory_core::{AuditLogEntry, AuditLogId};

use super::context::ServiceContext;

/// Result of the audit write that follows a successful mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuditOutcome {
    /// Entry stored under this id
    Recorded(AuditLogId),
    /// Entry could not be stored; the mutation still stands
    Failed(String),
}

impl AuditOutcome {
    pub fn is_recorded(&self) -> bool {
        matches!(self, Self::Recorded(_))
    }

    /// Value for the `x-audit-status` response header
    pub fn status(&self) -> &'static str {
        if self.is_recorded() {
            "recorded"
        } else {
            "failed"
        }
    }
}

/// A persisted mutation together with the outcome of its audit write
#[derive(Debug, Clone)]
pub struct Audited<T> {
    pub value: T,
    pub audit: AuditOutcome,
}

impl<T> Audited<T> {
    pub fn new(value: T, audit: AuditOutcome) -> Self {
        Self { value, audit }
    }
}

/// Append `entry`, logging instead of failing when the store refuses it
pub(crate) async fn record(ctx: &ServiceContext, entry: AuditLogEntry) -> AuditOutcome {
    match ctx.audit_repo().append(&entry).await {
        Ok(()) => {
            debug!(
                audit_id = %entry.id,
                product_id = %entry.product_id,
                action = %entry.action(),
                "Audit entry recorded"
            );
            AuditOutcome::Recorded(entry.id)
        }
        Err(e) => {
            warn!(
                product_id = %entry.product_id,
                action = %entry.action(),
                error = %e,
                "Failed to record audit entry"
            );
            AuditOutcome::Failed(e.to_string())
        }
    }
}
