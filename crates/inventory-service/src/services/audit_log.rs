//! Audit log query service
//!
//! Reads the audit trail of a product. Queries never fail: a malformed id,
//! an unknown product or a storage error all yield an empty list.

use tracing::{debug, instrument, warn};

use inventory_core::ProductId;

use crate::dto::{AuditLogResponse, AuditLogWithProduct};

use super::context::ServiceContext;

/// Audit log service
pub struct AuditLogService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuditLogService<'a> {
    /// Create a new AuditLogService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Entries for the product, most recent first
    #[instrument(skip(self))]
    pub async fn get_product_audit_logs(&self, raw_product_id: &str) -> Vec<AuditLogResponse> {
        let Ok(product_id) = ProductId::parse(raw_product_id) else {
            debug!("Audit query for malformed product id");
            return Vec::new();
        };

        let entries = match self.ctx.audit_repo().find_by_product(product_id).await {
            Ok(entries) => entries,
            Err(e) => {
                warn!(product_id = %product_id, error = %e, "Failed to read audit entries");
                return Vec::new();
            }
        };
        if entries.is_empty() {
            return Vec::new();
        }

        let product_name = self.product_name(product_id).await;

        entries
            .into_iter()
            .map(|entry| {
                AuditLogResponse::from(AuditLogWithProduct {
                    entry,
                    product_name: product_name.clone(),
                })
            })
            .collect()
    }

    /// Current name of the product, if it still exists
    async fn product_name(&self, product_id: ProductId) -> Option<String> {
        match self.ctx.product_repo().find_by_id(product_id).await {
            Ok(product) => product.map(|p| p.name),
            Err(e) => {
                warn!(product_id = %product_id, error = %e, "Failed to resolve product name");
                None
            }
        }
    }
}
