//! Service context - dependency container for services
//!
//! Holds the product and audit repositories. The concrete store (PostgreSQL
//! pool or in-process memory store) is chosen once at startup.

use std::sync::Arc;

use inventory_core::{AuditLogRepository, ProductRepository};
use inventory_db::{MemoryStore, PgAuditLogRepository, PgPool, PgProductRepository};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    product_repo: Arc<dyn ProductRepository>,
    audit_repo: Arc<dyn AuditLogRepository>,
}

impl ServiceContext {
    /// Create a new service context
    pub fn new(
        product_repo: Arc<dyn ProductRepository>,
        audit_repo: Arc<dyn AuditLogRepository>,
    ) -> Self {
        Self {
            product_repo,
            audit_repo,
        }
    }

    /// Context backed by PostgreSQL repositories sharing one pool
    pub fn postgres(pool: PgPool) -> Self {
        Self::new(
            Arc::new(PgProductRepository::new(pool.clone())),
            Arc::new(PgAuditLogRepository::new(pool)),
        )
    }

    /// Context backed by a single in-process store
    pub fn memory(store: Arc<MemoryStore>) -> Self {
        Self::new(store.clone(), store)
    }

    // === Repositories ===

    /// Get the product repository
    pub fn product_repo(&self) -> &dyn ProductRepository {
        self.product_repo.as_ref()
    }

    /// Get the audit log repository
    pub fn audit_repo(&self) -> &dyn AuditLogRepository {
        self.audit_repo.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .finish()
    }
}
