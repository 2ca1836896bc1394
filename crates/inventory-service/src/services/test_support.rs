//! Shared fixtures for service tests

use std::sync::Arc;

use async_trait::async_trait;

use inventory_core::{AuditLogEntry, AuditLogRepository, DomainError, ProductId, RepoResult};
use inventory_db::MemoryStore;

use crate::dto::CreateProductRequest;

use super::context::ServiceContext;

/// Audit store that is always unreachable
pub struct UnavailableAuditLog;

#[async_trait]
impl AuditLogRepository for UnavailableAuditLog {
    async fn append(&self, _entry: &AuditLogEntry) -> RepoResult<()> {
        Err(DomainError::DatabaseError("audit store unavailable".to_string()))
    }

    async fn find_by_product(&self, _product_id: ProductId) -> RepoResult<Vec<AuditLogEntry>> {
        Err(DomainError::DatabaseError("audit store unavailable".to_string()))
    }
}

/// Context backed entirely by one memory store
pub fn memory_context() -> (ServiceContext, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    (ServiceContext::memory(store.clone()), store)
}

/// Context whose product writes succeed but whose audit writes fail
pub fn failing_audit_context() -> (ServiceContext, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let ctx = ServiceContext::new(store.clone(), Arc::new(UnavailableAuditLog));
    (ctx, store)
}

pub fn create_request(name: &str, stock: i64, threshold: Option<i64>) -> CreateProductRequest {
    CreateProductRequest {
        name: Some(name.to_string()),
        description: Some("d".to_string()),
        stock_quantity: Some(stock),
        low_stock_threshold: threshold,
    }
}
