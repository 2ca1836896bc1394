//! In-process store implementing the repository traits
//!
//! Selected with `DATABASE_URL=memory://`. Data lives only as long as the
//! process. Each operation takes a single lock, so an adjustment's check and
//! write are atomic just like the conditional SQL update.

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::instrument;

use inventory_core::{
    timestamp_now, AuditLogEntry, AuditLogRepository, DomainError, Product, ProductId,
    ProductRepository, RepoResult,
};

/// Products and audit entries held in memory
///
/// Products are kept in insertion order, which is also `created_at` order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    products: RwLock<Vec<Product>>,
    audit_logs: RwLock<Vec<AuditLogEntry>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for MemoryStore {
    async fn find_by_id(&self, id: ProductId) -> RepoResult<Option<Product>> {
        Ok(self.products.read().iter().find(|p| p.id == id).cloned())
    }

    async fn list(&self) -> RepoResult<Vec<Product>> {
        Ok(self.products.read().clone())
    }

    async fn list_low_stock(&self) -> RepoResult<Vec<Product>> {
        Ok(self
            .products
            .read()
            .iter()
            .filter(|p| p.is_low_stock())
            .cloned()
            .collect())
    }

    #[instrument(skip(self, product), fields(product_id = %product.id))]
    async fn create(&self, product: &Product) -> RepoResult<()> {
        let mut products = self.products.write();
        if products.iter().any(|p| p.id == product.id) {
            return Err(DomainError::DatabaseError(format!(
                "duplicate product id {}",
                product.id
            )));
        }
        products.push(product.clone());
        Ok(())
    }

    #[instrument(skip(self, product), fields(product_id = %product.id))]
    async fn update(&self, product: &Product) -> RepoResult<()> {
        let mut products = self.products.write();
        let slot = products
            .iter_mut()
            .find(|p| p.id == product.id)
            .ok_or(DomainError::ProductNotFound(product.id))?;
        *slot = product.clone();
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: ProductId) -> RepoResult<()> {
        let mut products = self.products.write();
        let before = products.len();
        products.retain(|p| p.id != id);
        if products.len() == before {
            return Err(DomainError::ProductNotFound(id));
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn adjust_stock(&self, id: ProductId, delta: i64) -> RepoResult<Option<Product>> {
        let mut products = self.products.write();
        let Some(product) = products.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };

        let new_quantity = product.stock_quantity.checked_add(delta).ok_or_else(|| {
            DomainError::ValidationError("Amount exceeds the supported stock range".to_string())
        })?;
        if new_quantity < 0 {
            return Ok(None);
        }

        product.stock_quantity = new_quantity;
        product.updated_at = timestamp_now();
        Ok(Some(product.clone()))
    }

    async fn ping(&self) -> RepoResult<()> {
        Ok(())
    }
}

#[async_trait]
impl AuditLogRepository for MemoryStore {
    #[instrument(skip(self, entry), fields(product_id = %entry.product_id, action = %entry.action()))]
    async fn append(&self, entry: &AuditLogEntry) -> RepoResult<()> {
        // Same payload check the SQL store performs before inserting
        entry.change.to_parts()?;
        self.audit_logs.write().push(entry.clone());
        Ok(())
    }

    async fn find_by_product(&self, product_id: ProductId) -> RepoResult<Vec<AuditLogEntry>> {
        // Newest appended first, then a stable sort keeps that order on equal timestamps
        let mut entries: Vec<AuditLogEntry> = self
            .audit_logs
            .read()
            .iter()
            .rev()
            .filter(|e| e.product_id == product_id)
            .cloned()
            .collect();
        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(entries)
    }
}
