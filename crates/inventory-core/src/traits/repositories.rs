//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{AuditLogEntry, Product};
use crate::error::DomainError;
use crate::value_objects::ProductId;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Product Repository
// ============================================================================

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Find product by ID
    async fn find_by_id(&self, id: ProductId) -> RepoResult<Option<Product>>;

    /// List all products, oldest first
    async fn list(&self) -> RepoResult<Vec<Product>>;

    /// List products whose stock is at or below their threshold
    async fn list_low_stock(&self) -> RepoResult<Vec<Product>>;

    /// Create a new product
    async fn create(&self, product: &Product) -> RepoResult<()>;

    /// Overwrite an existing product (last write wins)
    async fn update(&self, product: &Product) -> RepoResult<()>;

    /// Hard delete a product
    async fn delete(&self, id: ProductId) -> RepoResult<()>;

    /// Atomically add `delta` to the stored stock quantity.
    ///
    /// The write is refused when the result would drop below zero. Returns the
    /// updated product, or `None` if the product is missing or the write was
    /// refused.
    async fn adjust_stock(&self, id: ProductId, delta: i64) -> RepoResult<Option<Product>>;

    /// Check that the store is reachable
    async fn ping(&self) -> RepoResult<()>;
}

// ============================================================================
// Audit Log Repository
// ============================================================================

#[async_trait]
pub trait AuditLogRepository: Send + Sync {
    /// Append an entry; entries are never updated or deleted
    async fn append(&self, entry: &AuditLogEntry) -> RepoResult<()>;

    /// All entries for a product, most recent first
    async fn find_by_product(&self, product_id: ProductId) -> RepoResult<Vec<AuditLogEntry>>;
}
