//! # inventory-core
//!
//! Domain layer containing entities, value objects, repository traits, and the
//! audit payload model. This crate has zero dependencies on infrastructure
//! (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    AuditAction, AuditChange, AuditLogEntry, DecreasedStock, IncreasedStock, NewProduct, Product,
    ProductPatch, ProductSnapshot, StockAdjustment, StockDirection, StockLevel,
    DEFAULT_LOW_STOCK_THRESHOLD, timestamp_now,
};
pub use error::DomainError;
pub use traits::{AuditLogRepository, ProductRepository, RepoResult};
pub use value_objects::{AuditLogId, IdParseError, ProductId};
