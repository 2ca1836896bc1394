//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in
//! inventory-core.

mod audit_log;
mod error;
mod product;

pub use audit_log::PgAuditLogRepository;
pub use product::PgProductRepository;
