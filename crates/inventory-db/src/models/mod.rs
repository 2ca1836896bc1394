//! Database models - SQLx-compatible structs for PostgreSQL tables

mod audit_log;
mod product;

pub use audit_log::AuditLogModel;
pub use product::ProductModel;
