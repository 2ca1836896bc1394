//! Model to entity mappers
//!
//! - `From<ProductModel> for Product`: rows always satisfy the table constraints
//! - `TryFrom<AuditLogModel> for AuditLogEntry`: the stored JSON payload is
//!   checked against the shape its `action_type` requires
//! - [`AuditLogInsert`]: flattens an entry into bindable columns

mod audit_log;
mod product;

pub use audit_log::AuditLogInsert;
