//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod audit;
pub mod audit_log;
pub mod context;
pub mod error;
pub mod health;
pub mod product;
pub mod stock;

#[cfg(test)]
mod test_support;

// Re-export all services for convenience
pub use audit::{AuditOutcome, Audited};
pub use audit_log::AuditLogService;
pub use context::ServiceContext;
pub use error::{ServiceError, ServiceResult};
pub use health::HealthService;
pub use product::ProductService;
pub use stock::StockService;
