//! # inventory-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use dto::{
    AuditLogResponse, CreateProductRequest, HealthResponse, ProductResponse, ReadinessResponse,
    StockAdjustmentRequest, UpdateProductRequest,
};
pub use services::{
    AuditLogService, AuditOutcome, Audited, HealthService, ProductService, ServiceContext,
    ServiceError, ServiceResult, StockService,
};
