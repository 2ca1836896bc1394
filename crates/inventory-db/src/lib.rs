//! # inventory-db
//!
//! Database layer implementing the repository traits from `inventory-core`.
//!
//! ## Overview
//!
//! - Connection pool management for PostgreSQL
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - PostgreSQL repository implementations
//! - [`MemoryStore`], an in-process store implementing the same traits
//!
//! The table layout lives in `schema/inventory.sql` and is applied by the
//! operator before the service starts.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use inventory_common::AppConfig;
//! use inventory_core::ProductRepository;
//! use inventory_db::{create_pool, PgProductRepository};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::from_env()?;
//!     let pool = create_pool(&config.database).await?;
//!     let products = PgProductRepository::new(pool);
//!
//!     let low = products.list_low_stock().await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use memory::MemoryStore;
pub use pool::{create_pool, PgPool, SCHEMA_SQL};
pub use repositories::{PgAuditLogRepository, PgProductRepository};
