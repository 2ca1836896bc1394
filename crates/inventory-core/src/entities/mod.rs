//! Domain entities - core business objects

use chrono::{DateTime, SubsecRound, Utc};

mod audit_log;
mod product;
mod stock;

pub use audit_log::{
    AuditAction, AuditChange, AuditLogEntry, DecreasedStock, IncreasedStock, ProductSnapshot,
    StockLevel,
};
pub use product::{NewProduct, Product, ProductPatch, DEFAULT_LOW_STOCK_THRESHOLD};
pub use stock::{StockAdjustment, StockDirection};

/// Current time at the microsecond precision PostgreSQL `TIMESTAMPTZ` keeps,
/// so a value read back equals the value written
pub fn timestamp_now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}
