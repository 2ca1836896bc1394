//! Route handlers
//!
//! All HTTP request handlers organized by resource.

pub mod audit_logs;
pub mod health;
pub mod products;
pub mod stocks;
