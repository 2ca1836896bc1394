//! Route definitions
//!
//! All API routes organized by resource and mounted under /api/v1.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{audit_logs, health, products, stocks};
use crate::state::AppState;

/// Prefix every route is mounted under
pub const API_PREFIX: &str = "/api/v1";

/// Create the main API router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new().nest(API_PREFIX, api_v1_routes())
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(health_routes())
        .merge(product_routes())
        .merge(stock_routes())
}

/// Health check routes
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Product routes
///
/// `low-stock` is a static segment, so it wins over `:id`.
fn product_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/products",
            get(products::list_products).post(products::create_product),
        )
        .route("/products/low-stock", get(products::list_low_stock))
        .route(
            "/products/:id",
            get(products::get_product)
                .put(products::update_product)
                .delete(products::delete_product),
        )
        .route(
            "/products/:id/audit-logs",
            get(audit_logs::get_product_audit_logs),
        )
}

/// Stock adjustment routes
fn stock_routes() -> Router<AppState> {
    Router::new()
        .route("/stocks/:id/increase", post(stocks::increase_stock))
        .route("/stocks/:id/decrease", post(stocks::decrease_stock))
}

