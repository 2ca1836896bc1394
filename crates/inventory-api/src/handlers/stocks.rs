//! Stock handlers
//!
//! Endpoints for increasing and decreasing a product's stock.

use axum::extract::State;
use inventory_service::{ProductResponse, StockAdjustmentRequest, StockService};

use crate::extractors::{ProductPath, ValidatedJson};
use crate::response::{ApiResult, AuditedJson};
use crate::state::AppState;

/// Increase stock
///
/// POST /stocks/{id}/increase
pub async fn increase_stock(
    State(state): State<AppState>,
    ProductPath(product_id): ProductPath,
    ValidatedJson(request): ValidatedJson<StockAdjustmentRequest>,
) -> ApiResult<AuditedJson<ProductResponse>> {
    let service = StockService::new(state.service_context());
    Ok(AuditedJson(service.increase_stock(product_id, request).await?))
}

/// Decrease stock; refused with 400 when it would go negative
///
/// POST /stocks/{id}/decrease
pub async fn decrease_stock(
    State(state): State<AppState>,
    ProductPath(product_id): ProductPath,
    ValidatedJson(request): ValidatedJson<StockAdjustmentRequest>,
) -> ApiResult<AuditedJson<ProductResponse>> {
    let service = StockService::new(state.service_context());
    Ok(AuditedJson(service.decrease_stock(product_id, request).await?))
}
