//! Audit log handlers

use axum::{
    extract::{Path, State},
    Json,
};
use inventory_service::{AuditLogResponse, AuditLogService};

use crate::state::AppState;

/// Audit entries for a product, newest first
///
/// Any id, well-formed or not, answers 200; unknown ids give an empty list.
///
/// GET /products/{productId}/audit-logs
pub async fn get_product_audit_logs(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Json<Vec<AuditLogResponse>> {
    let service = AuditLogService::new(state.service_context());
    Json(service.get_product_audit_logs(&product_id).await)
}
