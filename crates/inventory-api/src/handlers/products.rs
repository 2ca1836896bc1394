//! Product handlers
//!
//! Endpoints for product management.

use axum::{extract::State, Json};
use inventory_service::{
    CreateProductRequest, ProductResponse, ProductService, UpdateProductRequest,
};

use crate::extractors::{ProductPath, ValidatedJson};
use crate::response::{ApiResult, AuditedJson, Created};
use crate::state::AppState;

/// List all products
///
/// GET /products
pub async fn list_products(State(state): State<AppState>) -> ApiResult<Json<Vec<ProductResponse>>> {
    let service = ProductService::new(state.service_context());
    Ok(Json(service.list_products().await?))
}

/// List products at or below their low-stock threshold
///
/// GET /products/low-stock
pub async fn list_low_stock(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<ProductResponse>>> {
    let service = ProductService::new(state.service_context());
    Ok(Json(service.list_low_stock().await?))
}

/// Get product by ID
///
/// GET /products/{id}
pub async fn get_product(
    State(state): State<AppState>,
    ProductPath(product_id): ProductPath,
) -> ApiResult<Json<ProductResponse>> {
    let service = ProductService::new(state.service_context());
    Ok(Json(service.get_product(product_id).await?))
}

/// Create a new product
///
/// POST /products
pub async fn create_product(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateProductRequest>,
) -> ApiResult<Created<AuditedJson<ProductResponse>>> {
    let service = ProductService::new(state.service_context());
    let created = service.create_product(request).await?;
    Ok(Created(AuditedJson(created)))
}

/// Update product fields
///
/// PUT /products/{id}
pub async fn update_product(
    State(state): State<AppState>,
    ProductPath(product_id): ProductPath,
    ValidatedJson(request): ValidatedJson<UpdateProductRequest>,
) -> ApiResult<AuditedJson<ProductResponse>> {
    let service = ProductService::new(state.service_context());
    Ok(AuditedJson(service.update_product(product_id, request).await?))
}

/// Delete product, answering with the deleted record
///
/// DELETE /products/{id}
pub async fn delete_product(
    State(state): State<AppState>,
    ProductPath(product_id): ProductPath,
) -> ApiResult<AuditedJson<ProductResponse>> {
    let service = ProductService::new(state.service_context());
    Ok(AuditedJson(service.delete_product(product_id).await?))
}
