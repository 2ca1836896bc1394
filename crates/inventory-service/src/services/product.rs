//! Product service
//!
//! Handles the product lifecycle: creation, field updates, deletion and
//! queries. Every mutation is followed by an audit entry.

use tracing::{info, instrument};

use inventory_core::{AuditLogEntry, Product, ProductId};

use crate::dto::{CreateProductRequest, ProductResponse, UpdateProductRequest};

use super::audit::{record, Audited};
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Product service
pub struct ProductService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ProductService<'a> {
    /// Create a new ProductService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a new product
    #[instrument(skip(self, request))]
    pub async fn create_product(
        &self,
        request: CreateProductRequest,
    ) -> ServiceResult<Audited<ProductResponse>> {
        let product = Product::new(ProductId::generate(), request.into_new_product()?)?;

        self.ctx.product_repo().create(&product).await?;

        info!(
            product_id = %product.id,
            stock_quantity = product.stock_quantity,
            "Product created"
        );

        let audit = record(self.ctx, AuditLogEntry::created(&product)).await;
        Ok(Audited::new(ProductResponse::from(product), audit))
    }

    /// Get product by ID
    #[instrument(skip(self))]
    pub async fn get_product(&self, product_id: ProductId) -> ServiceResult<ProductResponse> {
        let product = self.get_product_entity(product_id).await?;
        Ok(ProductResponse::from(product))
    }

    /// Get product entity by ID
    #[instrument(skip(self))]
    pub async fn get_product_entity(&self, product_id: ProductId) -> ServiceResult<Product> {
        self.ctx
            .product_repo()
            .find_by_id(product_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Product", product_id.to_string()))
    }

    /// List all products, oldest first
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> ServiceResult<Vec<ProductResponse>> {
        let products = self.ctx.product_repo().list().await?;
        Ok(products.into_iter().map(ProductResponse::from).collect())
    }

    /// List products at or below their low-stock threshold
    #[instrument(skip(self))]
    pub async fn list_low_stock(&self) -> ServiceResult<Vec<ProductResponse>> {
        let products = self.ctx.product_repo().list_low_stock().await?;
        Ok(products.into_iter().map(ProductResponse::from).collect())
    }

    /// Apply a partial update
    #[instrument(skip(self, request))]
    pub async fn update_product(
        &self,
        product_id: ProductId,
        request: UpdateProductRequest,
    ) -> ServiceResult<Audited<ProductResponse>> {
        let before = self.get_product_entity(product_id).await?;

        let mut after = before.clone();
        after.apply(request.into())?;

        self.ctx.product_repo().update(&after).await?;

        info!(product_id = %product_id, "Product updated");

        let audit = record(self.ctx, AuditLogEntry::updated(&before, &after)).await;
        Ok(Audited::new(ProductResponse::from(after), audit))
    }

    /// Delete a product, returning the deleted record
    #[instrument(skip(self))]
    pub async fn delete_product(
        &self,
        product_id: ProductId,
    ) -> ServiceResult<Audited<ProductResponse>> {
        let product = self.get_product_entity(product_id).await?;

        self.ctx.product_repo().delete(product_id).await?;

        info!(product_id = %product_id, "Product deleted");

        let audit = record(self.ctx, AuditLogEntry::deleted(&product)).await;
        Ok(Audited::new(ProductResponse::from(product), audit))
    }
}
