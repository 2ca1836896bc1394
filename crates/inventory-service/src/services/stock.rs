//! Stock service
//!
//! Increases and decreases a product's stock. The store applies each change
//! as one guarded write, so a decrease that races another decrease can be
//! refused after the initial check passed; the refusal is reported with the
//! stock level read back from the store.

use tracing::{info, instrument};

use inventory_core::{AuditLogEntry, ProductId, StockAdjustment, StockDirection};

use crate::dto::{ProductResponse, StockAdjustmentRequest};

use super::audit::{record, Audited};
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Stock service
pub struct StockService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> StockService<'a> {
    /// Create a new StockService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Add `request.amount` units to the product's stock
    #[instrument(skip(self, request))]
    pub async fn increase_stock(
        &self,
        product_id: ProductId,
        request: StockAdjustmentRequest,
    ) -> ServiceResult<Audited<ProductResponse>> {
        self.adjust(product_id, StockDirection::Increase, request).await
    }

    /// Remove `request.amount` units from the product's stock
    #[instrument(skip(self, request))]
    pub async fn decrease_stock(
        &self,
        product_id: ProductId,
        request: StockAdjustmentRequest,
    ) -> ServiceResult<Audited<ProductResponse>> {
        self.adjust(product_id, StockDirection::Decrease, request).await
    }

    async fn adjust(
        &self,
        product_id: ProductId,
        direction: StockDirection,
        request: StockAdjustmentRequest,
    ) -> ServiceResult<Audited<ProductResponse>> {
        let amount = request.positive_amount()?;

        let product = self
            .ctx
            .product_repo()
            .find_by_id(product_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Product", product_id.to_string()))?;

        let planned = StockAdjustment::plan(&product, direction, amount)?;

        let Some(updated) = self
            .ctx
            .product_repo()
            .adjust_stock(product_id, direction.delta(amount))
            .await?
        else {
            return Err(self.refused(product_id, amount).await);
        };

        // The stored value may have moved since the read above
        let adjustment = planned.settled_at(updated.stock_quantity);

        info!(
            product_id = %product_id,
            direction = direction.as_str(),
            amount,
            previous_quantity = adjustment.previous_quantity,
            new_quantity = adjustment.new_quantity,
            "Stock adjusted"
        );

        let entry = AuditLogEntry::new(product_id, adjustment.audit_change());
        let audit = record(self.ctx, entry).await;
        Ok(Audited::new(ProductResponse::from(updated), audit))
    }

    /// Explain why the store refused a planned adjustment
    async fn refused(&self, product_id: ProductId, amount: i64) -> ServiceError {
        match self.ctx.product_repo().find_by_id(product_id).await {
            Ok(Some(current)) => ServiceError::InsufficientStock {
                current_stock: current.stock_quantity,
                requested_amount: amount,
            },
            Ok(None) => ServiceError::not_found("Product", product_id.to_string()),
            Err(e) => e.into(),
        }
    }
}
