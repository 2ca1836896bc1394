//! Product entity <-> model mapper

use inventory_core::{Product, ProductId};

use crate::models::ProductModel;

/// Convert ProductModel to Product entity
impl From<ProductModel> for Product {
    fn from(model: ProductModel) -> Self {
        Product {
            id: ProductId::from_uuid(model.id),
            name: model.name,
            description: model.description,
            stock_quantity: model.stock_quantity,
            low_stock_threshold: model.low_stock_threshold,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
