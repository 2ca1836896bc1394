//! PostgreSQL implementation of ProductRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use inventory_core::{timestamp_now, Product, ProductId, ProductRepository, RepoResult};

use crate::models::ProductModel;

use super::error::{map_db_error, map_stock_error, product_not_found};

/// PostgreSQL implementation of ProductRepository
#[derive(Clone)]
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    /// Create a new PgProductRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: ProductId) -> RepoResult<Option<Product>> {
        let result = sqlx::query_as::<_, ProductModel>(
            r"
            SELECT id, name, description, stock_quantity, low_stock_threshold, created_at, updated_at
            FROM products
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Product::from))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Product>> {
        let results = sqlx::query_as::<_, ProductModel>(
            r"
            SELECT id, name, description, stock_quantity, low_stock_threshold, created_at, updated_at
            FROM products
            ORDER BY created_at ASC, id ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Product::from).collect())
    }

    #[instrument(skip(self))]
    async fn list_low_stock(&self) -> RepoResult<Vec<Product>> {
        let results = sqlx::query_as::<_, ProductModel>(
            r"
            SELECT id, name, description, stock_quantity, low_stock_threshold, created_at, updated_at
            FROM products
            WHERE stock_quantity <= low_stock_threshold
            ORDER BY created_at ASC, id ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Product::from).collect())
    }

    #[instrument(skip(self, product), fields(product_id = %product.id))]
    async fn create(&self, product: &Product) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO products (id, name, description, stock_quantity, low_stock_threshold, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(product.id.into_inner())
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.stock_quantity)
        .bind(product.low_stock_threshold)
        .bind(product.created_at)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, product), fields(product_id = %product.id))]
    async fn update(&self, product: &Product) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE products
            SET name = $2, description = $3, stock_quantity = $4, low_stock_threshold = $5, updated_at = $6
            WHERE id = $1
            ",
        )
        .bind(product.id.into_inner())
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.stock_quantity)
        .bind(product.low_stock_threshold)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(product_not_found(product.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: ProductId) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM products
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(product_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn adjust_stock(&self, id: ProductId, delta: i64) -> RepoResult<Option<Product>> {
        // Single conditional write: concurrent decreases cannot overdraw
        let result = sqlx::query_as::<_, ProductModel>(
            r"
            UPDATE products
            SET stock_quantity = stock_quantity + $2, updated_at = $3
            WHERE id = $1 AND stock_quantity + $2 >= 0
            RETURNING id, name, description, stock_quantity, low_stock_threshold, created_at, updated_at
            ",
        )
        .bind(id.into_inner())
        .bind(delta)
        .bind(timestamp_now())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_stock_error)?;

        Ok(result.map(Product::from))
    }

    #[instrument(skip(self))]
    async fn ping(&self) -> RepoResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }
}
