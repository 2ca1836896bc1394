//! PostgreSQL implementation of AuditLogRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use inventory_core::{AuditLogEntry, AuditLogRepository, ProductId, RepoResult};

use crate::mappers::AuditLogInsert;
use crate::models::AuditLogModel;

use super::error::map_db_error;

/// PostgreSQL implementation of AuditLogRepository
#[derive(Clone)]
pub struct PgAuditLogRepository {
    pool: PgPool,
}

impl PgAuditLogRepository {
    /// Create a new PgAuditLogRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuditLogRepository for PgAuditLogRepository {
    #[instrument(skip(self, entry), fields(product_id = %entry.product_id, action = %entry.action()))]
    async fn append(&self, entry: &AuditLogEntry) -> RepoResult<()> {
        let insert = AuditLogInsert::new(entry)?;

        sqlx::query(
            r"
            INSERT INTO audit_logs (id, product_id, action_type, old_values, new_values, timestamp)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(insert.id)
        .bind(insert.product_id)
        .bind(insert.action_type)
        .bind(insert.old_values)
        .bind(insert.new_values)
        .bind(entry.timestamp)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_product(&self, product_id: ProductId) -> RepoResult<Vec<AuditLogEntry>> {
        let results = sqlx::query_as::<_, AuditLogModel>(
            r"
            SELECT id, product_id, action_type, old_values, new_values, timestamp
            FROM audit_logs
            WHERE product_id = $1
            ORDER BY timestamp DESC
            ",
        )
        .bind(product_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(AuditLogEntry::try_from).collect()
    }
}
