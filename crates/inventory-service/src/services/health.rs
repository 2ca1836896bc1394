//! Health service
//!
//! Liveness and readiness reporting.

use tracing::{instrument, warn};

use crate::dto::{HealthResponse, ReadinessResponse};

use super::context::ServiceContext;

/// Health service
pub struct HealthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> HealthService<'a> {
    /// Create a new HealthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// The process is up
    pub fn liveness(&self) -> HealthResponse {
        HealthResponse::healthy()
    }

    /// The store answers
    #[instrument(skip(self))]
    pub async fn readiness(&self) -> ReadinessResponse {
        let database_healthy = match self.ctx.product_repo().ping().await {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "Readiness check failed");
                false
            }
        };

        ReadinessResponse::ready(database_healthy)
    }
}
