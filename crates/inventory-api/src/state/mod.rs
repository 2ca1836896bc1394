//! Shared handler state: the inventory services plus the loaded configuration

use std::sync::Arc;

use inventory_common::AppConfig;
use inventory_service::ServiceContext;

/// Cloned into every request; both fields are reference counted
#[derive(Clone)]
pub struct AppState {
    /// Product, stock and audit services over one storage backend
    service_context: Arc<ServiceContext>,
    config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(service_context: ServiceContext, config: AppConfig) -> Self {
        Self {
            service_context: Arc::new(service_context),
            config: Arc::new(config),
        }
    }

    /// Services used by the product and stock handlers
    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service_context", &"ServiceContext")
            .field("environment", &self.config.app.env)
            .finish()
    }
}
