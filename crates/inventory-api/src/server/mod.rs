//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use inventory_common::{AppConfig, AppError, AppResult, StorageBackend};
use inventory_db::{create_pool, MemoryStore};
use inventory_service::ServiceContext;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = apply_middleware(create_router(), state.config());
    router.with_state(state)
}

/// Connect the configured store and create AppState
pub async fn create_app_state(config: AppConfig) -> AppResult<AppState> {
    let service_context = match config.database.backend() {
        StorageBackend::Memory => {
            warn!("Using the in-memory store; data is lost on shutdown");
            ServiceContext::memory(Arc::new(MemoryStore::new()))
        }
        StorageBackend::Postgres(_) => {
            info!("Connecting to PostgreSQL...");
            let pool = create_pool(&config.database)
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;
            info!("PostgreSQL connection established");
            ServiceContext::postgres(pool)
        }
    };

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server on an already bound listener
pub async fn serve(listener: TcpListener, app: Router) -> AppResult<()> {
    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Server(e.to_string()))
}

/// Bind `addr` and run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> AppResult<()> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Server(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("Server listening on http://{}", addr);

    serve(listener, app).await
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> AppResult<()> {
    let addr: SocketAddr = config
        .api
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid listen address: {}", e)))?;

    let state = create_app_state(config).await?;
    let app = create_app(state);

    run_server(app, addr).await
}
