//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers and making HTTP requests.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use inventory_api::{create_app, create_app_state, AppState};
use inventory_common::AppConfig;
use inventory_core::{AuditLogEntry, AuditLogRepository, DomainError, ProductId, RepoResult};
use inventory_db::MemoryStore;
use inventory_service::ServiceContext;
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// API prefix all routes live under
pub const API: &str = "/api/v1";

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server on a fresh in-memory store
    pub async fn start() -> Result<Self> {
        let state = create_app_state(AppConfig::in_memory(0)).await?;
        Self::start_with_state(state).await
    }

    /// Start a test server whose audit store rejects every write
    pub async fn start_with_failing_audit() -> Result<Self> {
        let context = ServiceContext::new(
            Arc::new(MemoryStore::new()),
            Arc::new(UnavailableAuditLog),
        );
        Self::start_with_state(AppState::new(context, AppConfig::in_memory(0))).await
    }

    /// Start a test server with a prepared state
    pub async fn start_with_state(state: AppState) -> Result<Self> {
        let app = create_app(state);

        // Port 0 lets the OS pick a free port
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            inventory_api::serve(listener, app).await.ok();
        });

        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            addr,
            client,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}{}", self.addr, API)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.post(&url).json(body).send().await?)
    }

    /// Make a POST request with a raw body
    pub async fn post_raw(&self, path: &str, content_type: &str, body: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .post(&url)
            .header("Content-Type", content_type)
            .body(body.to_string())
            .send()
            .await?)
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.put(&url).json(body).send().await?)
    }

    /// Make a DELETE request
    pub async fn delete(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.delete(&url).send().await?)
    }
}

/// Audit store that is always unreachable
pub struct UnavailableAuditLog;

#[async_trait]
impl AuditLogRepository for UnavailableAuditLog {
    async fn append(&self, _entry: &AuditLogEntry) -> RepoResult<()> {
        Err(DomainError::DatabaseError("audit store unavailable".to_string()))
    }

    async fn find_by_product(&self, _product_id: ProductId) -> RepoResult<Vec<AuditLogEntry>> {
        Err(DomainError::DatabaseError("audit store unavailable".to_string()))
    }
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(())
}
