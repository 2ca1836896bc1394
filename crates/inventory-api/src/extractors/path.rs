//! Path parameter extractors
//!
//! Type-safe extraction of product identifiers from path parameters.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use inventory_core::ProductId;

use crate::response::ApiError;

/// A product id taken from the single path parameter of the route
///
/// A value that is not a valid id is rejected with 400.
#[derive(Debug, Clone, Copy)]
pub struct ProductPath(pub ProductId);

#[async_trait]
impl<S> FromRequestParts<S> for ProductPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.body_text()))?;

        ProductId::parse(&raw)
            .map(ProductPath)
            .map_err(|_| ApiError::invalid_path("Invalid product id"))
    }
}
