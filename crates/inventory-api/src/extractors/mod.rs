//! Axum extractors for request handling
//!
//! Custom extractors for path identifiers and validated bodies.

mod path;
mod validated;

pub use path::ProductPath;
pub use validated::ValidatedJson;
