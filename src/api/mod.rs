//! HTTP API layer.
//!
//! Exposes care plan generation as HTTP endpoints. The router is
//! composable — `api_router()` returns a `Router` that can be mounted on
//! any axum server instance; `server::run` binds it for the process.

pub mod endpoints;
pub mod error;
pub mod middleware;
pub mod router;
pub mod server;
pub mod types;

pub use error::ApiError;
pub use router::api_router;
pub use types::ApiContext;
