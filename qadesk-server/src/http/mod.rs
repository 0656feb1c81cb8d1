//! HTTP server layer
//!
//! Axum server with:
//! - `/api/users` and `/api/items` routes
//! - Request tracing
//! - Graceful shutdown
//! - JSON error responses

pub mod server;
pub mod error;
pub mod extractors;
pub mod routes;

pub use server::{build_router, run_server, ServerConfig};
pub use error::{ApiError, ErrorKey};
