//! # Axum Helpers
//!
//! Utilities, middleware, and helpers for building the catalog's Axum services.
//!
//! ## Modules
//!
//! - **[`server`]**: Router setup, health endpoint, graceful shutdown
//! - **[`http`]**: HTTP middleware (CORS, security headers)
//! - **[`errors`]**: Structured error responses with error codes
//! - **[`extractors`]**: Validated JSON extractor
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::{create_production_app, create_router, parse_allowed_origins};
//! use core_config::server::ServerConfig;
//! use std::time::Duration;
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let origins = parse_allowed_origins("http://localhost:5173")?;
//!     let router = create_router::<ApiDoc>(Router::new(), origins);
//!     create_production_app(router, &ServerConfig::default(), Duration::from_secs(10), async {}).await?;
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

// Re-export server types
pub use server::{
    HealthResponse, ShutdownCoordinator, create_production_app, create_router,
    health_router, shutdown_signal,
};

// Re-export HTTP middleware
pub use http::{
    create_cors_layer, parse_allowed_origins, security_headers,
};

// Re-export error types
pub use errors::{AppError, ErrorCode, ErrorResponse};

// Re-export extractors
pub use extractors::ValidatedJson;
