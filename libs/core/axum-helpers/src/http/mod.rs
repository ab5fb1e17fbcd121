//! HTTP middleware module.
//!
//! - CORS configuration
//! - Security headers
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::http::{create_cors_layer, parse_allowed_origins, security_headers};
//!
//! let origins = parse_allowed_origins("http://localhost:5173")?;
//! let app = Router::new()
//!     .layer(axum::middleware::from_fn(security_headers))
//!     .layer(create_cors_layer(origins));
//! ```

pub mod cors;
pub mod security;

pub use cors::{create_cors_layer, parse_allowed_origins};
pub use security::security_headers;
