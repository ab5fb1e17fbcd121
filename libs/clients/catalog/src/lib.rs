//! Catalog client
//!
//! HTTP access to the catalog API plus the infinite-scroll browse
//! controller used by the terminal client.
//!
//! ```rust,no_run
//! use catalog_client::{Browser, BrowserConfig, HttpCatalogApi, DEFAULT_API_BASE};
//!
//! # async fn run() -> catalog_client::ClientResult<()> {
//! let api = HttpCatalogApi::new(DEFAULT_API_BASE)?;
//! let (handle, _task) = Browser::new(api, BrowserConfig::default()).spawn();
//! handle.type_query("nature").await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod browser;
pub mod debounce;
pub mod error;
pub mod feed;
pub mod viewport;

pub use api::{CatalogApi, DEFAULT_API_BASE, HttpCatalogApi};
pub use browser::{Browser, BrowserConfig, BrowserHandle, Command};
pub use debounce::{DEFAULT_DEBOUNCE, Debounce};
pub use error::{ClientError, ClientResult};
pub use feed::{FETCH_FAILED, FeedState, FetchRequest, Footer, PAGE_SIZE};
pub use viewport::{DEFAULT_SENTINEL_MARGIN, Viewport};
