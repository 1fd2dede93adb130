//! # Core Abstractions
//!
//! Foundational pieces used throughout the client:
//!
//! - **[`error`]**: application error types (`AppError`, `Result<T>`)
//! - **[`service`]**: the [`service::CatalogService`] gateway trait for
//!   dependency injection and mock-backed tests
//!
//! ## Dependency Injection
//!
//! Everything that talks to the server takes an `Arc<dyn CatalogService>`:
//!
//! ```rust,ignore
//! // In production: the real HTTP gateway
//! let gateway: Arc<dyn CatalogService> = Arc::new(ApiClient::new(base_url, api_key));
//!
//! // In tests: a canned mock
//! let gateway: Arc<dyn CatalogService> = Arc::new(MockCatalog::default());
//! ```

pub mod error;
pub mod service;

// Re-export commonly used types for convenience
pub use error::{AppError, Result};
pub use service::CatalogService;
