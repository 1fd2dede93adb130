//! # Services Module
//!
//! External integrations for the client.
//!
//! ```text
//! services/
//! ├── api/        - GraphQL-over-HTTP gateway to the catalog server
//! │                 (scene/performer/image queries, counter and tag mutations)
//! └── config.rs   - Connection configuration persistence
//!                   (server URL, API key, theme mode)
//! ```
//!
//! ## Gateway
//!
//! [`api::ApiClient`] posts GraphQL documents to `<base>/graphql`, carrying
//! the API key in an `ApiKey` header. Media asset paths in responses are
//! resolved to absolute URLs with the key appended as an `apikey` query
//! parameter, because image and stream fetches happen outside the request
//! channel and cannot carry the header.
//!
//! Endpoint functions return `Result<T, String>` with kind-tagged messages;
//! no transport error escapes to the UI layer as a panic or an unhandled
//! `Result`.
//!
//! ## Thread Safety
//!
//! `ApiClient` wraps a `reqwest::Client` (internally pooled and thread-safe)
//! and immutable connection values, so it is shared across tasks as a plain
//! `Arc`.

pub mod api;
pub mod config;
