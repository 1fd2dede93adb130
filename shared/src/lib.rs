//! # Shared Catalog Types
//!
//! This library defines the data contract between the ReelDeck client and a
//! self-hosted media catalog server speaking GraphQL over HTTP.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::graphql`]**: GraphQL request/response envelope
//!   - **[`dto::scene`]**: Scenes and their embedded tag/performer refs
//!   - **[`dto::performer`]**: Performer listings and details
//!   - **[`dto::image`]**: Image listings
//!   - **[`dto::tag`]**: Tag catalog entries
//!   - **[`dto::server`]**: Server statistics and version info
//! - **[`utils`]**: Display formatting helpers (durations, titles, resolutions)
//!
//! ## Wire Format
//!
//! All DTOs serialize to JSON with default `serde` behavior: snake_case field
//! names, optional fields omitted when `None`. Fields whose wire spelling
//! differs from the Rust name (e.g. `rating100`, `o_counter`) carry explicit
//! `#[serde(rename)]` attributes.

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
