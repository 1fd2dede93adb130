//! # Data Transfer Objects (DTOs)
//!
//! Data structures for communication with the media catalog server.
//!
//! ## Module Organization
//!
//! - [`graphql`] - GraphQL request/response envelope shared by every call
//! - [`scene`] - Scene listings, embedded tag and performer references
//! - [`performer`] - Performer listings and details
//! - [`image`] - Image listings
//! - [`tag`] - Tag catalog entries
//! - [`server`] - Server statistics and version information
//!
//! ## Serialization Format
//!
//! All DTOs use `serde_json`:
//!
//! - **Field naming**: snake_case, with `#[serde(rename)]` where the server's
//!   GraphQL schema spells a field differently (`rating100`, `o_counter`)
//! - **Optional fields**: deserialized as `Option<T>`, defaulting where the
//!   server may omit them entirely
//! - **All types**: implement both `Serialize` and `Deserialize`

pub mod graphql;
pub mod image;
pub mod performer;
pub mod scene;
pub mod server;
pub mod tag;

pub use graphql::*;
pub use image::*;
pub use performer::*;
pub use scene::*;
pub use server::*;
pub use tag::*;
