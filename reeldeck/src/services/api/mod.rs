//! # Catalog Gateway
//!
//! GraphQL-over-HTTP client for the media catalog server, split by domain:
//!
//! - [`client`] - the [`ApiClient`] itself: request envelope, auth header,
//!   media URL resolution
//! - [`scenes`] - scene queries and counter/rating/tag mutations
//! - [`performers`] - performer queries and updates
//! - [`images`] - image queries
//! - [`tags`] - tag catalog and creation
//! - [`server`] - library statistics and version

pub mod client;
pub mod images;
pub mod performers;
pub mod scenes;
pub mod server;
pub mod tags;

pub use client::ApiClient;
pub use scenes::FeedOrder;
pub use tags::TagCreateError;
