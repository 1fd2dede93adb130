//! # ReelDeck - Library Root
//!
//! A native desktop client for self-hosted media catalog servers, built on
//! **egui/eframe**. This library crate contains all modules used by the
//! binary crate (`main.rs`).
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │              reeldeck (this crate)                   │
//! ├──────────────────────────────────────────────────────┤
//! │  egui / eframe - Immediate-mode GUI + native window  │
//! │  Tokio         - Async runtime                       │
//! │  Reqwest       - HTTP client (GraphQL over HTTP)     │
//! │  shared        - Wire DTOs + formatting helpers      │
//! └──────────────────────┬───────────────────────────────┘
//!                        │ GraphQL over HTTP (ApiKey header)
//!                        ▼
//!            ┌─────────────────────────┐
//!            │  Media catalog server   │
//!            │  (self-hosted)          │
//!            └─────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **[`app`]**: application state, events, handlers, and async tasks
//! - **[`core`]**: error types and the [`core::service::CatalogService`]
//!   gateway trait
//! - **[`feed`]**: the feed state synchronizer and session playback tracker
//!   backing the reels screen
//! - **[`services`]**: the GraphQL gateway and connection config persistence
//! - **[`ui`]**: egui screens, widgets, and theming
//! - **[`utils`]**: shared Tokio runtime and input validation
//!
//! ## State Management
//!
//! Application state lives in `Arc<RwLock<AppState>>`: rendering clones a
//! snapshot each frame, handlers lock briefly, async tasks report back over
//! an unbounded `async_channel`. The reels feed is the exception: its list
//! state is owned by [`feed::FeedSynchronizer`], which applies every
//! server-confirmed patch itself and discards superseded load responses.
//!
//! ## Testing
//!
//! ```bash
//! cargo test --workspace
//! ```
//!
//! Gateway-dependent logic is tested against mock implementations of
//! [`core::service::CatalogService`].

pub mod app;
pub mod core;
pub mod feed;
pub mod services;
pub mod ui;
pub mod utils;

// Re-export commonly used types for convenience
pub use app::{App, AppEvent, AppState, Screen};
pub use crate::core::{AppError, Result};
