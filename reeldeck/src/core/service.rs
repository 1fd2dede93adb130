//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and
//! modularity. The feed synchronizer and the per-screen tasks talk to the
//! catalog server exclusively through [`CatalogService`], so tests can swap
//! in a mock gateway.

use async_trait::async_trait;
use shared::{ImageItem, PerformerItem, SceneItem, ServerStats, TagItem, VersionInfo};

use crate::services::api::scenes::FeedOrder;
use crate::services::api::tags::TagCreateError;

/// Remote feed gateway: every list/detail/mutation request the client issues.
///
/// All methods return `Result<T, String>` where the error carries a kind tag
/// and message (`Network error: …`, `Server error (status): …`); the one
/// typed exception is [`create_tag`](CatalogService::create_tag), whose
/// conflict variant drives the fallback-lookup flow.
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Fetch a page of scenes in the requested order.
    async fn find_scenes(&self, order: FeedOrder, limit: usize) -> Result<Vec<SceneItem>, String>;

    /// Fetch the most recently added performers.
    async fn find_performers(&self, limit: usize) -> Result<Vec<PerformerItem>, String>;

    /// Fetch the most recently added images.
    async fn find_images(&self, limit: usize) -> Result<Vec<ImageItem>, String>;

    /// Fetch a single scene by id. `Ok(None)` means the id is unknown.
    async fn find_scene(&self, id: &str) -> Result<Option<SceneItem>, String>;

    /// Fetch a single performer by id. `Ok(None)` means the id is unknown.
    async fn find_performer(&self, id: &str) -> Result<Option<PerformerItem>, String>;

    /// Update a performer's rating and/or favorite flag. Omitted fields are
    /// left untouched server-side.
    async fn update_performer(
        &self,
        id: &str,
        rating100: Option<i64>,
        favorite: Option<bool>,
    ) -> Result<(), String>;

    /// Set a scene's rating on the 0-100 scale.
    async fn set_scene_rating(&self, id: &str, rating100: i64) -> Result<(), String>;

    /// Replace a scene's tag set with exactly `tag_ids` (replace semantics,
    /// idempotent for a given target set).
    async fn set_scene_tags(&self, id: &str, tag_ids: &[String]) -> Result<(), String>;

    /// Increment a scene's O-count; returns the authoritative new value.
    async fn increment_o_count(&self, id: &str) -> Result<i64, String>;

    /// Reset a scene's O-count; returns the authoritative new value.
    async fn reset_o_count(&self, id: &str) -> Result<i64, String>;

    /// Increment a scene's play count; returns the authoritative new value.
    async fn increment_play_count(&self, id: &str) -> Result<i64, String>;

    /// Append watched seconds to a scene's recorded play duration.
    async fn save_play_duration(&self, id: &str, seconds: f64) -> Result<(), String>;

    /// Fetch the full tag catalog.
    async fn all_tags(&self) -> Result<Vec<TagItem>, String>;

    /// Create a tag; a name collision surfaces as
    /// [`TagCreateError::Conflict`].
    async fn create_tag(&self, name: &str) -> Result<TagItem, TagCreateError>;

    /// Fetch aggregate library statistics.
    async fn stats(&self) -> Result<ServerStats, String>;

    /// Fetch the server's build information.
    async fn version(&self) -> Result<VersionInfo, String>;
}
