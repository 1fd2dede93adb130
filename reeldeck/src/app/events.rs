//! # Application Events
//!
//! Event types for async task communication between background tasks and the
//! frame loop. Reels feed results do not appear here: the feed synchronizer
//! owns and patches its own state cell.

use shared::{ImageItem, PerformerItem, SceneItem, ServerStats, TagItem, VersionInfo};

/// Async task results sent to the frame loop
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Home rail: recent scenes
    HomeScenesResult(Result<Vec<SceneItem>, String>),
    /// Home rail: recent performers
    HomePerformersResult(Result<Vec<PerformerItem>, String>),
    /// Home rail: recent images
    HomeImagesResult(Result<Vec<ImageItem>, String>),
    /// Browse grid: scenes tab
    BrowseScenesResult(Result<Vec<SceneItem>, String>),
    /// Browse grid: images tab
    BrowseImagesResult(Result<Vec<ImageItem>, String>),
    /// Browse grid: performers tab
    BrowsePerformersResult(Result<Vec<PerformerItem>, String>),
    /// Scene detail payload
    SceneDetailResult(Result<Option<SceneItem>, String>),
    /// Performer detail payload
    PerformerDetailResult(Result<Option<PerformerItem>, String>),
    /// Confirmed performer edit: patch the loaded detail with these values
    PerformerUpdateResult {
        id: String,
        rating100: Option<i64>,
        favorite: Option<bool>,
        result: Result<(), String>,
    },
    /// Tag catalog for the add-tag dialog
    AvailableTagsResult(Result<Vec<TagItem>, String>),
    /// Server statistics for the settings screen
    StatsResult(Result<ServerStats, String>),
    /// Server version for the settings screen
    VersionResult(Result<VersionInfo, String>),
}
