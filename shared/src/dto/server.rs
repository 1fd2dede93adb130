use serde::{Deserialize, Serialize};

/// Aggregate library statistics shown on the settings screen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerStats {
    pub scene_count: i64,
    pub image_count: i64,
    pub performer_count: i64,
    /// Library-wide recorded playback, in seconds.
    pub total_play_duration: f64,
    pub total_o_count: i64,
}

/// Server build information.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VersionInfo {
    pub version: String,
    pub build_time: Option<String>,
}
