use serde::{Deserialize, Serialize};

use super::tag::TagItem;

/// A scene as presented to the client: display fields plus the mutable
/// server-tracked counters the feed keeps in sync.
///
/// Exactly one `SceneItem` per id exists within a loaded feed; list order is
/// server-assigned and stable for the lifetime of one load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SceneItem {
    pub id: String,
    pub title: String,
    /// Fully resolved screenshot URL (base + apikey already applied).
    pub thumbnail_url: Option<String>,
    /// Fully resolved stream URL for the playback surface.
    pub stream_url: Option<String>,
    /// Media duration in seconds, 0.0 when the server reports no file.
    pub duration: f64,
    pub width: Option<i64>,
    pub height: Option<i64>,
    /// Rating on the server's 0-100 scale; `None` means unrated.
    pub rating100: Option<i64>,
    pub o_count: i64,
    pub play_count: i64,
    /// Total recorded playback in seconds.
    pub play_duration: f64,
    pub tags: Vec<TagItem>,
    pub performers: Vec<PerformerRef>,
}

/// Minimal performer reference embedded in a scene.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PerformerRef {
    pub id: String,
    pub name: String,
    pub image_url: Option<String>,
}

impl SceneItem {
    /// Star rating (1-5) derived from the 0-100 scale, `None` when unrated.
    pub fn stars(&self) -> Option<i64> {
        self.rating100.map(|r| r / 20)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene(rating100: Option<i64>) -> SceneItem {
        SceneItem {
            id: "s1".to_string(),
            title: "Untitled".to_string(),
            thumbnail_url: None,
            stream_url: None,
            duration: 0.0,
            width: None,
            height: None,
            rating100,
            o_count: 0,
            play_count: 0,
            play_duration: 0.0,
            tags: vec![],
            performers: vec![],
        }
    }

    #[test]
    fn test_stars_from_rating100() {
        assert_eq!(scene(Some(100)).stars(), Some(5));
        assert_eq!(scene(Some(80)).stars(), Some(4));
        assert_eq!(scene(Some(20)).stars(), Some(1));
        assert_eq!(scene(None).stars(), None);
    }
}
