use serde::{Deserialize, Serialize};

/// A performer listing entry, also used as the detail payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PerformerItem {
    pub id: String,
    pub name: String,
    /// Fully resolved portrait URL.
    pub image_url: Option<String>,
    /// Rating on the server's 0-100 scale; `None` means unrated.
    pub rating100: Option<i64>,
    pub favorite: bool,
    pub scene_count: i64,
    pub o_count: Option<i64>,
}
