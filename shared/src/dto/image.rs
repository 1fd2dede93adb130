use serde::{Deserialize, Serialize};

/// An image listing entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageItem {
    pub id: String,
    pub title: String,
    /// Fully resolved thumbnail URL.
    pub thumbnail_url: Option<String>,
    /// Fully resolved full-size image URL.
    pub image_url: Option<String>,
}
