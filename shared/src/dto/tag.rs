use serde::{Deserialize, Serialize};

/// A tag catalog entry. Tag sets on a scene are unique by `id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TagItem {
    pub id: String,
    pub name: String,
}

impl TagItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
