//! # Tag Endpoints
//!
//! Tag catalog queries and tag creation. Creation gets a typed error because
//! a name collision is a recoverable condition the feed synchronizer handles
//! with a catalog lookup, not a hard failure.

use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

use shared::dto::graphql::GraphqlRequest;
use shared::TagItem;

use super::client::ApiClient;

/// Failure modes for tag creation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TagCreateError {
    /// A tag with this name already exists server-side.
    #[error("tag already exists")]
    Conflict,
    /// Any other failure, carrying the kind-tagged message.
    #[error("{0}")]
    Other(String),
}

/// Fetch the full tag catalog, sorted by name.
pub async fn all_tags(client: &ApiClient) -> Result<Vec<TagItem>, String> {
    let query = r#"
        query AllTags {
            allTags {
                id
                name
            }
        }
    "#;

    let data: AllTagsData = client.execute(GraphqlRequest::bare(query)).await?;

    let mut tags = data.all_tags;
    tags.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    Ok(tags)
}

/// Create a tag. A server-reported uniqueness violation is surfaced as
/// [`TagCreateError::Conflict`].
pub async fn create_tag(client: &ApiClient, name: &str) -> Result<TagItem, TagCreateError> {
    let query =
        "mutation TagCreate($input: TagCreateInput!) { tagCreate(input: $input) { id name } }";

    let result: Result<TagCreateData, String> = client
        .execute(GraphqlRequest::new(query, json!({ "input": { "name": name } })))
        .await;

    match result {
        Ok(data) => data
            .tag_create
            .ok_or_else(|| TagCreateError::Other("GraphQL error: tag creation returned no tag".to_string())),
        Err(message) => {
            if is_conflict(&message) {
                tracing::debug!(tag_name = %name, "Tag creation conflict, caller will fall back to lookup");
                Err(TagCreateError::Conflict)
            } else {
                Err(TagCreateError::Other(message))
            }
        }
    }
}

/// The server reports a name collision as a GraphQL error wrapping its
/// storage layer's uniqueness violation; match both spellings.
fn is_conflict(message: &str) -> bool {
    let lower = message.to_lowercase();
    lower.contains("unique") || lower.contains("already exists")
}

// ==================== TAG WIRE TYPES ====================

#[derive(Debug, Deserialize)]
struct AllTagsData {
    #[serde(rename = "allTags")]
    all_tags: Vec<TagItem>,
}

#[derive(Debug, Deserialize)]
struct TagCreateData {
    #[serde(rename = "tagCreate")]
    tag_create: Option<TagItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_detection() {
        assert!(is_conflict("GraphQL error: UNIQUE constraint failed: tags.name"));
        assert!(is_conflict("GraphQL error: tag with name 'x' already exists"));
        assert!(!is_conflict("Network error: connection refused"));
        assert!(!is_conflict("Server error (500)"));
    }
}
