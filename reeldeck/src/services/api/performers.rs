//! # Performer Endpoints
//!
//! Performer list/detail queries and metadata updates.

use serde::Deserialize;
use serde_json::json;

use shared::dto::graphql::GraphqlRequest;
use shared::PerformerItem;

use super::client::ApiClient;

const PERFORMER_FIELDS: &str = r#"
    id
    name
    image_path
    rating100
    favorite
    scene_count
    o_counter
"#;

/// Fetch the most recently added performers.
pub async fn find_performers(client: &ApiClient, limit: usize) -> Result<Vec<PerformerItem>, String> {
    let query = format!(
        "query FindPerformers($filter: FindFilterType) {{ findPerformers(filter: $filter) {{ count performers {{ {} }} }} }}",
        PERFORMER_FIELDS
    );

    let data: FindPerformersData = client
        .execute(GraphqlRequest::new(
            query,
            json!({ "filter": { "per_page": limit, "sort": "created_at", "direction": "DESC" } }),
        ))
        .await?;

    Ok(data
        .find_performers
        .performers
        .into_iter()
        .map(|row| row.into_item(client))
        .collect())
}

/// Fetch a single performer by id.
pub async fn find_performer(client: &ApiClient, id: &str) -> Result<Option<PerformerItem>, String> {
    let query = format!(
        "query FindPerformer($id: ID!) {{ findPerformer(id: $id) {{ {} }} }}",
        PERFORMER_FIELDS
    );

    let data: FindPerformerData = client
        .execute(GraphqlRequest::new(query, json!({ "id": id })))
        .await?;

    Ok(data.find_performer.map(|row| row.into_item(client)))
}

/// Update a performer's rating and/or favorite flag. Fields passed as `None`
/// are omitted from the mutation input and left untouched server-side.
pub async fn update_performer(
    client: &ApiClient,
    id: &str,
    rating100: Option<i64>,
    favorite: Option<bool>,
) -> Result<(), String> {
    let query = "mutation PerformerUpdate($input: PerformerUpdateInput!) { performerUpdate(input: $input) { id } }";

    let mut input = serde_json::Map::new();
    input.insert("id".to_string(), json!(id));
    if let Some(rating) = rating100 {
        input.insert("rating100".to_string(), json!(rating));
    }
    if let Some(fav) = favorite {
        input.insert("favorite".to_string(), json!(fav));
    }

    let _: PerformerUpdateData = client
        .execute(GraphqlRequest::new(query, json!({ "input": input })))
        .await?;

    tracing::debug!(performer_id = %id, rating100 = ?rating100, favorite = ?favorite, "Performer updated");
    Ok(())
}

// ==================== PERFORMER WIRE TYPES ====================

#[derive(Debug, Deserialize)]
struct FindPerformersData {
    #[serde(rename = "findPerformers")]
    find_performers: FindPerformersPayload,
}

#[derive(Debug, Deserialize)]
struct FindPerformersPayload {
    performers: Vec<PerformerRow>,
}

#[derive(Debug, Deserialize)]
struct FindPerformerData {
    #[serde(rename = "findPerformer")]
    find_performer: Option<PerformerRow>,
}

#[derive(Debug, Deserialize)]
struct PerformerUpdateData {
    #[serde(rename = "performerUpdate")]
    #[allow(dead_code)]
    performer_update: Option<PerformerIdOnly>,
}

#[derive(Debug, Deserialize)]
struct PerformerIdOnly {
    #[allow(dead_code)]
    id: String,
}

#[derive(Debug, Deserialize)]
struct PerformerRow {
    id: String,
    name: Option<String>,
    image_path: Option<String>,
    rating100: Option<i64>,
    #[serde(default)]
    favorite: bool,
    #[serde(default)]
    scene_count: i64,
    o_counter: Option<i64>,
}

impl PerformerRow {
    fn into_item(self, client: &ApiClient) -> PerformerItem {
        PerformerItem {
            image_url: client.resolve_media_url(self.image_path.as_deref()),
            name: self.name.unwrap_or_else(|| "Unknown".to_string()),
            rating100: self.rating100,
            favorite: self.favorite,
            scene_count: self.scene_count,
            o_count: self.o_counter,
            id: self.id,
        }
    }
}
