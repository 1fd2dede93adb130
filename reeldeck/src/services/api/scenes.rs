//! # Scene Endpoints
//!
//! Scene list/detail queries and the counter, rating, and tag mutations.

use serde::Deserialize;
use serde_json::json;

use shared::dto::graphql::GraphqlRequest;
use shared::{PerformerRef, SceneItem, TagItem};

use super::client::ApiClient;

/// Ordering for a feed page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedOrder {
    /// Most recently added first.
    Recent,
    /// Server-side random sample.
    Random,
}

const SCENE_FIELDS: &str = r#"
    id
    title
    rating100
    o_counter
    play_count
    play_duration
    paths { screenshot stream }
    files { duration width height }
    tags { id name }
    performers { id name image_path }
"#;

fn find_scenes_query() -> String {
    format!(
        "query FindScenes($filter: FindFilterType) {{ findScenes(filter: $filter) {{ count scenes {{ {} }} }} }}",
        SCENE_FIELDS
    )
}

/// Fetch a page of scenes in the requested order.
#[tracing::instrument(skip(client), fields(order = ?order, limit = limit))]
pub async fn find_scenes(
    client: &ApiClient,
    order: FeedOrder,
    limit: usize,
) -> Result<Vec<SceneItem>, String> {
    let filter = match order {
        FeedOrder::Recent => json!({
            "per_page": limit,
            "sort": "created_at",
            "direction": "DESC",
        }),
        FeedOrder::Random => json!({
            "per_page": limit,
            "sort": "random",
        }),
    };

    let start = std::time::Instant::now();
    let data: FindScenesData = client
        .execute(GraphqlRequest::new(
            find_scenes_query(),
            json!({ "filter": filter }),
        ))
        .await?;

    let scenes: Vec<SceneItem> = data
        .find_scenes
        .scenes
        .into_iter()
        .map(|row| row.into_item(client))
        .collect();

    tracing::debug!(
        count = scenes.len(),
        duration_ms = start.elapsed().as_millis(),
        "Scenes fetched"
    );
    Ok(scenes)
}

/// Fetch a single scene by id.
pub async fn find_scene(client: &ApiClient, id: &str) -> Result<Option<SceneItem>, String> {
    let query = format!(
        "query FindScene($id: ID!) {{ findScene(id: $id) {{ {} }} }}",
        SCENE_FIELDS
    );

    let data: FindSceneData = client
        .execute(GraphqlRequest::new(query, json!({ "id": id })))
        .await?;

    Ok(data.find_scene.map(|row| row.into_item(client)))
}

/// Set a scene's rating (0-100 scale).
pub async fn set_scene_rating(client: &ApiClient, id: &str, rating100: i64) -> Result<(), String> {
    let query =
        "mutation SceneUpdate($input: SceneUpdateInput!) { sceneUpdate(input: $input) { id } }";

    let _: SceneUpdateData = client
        .execute(GraphqlRequest::new(
            query,
            json!({ "input": { "id": id, "rating100": rating100 } }),
        ))
        .await?;
    Ok(())
}

/// Replace a scene's tag set with exactly `tag_ids`.
pub async fn set_scene_tags(client: &ApiClient, id: &str, tag_ids: &[String]) -> Result<(), String> {
    let query =
        "mutation SceneUpdate($input: SceneUpdateInput!) { sceneUpdate(input: $input) { id } }";

    let _: SceneUpdateData = client
        .execute(GraphqlRequest::new(
            query,
            json!({ "input": { "id": id, "tag_ids": tag_ids } }),
        ))
        .await?;
    Ok(())
}

/// Increment a scene's O-count; the server returns the new authoritative value.
#[tracing::instrument(skip(client), fields(scene_id = %id))]
pub async fn increment_o_count(client: &ApiClient, id: &str) -> Result<i64, String> {
    let query = "mutation SceneIncrementO($id: ID!) { sceneIncrementO(id: $id) }";

    let data: SceneIncrementOData = client
        .execute(GraphqlRequest::new(query, json!({ "id": id })))
        .await?;
    Ok(data.count)
}

/// Reset a scene's O-count; the server returns the new authoritative value.
#[tracing::instrument(skip(client), fields(scene_id = %id))]
pub async fn reset_o_count(client: &ApiClient, id: &str) -> Result<i64, String> {
    let query = "mutation SceneResetO($id: ID!) { sceneResetO(id: $id) }";

    let data: SceneResetOData = client
        .execute(GraphqlRequest::new(query, json!({ "id": id })))
        .await?;
    Ok(data.count)
}

/// Increment a scene's play count; the server returns the new value.
pub async fn increment_play_count(client: &ApiClient, id: &str) -> Result<i64, String> {
    let query =
        "mutation SceneIncrementPlayCount($id: ID!) { sceneIncrementPlayCount(id: $id) }";

    let data: ScenePlayCountData = client
        .execute(GraphqlRequest::new(query, json!({ "id": id })))
        .await?;
    Ok(data.count)
}

/// Append watched seconds to a scene's recorded play duration.
pub async fn save_play_duration(client: &ApiClient, id: &str, seconds: f64) -> Result<(), String> {
    let query = "mutation SceneSaveActivity($id: ID!, $playDuration: Float) { sceneSaveActivity(id: $id, playDuration: $playDuration) }";

    let _: SceneSaveActivityData = client
        .execute(GraphqlRequest::new(
            query,
            json!({ "id": id, "playDuration": seconds }),
        ))
        .await?;
    Ok(())
}

// ==================== SCENE WIRE TYPES ====================

#[derive(Debug, Deserialize)]
struct FindScenesData {
    #[serde(rename = "findScenes")]
    find_scenes: FindScenesPayload,
}

#[derive(Debug, Deserialize)]
struct FindScenesPayload {
    scenes: Vec<SceneRow>,
}

#[derive(Debug, Deserialize)]
struct FindSceneData {
    #[serde(rename = "findScene")]
    find_scene: Option<SceneRow>,
}

#[derive(Debug, Deserialize)]
struct SceneUpdateData {
    #[serde(rename = "sceneUpdate")]
    #[allow(dead_code)]
    scene_update: Option<SceneIdOnly>,
}

#[derive(Debug, Deserialize)]
struct SceneIdOnly {
    #[allow(dead_code)]
    id: String,
}

#[derive(Debug, Deserialize)]
struct SceneIncrementOData {
    #[serde(rename = "sceneIncrementO")]
    count: i64,
}

#[derive(Debug, Deserialize)]
struct SceneResetOData {
    #[serde(rename = "sceneResetO")]
    count: i64,
}

#[derive(Debug, Deserialize)]
struct ScenePlayCountData {
    #[serde(rename = "sceneIncrementPlayCount")]
    count: i64,
}

#[derive(Debug, Deserialize)]
struct SceneSaveActivityData {
    #[serde(rename = "sceneSaveActivity")]
    #[allow(dead_code)]
    saved: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SceneRow {
    id: String,
    title: Option<String>,
    rating100: Option<i64>,
    o_counter: Option<i64>,
    play_count: Option<i64>,
    play_duration: Option<f64>,
    paths: Option<ScenePaths>,
    #[serde(default)]
    files: Vec<SceneFile>,
    #[serde(default)]
    tags: Vec<TagItem>,
    #[serde(default)]
    performers: Vec<ScenePerformerRow>,
}

#[derive(Debug, Deserialize)]
struct ScenePaths {
    screenshot: Option<String>,
    stream: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SceneFile {
    duration: Option<f64>,
    width: Option<i64>,
    height: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct ScenePerformerRow {
    id: String,
    name: Option<String>,
    image_path: Option<String>,
}

impl SceneRow {
    fn into_item(self, client: &ApiClient) -> SceneItem {
        let primary_file = self.files.first();
        SceneItem {
            thumbnail_url: client
                .resolve_media_url(self.paths.as_ref().and_then(|p| p.screenshot.as_deref())),
            stream_url: client
                .resolve_media_url(self.paths.as_ref().and_then(|p| p.stream.as_deref())),
            duration: primary_file.and_then(|f| f.duration).unwrap_or(0.0),
            width: primary_file.and_then(|f| f.width),
            height: primary_file.and_then(|f| f.height),
            title: self.title.unwrap_or_else(|| "Untitled".to_string()),
            rating100: self.rating100,
            o_count: self.o_counter.unwrap_or(0),
            play_count: self.play_count.unwrap_or(0),
            play_duration: self.play_duration.unwrap_or(0.0),
            tags: self.tags,
            performers: self
                .performers
                .into_iter()
                .map(|p| PerformerRef {
                    image_url: client.resolve_media_url(p.image_path.as_deref()),
                    name: p.name.unwrap_or_else(|| "Unknown".to_string()),
                    id: p.id,
                })
                .collect(),
            id: self.id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_row_maps_defaults_and_urls() {
        let client = ApiClient::new("http://media.local:9999", "k");
        let row: SceneRow = serde_json::from_value(serde_json::json!({
            "id": "s1",
            "title": null,
            "rating100": 80,
            "o_counter": 3,
            "play_count": null,
            "play_duration": 12.5,
            "paths": { "screenshot": "/scene/s1/screenshot", "stream": null },
            "files": [{ "duration": 600.0, "width": 1920, "height": 1080 }],
            "tags": [{ "id": "t1", "name": "keep" }],
            "performers": [{ "id": "p1", "name": null, "image_path": null }]
        }))
        .expect("valid scene row");

        let item = row.into_item(&client);
        assert_eq!(item.title, "Untitled");
        assert_eq!(item.play_count, 0);
        assert_eq!(item.o_count, 3);
        assert_eq!(item.duration, 600.0);
        assert_eq!(
            item.thumbnail_url.as_deref(),
            Some("http://media.local:9999/scene/s1/screenshot?apikey=k")
        );
        assert_eq!(item.stream_url, None);
        assert_eq!(item.performers[0].name, "Unknown");
        assert_eq!(item.tags, vec![TagItem::new("t1", "keep")]);
    }

    #[test]
    fn test_scene_row_without_files() {
        let client = ApiClient::new("http://media.local:9999", "");
        let row: SceneRow = serde_json::from_value(serde_json::json!({
            "id": "s2",
            "title": "Bare"
        }))
        .expect("valid minimal row");

        let item = row.into_item(&client);
        assert_eq!(item.duration, 0.0);
        assert_eq!(item.width, None);
        assert!(item.tags.is_empty());
    }
}
