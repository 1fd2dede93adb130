//! # Image Endpoints

use serde::Deserialize;
use serde_json::json;

use shared::dto::graphql::GraphqlRequest;
use shared::ImageItem;

use super::client::ApiClient;

/// Fetch the most recently added images.
pub async fn find_images(client: &ApiClient, limit: usize) -> Result<Vec<ImageItem>, String> {
    let query = r#"
        query FindImages($filter: FindFilterType) {
            findImages(filter: $filter) {
                count
                images {
                    id
                    title
                    paths { thumbnail image }
                }
            }
        }
    "#;

    let data: FindImagesData = client
        .execute(GraphqlRequest::new(
            query,
            json!({ "filter": { "per_page": limit, "sort": "created_at", "direction": "DESC" } }),
        ))
        .await?;

    Ok(data
        .find_images
        .images
        .into_iter()
        .map(|row| ImageItem {
            thumbnail_url: client
                .resolve_media_url(row.paths.as_ref().and_then(|p| p.thumbnail.as_deref())),
            image_url: client
                .resolve_media_url(row.paths.as_ref().and_then(|p| p.image.as_deref())),
            title: row.title.unwrap_or_else(|| "Untitled".to_string()),
            id: row.id,
        })
        .collect())
}

// ==================== IMAGE WIRE TYPES ====================

#[derive(Debug, Deserialize)]
struct FindImagesData {
    #[serde(rename = "findImages")]
    find_images: FindImagesPayload,
}

#[derive(Debug, Deserialize)]
struct FindImagesPayload {
    images: Vec<ImageRow>,
}

#[derive(Debug, Deserialize)]
struct ImageRow {
    id: String,
    title: Option<String>,
    paths: Option<ImagePaths>,
}

#[derive(Debug, Deserialize)]
struct ImagePaths {
    thumbnail: Option<String>,
    image: Option<String>,
}
