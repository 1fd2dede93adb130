//! # API Client
//!
//! HTTP client for the catalog server's GraphQL endpoint.

use serde::de::DeserializeOwned;

use shared::dto::graphql::GraphqlRequest;
use shared::{ImageItem, PerformerItem, SceneItem, ServerStats, TagItem, VersionInfo};

use crate::core::service::CatalogService;
use crate::services::api::scenes::FeedOrder;
use crate::services::api::tags::TagCreateError;

/// GraphQL client for a single configured server connection.
///
/// Holds the connection pool, the base URL, and the API credential. The
/// client is rebuilt whenever the connection configuration changes; it is
/// never mutated in place.
pub struct ApiClient {
    pub(crate) client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl ApiClient {
    /// Create a client for `base_url` authenticating with `api_key`.
    ///
    /// The underlying HTTP client carries a 30 second timeout so a dead
    /// server cannot wedge a screen in `Loading` forever.
    pub fn new(base_url: &str, api_key: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Execute a GraphQL operation and unwrap the envelope.
    ///
    /// Every failure mode is collapsed into a kind-tagged message:
    /// `Network error: …`, `Server error (status): …`, `Parse error: …`,
    /// `GraphQL error: …`.
    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        request: GraphqlRequest,
    ) -> Result<T, String> {
        let url = format!("{}/graphql", self.base_url);

        let response = self
            .client
            .post(&url)
            .header("ApiKey", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, url = %url, "GraphQL network error");
                format!("Network error: {}", e)
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), url = %url, "GraphQL request rejected");
            return Err(format!("Server error ({})", status.as_u16()));
        }

        let envelope = response
            .json::<shared::dto::graphql::GraphqlResponse<T>>()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, url = %url, "GraphQL response parse error");
                format!("Parse error: {}", e)
            })?;

        envelope.into_result()
    }

    /// Resolve a media asset path returned by the server into a fetchable URL.
    ///
    /// Relative paths are joined onto the base URL. When an API key is
    /// configured it is appended as an `apikey` query parameter unless the
    /// URL already carries one: streaming and image fetches happen outside
    /// the GraphQL channel and cannot send the `ApiKey` header.
    pub fn resolve_media_url(&self, path: Option<&str>) -> Option<String> {
        let path = path?;
        if path.is_empty() {
            return None;
        }

        let url = if path.starts_with("http") {
            path.to_string()
        } else {
            format!("{}{}", self.base_url, path)
        };

        if self.api_key.is_empty() || url.contains("apikey=") {
            return Some(url);
        }
        let separator = if url.contains('?') { '&' } else { '?' };
        Some(format!("{}{}apikey={}", url, separator, self.api_key))
    }
}

// Implement CatalogService for ApiClient
#[async_trait::async_trait]
impl CatalogService for ApiClient {
    async fn find_scenes(&self, order: FeedOrder, limit: usize) -> Result<Vec<SceneItem>, String> {
        crate::services::api::scenes::find_scenes(self, order, limit).await
    }

    async fn find_performers(&self, limit: usize) -> Result<Vec<PerformerItem>, String> {
        crate::services::api::performers::find_performers(self, limit).await
    }

    async fn find_images(&self, limit: usize) -> Result<Vec<ImageItem>, String> {
        crate::services::api::images::find_images(self, limit).await
    }

    async fn find_scene(&self, id: &str) -> Result<Option<SceneItem>, String> {
        crate::services::api::scenes::find_scene(self, id).await
    }

    async fn find_performer(&self, id: &str) -> Result<Option<PerformerItem>, String> {
        crate::services::api::performers::find_performer(self, id).await
    }

    async fn update_performer(
        &self,
        id: &str,
        rating100: Option<i64>,
        favorite: Option<bool>,
    ) -> Result<(), String> {
        crate::services::api::performers::update_performer(self, id, rating100, favorite).await
    }

    async fn set_scene_rating(&self, id: &str, rating100: i64) -> Result<(), String> {
        crate::services::api::scenes::set_scene_rating(self, id, rating100).await
    }

    async fn set_scene_tags(&self, id: &str, tag_ids: &[String]) -> Result<(), String> {
        crate::services::api::scenes::set_scene_tags(self, id, tag_ids).await
    }

    async fn increment_o_count(&self, id: &str) -> Result<i64, String> {
        crate::services::api::scenes::increment_o_count(self, id).await
    }

    async fn reset_o_count(&self, id: &str) -> Result<i64, String> {
        crate::services::api::scenes::reset_o_count(self, id).await
    }

    async fn increment_play_count(&self, id: &str) -> Result<i64, String> {
        crate::services::api::scenes::increment_play_count(self, id).await
    }

    async fn save_play_duration(&self, id: &str, seconds: f64) -> Result<(), String> {
        crate::services::api::scenes::save_play_duration(self, id, seconds).await
    }

    async fn all_tags(&self) -> Result<Vec<TagItem>, String> {
        crate::services::api::tags::all_tags(self).await
    }

    async fn create_tag(&self, name: &str) -> Result<TagItem, TagCreateError> {
        crate::services::api::tags::create_tag(self, name).await
    }

    async fn stats(&self) -> Result<ServerStats, String> {
        crate::services::api::server::stats(self).await
    }

    async fn version(&self) -> Result<VersionInfo, String> {
        crate::services::api::server::version(self).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========== Media URL Resolution Tests ==========

    #[test]
    fn test_resolve_relative_path_appends_apikey() {
        let client = ApiClient::new("http://media.local:9999/", "secret");
        assert_eq!(
            client.resolve_media_url(Some("/scene/42/screenshot")),
            Some("http://media.local:9999/scene/42/screenshot?apikey=secret".to_string())
        );
    }

    #[test]
    fn test_resolve_path_with_existing_query_uses_ampersand() {
        let client = ApiClient::new("http://media.local:9999", "secret");
        assert_eq!(
            client.resolve_media_url(Some("/scene/42/stream?resolution=ORIGINAL")),
            Some(
                "http://media.local:9999/scene/42/stream?resolution=ORIGINAL&apikey=secret"
                    .to_string()
            )
        );
    }

    #[test]
    fn test_resolve_absolute_url_kept_as_is() {
        let client = ApiClient::new("http://media.local:9999", "secret");
        assert_eq!(
            client.resolve_media_url(Some("http://cdn.local/thumb.jpg")),
            Some("http://cdn.local/thumb.jpg?apikey=secret".to_string())
        );
    }

    #[test]
    fn test_resolve_does_not_duplicate_apikey() {
        let client = ApiClient::new("http://media.local:9999", "secret");
        let url = "http://media.local:9999/scene/42/stream?apikey=secret";
        assert_eq!(client.resolve_media_url(Some(url)), Some(url.to_string()));
    }

    #[test]
    fn test_resolve_without_key_leaves_url_bare() {
        let client = ApiClient::new("http://media.local:9999", "");
        assert_eq!(
            client.resolve_media_url(Some("/scene/42/screenshot")),
            Some("http://media.local:9999/scene/42/screenshot".to_string())
        );
    }

    #[test]
    fn test_resolve_none_and_empty() {
        let client = ApiClient::new("http://media.local:9999", "secret");
        assert_eq!(client.resolve_media_url(None), None);
        assert_eq!(client.resolve_media_url(Some("")), None);
    }
}
