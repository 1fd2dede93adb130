//! # Server Info Endpoints
//!
//! Library statistics and build version, shown on the settings screen.

use serde::Deserialize;

use shared::dto::graphql::GraphqlRequest;
use shared::{ServerStats, VersionInfo};

use super::client::ApiClient;

/// Fetch aggregate library statistics.
pub async fn stats(client: &ApiClient) -> Result<ServerStats, String> {
    let query = r#"
        query Stats {
            stats {
                scene_count
                image_count
                performer_count
                total_play_duration
                total_o_count
            }
        }
    "#;

    let data: StatsData = client.execute(GraphqlRequest::bare(query)).await?;
    let raw = data.stats;

    Ok(ServerStats {
        scene_count: raw.scene_count.unwrap_or(0),
        image_count: raw.image_count.unwrap_or(0),
        performer_count: raw.performer_count.unwrap_or(0),
        total_play_duration: raw.total_play_duration.unwrap_or(0.0),
        total_o_count: raw.total_o_count.unwrap_or(0),
    })
}

/// Fetch the server's build information.
pub async fn version(client: &ApiClient) -> Result<VersionInfo, String> {
    let query = r#"
        query Version {
            version {
                version
                build_time
            }
        }
    "#;

    let data: VersionData = client.execute(GraphqlRequest::bare(query)).await?;

    Ok(VersionInfo {
        version: data.version.version.unwrap_or_else(|| "unknown".to_string()),
        build_time: data.version.build_time,
    })
}

// ==================== SERVER INFO WIRE TYPES ====================

#[derive(Debug, Deserialize)]
struct StatsData {
    stats: StatsRow,
}

#[derive(Debug, Deserialize)]
struct StatsRow {
    scene_count: Option<i64>,
    image_count: Option<i64>,
    performer_count: Option<i64>,
    total_play_duration: Option<f64>,
    total_o_count: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct VersionData {
    version: VersionRow,
}

#[derive(Debug, Deserialize)]
struct VersionRow {
    version: Option<String>,
    build_time: Option<String>,
}
