//! # Server Info Tasks
//!
//! Async task for the settings screen's statistics and version cards.

use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::debug;

use crate::app::events::AppEvent;
use crate::app::state::{AppState, Fetch};
use crate::core::service::CatalogService;
use crate::utils::runtime::TOKIO_RT;

/// Fetch server statistics and version.
///
/// Internal task function - spawns one async task that issues both queries
/// and sends each result via the event channel.
pub(crate) fn fetch_server_info(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let api_client = {
        let mut state = state.write();
        if state.settings.fetching {
            return;
        }
        let Some(client) = state.api_client.clone() else {
            return;
        };

        state.settings.fetching = true;
        state.settings.stats = Fetch::Loading;
        state.settings.version = Fetch::Loading;
        client
    };

    let state_arc = Arc::clone(&state);
    TOKIO_RT.spawn(async move {
        let start = std::time::Instant::now();

        let (stats, version) = futures::join!(api_client.stats(), api_client.version());
        let _ = event_tx.send(AppEvent::StatsResult(stats)).await;
        let _ = event_tx.send(AppEvent::VersionResult(version)).await;

        debug!(duration_ms = start.elapsed().as_millis(), "Server info fetched");

        let mut state = state_arc.write();
        state.settings.fetching = false;
    });
}
