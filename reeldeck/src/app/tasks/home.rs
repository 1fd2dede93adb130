//! # Home Rail Tasks
//!
//! Async task for the home screen's three recency rails.

use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::debug;

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::core::service::CatalogService;
use crate::utils::runtime::TOKIO_RT;

const RAIL_LIMIT: usize = 10;

/// Fetch the recent scenes, performers, and images rails.
///
/// Internal task function - spawns one async task that issues the three list
/// queries in turn and sends each result via the event channel.
pub(crate) fn fetch_rails(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    // Check if already fetching and get the gateway with minimal lock duration
    let api_client = {
        let mut state = state.write();

        // Skip if already fetching (prevents task pileup)
        if state.home.fetching {
            return;
        }
        let Some(client) = state.api_client.clone() else {
            return;
        };

        state.home.fetching = true;
        state.home.scenes = crate::app::state::Fetch::Loading;
        state.home.performers = crate::app::state::Fetch::Loading;
        state.home.images = crate::app::state::Fetch::Loading;
        client
    }; // Lock released here

    let state_arc = Arc::clone(&state);
    TOKIO_RT.spawn(async move {
        debug!(limit = RAIL_LIMIT, "Fetching home rails");

        let (scenes, performers, images) = futures::join!(
            api_client.find_scenes(crate::services::api::FeedOrder::Recent, RAIL_LIMIT),
            api_client.find_performers(RAIL_LIMIT),
            api_client.find_images(RAIL_LIMIT),
        );

        let _ = event_tx.send(AppEvent::HomeScenesResult(scenes)).await;
        let _ = event_tx
            .send(AppEvent::HomePerformersResult(performers))
            .await;
        let _ = event_tx.send(AppEvent::HomeImagesResult(images)).await;

        let mut state = state_arc.write();
        state.home.fetching = false;
    });
}
