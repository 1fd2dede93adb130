//! # Browse Grid Tasks
//!
//! Async tasks for the browse screen's tabbed grids, fetched lazily per tab.

use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

use crate::app::events::AppEvent;
use crate::app::state::{AppState, BrowseTab, Fetch};
use crate::core::service::CatalogService;
use crate::services::api::FeedOrder;
use crate::utils::runtime::TOKIO_RT;

const GRID_LIMIT: usize = 40;

/// Fetch the grid for one browse tab.
///
/// Internal task function - spawns an async task and sends the result via
/// the event channel.
pub(crate) fn fetch_tab(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>, tab: BrowseTab) {
    let api_client = {
        let mut state = state.write();
        if state.browse.fetching {
            return;
        }
        let Some(client) = state.api_client.clone() else {
            return;
        };

        state.browse.fetching = true;
        match tab {
            BrowseTab::Scenes => state.browse.scenes = Fetch::Loading,
            BrowseTab::Images => state.browse.images = Fetch::Loading,
            BrowseTab::Performers => state.browse.performers = Fetch::Loading,
        }
        client
    };

    let state_arc = Arc::clone(&state);
    TOKIO_RT.spawn(async move {
        match tab {
            BrowseTab::Scenes => {
                let result = api_client.find_scenes(FeedOrder::Recent, GRID_LIMIT).await;
                let _ = event_tx.send(AppEvent::BrowseScenesResult(result)).await;
            }
            BrowseTab::Images => {
                let result = api_client.find_images(GRID_LIMIT).await;
                let _ = event_tx.send(AppEvent::BrowseImagesResult(result)).await;
            }
            BrowseTab::Performers => {
                let result = api_client.find_performers(GRID_LIMIT).await;
                let _ = event_tx.send(AppEvent::BrowsePerformersResult(result)).await;
            }
        }

        let mut state = state_arc.write();
        state.browse.fetching = false;
    });
}
