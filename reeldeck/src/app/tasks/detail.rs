//! # Detail Screen Tasks
//!
//! Async tasks for scene/performer detail payloads and the tag catalog.

use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::warn;

use crate::app::events::AppEvent;
use crate::app::state::{AppState, Fetch};
use crate::core::service::CatalogService;
use crate::utils::runtime::TOKIO_RT;

/// Fetch a scene by id for the detail screen.
pub(crate) fn fetch_scene(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>, id: String) {
    let api_client = {
        let mut state = state.write();
        let Some(client) = state.api_client.clone() else {
            return;
        };
        state.detail.scene = Fetch::Loading;
        client
    };

    TOKIO_RT.spawn(async move {
        let result = api_client.find_scene(&id).await;
        let _ = event_tx.send(AppEvent::SceneDetailResult(result)).await;
    });
}

/// Fetch a performer by id for the detail screen.
pub(crate) fn fetch_performer(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    id: String,
) {
    let api_client = {
        let mut state = state.write();
        let Some(client) = state.api_client.clone() else {
            return;
        };
        state.detail.performer = Fetch::Loading;
        client
    };

    TOKIO_RT.spawn(async move {
        let result = api_client.find_performer(&id).await;
        let _ = event_tx.send(AppEvent::PerformerDetailResult(result)).await;
    });
}

/// Issue a performer update and report the confirmed values back.
///
/// Confirm-then-patch: the event handler applies the new rating/favorite to
/// the loaded detail only when `result` is `Ok`.
pub(crate) fn update_performer(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    id: String,
    rating100: Option<i64>,
    favorite: Option<bool>,
) {
    let api_client = {
        let mut state = state.write();
        if state.detail.performer_edit_in_flight {
            return;
        }
        let Some(client) = state.api_client.clone() else {
            return;
        };
        state.detail.performer_edit_in_flight = true;
        client
    };

    TOKIO_RT.spawn(async move {
        let result = api_client.update_performer(&id, rating100, favorite).await;
        if let Err(ref e) = result {
            warn!(operation = "update_performer", performer_id = %id, error = %e, "Mutation failed");
        }
        let _ = event_tx
            .send(AppEvent::PerformerUpdateResult {
                id,
                rating100,
                favorite,
                result,
            })
            .await;
    });
}

/// Fetch the full tag catalog for the add-tag dialog.
pub(crate) fn fetch_available_tags(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let api_client = {
        let mut state = state.write();
        let Some(client) = state.api_client.clone() else {
            return;
        };
        state.reels.available_tags = Fetch::Loading;
        client
    };

    TOKIO_RT.spawn(async move {
        let result = api_client.all_tags().await;
        let _ = event_tx.send(AppEvent::AvailableTagsResult(result)).await;
    });
}
