//! # Detail Screen Handlers
//!
//! Opening detail screens and the performer edit actions.

use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

use shared::ImageItem;

use crate::app::events::AppEvent;
use crate::app::state::{AppState, Fetch, Screen};
use crate::app::tasks;
use crate::utils::validation::validate_rating;

/// Open the scene detail screen and fetch its payload.
pub(crate) fn open_scene(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>, id: String) {
    {
        let mut guard = state.write();
        guard.detail.scene_id = Some(id.clone());
        guard.detail.scene = Fetch::Loading;
        guard.current_screen = Screen::SceneDetail;
    }
    tasks::detail::fetch_scene(state, event_tx, id);
}

/// Open the performer detail screen and fetch its payload.
pub(crate) fn open_performer(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>, id: String) {
    {
        let mut guard = state.write();
        guard.detail.performer_id = Some(id.clone());
        guard.detail.performer = Fetch::Loading;
        guard.current_screen = Screen::PerformerDetail;
    }
    tasks::detail::fetch_performer(state, event_tx, id);
}

/// Open the image detail screen; the listing item already carries everything
/// the screen shows.
pub(crate) fn open_image(state: Arc<RwLock<AppState>>, image: ImageItem) {
    let mut guard = state.write();
    guard.detail.image = Some(image);
    guard.current_screen = Screen::ImageDetail;
}

/// Set a performer's rating, confirm-then-patch.
pub(crate) fn handle_performer_rating(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    id: String,
    rating100: i64,
) {
    if let Some(reason) = validate_rating(rating100).error {
        tracing::warn!(performer_id = %id, rating100, reason = %reason, "Rejected rating");
        return;
    }
    tasks::detail::update_performer(state, event_tx, id, Some(rating100), None);
}

/// Toggle a performer's favorite flag, confirm-then-patch.
pub(crate) fn handle_performer_favorite(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    id: String,
    favorite: bool,
) {
    tasks::detail::update_performer(state, event_tx, id, None, Some(favorite));
}
