//! # Reels Handlers
//!
//! User actions on the swipeable feed: stepping between reels, the playback
//! clock, and the confirm-then-patch mutations routed through the feed
//! synchronizer. Every gateway call runs on the shared runtime; the reel's
//! triggering control stays disabled while its mutation is in flight.

use parking_lot::RwLock;
use std::sync::Arc;

use shared::TagItem;

use crate::app::state::AppState;
use crate::feed::FeedState;
use crate::utils::runtime::TOKIO_RT;
use crate::utils::validation::validate_tag_name;

/// Keep the live playback session aligned with the visible reel.
///
/// Called every frame while the reels screen is active: clamps the index to
/// the loaded feed, and when the visible item changed, flushes the previous
/// session and activates the new one (the synchronizer's latch makes
/// re-activation of a seen item a no-op for the play count).
pub(crate) fn sync_active_reel(state: Arc<RwLock<AppState>>) {
    let mut guard = state.write();
    let Some(feed) = guard.feed.clone() else {
        return;
    };
    let items = match feed.state() {
        FeedState::Loaded(items) if !items.is_empty() => items,
        _ => {
            guard.reels.active_scene_id = None;
            return;
        }
    };

    if guard.reels.current_index >= items.len() {
        guard.reels.current_index = items.len() - 1;
    }
    let visible_id = items[guard.reels.current_index].id.clone();

    if guard.reels.active_scene_id.as_deref() == Some(visible_id.as_str()) {
        return;
    }

    if let Some(previous) = guard.reels.active_scene_id.take() {
        let feed_prev = Arc::clone(&feed);
        TOKIO_RT.spawn(async move { feed_prev.note_deactivated(&previous).await });
    }

    guard.reels.active_scene_id = Some(visible_id.clone());
    guard.reels.position_ms = 0;
    guard.reels.playing = true;
    TOKIO_RT.spawn(async move { feed.note_activated(&visible_id).await });
}

/// Step to the next (+1) or previous (-1) reel.
pub(crate) fn handle_reel_step(state: Arc<RwLock<AppState>>, delta: i64) {
    let mut guard = state.write();
    let Some(feed) = guard.feed.as_ref() else {
        return;
    };
    let len = match feed.state() {
        FeedState::Loaded(items) => items.len(),
        _ => return,
    };
    if len == 0 {
        return;
    }

    let current = guard.reels.current_index as i64;
    guard.reels.current_index = (current + delta).clamp(0, len as i64 - 1) as usize;
    // sync_active_reel picks up the change on the next tick.
}

/// Advance the playback clock by one frame and feed the progress tick to the
/// session tracker. The clock wraps at the media duration, which is exactly
/// the looping behavior the tracker's wrap rule accounts for.
pub(crate) fn handle_playback_tick(state: Arc<RwLock<AppState>>, dt_seconds: f32) {
    let mut guard = state.write();
    if !guard.reels.playing {
        return;
    }
    let Some(feed) = guard.feed.clone() else {
        return;
    };
    let Some(active_id) = guard.reels.active_scene_id.clone() else {
        return;
    };
    let Some(item) = feed.item(&active_id) else {
        return;
    };

    let duration_ms = (item.duration * 1000.0) as u64;
    if duration_ms == 0 {
        return;
    }

    let advanced = guard.reels.position_ms + (dt_seconds.max(0.0) * 1000.0) as u64;
    guard.reels.position_ms = advanced % duration_ms;

    feed.note_progress(&active_id, guard.reels.position_ms, duration_ms);
}

/// Toggle pause/play for the active reel.
pub(crate) fn handle_toggle_playing(state: Arc<RwLock<AppState>>) {
    let mut guard = state.write();
    guard.reels.playing = !guard.reels.playing;
}

/// Seek the active reel. The jump flows through the same progress path as
/// normal ticks.
pub(crate) fn handle_seek(state: Arc<RwLock<AppState>>, position_ms: u64) {
    let mut guard = state.write();
    guard.reels.position_ms = position_ms;
}

/// Reload the feed, discarding playback sessions (pending watch time is
/// flushed first by the synchronizer).
pub(crate) fn handle_refresh(state: Arc<RwLock<AppState>>) {
    let mut guard = state.write();
    let Some(feed) = guard.feed.clone() else {
        return;
    };
    guard.reels.current_index = 0;
    guard.reels.active_scene_id = None;
    guard.reels.position_ms = 0;

    TOKIO_RT.spawn(async move { feed.refresh().await });
}

/// Rating picked in the dialog.
pub(crate) fn handle_rating_selected(state: Arc<RwLock<AppState>>, id: String, rating100: i64) {
    let feed = {
        let mut guard = state.write();
        if guard.reels.rating_in_flight {
            return;
        }
        let Some(feed) = guard.feed.clone() else {
            return;
        };
        guard.reels.rating_in_flight = true;
        guard.reels.show_rating_dialog = false;
        feed
    };

    let state_arc = Arc::clone(&state);
    TOKIO_RT.spawn(async move {
        feed.mutate_rating(&id, rating100).await;
        state_arc.write().reels.rating_in_flight = false;
    });
}

/// O-count action button.
pub(crate) fn handle_increment_o_count(state: Arc<RwLock<AppState>>, id: String) {
    let feed = {
        let mut guard = state.write();
        if guard.reels.o_count_in_flight {
            return;
        }
        let Some(feed) = guard.feed.clone() else {
            return;
        };
        guard.reels.o_count_in_flight = true;
        feed
    };

    let state_arc = Arc::clone(&state);
    TOKIO_RT.spawn(async move {
        feed.increment_o_count(&id).await;
        state_arc.write().reels.o_count_in_flight = false;
    });
}

/// O-count reset from the details sheet.
pub(crate) fn handle_reset_o_count(state: Arc<RwLock<AppState>>, id: String) {
    let feed = {
        let mut guard = state.write();
        if guard.reels.o_count_in_flight {
            return;
        }
        let Some(feed) = guard.feed.clone() else {
            return;
        };
        guard.reels.o_count_in_flight = true;
        feed
    };

    let state_arc = Arc::clone(&state);
    TOKIO_RT.spawn(async move {
        feed.reset_o_count(&id).await;
        state_arc.write().reels.o_count_in_flight = false;
    });
}

/// Attach an existing tag from the add-tag dialog.
pub(crate) fn handle_add_tag(state: Arc<RwLock<AppState>>, id: String, tag: TagItem) {
    let feed = {
        let mut guard = state.write();
        if guard.reels.tag_edit_in_flight {
            return;
        }
        let Some(feed) = guard.feed.clone() else {
            return;
        };
        guard.reels.tag_edit_in_flight = true;
        guard.reels.show_add_tag_dialog = false;
        feed
    };

    let state_arc = Arc::clone(&state);
    TOKIO_RT.spawn(async move {
        feed.add_tag(&id, tag).await;
        state_arc.write().reels.tag_edit_in_flight = false;
    });
}

/// Detach a tag chip.
pub(crate) fn handle_remove_tag(state: Arc<RwLock<AppState>>, id: String, tag: TagItem) {
    let feed = {
        let mut guard = state.write();
        if guard.reels.tag_edit_in_flight {
            return;
        }
        let Some(feed) = guard.feed.clone() else {
            return;
        };
        guard.reels.tag_edit_in_flight = true;
        feed
    };

    let state_arc = Arc::clone(&state);
    TOKIO_RT.spawn(async move {
        feed.remove_tag(&id, &tag).await;
        state_arc.write().reels.tag_edit_in_flight = false;
    });
}

/// Create-and-attach from the add-tag dialog's text field.
pub(crate) fn handle_create_tag(state: Arc<RwLock<AppState>>, id: String, name: String) {
    if validate_tag_name(&name).error.is_some() {
        return;
    }

    let feed = {
        let mut guard = state.write();
        if guard.reels.tag_edit_in_flight {
            return;
        }
        let Some(feed) = guard.feed.clone() else {
            return;
        };
        guard.reels.tag_edit_in_flight = true;
        guard.reels.show_add_tag_dialog = false;
        guard.reels.new_tag_name.clear();
        feed
    };

    let state_arc = Arc::clone(&state);
    TOKIO_RT.spawn(async move {
        feed.create_tag_and_attach(&id, name.trim()).await;
        state_arc.write().reels.tag_edit_in_flight = false;
    });
}
