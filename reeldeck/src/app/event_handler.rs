//! # Event Handler
//!
//! Applies async task results to application state. Each event acquires the
//! write lock briefly; rendering never observes a half-applied result.

use shared::{PerformerItem, SceneItem, ServerStats, TagItem};

use crate::app::state::Fetch;
use crate::app::{App, AppEvent};

/// Trait for event handling implementation
pub(crate) trait AppEventHandler {
    fn handle_event_impl(&mut self, event: AppEvent);
}

impl AppEventHandler for App {
    fn handle_event_impl(&mut self, event: AppEvent) {
        match event {
            AppEvent::HomeScenesResult(result) => {
                let mut state = self.state.write();
                state.home.scenes = fetch_from(result);
            }
            AppEvent::HomePerformersResult(result) => {
                let mut state = self.state.write();
                state.home.performers = fetch_from(result);
            }
            AppEvent::HomeImagesResult(result) => {
                let mut state = self.state.write();
                state.home.images = fetch_from(result);
            }
            AppEvent::BrowseScenesResult(result) => {
                let mut state = self.state.write();
                state.browse.scenes = fetch_from(result);
            }
            AppEvent::BrowseImagesResult(result) => {
                let mut state = self.state.write();
                state.browse.images = fetch_from(result);
            }
            AppEvent::BrowsePerformersResult(result) => {
                let mut state = self.state.write();
                state.browse.performers = fetch_from(result);
            }
            AppEvent::SceneDetailResult(result) => {
                self.handle_scene_detail_result(result);
            }
            AppEvent::PerformerDetailResult(result) => {
                self.handle_performer_detail_result(result);
            }
            AppEvent::PerformerUpdateResult {
                id,
                rating100,
                favorite,
                result,
            } => {
                self.handle_performer_update_result(id, rating100, favorite, result);
            }
            AppEvent::AvailableTagsResult(result) => {
                self.handle_available_tags_result(result);
            }
            AppEvent::StatsResult(result) => {
                self.handle_stats_result(result);
            }
            AppEvent::VersionResult(result) => {
                let mut state = self.state.write();
                state.settings.version = fetch_from(result);
            }
        }
    }
}

fn fetch_from<T>(result: Result<T, String>) -> Fetch<T> {
    match result {
        Ok(value) => Fetch::Loaded(value),
        Err(message) => Fetch::Error(message),
    }
}

impl App {
    fn handle_scene_detail_result(&mut self, result: Result<Option<SceneItem>, String>) {
        let mut state = self.state.write();
        // Ignore a payload for a detail screen that was closed or retargeted.
        if state.detail.scene_id.is_none() {
            return;
        }
        state.detail.scene = fetch_from(result);
    }

    fn handle_performer_detail_result(&mut self, result: Result<Option<PerformerItem>, String>) {
        let mut state = self.state.write();
        if state.detail.performer_id.is_none() {
            return;
        }
        state.detail.performer = fetch_from(result);
    }

    /// Confirm-then-patch for performer edits: only a confirmed result
    /// touches the loaded detail, and only the fields the mutation carried.
    fn handle_performer_update_result(
        &mut self,
        id: String,
        rating100: Option<i64>,
        favorite: Option<bool>,
        result: Result<(), String>,
    ) {
        let mut state = self.state.write();
        state.detail.performer_edit_in_flight = false;

        if result.is_err() {
            // Failure already logged by the task; local state stays as-is.
            return;
        }

        if let Fetch::Loaded(Some(performer)) = &mut state.detail.performer {
            if performer.id == id {
                if let Some(rating) = rating100 {
                    performer.rating100 = Some(rating);
                }
                if let Some(fav) = favorite {
                    performer.favorite = fav;
                }
            }
        }

        // Keep the home rail consistent when the same performer is visible.
        if let Fetch::Loaded(performers) = &mut state.home.performers {
            if let Some(performer) = performers.iter_mut().find(|p| p.id == id) {
                if let Some(rating) = rating100 {
                    performer.rating100 = Some(rating);
                }
                if let Some(fav) = favorite {
                    performer.favorite = fav;
                }
            }
        }
    }

    fn handle_available_tags_result(&mut self, result: Result<Vec<TagItem>, String>) {
        let mut state = self.state.write();
        state.reels.available_tags = fetch_from(result);
    }

    fn handle_stats_result(&mut self, result: Result<ServerStats, String>) {
        tracing::debug!(success = result.is_ok(), "Processing stats result");
        let mut state = self.state.write();
        state.settings.stats = fetch_from(result);
    }
}
