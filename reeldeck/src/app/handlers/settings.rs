//! # Settings Handlers
//!
//! Theme mode persistence and connection edits from the settings screen.

use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::services::config::ThemeMode;

/// Handle theme mode change: applied immediately and persisted with the
/// connection config.
pub(crate) fn handle_theme_change(state: Arc<RwLock<AppState>>, mode: ThemeMode) {
    let mut guard = state.write();
    guard.config.theme_mode = mode;
    let path = guard.config_path.clone();
    if let Err(e) = guard.config.save_to_file(&path) {
        tracing::error!(error = %e, "Failed to save theme mode");
    }
}

/// Handle connection save from the settings edit form. Reuses the onboarding
/// apply path so the gateway and feed are rebuilt consistently.
pub(crate) fn handle_connection_save(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (url, key) = {
        let mut guard = state.write();
        guard.settings.edit_error = None;
        (
            guard.settings.url_input.clone(),
            guard.settings.key_input.clone(),
        )
    };

    let result =
        crate::app::handlers::onboarding::apply_connection(Arc::clone(&state), event_tx, &url, &key);

    let mut guard = state.write();
    match result {
        Ok(()) => guard.settings.editing_connection = false,
        Err(reason) => guard.settings.edit_error = Some(reason),
    }
}

/// Open the connection edit form prefilled with the current values.
pub(crate) fn handle_connection_edit_open(state: Arc<RwLock<AppState>>) {
    let mut guard = state.write();
    guard.settings.url_input = guard.config.server_url.clone().unwrap_or_default();
    guard.settings.key_input = guard.config.api_key.clone().unwrap_or_default();
    guard.settings.edit_error = None;
    guard.settings.editing_connection = true;
}
