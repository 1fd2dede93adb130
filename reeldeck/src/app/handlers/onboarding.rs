//! # Onboarding / Connection Handlers
//!
//! Applying a new server connection: validate, persist, and rebuild the
//! gateway-derived services. Config changes never propagate implicitly;
//! this is the one place the client and feed synchronizer are constructed.

use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

use crate::app::events::AppEvent;
use crate::app::state::{AppState, Screen};
use crate::app::{tasks, REELS_PAGE_SIZE};
use crate::feed::FeedSynchronizer;
use crate::services::api::{ApiClient, FeedOrder};
use crate::utils::runtime::TOKIO_RT;
use crate::utils::validation::{validate_api_key, validate_server_url};

/// Validate, persist, and apply a connection, rebuilding the gateway client
/// and feed synchronizer from the new values. On success the app lands on
/// Home with fresh fetches underway.
pub(crate) fn apply_connection(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    server_url: &str,
    api_key: &str,
) -> Result<(), String> {
    if let Some(reason) = validate_server_url(server_url).error {
        return Err(reason);
    }
    if let Some(reason) = validate_api_key(api_key).error {
        return Err(reason);
    }

    {
        let mut guard = state.write();
        guard.config.set_connection(server_url, api_key);
        let path = guard.config_path.clone();
        guard
            .config
            .save_to_file(&path)
            .map_err(|e| format!("Could not save configuration: {}", e))?;

        let url = guard.config.server_url.clone().unwrap_or_default();
        let key = guard.config.api_key.clone().unwrap_or_default();
        let client = Arc::new(ApiClient::new(&url, &key));
        let feed = Arc::new(FeedSynchronizer::new(
            Arc::clone(&client) as Arc<dyn crate::core::service::CatalogService>,
            FeedOrder::Random,
            REELS_PAGE_SIZE,
        ));

        guard.api_client = Some(client);
        guard.feed = Some(Arc::clone(&feed));

        // A new connection invalidates everything fetched from the old one.
        guard.home = Default::default();
        guard.browse = Default::default();
        guard.reels = Default::default();
        guard.detail = Default::default();
        guard.settings.stats = crate::app::state::Fetch::Loading;
        guard.settings.version = crate::app::state::Fetch::Loading;
        guard.current_screen = Screen::Home;

        TOKIO_RT.spawn(async move { feed.load().await });
        tracing::info!(server_url = %url, "Connection applied, services rebuilt");
    } // Lock released here

    tasks::home::fetch_rails(state, event_tx);
    Ok(())
}

/// Handle the onboarding form's continue button.
///
/// Internal handler function - use
/// [`crate::app::App::handle_onboarding_save`] instead.
pub(crate) fn handle_onboarding_save(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (url, key) = {
        let mut guard = state.write();
        if guard.onboarding.saving {
            return;
        }
        guard.onboarding.saving = true;
        guard.onboarding.error = None;
        (
            guard.onboarding.url_input.clone(),
            guard.onboarding.key_input.clone(),
        )
    };

    let result = apply_connection(Arc::clone(&state), event_tx, &url, &key);

    let mut guard = state.write();
    guard.onboarding.saving = false;
    if let Err(reason) = result {
        guard.onboarding.error = Some(reason);
    }
}
