//! # Application Orchestrator
//!
//! The main [`App`] struct coordinates the GUI rendering layer, async task
//! handlers, and application state.
//!
//! ## Architecture
//!
//! Event-driven, single frame loop:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  Frame Loop (egui)                          │
//! │  App::on_tick()        - drains async results every frame   │
//! │  App::handle_*()       - user action handlers               │
//! │  State: Arc<RwLock<AppState>> - locks held briefly          │
//! └───────────────────────┬─────────────────────────────────────┘
//!                         │ async_channel (unbounded)
//! ┌───────────────────────▼─────────────────────────────────────┐
//! │              Async Tasks (shared Tokio runtime)             │
//! │  tasks::*   - per-screen fetches -> AppEvent                │
//! │  feed::FeedSynchronizer - owns the reels feed state cell    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Per-screen fetches report back through [`AppEvent`]; the reels feed is
//! different: its state lives inside [`crate::feed::FeedSynchronizer`],
//! which handlers call directly and the reels screen reads directly.
//!
//! ## State Management
//!
//! `Arc<RwLock<AppState>>` with `parking_lot` locks. Rendering clones a
//! snapshot each frame; handlers take the write lock only long enough to
//! flip flags and clone the `Arc`s they need. Locks are never held across
//! awaits.

mod event_handler;
mod events;
mod handlers;
mod state;
mod tasks;

pub use events::AppEvent;
pub use state::*;

use async_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;
use std::path::PathBuf;
use std::sync::Arc;

use crate::core::service::CatalogService;
use crate::feed::FeedSynchronizer;
use crate::services::api::{ApiClient, FeedOrder};
use crate::services::config::{self, ConnectionConfig, ThemeMode};
use crate::utils::runtime::TOKIO_RT;

/// Page size for the reels feed, matching the server's sample bound.
pub(crate) const REELS_PAGE_SIZE: usize = 50;

/// Main application orchestrator.
pub struct App {
    /// Thread-safe shared application state.
    pub state: Arc<RwLock<AppState>>,
    /// Channel receiver for async task results, polled in `on_tick()`.
    pub event_rx: Receiver<AppEvent>,
    /// Cloned into async tasks for sending results back.
    event_tx: Sender<AppEvent>,
}

impl App {
    /// Create the application with the default config file location.
    pub fn new() -> Self {
        Self::with_config_path(config::default_config_path())
    }

    /// Create the application, loading configuration from `config_path`.
    ///
    /// When the stored connection is complete the gateway and feed
    /// synchronizer are built immediately, the first feed load and home
    /// fetches start, and the app lands on Home. Otherwise it lands on the
    /// first-run setup screen.
    pub fn with_config_path(config_path: PathBuf) -> Self {
        let config = ConnectionConfig::load_from_file(&config_path).unwrap_or_else(|e| {
            tracing::warn!(error = %e, path = ?config_path, "Failed to load config, using defaults");
            ConnectionConfig::default()
        });

        let (api_client, feed) = if config.is_complete() {
            let url = config.server_url.clone().unwrap_or_default();
            let key = config.api_key.clone().unwrap_or_default();
            let client = Arc::new(ApiClient::new(&url, &key));
            let feed = Arc::new(FeedSynchronizer::new(
                Arc::clone(&client) as Arc<dyn CatalogService>,
                FeedOrder::Random,
                REELS_PAGE_SIZE,
            ));
            (Some(client), Some(feed))
        } else {
            (None, None)
        };

        let current_screen = if api_client.is_some() {
            Screen::Home
        } else {
            Screen::Onboarding
        };

        let state = AppState {
            current_screen,
            config,
            config_path,
            api_client,
            feed: feed.clone(),
            home: HomeState::default(),
            browse: BrowseState::default(),
            reels: ReelsState::default(),
            detail: DetailState::default(),
            onboarding: OnboardingState::default(),
            settings: SettingsState::default(),
        };

        let (event_tx, event_rx) = unbounded();
        let app = App {
            state: Arc::new(RwLock::new(state)),
            event_rx,
            event_tx,
        };

        if let Some(feed) = feed {
            TOKIO_RT.spawn(async move { feed.load().await });
            tasks::home::fetch_rails(app.state.clone(), app.event_tx.clone());
        }

        tracing::info!(screen = ?current_screen, "App state initialized");
        app
    }

    /// Called every frame: drain async results and keep the live reel
    /// session aligned with what is on screen.
    pub fn on_tick(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
        }

        let on_reels = self.state.read().current_screen == Screen::Reels;
        if on_reels {
            handlers::reels::sync_active_reel(self.state.clone());
        }
    }

    /// Handle async event results
    fn handle_event(&mut self, event: AppEvent) {
        use event_handler::AppEventHandler;
        self.handle_event_impl(event);
    }

    /// Flush the live playback session before the process exits.
    pub fn on_exit(&mut self) {
        let (feed, active) = {
            let mut state = self.state.write();
            (state.feed.clone(), state.reels.active_scene_id.take())
        };
        if let (Some(feed), Some(id)) = (feed, active) {
            TOKIO_RT.block_on(async move { feed.note_deactivated(&id).await });
        }
    }

    // ========== Navigation ==========

    /// Handle screen change
    pub fn handle_screen_change(&mut self, screen: Screen) {
        handlers::navigation::handle_screen_change(self.state.clone(), self.event_tx.clone(), screen);
    }

    /// Navigate to next nav-bar screen in Tab order
    pub fn next_screen(&mut self) {
        self.step_nav(1);
    }

    /// Navigate to previous nav-bar screen in Tab order
    pub fn previous_screen(&mut self) {
        self.step_nav(-1);
    }

    fn step_nav(&mut self, delta: i64) {
        let current = self.state.read().current_screen;
        let order = Screen::nav_order();
        let index = order.iter().position(|s| *s == current).unwrap_or(0) as i64;
        let next = (index + delta).rem_euclid(order.len() as i64) as usize;
        self.handle_screen_change(order[next]);
    }

    /// Handle browse tab change
    pub fn handle_browse_tab_change(&mut self, tab: BrowseTab) {
        handlers::navigation::handle_browse_tab_change(self.state.clone(), self.event_tx.clone(), tab);
    }

    // ========== Onboarding / Connection ==========

    /// Handle the onboarding continue button
    pub fn handle_onboarding_save(&mut self) {
        handlers::onboarding::handle_onboarding_save(self.state.clone(), self.event_tx.clone());
    }

    /// Handle connection save from the settings edit form
    pub fn handle_connection_save(&mut self) {
        handlers::settings::handle_connection_save(self.state.clone(), self.event_tx.clone());
    }

    /// Open the settings connection edit form
    pub fn handle_connection_edit_open(&mut self) {
        handlers::settings::handle_connection_edit_open(self.state.clone());
    }

    /// Handle theme mode change
    pub fn handle_theme_change(&mut self, mode: ThemeMode) {
        handlers::settings::handle_theme_change(self.state.clone(), mode);
    }

    /// Re-fetch server statistics and version
    pub fn fetch_server_info(&mut self) {
        tasks::server::fetch_server_info(self.state.clone(), self.event_tx.clone());
    }

    /// Re-fetch the home rails
    pub fn fetch_home_rails(&mut self) {
        tasks::home::fetch_rails(self.state.clone(), self.event_tx.clone());
    }

    /// Re-fetch the active browse tab
    pub fn fetch_browse_tab(&mut self, tab: BrowseTab) {
        tasks::browse::fetch_tab(self.state.clone(), self.event_tx.clone(), tab);
    }

    // ========== Reels ==========

    /// Advance the playback clock by one frame
    pub fn handle_playback_tick(&mut self, dt_seconds: f32) {
        handlers::reels::handle_playback_tick(self.state.clone(), dt_seconds);
    }

    /// Step to the next or previous reel
    pub fn handle_reel_step(&mut self, delta: i64) {
        handlers::reels::handle_reel_step(self.state.clone(), delta);
    }

    /// Toggle pause/play
    pub fn handle_toggle_playing(&mut self) {
        handlers::reels::handle_toggle_playing(self.state.clone());
    }

    /// Seek within the active reel
    pub fn handle_seek(&mut self, position_ms: u64) {
        handlers::reels::handle_seek(self.state.clone(), position_ms);
    }

    /// Reload the feed, discarding playback sessions
    pub fn handle_reels_refresh(&mut self) {
        handlers::reels::handle_refresh(self.state.clone());
    }

    /// Rating picked in the rating dialog
    pub fn handle_rating_selected(&mut self, id: String, rating100: i64) {
        handlers::reels::handle_rating_selected(self.state.clone(), id, rating100);
    }

    /// O-count action button
    pub fn handle_increment_o_count(&mut self, id: String) {
        handlers::reels::handle_increment_o_count(self.state.clone(), id);
    }

    /// O-count reset from the details sheet
    pub fn handle_reset_o_count(&mut self, id: String) {
        handlers::reels::handle_reset_o_count(self.state.clone(), id);
    }

    /// Attach an existing tag
    pub fn handle_add_tag(&mut self, id: String, tag: shared::TagItem) {
        handlers::reels::handle_add_tag(self.state.clone(), id, tag);
    }

    /// Detach a tag
    pub fn handle_remove_tag(&mut self, id: String, tag: shared::TagItem) {
        handlers::reels::handle_remove_tag(self.state.clone(), id, tag);
    }

    /// Create a tag by name and attach it
    pub fn handle_create_tag(&mut self, id: String, name: String) {
        handlers::reels::handle_create_tag(self.state.clone(), id, name);
    }

    /// Open the add-tag dialog, fetching the catalog for it
    pub fn handle_open_add_tag_dialog(&mut self) {
        {
            let mut state = self.state.write();
            state.reels.show_add_tag_dialog = true;
            state.reels.new_tag_name.clear();
        }
        tasks::detail::fetch_available_tags(self.state.clone(), self.event_tx.clone());
    }

    // ========== Details ==========

    /// Open a scene's detail screen
    pub fn open_scene_detail(&mut self, id: String) {
        handlers::detail::open_scene(self.state.clone(), self.event_tx.clone(), id);
    }

    /// Open a performer's detail screen
    pub fn open_performer_detail(&mut self, id: String) {
        handlers::detail::open_performer(self.state.clone(), self.event_tx.clone(), id);
    }

    /// Open an image's detail screen
    pub fn open_image_detail(&mut self, image: shared::ImageItem) {
        handlers::detail::open_image(self.state.clone(), image);
    }

    /// Set a performer's rating
    pub fn handle_performer_rating(&mut self, id: String, rating100: i64) {
        handlers::detail::handle_performer_rating(self.state.clone(), self.event_tx.clone(), id, rating100);
    }

    /// Toggle a performer's favorite flag
    pub fn handle_performer_favorite(&mut self, id: String, favorite: bool) {
        handlers::detail::handle_performer_favorite(self.state.clone(), self.event_tx.clone(), id, favorite);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::PerformerItem;

    fn test_app() -> App {
        // A path that never exists: the app starts unconfigured.
        App::with_config_path(PathBuf::from("/nonexistent/reeldeck-test-config.json"))
    }

    // ========== Initial State Tests ==========

    #[test]
    fn test_unconfigured_app_starts_on_onboarding() {
        let app = test_app();
        let state = app.state.read();

        assert_eq!(state.current_screen, Screen::Onboarding);
        assert!(state.api_client.is_none());
        assert!(state.feed.is_none());
        assert!(!state.is_connected());
    }

    #[test]
    fn test_initial_screen_states() {
        let app = test_app();
        let state = app.state.read();

        assert!(state.home.scenes.is_loading());
        assert!(state.browse.scenes.is_loading());
        assert_eq!(state.browse.active_tab, BrowseTab::Scenes);
        assert_eq!(state.reels.current_index, 0);
        assert!(state.reels.active_scene_id.is_none());
        assert!(state.settings.stats.is_loading());
    }

    // ========== Navigation Tests ==========

    #[test]
    fn test_screen_change_routes_to_onboarding_when_unconfigured() {
        let mut app = test_app();

        app.handle_screen_change(Screen::Home);
        assert_eq!(app.state.read().current_screen, Screen::Onboarding);

        app.handle_screen_change(Screen::Reels);
        assert_eq!(app.state.read().current_screen, Screen::Onboarding);
    }

    #[test]
    fn test_browse_tab_change() {
        let mut app = test_app();

        app.handle_browse_tab_change(BrowseTab::Performers);
        assert_eq!(app.state.read().browse.active_tab, BrowseTab::Performers);
    }

    // ========== Onboarding Tests ==========

    #[test]
    fn test_onboarding_save_rejects_invalid_url() {
        let mut app = test_app();
        {
            let mut state = app.state.write();
            state.onboarding.url_input = "media.local:9999".to_string(); // no scheme
            state.onboarding.key_input = "secret".to_string();
        }

        app.handle_onboarding_save();

        let state = app.state.read();
        assert_eq!(state.current_screen, Screen::Onboarding);
        assert!(state.onboarding.error.is_some());
        assert!(state.api_client.is_none());
    }

    #[test]
    fn test_onboarding_save_applies_connection() {
        let config_path = std::env::temp_dir().join(format!(
            "reeldeck-test-config-{}.json",
            std::process::id()
        ));
        let _ = std::fs::remove_file(&config_path);

        let mut app = App::with_config_path(config_path.clone());
        {
            let mut state = app.state.write();
            state.onboarding.url_input = "http://test.invalid:9999".to_string();
            state.onboarding.key_input = "secret".to_string();
        }

        app.handle_onboarding_save();

        {
            let state = app.state.read();
            assert_eq!(state.current_screen, Screen::Home);
            assert!(state.is_connected());
            assert!(state.feed.is_some());
            assert!(state.onboarding.error.is_none());
        }

        // Config was persisted and reloads complete.
        let reloaded = ConnectionConfig::load_from_file(&config_path).expect("config readable");
        assert!(reloaded.is_complete());
        let _ = std::fs::remove_file(&config_path);
    }

    // ========== Event Handling Tests ==========

    #[test]
    fn test_home_scenes_event_updates_state() {
        let mut app = test_app();

        app.handle_event(AppEvent::HomeScenesResult(Ok(vec![])));
        assert!(matches!(
            app.state.read().home.scenes,
            Fetch::Loaded(ref items) if items.is_empty()
        ));

        app.handle_event(AppEvent::HomeScenesResult(Err(
            "Network error: down".to_string()
        )));
        assert_eq!(
            app.state.read().home.scenes,
            Fetch::Error("Network error: down".to_string())
        );
    }

    #[test]
    fn test_stats_event_updates_settings() {
        let mut app = test_app();

        let stats = shared::ServerStats {
            scene_count: 10,
            image_count: 20,
            performer_count: 5,
            total_play_duration: 3600.0,
            total_o_count: 7,
        };
        app.handle_event(AppEvent::StatsResult(Ok(stats.clone())));

        assert_eq!(app.state.read().settings.stats, Fetch::Loaded(stats));
    }

    #[test]
    fn test_performer_update_event_patches_only_confirmed_fields() {
        let mut app = test_app();
        let performer = PerformerItem {
            id: "p1".to_string(),
            name: "Alex".to_string(),
            image_url: None,
            rating100: Some(40),
            favorite: false,
            scene_count: 3,
            o_count: None,
        };
        {
            let mut state = app.state.write();
            state.detail.performer_id = Some("p1".to_string());
            state.detail.performer = Fetch::Loaded(Some(performer));
            state.detail.performer_edit_in_flight = true;
        }

        app.handle_event(AppEvent::PerformerUpdateResult {
            id: "p1".to_string(),
            rating100: Some(80),
            favorite: None,
            result: Ok(()),
        });

        let state = app.state.read();
        assert!(!state.detail.performer_edit_in_flight);
        let patched = state
            .detail
            .performer
            .loaded()
            .and_then(|p| p.as_ref())
            .expect("performer loaded");
        assert_eq!(patched.rating100, Some(80));
        assert!(!patched.favorite);
    }

    #[test]
    fn test_performer_update_failure_leaves_detail_unchanged() {
        let mut app = test_app();
        let performer = PerformerItem {
            id: "p1".to_string(),
            name: "Alex".to_string(),
            image_url: None,
            rating100: Some(40),
            favorite: false,
            scene_count: 3,
            o_count: None,
        };
        {
            let mut state = app.state.write();
            state.detail.performer_id = Some("p1".to_string());
            state.detail.performer = Fetch::Loaded(Some(performer));
            state.detail.performer_edit_in_flight = true;
        }

        app.handle_event(AppEvent::PerformerUpdateResult {
            id: "p1".to_string(),
            rating100: Some(80),
            favorite: None,
            result: Err("Server error (500)".to_string()),
        });

        let state = app.state.read();
        assert!(!state.detail.performer_edit_in_flight);
        let patched = state
            .detail
            .performer
            .loaded()
            .and_then(|p| p.as_ref())
            .expect("performer loaded");
        assert_eq!(patched.rating100, Some(40));
    }
}
