//! # Application State Types
//!
//! All state-related types for the application: screens, per-screen fetch
//! state, the reels playback surface, and the connection-derived services.

use std::path::PathBuf;
use std::sync::Arc;

use shared::{ImageItem, PerformerItem, SceneItem, ServerStats, TagItem, VersionInfo};

use crate::feed::FeedSynchronizer;
use crate::services::api::ApiClient;
use crate::services::config::ConnectionConfig;

/// Application screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// First-run connection setup
    Onboarding,
    /// Recent scenes / performers / images rails
    Home,
    /// Tabbed grids for the whole library
    Browse,
    /// Swipeable feed with playback tracking
    Reels,
    /// Scene details and tag editing
    SceneDetail,
    /// Performer details with rating and favorite
    PerformerDetail,
    /// Full-size image view
    ImageDetail,
    /// Connection, server info, theme
    Settings,
}

impl Screen {
    /// Screens reachable from the navigation bar, in order
    pub fn nav_order() -> &'static [Screen] {
        &[Screen::Home, Screen::Browse, Screen::Reels, Screen::Settings]
    }

    /// Get screen title for header display
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Onboarding => "Connect",
            Screen::Home => "Home",
            Screen::Browse => "Browse",
            Screen::Reels => "Reels",
            Screen::SceneDetail => "Scene",
            Screen::PerformerDetail => "Performer",
            Screen::ImageDetail => "Image",
            Screen::Settings => "Settings",
        }
    }
}

/// Tri-state for a per-screen fetch: the screen shows a spinner, an error
/// with a retry control, or the data.
#[derive(Debug, Clone, PartialEq)]
pub enum Fetch<T> {
    Loading,
    Error(String),
    Loaded(T),
}

impl<T> Fetch<T> {
    pub fn loaded(&self) -> Option<&T> {
        match self {
            Fetch::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Fetch::Loading)
    }
}

impl<T> Default for Fetch<T> {
    fn default() -> Self {
        Fetch::Loading
    }
}

/// Home screen rails
#[derive(Debug, Clone, Default)]
pub struct HomeState {
    pub scenes: Fetch<Vec<SceneItem>>,
    pub performers: Fetch<Vec<PerformerItem>>,
    pub images: Fetch<Vec<ImageItem>>,
    /// Flag to prevent concurrent rail fetches (prevents task pileup)
    pub fetching: bool,
}

/// Active tab in the browse screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseTab {
    Scenes,
    Images,
    Performers,
}

impl BrowseTab {
    pub fn all() -> &'static [BrowseTab] {
        &[BrowseTab::Scenes, BrowseTab::Images, BrowseTab::Performers]
    }

    pub fn title(&self) -> &'static str {
        match self {
            BrowseTab::Scenes => "Scenes",
            BrowseTab::Images => "Images",
            BrowseTab::Performers => "Performers",
        }
    }
}

/// Browse screen state: one grid per tab, fetched lazily
#[derive(Debug, Clone)]
pub struct BrowseState {
    pub active_tab: BrowseTab,
    pub scenes: Fetch<Vec<SceneItem>>,
    pub images: Fetch<Vec<ImageItem>>,
    pub performers: Fetch<Vec<PerformerItem>>,
    pub fetching: bool,
}

impl Default for BrowseState {
    fn default() -> Self {
        Self {
            active_tab: BrowseTab::Scenes,
            scenes: Fetch::Loading,
            images: Fetch::Loading,
            performers: Fetch::Loading,
            fetching: false,
        }
    }
}

/// Reels screen state: playback surface position plus dialog/in-flight flags.
///
/// The feed list itself lives in the [`FeedSynchronizer`]; this struct only
/// holds what the rendering layer needs between frames.
#[derive(Debug, Clone)]
pub struct ReelsState {
    /// Index of the active reel within the loaded feed
    pub current_index: usize,
    /// Id of the reel whose session is live; compared each tick so a feed
    /// change activates the new item and deactivates the old one
    pub active_scene_id: Option<String>,
    /// Playback position of the active reel, driven by the frame clock
    pub position_ms: u64,
    pub playing: bool,
    pub show_details: bool,
    pub show_rating_dialog: bool,
    pub show_add_tag_dialog: bool,
    pub new_tag_name: String,
    /// Tag catalog for the add-tag dialog
    pub available_tags: Fetch<Vec<TagItem>>,
    /// The triggering control is disabled while its mutation is in flight,
    /// so the same action cannot race itself on one item.
    pub rating_in_flight: bool,
    pub o_count_in_flight: bool,
    pub tag_edit_in_flight: bool,
}

impl Default for ReelsState {
    fn default() -> Self {
        Self {
            current_index: 0,
            active_scene_id: None,
            position_ms: 0,
            playing: true,
            show_details: false,
            show_rating_dialog: false,
            show_add_tag_dialog: false,
            new_tag_name: String::new(),
            available_tags: Fetch::Loading,
            rating_in_flight: false,
            o_count_in_flight: false,
            tag_edit_in_flight: false,
        }
    }
}

/// Detail screens: which item is open and its fetched payload
#[derive(Debug, Clone, Default)]
pub struct DetailState {
    pub scene_id: Option<String>,
    pub scene: Fetch<Option<SceneItem>>,
    pub performer_id: Option<String>,
    pub performer: Fetch<Option<PerformerItem>>,
    /// Selected image is carried over from the listing; no refetch needed
    pub image: Option<ImageItem>,
    pub performer_edit_in_flight: bool,
}

/// Onboarding form state
#[derive(Debug, Clone, Default)]
pub struct OnboardingState {
    pub url_input: String,
    pub key_input: String,
    pub error: Option<String>,
    pub saving: bool,
}

/// Settings screen state
#[derive(Debug, Clone, Default)]
pub struct SettingsState {
    pub stats: Fetch<ServerStats>,
    pub version: Fetch<VersionInfo>,
    pub fetching: bool,
    /// Connection edit form, shown on demand
    pub editing_connection: bool,
    pub url_input: String,
    pub key_input: String,
    pub edit_error: Option<String>,
}

/// Global application state
#[derive(Clone)]
pub struct AppState {
    /// Current active screen
    pub current_screen: Screen,
    /// Persisted connection configuration
    pub config: ConnectionConfig,
    /// Where the configuration is stored on disk
    pub config_path: PathBuf,
    /// Gateway client; present once the connection config is complete
    pub api_client: Option<Arc<ApiClient>>,
    /// Reels feed synchronizer; rebuilt together with the gateway
    pub feed: Option<Arc<FeedSynchronizer>>,
    pub home: HomeState,
    pub browse: BrowseState,
    pub reels: ReelsState,
    pub detail: DetailState,
    pub onboarding: OnboardingState,
    pub settings: SettingsState,
}

impl AppState {
    /// Both connection values are known and the gateway exists.
    pub fn is_connected(&self) -> bool {
        self.config.is_complete() && self.api_client.is_some()
    }

    /// Check if a screen needs a configured connection
    pub fn requires_connection(screen: Screen) -> bool {
        !matches!(screen, Screen::Onboarding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========== Screen Tests ==========

    #[test]
    fn test_nav_order() {
        let screens = Screen::nav_order();
        assert_eq!(screens.len(), 4);
        assert_eq!(screens[0], Screen::Home);
        assert_eq!(screens[3], Screen::Settings);
    }

    #[test]
    fn test_screen_title() {
        assert_eq!(Screen::Home.title(), "Home");
        assert_eq!(Screen::Reels.title(), "Reels");
        assert_eq!(Screen::Onboarding.title(), "Connect");
    }

    #[test]
    fn test_requires_connection() {
        assert!(!AppState::requires_connection(Screen::Onboarding));
        assert!(AppState::requires_connection(Screen::Home));
        assert!(AppState::requires_connection(Screen::Reels));
        assert!(AppState::requires_connection(Screen::Settings));
    }

    // ========== Fetch Tests ==========

    #[test]
    fn test_fetch_helpers() {
        let loading: Fetch<Vec<i32>> = Fetch::Loading;
        assert!(loading.is_loading());
        assert_eq!(loading.loaded(), None);

        let loaded = Fetch::Loaded(vec![1, 2]);
        assert!(!loaded.is_loading());
        assert_eq!(loaded.loaded(), Some(&vec![1, 2]));

        let error: Fetch<Vec<i32>> = Fetch::Error("Network error: down".to_string());
        assert!(!error.is_loading());
        assert_eq!(error.loaded(), None);
    }
}
