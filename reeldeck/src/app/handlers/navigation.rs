//! # Navigation Handlers
//!
//! Screen changes and the fetches they trigger.

use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

use crate::app::events::AppEvent;
use crate::app::state::{AppState, BrowseTab, Fetch, Screen};
use crate::app::tasks;
use crate::utils::runtime::TOKIO_RT;

/// Handle screen change
///
/// Internal handler function - use [`crate::app::App::handle_screen_change`]
/// instead. Routes to onboarding when the connection is not configured, and
/// lazily triggers the target screen's fetches.
pub(crate) fn handle_screen_change(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    screen: Screen,
) {
    let target = {
        let mut guard = state.write();

        let target = if AppState::requires_connection(screen) && !guard.is_connected() {
            Screen::Onboarding
        } else {
            screen
        };

        // Leaving the reels surface flushes the active playback session.
        if guard.current_screen == Screen::Reels && target != Screen::Reels {
            if let (Some(feed), Some(active)) =
                (guard.feed.clone(), guard.reels.active_scene_id.take())
            {
                guard.reels.playing = false;
                TOKIO_RT.spawn(async move { feed.note_deactivated(&active).await });
            }
        }

        guard.current_screen = target;
        target
    }; // Lock released here

    match target {
        Screen::Home => {
            let needs_fetch = {
                let guard = state.read();
                guard.home.scenes.is_loading() && !guard.home.fetching
            };
            if needs_fetch {
                tasks::home::fetch_rails(state, event_tx);
            }
        }
        Screen::Browse => {
            let tab = {
                let guard = state.read();
                let tab = guard.browse.active_tab;
                let pending = match tab {
                    BrowseTab::Scenes => guard.browse.scenes.is_loading(),
                    BrowseTab::Images => guard.browse.images.is_loading(),
                    BrowseTab::Performers => {
                        guard.browse.performers.is_loading()
                    }
                };
                (pending && !guard.browse.fetching).then_some(tab)
            };
            if let Some(tab) = tab {
                tasks::browse::fetch_tab(state, event_tx, tab);
            }
        }
        Screen::Settings => {
            let needs_fetch = {
                let guard = state.read();
                matches!(guard.settings.stats, Fetch::Loading) && !guard.settings.fetching
            };
            if needs_fetch {
                tasks::server::fetch_server_info(state, event_tx);
            }
        }
        _ => {}
    }
}

/// Handle browse tab change, fetching the tab's grid on first visit.
pub(crate) fn handle_browse_tab_change(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    tab: BrowseTab,
) {
    let needs_fetch = {
        let mut guard = state.write();
        guard.browse.active_tab = tab;
        let pending = match tab {
            BrowseTab::Scenes => guard.browse.scenes.is_loading(),
            BrowseTab::Images => guard.browse.images.is_loading(),
            BrowseTab::Performers => guard.browse.performers.is_loading(),
        };
        pending && !guard.browse.fetching
    };

    if needs_fetch {
        tasks::browse::fetch_tab(state, event_tx, tab);
    }
}
