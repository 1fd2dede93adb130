//! # GUI Rendering
//!
//! Frame rendering pipeline: clone a state snapshot, apply the theme, route
//! to the active screen, draw the navigation bar. No lock is held while
//! widgets draw.

pub mod screens;
pub mod theme;
pub mod widgets;

use crate::app::{App, AppState, Screen};

/// Main render function - called every frame by eframe.
pub fn render(ctx: &egui::Context, app: &mut App) {
    // Read state for rendering; skip the frame if a task holds the lock.
    let state = match app.state.try_read() {
        Some(guard) => guard.clone(),
        None => return,
    };

    theme::apply(ctx, state.config.theme_mode);

    // Route back to setup whenever the connection disappears from under a
    // screen that needs it.
    if AppState::requires_connection(state.current_screen) && !state.is_connected() {
        app.handle_screen_change(Screen::Onboarding);
        egui::CentralPanel::default().show(ctx, |ui| {
            screens::onboarding::render(ui, &state, app);
        });
        return;
    }

    if state.current_screen != Screen::Onboarding {
        egui::TopBottomPanel::bottom("nav_bar").show(ctx, |ui| {
            widgets::nav_bar::render(ui, &state, app);
        });

        // Tab cycles through the nav-bar screens.
        if ctx.input(|i| i.key_pressed(egui::Key::Tab) && !i.modifiers.shift) {
            app.next_screen();
        }
        if ctx.input(|i| i.key_pressed(egui::Key::Tab) && i.modifiers.shift) {
            app.previous_screen();
        }
    }

    egui::CentralPanel::default().show(ctx, |ui| match state.current_screen {
        Screen::Onboarding => screens::onboarding::render(ui, &state, app),
        Screen::Home => screens::home::render(ui, &state, app),
        Screen::Browse => screens::browse::render(ui, &state, app),
        Screen::Reels => screens::reels::render(ui, &state, app),
        Screen::SceneDetail => screens::scene_detail::render(ui, &state, app),
        Screen::PerformerDetail => screens::performer_detail::render(ui, &state, app),
        Screen::ImageDetail => screens::image_detail::render(ui, &state, app),
        Screen::Settings => screens::settings::render(ui, &state, app),
    });
}
