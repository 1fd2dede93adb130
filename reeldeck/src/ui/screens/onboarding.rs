//! # Onboarding Screen
//!
//! First-run connection setup: server URL and API key. The app stays here
//! until both values validate and persist.

use crate::app::{App, AppState};

/// Render the onboarding screen.
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    ui.vertical_centered(|ui| {
        ui.add_space(60.0);
        ui.heading("Connect to your server");
        ui.add_space(4.0);
        ui.weak("Enter the address of your media catalog server and an API key.");
        ui.add_space(24.0);

        ui.scope(|ui| {
            ui.set_max_width(360.0);

            ui.label("Server URL");
            let mut url = state.onboarding.url_input.clone();
            let url_edit = egui::TextEdit::singleline(&mut url)
                .hint_text("http://localhost:9999")
                .desired_width(f32::INFINITY);
            if ui.add(url_edit).changed() {
                app.state.write().onboarding.url_input = url;
            }
            ui.add_space(8.0);

            ui.label("API Key");
            let mut key = state.onboarding.key_input.clone();
            let key_edit = egui::TextEdit::singleline(&mut key)
                .password(true)
                .desired_width(f32::INFINITY);
            if ui.add(key_edit).changed() {
                app.state.write().onboarding.key_input = key;
            }
            ui.add_space(16.0);

            let ready = !state.onboarding.saving
                && !state.onboarding.url_input.trim().is_empty()
                && !state.onboarding.key_input.trim().is_empty();
            let label = if state.onboarding.saving {
                "Saving\u{2026}"
            } else {
                "Continue"
            };
            if ui
                .add_enabled(ready, egui::Button::new(label).min_size([360.0, 32.0].into()))
                .clicked()
            {
                app.handle_onboarding_save();
            }

            if let Some(error) = &state.onboarding.error {
                ui.add_space(8.0);
                ui.colored_label(ui.visuals().error_fg_color, error);
            }
        });
    });
}
