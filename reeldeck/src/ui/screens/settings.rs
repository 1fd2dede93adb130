//! # Settings Screen
//!
//! Theme mode, connection status and editing, server statistics, and the
//! server's build version.

use crate::app::{App, AppState, Fetch};
use crate::services::config::ThemeMode;
use crate::ui::theme;
use crate::ui::widgets;

/// Render the settings screen.
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.heading("Settings");
        ui.add_space(12.0);

        // Theme
        ui.label(egui::RichText::new("Theme").strong());
        ui.group(|ui| {
            for mode in [ThemeMode::System, ThemeMode::Light, ThemeMode::Dark] {
                let selected = state.config.theme_mode == mode;
                if ui.radio(selected, theme::mode_label(mode)).clicked() && !selected {
                    app.handle_theme_change(mode);
                }
            }
        });
        ui.add_space(12.0);

        // Connection
        ui.label(egui::RichText::new("Connection").strong());
        ui.group(|ui| {
            let connected = state.is_connected();
            ui.horizontal(|ui| {
                let (symbol, color) = if connected {
                    ("\u{25cf}", egui::Color32::from_rgb(0x40, 0xa0, 0x50))
                } else {
                    ("\u{25cf}", ui.visuals().error_fg_color)
                };
                ui.colored_label(color, symbol);
                match state.config.server_url.as_deref() {
                    Some(url) if connected => ui.label(format!("Connected to {}", url)),
                    _ => ui.label("Not configured"),
                };
            });

            if state.settings.editing_connection {
                render_connection_form(ui, state, app);
            } else if ui.button("Edit connection").clicked() {
                app.handle_connection_edit_open();
            }
        });
        ui.add_space(12.0);

        // Server statistics
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("Server Statistics").strong());
            if ui.small_button("\u{21bb}").clicked() {
                app.fetch_server_info();
            }
        });
        ui.group(|ui| match &state.settings.stats {
            Fetch::Loading => widgets::loading(ui),
            Fetch::Error(message) => {
                if widgets::error_with_retry(ui, message) {
                    app.fetch_server_info();
                }
            }
            Fetch::Loaded(stats) => {
                ui.label(format!("Scenes: {}", stats.scene_count));
                ui.label(format!("Images: {}", stats.image_count));
                ui.label(format!("Performers: {}", stats.performer_count));
                ui.label(format!(
                    "Total play time: {}",
                    shared::format_play_time(stats.total_play_duration)
                ));
                ui.label(format!("Total O-count: {}", stats.total_o_count));
            }
        });
        ui.add_space(12.0);

        // Server version
        ui.label(egui::RichText::new("Server Version").strong());
        ui.group(|ui| match &state.settings.version {
            Fetch::Loading => {
                ui.weak("Loading\u{2026}");
            }
            Fetch::Error(message) => {
                ui.colored_label(ui.visuals().error_fg_color, message);
            }
            Fetch::Loaded(version) => {
                ui.label(&version.version);
                if let Some(build_time) = &version.build_time {
                    // The server reports RFC 3339; fall back to the raw string.
                    let display = chrono::DateTime::parse_from_rfc3339(build_time)
                        .map(|dt| dt.format("Built %Y-%m-%d %H:%M").to_string())
                        .unwrap_or_else(|_| build_time.clone());
                    ui.weak(display);
                }
            }
        });
    });
}

fn render_connection_form(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    ui.add_space(6.0);
    ui.label("Server URL");
    let mut url = state.settings.url_input.clone();
    if ui.text_edit_singleline(&mut url).changed() {
        app.state.write().settings.url_input = url;
    }

    ui.label("API Key");
    let mut key = state.settings.key_input.clone();
    let key_edit = egui::TextEdit::singleline(&mut key).password(true);
    if ui.add(key_edit).changed() {
        app.state.write().settings.key_input = key;
    }

    ui.horizontal(|ui| {
        if ui.button("Save").clicked() {
            app.handle_connection_save();
        }
        if ui.button("Cancel").clicked() {
            app.state.write().settings.editing_connection = false;
        }
    });

    if let Some(error) = &state.settings.edit_error {
        ui.colored_label(ui.visuals().error_fg_color, error);
    }
}
