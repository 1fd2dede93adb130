//! # Scene Detail Screen
//!
//! Read-only scene view reached from the home and browse listings.

use crate::app::{App, AppState, Fetch, Screen};
use crate::ui::widgets::{self, rating};

/// Render the scene detail screen.
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    ui.horizontal(|ui| {
        if ui.button("\u{2190} Back").clicked() {
            app.handle_screen_change(Screen::Home);
        }
        ui.heading("Scene");
    });
    ui.separator();

    match &state.detail.scene {
        Fetch::Loading => widgets::loading(ui),
        Fetch::Error(message) => {
            if widgets::error_with_retry(ui, message) {
                if let Some(id) = state.detail.scene_id.clone() {
                    app.open_scene_detail(id);
                }
            }
        }
        Fetch::Loaded(None) => {
            ui.weak("Scene not found");
        }
        Fetch::Loaded(Some(scene)) => {
            egui::ScrollArea::vertical().show(ui, |ui| {
                if let Some(url) = scene.thumbnail_url.as_deref() {
                    ui.add(
                        egui::Image::from_uri(url.to_string())
                            .max_height(280.0)
                            .corner_radius(4),
                    );
                }
                ui.heading(&scene.title);
                ui.add_space(8.0);

                if !scene.performers.is_empty() {
                    ui.label(egui::RichText::new("Performers").strong());
                    for performer in &scene.performers {
                        if ui.link(&performer.name).clicked() {
                            app.open_performer_detail(performer.id.clone());
                        }
                    }
                    ui.add_space(8.0);
                }

                ui.label(egui::RichText::new("Video Information").strong());
                ui.label(format!(
                    "Duration: {}",
                    shared::format_duration(scene.duration)
                ));
                ui.label(format!(
                    "Resolution: {}",
                    shared::resolution_label(scene.width, scene.height)
                ));
                ui.add_space(8.0);

                ui.label(egui::RichText::new("Play Statistics").strong());
                rating::star_display(ui, scene.rating100);
                ui.label(format!("O-Count: {}", scene.o_count));
                ui.label(format!("Play Count: {} times", scene.play_count));
                ui.label(format!(
                    "Total Play Time: {}",
                    shared::format_play_time(scene.play_duration)
                ));
                ui.add_space(8.0);

                ui.label(egui::RichText::new("Tags").strong());
                if scene.tags.is_empty() {
                    ui.weak("No tags");
                } else {
                    ui.horizontal_wrapped(|ui| {
                        for tag in &scene.tags {
                            ui.small_button(&tag.name);
                        }
                    });
                }
            });
        }
    }
}
