//! # Home Screen
//!
//! Three recency rails: scenes, performers, images.

use crate::app::{App, AppState, Fetch};
use crate::ui::widgets::{self, cards};

/// Render the home screen.
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.heading("Home");
        ui.add_space(8.0);

        ui.label(egui::RichText::new("Recent Scenes").strong());
        match &state.home.scenes {
            Fetch::Loading => widgets::loading(ui),
            Fetch::Error(message) => {
                if widgets::error_with_retry(ui, message) {
                    app.fetch_home_rails();
                }
            }
            Fetch::Loaded(scenes) if scenes.is_empty() => {
                ui.weak("No scenes yet");
            }
            Fetch::Loaded(scenes) => {
                egui::ScrollArea::horizontal()
                    .id_salt("home_scenes")
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            for scene in scenes {
                                if cards::scene_card(ui, scene).clicked() {
                                    app.open_scene_detail(scene.id.clone());
                                }
                            }
                        });
                    });
            }
        }
        ui.add_space(16.0);

        ui.label(egui::RichText::new("Recent Performers").strong());
        match &state.home.performers {
            Fetch::Loading => widgets::loading(ui),
            Fetch::Error(message) => {
                if widgets::error_with_retry(ui, message) {
                    app.fetch_home_rails();
                }
            }
            Fetch::Loaded(performers) if performers.is_empty() => {
                ui.weak("No performers yet");
            }
            Fetch::Loaded(performers) => {
                egui::ScrollArea::horizontal()
                    .id_salt("home_performers")
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            for performer in performers {
                                if cards::performer_card(ui, performer).clicked() {
                                    app.open_performer_detail(performer.id.clone());
                                }
                            }
                        });
                    });
            }
        }
        ui.add_space(16.0);

        ui.label(egui::RichText::new("Recent Images").strong());
        match &state.home.images {
            Fetch::Loading => widgets::loading(ui),
            Fetch::Error(message) => {
                if widgets::error_with_retry(ui, message) {
                    app.fetch_home_rails();
                }
            }
            Fetch::Loaded(images) if images.is_empty() => {
                ui.weak("No images yet");
            }
            Fetch::Loaded(images) => {
                egui::ScrollArea::horizontal()
                    .id_salt("home_images")
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            for image in images {
                                if cards::image_card(ui, image).clicked() {
                                    app.open_image_detail(image.clone());
                                }
                            }
                        });
                    });
            }
        }
    });
}
