//! # Performer Detail Screen
//!
//! Performer view with the two editable fields: rating and favorite. Both
//! follow confirm-then-patch: the display only changes once the server
//! confirms the update.

use crate::app::{App, AppState, Fetch, Screen};
use crate::ui::widgets::{self, rating};

/// Render the performer detail screen.
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    ui.horizontal(|ui| {
        if ui.button("\u{2190} Back").clicked() {
            app.handle_screen_change(Screen::Home);
        }
        ui.heading("Performer");
    });
    ui.separator();

    match &state.detail.performer {
        Fetch::Loading => widgets::loading(ui),
        Fetch::Error(message) => {
            if widgets::error_with_retry(ui, message) {
                if let Some(id) = state.detail.performer_id.clone() {
                    app.open_performer_detail(id);
                }
            }
        }
        Fetch::Loaded(None) => {
            ui.weak("Performer not found");
        }
        Fetch::Loaded(Some(performer)) => {
            egui::ScrollArea::vertical().show(ui, |ui| {
                if let Some(url) = performer.image_url.as_deref() {
                    ui.add(
                        egui::Image::from_uri(url.to_string())
                            .max_height(320.0)
                            .corner_radius(4),
                    );
                }

                ui.horizontal(|ui| {
                    ui.heading(&performer.name);
                    let heart = if performer.favorite {
                        egui::RichText::new("\u{2665}")
                            .size(22.0)
                            .color(egui::Color32::from_rgb(0xe0, 0x40, 0x60))
                    } else {
                        egui::RichText::new("\u{2661}").size(22.0)
                    };
                    let button = egui::Button::new(heart).frame(false);
                    if ui
                        .add_enabled(!state.detail.performer_edit_in_flight, button)
                        .clicked()
                    {
                        app.handle_performer_favorite(performer.id.clone(), !performer.favorite);
                    }
                });
                ui.add_space(8.0);

                ui.label(egui::RichText::new("Rating").strong());
                if let Some(rating100) = rating::star_row(
                    ui,
                    performer.rating100,
                    !state.detail.performer_edit_in_flight,
                ) {
                    app.handle_performer_rating(performer.id.clone(), rating100);
                }
                ui.add_space(8.0);

                ui.label(format!("Scenes: {}", performer.scene_count));
                if let Some(o_count) = performer.o_count {
                    ui.label(format!("O-Count: {}", o_count));
                }
            });
        }
    }
}
