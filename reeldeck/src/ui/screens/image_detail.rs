//! # Image Detail Screen

use crate::app::{App, AppState, Screen};

/// Render the image detail screen.
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    ui.horizontal(|ui| {
        if ui.button("\u{2190} Back").clicked() {
            app.handle_screen_change(Screen::Home);
        }
        ui.heading("Image");
    });
    ui.separator();

    let Some(image) = &state.detail.image else {
        ui.weak("No image selected");
        return;
    };

    egui::ScrollArea::both().show(ui, |ui| {
        let url = image.image_url.as_deref().or(image.thumbnail_url.as_deref());
        match url {
            Some(url) => {
                ui.add(egui::Image::from_uri(url.to_string()).shrink_to_fit());
            }
            None => {
                ui.weak("No image available");
            }
        }
        ui.label(&image.title);
    });
}
