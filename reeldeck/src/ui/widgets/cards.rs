//! # Media Cards
//!
//! Clickable cards for rails and grids. Thumbnails stream in through the
//! egui_extras image loaders; a titled placeholder shows until then (or when
//! the server has no thumbnail for the item).

use shared::{ImageItem, PerformerItem, SceneItem};

const CARD_WIDTH: f32 = 160.0;
const CARD_HEIGHT: f32 = 90.0;
const PORTRAIT_HEIGHT: f32 = 200.0;

fn thumbnail(ui: &mut egui::Ui, url: Option<&str>, title: &str, height: f32) -> egui::Response {
    match url {
        Some(url) => ui.add_sized(
            [CARD_WIDTH, height],
            egui::Image::from_uri(url.to_string())
                .corner_radius(4)
                .sense(egui::Sense::click()),
        ),
        None => ui.add_sized(
            [CARD_WIDTH, height],
            egui::Button::new(shared::truncate_title(title, 18)),
        ),
    }
}

/// Scene card: thumbnail plus title. Returns the click response.
pub fn scene_card(ui: &mut egui::Ui, scene: &SceneItem) -> egui::Response {
    ui.vertical(|ui| {
        ui.set_width(CARD_WIDTH);
        let response = thumbnail(ui, scene.thumbnail_url.as_deref(), &scene.title, CARD_HEIGHT);
        ui.small(shared::truncate_title(&scene.title, 22));
        ui.weak(shared::format_duration(scene.duration));
        response
    })
    .inner
}

/// Performer card: portrait plus name.
pub fn performer_card(ui: &mut egui::Ui, performer: &PerformerItem) -> egui::Response {
    ui.vertical(|ui| {
        ui.set_width(CARD_WIDTH);
        let response = thumbnail(
            ui,
            performer.image_url.as_deref(),
            &performer.name,
            PORTRAIT_HEIGHT,
        );
        ui.horizontal(|ui| {
            if performer.favorite {
                ui.colored_label(egui::Color32::from_rgb(0xe0, 0x40, 0x60), "\u{2665}");
            }
            ui.small(shared::truncate_title(&performer.name, 20));
        });
        response
    })
    .inner
}

/// Image card: thumbnail plus title.
pub fn image_card(ui: &mut egui::Ui, image: &ImageItem) -> egui::Response {
    ui.vertical(|ui| {
        ui.set_width(CARD_WIDTH);
        let response = thumbnail(ui, image.thumbnail_url.as_deref(), &image.title, CARD_HEIGHT);
        ui.small(shared::truncate_title(&image.title, 22));
        response
    })
    .inner
}
