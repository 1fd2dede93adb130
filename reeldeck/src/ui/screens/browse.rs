//! # Browse Screen
//!
//! Tabbed grids over the library: scenes, images, performers.

use crate::app::{App, AppState, BrowseTab, Fetch};
use crate::ui::widgets::{self, cards};

/// Render the browse screen.
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    ui.horizontal(|ui| {
        for tab in BrowseTab::all() {
            let selected = state.browse.active_tab == *tab;
            if ui.selectable_label(selected, tab.title()).clicked() && !selected {
                app.handle_browse_tab_change(*tab);
            }
        }
    });
    ui.separator();

    let tab = state.browse.active_tab;
    egui::ScrollArea::vertical().show(ui, |ui| match tab {
        BrowseTab::Scenes => match &state.browse.scenes {
            Fetch::Loading => widgets::loading(ui),
            Fetch::Error(message) => {
                if widgets::error_with_retry(ui, message) {
                    app.fetch_browse_tab(tab);
                }
            }
            Fetch::Loaded(scenes) if scenes.is_empty() => {
                ui.weak("No scenes found");
            }
            Fetch::Loaded(scenes) => {
                ui.horizontal_wrapped(|ui| {
                    for scene in scenes {
                        if cards::scene_card(ui, scene).clicked() {
                            app.open_scene_detail(scene.id.clone());
                        }
                    }
                });
            }
        },
        BrowseTab::Images => match &state.browse.images {
            Fetch::Loading => widgets::loading(ui),
            Fetch::Error(message) => {
                if widgets::error_with_retry(ui, message) {
                    app.fetch_browse_tab(tab);
                }
            }
            Fetch::Loaded(images) if images.is_empty() => {
                ui.weak("No images found");
            }
            Fetch::Loaded(images) => {
                ui.horizontal_wrapped(|ui| {
                    for image in images {
                        if cards::image_card(ui, image).clicked() {
                            app.open_image_detail(image.clone());
                        }
                    }
                });
            }
        },
        BrowseTab::Performers => match &state.browse.performers {
            Fetch::Loading => widgets::loading(ui),
            Fetch::Error(message) => {
                if widgets::error_with_retry(ui, message) {
                    app.fetch_browse_tab(tab);
                }
            }
            Fetch::Loaded(performers) if performers.is_empty() => {
                ui.weak("No performers found");
            }
            Fetch::Loaded(performers) => {
                ui.horizontal_wrapped(|ui| {
                    for performer in performers {
                        if cards::performer_card(ui, performer).clicked() {
                            app.open_performer_detail(performer.id.clone());
                        }
                    }
                });
            }
        },
    });
}
