//! # Reels Screen
//!
//! Swipeable full-screen feed over a random scene sample. The playback
//! surface renders the scene artwork and drives a looping position clock;
//! decoding the stream itself belongs to the platform video pipeline, which
//! this client only points at via the scene's stream URL.
//!
//! Feed data comes straight from the feed synchronizer's state cell; every
//! action routes back through `App` handlers.

use shared::SceneItem;

use crate::app::{App, AppState, Fetch};
use crate::feed::FeedState;
use crate::ui::widgets::{self, rating};

/// Render the reels screen.
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let Some(feed) = state.feed.clone() else {
        return;
    };

    match feed.state() {
        FeedState::Loading => widgets::loading(ui),
        FeedState::Error(message) => {
            if widgets::error_with_retry(ui, &message) {
                app.handle_reels_refresh();
            }
        }
        FeedState::Loaded(items) if items.is_empty() => {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.label("No scenes found");
                if ui.button("Refresh").clicked() {
                    app.handle_reels_refresh();
                }
            });
        }
        FeedState::Loaded(items) => {
            let index = state.reels.current_index.min(items.len() - 1);
            render_reel(ui, state, app, &items[index], index, items.len());
        }
    }
}

fn render_reel(
    ui: &mut egui::Ui,
    state: &AppState,
    app: &mut App,
    scene: &SceneItem,
    index: usize,
    total: usize,
) {
    // Keyboard: step reels, toggle playback.
    let (step_down, step_up, toggle) = ui.input(|i| {
        (
            i.key_pressed(egui::Key::ArrowDown),
            i.key_pressed(egui::Key::ArrowUp),
            i.key_pressed(egui::Key::Space),
        )
    });
    if step_down {
        app.handle_reel_step(1);
    }
    if step_up {
        app.handle_reel_step(-1);
    }
    if toggle {
        app.handle_toggle_playing();
    }

    let surface_height = ui.available_height() - 48.0;

    // Playback surface: artwork stands in for the video output.
    let surface = match scene.thumbnail_url.as_deref() {
        Some(url) => ui.add_sized(
            [ui.available_width(), surface_height],
            egui::Image::from_uri(url.to_string())
                .fit_to_exact_size([ui.available_width(), surface_height].into())
                .sense(egui::Sense::click()),
        ),
        None => ui.add_sized(
            [ui.available_width(), surface_height],
            egui::Label::new(
                egui::RichText::new(&scene.title)
                    .heading()
                    .color(egui::Color32::WHITE),
            )
            .sense(egui::Sense::click()),
        ),
    };
    if surface.clicked() {
        app.handle_toggle_playing();
    }

    // Overlay: title, performer shortcut, reel position, action buttons.
    let overlay = surface.rect;
    egui::Area::new(egui::Id::new("reel_overlay"))
        .fixed_pos(overlay.left_top() + egui::vec2(12.0, 12.0))
        .show(ui.ctx(), |ui| {
            ui.label(
                egui::RichText::new(&scene.title)
                    .strong()
                    .color(egui::Color32::WHITE),
            );
            if let Some(performer) = scene.performers.first() {
                if ui
                    .link(egui::RichText::new(&performer.name).color(egui::Color32::WHITE))
                    .clicked()
                {
                    app.open_performer_detail(performer.id.clone());
                }
            }
            ui.weak(format!("{} / {}", index + 1, total));
        });

    egui::Area::new(egui::Id::new("reel_actions"))
        .fixed_pos(overlay.right_bottom() + egui::vec2(-64.0, -180.0))
        .show(ui.ctx(), |ui| {
            // O-count: disabled while its mutation is in flight.
            let o_button = egui::Button::new(egui::RichText::new("\u{1f4a7}").size(22.0));
            if ui
                .add_enabled(!state.reels.o_count_in_flight, o_button)
                .clicked()
            {
                app.handle_increment_o_count(scene.id.clone());
            }
            ui.label(
                egui::RichText::new(scene.o_count.to_string()).color(egui::Color32::WHITE),
            );
            ui.add_space(10.0);

            let star = if scene.rating100.unwrap_or(0) > 0 {
                "\u{2605}"
            } else {
                "\u{2606}"
            };
            if ui
                .button(egui::RichText::new(star).size(22.0))
                .clicked()
            {
                app.state.write().reels.show_rating_dialog = true;
            }
            if let Some(stars) = scene.stars() {
                if stars > 0 {
                    ui.label(
                        egui::RichText::new(stars.to_string()).color(egui::Color32::WHITE),
                    );
                }
            }
            ui.add_space(10.0);

            if ui.button(egui::RichText::new("\u{2139}").size(22.0)).clicked() {
                app.state.write().reels.show_details = true;
            }
            ui.add_space(10.0);

            if ui.button(egui::RichText::new("\u{21bb}").size(22.0)).clicked() {
                app.handle_reels_refresh();
            }
        });

    // Seek bar with times on both sides.
    let duration_ms = (scene.duration * 1000.0) as u64;
    ui.horizontal(|ui| {
        ui.label(shared::format_duration(state.reels.position_ms as f64 / 1000.0));
        let mut position = state.reels.position_ms.min(duration_ms) as f64;
        let slider = egui::Slider::new(&mut position, 0.0..=duration_ms.max(1) as f64)
            .show_value(false);
        if ui
            .add_sized([ui.available_width() - 60.0, 18.0], slider)
            .changed()
        {
            app.handle_seek(position as u64);
        }
        ui.label(shared::format_duration(scene.duration));
    });

    render_rating_dialog(ui.ctx(), state, app, scene);
    render_details_window(ui.ctx(), state, app, scene);
    render_add_tag_dialog(ui.ctx(), state, app, scene);
}

fn render_rating_dialog(ctx: &egui::Context, state: &AppState, app: &mut App, scene: &SceneItem) {
    if !state.reels.show_rating_dialog {
        return;
    }

    egui::Window::new("Rate Scene")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            ui.label("Tap to rate");
            ui.add_space(8.0);
            if let Some(rating100) =
                rating::star_row(ui, scene.rating100, !state.reels.rating_in_flight)
            {
                app.handle_rating_selected(scene.id.clone(), rating100);
            }
            ui.add_space(8.0);
            if ui.button("Cancel").clicked() {
                app.state.write().reels.show_rating_dialog = false;
            }
        });
}

fn render_details_window(ctx: &egui::Context, state: &AppState, app: &mut App, scene: &SceneItem) {
    if !state.reels.show_details {
        return;
    }

    egui::Window::new(scene.title.clone())
        .id(egui::Id::new("reel_details"))
        .collapsible(false)
        .anchor(egui::Align2::CENTER_BOTTOM, egui::vec2(0.0, -8.0))
        .show(ctx, |ui| {
            if !scene.performers.is_empty() {
                ui.label(egui::RichText::new("Performers").strong());
                for performer in &scene.performers {
                    if ui.link(&performer.name).clicked() {
                        app.open_performer_detail(performer.id.clone());
                    }
                }
                ui.separator();
            }

            ui.label(egui::RichText::new("Video Information").strong());
            ui.horizontal(|ui| {
                ui.label(format!("Duration: {}", shared::format_duration(scene.duration)));
                ui.separator();
                ui.label(format!(
                    "Resolution: {}",
                    shared::resolution_label(scene.width, scene.height)
                ));
            });
            ui.separator();

            ui.label(egui::RichText::new("Play Statistics").strong());
            ui.horizontal(|ui| {
                rating::star_display(ui, scene.rating100);
                ui.separator();
                ui.label(format!("O-Count: {}", scene.o_count));
                let reset = egui::Button::new("Reset").small();
                if ui
                    .add_enabled(!state.reels.o_count_in_flight, reset)
                    .clicked()
                {
                    app.handle_reset_o_count(scene.id.clone());
                }
            });
            ui.horizontal(|ui| {
                ui.label(format!(
                    "Total Play Time: {}",
                    shared::format_play_time(scene.play_duration)
                ));
                ui.separator();
                ui.label(format!("Play Count: {} times", scene.play_count));
            });
            ui.separator();

            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("Tags").strong());
                if ui.button("\u{ff0b}").clicked() {
                    app.handle_open_add_tag_dialog();
                }
            });
            if scene.tags.is_empty() {
                ui.weak("No tags");
            } else {
                ui.horizontal_wrapped(|ui| {
                    for tag in &scene.tags {
                        let chip = egui::Button::new(format!("{} \u{2715}", tag.name)).small();
                        if ui
                            .add_enabled(!state.reels.tag_edit_in_flight, chip)
                            .clicked()
                        {
                            app.handle_remove_tag(scene.id.clone(), tag.clone());
                        }
                    }
                });
            }

            ui.add_space(8.0);
            if ui.button("Close").clicked() {
                app.state.write().reels.show_details = false;
            }
        });
}

fn render_add_tag_dialog(ctx: &egui::Context, state: &AppState, app: &mut App, scene: &SceneItem) {
    if !state.reels.show_add_tag_dialog {
        return;
    }

    egui::Window::new("Add Tag")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            ui.label("Create new tag");
            ui.horizontal(|ui| {
                let mut name = state.reels.new_tag_name.clone();
                if ui.text_edit_singleline(&mut name).changed() {
                    app.state.write().reels.new_tag_name = name;
                }
                let create = egui::Button::new("Create");
                let enabled =
                    !state.reels.tag_edit_in_flight && !state.reels.new_tag_name.trim().is_empty();
                if ui.add_enabled(enabled, create).clicked() {
                    app.handle_create_tag(scene.id.clone(), state.reels.new_tag_name.clone());
                }
            });
            ui.separator();

            ui.label("Or select existing");
            match &state.reels.available_tags {
                Fetch::Loading => {
                    ui.weak("Loading tags\u{2026}");
                }
                Fetch::Error(message) => {
                    ui.colored_label(ui.visuals().error_fg_color, message);
                }
                Fetch::Loaded(tags) => {
                    let attached: Vec<&str> =
                        scene.tags.iter().map(|t| t.id.as_str()).collect();
                    egui::ScrollArea::vertical().max_height(200.0).show(ui, |ui| {
                        for tag in tags.iter().filter(|t| !attached.contains(&t.id.as_str())) {
                            if ui.button(&tag.name).clicked() {
                                app.handle_add_tag(scene.id.clone(), tag.clone());
                            }
                        }
                    });
                }
            }

            ui.add_space(8.0);
            if ui.button("Cancel").clicked() {
                app.state.write().reels.show_add_tag_dialog = false;
            }
        });
}
