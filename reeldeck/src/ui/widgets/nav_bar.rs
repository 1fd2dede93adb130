//! # Navigation Bar
//!
//! Bottom navigation between the four main screens.

use crate::app::{App, AppState, Screen};

/// Render the navigation bar.
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    ui.horizontal(|ui| {
        let width = ui.available_width() / Screen::nav_order().len() as f32;
        for screen in Screen::nav_order() {
            let selected = state.current_screen == *screen;
            let label = egui::SelectableLabel::new(selected, screen.title());
            if ui.add_sized([width, 28.0], label).clicked() && !selected {
                app.handle_screen_change(*screen);
            }
        }
    });
}
