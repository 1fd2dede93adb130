//! # Reusable Widgets
//!
//! - [`nav_bar`]: bottom navigation between the four main screens
//! - [`cards`]: media cards for rails and grids
//! - [`rating`]: five-star rating row
//! - plus the small fetch-state helpers below

pub mod cards;
pub mod nav_bar;
pub mod rating;

/// Centered spinner for a loading fetch.
pub fn loading(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.spinner();
    });
}

/// Error message with a retry control. Returns `true` when retry was clicked.
pub fn error_with_retry(ui: &mut egui::Ui, message: &str) -> bool {
    let mut retry = false;
    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.colored_label(ui.visuals().error_fg_color, message);
        ui.add_space(8.0);
        if ui.button("Retry").clicked() {
            retry = true;
        }
    });
    retry
}
