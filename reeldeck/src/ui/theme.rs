//! # Theme
//!
//! Maps the persisted [`ThemeMode`] onto egui's theme preference. The mode is
//! applied every frame so a settings change takes effect immediately.

use crate::services::config::ThemeMode;

/// Apply the configured theme mode to the egui context.
pub fn apply(ctx: &egui::Context, mode: ThemeMode) {
    let preference = match mode {
        ThemeMode::System => egui::ThemePreference::System,
        ThemeMode::Light => egui::ThemePreference::Light,
        ThemeMode::Dark => egui::ThemePreference::Dark,
    };
    ctx.set_theme(preference);
}

/// Display label for a theme option.
pub fn mode_label(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::System => "System Default",
        ThemeMode::Light => "Light",
        ThemeMode::Dark => "Dark",
    }
}
