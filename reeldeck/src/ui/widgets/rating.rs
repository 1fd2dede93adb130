//! # Rating Row
//!
//! Five-star rating display and picker, mapping between star count and the
//! server's 0-100 scale.

/// Render an interactive five-star row for a 0-100 rating.
///
/// Returns `Some(rating100)` when the user picks a star. Pass
/// `enabled = false` while a rating mutation is in flight.
pub fn star_row(ui: &mut egui::Ui, rating100: Option<i64>, enabled: bool) -> Option<i64> {
    let current_stars = rating100.map(|r| r / 20).unwrap_or(0);
    let mut picked = None;

    ui.horizontal(|ui| {
        for stars in 1..=5 {
            let filled = stars <= current_stars;
            let label = if filled { "\u{2605}" } else { "\u{2606}" };
            let button = egui::Button::new(egui::RichText::new(label).size(20.0)).frame(false);
            if ui.add_enabled(enabled, button).clicked() {
                picked = Some(stars * 20);
            }
        }
    });

    picked
}

/// Render a read-only star row for a 0-100 rating.
pub fn star_display(ui: &mut egui::Ui, rating100: Option<i64>) {
    match rating100 {
        Some(rating) => {
            let stars = rating / 20;
            let mut text = String::new();
            for i in 1..=5 {
                text.push(if i <= stars { '\u{2605}' } else { '\u{2606}' });
            }
            ui.label(text);
        }
        None => {
            ui.weak("Not rated");
        }
    }
}
