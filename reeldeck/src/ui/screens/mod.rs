//! # Screen Modules
//!
//! One rendering module per screen, all following the same pattern:
//!
//! ```rust,ignore
//! pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
//!     // Read from the cloned state snapshot
//!     // Call app.handle_* methods for actions
//! }
//! ```
//!
//! State is cloned before rendering, so no lock is held while widgets draw;
//! user actions go through `App` handlers which lock internally.

pub mod browse;
pub mod home;
pub mod image_detail;
pub mod onboarding;
pub mod performer_detail;
pub mod reels;
pub mod scene_detail;
pub mod settings;
