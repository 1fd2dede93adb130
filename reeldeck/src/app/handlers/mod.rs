//! # User Action Handlers
//!
//! Handlers for user-triggered actions, grouped by concern. Each handler
//! takes the shared state (and the event channel where a task result flows
//! back), mutates under a brief write lock, and spawns any gateway work onto
//! the shared runtime; the frame loop never awaits.

pub mod detail;
pub mod navigation;
pub mod onboarding;
pub mod reels;
pub mod settings;
