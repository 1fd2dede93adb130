//! # Async Background Tasks
//!
//! One fetch task per screen concern, all following the same shape: grab the
//! gateway under a brief lock, spawn onto the shared runtime, send the result
//! back through the event channel. Latest result wins; screens never await.

pub mod browse;
pub mod detail;
pub mod home;
pub mod server;
