//! Render layer: binds the coordinator to egui panels and windows.

pub mod app;
pub mod page;

pub use app::NavigatorApp;
