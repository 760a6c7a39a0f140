//! Screens, modals and command grammar shared by the desktop GUI and `navctl`.

pub mod command;
pub mod domain;
pub mod error;
pub mod routes;
pub mod view;

pub use routes::{AppCommand, AppCoordinator, AppCover, AppRoute, AppSheet, AppSnapshot};
