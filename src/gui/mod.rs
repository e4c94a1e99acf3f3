//! GUI module for the inventory viewer.
//!
//! This module contains the egui-based user interface components:
//! the main window, the card list, the loading overlay and dialogs.

mod app;
mod card;
mod dialogs;
mod loading;

pub use app::InventoryViewerApp;
