//! Inventory Viewer - imports an inventory spreadsheet and lists it as cards.

mod core;
mod gui;
mod logger;

use crate::core::config::AppSettings;
use gui::InventoryViewerApp;

fn main() -> eframe::Result<()> {
    logger::init_logger();

    let settings = AppSettings::load();
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size(settings.window_size())
            .with_min_inner_size([320.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Inventory",
        options,
        Box::new(|cc| Ok(Box::new(InventoryViewerApp::new(cc, settings)))),
    )
}
