//! Main application entry point.

mod app;
mod paint;
mod toolbar;

use easel_core::{SURFACE_HEIGHT, SURFACE_WIDTH};

fn main() -> eframe::Result<()> {
    env_logger::init();
    log::info!("Starting Easel");

    let options = eframe::NativeOptions {
        // Canvas size plus room for the panels and margins.
        viewport: egui::ViewportBuilder::default()
            .with_title("Easel")
            .with_inner_size([SURFACE_WIDTH as f32 + 24.0, SURFACE_HEIGHT as f32 + 88.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Easel",
        options,
        Box::new(|cc| Ok(Box::new(app::EaselApp::new(cc)))),
    )
}
