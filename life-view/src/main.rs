//! Application entry point for the Game of Life window.
//!
//! This binary sets up eframe/egui and delegates all simulation and
//! rendering logic to [`Viewer`] from the `viewer` module.

mod viewer;

use viewer::Viewer;

/// Starts the native eframe application.
///
/// The window is fixed-size and non-resizable: the grid dimensions are
/// derived from the window resolution once, at startup, and never change.
///
/// ### Returns
/// - `Ok(())` if the application runs to completion without errors.
/// - `Err` if eframe fails to create the native window or event loop.
fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([viewer::WINDOW_WIDTH as f32, viewer::WINDOW_HEIGHT as f32])
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        "Game of Life",
        options,
        Box::new(|_cc| {
            // Construct the root app state for the viewer.
            Ok(Box::new(Viewer::new()))
        }),
    )
}
