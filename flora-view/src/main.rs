//! Application entry point for the algorithmic flora garden.
//!
//! This binary sets up logging and eframe/egui, optionally reads a JSON
//! scene configuration given as the first argument, and delegates all
//! interactive logic and rendering to [`Viewer`] from the `viewer` module.

mod settings;
mod viewer;

use std::path::PathBuf;

use env_logger::Env;
use viewer::Viewer;

/// Starts the native eframe application.
///
/// ### Returns
/// - `Ok(())` if the application runs to completion without errors.
/// - `Err` if eframe fails to create the native window or event loop.
fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = settings::load_or_default(config_path.as_deref());
    log::info!(
        "starting with max_plants={} initial_plants={}",
        config.max_plants,
        config.initial_plants
    );

    let options = eframe::NativeOptions::default();

    eframe::run_native(
        "Algorithmic Flora",
        options,
        Box::new(move |_cc| Ok(Box::new(Viewer::new(config)))),
    )
}
