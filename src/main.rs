use std::path::PathBuf;

use daylight_core::{SettingsDialog, SettingsStore, config};
use egui::ViewportBuilder;

mod app;
mod constants;
mod defaults;
mod platform;
mod ui;

use app::DaylightSettingsApp;
use constants::LEVELS_ARG_INDEX;
use platform::parameters::gui;

/// The main function is the entry point of the application.
///
/// It initializes the logger, opens the settings dialog against the level
/// export given on the command line (or the demo levels), and runs the
/// window using the `eframe` framework.
fn main() -> eframe::Result<()> {
    env_logger::Builder::from_default_env().init();

    let levels_path = std::env::args_os().nth(LEVELS_ARG_INDEX).map(PathBuf::from);
    let (host, host_error) = defaults::load_host_document(levels_path.as_deref());

    let store = SettingsStore::new(config::resolve_settings_path());
    let dialog = SettingsDialog::open(store, host);

    eframe::run_native(
        gui::APPLICATION_NAME,
        eframe::NativeOptions {
            viewport: ViewportBuilder::default()
                .with_inner_size([gui::VIEWPORT_X, gui::VIEWPORT_Y])
                .with_resizable(false),
            ..Default::default()
        },
        Box::new(move |_cc| Ok(Box::new(DaylightSettingsApp::new(dialog, host_error)))),
    )
}
