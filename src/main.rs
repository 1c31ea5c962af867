use smart_launcher::gui::LauncherApp;
use smart_launcher::logging;
use smart_launcher::settings::{Settings, SETTINGS_FILE};
use smart_launcher::shortcuts::ShortcutStore;

use eframe::egui;
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    let settings = Settings::load(SETTINGS_FILE)?;
    logging::init(
        settings.debug_logging,
        settings.log_file.as_ref().map(PathBuf::from),
    );

    // A corrupt store is fatal here; overwriting it silently would throw away
    // the user's usage history.
    let store = ShortcutStore::load(&settings.store_file)?;
    tracing::info!("loaded {} shortcuts", store.shortcuts.len());

    let (width, height) = settings.window_size.unwrap_or((800.0, 600.0));
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width, height])
            .with_min_inner_size([320.0, 240.0]),
        ..Default::default()
    };

    let app = LauncherApp::new(store, &settings, SETTINGS_FILE);
    if let Err(e) = eframe::run_native(
        "Smart Launcher",
        native_options,
        Box::new(move |_cc| Box::new(app)),
    ) {
        tracing::error!("gui exited with error: {e}");
    }
    Ok(())
}
