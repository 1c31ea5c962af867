use smart_launcher::gui::LauncherApp;
use smart_launcher::settings::Settings;
use smart_launcher::shortcuts::ShortcutStore;
use tempfile::tempdir;

fn app_with(store: ShortcutStore, dir: &std::path::Path) -> LauncherApp {
    let settings = Settings {
        store_file: dir.join("usage_data.json").to_string_lossy().into_owned(),
        reports_dir: dir.join("reports").to_string_lossy().into_owned(),
        ..Settings::default()
    };
    let settings_path = dir.join("settings.json").to_string_lossy().into_owned();
    LauncherApp::new(store, &settings, &settings_path)
}

#[test]
fn failed_launch_does_not_touch_counters() {
    let dir = tempdir().unwrap();
    let store_path = dir.path().join("usage_data.json");
    let store_path_str = store_path.to_str().unwrap();

    let mut store = ShortcutStore::default();
    // Arguments force a direct spawn, which fails deterministically for a
    // missing program.
    store
        .add_shortcut(store_path_str, "broken", "/nonexistent/prog --flag")
        .unwrap();

    let mut app = app_with(store, dir.path());
    app.execute_shortcut("broken");

    assert!(app.error.is_some(), "launch failure should surface an error");
    let entry = &app.store.shortcuts["broken"];
    assert_eq!(entry.total_clicks, 0);
    assert!(entry.weekly_clicks.is_empty());

    // The persisted store is untouched as well.
    let on_disk = ShortcutStore::load(store_path_str).unwrap();
    assert_eq!(on_disk.shortcuts["broken"].total_clicks, 0);
}

#[test]
fn exit_persists_last_window_size() {
    use eframe::App;

    let dir = tempdir().unwrap();
    let settings_path = dir.path().join("settings.json");
    Settings::default()
        .save(settings_path.to_str().unwrap())
        .unwrap();

    let mut app = app_with(ShortcutStore::default(), dir.path());
    app.window_size = Some((1024.0, 768.0));
    app.on_exit(None);

    let reloaded = Settings::load(settings_path.to_str().unwrap()).unwrap();
    assert_eq!(reloaded.window_size, Some((1024.0, 768.0)));
}

#[test]
fn unknown_shortcut_is_reported_not_ignored() {
    let dir = tempdir().unwrap();
    let mut app = app_with(ShortcutStore::default(), dir.path());
    app.execute_shortcut("missing");
    assert!(app
        .error
        .as_deref()
        .is_some_and(|e| e.contains("missing")));
}
