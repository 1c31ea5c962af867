use crate::add_shortcut_dialog::AddShortcutDialog;
use crate::launcher::launch_path;
use crate::report::generate_report;
use crate::report_window::ReportWindow;
use crate::settings::Settings;
use crate::shortcuts::ShortcutStore;
use eframe::egui;
use std::path::PathBuf;

pub struct LauncherApp {
    pub store: ShortcutStore,
    pub store_path: String,
    pub settings_path: String,
    pub reports_dir: PathBuf,
    pub grid_columns: usize,
    pub window_size: Option<(f32, f32)>,
    pub error: Option<String>,
    pub add_dialog: AddShortcutDialog,
    pub report_window: ReportWindow,
}

impl LauncherApp {
    pub fn new(store: ShortcutStore, settings: &Settings, settings_path: &str) -> Self {
        Self {
            store,
            store_path: settings.store_file.clone(),
            settings_path: settings_path.to_string(),
            reports_dir: PathBuf::from(&settings.reports_dir),
            grid_columns: settings.grid_columns.max(1),
            window_size: settings.window_size,
            error: None,
            add_dialog: AddShortcutDialog::default(),
            report_window: ReportWindow::default(),
        }
    }

    /// Write the last observed window size back to the settings file so the
    /// next start reopens at the same size.
    pub fn persist_window_size(&self) {
        let Ok(mut settings) = Settings::load(&self.settings_path) else {
            return;
        };
        settings.window_size = self.window_size.or(settings.window_size);
        if let Err(e) = settings.save(&self.settings_path) {
            tracing::warn!("failed to save settings: {e}");
        }
    }

    /// Launch the named shortcut and, only if the launch succeeded, count it.
    pub fn execute_shortcut(&mut self, name: &str) {
        let Some(entry) = self.store.shortcuts.get(name) else {
            self.error = Some(format!("Unknown shortcut '{name}'"));
            return;
        };
        let target = entry.path.clone();
        if let Err(e) = launch_path(&target) {
            tracing::warn!("launch of '{name}' failed: {e}");
            self.error = Some(format!("Failed to launch '{name}': {e}"));
            return;
        }
        tracing::debug!("launched '{name}' ({target})");
        let store_path = self.store_path.clone();
        match self.store.record_launch(&store_path, name) {
            Ok(()) => self.error = None,
            Err(e) => self.error = Some(format!("Failed to record launch: {e}")),
        }
    }

    fn run_report(&mut self) {
        match generate_report(&self.store, &self.reports_dir) {
            Ok(text) => {
                self.report_window.show(text);
                self.error = None;
            }
            Err(e) => self.error = Some(format!("Failed to generate report: {e}")),
        }
    }
}

impl eframe::App for LauncherApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        use egui::*;

        let screen = ctx.screen_rect();
        self.window_size = Some((screen.width(), screen.height()));

        TopBottomPanel::bottom("controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Add Shortcut").clicked() {
                    self.add_dialog.open = true;
                }
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui.button("Weekly Report").clicked() {
                        self.run_report();
                    }
                });
            });
        });

        CentralPanel::default().show(ctx, |ui| {
            ui.heading("Smart Launcher");
            if let Some(err) = &self.error {
                ui.colored_label(Color32::RED, err);
            }

            // Collect the clicked name instead of acting inside the loop so
            // the handler sees a single explicit event, not a loop binding.
            let names: Vec<String> = self.store.shortcuts.keys().cloned().collect();
            let mut clicked: Option<String> = None;
            ScrollArea::vertical().show(ui, |ui| {
                Grid::new("shortcut_grid").spacing([10.0, 10.0]).show(ui, |ui| {
                    for (i, name) in names.iter().enumerate() {
                        let button = Button::new(name).min_size(vec2(150.0, 60.0));
                        if ui.add(button).clicked() {
                            clicked = Some(name.clone());
                        }
                        if (i + 1) % self.grid_columns == 0 {
                            ui.end_row();
                        }
                    }
                });
            });
            if let Some(name) = clicked {
                self.execute_shortcut(&name);
            }
        });

        // The dialog needs mutable access to the app, so swap it out for the
        // duration of its ui pass.
        let mut dialog = std::mem::take(&mut self.add_dialog);
        dialog.ui(ctx, self);
        self.add_dialog = dialog;

        self.report_window.ui(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.persist_window_size();
    }
}
