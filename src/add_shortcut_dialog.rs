use crate::gui::LauncherApp;
use eframe::egui;
use rfd::FileDialog;

pub struct AddShortcutDialog {
    pub open: bool,
    name: String,
    path: String,
}

impl Default for AddShortcutDialog {
    fn default() -> Self {
        Self {
            open: false,
            name: String::new(),
            path: String::new(),
        }
    }
}

impl AddShortcutDialog {
    pub fn ui(&mut self, ctx: &egui::Context, app: &mut LauncherApp) {
        if !self.open {
            return;
        }
        let mut open = self.open;
        let mut close = false;
        egui::Window::new("New Shortcut")
            .open(&mut open)
            .show(ctx, |ui| {
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        ui.label("Name");
                        ui.text_edit_singleline(&mut self.name);
                    });
                    ui.horizontal(|ui| {
                        ui.label("Path");
                        ui.text_edit_singleline(&mut self.path);
                        if ui.button("Browse").clicked() {
                            if let Some(file) = FileDialog::new().pick_file() {
                                if let Some(p) = file.to_str() {
                                    self.path = p.to_owned();
                                } else {
                                    self.path = file.display().to_string();
                                }
                            }
                        }
                    });
                    ui.horizontal(|ui| {
                        if ui.button("Add").clicked() {
                            // The target is deliberately not checked for
                            // existence; a stale path surfaces at launch time.
                            if self.name.is_empty() || self.path.is_empty() {
                                app.error = Some("Name and path are required".into());
                            } else {
                                let store_path = app.store_path.clone();
                                if let Err(e) =
                                    app.store.add_shortcut(&store_path, &self.name, &self.path)
                                {
                                    app.error = Some(format!("Failed to save: {e}"));
                                } else {
                                    app.error = None;
                                    self.name.clear();
                                    self.path.clear();
                                    close = true;
                                }
                            }
                        }
                        if ui.button("Cancel").clicked() {
                            close = true;
                        }
                    });
                });
            });
        if close {
            open = false;
        }
        self.open = open;
    }
}
