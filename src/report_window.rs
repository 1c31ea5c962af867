use eframe::egui;

#[derive(Default)]
pub struct ReportWindow {
    pub open: bool,
    pub text: String,
}

impl ReportWindow {
    pub fn show(&mut self, text: String) {
        self.text = text;
        self.open = true;
    }

    pub fn ui(&mut self, ctx: &egui::Context) {
        if !self.open {
            return;
        }
        let mut open = self.open;
        egui::Window::new("Weekly Report")
            .open(&mut open)
            .resizable(true)
            .default_size((400.0, 300.0))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.monospace(&self.text);
                });
            });
        self.open = open;
    }
}
