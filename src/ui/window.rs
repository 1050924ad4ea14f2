use eframe::egui;

pub mod about;
pub mod integer_dialog;

pub trait Window {
    fn name(&self) -> &'static str;

    // Placement and sizing of the egui window
    fn frame<'open>(&self, window: egui::Window<'open>) -> egui::Window<'open> {
        window.default_size(egui::vec2(320.0, 160.0))
    }

    // Return value: is ui drawn
    fn show(&mut self, ctx: &egui::CtxRef, open: &mut bool) -> bool {
        let mut ui_drawn = false;
        let window = egui::Window::new(self.name()).open(open);
        self.frame(window).show(ctx, |ui| {
            ui_drawn = true;
            self.ui(ui)
        });
        ui_drawn
    }

    fn ui(&mut self, ui: &mut egui::Ui);
}
