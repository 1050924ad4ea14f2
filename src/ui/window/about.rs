use eframe::egui;

#[derive(Default)]
pub struct AboutWindow;

impl super::Window for AboutWindow {
    fn name(&self) -> &'static str {
        "About"
    }

    fn frame<'open>(&self, window: egui::Window<'open>) -> egui::Window<'open> {
        window.collapsible(false).resizable(false)
    }

    fn ui(&mut self, ui: &mut egui::Ui) {
        ui.heading(format!("polyplot {}", env!("CARGO_PKG_VERSION")));
        ui.label("Toggle polynomial curve families and watch their past shapes fade out.");
        ui.label("Older traces are drawn dashed and lighter the older they get.");

        ui.separator();

        ui.horizontal(|ui| {
            use egui::special_emojis::GITHUB;
            ui.label("ℹ Powered by");
            ui.hyperlink_to(
                format!("{} egui", GITHUB),
                "https://www.github.com/emilk/egui",
            );
        });

        egui::warn_if_debug_build(ui);
    }
}
