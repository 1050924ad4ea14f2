use eframe::egui;

use crate::{
    family::FamilySet,
    util::math::{Coefficients, COEFFICIENT_RANGE},
};

/// One checkbox per family. Returns the toggles made this frame.
pub fn family_checkboxes(ui: &mut egui::Ui, families: &FamilySet) -> Vec<(&'static str, bool)> {
    let mut toggled = Vec::new();
    egui::Grid::new("family_list").show(ui, |ui| {
        for family in families.iter() {
            let mut visible = family.is_visible();
            let response = ui
                .checkbox(&mut visible, family.name())
                .on_hover_text(format!("f(x) = {}", family.poly()));
            if response.clicked() {
                toggled.push((family.name(), visible));
            }
            ui.end_row();
        }
    });
    toggled
}

/// Sliders for a, b and c with their live labels. Returns true if any moved.
pub fn coefficient_sliders(ui: &mut egui::Ui, coefficients: &mut Coefficients) -> bool {
    let Coefficients { a, b, c } = coefficients;
    let mut changed = false;
    for (name, value) in [("a", a), ("b", b), ("c", c)].iter_mut() {
        ui.vertical_centered(|ui| {
            ui.label(format!("{} = {}", name, value));
        });
        let slider = egui::Slider::new(&mut **value, COEFFICIENT_RANGE).clamp_to_range(true);
        changed |= ui.add(slider).changed();
    }
    changed
}
