use eframe::egui;
use std::ops::RangeInclusive;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogOutcome {
    Accepted(u32),
    Cancelled,
}

impl DialogOutcome {
    /// The accepted value, or `prior` when the dialog was dismissed.
    pub fn value_or(self, prior: u32) -> u32 {
        match self {
            DialogOutcome::Accepted(value) => value,
            DialogOutcome::Cancelled => prior,
        }
    }
}

/// What a dialog reports after being drawn for a frame. A dialog that closed
/// through its title bar without a button press counts as cancelled.
pub fn settle(still_open: bool, outcome: Option<DialogOutcome>) -> Option<DialogOutcome> {
    match outcome {
        Some(outcome) => Some(outcome),
        None if !still_open => Some(DialogOutcome::Cancelled),
        None => None,
    }
}

/// Asks for a single integer within a fixed range.
pub struct IntegerDialog {
    title: &'static str,
    prompt: &'static str,
    range: RangeInclusive<u32>,
    value: u32,
    outcome: Option<DialogOutcome>,
}

impl IntegerDialog {
    pub fn new(title: &'static str, prompt: &'static str, range: RangeInclusive<u32>) -> Self {
        let value = *range.start();
        Self {
            title,
            prompt,
            range,
            value,
            outcome: None,
        }
    }

    /// Prepares the dialog to be shown with `value` preselected.
    pub fn reset(&mut self, value: u32) {
        self.value = value.clamp(*self.range.start(), *self.range.end());
        self.outcome = None;
    }

    pub fn accept(&mut self) {
        self.outcome = Some(DialogOutcome::Accepted(self.value));
    }

    pub fn cancel(&mut self) {
        self.outcome = Some(DialogOutcome::Cancelled);
    }

    pub fn take_outcome(&mut self) -> Option<DialogOutcome> {
        self.outcome.take()
    }
}

impl super::Window for IntegerDialog {
    fn name(&self) -> &'static str {
        self.title
    }

    fn frame<'open>(&self, window: egui::Window<'open>) -> egui::Window<'open> {
        window
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
    }

    fn ui(&mut self, ui: &mut egui::Ui) {
        ui.label(self.prompt);
        let slider = egui::Slider::new(&mut self.value, self.range.clone()).clamp_to_range(true);
        ui.add(slider);

        ui.horizontal(|ui| {
            if ui.button("Cancel").clicked() {
                self.cancel();
            }
            if ui.button("Ok").clicked() {
                self.accept();
            }
        });
    }
}
