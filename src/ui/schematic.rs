use eframe::egui;
use egui::{Align2, Pos2, Rect, Sense, TextStyle};

/// An empty study table: a header row over a body, with a narrow label column.
pub struct Schematic {
    title: &'static str,
    row_labels: [&'static str; 2],
}

impl Schematic {
    pub fn new(title: &'static str, row_labels: [&'static str; 2]) -> Self {
        Self { title, row_labels }
    }

    pub fn ui(&self, ui: &mut egui::Ui, height: f32) {
        ui.label(self.title);
        let size = egui::vec2(ui.available_width(), height);
        let (response, painter) = ui.allocate_painter(size, Sense::hover());
        let rect = response.rect;

        let stroke = ui.visuals().widgets.noninteractive.fg_stroke;
        for segment in grid_lines(rect).iter() {
            painter.line_segment(*segment, stroke);
        }

        let label_x = rect.left() + rect.width() / 12.0;
        let header_y = rect.top() + rect.height() / 6.0;
        let body_y = rect.top() + rect.height() * 2.0 / 3.0;
        for (label, y) in self.row_labels.iter().zip([header_y, body_y].iter()) {
            painter.text(
                egui::pos2(label_x, *y),
                Align2::CENTER_CENTER,
                label,
                TextStyle::Body,
                stroke.color,
            );
        }
    }
}

/// Rules of the table: horizontal at 0, h/3 and h, vertical at 0, w/6 and w.
pub fn grid_lines(rect: Rect) -> [[Pos2; 2]; 6] {
    let (left, right, top, bottom) = (rect.left(), rect.right(), rect.top(), rect.bottom());
    let header = top + rect.height() / 3.0;
    let column = left + rect.width() / 6.0;
    [
        [egui::pos2(left, top), egui::pos2(right, top)],
        [egui::pos2(left, header), egui::pos2(right, header)],
        [egui::pos2(left, bottom), egui::pos2(right, bottom)],
        [egui::pos2(left, top), egui::pos2(left, bottom)],
        [egui::pos2(column, top), egui::pos2(column, bottom)],
        [egui::pos2(right, top), egui::pos2(right, bottom)],
    ]
}
