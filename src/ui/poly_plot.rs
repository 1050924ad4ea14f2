use eframe::egui;
use egui::plot::{Legend, Line, Plot, Value, Values};
use egui::Color32;
use std::ops::RangeInclusive;

use crate::{
    family::{CurveFamily, FamilyError, FamilySet},
    ui::{tick_history::TickHistory, window::integer_dialog::DialogOutcome},
    util::{
        math::{linspace, Coefficients, Polynomial},
        timer::RedrawTimer,
        trace::fade_level,
    },
};

pub const SAMPLE_RANGE: RangeInclusive<f64> = -20.0..=20.0;
pub const SAMPLE_COUNT: usize = 100;
pub const X_VIEW: RangeInclusive<f64> = -7.0..=7.0;
pub const Y_VIEW: RangeInclusive<f64> = -50.0..=50.0;

// Samples per dash and per gap of a faded trace
const DASH_LEN: usize = 2;

pub type Point = [f64; 2];

/// Plotting area holding every curve family.
#[derive(Default)]
pub struct PolyPlot {
    families: FamilySet,
    // Bumped to forget pan/zoom state
    view_generation: u32,
}

impl PolyPlot {
    pub fn new(trace_size: usize) -> Result<Self, FamilyError> {
        Ok(Self {
            families: FamilySet::with_trace_size(trace_size)?,
            view_generation: 0,
        })
    }

    pub fn families(&self) -> &FamilySet {
        &self.families
    }

    pub fn show_plot(&mut self, name: &str, visible: bool) {
        if let Err(e) = self.families.show(name, visible) {
            log::error!("{}", e);
        }
    }

    pub fn set_params(&mut self, coefficients: Coefficients) {
        self.families.set_params(coefficients);
    }

    pub fn update_figures(&mut self) {
        self.families.update_all();
    }

    pub fn trace_size(&self) -> usize {
        self.families.trace_size()
    }

    /// Resizes every trace buffer on Ok; a cancelled dialog leaves them alone.
    pub fn apply_trace_size(&mut self, outcome: DialogOutcome) {
        let prior = self.trace_size();
        match outcome {
            DialogOutcome::Accepted(size) => {
                if let Err(e) = self.families.set_trace_size(size as usize) {
                    log::error!("cannot resize traces to {}: {}", size, e);
                }
            }
            DialogOutcome::Cancelled => log::info!("trace size kept at {}", prior),
        }
    }

    pub fn toolbar(
        &mut self,
        ui: &mut egui::Ui,
        timer: &mut RedrawTimer,
        ticks: &TickHistory,
        target_fps: u32,
    ) {
        ui.horizontal(|ui| {
            let running = timer.is_running();
            let control_btn_text = if running { "⏸" } else { "▶" };
            if ui
                .button(control_btn_text)
                .on_hover_text("Pause or resume redrawing")
                .clicked()
            {
                if running {
                    timer.pause();
                } else {
                    timer.resume();
                }
            }
            if ui.button("🗑").on_hover_text("Clear traces").clicked() {
                self.families.clear_all();
            }
            if ui.button("🏠").on_hover_text("Reset view").clicked() {
                self.view_generation = self.view_generation.wrapping_add(1);
            }
            ui.separator();
            ticks.ui(ui, target_fps);
        });
    }

    pub fn ui(&self, ui: &mut egui::Ui) {
        let base = ui.visuals().text_color();
        let mut plot = Plot::new(format!("poly_plot_{}", self.view_generation))
            .include_x(*X_VIEW.start())
            .include_x(*X_VIEW.end())
            .include_y(*Y_VIEW.start())
            .include_y(*Y_VIEW.end())
            .legend(Legend::default());

        let drawn = self
            .families
            .iter()
            .filter(|f| f.is_visible() && !f.history().is_empty());
        for family in drawn {
            for line in family_lines(family, base) {
                plot = plot.line(line);
            }
        }

        ui.add(plot);
    }
}

fn family_lines(family: &CurveFamily, base: Color32) -> Vec<Line> {
    let history = family.history();
    let older = history.len().saturating_sub(1);
    let mut lines = Vec::new();

    for (index, poly) in history.iter().take(older).enumerate() {
        let color = trace_color(base, fade_level(index, history.max_len()));
        for run in clip_to_view(&curve_points(poly)) {
            for dash in dashes(&run, DASH_LEN) {
                lines.push(Line::new(to_values(dash)).color(color));
            }
        }
    }

    if let Some(poly) = history.latest() {
        for run in clip_to_view(&curve_points(poly)) {
            lines.push(Line::new(to_values(&run)).color(base).name(family.name()));
        }
    }

    lines
}

fn curve_points(poly: &Polynomial<f64>) -> Vec<Point> {
    poly.sample(linspace(*SAMPLE_RANGE.start(), *SAMPLE_RANGE.end(), SAMPLE_COUNT))
        .map(|(x, y)| [x, y])
        .collect()
}

fn to_values(points: &[Point]) -> Values {
    Values::from_values(points.iter().map(|&[x, y]| Value::new(x, y)).collect())
}

/// Older traces get more transparent as their fade level rises.
pub fn trace_color(base: Color32, fade: f32) -> Color32 {
    if fade <= 0.0 {
        return base;
    }
    base.linear_multiply((1.0 - fade).max(0.0))
}

/// Clips a polyline to the fixed view. Segments crossing an edge are cut at
/// the crossing, so curves run right up to the frame.
pub fn clip_to_view(points: &[Point]) -> Vec<Vec<Point>> {
    let mut runs = Vec::new();
    let mut current: Vec<Point> = Vec::new();

    if let [point] = points {
        if in_view(*point) {
            runs.push(vec![*point]);
        }
        return runs;
    }

    for pair in points.windows(2) {
        match clip_segment(pair[0], pair[1]) {
            Some((enter, exit)) => {
                if current.last() != Some(&enter) {
                    if !current.is_empty() {
                        runs.push(std::mem::take(&mut current));
                    }
                    current.push(enter);
                }
                current.push(exit);
            }
            None if !current.is_empty() => runs.push(std::mem::take(&mut current)),
            None => {}
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

fn in_view(point: Point) -> bool {
    X_VIEW.contains(&point[0]) && Y_VIEW.contains(&point[1])
}

// Liang-Barsky against the view rectangle
fn clip_segment(from: Point, to: Point) -> Option<(Point, Point)> {
    let (dx, dy) = (to[0] - from[0], to[1] - from[1]);
    let edges = [
        (-dx, from[0] - X_VIEW.start()),
        (dx, X_VIEW.end() - from[0]),
        (-dy, from[1] - Y_VIEW.start()),
        (dy, Y_VIEW.end() - from[1]),
    ];

    let (mut t_enter, mut t_exit) = (0.0f64, 1.0f64);
    for &(p, q) in edges.iter() {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let t = q / p;
        if p < 0.0 {
            t_enter = t_enter.max(t);
        } else {
            t_exit = t_exit.min(t);
        }
    }
    if t_enter > t_exit {
        return None;
    }

    let at = |t: f64| {
        if t == 0.0 {
            from
        } else if t == 1.0 {
            to
        } else {
            [
                (from[0] + t * dx).clamp(*X_VIEW.start(), *X_VIEW.end()),
                (from[1] + t * dy).clamp(*Y_VIEW.start(), *Y_VIEW.end()),
            ]
        }
    };
    Some((at(t_enter), at(t_exit)))
}

/// Every other chunk of `dash_len` segments, giving a dashed look.
pub fn dashes(points: &[Point], dash_len: usize) -> impl Iterator<Item = &[Point]> {
    let dash_len = dash_len.max(1);
    let step = dash_len * 2;
    (0..points.len())
        .step_by(step)
        .map(move |start| &points[start..(start + dash_len + 1).min(points.len())])
        .filter(|dash| dash.len() > 1)
}
