#![windows_subsystem = "windows"]

use clap::Parser;
use std::{
    convert::TryFrom,
    ops::{Deref, DerefMut},
    time::Instant,
};

use eframe::{egui, epi};

mod config;
mod family;
mod ui;
mod util;

use config::{Args, Settings, SETTING_RANGE};
use ui::{
    controls,
    poly_plot::PolyPlot,
    schematic::Schematic,
    tick_history::TickHistory,
    window::{
        about::AboutWindow,
        integer_dialog::{self, DialogOutcome, IntegerDialog},
        Window,
    },
};
use util::{math::Coefficients, timer::RedrawTimer};

struct WindowDesc<T: ui::window::Window> {
    is_open: bool,
    window: T,
}

impl<T: Window> Deref for WindowDesc<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.window
    }
}

impl<T: Window> DerefMut for WindowDesc<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.window
    }
}

impl<T: Window + Default> Default for WindowDesc<T> {
    fn default() -> Self {
        Self {
            is_open: false,
            window: Default::default(),
        }
    }
}

impl<T: Window> WindowDesc<T> {
    fn new(window: T) -> Self {
        Self {
            is_open: false,
            window,
        }
    }

    fn show(&mut self, ctx: &egui::CtxRef) -> bool {
        self.window.show(ctx, &mut self.is_open)
    }
}

impl WindowDesc<IntegerDialog> {
    fn open_with(&mut self, value: u32) {
        self.reset(value);
        self.is_open = true;
    }

    // Closing the window through its title bar counts as a cancel
    fn poll(&mut self, ctx: &egui::CtxRef) -> Option<DialogOutcome> {
        if !self.is_open {
            return None;
        }
        self.show(ctx);
        let outcome = integer_dialog::settle(self.is_open, self.take_outcome());
        if outcome.is_some() {
            self.is_open = false;
        }
        outcome
    }
}

struct PolyApp {
    tick_history: TickHistory,
    plot: PolyPlot,
    coefficients: Coefficients,
    fps: u32,
    timer: RedrawTimer,
    var_table: Schematic,
    sign_table: Schematic,
    trace_dialog: WindowDesc<IntegerDialog>,
    fps_dialog: WindowDesc<IntegerDialog>,
    about_window: WindowDesc<AboutWindow>,
}

impl PolyApp {
    fn new(settings: &Settings) -> Self {
        let mut plot = PolyPlot::new(settings.trace_size).unwrap_or_else(|e| {
            log::error!("{}", e);
            PolyPlot::default()
        });
        plot.set_params(settings.coefficients);
        for name in &settings.visible {
            plot.show_plot(name, true);
        }

        Self {
            tick_history: Default::default(),
            plot,
            coefficients: settings.coefficients,
            fps: settings.fps,
            timer: RedrawTimer::new(RedrawTimer::interval_for_fps(settings.fps)),
            var_table: Schematic::new("Variation table", ["x", "f(x)"]),
            sign_table: Schematic::new("Sign table", ["x", "sign"]),
            trace_dialog: WindowDesc::new(IntegerDialog::new(
                "Trace size",
                "Curves kept per family",
                SETTING_RANGE,
            )),
            fps_dialog: WindowDesc::new(IntegerDialog::new(
                "Frame rate",
                "Redraws per second",
                SETTING_RANGE,
            )),
            about_window: Default::default(),
        }
    }
}

impl epi::App for PolyApp {
    fn name(&self) -> &str {
        "Polynomial Plot"
    }

    fn update(&mut self, ctx: &egui::CtxRef, frame: &mut epi::Frame<'_>) {
        let Self {
            tick_history,
            plot,
            coefficients,
            fps,
            timer,
            var_table,
            sign_table,
            trace_dialog,
            fps_dialog,
            about_window,
        } = self;

        let mut quit = {
            let input = ctx.input();
            input.modifiers.command && input.key_pressed(egui::Key::Q)
        };

        let now = ctx.input().time;
        if timer.poll(now) {
            let started = Instant::now();
            plot.update_figures();
            tick_history.on_tick(now, started.elapsed().as_secs_f32());
        }

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                egui::menu::menu(ui, "File", |ui| {
                    if ui.button("Quit").clicked() {
                        quit = true;
                    }
                });
                egui::menu::menu(ui, "Settings", |ui| {
                    if ui.button("Frame rate…").clicked() {
                        fps_dialog.open_with(*fps);
                    }
                    if ui.button("Trace size…").clicked() {
                        trace_dialog.open_with(plot.trace_size() as u32);
                    }
                });
                egui::menu::menu(ui, "Help", |ui| {
                    if ui.button("About").clicked() {
                        about_window.is_open = true;
                    }
                });
            });
        });

        egui::SidePanel::left("controls").show(ctx, |ui| {
            ui.heading("Functions");
            for (name, visible) in controls::family_checkboxes(ui, plot.families()) {
                plot.show_plot(name, visible);
            }

            ui.separator();

            if controls::coefficient_sliders(ui, coefficients) {
                plot.set_params(*coefficients);
                plot.update_figures();
            }

            ui.separator();

            var_table.ui(ui, 90.0);
            sign_table.ui(ui, 90.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            plot.toolbar(ui, timer, tick_history, *fps);
            ui.separator();
            plot.ui(ui);
        });

        if let Some(outcome) = trace_dialog.poll(ctx) {
            plot.apply_trace_size(outcome);
        }

        if let Some(outcome) = fps_dialog.poll(ctx) {
            let chosen = outcome.value_or(*fps);
            if chosen != *fps {
                *fps = chosen;
                timer.set_interval(RedrawTimer::interval_for_fps(chosen));
                log::info!("frame rate set to {} fps", chosen);
            }
        }

        about_window.show(ctx);

        if quit {
            frame.quit();
        }

        if timer.is_running() {
            ctx.request_repaint();
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = match Settings::try_from(Args::parse()) {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(2);
        }
    };
    log::debug!("starting with {:?}", settings);

    let options = eframe::NativeOptions::default();
    eframe::run_native(Box::new(PolyApp::new(&settings)), options);
}
