use eframe::egui;

/// Measures how often the redraw timer actually fires and what each tick costs.
pub struct TickHistory {
    tick_times: egui::util::History<f32>,
}

impl Default for TickHistory {
    fn default() -> Self {
        // Long enough to see a 1 fps timer fire more than once.
        let max_age: f64 = 3.0;
        let max_len = (max_age * 60.0).round() as usize;
        Self {
            tick_times: egui::util::History::new(max_len, max_age),
        }
    }
}

impl TickHistory {
    pub fn on_tick(&mut self, now: f64, update_time: f32) {
        self.tick_times.add(now, update_time);
    }

    pub fn mean_update_time(&self) -> f32 {
        self.tick_times.average().unwrap_or_default()
    }

    pub fn rate(&self) -> f32 {
        match self.tick_times.mean_time_interval() {
            Some(interval) if interval > 0.0 => 1.0 / interval,
            _ => 0.0,
        }
    }

    /// Measured rate against the configured one.
    pub fn rate_label(&self, target_fps: u32) -> String {
        format!("{:.1}/{} fps", self.rate(), target_fps)
    }

    pub fn ui(&self, ui: &mut egui::Ui, target_fps: u32) {
        ui.label(self.rate_label(target_fps))
            .on_hover_text(format!(
                "Redraw ticks so far: {}\nMean update: {:.3} ms",
                self.tick_times.total_count(),
                1e3 * self.mean_update_time(),
            ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_shows_configured_rate() {
        let mut ticks = TickHistory::default();
        for i in 0..=10 {
            ticks.on_tick(i as f64 / 60.0, 0.001);
        }
        let label = ticks.rate_label(60);
        assert!(label.ends_with("/60 fps"), "{}", label);
        assert!(label.starts_with("60.0/"), "{}", label);
    }

    #[test]
    fn idle_history_reads_zero() {
        assert_eq!(TickHistory::default().rate_label(10), "0.0/10 fps");
    }
}
