use bugworld::simulation::ecosystem::Ecosystem;
use egui_macroquad::egui;
use std::collections::VecDeque;

const MAX_HISTORY_POINTS: usize = 500;

pub struct UIState {
    pub stats_panel_width: f32,
    pub paused: bool,
    pub reset_requested: bool,
    pub configure_requested: bool,
    pub bug_count_history: VecDeque<(f64, f64)>,
    pub food_count_history: VecDeque<(f64, f64)>,
    pub biomass_history: VecDeque<(f64, f64)>,
    last_update_time: f32,
    update_interval: f32,
}

impl UIState {
    pub fn new() -> Self {
        Self {
            stats_panel_width: 300.0,
            paused: false,
            reset_requested: false,
            configure_requested: false,
            bug_count_history: VecDeque::new(),
            food_count_history: VecDeque::new(),
            biomass_history: VecDeque::new(),
            last_update_time: 0.0,
            update_interval: 500.0, // simulated milliseconds between samples
        }
    }

    /// Clears histories and requests after the world was replaced.
    pub fn reset(&mut self) {
        self.reset_requested = false;
        self.configure_requested = false;
        self.paused = false;
        self.bug_count_history.clear();
        self.food_count_history.clear();
        self.biomass_history.clear();
        self.last_update_time = 0.0;
    }

    pub fn update_history(&mut self, ecosystem: &Ecosystem) {
        if ecosystem.time - self.last_update_time < self.update_interval {
            return;
        }
        self.last_update_time = ecosystem.time;

        let census = ecosystem.census();
        let t = (ecosystem.time / 1000.0) as f64;

        push_bounded(&mut self.bug_count_history, (t, census.bugs as f64));
        push_bounded(&mut self.food_count_history, (t, census.food as f64));
        push_bounded(&mut self.biomass_history, (t, census.biomass() as f64));
    }
}

fn push_bounded(history: &mut VecDeque<(f64, f64)>, point: (f64, f64)) {
    history.push_back(point);
    if history.len() > MAX_HISTORY_POINTS {
        history.pop_front();
    }
}

pub fn draw_ui(state: &mut UIState, ecosystem: &Ecosystem) {
    egui_macroquad::ui(|egui_ctx| {
        let mut visuals = egui::Visuals::dark();
        visuals.override_text_color = Some(egui::Color32::from_rgb(240, 240, 240));
        egui_ctx.set_visuals(visuals);

        super::stats::draw_stats_panel(egui_ctx, state, ecosystem);
    });
}

pub fn process_egui() {
    egui_macroquad::draw();
}
