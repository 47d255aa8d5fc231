use bugworld::simulation::ecosystem::Ecosystem;
use egui_macroquad::egui;
use egui_plot::{Line, Plot, PlotPoints};
use std::collections::VecDeque;

use super::ui::UIState;

pub(super) fn draw_stats_panel(egui_ctx: &egui::Context, state: &mut UIState, ecosystem: &Ecosystem) {
    egui::SidePanel::right("stats_panel")
        .exact_width(state.stats_panel_width)
        .resizable(false)
        .show(egui_ctx, |ui| {
            ui.heading("Simulation Stats");
            ui.separator();

            ui.horizontal(|ui| {
                let pause_text = if state.paused { "▶ Resume" } else { "⏸ Pause" };
                if ui.button(pause_text).clicked() {
                    state.paused = !state.paused;
                }
                if ui.button("🔄 Reset").clicked() {
                    state.reset_requested = true;
                }
                if ui.button("⚙ Configure").clicked() {
                    state.configure_requested = true;
                }
            });
            ui.label("Space toggles pause");
            ui.separator();

            let census = ecosystem.census();
            egui::Grid::new("census_grid").striped(true).show(ui, |ui| {
                ui.label("Time");
                ui.label(format!("{:.1} s", ecosystem.time / 1000.0));
                ui.end_row();
                ui.label("Ticks");
                ui.label(ecosystem.ticks.to_string());
                ui.end_row();
                ui.label("Bugs");
                ui.label(census.bugs.to_string());
                ui.end_row();
                ui.label("Food");
                ui.label(census.food.to_string());
                ui.end_row();
                ui.label("Bug mass");
                ui.label(format!("{:.2}", census.bug_mass));
                ui.end_row();
                ui.label("Food quantity");
                ui.label(format!("{:.2}", census.food_quantity));
                ui.end_row();
                ui.label("Nutrition");
                ui.label(format!("{:.2}", census.nutrition));
                ui.end_row();
            });
            ui.separator();

            ui.label("Population");
            draw_population_plot(ui, &state.bug_count_history, &state.food_count_history);
            ui.separator();

            ui.label("Biomass");
            draw_time_series_plot(ui, "biomass_plot", &state.biomass_history, "Time", "Biomass");
        });
}

fn draw_time_series_plot(
    ui: &mut egui::Ui,
    id: &str,
    data: &VecDeque<(f64, f64)>,
    x_label: &str,
    y_label: &str,
) {
    if data.is_empty() {
        ui.label("Collecting data...");
        return;
    }

    let points: PlotPoints = data.iter().map(|&(x, y)| [x, y]).collect();
    let line = Line::new(points);

    Plot::new(id)
        .height(150.0)
        .show_axes([true, true])
        .label_formatter(|_name, value| {
            format!("{}: {:.1}\n{}: {:.2}", x_label, value.x, y_label, value.y)
        })
        .show(ui, |plot_ui| {
            plot_ui.line(line);
        });
}

fn draw_population_plot(
    ui: &mut egui::Ui,
    bug_data: &VecDeque<(f64, f64)>,
    food_data: &VecDeque<(f64, f64)>,
) {
    if bug_data.is_empty() && food_data.is_empty() {
        ui.label("Collecting data...");
        return;
    }

    Plot::new("population_plot")
        .height(150.0)
        .show_axes([true, true])
        .legend(egui_plot::Legend::default())
        .label_formatter(|name, value| {
            format!("{}\nTime: {:.1}s\nCount: {:.0}", name, value.x, value.y)
        })
        .show(ui, |plot_ui| {
            if !bug_data.is_empty() {
                let bug_points: PlotPoints = bug_data.iter().map(|&(x, y)| [x, y]).collect();
                let bug_line = Line::new(bug_points)
                    .color(egui::Color32::from_rgb(220, 90, 80))
                    .name("Bugs");
                plot_ui.line(bug_line);
            }

            if !food_data.is_empty() {
                let food_points: PlotPoints = food_data.iter().map(|&(x, y)| [x, y]).collect();
                let food_line = Line::new(food_points)
                    .color(egui::Color32::from_rgb(100, 200, 100))
                    .name("Food");
                plot_ui.line(food_line);
            }
        });
}
