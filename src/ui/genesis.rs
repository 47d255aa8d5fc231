use bugworld::simulation::params::Params;
use egui_macroquad::egui;
use macroquad::prelude::*;

/// Draws the configuration screen.
///
/// Returns `true` once the user asks to start the simulation.
pub fn draw_genesis_screen(params: &mut Params) -> bool {
    clear_background(LIGHTGRAY);

    let mut start_simulation = false;

    egui_macroquad::ui(|egui_ctx| {
        egui::CentralPanel::default().show(egui_ctx, |ui| {
            ui.heading("Bugworld - Configuration");
            ui.add_space(10.0);

            ui.collapsing("Population", |ui| {
                ui.add(egui::Slider::new(&mut params.n_bugs, 0..=500).text("Bugs"));
                ui.add(egui::Slider::new(&mut params.n_food, 0..=2000).text("Food Items"));
                ui.add(
                    egui::Slider::new(&mut params.spawn_extent, 10..=800).text("Placement Extent"),
                );
            });

            ui.collapsing("Initial Resources", |ui| {
                ui.add(
                    egui::Slider::new(&mut params.bug_nutrition, 0.0..=3.0)
                        .text("Bug Nutrition"),
                );
                ui.add(egui::Slider::new(&mut params.bug_mass, 0.1..=2.5).text("Bug Mass"));
                ui.add(
                    egui::Slider::new(&mut params.food_quantity, 0.1..=5.0)
                        .text("Food Quantity"),
                );
            });

            ui.collapsing("Host Loop", |ui| {
                ui.add(
                    egui::Slider::new(&mut params.max_delta, 1.0..=100.0)
                        .text("Max Tick Delta (ms)"),
                );

                let mut fixed_seed = params.seed.is_some();
                ui.checkbox(&mut fixed_seed, "Fixed seed");
                if fixed_seed {
                    let mut seed = params.seed.unwrap_or_default();
                    ui.add(egui::DragValue::new(&mut seed).prefix("seed: "));
                    params.seed = Some(seed);
                } else {
                    params.seed = None;
                }
            });

            ui.add_space(20.0);
            if ui.button("▶ Start Simulation").clicked() {
                start_simulation = true;
            }
        });
    });

    start_simulation
}
