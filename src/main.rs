use std::path::PathBuf;

use bugworld::simulation::ecosystem::Ecosystem;
use bugworld::simulation::params::Params;
use clap::Parser;
use macroquad::prelude::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod graphics;
mod ui;

#[derive(Parser)]
#[command(name = "bugworld", about = "Interactive bug ecosystem viewer")]
struct Cli {
    /// JSON parameter file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// RNG seed for population placement
    #[arg(short, long)]
    seed: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Bugworld".to_owned(),
        window_width: 1280,
        window_height: 900,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let mut params = match cli.config {
        Some(path) => match Params::load_from_file(&path) {
            Ok(params) => params,
            Err(e) => {
                error!("could not load {}: {e}", path.display());
                return;
            }
        },
        None => Params::default(),
    };
    if cli.seed.is_some() {
        params.seed = cli.seed;
    }

    info!("Starting bugworld viewer");

    let mut genesis = true;
    let mut ecosystem: Option<Ecosystem> = None;
    let mut ui_state = ui::UIState::new();

    loop {
        if genesis {
            if ui::draw_genesis_screen(&mut params) {
                match params.validate() {
                    Ok(()) => {
                        ecosystem = Some(Ecosystem::new(&params));
                        ui_state.reset();
                        genesis = false;
                    }
                    Err(e) => error!("{e}"),
                }
            }
            ui::process_egui();
            next_frame().await;
            continue;
        }

        let Some(eco) = ecosystem.as_mut() else {
            genesis = true;
            continue;
        };

        if is_key_pressed(KeyCode::Space) {
            ui_state.paused = !ui_state.paused;
        }

        if !ui_state.paused {
            // frame time is in seconds, ticks run on milliseconds
            eco.step(get_frame_time() * 1000.0);
        }
        ui_state.update_history(eco);

        clear_background(WHITE);
        let viewport = graphics::Viewport::current(ui_state.stats_panel_width);
        graphics::draw_world(&eco.world, &viewport);

        ui::draw_ui(&mut ui_state, eco);

        if ui_state.reset_requested {
            *eco = Ecosystem::new(&params);
            ui_state.reset();
        } else if ui_state.configure_requested {
            genesis = true;
            ui_state.reset();
        }

        ui::process_egui();
        next_frame().await
    }
}
