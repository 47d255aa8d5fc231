use std::path::PathBuf;

use bugworld::simulation::census::Census;
use bugworld::simulation::ecosystem::Ecosystem;
use bugworld::simulation::params::Params;
use clap::Parser;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "headless", about = "Run a bug ecosystem without a window")]
struct Cli {
    /// JSON parameter file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// RNG seed for population placement (overrides the config file)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of ticks to simulate
    #[arg(short, long, default_value = "10000")]
    ticks: u64,

    /// Milliseconds per tick (clamped to the configured maximum)
    #[arg(short, long, default_value = "16.0")]
    delta: f32,

    /// Log a census every this many ticks (0 disables)
    #[arg(short, long, default_value = "1000")]
    report_every: u64,

    /// Print the final summary as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
struct Summary {
    ticks: u64,
    time_ms: f32,
    census: Census,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    let mut params = match &cli.config {
        Some(path) => Params::load_from_file(path)?,
        None => Params::default(),
    };
    if cli.seed.is_some() {
        params.seed = cli.seed;
    }
    anyhow::ensure!(
        cli.delta.is_finite() && cli.delta >= 0.0,
        "delta must be a non-negative number, got {}",
        cli.delta
    );

    let mut ecosystem = Ecosystem::new(&params);
    log_census(&ecosystem);

    for _ in 0..cli.ticks {
        ecosystem.step(cli.delta);

        if cli.report_every > 0 && ecosystem.ticks % cli.report_every == 0 {
            log_census(&ecosystem);
        }
        if ecosystem.world.is_empty() {
            info!(tick = ecosystem.ticks, "world is empty, stopping");
            break;
        }
    }

    let summary = Summary {
        ticks: ecosystem.ticks,
        time_ms: ecosystem.time,
        census: ecosystem.census(),
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        let census = summary.census;
        println!(
            "ticks={} time={:.1}s bugs={} food={} biomass={:.3} nutrition={:.3}",
            summary.ticks,
            summary.time_ms / 1000.0,
            census.bugs,
            census.food,
            census.biomass(),
            census.nutrition
        );
    }

    Ok(())
}

fn log_census(ecosystem: &Ecosystem) {
    let census = ecosystem.census();
    info!(
        tick = ecosystem.ticks,
        bugs = census.bugs,
        food = census.food,
        bug_mass = census.bug_mass,
        food_quantity = census.food_quantity,
        nutrition = census.nutrition,
        "census"
    );
}
