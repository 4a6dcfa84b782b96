mod dashboard;
mod fleet;
mod telemetry;
mod web;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use crate::dashboard::DashboardState;
use crate::web::Config;

#[derive(Parser)]
#[command(name = "drone-fleet")]
#[command(about = "Simulated drone fleet command dashboard")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the dashboard and REST API
    Serve {
        #[arg(short, long)]
        config: Option<String>,
    },
    /// Run the telemetry simulator offline and print the resulting fleet
    Simulate {
        #[arg(short, long, default_value_t = 10)]
        ticks: u32,
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// Validate a configuration file
    CheckConfig { path: String },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => serve(config.as_deref()),
        Commands::Simulate { ticks, seed } => simulate(ticks, seed),
        Commands::CheckConfig { path } => check_config(&path),
    }
}

fn load_config(path: Option<&str>) -> Option<Config> {
    match path {
        Some(path) => match Config::from_file(path) {
            Ok(config) => Some(config),
            Err(e) => {
                eprintln!("Error loading {}: {}", path, e);
                None
            }
        },
        None => Some(Config::default()),
    }
}

fn serve(path: Option<&str>) -> ExitCode {
    let Some(config) = load_config(path) else {
        return ExitCode::FAILURE;
    };

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Failed to start runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(web::run_server(config)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Server error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn simulate(ticks: u32, seed: Option<u64>) -> ExitCode {
    let mut state = DashboardState::new(seed);
    for _ in 0..ticks {
        state.apply_telemetry_tick();
    }

    println!(
        "{:<8} {:<14} {:<12} {:>10} {:>11} {:>7} {:>7} {:>7}",
        "ID", "NAME", "STATUS", "LAT", "LNG", "ALT", "BATT", "SIGNAL"
    );
    for d in &state.drones {
        println!(
            "{:<8} {:<14} {:<12} {:>10.5} {:>11.5} {:>7.1} {:>6.1}% {:>6.1}%",
            d.id,
            d.name,
            d.status.to_string(),
            d.position.lat,
            d.position.lng,
            d.position.alt,
            d.battery,
            d.signal
        );
    }

    let summary = state.summary();
    println!();
    println!(
        "{} ticks: {}/{} active, {} GPS connected, {} unacknowledged alerts",
        state.telemetry_ticks(),
        summary.fleet.active,
        summary.fleet.total,
        summary.fleet.gps_connected,
        summary.alerts.unacknowledged
    );
    ExitCode::SUCCESS
}

fn check_config(path: &str) -> ExitCode {
    let Some(config) = load_config(Some(path)) else {
        return ExitCode::FAILURE;
    };

    println!("Config is valid");
    println!("  bind: {}", config.web.bind);
    println!(
        "  telemetry interval: {}",
        humantime::format_duration(config.simulation.telemetry_interval)
    );
    println!(
        "  gps interval: {}",
        humantime::format_duration(config.simulation.gps_interval)
    );
    match config.simulation.seed {
        Some(seed) => println!("  seed: {}", seed),
        None => println!("  seed: random"),
    }
    ExitCode::SUCCESS
}
