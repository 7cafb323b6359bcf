//! Plume simulator CLI
//!
//! Runs a named simulation from an environment configuration directory, or
//! creates a configuration template to start from.

use clap::{Parser, Subcommand};
use plume_environment::EnvironmentConfigMetadata;
use plume_simulator::{Simulator, SimulatorConfig};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "plume-sim")]
#[command(about = "Run gas-dispersion simulations from environment configurations")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation until a stopping time
    Run {
        /// Environment configuration directory
        #[arg(short, long)]
        config: PathBuf,

        /// Simulation name (a folder under `simulations/`)
        #[arg(short, long, default_value = SimulatorConfig::DEFAULT_SIMULATION)]
        simulation: String,

        /// Simulated seconds to run for
        #[arg(short, long, default_value_t = SimulatorConfig::DEFAULT_STOP_TIME)]
        until: f64,

        /// Stop after this many steps even if the stopping time was not reached
        #[arg(long)]
        max_steps: Option<u64>,

        /// Simulated seconds between progress log lines (0 disables)
        #[arg(long, default_value = "60")]
        progress_interval: f64,

        /// Print a run summary after finishing
        #[arg(long)]
        report: bool,
    },

    /// Create an environment configuration template
    Template {
        /// Directory to create
        directory: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            simulation,
            until,
            max_steps,
            progress_interval,
            report,
        } => {
            let mut sim_config = SimulatorConfig::new(config)
                .with_simulation(simulation)
                .with_stop_time(until)
                .with_progress_interval(progress_interval);
            if let Some(max) = max_steps {
                sim_config = sim_config.with_max_steps(max);
            }

            let result = Simulator::new(sim_config).run()?;
            if !result.reached_stop_time {
                return Err(format!(
                    "stopped at {:.2}s after {} steps, before reaching {:.2}s",
                    result.final_time, result.steps, result.stop_time
                )
                .into());
            }

            if report {
                result.print();
            }
            println!("simulation finished!");
        }

        Commands::Template { directory } => {
            EnvironmentConfigMetadata::create_template(&directory)?;
            println!("Created configuration template at {}", directory.display());
        }
    }

    Ok(())
}
