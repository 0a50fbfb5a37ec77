mod commands;

use std::io;

use clap::{CommandFactory, Parser};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::analyze_cmd::analyze_command;
use crate::commands::base_commands::{CliArgs, Commands};
use crate::commands::fan_cmd::fan_command;
use crate::commands::scenario_cmd::scenario_command;
use crate::commands::simulate_cmd::simulate_command;
use crate::commands::synthesize_cmd::synthesize_command;
use timeline_forecasts::config::ForecastConfig;

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();

    let filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = match ForecastConfig::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e:?}");
            return;
        }
    };

    let mut rng = match args.seed.or(config.seed) {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    match args.command {
        cmd @ Commands::Synthesize { .. } => synthesize_command(cmd, &mut rng),
        cmd @ Commands::Analyze { .. } => analyze_command(cmd),
        cmd @ Commands::Fan { .. } => fan_command(cmd, &config, &mut rng),
        cmd @ Commands::Simulate { .. } => simulate_command(cmd, &config, &mut rng).await,
        cmd @ Commands::Scenario { .. } => scenario_command(cmd, &mut rng),
        Commands::Completions { shell } => {
            let mut command = CliArgs::command();
            let name = command.get_name().to_string();
            clap_complete::generate(shell, &mut command, name, &mut io::stdout());
        }
    }
}
