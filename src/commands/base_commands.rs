use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    /// Optional YAML configuration file
    #[arg(long, global = true)]
    pub config: Option<String>,
    /// Seed for reproducible random draws
    #[arg(long, global = true)]
    pub seed: Option<u64>,
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Synthesize a weekly histogram from P50/P90 estimates
    Synthesize {
        /// Median completion estimate in weeks
        #[arg(long)]
        p50: f64,
        /// 90th percentile completion estimate in weeks
        #[arg(long)]
        p90: f64,
        /// Output YAML file
        #[arg(short, long)]
        output: String,
    },
    /// Compute descriptive statistics for a histogram YAML file
    Analyze {
        /// Histogram YAML file
        #[arg(short, long)]
        input: String,
        /// Target deadline in weeks
        #[arg(short, long)]
        deadline: Option<f64>,
        /// Project start date (YYYY-MM-DD) for calendar dates
        #[arg(short, long)]
        start_date: Option<String>,
    },
    /// Simulate trajectory paths and write fan chart bands
    Fan {
        /// Median completion estimate in weeks
        #[arg(long)]
        p50: f64,
        /// 90th percentile completion estimate in weeks
        #[arg(long)]
        p90: f64,
        /// Project complexity from 1 to 5
        #[arg(short, long, default_value_t = 3)]
        complexity: u8,
        /// Number of people on the team
        #[arg(short, long, default_value_t = 4.0)]
        team_size: f64,
        /// Number of simulated paths (defaults to the configured value)
        #[arg(short, long)]
        paths: Option<usize>,
        /// Output YAML file
        #[arg(short, long)]
        output: String,
    },
    /// Run a simulation on the backend, falling back to mock data
    Simulate {
        /// Simulation request YAML file (demo project when omitted)
        #[arg(short, long)]
        request: Option<String>,
        /// Output YAML file
        #[arg(short, long)]
        output: String,
    },
    /// Project a what-if scenario from a baseline result
    Scenario {
        /// Baseline simulation result YAML file
        #[arg(short, long)]
        baseline: String,
        /// Output YAML file
        #[arg(short, long)]
        output: String,
        /// Senior developers added or removed
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        senior: i32,
        /// Integrations added or removed
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        integrations: i32,
        /// Deadline change in weeks
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        deadline: i32,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
