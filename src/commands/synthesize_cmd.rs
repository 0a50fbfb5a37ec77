use rand::rngs::StdRng;

use timeline_forecasts::services::distribution_synthesizer::synthesize_with_rng;
use timeline_forecasts::services::histogram::write_histogram_png;
use timeline_forecasts::services::result_yaml::write_yaml;

use crate::commands::base_commands::Commands;

pub fn synthesize_command(cmd: Commands, rng: &mut StdRng) {
    if let Commands::Synthesize { p50, p90, output } = cmd {
        let samples = match synthesize_with_rng(p50, p90, rng) {
            Ok(samples) => samples,
            Err(e) => {
                eprintln!("Failed to synthesize histogram: {e:?}");
                return;
            }
        };

        if let Err(e) = write_yaml(&output, &samples) {
            eprintln!("Failed to write histogram: {e:?}");
            return;
        }

        tracing::info!(buckets = samples.len(), %output, "histogram written");
        println!("Histogram with {} weeks written to {output}", samples.len());

        let histogram_path = format!("{output}.png");
        match write_histogram_png(&histogram_path, &samples) {
            Ok(()) => println!("Histogram chart written to {histogram_path}"),
            Err(e) => eprintln!("Failed to render histogram: {e:?}"),
        }
    }
}
