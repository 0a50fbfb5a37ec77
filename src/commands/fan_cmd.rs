use rand::rngs::StdRng;

use timeline_forecasts::config::ForecastConfig;
use timeline_forecasts::services::fan_chart::{FanChartParams, simulate_with_rng};
use timeline_forecasts::services::fan_chart_plot::write_fan_chart_png;
use timeline_forecasts::services::result_yaml::write_yaml;

use crate::commands::base_commands::Commands;

pub fn fan_command(cmd: Commands, config: &ForecastConfig, rng: &mut StdRng) {
    if let Commands::Fan {
        p50,
        p90,
        complexity,
        team_size,
        paths,
        output,
    } = cmd
    {
        let params = FanChartParams::new(p50, p90, complexity, team_size)
            .with_path_count(paths.unwrap_or(config.fan_paths));
        let frames = match simulate_with_rng(&params, rng) {
            Ok(frames) => frames,
            Err(e) => {
                eprintln!("Failed to simulate fan chart: {e:?}");
                return;
            }
        };

        if let Err(e) = write_yaml(&output, &frames) {
            eprintln!("Failed to write fan chart: {e:?}");
            return;
        }

        tracing::info!(frames = frames.len(), %output, "fan chart written");
        println!(
            "Fan chart with {} weeks from {} paths written to {output}",
            frames.len(),
            params.path_count
        );

        let chart_path = format!("{output}.png");
        match write_fan_chart_png(&chart_path, &frames) {
            Ok(()) => println!("Fan chart plot written to {chart_path}"),
            Err(e) => eprintln!("Failed to render fan chart: {e:?}"),
        }
    }
}
