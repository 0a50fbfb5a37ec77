use chrono::NaiveDate;

use timeline_forecasts::services::descriptive_stats::{
    analyze, cumulative_series, deadline_confidence, insight_text,
};
use timeline_forecasts::services::result_yaml::load_histogram;

use crate::commands::base_commands::Commands;
use crate::commands::report_format::format_stats_report;

pub fn analyze_command(cmd: Commands) {
    if let Commands::Analyze {
        input,
        deadline,
        start_date,
    } = cmd
    {
        let start_date = match start_date
            .as_deref()
            .map(|date| NaiveDate::parse_from_str(date, "%Y-%m-%d"))
            .transpose()
        {
            Ok(date) => date,
            Err(e) => {
                eprintln!("Invalid start date: {e:?}");
                return;
            }
        };

        let samples = match load_histogram(&input) {
            Ok(samples) => samples,
            Err(e) => {
                eprintln!("Failed to load histogram: {e:?}");
                return;
            }
        };

        let (stats, series) = match analyze(&samples).and_then(|stats| {
            cumulative_series(&samples).map(|series| (stats, series))
        }) {
            Ok(result) => result,
            Err(e) => {
                eprintln!("Failed to analyze histogram: {e:?}");
                return;
            }
        };

        let confidence = deadline.and_then(|deadline| deadline_confidence(&series, deadline));
        let trials = u32::try_from(stats.total_count).unwrap_or(u32::MAX);
        let insight = insight_text(
            trials,
            f64::from(stats.percentiles.p50),
            f64::from(stats.percentiles.p90),
            deadline,
            confidence,
        );

        println!(
            "{}",
            format_stats_report(&data_source_name(&input), &stats, start_date, &insight)
        );
    }
}

fn data_source_name(path: &str) -> String {
    std::path::Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
        .to_string()
}
