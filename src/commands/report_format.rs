use chrono::{Duration, NaiveDate};

use timeline_forecasts::domain::simulation_result::SimulationResult;
use timeline_forecasts::services::descriptive_stats::DistributionStats;

const PERCENTILE_LABELS: [(u32, &str); 6] = [
    (10, "Best"),
    (25, "Good"),
    (50, "Expected"),
    (75, "Likely"),
    (90, "Plan for"),
    (95, "Worst"),
];

/// Calendar date after `weeks` weeks, one week being seven days.
pub fn date_after_weeks(start_date: NaiveDate, weeks: f64) -> NaiveDate {
    let days = (weeks * 7.0).ceil().max(0.0) as i64;
    start_date + Duration::days(days)
}

pub fn format_stats_report(
    source: &str,
    stats: &DistributionStats,
    start_date: Option<NaiveDate>,
    insight: &str,
) -> String {
    let mut lines = Vec::new();
    lines.push("Distribution Report".to_string());
    lines.push(format!("Data source: {source}"));
    lines.push(format!("Trials: {}", stats.total_count));
    lines.push(format!("Mean: {:.2} weeks", stats.mean));
    lines.push(format!("Std dev: {:.2} weeks", stats.std_dev));
    lines.push(format!("Mode: week {}", stats.mode));
    lines.push(format!("Skewness: {:.3}", stats.skewness));
    lines.push(format!(
        "95% CI: {:.2} - {:.2} weeks",
        stats.ci95_lower, stats.ci95_upper
    ));
    lines.push(String::new());
    lines.push("Percentiles:".to_string());
    lines.push("Percentile | Label | Week | Date".to_string());
    lines.push("-----------|-------|------|-----".to_string());
    for (level, label) in PERCENTILE_LABELS {
        let week = stats.percentiles.get(level).unwrap_or_default();
        let date = start_date
            .map(|start| date_after_weeks(start, f64::from(week)).format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "n/a".to_string());
        lines.push(format!("P{level} | {label} | {week} | {date}"));
    }
    lines.push(String::new());
    lines.push(insight.to_string());

    lines.join("\n")
}

pub fn format_simulation_report(result: &SimulationResult, origin: &str) -> String {
    let mut lines = Vec::new();
    lines.push("Simulation Report".to_string());
    lines.push(format!("Source: {origin}"));
    lines.push(format!("Simulations: {}", result.num_simulations));
    lines.push(format!("On-time probability: {:.1}%", result.on_time_probability));
    lines.push(format!("P50: {:.1} weeks", result.p50_weeks));
    lines.push(format!("P90: {:.1} weeks", result.p90_weeks));
    lines.push(format!("Expected overrun: {:.1} days", result.expected_overrun_days));
    lines.push(format!("Cost: {:.0} - {:.0}", result.p50_cost, result.p90_cost));
    lines.push(String::new());
    lines.push("Risk | Score | Level | Delay days".to_string());
    lines.push("-----|-------|-------|-----------".to_string());
    for (name, item) in result.risks.iter() {
        lines.push(format!(
            "{name} | {:.1} | {} | {:.1}",
            item.score, item.level, item.delay_days
        ));
    }
    lines.push(String::new());
    lines.push(format!(
        "Team stress: {} ({:.0}/100) - {}",
        result.team_stress.label,
        result.team_stress.display_score(),
        result.team_stress.mitigation
    ));
    lines.push(format!(
        "Allocation: FE {:.0}% / BE {:.0}% / DevOps {:.0}%",
        result.allocation.frontend_pct, result.allocation.backend_pct, result.allocation.devops_pct
    ));
    lines.push(result.allocation.recommendation.clone());

    lines.join("\n")
}

pub fn format_scenario_comparison(baseline: &SimulationResult, scenario: &SimulationResult) -> String {
    let rows = [
        ("On-time %", baseline.on_time_probability, scenario.on_time_probability),
        ("P50 weeks", baseline.p50_weeks, scenario.p50_weeks),
        ("P90 weeks", baseline.p90_weeks, scenario.p90_weeks),
        ("Overrun days", baseline.expected_overrun_days, scenario.expected_overrun_days),
        ("P50 cost", baseline.p50_cost, scenario.p50_cost),
        ("P90 cost", baseline.p90_cost, scenario.p90_cost),
        ("Team stress", baseline.team_stress.score, scenario.team_stress.score),
    ];

    let mut lines = Vec::new();
    lines.push("Scenario Comparison".to_string());
    lines.push("Metric | Baseline | Scenario | Change".to_string());
    lines.push("-------|----------|----------|-------".to_string());
    for (metric, before, after) in rows {
        lines.push(format!(
            "{metric} | {before:.1} | {after:.1} | {:+.1}",
            after - before
        ));
    }
    lines.push(format!(
        "Stress label: {} -> {}",
        baseline.team_stress.label, scenario.team_stress.label
    ));

    lines.join("\n")
}
