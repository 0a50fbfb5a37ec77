use crate::domain::simulation_result::SimulationResult;

/// Plain-language summary of a simulation for stakeholders.
pub fn executive_summary(result: &SimulationResult) -> String {
    let (risk_key, top_risk) = result.risks.top_risk();
    format!(
        "Based on {runs} Monte Carlo simulations, this project has a {on_time}% probability of completing on time. \
The median completion timeline is {p50} weeks (P50), with a pessimistic estimate of {p90} weeks (P90), \
representing a potential overrun of {overrun} days. The estimated cost ranges from ${p50_cost} to ${p90_cost}. \
The highest risk factor is {risk} at a score of {risk_score}/100, which could contribute an additional {delay} days of delay. \
Team stress is currently rated as \"{stress_label}\" ({stress_score}/100). \
We recommend focusing mitigation efforts on the top risk factor and considering team composition adjustments to improve the probability envelope.",
        runs = group_thousands(f64::from(result.num_simulations)),
        on_time = result.on_time_probability,
        p50 = result.p50_weeks,
        p90 = result.p90_weeks,
        overrun = result.expected_overrun_days,
        p50_cost = group_thousands(result.p50_cost),
        p90_cost = group_thousands(result.p90_cost),
        risk = title_case(risk_key),
        risk_score = top_risk.score,
        delay = top_risk.delay_days,
        stress_label = result.team_stress.label,
        stress_score = result.team_stress.display_score(),
    )
}

/// `scope_creep_risk` => `Scope Creep Risk`.
pub fn title_case(key: &str) -> String {
    key.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Rounds to a whole number and inserts `,` between groups of three digits.
pub fn group_thousands(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if rounded < 0 {
        grouped.insert(0, '-');
    }
    grouped
}
