use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::duration_sample::DurationSample;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn from_score(score: f64) -> Self {
        if score >= 60.0 {
            RiskLevel::High
        } else if score >= 30.0 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskItem {
    pub score: f64,
    pub level: RiskLevel,
    pub uplift: String,
    pub delay_days: f64,
}

impl RiskItem {
    /// Builds an item whose level is derived from `score`.
    pub fn scored(score: f64, uplift: String, delay_days: f64) -> Self {
        Self {
            score,
            level: RiskLevel::from_score(score),
            uplift,
            delay_days,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskBreakdown {
    pub integration_risk: RiskItem,
    pub team_imbalance_risk: RiskItem,
    pub scope_creep_risk: RiskItem,
    pub learning_curve_risk: RiskItem,
}

impl RiskBreakdown {
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &RiskItem)> {
        [
            ("integration_risk", &self.integration_risk),
            ("team_imbalance_risk", &self.team_imbalance_risk),
            ("scope_creep_risk", &self.scope_creep_risk),
            ("learning_curve_risk", &self.learning_curve_risk),
        ]
        .into_iter()
    }

    /// Highest scoring risk. Ties keep the first one in declaration order.
    pub fn top_risk(&self) -> (&'static str, &RiskItem) {
        let mut top = ("integration_risk", &self.integration_risk);
        for (name, item) in self.iter().skip(1) {
            if item.score > top.1.score {
                top = (name, item);
            }
        }
        top
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StressLabel {
    #[serde(rename = "OK")]
    Ok,
    Elevated,
    Critical,
}

impl StressLabel {
    pub fn from_score(score: f64) -> Self {
        if score > 70.0 {
            StressLabel::Critical
        } else if score > 40.0 {
            StressLabel::Elevated
        } else {
            StressLabel::Ok
        }
    }

    /// Backend stress indices count the boundary as the higher label.
    pub fn from_backend_index(index: f64) -> Self {
        if index >= 70.0 {
            StressLabel::Critical
        } else if index >= 40.0 {
            StressLabel::Elevated
        } else {
            StressLabel::Ok
        }
    }

    pub fn mitigation(&self) -> &'static str {
        match self {
            StressLabel::Critical => "Add senior dev or extend deadline by 2+ weeks",
            StressLabel::Elevated => "Monitor workload closely",
            StressLabel::Ok => "Current pace is sustainable",
        }
    }
}

impl fmt::Display for StressLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StressLabel::Ok => "OK",
            StressLabel::Elevated => "Elevated",
            StressLabel::Critical => "Critical",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamStress {
    pub score: f64,
    pub label: StressLabel,
    pub mitigation: String,
}

impl TeamStress {
    pub fn from_score(score: f64) -> Self {
        Self::labelled(score, StressLabel::from_score(score))
    }

    pub fn from_backend_index(index: f64) -> Self {
        Self::labelled(index, StressLabel::from_backend_index(index))
    }

    fn labelled(score: f64, label: StressLabel) -> Self {
        Self {
            score,
            label,
            mitigation: label.mitigation().to_string(),
        }
    }

    /// Score clamped into `[0, 100]` for display.
    pub fn display_score(&self) -> f64 {
        self.score.clamp(0.0, 100.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleAllocation {
    pub frontend_pct: f64,
    pub backend_pct: f64,
    pub devops_pct: f64,
    pub recommendation: String,
}

impl RoleAllocation {
    pub fn total_pct(&self) -> f64 {
        self.frontend_pct + self.backend_pct + self.devops_pct
    }
}

/// Outcome of one simulation or scenario run. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Percent, 0-100.
    pub on_time_probability: f64,
    pub p50_weeks: f64,
    pub p90_weeks: f64,
    pub expected_overrun_days: f64,
    pub p50_cost: f64,
    pub p90_cost: f64,
    pub num_simulations: u32,
    pub distribution: Vec<DurationSample>,
    pub risks: RiskBreakdown,
    pub team_stress: TeamStress,
    pub allocation: RoleAllocation,
}
