use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScopeSize {
    Small,
    Medium,
    Large,
}

/// Project intake parameters as entered on the dashboard form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    pub project_name: String,
    #[serde(default)]
    pub description: String,
    pub scope_size: ScopeSize,
    pub complexity: u8,
    pub tech_stack: String,
    pub deadline_weeks: u32,
    #[serde(default)]
    pub team_junior: u32,
    #[serde(default)]
    pub team_mid: u32,
    #[serde(default)]
    pub team_senior: u32,
    #[serde(default)]
    pub integrations_count: u32,
    #[serde(default)]
    pub scope_volatility: u32,
    #[serde(default = "default_num_simulations")]
    pub num_simulations: u32,
}

fn default_num_simulations() -> u32 {
    1000
}

impl SimulationRequest {
    pub fn team_size(&self) -> u32 {
        self.team_junior + self.team_mid + self.team_senior
    }

    /// Preset used for demos when no request file is given.
    pub fn demo() -> Self {
        Self {
            project_name: "FinTrack Mobile App".to_string(),
            description: "Cross-platform mobile application for personal finance tracking with bank integration, budgeting tools, and AI-powered spending insights.".to_string(),
            scope_size: ScopeSize::Medium,
            complexity: 3,
            tech_stack: "React Native".to_string(),
            deadline_weeks: 12,
            team_junior: 1,
            team_mid: 2,
            team_senior: 1,
            integrations_count: 3,
            scope_volatility: 45,
            num_simulations: 1000,
        }
    }
}
