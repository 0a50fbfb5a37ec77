use serde::{Deserialize, Serialize};

/// User-tweaked changes relative to a baseline run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioDeltas {
    /// Senior developers added (negative: removed).
    pub senior: i32,
    /// Additional third-party integrations.
    pub integrations: i32,
    /// Deadline extension in weeks.
    pub deadline: i32,
}

impl ScenarioDeltas {
    pub fn new(senior: i32, integrations: i32, deadline: i32) -> Self {
        Self {
            senior,
            integrations,
            deadline,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.senior == 0 && self.integrations == 0 && self.deadline == 0
    }
}
