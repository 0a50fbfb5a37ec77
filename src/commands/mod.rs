pub mod analyze_cmd;
pub mod base_commands;
pub mod fan_cmd;
pub mod report_format;
pub mod scenario_cmd;
pub mod simulate_cmd;
pub mod synthesize_cmd;
