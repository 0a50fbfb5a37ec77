pub mod backend_api;
pub mod descriptive_stats;
pub mod distribution_synthesizer;
pub mod executive_summary;
pub mod fan_chart;
pub mod fan_chart_plot;
pub mod histogram;
pub mod input_validation;
pub mod jitter;
pub mod mock_simulation;
pub mod percentiles;
pub mod result_yaml;
pub mod scenario_projector;
