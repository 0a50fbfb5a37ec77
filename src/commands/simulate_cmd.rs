use rand::rngs::StdRng;

use timeline_forecasts::config::ForecastConfig;
use timeline_forecasts::domain::simulation_request::SimulationRequest;
use timeline_forecasts::services::backend_api::{BackendClient, ResultOrigin, simulate_or_mock};
use timeline_forecasts::services::executive_summary::executive_summary;
use timeline_forecasts::services::result_yaml::{load_simulation_request, write_yaml};

use crate::commands::base_commands::Commands;
use crate::commands::report_format::format_simulation_report;

pub async fn simulate_command(cmd: Commands, config: &ForecastConfig, rng: &mut StdRng) {
    if let Commands::Simulate { request, output } = cmd {
        let request = match request.as_deref() {
            Some(path) => match load_simulation_request(path) {
                Ok(request) => request,
                Err(e) => {
                    eprintln!("Failed to load simulation request: {e:?}");
                    return;
                }
            },
            None => SimulationRequest::demo(),
        };

        let client = match config.backend_url() {
            Some(url) => match BackendClient::new(url, config.request_timeout()) {
                Ok(client) => Some(client),
                Err(e) => {
                    eprintln!("Failed to create backend client: {e:?}");
                    return;
                }
            },
            None => None,
        };

        let (result, origin) = match simulate_or_mock(client.as_ref(), &request, rng).await {
            Ok(outcome) => outcome,
            Err(e) => {
                eprintln!("Failed to simulate project: {e:?}");
                return;
            }
        };

        if let Err(e) = write_yaml(&output, &result) {
            eprintln!("Failed to write simulation output: {e:?}");
            return;
        }

        let origin = match origin {
            ResultOrigin::Backend => "backend",
            ResultOrigin::Mock => "mock",
        };
        println!("{}", format_simulation_report(&result, origin));
        println!();
        println!("{}", executive_summary(&result));
        println!("Simulation result for {} written to {output}", request.project_name);
    }
}
