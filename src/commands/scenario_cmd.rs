use rand::rngs::StdRng;

use timeline_forecasts::domain::scenario::ScenarioDeltas;
use timeline_forecasts::services::result_yaml::{load_simulation_result, write_yaml};
use timeline_forecasts::services::scenario_projector::project_with_rng;

use crate::commands::base_commands::Commands;
use crate::commands::report_format::format_scenario_comparison;

pub fn scenario_command(cmd: Commands, rng: &mut StdRng) {
    if let Commands::Scenario {
        baseline,
        output,
        senior,
        integrations,
        deadline,
    } = cmd
    {
        let baseline = match load_simulation_result(&baseline) {
            Ok(result) => result,
            Err(e) => {
                eprintln!("Failed to load baseline: {e:?}");
                return;
            }
        };

        let deltas = ScenarioDeltas::new(senior, integrations, deadline);
        if deltas.is_zero() {
            println!("No changes requested; scenario equals baseline");
        }
        let scenario = match project_with_rng(&baseline, deltas, rng) {
            Ok(result) => result,
            Err(e) => {
                eprintln!("Failed to project scenario: {e:?}");
                return;
            }
        };

        if let Err(e) = write_yaml(&output, &scenario) {
            eprintln!("Failed to write scenario: {e:?}");
            return;
        }

        println!("{}", format_scenario_comparison(&baseline, &scenario));
        println!("Scenario result written to {output}");
    }
}
