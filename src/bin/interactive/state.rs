use std::path::Path;

use chrono::Local;
use parabolic_target::core::ballistics::Trajectory;
use parabolic_target::core::error::Error;
use parabolic_target::core::proximity::evaluate_target;
use parabolic_target::form::{LaunchForm, input_hint};
use parabolic_target::plot;
use parabolic_target::report::SimulationReport;
use tracing::{error, info, warn};

pub(crate) struct Simulation {
    pub(crate) trajectory: Trajectory,
    pub(crate) report: SimulationReport,
}

pub(crate) struct AppRuntime {
    pub(crate) form: LaunchForm,
    pub(crate) simulation: Option<Simulation>,
    pub(crate) status_line: String,
}

impl AppRuntime {
    pub(crate) fn new() -> Self {
        Self {
            form: LaunchForm::with_defaults(),
            simulation: None,
            status_line: "Ready".to_string(),
        }
    }

    /// Replaces the current simulation; a rejected form keeps the old one on screen.
    pub(crate) fn simulate(&mut self) {
        let built = self.form.parse().and_then(|(params, query)| {
            let trajectory = Trajectory::new(params)?;
            Ok::<_, Error>((trajectory, query))
        });

        match built {
            Ok((trajectory, query)) => {
                let target = evaluate_target(&trajectory, query);
                let report = SimulationReport::new(&trajectory, target);
                self.status_line = "Simulation updated".to_string();
                self.simulation = Some(Simulation { trajectory, report });
            }
            Err(err) => {
                warn!(%err, "rejected launch form");
                self.status_line = format!("{} ({err})", input_hint(&err));
            }
        }
    }

    pub(crate) fn save_graph(&mut self) {
        let Some(simulation) = &self.simulation else {
            self.status_line = "Nothing to Save: Please run a simulation first.".to_string();
            return;
        };

        let file_name = plot::default_file_name(&Local::now());
        match plot::render_to_file(
            Path::new(&file_name),
            &simulation.trajectory,
            &simulation.report.target,
        ) {
            Ok(()) => {
                info!(%file_name, "graph saved");
                self.status_line = format!("Graph saved to: {file_name}");
            }
            Err(err) => {
                error!(%err, %file_name, "could not save graph");
                self.status_line = format!("Could not save graph: {err}");
            }
        }
    }
}
