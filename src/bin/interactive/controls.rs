use macroquad::prelude::*;
use macroquad::ui::{hash, root_ui, widgets};

use crate::constants::{PANEL_HEIGHT, PANEL_WIDTH, PANEL_X, PANEL_Y};
use crate::state::AppRuntime;

#[derive(Default, Clone, Copy)]
pub(crate) struct FrameActions {
    pub(crate) simulate: bool,
    pub(crate) save: bool,
}

impl FrameActions {
    pub(crate) fn merge(self, other: Self) -> Self {
        Self {
            simulate: self.simulate || other.simulate,
            save: self.save || other.save,
        }
    }
}

pub(crate) fn hotkey_actions() -> FrameActions {
    let ctrl = is_key_down(KeyCode::LeftControl) || is_key_down(KeyCode::RightControl);
    FrameActions {
        simulate: is_key_pressed(KeyCode::Enter),
        save: ctrl && is_key_pressed(KeyCode::S),
    }
}

pub(crate) fn apply_actions(state: &mut AppRuntime, actions: FrameActions) {
    if actions.simulate {
        state.simulate();
    }
    if actions.save {
        state.save_graph();
    }
}

pub(crate) fn draw_control_panel(state: &mut AppRuntime) -> FrameActions {
    let mut actions = FrameActions::default();
    widgets::Window::new(
        hash!(),
        vec2(PANEL_X, PANEL_Y),
        vec2(PANEL_WIDTH, PANEL_HEIGHT),
    )
    .label("Launch Conditions")
    .ui(&mut *root_ui(), |ui| {
        ui.input_text(hash!(), "Initial Speed (m/s)", &mut state.form.speed);
        ui.input_text(hash!(), "Launch Angle (deg)", &mut state.form.angle);
        ui.input_text(hash!(), "Initial Height (m)", &mut state.form.height);
        ui.input_text(hash!(), "Target X (m)", &mut state.form.target_x);
        ui.input_text(hash!(), "Target Y (m)", &mut state.form.target_y);
        ui.separator();
        if ui.button(None, "Simulate (Enter)") {
            actions.simulate = true;
        }
        if ui.button(None, "Save Graph (Ctrl+S)") {
            actions.save = true;
        }
        ui.separator();
        ui.label(None, "Results");
        match &state.simulation {
            Some(simulation) => {
                let report = &simulation.report;
                ui.label(None, &report.flight_time_line());
                ui.label(None, &report.max_height_line());
                ui.label(None, &report.range_line());
                ui.label(None, &report.target_line());
            }
            None => {
                ui.label(None, "Time of Flight: -");
                ui.label(None, "Max Height: -");
                ui.label(None, "Total Range: -");
                ui.label(None, "Target: -");
            }
        }
    });

    actions
}
