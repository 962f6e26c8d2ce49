use macroquad::prelude::*;
use parabolic_target::core::window::plot_window;
use parabolic_target::report::plot_title;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use crate::constants::{
    BACKGROUND, BOTTOM_MARGIN, GRID_COLOR, INITIAL_WINDOW_HEIGHT, INITIAL_WINDOW_WIDTH,
    LEFT_MARGIN, MSAA_SAMPLES, RIGHT_MARGIN, TITLE_Y, TOP_MARGIN, UI_FONT_PATH,
};
use crate::controls::{apply_actions, draw_control_panel, hotkey_actions};
use crate::render::{PlotArea, draw_axes, draw_label, draw_simulation};
use crate::state::AppRuntime;

pub(crate) fn window_conf() -> Conf {
    Conf {
        window_title: "Projectile Motion Simulator".to_string(),
        window_width: INITIAL_WINDOW_WIDTH,
        window_height: INITIAL_WINDOW_HEIGHT,
        high_dpi: true,
        sample_count: MSAA_SAMPLES,
        ..Default::default()
    }
}

pub(crate) async fn run() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let ui_font = match load_ttf_font(UI_FONT_PATH).await {
        Ok(font) => Some(font),
        Err(err) => {
            warn!("Could not load '{UI_FONT_PATH}': {err}. Falling back to default font.");
            None
        }
    };

    let mut state = AppRuntime::new();

    loop {
        let screen_w = screen_width();
        let screen_h = screen_height();

        let actions = hotkey_actions().merge(draw_control_panel(&mut state));
        apply_actions(&mut state, actions);

        clear_background(BACKGROUND);

        let header_color = Color::from_rgba(30, 30, 35, 255);
        let title = state
            .simulation
            .as_ref()
            .map_or_else(
                || "Projectile Trajectory".to_string(),
                |s| plot_title(s.trajectory.params()),
            );
        let title_at = vec2(LEFT_MARGIN, TITLE_Y);
        draw_label(&title, title_at, 28, header_color, ui_font.as_ref());

        let (world_max_x, world_max_y) = state
            .simulation
            .as_ref()
            .map_or((100.0, 50.0), |s| plot_window(&s.trajectory, &s.report.target));
        let area = PlotArea {
            left: LEFT_MARGIN,
            right: screen_w - RIGHT_MARGIN,
            top: TOP_MARGIN,
            bottom: screen_h - BOTTOM_MARGIN,
            world_max_x: world_max_x as f32,
            world_max_y: world_max_y as f32,
        };

        draw_axes(&area, GRID_COLOR, ui_font.as_ref());
        if let Some(simulation) = &state.simulation {
            draw_simulation(&area, simulation, ui_font.as_ref());
        }

        let status_at = vec2(LEFT_MARGIN, screen_h - 24.0);
        draw_label(&state.status_line, status_at, 20, DARKGRAY, ui_font.as_ref());

        next_frame().await;
    }
}
