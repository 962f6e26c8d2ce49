use macroquad::prelude::*;
use parabolic_target::core::proximity::{ProximityResult, TargetReport};

use crate::constants::{
    CLOSEST_COLOR, HIT_COLOR, IMPACT_COLOR, LAUNCH_COLOR, MARKER_RADIUS, PATH_COLOR,
    TARGET_COLOR, X_GRID_LINES, Y_GRID_LINES,
};
use crate::state::Simulation;

/// Screen rectangle of the chart plus the world extents mapped onto it.
#[derive(Clone, Copy)]
pub(crate) struct PlotArea {
    pub(crate) left: f32,
    pub(crate) right: f32,
    pub(crate) top: f32,
    pub(crate) bottom: f32,
    pub(crate) world_max_x: f32,
    pub(crate) world_max_y: f32,
}

impl PlotArea {
    pub(crate) fn world_to_screen(&self, world: (f64, f64)) -> Vec2 {
        let x = self.screen_x(world.0 as f32 / self.world_max_x.max(1.0));
        let y = self.screen_y(world.1 as f32 / self.world_max_y.max(1.0));
        vec2(x, y)
    }

    /// `fraction` of the way from the left edge to the right edge.
    fn screen_x(&self, fraction: f32) -> f32 {
        self.left + fraction * (self.right - self.left).max(1.0)
    }

    /// `fraction` of the way from the bottom edge up to the top edge.
    fn screen_y(&self, fraction: f32) -> f32 {
        self.bottom - fraction * (self.bottom - self.top).max(1.0)
    }
}

/// Evenly spaced grid stops as `(fraction, world value)`.
fn ticks(lines: usize, world_max: f32) -> impl Iterator<Item = (f32, f32)> {
    (0..=lines).map(move |i| {
        let fraction = i as f32 / lines as f32;
        (fraction, fraction * world_max)
    })
}

fn tick_label(value: f32, step: f32) -> String {
    // Enough decimals that neighbouring labels stay distinct.
    let decimals = if step >= 10.0 {
        0
    } else if step >= 1.0 {
        1
    } else {
        2
    };
    format!("{value:.decimals$}")
}

pub(crate) fn draw_label(text: &str, at: Vec2, font_size: u16, color: Color, font: Option<&Font>) {
    let params = TextParams {
        font,
        font_size,
        color,
        ..Default::default()
    };
    draw_text_ex(text, at.x, at.y, params);
}

/// Grid, axis lines, tick values and axis titles for the chart area.
pub(crate) fn draw_axes(area: &PlotArea, grid_color: Color, font: Option<&Font>) {
    const TICK_FONT: u16 = 16;
    let label_color = Color::from_rgba(105, 113, 124, 255);

    let x_step = area.world_max_x / X_GRID_LINES as f32;
    for (fraction, value) in ticks(X_GRID_LINES, area.world_max_x) {
        let x = area.screen_x(fraction);
        draw_line(x, area.top, x, area.bottom, 1.0, grid_color);

        let label = tick_label(value, x_step);
        let size = measure_text(&label, font, TICK_FONT, 1.0);
        let at = vec2(x - size.width * 0.5, area.bottom + 22.0);
        draw_label(&label, at, TICK_FONT, label_color, font);
    }

    let y_step = area.world_max_y / Y_GRID_LINES as f32;
    for (fraction, value) in ticks(Y_GRID_LINES, area.world_max_y) {
        let y = area.screen_y(fraction);
        draw_line(area.left, y, area.right, y, 1.0, grid_color);

        let label = tick_label(value, y_step);
        let size = measure_text(&label, font, TICK_FONT, 1.0);
        let at = vec2(area.left - 8.0 - size.width, y + size.height * 0.35);
        draw_label(&label, at, TICK_FONT, label_color, font);
    }

    draw_line(area.left, area.bottom, area.right, area.bottom, 2.0, DARKGRAY);
    draw_line(area.left, area.top, area.left, area.bottom, 2.0, DARKGRAY);

    let x_title = vec2(area.right - 130.0, area.bottom + 48.0);
    draw_label("Distance (m)", x_title, 18, label_color, font);
    draw_label("Height (m)", vec2(area.left + 10.0, area.top - 8.0), 18, label_color, font);
}

pub(crate) fn draw_path(area: &PlotArea, points: &[(f64, f64)], thickness: f32, color: Color) {
    if points.len() < 2 {
        return;
    }
    let mut prev = area.world_to_screen(points[0]);
    for point in points.iter().skip(1).copied() {
        let cur = area.world_to_screen(point);
        draw_line(prev.x, prev.y, cur.x, cur.y, thickness, color);
        prev = cur;
    }
}

fn draw_marker(area: &PlotArea, world: (f64, f64), color: Color) -> Vec2 {
    let p = area.world_to_screen(world);
    draw_circle(p.x, p.y, MARKER_RADIUS, color);
    draw_circle_lines(p.x, p.y, MARKER_RADIUS, 1.5, DARKGRAY);
    p
}

pub(crate) fn draw_simulation(area: &PlotArea, simulation: &Simulation, font: Option<&Font>) {
    let trajectory = &simulation.trajectory;
    draw_path(area, trajectory.samples(), 3.0, PATH_COLOR);
    draw_marker(area, trajectory.launch_point(), LAUNCH_COLOR);
    draw_marker(area, trajectory.impact_point(), IMPACT_COLOR);

    let TargetReport::Proximity {
        target_x_m,
        target_y_m,
        result,
    } = &simulation.report.target
    else {
        return;
    };

    let target = area.world_to_screen((*target_x_m, *target_y_m));
    match result {
        ProximityResult::Hit(_) => {
            let text = format!("Hit! ({target_x_m:.2}, {target_y_m:.2})");
            draw_label(&text, target + vec2(12.0, -12.0), 20, HIT_COLOR, font);
        }
        ProximityResult::Closest(closest) => {
            let near = area.world_to_screen((closest.x_m, closest.y_m));
            draw_line(target.x, target.y, near.x, near.y, 1.5, TARGET_COLOR);
            draw_marker(area, (closest.x_m, closest.y_m), CLOSEST_COLOR);
            let text = format!("Closest: ({:.2}, {:.2})", closest.x_m, closest.y_m);
            draw_label(&text, near + vec2(12.0, -12.0), 18, CLOSEST_COLOR, font);
        }
    }

    draw_poly(target.x, target.y, 5, MARKER_RADIUS + 3.0, -90.0, TARGET_COLOR);
}

#[cfg(test)]
mod tests {
    use super::{tick_label, ticks};

    #[test]
    fn ticks_span_zero_to_axis_max() {
        let stops: Vec<(f32, f32)> = ticks(4, 200.0).collect();
        assert_eq!(stops.len(), 5);
        assert_eq!(stops[0], (0.0, 0.0));
        assert_eq!(stops[4], (1.0, 200.0));
    }

    #[test]
    fn tick_labels_follow_step_size() {
        assert_eq!(tick_label(120.0, 20.0), "120");
        assert_eq!(tick_label(7.5, 2.5), "7.5");
        assert_eq!(tick_label(0.25, 0.05), "0.25");
    }
}
