//! Static chart export of a simulated trajectory.
//!
//! Draws the sampled path with its launch and impact points and, when a full
//! (x, y) target was queried, the target marker plus either a hit annotation or
//! a connector line to the closest sampled point.

use std::fmt::Display;
use std::path::Path;

use chrono::{DateTime, TimeZone};
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use tracing::info;

use crate::core::ballistics::Trajectory;
use crate::core::proximity::{ProximityResult, TargetReport};
use crate::core::window::plot_window;
use crate::report::plot_title;

pub const CHART_SIZE: (u32, u32) = (1200, 800);

const BACKGROUND: RGBColor = RGBColor(248, 250, 251);
const TEXT_COLOR: RGBColor = RGBColor(34, 34, 34);
const GRID_COLOR: RGBColor = RGBColor(227, 231, 236);
const PATH_COLOR: RGBColor = RGBColor(0, 153, 255);
const LAUNCH_COLOR: RGBColor = RGBColor(61, 220, 151);
const IMPACT_COLOR: RGBColor = RGBColor(255, 99, 99);
const TARGET_COLOR: RGBColor = RGBColor(255, 184, 0);
const HIT_TEXT_COLOR: RGBColor = RGBColor(199, 81, 70);
const CLOSEST_COLOR: RGBColor = RGBColor(178, 93, 255);

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unsupported chart format {0:?}, expected .png or .svg")]
    UnsupportedFormat(String),
    #[error("Failed to draw chart: {0}")]
    Drawing(String),
}

fn drawing<E: std::error::Error + Send + Sync>(err: DrawingAreaErrorKind<E>) -> Error {
    Error::Drawing(err.to_string())
}

/// File name used when the user saves without choosing one.
pub fn default_file_name<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    now.format("trajectory-%Y%m%d-%H%M%S.png").to_string()
}

/// Renders the chart to `path`, picking the backend from its extension.
pub fn render_to_file(
    path: &Path,
    trajectory: &Trajectory,
    target: &TargetReport,
) -> Result<(), Error> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "png" => draw_chart(
            BitMapBackend::new(path, CHART_SIZE).into_drawing_area(),
            trajectory,
            target,
        )?,
        "svg" => draw_chart(
            SVGBackend::new(path, CHART_SIZE).into_drawing_area(),
            trajectory,
            target,
        )?,
        other => return Err(Error::UnsupportedFormat(other.to_string())),
    }

    info!(path = %path.display(), "saved trajectory chart");
    Ok(())
}

fn draw_chart<DB: DrawingBackend>(
    root: DrawingArea<DB, Shift>,
    trajectory: &Trajectory,
    target: &TargetReport,
) -> Result<(), Error> {
    root.fill(&BACKGROUND).map_err(drawing)?;

    let (x_span, y_span) = plot_window(trajectory, target);
    let mut chart = ChartBuilder::on(&root)
        .caption(
            plot_title(trajectory.params()),
            ("sans-serif", 26).into_font().color(&TEXT_COLOR),
        )
        .margin(18)
        .x_label_area_size(48)
        .y_label_area_size(64)
        .build_cartesian_2d(0.0..x_span, 0.0..y_span)
        .map_err(drawing)?;

    chart
        .configure_mesh()
        .x_desc("Distance (m)")
        .y_desc("Height (m)")
        .axis_desc_style(("sans-serif", 18).into_font().color(&TEXT_COLOR))
        .light_line_style(GRID_COLOR)
        .draw()
        .map_err(drawing)?;

    chart
        .draw_series(LineSeries::new(
            trajectory.samples().iter().copied(),
            PATH_COLOR.stroke_width(3),
        ))
        .map_err(drawing)?
        .label("Projectile Path")
        .legend(|(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], PATH_COLOR.stroke_width(3))
        });

    chart
        .draw_series(std::iter::once(Circle::new(
            trajectory.launch_point(),
            7,
            LAUNCH_COLOR.filled(),
        )))
        .map_err(drawing)?
        .label("Launch")
        .legend(|(x, y)| Circle::new((x + 10, y), 5, LAUNCH_COLOR.filled()));

    chart
        .draw_series(std::iter::once(Circle::new(
            trajectory.impact_point(),
            7,
            IMPACT_COLOR.filled(),
        )))
        .map_err(drawing)?
        .label("Impact")
        .legend(|(x, y)| Circle::new((x + 10, y), 5, IMPACT_COLOR.filled()));

    if let TargetReport::Proximity {
        target_x_m,
        target_y_m,
        result,
    } = target
    {
        let target_point = (*target_x_m, *target_y_m);
        // Annotations sit up and to the right of the point they describe.
        let offset = |(x, y): (f64, f64)| (x + x_span * 0.02, y + y_span * 0.05);

        chart
            .draw_series(std::iter::once(TriangleMarker::new(
                target_point,
                10,
                TARGET_COLOR.filled(),
            )))
            .map_err(drawing)?
            .label("Target")
            .legend(|(x, y)| TriangleMarker::new((x + 10, y), 6, TARGET_COLOR.filled()));

        match result {
            ProximityResult::Hit(_) => {
                chart
                    .draw_series(std::iter::once(Text::new(
                        format!("Hit! ({target_x_m:.2}, {target_y_m:.2})"),
                        offset(target_point),
                        ("sans-serif", 18).into_font().color(&HIT_TEXT_COLOR),
                    )))
                    .map_err(drawing)?;
            }
            ProximityResult::Closest(closest) => {
                let closest_point = (closest.x_m, closest.y_m);
                chart
                    .draw_series(LineSeries::new(
                        [target_point, closest_point],
                        TARGET_COLOR.stroke_width(1),
                    ))
                    .map_err(drawing)?;
                chart
                    .draw_series(std::iter::once(Circle::new(
                        closest_point,
                        6,
                        CLOSEST_COLOR.filled(),
                    )))
                    .map_err(drawing)?
                    .label("Closest")
                    .legend(|(x, y)| Circle::new((x + 10, y), 5, CLOSEST_COLOR.filled()));
                chart
                    .draw_series(std::iter::once(Text::new(
                        format!("Closest: ({:.2}, {:.2})", closest.x_m, closest.y_m),
                        offset(closest_point),
                        ("sans-serif", 16).into_font().color(&CLOSEST_COLOR),
                    )))
                    .map_err(drawing)?;
            }
        }
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(BACKGROUND.mix(0.85))
        .label_font(("sans-serif", 16).into_font().color(&TEXT_COLOR))
        .draw()
        .map_err(drawing)?;

    root.present().map_err(drawing)?;
    Ok(())
}
