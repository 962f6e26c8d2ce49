use crate::core::ballistics::Trajectory;
use crate::core::proximity::TargetReport;

/// Chart width over chart height, in metres.
pub const DISTANCE_TO_HEIGHT_RATIO: f64 = 2.0;

const X_PADDING_RATIO: f64 = 0.06;
const Y_PADDING_RATIO: f64 = 0.10;
const MIN_SPAN_M: f64 = 1.0;

/// Axis extents `(x_span, y_span)` that fit the whole path plus the target
/// marker, if any.
///
/// Each extent gets a little headroom, then the narrower one is stretched so
/// the chart keeps a fixed distance:height ratio and a 30° shot still looks
/// like 30°.
pub fn plot_window(trajectory: &Trajectory, target: &TargetReport) -> (f64, f64) {
    let (mut far_x, mut high_y) = (trajectory.range_m(), trajectory.max_height_m());
    if let Some((x, y)) = target.marker() {
        far_x = far_x.max(x);
        high_y = high_y.max(y);
    }

    let x_span = padded(far_x, X_PADDING_RATIO);
    let y_span = padded(high_y, Y_PADDING_RATIO);
    let ratio_span = x_span.max(y_span * DISTANCE_TO_HEIGHT_RATIO);
    (ratio_span, ratio_span / DISTANCE_TO_HEIGHT_RATIO)
}

fn padded(extent: f64, ratio: f64) -> f64 {
    (extent + extent.max(MIN_SPAN_M) * ratio).max(MIN_SPAN_M)
}
