use macroquad::prelude::Color;

pub const INITIAL_WINDOW_WIDTH: i32 = 1280;
pub const INITIAL_WINDOW_HEIGHT: i32 = 760;
pub const MSAA_SAMPLES: i32 = 4;
pub const UI_FONT_PATH: &str = "assets/fonts/Lato-Regular.ttf";

pub const PANEL_X: f32 = 18.0;
pub const PANEL_Y: f32 = 90.0;
pub const PANEL_WIDTH: f32 = 380.0;
pub const PANEL_HEIGHT: f32 = 420.0;

pub const LEFT_MARGIN: f32 = 480.0;
pub const RIGHT_MARGIN: f32 = 30.0;
pub const TOP_MARGIN: f32 = 110.0;
pub const BOTTOM_MARGIN: f32 = 110.0;

pub const TITLE_Y: f32 = 46.0;
pub const X_GRID_LINES: usize = 10;
pub const Y_GRID_LINES: usize = 8;
pub const MARKER_RADIUS: f32 = 7.0;

pub const BACKGROUND: Color = Color::new(0.95, 0.96, 0.99, 1.0);
pub const GRID_COLOR: Color = Color::new(0.89, 0.91, 0.93, 1.0);
pub const PATH_COLOR: Color = Color::new(0.0, 0.6, 1.0, 1.0);
pub const LAUNCH_COLOR: Color = Color::new(0.24, 0.86, 0.59, 1.0);
pub const IMPACT_COLOR: Color = Color::new(1.0, 0.39, 0.39, 1.0);
pub const TARGET_COLOR: Color = Color::new(1.0, 0.72, 0.0, 1.0);
pub const CLOSEST_COLOR: Color = Color::new(0.7, 0.36, 1.0, 1.0);
pub const HIT_COLOR: Color = Color::new(0.78, 0.32, 0.27, 1.0);
