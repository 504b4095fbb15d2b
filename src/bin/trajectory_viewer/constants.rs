use macroquad::prelude::Color;

pub const INITIAL_WINDOW_WIDTH: i32 = 1280;
pub const INITIAL_WINDOW_HEIGHT: i32 = 800;
pub const MSAA_SAMPLES: i32 = 4;

pub const LEFT_MARGIN: f32 = 100.0;
pub const RIGHT_MARGIN: f32 = 40.0;
pub const TOP_MARGIN: f32 = 90.0;
pub const BOTTOM_MARGIN: f32 = 90.0;

pub const TITLE_Y: f32 = 40.0;
pub const X_GRID_LINES: usize = 10;
pub const Y_GRID_LINES: usize = 8;
pub const MARKER_RADIUS_PX: f32 = 7.0;
pub const TRAIL_THICKNESS_PX: f32 = 3.0;

pub const BACKGROUND: Color = Color::new(0.97, 0.97, 0.98, 1.0);
pub const GRID_COLOR: Color = Color::new(0.85, 0.86, 0.89, 1.0);
pub const TRAIL_COLOR: Color = Color::new(0.12, 0.29, 0.85, 1.0);
pub const MARKER_COLOR: Color = Color::new(0.86, 0.15, 0.15, 1.0);
pub const TEXT_COLOR: Color = Color::new(0.16, 0.17, 0.20, 1.0);
