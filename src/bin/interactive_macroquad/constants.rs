use macroquad::prelude::Color;

pub const INITIAL_WINDOW_WIDTH: i32 = 1280;
pub const INITIAL_WINDOW_HEIGHT: i32 = 800;
pub const MSAA_SAMPLES: i32 = 4;
pub const UI_FONT_PATH: &str = "assets/fonts/Lato-Regular.ttf";

pub const PANEL_X: f32 = 18.0;
pub const PANEL_Y: f32 = 110.0;
pub const PANEL_WIDTH: f32 = 340.0;
pub const PANEL_HEIGHT: f32 = 250.0;

pub const LEFT_MARGIN: f32 = PANEL_X + PANEL_WIDTH + 24.0;
pub const RIGHT_MARGIN: f32 = 30.0;
pub const TOP_MARGIN: f32 = 110.0;
pub const BOTTOM_MARGIN: f32 = 30.0;

pub const TITLE_Y: f32 = 46.0;
pub const CONTROLS_Y: f32 = 80.0;
pub const INFO_PANEL_Y: f32 = PANEL_Y + PANEL_HEIGHT + 24.0;

pub const ANGLE_KEY_RATE_DEG: f64 = 30.0;
pub const SPEED_KEY_RATE_MPS: f64 = 20.0;

pub const PROJECTILE_RADIUS_PX: f32 = 7.0;
pub const SKY_BANDS: usize = 24;

pub const SKY_TOP: Color = Color::new(0.059, 0.090, 0.165, 1.0);
pub const SKY_BOTTOM: Color = Color::new(0.004, 0.020, 0.059, 1.0);
pub const GROUND_COLOR: Color = Color::new(0.133, 0.773, 0.369, 1.0);
pub const PREDICTION_COLOR: Color = Color::new(0.231, 0.510, 0.965, 0.9);
pub const TRAIL_COLOR: Color = Color::new(0.984, 0.573, 0.235, 1.0);
pub const TARGET_FILL: Color = Color::new(0.020, 0.588, 0.412, 1.0);
pub const TARGET_EDGE: Color = Color::new(0.133, 0.773, 0.369, 1.0);
pub const PROJECTILE_FILL: Color = Color::new(0.976, 0.451, 0.086, 1.0);
pub const PROJECTILE_EDGE: Color = Color::new(0.992, 0.729, 0.455, 1.0);
pub const IDLE_TEXT_COLOR: Color = Color::new(0.580, 0.639, 0.722, 0.8);
pub const PAGE_BG: Color = Color::new(0.020, 0.035, 0.075, 1.0);
pub const HEADER_COLOR: Color = Color::new(0.886, 0.910, 0.941, 1.0);
pub const MUTED_COLOR: Color = Color::new(0.580, 0.639, 0.722, 1.0);
pub const ACCENT_COLOR: Color = Color::new(0.490, 0.827, 0.988, 1.0);
pub const SUCCESS_COLOR: Color = Color::new(0.431, 0.906, 0.718, 1.0);
