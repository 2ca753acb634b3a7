use eframe::egui::Color32;

pub struct Config;

impl Config {
    pub const WINDOW_SIZE: [f32; 2] = [1200., 800.];
    pub const MIN_WINDOW_SIZE: [f32; 2] = [640., 480.];

    pub const FRAME_MARGIN: f32 = 10.;
    pub const TEXT_SIZE: f32 = 16.;
    pub const TEXT_COLOR: Color32 = Color32::WHITE;
    pub const HINT_COLOR: Color32 = Color32::from_rgb(100, 100, 100);
    pub const PANEL_COLOR: Color32 = Color32::from_rgb(40, 40, 40);
    pub const BACKGROUND_COLOR: Color32 = Color32::from_rgb(20, 20, 20);
    pub const BUTTON_SIZE: [f32; 2] = [80., 30.];
    pub const BUTTON_STROKE_WIDTH: f32 = 2.;
    pub const BUTTON_STROKE_COLOR: Color32 = Color32::WHITE;
    pub const INPUT_FIELD_WIDTH: f32 = 60.;
    pub const FILENAME_INPUT_FIELD_WIDTH: f32 = 160.;

    pub const START_COLOR: Color32 = Color32::from_rgb(76, 175, 80);
    pub const STOP_COLOR: Color32 = Color32::from_rgb(244, 67, 54);
    pub const STEP_COLOR: Color32 = Color32::from_rgb(255, 152, 0);
    pub const CLEAR_COLOR: Color32 = Color32::from_rgb(60, 60, 60);
    pub const RANDOM_COLOR: Color32 = Color32::from_rgb(33, 150, 243);
    pub const APPLY_COLOR: Color32 = Color32::from_rgb(156, 39, 176);

    pub const ALIVE_COLOR: Color32 = Color32::WHITE;
    pub const DEAD_COLOR: Color32 = Color32::from_rgb(20, 20, 20);
    pub const GRID_LINE_COLOR: Color32 = Color32::from_rgb(60, 60, 60);
    /// Grid lines are only drawn for cells larger than this many pixels.
    pub const GRID_LINES_MIN_CELL: f32 = 5.;
    pub const MIN_CELL_SIZE: f32 = 3.;
    pub const MAX_CELL_SIZE: f32 = 20.;

    pub const MAX_FPS: f64 = 60.;
    pub const PATTERN_FILE: &'static str = "pattern.rle";
}
