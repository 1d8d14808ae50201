use crate::types::Color;

pub const GUI_WINDOW_WIDTH: f32 = 720.0;
pub const GUI_WINDOW_HEIGHT: f32 = 820.0;
pub const GUI_MIN_WINDOW_SIZE: f32 = 320.0;
pub const GUI_PANEL_PADDING: f32 = 24.0;

pub const GUI_DISPLAY_HEIGHT: f32 = 256.0;

pub const GUI_SLIDER_HEIGHT: f32 = 20.0;
pub const GUI_SLIDER_THUMB_RADIUS: f32 = 10.0;
pub const GUI_SLIDER_SPACING: f32 = 24.0;

pub const GUI_SWATCH_COLUMNS: usize = 8;
pub const GUI_SWATCH_SPACING: f32 = 12.0;
pub const GUI_MAX_SWATCH_COLUMNS: usize = 16;

pub const DEFAULT_COLOR: Color = Color::new(128, 128, 128);

pub const CONFIG_DIR_NAME: &str = "rgb-picker";
pub const CONFIG_FILE_NAME: &str = "config.toml";
