mod app;
mod config;
mod constants;
mod swatches;
mod types;

use constants::*;
use eframe::{NativeOptions, Result, run_native};
use eframe::egui::{Vec2, ViewportBuilder};
use app::App;
use config::Config;

fn main() -> Result {
    env_logger::init();

    let title = "Seletor de Cores RGB";
    let config = Config::load_or_default();

    let options = NativeOptions {
        viewport: ViewportBuilder {
            inner_size: Some(Vec2::new(config.window_width, config.window_height)),
            min_inner_size: Some(Vec2::splat(GUI_MIN_WINDOW_SIZE)),
            ..Default::default()
        },
        ..Default::default()
    };

    run_native(
        title,
        options,
        Box::new(move |_cc| Ok(Box::new(App::new(config)))),
    )
}
