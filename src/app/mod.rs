mod app;
pub mod color_input;
pub mod color_state;
pub mod swatch_grid;

pub use app::App;
