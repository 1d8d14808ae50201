use eframe::{App as EguiApp, Frame as EguiFrame};
use eframe::egui::{CentralPanel, Context, Frame, Margin, RichText, ScrollArea, Sense, Ui, Vec2};
use log::info;
use crate::app::color_input::*;
use crate::app::color_state::*;
use crate::app::swatch_grid::*;
use crate::config::Config;
use crate::constants::*;

pub struct App {
    state: ColorState,
    config: Config,
}

impl Default for App {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl EguiApp for App {
    fn update(&mut self, ctx: &Context, _frame: &mut EguiFrame) {
        ctx.set_visuals(self.config.theme.visuals());

        CentralPanel::default()
            .show(ctx, |ui| {
                ScrollArea::vertical().show(ui, |ui| {
                    self.ui(ui);
                });
            });
    }
}

impl App {
    pub fn new(config: Config) -> Self {
        let state = ColorState::default();
        info!("Starting with {} ({:?} theme)", state.color().css(), config.theme);
        Self { state, config }
    }

    pub fn ui(&mut self, ui: &mut Ui) {
        self.display_content(ui);

        ui.add_space(GUI_PANEL_PADDING);

        // Sliders
        card(ui, |ui| {
            color_input(ui, &mut self.state);
        });

        ui.add_space(GUI_PANEL_PADDING);

        // Grade de cores prontas
        let current = self.state.color();
        let columns = self.config.swatch_columns;
        let mut picked = None;
        card(ui, |ui| {
            picked = swatch_grid(ui, current, columns);
        });
        if let Some(color) = picked {
            self.state.set_color(color);
        }
    }

    fn display_content(&self, ui: &mut Ui) {
        let view = self.state.view();

        let size = Vec2::new(ui.available_width(), GUI_DISPLAY_HEIGHT);
        let (rect, response) = ui.allocate_exact_size(size, Sense::hover());
        ui.painter().rect_filled(rect, 8.0, view.fill);
        response.on_hover_text(view.css.as_str());

        ui.add_space(GUI_PANEL_PADDING / 2.0);

        ui.vertical_centered(|ui| {
            Frame::group(ui.style())
                .inner_margin(Margin::symmetric(GUI_PANEL_PADDING, GUI_PANEL_PADDING / 2.0))
                .show(ui, |ui| {
                    ui.label(RichText::new(view.label.as_str()).monospace().size(18.0));
                });
        });
    }
}

fn card(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui)) {
    Frame::group(ui.style())
        .inner_margin(Margin::same(GUI_PANEL_PADDING))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui);
        });
}
