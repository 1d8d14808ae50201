use eframe::egui::Color32;
use log::debug;
use crate::types::*;

/// Valores de exibição derivados da cor atual. Recalculados só quando a cor muda.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedView {
    pub fill: Color32,
    pub css: String,
    pub label: String,
    pub tracks: [Track; 3],
}

#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub start: Color32,
    pub end: Color32,
}

impl DerivedView {
    pub fn new(color: Color) -> Self {
        let tracks = Channel::ALL.map(|channel| {
            let (start, end) = color.gradient(channel);
            Track {
                start: start.into(),
                end: end.into(),
            }
        });

        Self {
            fill: color.into(),
            css: color.css(),
            label: color.to_string(),
            tracks,
        }
    }

    pub fn track(&self, channel: Channel) -> &Track {
        &self.tracks[channel.index()]
    }
}

pub struct ColorState {
    color: Color,
    view: DerivedView,
}

impl Default for ColorState {
    fn default() -> Self {
        Self::new(Color::default())
    }
}

impl ColorState {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            view: DerivedView::new(color),
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn view(&self) -> &DerivedView {
        &self.view
    }

    // `value` é saturado em 0..=255
    pub fn set_channel(&mut self, channel: Channel, value: i64) {
        let next = self.color.with_channel(channel, clamp_channel(value));
        self.replace(next);
    }

    pub fn set_color(&mut self, color: Color) {
        self.replace(color);
    }

    fn replace(&mut self, color: Color) {
        if color == self.color {
            return;
        }
        debug!("color {} -> {}", self.color.css(), color.css());
        self.color = color;
        self.view = DerivedView::new(color);
    }
}
