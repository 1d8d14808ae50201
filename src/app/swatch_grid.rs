use eframe::egui::{Grid, Id, Response, Sense, Stroke, Ui, Vec2, WidgetInfo, WidgetType};
use crate::constants::*;
use crate::swatches::*;
use crate::types::Color;

pub fn swatch_grid(ui: &mut Ui, current: Color, columns: usize) -> Option<Color> {
    let columns = columns.clamp(1, GUI_MAX_SWATCH_COLUMNS);
    let side = swatch_side(ui.available_width(), columns, GUI_SWATCH_SPACING);

    let mut picked = None;
    Grid::new("swatch_grid")
        .spacing(Vec2::splat(GUI_SWATCH_SPACING))
        .show(ui, |ui| {
            for (i, swatch) in SWATCHES.iter().enumerate() {
                if swatch_button(ui, i, swatch, side, swatch.color == current).clicked() {
                    picked = Some(swatch.color);
                }
                if (i + 1) % columns == 0 {
                    ui.end_row();
                }
            }
        });

    picked
}

pub fn swatch_id(index: usize) -> Id {
    Id::new(("swatch", index))
}

fn swatch_button(ui: &mut Ui, index: usize, swatch: &Swatch, side: f32, selected: bool) -> Response {
    let (_, rect) = ui.allocate_space(Vec2::splat(side));
    let response = ui.interact(rect, swatch_id(index), Sense::click());
    response.widget_info(|| WidgetInfo::labeled(WidgetType::Button, ui.is_enabled(), swatch.label()));

    if ui.is_rect_visible(rect) {
        let visuals = ui.visuals();
        let stroke = if selected {
            Stroke::new(3.0, visuals.selection.stroke.color)
        } else if response.hovered() {
            visuals.widgets.hovered.bg_stroke
        } else {
            visuals.widgets.noninteractive.bg_stroke
        };
        let painter = ui.painter();
        painter.rect_filled(rect, 6.0, swatch.color);
        painter.rect_stroke(rect, 6.0, stroke);
    }

    response.on_hover_text(format!("{} {}", swatch.name, swatch.color.css()))
}

// lado de cada quadrado para caber `columns` por linha
pub fn swatch_side(width: f32, columns: usize, spacing: f32) -> f32 {
    let columns = columns.max(1) as f32;
    ((width - spacing * (columns - 1.0)) / columns).max(8.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_fills_available_width() {
        // 8 * 60 + 7 * 12 = 564
        assert_eq!(swatch_side(564.0, 8, 12.0), 60.0);
        assert_eq!(swatch_side(100.0, 1, 12.0), 100.0);
    }

    #[test]
    fn side_has_a_floor() {
        assert_eq!(swatch_side(10.0, 16, 12.0), 8.0);
        assert_eq!(swatch_side(0.0, 0, 0.0), 8.0);
    }
}
