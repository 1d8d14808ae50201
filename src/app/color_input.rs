use eframe::egui::{EventFilter, Id, Key, Mesh, Rect, Response, Sense, Shape, Ui, Vec2, WidgetInfo};
use crate::app::color_state::*;
use crate::constants::*;
use crate::types::*;

pub fn color_input(ui: &mut Ui, state: &mut ColorState) {
    for (i, channel) in Channel::ALL.into_iter().enumerate() {
        if i > 0 {
            ui.add_space(GUI_SLIDER_SPACING);
        }
        let value = state.color().channel(channel);
        let track = state.view().track(channel).clone();
        ui.horizontal(|ui| {
            ui.monospace(format!("{}: {:>3}", channel.name(), value));
            if let Some(new_value) = channel_slider(ui, channel, value, &track) {
                state.set_channel(channel, new_value as i64);
            }
        });
    }
}

pub fn slider_id(channel: Channel) -> Id {
    Id::new(("channel_slider", channel))
}

// O valor acompanha o ponteiro durante o arraste inteiro, não só ao soltar.
pub fn channel_slider(ui: &mut Ui, channel: Channel, value: u8, track: &Track) -> Option<u8> {
    let size = Vec2::new(ui.available_width(), GUI_SLIDER_HEIGHT);
    let (_, rect) = ui.allocate_space(size);
    let mut response = ui.interact(rect, slider_id(channel), Sense::click_and_drag());
    let track_rect = rect.shrink2(Vec2::new(GUI_SLIDER_THUMB_RADIUS, 0.0));

    if response.clicked() || response.drag_started() {
        response.request_focus();
    }

    let mut new_value = None;
    if let Some(pos) = response.interact_pointer_pos() {
        new_value = Some(value_from_x(track_rect.left(), track_rect.right(), pos.x));
    }
    if response.has_focus() {
        ui.memory_mut(|mem| {
            mem.set_focus_lock_filter(
                response.id,
                EventFilter {
                    horizontal_arrows: true,
                    vertical_arrows: true,
                    ..Default::default()
                },
            )
        });
        new_value = keyboard_step(ui, value).or(new_value);
    }
    let new_value = new_value.filter(|v| *v != value);
    if new_value.is_some() {
        response.mark_changed();
    }

    let shown = new_value.unwrap_or(value);
    response.widget_info(|| WidgetInfo::slider(ui.is_enabled(), shown as f64, channel.name()));

    if ui.is_rect_visible(rect) {
        paint_slider(ui, &response, track_rect, track, shown);
    }

    new_value
}

fn keyboard_step(ui: &Ui, value: u8) -> Option<u8> {
    ui.input(|i| {
        if i.key_pressed(Key::Home) {
            Some(0)
        } else if i.key_pressed(Key::End) {
            Some(u8::MAX)
        } else if i.key_pressed(Key::ArrowLeft) || i.key_pressed(Key::ArrowDown) {
            Some(value.saturating_sub(1))
        } else if i.key_pressed(Key::ArrowRight) || i.key_pressed(Key::ArrowUp) {
            Some(value.saturating_add(1))
        } else {
            None
        }
    })
}

fn paint_slider(ui: &Ui, response: &Response, track_rect: Rect, track: &Track, value: u8) {
    let painter = ui.painter();

    // degradê da esquerda (canal em 0) para a direita (canal em 255)
    let mut mesh = Mesh::default();
    mesh.colored_vertex(track_rect.left_top(), track.start);
    mesh.colored_vertex(track_rect.right_top(), track.end);
    mesh.colored_vertex(track_rect.left_bottom(), track.start);
    mesh.colored_vertex(track_rect.right_bottom(), track.end);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(1, 2, 3);
    painter.add(Shape::mesh(mesh));
    painter.rect_stroke(track_rect, 2.0, ui.visuals().widgets.noninteractive.bg_stroke);

    let x = x_from_value(track_rect.left(), track_rect.right(), value);
    let center = track_rect.center();
    let thumb = eframe::egui::pos2(x, center.y);
    let visuals = ui.style().interact(response);
    painter.circle(thumb, GUI_SLIDER_THUMB_RADIUS, visuals.bg_fill, visuals.fg_stroke);
}

pub fn value_from_x(left: f32, right: f32, x: f32) -> u8 {
    let width = right - left;
    if width <= 0.0 {
        return 0;
    }
    let t = ((x - left) / width).clamp(0.0, 1.0);
    clamp_channel((t * u8::MAX as f32).round() as i64)
}

pub fn x_from_value(left: f32, right: f32, value: u8) -> f32 {
    left + (right - left) * (value as f32 / u8::MAX as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_edges_map_to_range_ends() {
        assert_eq!(value_from_x(10.0, 265.0, 10.0), 0);
        assert_eq!(value_from_x(10.0, 265.0, 265.0), 255);
        assert_eq!(value_from_x(10.0, 265.0, 138.0), 128);
    }

    #[test]
    fn positions_outside_track_clamp() {
        assert_eq!(value_from_x(10.0, 265.0, -400.0), 0);
        assert_eq!(value_from_x(10.0, 265.0, 9999.0), 255);
    }

    #[test]
    fn degenerate_track_maps_to_zero() {
        assert_eq!(value_from_x(50.0, 50.0, 60.0), 0);
    }

    #[test]
    fn value_position_inverts() {
        for value in [0u8, 1, 64, 128, 200, 254, 255] {
            let x = x_from_value(0.0, 510.0, value);
            assert_eq!(value_from_x(0.0, 510.0, x), value);
        }
    }
}
