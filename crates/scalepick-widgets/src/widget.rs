//! egui widget wrapping a [`Picker`].

use egui::{Pos2, Response, Sense, Ui, Widget, vec2};
use kurbo::{Point, Size};
use scalepick_core::{GestureEvent, GestureTracker, MeasureSpec, Picker};

use crate::painter::{EguiMeasure, paint_commands};

/// Shows a ruler or dial picker and feeds it horizontal drags.
///
/// ```ignore
/// ui.add(PickerWidget::new(&mut self.ruler));
/// ```
pub struct PickerWidget<'a, P: Picker> {
    picker: &'a mut P,
    width: Option<f32>,
    height: MeasureSpec,
}

impl<'a, P: Picker> PickerWidget<'a, P> {
    /// Create a widget that fills the available width.
    pub fn new(picker: &'a mut P) -> Self {
        Self {
            picker,
            width: None,
            height: MeasureSpec::Unspecified,
        }
    }

    /// Use a fixed width instead of the available width.
    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    /// Height constraint; by default the picker's preferred height.
    pub fn height(mut self, height: MeasureSpec) -> Self {
        self.height = height;
        self
    }
}

fn local_point(pos: Pos2, origin: Pos2) -> Point {
    let local = pos - origin;
    Point::new(f64::from(local.x), f64::from(local.y))
}

impl<P: Picker> Widget for PickerWidget<'_, P> {
    fn ui(self, ui: &mut Ui) -> Response {
        let width = self.width.unwrap_or_else(|| ui.available_width());
        let height = self.picker.measure_height(f64::from(width), self.height) as f32;
        let (rect, mut response) = ui.allocate_exact_size(vec2(width, height), Sense::drag());
        let size = Size::new(f64::from(rect.width()), f64::from(rect.height()));

        // Gesture tracking lives in egui memory so the widget itself stays stateless.
        let id = response.id;
        let mut tracker: GestureTracker = ui.data(|d| d.get_temp(id)).unwrap_or_default();
        let mut events: Vec<GestureEvent> = Vec::new();
        let pointer = response.interact_pointer_pos();

        if response.drag_started() {
            if let Some(pos) = pointer {
                events.push(tracker.pointer_down(local_point(pos, rect.min)));
            }
        } else if response.dragged() {
            if let Some(event) = pointer.and_then(|pos| tracker.pointer_move(local_point(pos, rect.min))) {
                events.push(event);
            }
        }
        if response.drag_stopped() {
            events.extend(tracker.pointer_up());
        }
        ui.data_mut(|d| d.insert_temp(id, tracker));

        let mut changed = false;
        for event in events {
            let outcome = self.picker.handle_gesture(event, size);
            changed |= outcome.changed.is_some();
            if outcome.redraw {
                ui.ctx().request_repaint();
            }
        }
        if changed {
            log::debug!("Picker widget value is now {}", self.picker.value());
            response.mark_changed();
        }

        if ui.is_rect_visible(rect) {
            let painter = ui.painter_at(rect);
            let commands = self.picker.draw(size, &mut EguiMeasure::new(&painter));
            paint_commands(&painter, rect.min, &commands);
        }

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scalepick_core::{DialPicker, RulerPicker};

    #[test]
    fn test_local_point() {
        let point = local_point(Pos2::new(110.0, 45.0), Pos2::new(10.0, 5.0));
        assert_eq!(point, Point::new(100.0, 40.0));
    }

    #[test]
    fn test_widgets_render_headless_without_changing_value() {
        let ctx = egui::Context::default();
        let mut ruler = RulerPicker::default();
        let mut dial = DialPicker::default();

        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.add(PickerWidget::new(&mut ruler).width(360.0));
                ui.add(PickerWidget::new(&mut dial).width(360.0));
            });
        });

        assert_eq!(ruler.value(), 160);
        assert_eq!(dial.value(), 50);
    }
}
