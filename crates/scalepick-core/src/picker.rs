//! Common picker surface shared by the ruler and the dial.

use kurbo::{BezPath, Point, Size};
use peniko::Color;

use crate::drag::{DragInterpreter, DragOutcome};
use crate::gesture::GestureEvent;
use crate::measure::MeasureSpec;
use crate::notifier::ChangeNotifier;
use crate::primitives::{DrawCommand, Primitive, TextMeasure};
use crate::value::{ValueModel, ValueRange};

/// Depth of the indicator triangle, in raw pixels.
pub const INDICATOR_DEPTH: f64 = 20.0;

/// What host adapters need from a picker.
pub trait Picker {
    /// Current value.
    fn value(&self) -> i32;

    /// Selectable range.
    fn range(&self) -> ValueRange;

    /// Register the single change listener, replacing any previous one.
    fn set_on_value_changed(&mut self, listener: Box<dyn FnMut(i32)>);

    /// Feed one gesture event. `size` is the current widget size.
    fn handle_gesture(&mut self, event: GestureEvent, size: Size) -> DragOutcome;

    /// Draw commands for one frame, in order.
    fn draw(&self, size: Size, measure: &mut dyn TextMeasure) -> Vec<DrawCommand>;

    /// Height to report for the given width and height constraint.
    fn measure_height(&self, width: f64, height_spec: MeasureSpec) -> f64;
}

/// Value model, drag interpreter and listener bundled together.
#[derive(Debug)]
pub(crate) struct PickerState {
    pub(crate) model: ValueModel,
    pub(crate) drag: DragInterpreter,
    pub(crate) notifier: ChangeNotifier,
}

impl PickerState {
    pub(crate) fn new(model: ValueModel) -> Self {
        Self {
            model,
            drag: DragInterpreter::new(),
            notifier: ChangeNotifier::new(),
        }
    }

    /// Run the event through the interpreter and notify on commit.
    pub(crate) fn handle_gesture(&mut self, event: GestureEvent, px_per_unit: f64) -> DragOutcome {
        let outcome = self.drag.handle(event, &mut self.model, px_per_unit);
        if let Some(change) = outcome.changed {
            self.notifier.notify(change.value);
        }
        outcome
    }
}

/// Downward-pointing indicator triangle centered on `center_x`.
pub(crate) fn indicator_command(center_x: f64, half_width: f64, color: Color) -> DrawCommand {
    let mut path = BezPath::new();
    path.move_to(Point::new(center_x - half_width, 0.0));
    path.line_to(Point::new(center_x, INDICATOR_DEPTH));
    path.line_to(Point::new(center_x + half_width, 0.0));
    path.line_to(Point::new(center_x - half_width, 0.0));
    path.close_path();
    DrawCommand::new(Primitive::FillPath { path, color })
}

/// Integer horizontal center of a widget, as the host reports it.
pub(crate) fn pixel_center(width: f64) -> f64 {
    (width / 2.0).floor()
}
