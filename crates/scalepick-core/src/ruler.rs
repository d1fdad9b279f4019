//! Horizontal ruler picker.
//!
//! Ticks sit at `spacing * i` for each unit `i` of the range. The whole
//! scale is translated so the tick for the current value lands under the
//! fixed indicator at the horizontal center.

use kurbo::{Affine, Line, Point, Size};

use crate::config::RulerConfig;
use crate::drag::DragOutcome;
use crate::error::PickerResult;
use crate::gesture::GestureEvent;
use crate::measure::MeasureSpec;
use crate::picker::{Picker, PickerState, indicator_command, pixel_center};
use crate::primitives::{DrawCommand, LineStyle, Primitive, TextMeasure, TextStyle};
use crate::style::PickerStyle;
use crate::units::Density;
use crate::value::{ValueModel, ValueRange};

pub const DEFAULT_MIN: i32 = 100;
pub const DEFAULT_MAX: i32 = 190;
pub const DEFAULT_VALUE: i32 = 160;

/// Every n-th tick is a major tick with a label.
pub const MAJOR_TICK_EVERY: u32 = 5;

/// Label baseline offset below the vertical middle, in raw pixels.
const LABEL_BASELINE_OFFSET: f64 = 40.0;

/// Density-dependent sizes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RulerMetrics {
    /// Pixels per unit of range.
    pub spacing: f64,
    pub minor_width: f64,
    pub major_width: f64,
    pub text_size: f64,
    pub indicator_half_width: f64,
    /// Height reported when the host leaves height open.
    pub preferred_height: f64,
}

impl RulerMetrics {
    pub fn new(density: Density) -> Self {
        Self {
            spacing: density.px(10),
            minor_width: density.px(1),
            major_width: density.px(2),
            text_size: density.px(14),
            indicator_half_width: density.px(5),
            preferred_height: density.px(100),
        }
    }
}

/// Tick class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickKind {
    Major,
    Minor,
}

/// One ruler tick in the untranslated frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    /// Value the tick represents.
    pub value: i32,
    /// Horizontal position.
    pub x: f64,
    /// Length from the top edge.
    pub length: f64,
    pub kind: TickKind,
}

impl Tick {
    /// Label text for major ticks.
    pub fn label(&self) -> Option<String> {
        (self.kind == TickKind::Major).then(|| self.value.to_string())
    }
}

/// Horizontal translation that centers `current` under `center_x`.
///
/// `center_x - spacing * (current - min)`.
pub fn translate_delta(center_x: f64, spacing: f64, range: ValueRange, current: i32) -> f64 {
    center_x - spacing * range.offset_of(current) as f64
}

/// Ticks for every unit of `range`. Major ticks (every fifth unit counted
/// from `min`) are `height/2` long, minor ticks `height/3`.
pub fn compute_ticks(range: ValueRange, spacing: f64, height: f64) -> Vec<Tick> {
    let major_length = (height / 2.0).floor();
    let minor_length = (height / 3.0).floor();
    (0..=range.span())
        .map(|i| {
            let kind = if i % MAJOR_TICK_EVERY == 0 {
                TickKind::Major
            } else {
                TickKind::Minor
            };
            Tick {
                value: (i64::from(range.min()) + i64::from(i)) as i32,
                x: spacing * f64::from(i),
                length: match kind {
                    TickKind::Major => major_length,
                    TickKind::Minor => minor_length,
                },
                kind,
            }
        })
        .collect()
}

/// The ruler picker.
#[derive(Debug)]
pub struct RulerPicker {
    state: PickerState,
    style: PickerStyle,
    metrics: RulerMetrics,
}

impl Default for RulerPicker {
    fn default() -> Self {
        let range = ValueRange::new_unchecked(DEFAULT_MIN, DEFAULT_MAX);
        Self::new(
            ValueModel::new_unchecked(range, DEFAULT_VALUE),
            PickerStyle::default(),
            Density::default(),
        )
    }
}

impl RulerPicker {
    pub fn new(model: ValueModel, style: PickerStyle, density: Density) -> Self {
        Self {
            state: PickerState::new(model),
            style,
            metrics: RulerMetrics::new(density),
        }
    }

    /// Build from configuration, validating range and colors.
    pub fn from_config(config: &RulerConfig, density: Density) -> PickerResult<Self> {
        Ok(Self::new(config.model()?, config.style()?, density))
    }

    pub fn metrics(&self) -> &RulerMetrics {
        &self.metrics
    }

    pub fn style(&self) -> &PickerStyle {
        &self.style
    }

    /// Translation applied to the tick frame for a widget of `width`.
    pub fn translate_delta(&self, width: f64) -> f64 {
        translate_delta(
            pixel_center(width),
            self.metrics.spacing,
            self.state.model.range(),
            self.state.model.value(),
        )
    }
}

impl Picker for RulerPicker {
    fn value(&self) -> i32 {
        self.state.model.value()
    }

    fn range(&self) -> ValueRange {
        self.state.model.range()
    }

    fn set_on_value_changed(&mut self, listener: Box<dyn FnMut(i32)>) {
        self.state.notifier.set_listener(listener);
    }

    fn handle_gesture(&mut self, event: GestureEvent, _size: Size) -> DragOutcome {
        self.state.handle_gesture(event, self.metrics.spacing)
    }

    fn draw(&self, size: Size, measure: &mut dyn TextMeasure) -> Vec<DrawCommand> {
        let frame = Affine::translate((self.translate_delta(size.width), 0.0));
        let minor = LineStyle::new(self.style.color, self.metrics.minor_width);
        let major = LineStyle::new(self.style.color, self.metrics.major_width);
        let text_style = TextStyle {
            color: self.style.color,
            size: self.metrics.text_size,
        };
        let baseline = size.height / 2.0 + LABEL_BASELINE_OFFSET;

        let ticks = compute_ticks(self.range(), self.metrics.spacing, size.height);
        let mut commands = Vec::with_capacity(ticks.len() + ticks.len() / 5 + 2);
        for tick in &ticks {
            let style = match tick.kind {
                TickKind::Major => major,
                TickKind::Minor => minor,
            };
            let line = Line::new(Point::new(tick.x, 0.0), Point::new(tick.x, tick.length));
            commands.push(DrawCommand::new(Primitive::Line { line, style }).with_transform(frame));

            // Labels are not kept inside the widget near min/max.
            if let Some(text) = tick.label() {
                let width = measure.text_width(&text, text_style.size);
                let origin = Point::new(tick.x - width / 2.0, baseline);
                commands.push(
                    DrawCommand::new(Primitive::Text {
                        text,
                        origin,
                        style: text_style,
                    })
                    .with_transform(frame),
                );
            }
        }

        commands.push(indicator_command(
            pixel_center(size.width),
            self.metrics.indicator_half_width,
            self.style.indicator_color,
        ));
        commands
    }

    fn measure_height(&self, _width: f64, height_spec: MeasureSpec) -> f64 {
        height_spec.resolve(self.metrics.preferred_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::MonospaceMeasure;
    use kurbo::Vec2;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn range() -> ValueRange {
        ValueRange::new(DEFAULT_MIN, DEFAULT_MAX).unwrap()
    }

    fn picker_at(value: i32) -> RulerPicker {
        let model = ValueModel::new(range(), value).unwrap();
        RulerPicker::new(model, PickerStyle::default(), Density::default())
    }

    fn scroll(distance_x: f64) -> GestureEvent {
        GestureEvent::Scroll {
            distance: Vec2::new(distance_x, 0.0),
        }
    }

    fn record(picker: &mut RulerPicker) -> Rc<RefCell<Vec<i32>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        picker.set_on_value_changed(Box::new(move |v| sink.borrow_mut().push(v)));
        seen
    }

    const SIZE: Size = Size::new(360.0, 100.0);

    #[test]
    fn test_metrics_scale_with_density() {
        let metrics = RulerMetrics::new(Density::new(320));
        assert!((metrics.spacing - 20.0).abs() < f64::EPSILON);
        assert!((metrics.major_width - 4.0).abs() < f64::EPSILON);
        assert!((metrics.preferred_height - 200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_translate_delta_centers_current_value() {
        let range = range();
        // At min the first tick sits on the center.
        assert!((translate_delta(180.0, 10.0, range, 100) - 180.0).abs() < f64::EPSILON);
        // Midpoint.
        assert!((translate_delta(180.0, 10.0, range, 145) - -270.0).abs() < f64::EPSILON);
        // At max the last tick sits on the center.
        let delta = translate_delta(180.0, 10.0, range, 190);
        assert!((delta + 10.0 * 90.0 - 180.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_compute_ticks() {
        let ticks = compute_ticks(range(), 10.0, 100.0);
        assert_eq!(ticks.len(), 91);
        assert_eq!(ticks[0].value, 100);
        assert_eq!(ticks[0].kind, TickKind::Major);
        assert!((ticks[0].length - 50.0).abs() < f64::EPSILON);
        assert_eq!(ticks[1].kind, TickKind::Minor);
        assert!((ticks[1].length - 33.0).abs() < f64::EPSILON);
        assert!((ticks[7].x - 70.0).abs() < f64::EPSILON);
        assert_eq!(ticks[90].value, 190);
        assert_eq!(ticks[90].label().as_deref(), Some("190"));
        assert_eq!(ticks.iter().filter(|t| t.kind == TickKind::Major).count(), 19);
    }

    #[test]
    fn test_major_ticks_counted_from_min() {
        let range = ValueRange::new(3, 13).unwrap();
        let labels: Vec<_> = compute_ticks(range, 10.0, 90.0)
            .iter()
            .filter_map(Tick::label)
            .collect();
        assert_eq!(labels, vec!["3", "8", "13"]);
    }

    #[test]
    fn test_drag_commits_and_notifies() {
        let mut picker = picker_at(160);
        let seen = record(&mut picker);

        picker.handle_gesture(GestureEvent::Down { position: Point::ZERO }, SIZE);
        let outcome = picker.handle_gesture(scroll(-50.0), SIZE);

        assert_eq!(outcome.changed.map(|c| c.value), Some(155));
        assert_eq!(picker.value(), 155);
        assert_eq!(*seen.borrow(), vec![155]);
    }

    #[test]
    fn test_out_of_range_drag_is_rejected() {
        let mut picker = picker_at(160);
        let seen = record(&mut picker);

        picker.handle_gesture(GestureEvent::Down { position: Point::ZERO }, SIZE);
        let outcome = picker.handle_gesture(scroll(500.0), SIZE);

        assert!(outcome.redraw);
        assert!(outcome.changed.is_none());
        assert_eq!(picker.value(), 160);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_zero_distance_never_notifies() {
        let mut picker = picker_at(160);
        let seen = record(&mut picker);

        picker.handle_gesture(GestureEvent::Down { position: Point::ZERO }, SIZE);
        for _ in 0..3 {
            picker.handle_gesture(scroll(0.0), SIZE);
        }
        assert_eq!(picker.value(), 160);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_listener_fires_once_per_commit() {
        let mut picker = picker_at(160);
        let seen = record(&mut picker);

        picker.handle_gesture(GestureEvent::Down { position: Point::ZERO }, SIZE);
        for distance in [12.0, 5.0, -31.0, 400.0, -3.0] {
            picker.handle_gesture(scroll(distance), SIZE);
        }
        picker.handle_gesture(GestureEvent::Up, SIZE);
        // 160 +2 = 162, +1 = 163, -4 = 159, rejected, -1 = 158
        assert_eq!(*seen.borrow(), vec![162, 163, 159, 158]);
    }

    #[test]
    fn test_draw_order_and_frames() {
        let picker = picker_at(160);
        let commands = picker.draw(SIZE, &mut MonospaceMeasure::default());

        // 91 ticks, 19 labels, 1 indicator.
        assert_eq!(commands.len(), 91 + 19 + 1);

        let delta = picker.translate_delta(SIZE.width);
        assert!((delta - (180.0 - 600.0)).abs() < f64::EPSILON);
        for cmd in &commands[..commands.len() - 1] {
            assert_eq!(cmd.transform, Affine::translate((delta, 0.0)));
        }

        let indicator = commands.last().unwrap();
        assert_eq!(indicator.transform, Affine::IDENTITY);
        assert!(matches!(indicator.primitive, Primitive::FillPath { .. }));
    }

    #[test]
    fn test_current_tick_is_under_indicator() {
        for value in [100, 145, 190] {
            let picker = picker_at(value);
            let commands = picker.draw(SIZE, &mut MonospaceMeasure::default());
            let on_center = commands.iter().any(|cmd| match &cmd.primitive {
                Primitive::Line { line, .. } => {
                    ((cmd.transform * line.p0).x - 180.0).abs() < f64::EPSILON
                }
                _ => false,
            });
            assert!(on_center, "tick for {value} not centered");
        }
    }

    #[test]
    fn test_labels_centered_on_tick() {
        let picker = picker_at(100);
        let mut measure = MonospaceMeasure::default();
        let commands = picker.draw(SIZE, &mut measure);

        let Some(Primitive::Text { text, origin, style }) = commands
            .iter()
            .map(|cmd| &cmd.primitive)
            .find(|p| matches!(p, Primitive::Text { .. }))
        else {
            panic!("no label drawn");
        };
        assert_eq!(text, "100");
        let width = measure.text_width("100", style.size);
        assert!((origin.x + width / 2.0).abs() < 1e-9);
        assert!((origin.y - 90.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_measure_height() {
        let picker = RulerPicker::new(
            ValueModel::new(range(), 160).unwrap(),
            PickerStyle::default(),
            Density::new(240),
        );
        assert!((picker.measure_height(400.0, MeasureSpec::Unspecified) - 150.0).abs() < f64::EPSILON);
        assert!((picker.measure_height(400.0, MeasureSpec::AtMost(20.0)) - 150.0).abs() < f64::EPSILON);
        assert!((picker.measure_height(400.0, MeasureSpec::Exactly(80.0)) - 80.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_default_picker() {
        let picker = RulerPicker::default();
        assert_eq!(picker.value(), DEFAULT_VALUE);
        assert_eq!(picker.range(), range());
    }
}
