//! Circular dial picker.
//!
//! Units are laid out `SPACING_DEGREES` apart around a circle whose center
//! sits below the widget. Only a 50-unit window around the current value is
//! drawn; the tick for the current value ends up at the top, under the
//! indicator.

use std::f64::consts::PI;

use kurbo::{Affine, Arc, Line, Point, Size, Vec2};

use crate::config::DialConfig;
use crate::drag::DragOutcome;
use crate::error::PickerResult;
use crate::gesture::GestureEvent;
use crate::measure::MeasureSpec;
use crate::picker::{Picker, PickerState, indicator_command, pixel_center};
use crate::primitives::{DrawCommand, LineStyle, Primitive, TextMeasure, TextStyle};
use crate::ruler::TickKind;
use crate::style::PickerStyle;
use crate::units::Density;
use crate::value::{ValueModel, ValueRange};

pub const DEFAULT_MIN: i32 = 10;
pub const DEFAULT_MAX: i32 = 120;
pub const DEFAULT_VALUE: i32 = 50;

/// Angle between neighbouring units, in degrees.
pub const SPACING_DEGREES: i32 = 2;
/// Width of the visible window, in units.
pub const VISIBLE_UNITS: i32 = 100 / SPACING_DEGREES;
/// Background arc start angle, in degrees.
pub const ARC_START_DEGREES: f64 = -40.0;
/// Background arc sweep, in degrees.
pub const ARC_SWEEP_DEGREES: f64 = -100.0;

/// Rotation that moves the first visible tick to the start of the arc.
const ALIGN_DEGREES: i32 = -50;
/// Labels closer than this to the window edge are skipped.
const LABEL_EDGE_MARGIN: i32 = 2;
const MAJOR_TICK_EVERY: i32 = 5;
/// Minor tick length relative to the band height.
const MINOR_TICK_RATIO: f64 = 0.6;
/// Label baseline offset below the band, in raw pixels.
const LABEL_BASELINE_OFFSET: f64 = 40.0;

/// Density-dependent sizes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DialMetrics {
    /// Height of the tick band; also how far the circle center drops below
    /// the widget's half width.
    pub band_height: f64,
    pub minor_width: f64,
    pub major_width: f64,
    pub text_size: f64,
    pub background_width: f64,
    pub indicator_half_width: f64,
}

impl DialMetrics {
    pub fn new(density: Density) -> Self {
        Self {
            band_height: density.px(50),
            minor_width: density.px(1),
            major_width: density.px(2),
            text_size: density.px(14),
            background_width: density.px(100),
            indicator_half_width: density.px(5),
        }
    }
}

/// Units eligible for drawing, `[min, max]` inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleWindow {
    pub min: i32,
    pub max: i32,
}

impl VisibleWindow {
    pub fn contains(&self, value: i32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Whether a label at `value` is far enough from the edges to draw.
    pub fn allows_label(&self, value: i32) -> bool {
        value >= self.min.saturating_add(LABEL_EDGE_MARGIN)
            && value <= self.max.saturating_sub(LABEL_EDGE_MARGIN)
    }
}

/// Unit the window is centered on when the value is at rest.
pub fn window_center(range: ValueRange) -> i32 {
    range.min().saturating_add(VISIBLE_UNITS / 2)
}

/// Visible window for `current`, and its shift in units from the rest
/// position.
pub fn visible_window(range: ValueRange, current: i32) -> (VisibleWindow, i32) {
    let shift = current.saturating_sub(window_center(range));
    let min = range.min().saturating_add(shift);
    let window = VisibleWindow {
        min,
        max: min.saturating_add(VISIBLE_UNITS),
    };
    (window, shift)
}

/// One drawn dial tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DialTick {
    pub value: i32,
    /// Clockwise rotation about the dial center, in degrees.
    pub angle_degrees: f64,
    pub kind: TickKind,
    /// Whether the label is drawn.
    pub labelled: bool,
}

/// Ticks that fall inside both the range and the visible window.
///
/// A negative shift pre-rotates the scale by `-shift * SPACING_DEGREES`,
/// then everything rotates by `ALIGN_DEGREES` and each drawn tick advances
/// by `SPACING_DEGREES`. Culled units do not advance the rotation.
pub fn compute_ticks(range: ValueRange, current: i32) -> Vec<DialTick> {
    let (window, shift) = visible_window(range, current);
    let pre_rotation = if shift < 0 {
        -i64::from(shift) * i64::from(SPACING_DEGREES)
    } else {
        0
    };
    let first = range.min().max(window.min);
    let last = range.max().min(window.max);

    (first..=last)
        .enumerate()
        .map(|(k, value)| {
            let angle = pre_rotation
                + i64::from(ALIGN_DEGREES)
                + k as i64 * i64::from(SPACING_DEGREES);
            let kind = if value % MAJOR_TICK_EVERY == 0 {
                TickKind::Major
            } else {
                TickKind::Minor
            };
            DialTick {
                value,
                angle_degrees: angle as f64,
                kind,
                labelled: kind == TickKind::Major && window.allows_label(value),
            }
        })
        .collect()
}

/// Drag pixels per unit for a dial of `width`: `2π·r / 180`, `r = width/2`.
pub fn px_per_unit(width: f64) -> f64 {
    let radius = pixel_center(width);
    2.0 * PI * radius / 180.0
}

/// The dial picker.
#[derive(Debug)]
pub struct DialPicker {
    state: PickerState,
    style: PickerStyle,
    metrics: DialMetrics,
}

impl Default for DialPicker {
    fn default() -> Self {
        let range = ValueRange::new_unchecked(DEFAULT_MIN, DEFAULT_MAX);
        Self::new(
            ValueModel::new_unchecked(range, DEFAULT_VALUE),
            PickerStyle::default(),
            Density::default(),
        )
    }
}

impl DialPicker {
    pub fn new(model: ValueModel, style: PickerStyle, density: Density) -> Self {
        Self {
            state: PickerState::new(model),
            style,
            metrics: DialMetrics::new(density),
        }
    }

    /// Build from configuration, validating range and colors.
    pub fn from_config(config: &DialConfig, density: Density) -> PickerResult<Self> {
        Ok(Self::new(config.model()?, config.style()?, density))
    }

    pub fn metrics(&self) -> &DialMetrics {
        &self.metrics
    }

    pub fn style(&self) -> &PickerStyle {
        &self.style
    }

    /// Current visible window.
    pub fn visible_window(&self) -> VisibleWindow {
        visible_window(self.range(), self.value()).0
    }

    /// Center the ticks rotate about.
    fn pivot(&self, width: f64) -> Point {
        Point::new(width / 2.0, width / 2.0 + self.metrics.band_height)
    }

    fn background_arc(&self, width: f64) -> Arc {
        let radius = width / 2.0;
        Arc {
            center: self.pivot(width),
            radii: Vec2::new(radius, radius),
            start_angle: ARC_START_DEGREES.to_radians(),
            sweep_angle: ARC_SWEEP_DEGREES.to_radians(),
            x_rotation: 0.0,
        }
    }
}

impl Picker for DialPicker {
    fn value(&self) -> i32 {
        self.state.model.value()
    }

    fn range(&self) -> ValueRange {
        self.state.model.range()
    }

    fn set_on_value_changed(&mut self, listener: Box<dyn FnMut(i32)>) {
        self.state.notifier.set_listener(listener);
    }

    fn handle_gesture(&mut self, event: GestureEvent, size: Size) -> DragOutcome {
        self.state.handle_gesture(event, px_per_unit(size.width))
    }

    fn draw(&self, size: Size, measure: &mut dyn TextMeasure) -> Vec<DrawCommand> {
        let band = self.metrics.band_height;
        let pivot = self.pivot(size.width);
        let center_x = pivot.x;

        let minor = LineStyle::new(self.style.color, self.metrics.minor_width);
        let major = LineStyle::new(self.style.color, self.metrics.major_width);
        let text_style = TextStyle {
            color: self.style.color,
            size: self.metrics.text_size,
        };

        let ticks = compute_ticks(self.range(), self.value());
        let mut commands = Vec::with_capacity(ticks.len() + ticks.len() / 5 + 2);

        commands.push(DrawCommand::new(Primitive::StrokeArc {
            arc: self.background_arc(size.width),
            style: LineStyle::new(self.style.background_color, self.metrics.background_width),
        }));

        for tick in &ticks {
            let frame = Affine::rotate_about(tick.angle_degrees.to_radians(), pivot);
            let (style, length) = match tick.kind {
                TickKind::Major => (major, band),
                TickKind::Minor => (minor, MINOR_TICK_RATIO * band),
            };
            let line = Line::new(Point::new(center_x, 0.0), Point::new(center_x, length));
            commands.push(DrawCommand::new(Primitive::Line { line, style }).with_transform(frame));

            if tick.labelled {
                let text = tick.value.to_string();
                let width = measure.text_width(&text, text_style.size);
                let origin = Point::new(center_x - width / 2.0, band + LABEL_BASELINE_OFFSET);
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

    fn measure_height(&self, width: f64, height_spec: MeasureSpec) -> f64 {
        let preferred = (pixel_center(width) - self.metrics.band_height).max(0.0);
        height_spec.resolve(preferred)
    }
}
