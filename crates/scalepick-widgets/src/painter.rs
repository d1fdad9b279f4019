//! Draw picker commands with an egui painter.

use egui::epaint::TextShape;
use egui::{Color32, FontId, Painter, Pos2, Shape, Stroke};
use kurbo::{Affine, PathEl, Point, Shape as KurboShape};
use peniko::Color;
use scalepick_core::primitives::{DrawCommand, Primitive, TextMeasure};

/// Flattening tolerance for arcs and paths, in points.
const TOLERANCE: f64 = 0.25;

/// Share of the galley height above the baseline.
const ASCENT_RATIO: f64 = 0.8;

/// Measures label widths with egui's font system.
pub struct EguiMeasure<'a> {
    painter: &'a Painter,
}

impl<'a> EguiMeasure<'a> {
    pub fn new(painter: &'a Painter) -> Self {
        Self { painter }
    }
}

impl TextMeasure for EguiMeasure<'_> {
    fn text_width(&mut self, text: &str, size: f64) -> f64 {
        let galley = self.painter.layout_no_wrap(
            text.to_string(),
            FontId::proportional(size as f32),
            Color32::PLACEHOLDER, // Color doesn't matter for sizing
        );
        f64::from(galley.size().x)
    }
}

/// Convert a peniko color to an egui color.
pub fn to_color32(color: Color) -> Color32 {
    let rgba = color.to_rgba8();
    Color32::from_rgba_unmultiplied(rgba.r, rgba.g, rgba.b, rgba.a)
}

/// Rotation of an affine transform, in radians.
pub(crate) fn rotation_of(transform: Affine) -> f64 {
    let [a, b, ..] = transform.as_coeffs();
    b.atan2(a)
}

fn to_pos2(point: Point) -> Pos2 {
    Pos2::new(point.x as f32, point.y as f32)
}

/// Flatten path elements into screen points.
pub(crate) fn flatten_points(
    elements: impl IntoIterator<Item = PathEl>,
    transform: Affine,
) -> Vec<Pos2> {
    let mut points = Vec::new();
    kurbo::flatten(elements, TOLERANCE, |el| match el {
        PathEl::MoveTo(p) | PathEl::LineTo(p) => points.push(to_pos2(transform * p)),
        _ => {}
    });
    points
}

/// Paint commands whose coordinates are relative to `origin`.
pub fn paint_commands(painter: &Painter, origin: Pos2, commands: &[DrawCommand]) {
    let base = Affine::translate((f64::from(origin.x), f64::from(origin.y)));
    for command in commands {
        let transform = base * command.transform;
        match &command.primitive {
            Primitive::Line { line, style } => {
                painter.line_segment(
                    [to_pos2(transform * line.p0), to_pos2(transform * line.p1)],
                    Stroke::new(style.width as f32, to_color32(style.color)),
                );
            }
            Primitive::Text {
                text,
                origin,
                style,
            } => {
                let color = to_color32(style.color);
                let galley = painter.layout_no_wrap(
                    text.clone(),
                    FontId::proportional(style.size as f32),
                    color,
                );
                // egui anchors text at the top-left corner of the galley.
                let ascent = f64::from(galley.size().y) * ASCENT_RATIO;
                let top_left = transform * Point::new(origin.x, origin.y - ascent);
                let shape = TextShape::new(to_pos2(top_left), galley, color)
                    .with_angle(rotation_of(transform) as f32);
                painter.add(Shape::Text(shape));
            }
            Primitive::FillPath { path, color } => {
                let points = flatten_points(path.elements().iter().copied(), transform);
                painter.add(Shape::convex_polygon(points, to_color32(*color), Stroke::NONE));
            }
            Primitive::StrokeArc { arc, style } => {
                let points = flatten_points(arc.path_elements(TOLERANCE), transform);
                painter.add(Shape::line(
                    points,
                    Stroke::new(style.width as f32, to_color32(style.color)),
                ));
            }
        }
    }
}
