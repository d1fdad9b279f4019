//! Draw primitives handed to the host renderer.

use kurbo::{Affine, Arc, BezPath, Line, Point};
use peniko::Color;

/// Stroke color and width for lines and arcs.
#[derive(Debug, Clone, Copy)]
pub struct LineStyle {
    pub color: Color,
    pub width: f64,
}

impl LineStyle {
    pub fn new(color: Color, width: f64) -> Self {
        Self { color, width }
    }
}

/// Color and size for label text.
#[derive(Debug, Clone, Copy)]
pub struct TextStyle {
    pub color: Color,
    pub size: f64,
}

/// A backend-independent drawing operation.
#[derive(Debug, Clone)]
pub enum Primitive {
    /// Straight stroked segment (square caps).
    Line { line: Line, style: LineStyle },
    /// Single-line text. `origin` is the left end of the baseline.
    Text {
        text: String,
        origin: Point,
        style: TextStyle,
    },
    /// Filled closed path (even-odd).
    FillPath { path: BezPath, color: Color },
    /// Stroked elliptical arc.
    StrokeArc { arc: Arc, style: LineStyle },
}

/// A primitive positioned in a local coordinate frame.
#[derive(Debug, Clone)]
pub struct DrawCommand {
    /// Local frame to widget coordinates.
    pub transform: Affine,
    pub primitive: Primitive,
}

impl DrawCommand {
    /// A command in the widget's own frame.
    pub fn new(primitive: Primitive) -> Self {
        Self {
            transform: Affine::IDENTITY,
            primitive,
        }
    }

    pub fn with_transform(mut self, transform: Affine) -> Self {
        self.transform = transform;
        self
    }

    /// Text content, if this is a text command.
    pub fn text(&self) -> Option<&str> {
        match &self.primitive {
            Primitive::Text { text, .. } => Some(text),
            _ => None,
        }
    }
}

/// Measures label widths so they can be centered on their tick.
pub trait TextMeasure {
    /// Advance width of `text` at font `size`, in pixels.
    fn text_width(&mut self, text: &str, size: f64) -> f64;
}

/// Estimates widths from a fixed per-character advance.
#[derive(Debug, Clone, Copy)]
pub struct MonospaceMeasure {
    /// Advance per character as a fraction of the font size.
    pub advance_ratio: f64,
}

impl Default for MonospaceMeasure {
    fn default() -> Self {
        Self { advance_ratio: 0.6 }
    }
}

impl TextMeasure for MonospaceMeasure {
    fn text_width(&mut self, text: &str, size: f64) -> f64 {
        text.chars().count() as f64 * size * self.advance_ratio
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monospace_measure() {
        let mut measure = MonospaceMeasure::default();
        assert!((measure.text_width("160", 10.0) - 18.0).abs() < 1e-9);
        assert!(measure.text_width("", 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_command_text() {
        let cmd = DrawCommand::new(Primitive::Text {
            text: "105".to_string(),
            origin: Point::ZERO,
            style: TextStyle {
                color: Color::BLACK,
                size: 14.0,
            },
        });
        assert_eq!(cmd.text(), Some("105"));
        assert_eq!(cmd.transform, Affine::IDENTITY);
    }
}
