//! Vello-based renderer implementation.

use crate::renderer::{RenderContext, Renderer};
use kurbo::{Affine, Cap, Rect, Stroke};
use parley::layout::PositionedLayoutItem;
use parley::{FontContext, FontStack, LayoutContext, StyleProperty};
use peniko::{Brush, Color, Fill};
use scalepick_core::primitives::{DrawCommand, LineStyle, Primitive, TextMeasure, TextStyle};
use vello::Scene;

/// Font stack used for tick labels.
const LABEL_FONT: &str = "sans-serif";

/// Vello-based renderer for picker draw commands.
pub struct VelloRenderer {
    /// The Vello scene being built.
    scene: Scene,
    /// Font context for text rendering (cached across frames).
    font_cx: FontContext,
    /// Layout context for text rendering.
    layout_cx: LayoutContext<Brush>,
}

impl Default for VelloRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl VelloRenderer {
    /// Create a new Vello renderer using the system font collection.
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            font_cx: FontContext::new(),
            layout_cx: LayoutContext::new(),
        }
    }

    /// Get the built scene for rendering.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Take ownership of the scene (resets internal scene).
    pub fn take_scene(&mut self) -> Scene {
        std::mem::take(&mut self.scene)
    }

    fn layout(&mut self, text: &str, size: f64, brush: Brush) -> parley::Layout<Brush> {
        let mut builder = self.layout_cx.ranged_builder(&mut self.font_cx, text, 1.0, false);
        builder.push_default(StyleProperty::FontSize(size as f32));
        builder.push_default(StyleProperty::Brush(brush));
        builder.push_default(StyleProperty::FontStack(FontStack::Source(LABEL_FONT.into())));
        let mut layout = builder.build(text);
        layout.break_all_lines(None);
        layout.align(None, parley::Alignment::Start, parley::AlignmentOptions::default());
        layout
    }

    fn render_line(&mut self, line: &kurbo::Line, style: &LineStyle, transform: Affine) {
        let stroke = Stroke::new(style.width).with_caps(Cap::Square);
        self.scene.stroke(&stroke, transform, style.color, None, line);
    }

    /// Render single-line text with its baseline starting at `origin`.
    fn render_text(&mut self, text: &str, origin: kurbo::Point, style: &TextStyle, transform: Affine) {
        let brush = Brush::Solid(style.color);
        let layout = self.layout(text, style.size, brush.clone());
        let text_transform = transform * Affine::translate(origin.to_vec2());

        // One draw_glyphs call per glyph run.
        for line in layout.lines() {
            for item in line.items() {
                let PositionedLayoutItem::GlyphRun(glyph_run) = item else {
                    continue;
                };
                let mut x = glyph_run.offset();
                let run = glyph_run.run();
                let font = run.font();
                let font_size = run.font_size();
                let synthesis = run.synthesis();
                let glyph_xform = synthesis
                    .skew()
                    .map(|angle| Affine::skew(angle.to_radians().tan() as f64, 0.0));

                // Labels are a single line, so the run baseline is the origin.
                let glyphs: Vec<vello::Glyph> = glyph_run
                    .glyphs()
                    .map(|glyph| {
                        let gx = x + glyph.x;
                        x += glyph.advance;
                        vello::Glyph {
                            id: glyph.id.into(),
                            x: gx,
                            y: -glyph.y,
                        }
                    })
                    .collect();

                if !glyphs.is_empty() {
                    self.scene
                        .draw_glyphs(font)
                        .brush(&brush)
                        .hint(true)
                        .transform(text_transform)
                        .glyph_transform(glyph_xform)
                        .font_size(font_size)
                        .normalized_coords(run.normalized_coords())
                        .draw(Fill::NonZero, glyphs.into_iter());
                }
            }
        }
    }

    fn render_command(&mut self, command: &DrawCommand) {
        let transform = command.transform;
        match &command.primitive {
            Primitive::Line { line, style } => self.render_line(line, style, transform),
            Primitive::Text {
                text,
                origin,
                style,
            } => self.render_text(text, *origin, style, transform),
            Primitive::FillPath { path, color } => {
                self.scene.fill(Fill::EvenOdd, transform, *color, None, path);
            }
            Primitive::StrokeArc { arc, style } => {
                let stroke = Stroke::new(style.width);
                self.scene.stroke(&stroke, transform, style.color, None, arc);
            }
        }
    }

    fn render_background(&mut self, color: Color, viewport: Rect) {
        self.scene.fill(Fill::NonZero, Affine::IDENTITY, color, None, &viewport);
    }
}

impl Renderer for VelloRenderer {
    fn build_scene(&mut self, ctx: &RenderContext) {
        // Clear the scene
        self.scene.reset();

        if let Some(color) = ctx.background_color {
            self.render_background(color, ctx.viewport_size.to_rect());
        }

        for command in ctx.commands {
            self.render_command(command);
        }
    }
}

impl TextMeasure for VelloRenderer {
    fn text_width(&mut self, text: &str, size: f64) -> f64 {
        if text.is_empty() {
            return 0.0;
        }
        let layout = self.layout(text, size, Brush::default());
        layout.width() as f64
    }
}
