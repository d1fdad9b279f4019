//! Renderer that records draw commands instead of rasterizing them.

use kurbo::Size;
use scalepick_core::primitives::{DrawCommand, Primitive};

use crate::renderer::{RenderContext, Renderer};

/// Keeps the commands of the most recent frame.
#[derive(Debug, Clone, Default)]
pub struct CommandRecorder {
    commands: Vec<DrawCommand>,
    viewport_size: Size,
    frames: usize,
}

impl CommandRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands of the last frame.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Viewport of the last frame.
    pub fn viewport_size(&self) -> Size {
        self.viewport_size
    }

    /// Number of frames built so far.
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Label texts of the last frame, in draw order.
    pub fn labels(&self) -> Vec<&str> {
        self.commands.iter().filter_map(DrawCommand::text).collect()
    }

    /// Number of line commands in the last frame.
    pub fn line_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|cmd| matches!(cmd.primitive, Primitive::Line { .. }))
            .count()
    }
}

impl Renderer for CommandRecorder {
    fn build_scene(&mut self, ctx: &RenderContext) {
        self.commands.clear();
        self.commands.extend_from_slice(ctx.commands);
        self.viewport_size = ctx.viewport_size;
        self.frames += 1;
        log::trace!("Recorded frame {} with {} commands", self.frames, self.commands.len());
    }
}
