//! Renderer trait abstraction.

use kurbo::Size;
use peniko::Color;
use scalepick_core::primitives::DrawCommand;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Invalid viewport: {width}x{height}")]
    InvalidViewport { width: f64, height: f64 },
    #[error("Render failed: {0}")]
    RenderFailed(String),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Context for a single render frame.
pub struct RenderContext<'a> {
    /// Commands to draw, in order.
    pub commands: &'a [DrawCommand],
    /// Viewport size in physical pixels.
    pub viewport_size: Size,
    /// Background fill, if the renderer should clear first.
    pub background_color: Option<Color>,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context, rejecting empty or non-finite viewports.
    pub fn new(commands: &'a [DrawCommand], viewport_size: Size) -> RenderResult<Self> {
        let Size { width, height } = viewport_size;
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return Err(RendererError::InvalidViewport { width, height });
        }
        Ok(Self {
            commands,
            viewport_size,
            background_color: None,
        })
    }

    /// Set the background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }
}

/// Trait for rendering backends.
///
/// Implementations can use Vello, an immediate-mode painter, or simply
/// record what they are given.
pub trait Renderer {
    /// Build the scene/command buffer for a frame.
    ///
    /// Called once per frame; replaces whatever the previous frame built.
    fn build_scene(&mut self, ctx: &RenderContext);
}
