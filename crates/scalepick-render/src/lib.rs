//! ScalePick Render Library
//!
//! Renderer abstraction for picker draw commands.
//! The default implementation uses Vello for GPU-accelerated rendering;
//! [`CommandRecorder`] keeps commands around for tests and headless runs.

mod recorder;
mod renderer;

#[cfg(feature = "vello-renderer")]
mod vello_impl;

pub use recorder::CommandRecorder;
pub use renderer::{RenderContext, RenderResult, Renderer, RendererError};

#[cfg(feature = "vello-renderer")]
pub use vello_impl::VelloRenderer;
