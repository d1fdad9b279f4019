//! Error types for the demo application.

use scalepick_core::PickerError;
use scalepick_render::RendererError;
use thiserror::Error;

/// Errors that stop a replay.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Picker error: {0}")]
    Picker(#[from] PickerError),
    #[error("Render error: {0}")]
    Render(#[from] RendererError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid script: {0}")]
    Script(#[from] serde_json::Error),
}

/// Result type for demo operations.
pub type AppResult<T> = Result<T, AppError>;
