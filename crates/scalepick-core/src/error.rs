//! Error types for picker construction and configuration.

use thiserror::Error;

/// Picker errors.
#[derive(Debug, Error)]
pub enum PickerError {
    #[error("Invalid range: min {min} is greater than max {max}")]
    InvalidRange { min: i32, max: i32 },
    #[error("Value {value} is outside range [{min}, {max}]")]
    ValueOutOfRange { value: i32, min: i32, max: i32 },
    #[error("Invalid color: {0}")]
    InvalidColor(String),
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for picker operations.
pub type PickerResult<T> = Result<T, PickerError>;
