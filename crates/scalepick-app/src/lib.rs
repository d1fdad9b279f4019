//! ScalePick demo application.
//!
//! Builds a ruler and a dial from a JSON config, replays scripted pointer
//! input against them and logs every value the listeners receive.

pub mod app;
pub mod error;
pub mod script;

pub use app::{App, ReplayReport, ValueChange, load_config};
pub use error::{AppError, AppResult};
pub use script::{PointerAction, ReplayScript, Step, Target};
