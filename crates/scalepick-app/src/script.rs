//! Scripted pointer input for headless replays.

use kurbo::Point;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;

/// Default widget width used when a script does not name one.
pub const DEFAULT_WIDTH: f64 = 360.0;

/// Which picker a step drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    Ruler,
    Dial,
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Target::Ruler => write!(f, "ruler"),
            Target::Dial => write!(f, "dial"),
        }
    }
}

/// A raw pointer action, in widget-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PointerAction {
    Down { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Up,
    Cancel,
}

impl PointerAction {
    pub fn position(&self) -> Option<Point> {
        match *self {
            PointerAction::Down { x, y } | PointerAction::Move { x, y } => Some(Point::new(x, y)),
            PointerAction::Up | PointerAction::Cancel => None,
        }
    }
}

/// One scripted step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub target: Target,
    pub action: PointerAction,
}

impl Step {
    pub fn new(target: Target, action: PointerAction) -> Self {
        Self { target, action }
    }
}

/// A sequence of pointer steps replayed against both pickers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplayScript {
    /// Width of both widgets, in pixels.
    pub width: f64,
    pub steps: Vec<Step>,
}

impl Default for ReplayScript {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            steps: Vec::new(),
        }
    }
}

impl ReplayScript {
    /// Parse a JSON script.
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a JSON script from disk.
    pub fn load(path: impl AsRef<std::path::Path>) -> AppResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Drag the ruler down by five units in two moves, then the dial down by two.
    pub fn demo() -> Self {
        use PointerAction::*;
        let steps = vec![
            Step::new(Target::Ruler, Down { x: 180.0, y: 50.0 }),
            Step::new(Target::Ruler, Move { x: 200.0, y: 50.0 }),
            Step::new(Target::Ruler, Move { x: 230.0, y: 50.0 }),
            Step::new(Target::Ruler, Up),
            Step::new(Target::Dial, Down { x: 180.0, y: 10.0 }),
            Step::new(Target::Dial, Move { x: 188.0, y: 10.0 }),
            Step::new(Target::Dial, Up),
        ];
        Self {
            width: DEFAULT_WIDTH,
            steps,
        }
    }
}
