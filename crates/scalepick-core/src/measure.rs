//! Host measurement protocol.

use serde::{Deserialize, Serialize};

/// Constraint the host places on one dimension of a picker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub enum MeasureSpec {
    /// The host dictates the size.
    Exactly(f64),
    /// The host offers up to this many pixels.
    AtMost(f64),
    /// No constraint.
    #[default]
    Unspecified,
}

impl MeasureSpec {
    /// Resolve against the picker's preferred size.
    ///
    /// Only `Exactly` is honored; `AtMost` reports the preferred size even
    /// when it is larger than the bound.
    pub fn resolve(self, preferred: f64) -> f64 {
        match self {
            MeasureSpec::Exactly(px) => px,
            MeasureSpec::AtMost(_) | MeasureSpec::Unspecified => preferred,
        }
    }
}
