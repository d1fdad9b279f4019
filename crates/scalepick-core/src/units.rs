//! Density-independent unit conversion.

use serde::{Deserialize, Serialize};

/// Density at which one abstract unit equals one device pixel.
pub const REFERENCE_DPI: u32 = 160;

/// Pixel density reported by the host display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Density {
    /// Dots per inch of the target surface.
    pub dpi: u32,
}

impl Default for Density {
    fn default() -> Self {
        Self { dpi: REFERENCE_DPI }
    }
}

impl Density {
    /// Create a density from a dpi value.
    pub fn new(dpi: u32) -> Self {
        Self { dpi }
    }

    /// Build a density from a host scale factor (1.0 = reference density).
    pub fn from_scale_factor(scale_factor: f32) -> Self {
        let dpi = (scale_factor.max(0.0) * REFERENCE_DPI as f32).round() as u32;
        Self { dpi }
    }

    /// Convert abstract units to whole device pixels.
    ///
    /// Integer arithmetic, truncating toward zero: `units * dpi / 160`.
    pub fn dp(&self, units: i32) -> i32 {
        let px = i64::from(units) * i64::from(self.dpi) / i64::from(REFERENCE_DPI);
        px.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
    }

    /// Same as [`Density::dp`], as a float for geometry.
    pub fn px(&self, units: i32) -> f64 {
        f64::from(self.dp(units))
    }
}
