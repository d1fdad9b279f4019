//! Picker configuration, loadable from JSON.
//!
//! Every field is optional in the document; missing fields take the
//! built-in defaults of each picker.

use serde::{Deserialize, Serialize};

use crate::dial;
use crate::error::PickerResult;
use crate::ruler;
use crate::style::{DEFAULT_COLOR_HEX, PickerStyle, parse_hex_color};
use crate::units::Density;
use crate::value::{ValueModel, ValueRange};

/// Configuration of a ruler picker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulerConfig {
    pub min: i32,
    pub max: i32,
    /// Initial value.
    pub value: i32,
    /// Tick and label color, `#RRGGBB` or `#AARRGGBB`.
    pub color: String,
    pub indicator_color: String,
}

impl Default for RulerConfig {
    fn default() -> Self {
        Self {
            min: ruler::DEFAULT_MIN,
            max: ruler::DEFAULT_MAX,
            value: ruler::DEFAULT_VALUE,
            color: DEFAULT_COLOR_HEX.to_string(),
            indicator_color: DEFAULT_COLOR_HEX.to_string(),
        }
    }
}

impl RulerConfig {
    pub fn model(&self) -> PickerResult<ValueModel> {
        build_model(self.min, self.max, self.value)
    }

    pub fn style(&self) -> PickerResult<PickerStyle> {
        build_style(&self.color, &self.indicator_color)
    }
}

/// Configuration of a dial picker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialConfig {
    pub min: i32,
    pub max: i32,
    /// Initial value.
    pub value: i32,
    /// Tick and label color, `#RRGGBB` or `#AARRGGBB`.
    pub color: String,
    pub indicator_color: String,
}

impl Default for DialConfig {
    fn default() -> Self {
        Self {
            min: dial::DEFAULT_MIN,
            max: dial::DEFAULT_MAX,
            value: dial::DEFAULT_VALUE,
            color: DEFAULT_COLOR_HEX.to_string(),
            indicator_color: DEFAULT_COLOR_HEX.to_string(),
        }
    }
}

impl DialConfig {
    pub fn model(&self) -> PickerResult<ValueModel> {
        build_model(self.min, self.max, self.value)
    }

    pub fn style(&self) -> PickerResult<PickerStyle> {
        build_style(&self.color, &self.indicator_color)
    }
}

/// Top-level configuration document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    pub density: Density,
    pub ruler: RulerConfig,
    pub dial: DialConfig,
}

impl PickerConfig {
    /// Parse a JSON document.
    pub fn from_json(json: &str) -> PickerResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> PickerResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn build_model(min: i32, max: i32, value: i32) -> PickerResult<ValueModel> {
    ValueModel::new(ValueRange::new(min, max)?, value)
}

fn build_style(color: &str, indicator_color: &str) -> PickerResult<PickerStyle> {
    Ok(PickerStyle {
        color: parse_hex_color(color)?,
        indicator_color: parse_hex_color(indicator_color)?,
        ..PickerStyle::default()
    })
}
