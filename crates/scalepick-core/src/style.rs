//! Picker colors.

use peniko::Color;

use crate::error::{PickerError, PickerResult};

/// Default tick, label and indicator color (`#0094CC`).
pub const DEFAULT_COLOR: Color = Color::from_rgba8(0x00, 0x94, 0xCC, 0xFF);

/// Default hex form of [`DEFAULT_COLOR`], as used in configs.
pub const DEFAULT_COLOR_HEX: &str = "#0094CC";

/// Colors used when drawing a picker.
#[derive(Debug, Clone, Copy)]
pub struct PickerStyle {
    /// Ticks and labels.
    pub color: Color,
    /// Indicator triangle.
    pub indicator_color: Color,
    /// Dial background band.
    pub background_color: Color,
}

impl Default for PickerStyle {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR,
            indicator_color: DEFAULT_COLOR,
            background_color: Color::WHITE,
        }
    }
}

/// Parse `#RRGGBB` or `#AARRGGBB`.
pub fn parse_hex_color(s: &str) -> PickerResult<Color> {
    let invalid = || PickerError::InvalidColor(s.to_string());
    let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
    if !hex.is_ascii() {
        return Err(invalid());
    }
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
    match hex.len() {
        6 => Ok(Color::from_rgba8(byte(0)?, byte(2)?, byte(4)?, 0xFF)),
        8 => Ok(Color::from_rgba8(byte(2)?, byte(4)?, byte(6)?, byte(0)?)),
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rgb() {
        let color = parse_hex_color("#0094CC").unwrap().to_rgba8();
        assert_eq!((color.r, color.g, color.b, color.a), (0x00, 0x94, 0xCC, 0xFF));
    }

    #[test]
    fn test_parse_argb() {
        let color = parse_hex_color("#80FF0000").unwrap().to_rgba8();
        assert_eq!((color.r, color.g, color.b, color.a), (0xFF, 0x00, 0x00, 0x80));
    }

    #[test]
    fn test_default_color_matches_hex() {
        let parsed = parse_hex_color(DEFAULT_COLOR_HEX).unwrap().to_rgba8();
        let constant = DEFAULT_COLOR.to_rgba8();
        assert_eq!(
            (parsed.r, parsed.g, parsed.b, parsed.a),
            (constant.r, constant.g, constant.b, constant.a)
        );
    }

    #[test]
    fn test_parse_invalid() {
        for bad in ["0094CC", "#0094C", "#GG0000", "#é0000", ""] {
            assert!(
                matches!(parse_hex_color(bad), Err(PickerError::InvalidColor(_))),
                "{bad} should be rejected"
            );
        }
    }
}
