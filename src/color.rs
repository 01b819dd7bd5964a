//! Color and scalar interpolation helpers shared by the theme types.

use vello::peniko::Color;

use crate::error::{PopupThemeError, PopupThemeResult};

/// Linear interpolation between two f32 values.
///
/// Exact at both endpoints: `t == 0.0` yields `start` and `t == 1.0` yields `end`.
pub fn lerp_f32(start: f32, end: f32, t: f32) -> f32 {
    start * (1.0 - t) + end * t
}

/// Interpolate two optional scalars.
///
/// An absent side counts as `0.0` as long as the other side is present.
pub fn lerp_optional_f32(start: Option<f32>, end: Option<f32>, t: f32) -> Option<f32> {
    match (start, end) {
        (None, None) => None,
        (start, end) => Some(lerp_f32(start.unwrap_or(0.0), end.unwrap_or(0.0), t)),
    }
}

/// Linear interpolation between two colors.
///
/// `t` is clamped to `0.0` (start) ..= `1.0` (end).
pub fn lerp_color(start: Color, end: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    let a = start.components;
    let b = end.components;

    Color::new([
        lerp_f32(a[0], b[0], t),
        lerp_f32(a[1], b[1], t),
        lerp_f32(a[2], b[2], t),
        lerp_f32(a[3], b[3], t),
    ])
}

/// Interpolate two optional colors.
///
/// When only one side is present it fades in (or out) by scaling its alpha.
pub fn lerp_optional_color(start: Option<Color>, end: Option<Color>, t: f32) -> Option<Color> {
    let t = t.clamp(0.0, 1.0);
    match (start, end) {
        (None, None) => None,
        (None, Some(end)) => Some(scale_alpha(end, t)),
        (Some(start), None) => Some(scale_alpha(start, 1.0 - t)),
        (Some(start), Some(end)) => Some(lerp_color(start, end, t)),
    }
}

/// Multiply the alpha channel of `color` by `factor`.
pub fn scale_alpha(color: Color, factor: f32) -> Color {
    let [r, g, b, a] = color.components;
    Color::new([r, g, b, (a * factor).clamp(0.0, 1.0)])
}

/// Bit pattern of a color, used for `Eq`/`Hash` on types holding colors.
pub(crate) fn color_bits(color: &Color) -> [u32; 4] {
    color.components.map(f32::to_bits)
}

fn channel_to_u8(value: f32) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Format a color as `#rrggbb`, or `#rrggbbaa` when it is not opaque.
pub fn to_hex(color: Color) -> String {
    let [r, g, b, a] = color.components.map(channel_to_u8);
    if a == 255 {
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    } else {
        format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
    }
}

/// Parse a hex color string with optional alpha channel.
///
/// Supports both RGB and RGBA formats:
/// - `#rrggbb` - 6 characters, opaque (alpha = 255)
/// - `#rrggbbaa` - 8 characters, with alpha channel
pub fn parse_hex_color(hex: &str) -> PopupThemeResult<Color> {
    let digits = hex.trim().trim_start_matches('#');
    let channel = |range: std::ops::Range<usize>| {
        digits
            .get(range)
            .and_then(|s| u8::from_str_radix(s, 16).ok())
            .ok_or_else(|| PopupThemeError::InvalidColor(hex.to_string()))
    };

    match digits.len() {
        6 => Ok(Color::from_rgb8(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
        8 => Ok(Color::from_rgba8(
            channel(0..2)?,
            channel(2..4)?,
            channel(4..6)?,
            channel(6..8)?,
        )),
        _ => Err(PopupThemeError::InvalidColor(format!(
            "Hex color must be 6 or 8 characters: {}",
            hex
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_color_midpoint() {
        let start = Color::from_rgb8(0, 0, 0);
        let end = Color::from_rgb8(255, 255, 255);

        let mid = lerp_color(start, end, 0.5);
        for channel in &mid.components[..3] {
            assert!((channel - 0.5).abs() < 1e-6);
        }
        assert_eq!(mid.components[3], 1.0);
    }

    #[test]
    fn test_lerp_color_clamps_t() {
        let start = Color::from_rgb8(10, 20, 30);
        let end = Color::from_rgb8(200, 100, 50);

        assert_eq!(lerp_color(start, end, -1.0), start);
        assert_eq!(lerp_color(start, end, 2.0), end);
    }

    #[test]
    fn test_optional_color_fades() {
        let end = Color::from_rgb8(255, 0, 0);

        assert_eq!(lerp_optional_color(None, None, 0.3), None);

        let faded = lerp_optional_color(None, Some(end), 0.25).unwrap();
        assert_eq!(faded.components[0], 1.0);
        assert!((faded.components[3] - 0.25).abs() < 1e-6);

        let faded = lerp_optional_color(Some(end), None, 0.25).unwrap();
        assert!((faded.components[3] - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_optional_f32() {
        assert_eq!(lerp_optional_f32(None, None, 0.5), None);
        assert_eq!(lerp_optional_f32(None, Some(8.0), 0.5), Some(4.0));
        assert_eq!(lerp_optional_f32(Some(2.0), Some(6.0), 0.0), Some(2.0));
        assert_eq!(lerp_optional_f32(Some(2.0), Some(6.0), 1.0), Some(6.0));
    }

    #[test]
    fn test_hex_round_trip_and_errors() {
        let color = parse_hex_color("#1e90ff").unwrap();
        assert_eq!(to_hex(color), "#1e90ff");

        let translucent = parse_hex_color("#00000080").unwrap();
        assert_eq!(to_hex(translucent), "#00000080");

        assert!(matches!(
            parse_hex_color("#12345"),
            Err(PopupThemeError::InvalidColor(_))
        ));
        assert!(matches!(
            parse_hex_color("#zzzzzz"),
            Err(PopupThemeError::InvalidColor(_))
        ));
    }
}
