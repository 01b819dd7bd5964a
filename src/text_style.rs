//! # Text Styles
//!
//! Partial text styling for popup menu items. Every field is optional so a
//! style can be layered on top of the surrounding text style with
//! [TextStyle::merge].

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use vello::peniko::Color;

use crate::color::{color_bits, lerp_f32, lerp_optional_color};

/// Font weight on the CSS `100..=900` scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FontWeight(pub u16);

impl FontWeight {
    /// Thin.
    pub const THIN: FontWeight = FontWeight(100);
    /// Extra light.
    pub const EXTRA_LIGHT: FontWeight = FontWeight(200);
    /// Light.
    pub const LIGHT: FontWeight = FontWeight(300);
    /// Normal / regular.
    pub const NORMAL: FontWeight = FontWeight(400);
    /// Medium.
    pub const MEDIUM: FontWeight = FontWeight(500);
    /// Semi bold.
    pub const SEMI_BOLD: FontWeight = FontWeight(600);
    /// Bold.
    pub const BOLD: FontWeight = FontWeight(700);
    /// Extra bold.
    pub const EXTRA_BOLD: FontWeight = FontWeight(800);
    /// Black.
    pub const BLACK: FontWeight = FontWeight(900);

    /// Interpolate two weights, snapping to the nearest hundred.
    pub fn lerp(a: FontWeight, b: FontWeight, t: f32) -> FontWeight {
        let value = lerp_f32(a.0 as f32, b.0 as f32, t.clamp(0.0, 1.0));
        let snapped = ((value / 100.0).round() * 100.0).clamp(100.0, 900.0);
        FontWeight(snapped as u16)
    }
}

/// A partial text style.
///
/// `inherit` tells the consumer whether absent fields fall back to the
/// enclosing text style (`true`) or to the renderer's built-in defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TextStyle {
    /// Whether absent fields inherit from the enclosing style.
    pub inherit: bool,
    /// Text color.
    #[serde(with = "crate::serde_color::option", skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Font size in logical pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    /// Font weight.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
    /// Font family name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    /// Extra spacing between letters in logical pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<f32>,
    /// Line height as a multiple of the font size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            inherit: true,
            color: None,
            font_size: None,
            font_weight: None,
            font_family: None,
            letter_spacing: None,
            height: None,
        }
    }
}

impl TextStyle {
    /// Create an empty, inheriting text style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Set the font size.
    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }

    /// Set the font weight.
    pub fn with_font_weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = Some(weight);
        self
    }

    /// Set the font family.
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    /// Set the letter spacing.
    pub fn with_letter_spacing(mut self, spacing: f32) -> Self {
        self.letter_spacing = Some(spacing);
        self
    }

    /// Set the line height.
    pub fn with_height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    /// Layer `other` on top of this style.
    ///
    /// Fields present in `other` win. If `other` does not inherit, it replaces
    /// this style entirely.
    pub fn merge(&self, other: &TextStyle) -> TextStyle {
        if !other.inherit {
            return other.clone();
        }

        TextStyle {
            inherit: self.inherit,
            color: other.color.or(self.color),
            font_size: other.font_size.or(self.font_size),
            font_weight: other.font_weight.or(self.font_weight),
            font_family: other.font_family.clone().or_else(|| self.font_family.clone()),
            letter_spacing: other.letter_spacing.or(self.letter_spacing),
            height: other.height.or(self.height),
        }
    }

    /// Interpolate two optional text styles.
    ///
    /// With both present, numeric fields and the color blend while `inherit`
    /// and the font family switch at the midpoint. A color present on only one
    /// side fades; any other field present on only one side switches at the
    /// midpoint. With one style absent, its color fades and every other field
    /// snaps to the present style at the midpoint.
    ///
    /// `t <= 0.0` returns `a` and `t >= 1.0` returns `b` unchanged.
    pub fn lerp(a: Option<&TextStyle>, b: Option<&TextStyle>, t: f32) -> Option<TextStyle> {
        if t <= 0.0 {
            return a.cloned();
        }
        if t >= 1.0 {
            return b.cloned();
        }

        match (a, b) {
            (None, None) => None,
            (None, Some(b)) => Some(Self::fade(b, t, t >= 0.5)),
            (Some(a), None) => Some(Self::fade(a, 1.0 - t, t < 0.5)),
            (Some(a), Some(b)) => Some(Self::lerp_present(a, b, t)),
        }
    }

    fn fade(style: &TextStyle, opacity: f32, visible: bool) -> TextStyle {
        TextStyle {
            inherit: style.inherit,
            color: lerp_optional_color(None, style.color, opacity),
            font_size: style.font_size.filter(|_| visible),
            font_weight: style.font_weight.filter(|_| visible),
            font_family: style.font_family.clone().filter(|_| visible),
            letter_spacing: style.letter_spacing.filter(|_| visible),
            height: style.height.filter(|_| visible),
        }
    }

    fn lerp_present(a: &TextStyle, b: &TextStyle, t: f32) -> TextStyle {
        let early = t < 0.5;
        let blend = |x: Option<f32>, y: Option<f32>| match (x, y) {
            (Some(x), Some(y)) => Some(lerp_f32(x, y, t)),
            _ if early => x,
            _ => y,
        };

        TextStyle {
            inherit: if early { a.inherit } else { b.inherit },
            color: lerp_optional_color(a.color, b.color, t),
            font_size: blend(a.font_size, b.font_size),
            font_weight: match (a.font_weight, b.font_weight) {
                (Some(x), Some(y)) => Some(FontWeight::lerp(x, y, t)),
                (x, _) if early => x,
                (_, y) => y,
            },
            font_family: if early {
                a.font_family.clone()
            } else {
                b.font_family.clone()
            },
            letter_spacing: blend(a.letter_spacing, b.letter_spacing),
            height: blend(a.height, b.height),
        }
    }

    #[allow(clippy::type_complexity)]
    fn bits(
        &self,
    ) -> (
        bool,
        Option<[u32; 4]>,
        Option<u32>,
        Option<FontWeight>,
        Option<&str>,
        Option<u32>,
        Option<u32>,
    ) {
        (
            self.inherit,
            self.color.as_ref().map(color_bits),
            self.font_size.map(f32::to_bits),
            self.font_weight,
            self.font_family.as_deref(),
            self.letter_spacing.map(f32::to_bits),
            self.height.map(f32::to_bits),
        )
    }
}

impl PartialEq for TextStyle {
    fn eq(&self, other: &Self) -> bool {
        self.bits() == other.bits()
    }
}

impl Eq for TextStyle {}

impl Hash for TextStyle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits().hash(state);
    }
}
