//! # Popup Shapes
//!
//! Outline descriptors for popup menu surfaces. A [ShapeBorder] does not draw
//! anything itself; the menu renderer turns it into a path.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use vello::peniko::Color;

use crate::color::{color_bits, lerp_color, lerp_f32, scale_alpha};

/// Whether a border is painted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BorderStyle {
    /// The border is skipped.
    #[default]
    None,
    /// A single solid stroke.
    Solid,
}

/// The stroke around a shape.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BorderSide {
    /// Stroke color.
    #[serde(with = "crate::serde_color")]
    pub color: Color,
    /// Stroke width in logical pixels.
    pub width: f32,
    /// Whether the stroke is painted.
    #[serde(default)]
    pub style: BorderStyle,
}

impl BorderSide {
    /// A side that paints nothing.
    pub const NONE: BorderSide = BorderSide {
        color: Color::new([0.0, 0.0, 0.0, 1.0]),
        width: 0.0,
        style: BorderStyle::None,
    };

    /// A solid side of the given color and width.
    pub fn solid(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            style: BorderStyle::Solid,
        }
    }

    /// Scale the width by `t`. A non-positive factor turns the side off.
    pub fn scale(&self, t: f32) -> Self {
        Self {
            color: self.color,
            width: (self.width * t).max(0.0),
            style: if t <= 0.0 { BorderStyle::None } else { self.style },
        }
    }

    /// Interpolate two sides.
    ///
    /// When the styles differ the result is solid, and the side that is off
    /// contributes a transparent color.
    pub fn lerp(a: &BorderSide, b: &BorderSide, t: f32) -> BorderSide {
        let t = t.clamp(0.0, 1.0);
        if t == 0.0 {
            return *a;
        }
        if t == 1.0 {
            return *b;
        }

        let width = lerp_f32(a.width, b.width, t);
        if a.style == b.style {
            return BorderSide {
                color: lerp_color(a.color, b.color, t),
                width,
                style: a.style,
            };
        }

        let visible = |side: &BorderSide| match side.style {
            BorderStyle::Solid => side.color,
            BorderStyle::None => scale_alpha(side.color, 0.0),
        };
        BorderSide {
            color: lerp_color(visible(a), visible(b), t),
            width,
            style: BorderStyle::Solid,
        }
    }

    fn bits(&self) -> ([u32; 4], u32, BorderStyle) {
        (color_bits(&self.color), self.width.to_bits(), self.style)
    }
}

impl Default for BorderSide {
    fn default() -> Self {
        Self::NONE
    }
}

impl PartialEq for BorderSide {
    fn eq(&self, other: &Self) -> bool {
        self.bits() == other.bits()
    }
}

impl Eq for BorderSide {}

impl Hash for BorderSide {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits().hash(state);
    }
}

/// The outline of a popup menu surface.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShapeBorder {
    /// A rectangle with circular corners of `radius`.
    RoundedRectangle {
        /// Corner radius in logical pixels.
        #[serde(default)]
        radius: f32,
        /// Outline stroke.
        #[serde(default)]
        side: BorderSide,
    },
    /// A rectangle whose short edges are fully rounded.
    Stadium {
        /// Outline stroke.
        #[serde(default)]
        side: BorderSide,
    },
    /// The largest circle that fits the bounds.
    Circle {
        /// Outline stroke.
        #[serde(default)]
        side: BorderSide,
    },
}

impl ShapeBorder {
    /// A rounded rectangle without an outline.
    pub fn rounded(radius: f32) -> Self {
        Self::RoundedRectangle {
            radius,
            side: BorderSide::NONE,
        }
    }

    /// The outline stroke of this shape.
    pub fn side(&self) -> BorderSide {
        match self {
            Self::RoundedRectangle { side, .. } | Self::Stadium { side } | Self::Circle { side } => {
                *side
            },
        }
    }

    /// Scale every dimension of the shape by `t`.
    pub fn scale(&self, t: f32) -> Self {
        match self {
            Self::RoundedRectangle { radius, side } => Self::RoundedRectangle {
                radius: (radius * t).max(0.0),
                side: side.scale(t),
            },
            Self::Stadium { side } => Self::Stadium { side: side.scale(t) },
            Self::Circle { side } => Self::Circle { side: side.scale(t) },
        }
    }

    /// Interpolate two optional shapes.
    ///
    /// - both absent: absent
    /// - one absent: the present shape is scaled in (or out)
    /// - same kind: radius and outline blend
    /// - different kinds: switch at `t >= 0.5`
    ///
    /// `t <= 0.0` returns `a` and `t >= 1.0` returns `b` unchanged.
    pub fn lerp(a: Option<&ShapeBorder>, b: Option<&ShapeBorder>, t: f32) -> Option<ShapeBorder> {
        if t <= 0.0 {
            return a.copied();
        }
        if t >= 1.0 {
            return b.copied();
        }

        match (a, b) {
            (None, None) => None,
            (None, Some(b)) => Some(b.scale(t)),
            (Some(a), None) => Some(a.scale(1.0 - t)),
            (Some(a), Some(b)) => Some(Self::lerp_shapes(a, b, t)),
        }
    }

    fn lerp_shapes(a: &ShapeBorder, b: &ShapeBorder, t: f32) -> ShapeBorder {
        match (a, b) {
            (
                Self::RoundedRectangle { radius: ra, side: sa },
                Self::RoundedRectangle { radius: rb, side: sb },
            ) => Self::RoundedRectangle {
                radius: lerp_f32(*ra, *rb, t),
                side: BorderSide::lerp(sa, sb, t),
            },
            (Self::Stadium { side: sa }, Self::Stadium { side: sb }) => Self::Stadium {
                side: BorderSide::lerp(sa, sb, t),
            },
            (Self::Circle { side: sa }, Self::Circle { side: sb }) => Self::Circle {
                side: BorderSide::lerp(sa, sb, t),
            },
            _ => {
                if t < 0.5 {
                    *a
                } else {
                    *b
                }
            },
        }
    }

    fn bits(&self) -> (u8, u32, BorderSide) {
        match self {
            Self::RoundedRectangle { radius, side } => (0, radius.to_bits(), *side),
            Self::Stadium { side } => (1, 0, *side),
            Self::Circle { side } => (2, 0, *side),
        }
    }
}

impl PartialEq for ShapeBorder {
    fn eq(&self, other: &Self) -> bool {
        self.bits() == other.bits()
    }
}

impl Eq for ShapeBorder {}

impl Hash for ShapeBorder {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits().hash(state);
    }
}
