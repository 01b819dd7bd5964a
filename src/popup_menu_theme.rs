//! # Popup Menu Theme Data
//!
//! [PopupMenuThemeData] bundles the visual defaults of popup menus: surface
//! color, shape, elevation, item text style, whether selecting an item gives
//! acoustic/haptic feedback, and which mouse cursor items show per state.
//!
//! Every field is optional. An absent field means "use whatever the caller
//! falls back to", usually the [PopupMenuDefaults] of the app theme.
//!
//! ## Usage Examples
//!
//! ```rust
//! use nptk_popup_theme::popup_menu_theme::PopupMenuThemeData;
//! use nptk_popup_theme::shape::ShapeBorder;
//! use vello::peniko::Color;
//!
//! let base = PopupMenuThemeData::new()
//!     .with_color(Color::from_rgb8(250, 250, 250))
//!     .with_elevation(8.0);
//!
//! // Only the shape changes, everything else is kept.
//! let rounded = base.copy_with(&PopupMenuThemeData::new().with_shape(ShapeBorder::rounded(12.0)));
//! assert_eq!(rounded.elevation(), Some(8.0));
//!
//! // Halfway between the two.
//! let mid = PopupMenuThemeData::lerp(Some(&base), Some(&rounded), 0.5).unwrap();
//! assert_eq!(mid.color(), base.color());
//! ```

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use vello::peniko::Color;

use crate::color::{color_bits, lerp_optional_color, lerp_optional_f32};
use crate::cursor::MouseCursor;
use crate::defaults::{PopupMenuDefaults, ResolvedPopupMenuStyle};
use crate::shape::ShapeBorder;
use crate::states::StateProperty;
use crate::text_style::TextStyle;

/// Visual defaults for popup menus.
///
/// Values are immutable: the `with_*` builders and [copy_with](Self::copy_with)
/// return new instances.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PopupMenuThemeData {
    #[serde(with = "crate::serde_color::option", skip_serializing_if = "Option::is_none")]
    color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    shape: Option<ShapeBorder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    elevation: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text_style: Option<TextStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    enable_feedback: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    mouse_cursor: Option<StateProperty<MouseCursor>>,
}

impl PopupMenuThemeData {
    /// Create theme data with every field absent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Background color of the menu surface.
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    /// Outline of the menu surface.
    pub fn shape(&self) -> Option<&ShapeBorder> {
        self.shape.as_ref()
    }

    /// Z-depth of the menu, which drives the shadow size.
    pub fn elevation(&self) -> Option<f32> {
        self.elevation
    }

    /// Text style of menu items.
    pub fn text_style(&self) -> Option<&TextStyle> {
        self.text_style.as_ref()
    }

    /// Whether selecting an item gives acoustic and/or haptic feedback.
    pub fn enable_feedback(&self) -> Option<bool> {
        self.enable_feedback
    }

    /// Cursor shown over menu items, by interaction state.
    pub fn mouse_cursor(&self) -> Option<&StateProperty<MouseCursor>> {
        self.mouse_cursor.as_ref()
    }

    /// Return a copy with the surface color set.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Return a copy with the shape set.
    pub fn with_shape(mut self, shape: ShapeBorder) -> Self {
        self.shape = Some(shape);
        self
    }

    /// Return a copy with the elevation set.
    pub fn with_elevation(mut self, elevation: f32) -> Self {
        self.elevation = Some(elevation);
        self
    }

    /// Return a copy with the item text style set.
    pub fn with_text_style(mut self, text_style: TextStyle) -> Self {
        self.text_style = Some(text_style);
        self
    }

    /// Return a copy with the feedback flag set.
    pub fn with_enable_feedback(mut self, enable_feedback: bool) -> Self {
        self.enable_feedback = Some(enable_feedback);
        self
    }

    /// Return a copy with the cursor rules set.
    pub fn with_mouse_cursor(mut self, mouse_cursor: StateProperty<MouseCursor>) -> Self {
        self.mouse_cursor = Some(mouse_cursor);
        self
    }

    /// Whether every field is absent.
    pub fn is_empty(&self) -> bool {
        self.color.is_none()
            && self.shape.is_none()
            && self.elevation.is_none()
            && self.text_style.is_none()
            && self.enable_feedback.is_none()
            && self.mouse_cursor.is_none()
    }

    /// Create a copy where every field present in `overrides` replaces ours.
    ///
    /// Fields absent from `overrides` are kept unchanged.
    pub fn copy_with(&self, overrides: &PopupMenuThemeData) -> Self {
        Self {
            color: overrides.color.or(self.color),
            shape: overrides.shape.or(self.shape),
            elevation: overrides.elevation.or(self.elevation),
            text_style: overrides
                .text_style
                .clone()
                .or_else(|| self.text_style.clone()),
            enable_feedback: overrides.enable_feedback.or(self.enable_feedback),
            mouse_cursor: overrides
                .mouse_cursor
                .clone()
                .or_else(|| self.mouse_cursor.clone()),
        }
    }

    /// Linearly interpolate between two popup menu themes.
    ///
    /// `t` is clamped to `0.0..=1.0`. Color, shape, elevation and text style
    /// blend; the feedback flag and cursor rules come from `a` while
    /// `t < 0.5` and from `b` afterwards. Two absent themes give `None`.
    /// `t <= 0.0` returns `a` and `t >= 1.0` returns `b` unchanged.
    pub fn lerp(a: Option<&Self>, b: Option<&Self>, t: f32) -> Option<Self> {
        if a == b || t <= 0.0 {
            return a.cloned();
        }
        if t >= 1.0 {
            return b.cloned();
        }

        let discrete = if t < 0.5 { a } else { b };

        Some(Self {
            color: lerp_optional_color(a.and_then(|a| a.color), b.and_then(|b| b.color), t),
            shape: ShapeBorder::lerp(
                a.and_then(|a| a.shape.as_ref()),
                b.and_then(|b| b.shape.as_ref()),
                t,
            ),
            elevation: lerp_optional_f32(
                a.and_then(|a| a.elevation),
                b.and_then(|b| b.elevation),
                t,
            ),
            text_style: TextStyle::lerp(
                a.and_then(|a| a.text_style.as_ref()),
                b.and_then(|b| b.text_style.as_ref()),
                t,
            ),
            enable_feedback: discrete.and_then(|theme| theme.enable_feedback),
            mouse_cursor: discrete.and_then(|theme| theme.mouse_cursor.clone()),
        })
    }

    /// Fill every absent field from `defaults`.
    ///
    /// The item text style is layered on top of the default text style.
    pub fn resolve(&self, defaults: &PopupMenuDefaults) -> ResolvedPopupMenuStyle {
        let text_style = match &self.text_style {
            Some(style) => defaults.text_style.merge(style),
            None => defaults.text_style.clone(),
        };

        ResolvedPopupMenuStyle {
            color: self.color.unwrap_or(defaults.color),
            shape: self.shape.unwrap_or(defaults.shape),
            elevation: self.elevation.unwrap_or(defaults.elevation),
            text_style,
            enable_feedback: self.enable_feedback.unwrap_or(defaults.enable_feedback),
            mouse_cursor: self
                .mouse_cursor
                .clone()
                .unwrap_or_else(|| defaults.mouse_cursor.clone()),
        }
    }

    #[allow(clippy::type_complexity)]
    fn bits(
        &self,
    ) -> (
        Option<[u32; 4]>,
        Option<&ShapeBorder>,
        Option<u32>,
        Option<&TextStyle>,
        Option<bool>,
        Option<&StateProperty<MouseCursor>>,
    ) {
        (
            self.color.as_ref().map(color_bits),
            self.shape.as_ref(),
            self.elevation.map(f32::to_bits),
            self.text_style.as_ref(),
            self.enable_feedback,
            self.mouse_cursor.as_ref(),
        )
    }
}

impl PartialEq for PopupMenuThemeData {
    fn eq(&self, other: &Self) -> bool {
        self.bits() == other.bits()
    }
}

impl Eq for PopupMenuThemeData {}

impl Hash for PopupMenuThemeData {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::states::WidgetStates;
    use std::collections::hash_map::DefaultHasher;
    use std::collections::HashSet;

    fn hash_of(data: &PopupMenuThemeData) -> u64 {
        let mut hasher = DefaultHasher::new();
        data.hash(&mut hasher);
        hasher.finish()
    }

    fn full() -> PopupMenuThemeData {
        PopupMenuThemeData::new()
            .with_color(Color::from_rgb8(10, 20, 30))
            .with_shape(ShapeBorder::rounded(4.0))
            .with_elevation(8.0)
            .with_text_style(TextStyle::new().with_font_size(14.0))
            .with_enable_feedback(true)
            .with_mouse_cursor(MouseCursor::popup_item())
    }

    fn other() -> PopupMenuThemeData {
        PopupMenuThemeData::new()
            .with_color(Color::from_rgb8(200, 100, 0))
            .with_shape(ShapeBorder::rounded(12.0))
            .with_elevation(2.0)
            .with_text_style(TextStyle::new().with_font_size(20.0))
            .with_enable_feedback(false)
            .with_mouse_cursor(StateProperty::all(MouseCursor::Basic))
    }

    #[test]
    fn test_new_is_empty() {
        assert!(PopupMenuThemeData::new().is_empty());
        assert!(!full().is_empty());
    }

    #[test]
    fn test_copy_with_keeps_unspecified_fields() {
        let base = full();
        let copy = base.copy_with(&PopupMenuThemeData::new());
        assert_eq!(copy, base);
    }

    #[test]
    fn test_copy_with_replaces_specified_fields() {
        let base = full();
        let overrides = PopupMenuThemeData::new()
            .with_elevation(16.0)
            .with_enable_feedback(false);

        let copy = base.copy_with(&overrides);
        assert_eq!(copy.elevation(), Some(16.0));
        assert_eq!(copy.enable_feedback(), Some(false));
        assert_eq!(copy.color(), base.color());
        assert_eq!(copy.shape(), base.shape());
        assert_eq!(copy.text_style(), base.text_style());
        assert_eq!(copy.mouse_cursor(), base.mouse_cursor());
    }

    #[test]
    fn test_lerp_endpoints() {
        let a = full();
        let b = other();

        assert_eq!(PopupMenuThemeData::lerp(Some(&a), Some(&b), 0.0), Some(a.clone()));
        assert_eq!(PopupMenuThemeData::lerp(Some(&a), Some(&b), 1.0), Some(b.clone()));
    }

    #[test]
    fn test_lerp_endpoints_with_fields_on_one_side() {
        let a = PopupMenuThemeData::new()
            .with_text_style(TextStyle::new().with_font_size(10.0));
        let b = PopupMenuThemeData::new()
            .with_color(Color::from_rgb8(255, 0, 0))
            .with_shape(ShapeBorder::rounded(6.0))
            .with_elevation(8.0)
            .with_text_style(
                TextStyle::new()
                    .with_font_size(20.0)
                    .with_color(Color::from_rgb8(0, 0, 255))
                    .with_font_weight(crate::text_style::FontWeight::BOLD)
                    .with_font_family("Inter")
                    .with_letter_spacing(0.25)
                    .with_height(1.5),
            );

        assert_eq!(PopupMenuThemeData::lerp(Some(&a), Some(&b), 0.0), Some(a.clone()));
        assert_eq!(PopupMenuThemeData::lerp(Some(&a), Some(&b), 1.0), Some(b.clone()));
        assert_eq!(PopupMenuThemeData::lerp(Some(&b), Some(&a), 0.0), Some(b.clone()));
        assert_eq!(PopupMenuThemeData::lerp(Some(&b), Some(&a), 1.0), Some(a.clone()));

        assert_eq!(PopupMenuThemeData::lerp(None, Some(&b), 0.0), None);
        assert_eq!(PopupMenuThemeData::lerp(None, Some(&b), 1.0), Some(b.clone()));
        assert_eq!(PopupMenuThemeData::lerp(Some(&a), None, 1.0), None);
    }

    #[test]
    fn test_lerp_one_sided_fields_in_between() {
        let a = PopupMenuThemeData::new();
        let b = PopupMenuThemeData::new()
            .with_color(Color::from_rgb8(255, 0, 0))
            .with_elevation(8.0)
            .with_shape(ShapeBorder::rounded(8.0));

        let quarter = PopupMenuThemeData::lerp(Some(&a), Some(&b), 0.25).unwrap();
        assert!((quarter.color().unwrap().components[3] - 0.25).abs() < 1e-6);
        assert_eq!(quarter.elevation(), Some(2.0));
        assert_eq!(quarter.shape(), Some(&ShapeBorder::rounded(2.0)));
    }

    #[test]
    fn test_lerp_midpoint() {
        let a = full();
        let b = other();

        let mid = PopupMenuThemeData::lerp(Some(&a), Some(&b), 0.5).unwrap();
        assert_eq!(mid.elevation(), Some(5.0));
        assert_eq!(mid.shape(), Some(&ShapeBorder::rounded(8.0)));
        assert_eq!(mid.text_style().and_then(|s| s.font_size), Some(17.0));
    }

    #[test]
    fn test_lerp_discrete_fields_switch_at_midpoint() {
        let a = full();
        let b = other();

        let before = PopupMenuThemeData::lerp(Some(&a), Some(&b), 0.499).unwrap();
        assert_eq!(before.enable_feedback(), Some(true));
        assert_eq!(before.mouse_cursor(), a.mouse_cursor());

        let at = PopupMenuThemeData::lerp(Some(&a), Some(&b), 0.5).unwrap();
        assert_eq!(at.enable_feedback(), Some(false));
        assert_eq!(
            at.mouse_cursor().map(|c| *c.resolve(WidgetStates::HOVERED)),
            Some(MouseCursor::Basic)
        );
    }

    #[test]
    fn test_lerp_absent_everything() {
        let empty = PopupMenuThemeData::new();
        assert_eq!(PopupMenuThemeData::lerp(None, None, 0.5), None);

        let mid = PopupMenuThemeData::lerp(Some(&empty), Some(&empty), 0.5).unwrap();
        assert!(mid.is_empty());
    }

    #[test]
    fn test_lerp_from_absent_theme() {
        let b = full();

        let mid = PopupMenuThemeData::lerp(None, Some(&b), 0.5).unwrap();
        assert_eq!(mid.elevation(), Some(4.0));
        assert_eq!(mid.enable_feedback(), Some(true));
        assert!((mid.color().unwrap().components[3] - 0.5).abs() < 1e-6);

        let early = PopupMenuThemeData::lerp(None, Some(&b), 0.2).unwrap();
        assert_eq!(early.enable_feedback(), None);
        assert_eq!(early.mouse_cursor(), None);
    }

    #[test]
    fn test_equality_and_hash_are_field_wise() {
        let a = full();
        let b = full();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));

        let c = a.copy_with(&PopupMenuThemeData::new().with_elevation(9.0));
        assert_ne!(a, c);

        let set: HashSet<_> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_resolve_fills_absent_fields() {
        let defaults = PopupMenuDefaults::light();
        let theme = PopupMenuThemeData::new()
            .with_elevation(3.0)
            .with_text_style(TextStyle::new().with_font_size(12.0));

        let resolved = theme.resolve(&defaults);
        assert_eq!(resolved.elevation, 3.0);
        assert_eq!(resolved.color, defaults.color);
        assert_eq!(resolved.shape, defaults.shape);
        assert_eq!(resolved.enable_feedback, defaults.enable_feedback);
        assert_eq!(resolved.text_style.font_size, Some(12.0));
        assert_eq!(resolved.text_style.color, defaults.text_style.color);
    }

    #[test]
    fn test_serde_json_round_trip_skips_absent_fields() {
        let data = PopupMenuThemeData::new()
            .with_color(Color::from_rgb8(0x20, 0x20, 0x20))
            .with_elevation(8.0);

        let json = serde_json::to_string(&data).unwrap();
        assert_eq!(json, r##"{"color":"#202020","elevation":8.0}"##);

        let back: PopupMenuThemeData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, data);
    }
}
