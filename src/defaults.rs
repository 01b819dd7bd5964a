//! Built-in fallback values for popup menus and the fully resolved style.

use vello::peniko::Color;

use crate::app_theme::Brightness;
use crate::cursor::MouseCursor;
use crate::shape::ShapeBorder;
use crate::states::{StateProperty, WidgetStates};
use crate::text_style::{FontWeight, TextStyle};

/// Concrete values used where a [PopupMenuThemeData](crate::popup_menu_theme::PopupMenuThemeData)
/// leaves a field absent.
#[derive(Debug, Clone, PartialEq)]
pub struct PopupMenuDefaults {
    /// Surface color.
    pub color: Color,
    /// Surface outline.
    pub shape: ShapeBorder,
    /// Surface elevation.
    pub elevation: f32,
    /// Item text style.
    pub text_style: TextStyle,
    /// Whether selecting an item gives feedback.
    pub enable_feedback: bool,
    /// Item cursor rules.
    pub mouse_cursor: StateProperty<MouseCursor>,
}

impl PopupMenuDefaults {
    /// Defaults for a light appearance.
    pub fn light() -> Self {
        Self {
            color: Color::from_rgb8(255, 255, 255),
            shape: ShapeBorder::rounded(4.0),
            elevation: 8.0,
            text_style: TextStyle::new()
                .with_color(Color::from_rgba8(0, 0, 0, 222))
                .with_font_size(16.0)
                .with_font_weight(FontWeight::NORMAL),
            enable_feedback: true,
            mouse_cursor: MouseCursor::popup_item(),
        }
    }

    /// Defaults tuned for a dark appearance.
    pub fn dark() -> Self {
        Self {
            color: Color::from_rgb8(66, 66, 66),
            text_style: TextStyle::new()
                .with_color(Color::from_rgb8(255, 255, 255))
                .with_font_size(16.0)
                .with_font_weight(FontWeight::NORMAL),
            ..Self::light()
        }
    }

    /// Pick the defaults matching `brightness`.
    pub fn for_brightness(brightness: Brightness) -> Self {
        match brightness {
            Brightness::Light => Self::light(),
            Brightness::Dark => Self::dark(),
        }
    }
}

/// A popup menu style with every value filled in.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPopupMenuStyle {
    /// Surface color.
    pub color: Color,
    /// Surface outline.
    pub shape: ShapeBorder,
    /// Surface elevation.
    pub elevation: f32,
    /// Item text style.
    pub text_style: TextStyle,
    /// Whether selecting an item gives feedback.
    pub enable_feedback: bool,
    /// Item cursor rules.
    pub mouse_cursor: StateProperty<MouseCursor>,
}

impl ResolvedPopupMenuStyle {
    /// The cursor to show over an item in `states`.
    pub fn cursor_for(&self, states: WidgetStates) -> MouseCursor {
        *self.mouse_cursor.resolve(states)
    }
}
