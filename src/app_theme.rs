//! The application-wide theme popup menu lookups fall back to.

use serde::{Deserialize, Serialize};

use crate::defaults::PopupMenuDefaults;
use crate::popup_menu_theme::PopupMenuThemeData;

/// Overall light or dark appearance.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Brightness {
    /// Dark content on light surfaces.
    #[default]
    Light,
    /// Light content on dark surfaces.
    Dark,
}

impl Brightness {
    /// Parse `light` or `dark`, case-insensitively.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

/// Application-wide theme.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct AppTheme {
    brightness: Brightness,
    popup_menu: PopupMenuThemeData,
}

impl AppTheme {
    /// Create an app theme with the given brightness and no popup menu overrides.
    pub fn new(brightness: Brightness) -> Self {
        Self {
            brightness,
            popup_menu: PopupMenuThemeData::new(),
        }
    }

    /// Set the app-wide popup menu theme.
    pub fn with_popup_menu_theme(mut self, popup_menu: PopupMenuThemeData) -> Self {
        self.popup_menu = popup_menu;
        self
    }

    /// Light or dark.
    pub fn brightness(&self) -> Brightness {
        self.brightness
    }

    /// The app-wide popup menu theme.
    pub fn popup_menu_theme(&self) -> &PopupMenuThemeData {
        &self.popup_menu
    }

    /// Fallback values matching this theme's brightness.
    pub fn popup_menu_defaults(&self) -> PopupMenuDefaults {
        PopupMenuDefaults::for_brightness(self.brightness)
    }
}
