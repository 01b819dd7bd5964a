//! # Popup Menu Theme Configuration
//!
//! Loads popup menu theme overrides from TOML or JSON files and environment
//! variables, and turns them into an [AppTheme].
//!
//! ## Environment Variables
//!
//! - `NPTK_POPUP_MENU_THEME`: Path to a `.toml` or `.json` configuration file
//! - `NPTK_THEME`: `light` or `dark`, overrides the file's brightness
//!
//! ## Configuration File Format
//!
//! ```toml
//! brightness = "dark"
//!
//! [popup_menu]
//! color = "#202020"
//! elevation = 8.0
//! enable_feedback = true
//!
//! [popup_menu.shape]
//! kind = "rounded_rectangle"
//! radius = 4.0
//!
//! [popup_menu.text_style]
//! font_size = 14.0
//! font_family = "Inter"
//!
//! [transition]
//! enabled = true
//! duration_ms = 200
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use nptk_popup_theme::config::PopupMenuThemeConfig;
//!
//! let config = PopupMenuThemeConfig::from_toml(r#"
//! brightness = "dark"
//!
//! [popup_menu]
//! elevation = 3.0
//! "#).unwrap();
//!
//! let app_theme = config.app_theme();
//! assert_eq!(app_theme.popup_menu_theme().elevation(), Some(3.0));
//! ```

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::app_theme::{AppTheme, Brightness};
use crate::error::{PopupThemeError, PopupThemeResult};
use crate::popup_menu_theme::PopupMenuThemeData;
use crate::transition::TransitionConfig;

/// Environment variable holding the configuration file path.
pub const CONFIG_PATH_VAR: &str = "NPTK_POPUP_MENU_THEME";
/// Environment variable selecting light or dark appearance.
pub const BRIGHTNESS_VAR: &str = "NPTK_THEME";

const INLINE_SOURCE: &str = "<inline>";

/// Popup menu theme configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopupMenuThemeConfig {
    /// Light or dark appearance. Absent means light.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brightness: Option<Brightness>,
    /// App-wide popup menu overrides.
    pub popup_menu: PopupMenuThemeData,
    /// Animation used when the popup menu theme changes.
    pub transition: TransitionConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|s| s.to_str()) {
            Some("toml") => Some(Self::Toml),
            Some("json") => Some(Self::Json),
            _ => None,
        }
    }
}

impl PopupMenuThemeConfig {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the brightness.
    pub fn with_brightness(mut self, brightness: Brightness) -> Self {
        self.brightness = Some(brightness);
        self
    }

    /// Set the app-wide popup menu theme.
    pub fn with_popup_menu_theme(mut self, popup_menu: PopupMenuThemeData) -> Self {
        self.popup_menu = popup_menu;
        self
    }

    /// Set the theme change animation.
    pub fn with_transition(mut self, transition: TransitionConfig) -> Self {
        self.transition = transition;
        self
    }

    /// Create a configuration from environment variables or use defaults.
    ///
    /// A configuration file that fails to load is logged and ignored.
    pub fn from_env_or_default() -> Self {
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Like [from_env_or_default](Self::from_env_or_default) with a custom variable lookup.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = match lookup(CONFIG_PATH_VAR) {
            Some(path) => Self::from_file(&path).unwrap_or_else(|err| {
                log::warn!("Ignoring popup menu theme config {}: {}", path, err);
                Self::new()
            }),
            None => Self::new(),
        };

        if let Some(value) = lookup(BRIGHTNESS_VAR) {
            match Brightness::parse(&value) {
                Some(brightness) => config.brightness = Some(brightness),
                None => log::warn!("Unknown {} value '{}', keeping current brightness", BRIGHTNESS_VAR, value),
            }
        }

        config
    }

    /// Load a configuration file. The format is picked from the extension.
    pub fn from_file<P: AsRef<Path>>(path: P) -> PopupThemeResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(PopupThemeError::file_not_found(path));
        }
        let format =
            ConfigFormat::from_path(path).ok_or_else(|| PopupThemeError::unsupported_format(path))?;

        let content = fs::read_to_string(path)?;
        let config = Self::parse(&content, format, path)?;
        log::debug!("Loaded popup menu theme config from {:?}", path);
        Ok(config)
    }

    /// Parse TOML content.
    pub fn from_toml(content: &str) -> PopupThemeResult<Self> {
        Self::parse(content, ConfigFormat::Toml, Path::new(INLINE_SOURCE))
    }

    /// Parse JSON content.
    pub fn from_json(content: &str) -> PopupThemeResult<Self> {
        Self::parse(content, ConfigFormat::Json, Path::new(INLINE_SOURCE))
    }

    fn parse(content: &str, format: ConfigFormat, path: &Path) -> PopupThemeResult<Self> {
        let path: PathBuf = path.to_path_buf();
        match format {
            ConfigFormat::Toml => {
                toml::from_str(content).map_err(|e| PopupThemeError::parse_error(path, e))
            },
            ConfigFormat::Json => {
                serde_json::from_str(content).map_err(|e| PopupThemeError::parse_error(path, e))
            },
        }
    }

    /// Serialize to TOML.
    pub fn to_toml(&self) -> PopupThemeResult<String> {
        toml::to_string(self).map_err(|e| PopupThemeError::Serialization(e.to_string()))
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> PopupThemeResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| PopupThemeError::Serialization(e.to_string()))
    }

    /// Build the application-wide theme.
    pub fn app_theme(&self) -> AppTheme {
        AppTheme::new(self.brightness.unwrap_or_default())
            .with_popup_menu_theme(self.popup_menu.clone())
    }
}

/// Convenience function to build the app theme from environment variables.
pub fn app_theme_from_env() -> AppTheme {
    PopupMenuThemeConfig::from_env_or_default().app_theme()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::MouseCursor;
    use crate::shape::{BorderSide, ShapeBorder};
    use crate::states::{StateProperty, WidgetStates};
    use crate::text_style::{FontWeight, TextStyle};
    use std::time::Duration;
    use vello::peniko::Color;

    #[test]
    fn test_from_toml() {
        let config = PopupMenuThemeConfig::from_toml(
            r##"
brightness = "dark"

[popup_menu]
color = "#202020"
elevation = 8.0
enable_feedback = false

[popup_menu.shape]
kind = "rounded_rectangle"
radius = 6.0
"##,
        )
        .unwrap();

        assert_eq!(config.brightness, Some(Brightness::Dark));
        let popup = &config.popup_menu;
        assert_eq!(popup.color(), Some(Color::from_rgb8(0x20, 0x20, 0x20)));
        assert_eq!(popup.elevation(), Some(8.0));
        assert_eq!(popup.enable_feedback(), Some(false));
        assert_eq!(popup.shape(), Some(&ShapeBorder::rounded(6.0)));
        assert_eq!(popup.text_style(), None);
    }

    #[test]
    fn test_toml_round_trip_with_every_field() {
        let popup_menu = PopupMenuThemeData::new()
            .with_color(Color::from_rgb8(0x20, 0x20, 0x20))
            .with_shape(ShapeBorder::RoundedRectangle {
                radius: 6.0,
                side: BorderSide::solid(Color::from_rgba8(255, 255, 255, 64), 1.0),
            })
            .with_elevation(8.0)
            .with_text_style(
                TextStyle::new()
                    .with_color(Color::from_rgb8(230, 230, 230))
                    .with_font_size(14.0)
                    .with_font_weight(FontWeight::MEDIUM)
                    .with_font_family("Inter")
                    .with_letter_spacing(0.25)
                    .with_height(1.5),
            )
            .with_enable_feedback(false)
            .with_mouse_cursor(
                StateProperty::new(MouseCursor::Click)
                    .when(WidgetStates::DISABLED, MouseCursor::Forbidden),
            );
        let config = PopupMenuThemeConfig::new()
            .with_brightness(Brightness::Dark)
            .with_popup_menu_theme(popup_menu)
            .with_transition(TransitionConfig::enabled_for(Duration::from_millis(200)));

        let toml = config.to_toml().unwrap();
        assert_eq!(PopupMenuThemeConfig::from_toml(&toml).unwrap(), config);
    }

    #[test]
    fn test_transition_table() {
        let config =
            PopupMenuThemeConfig::from_toml("[transition]\nenabled = true\nduration_ms = 120\n")
                .unwrap();
        assert!(config.transition.enabled);
        assert_eq!(config.transition.duration(), Duration::from_millis(120));
        assert!(config.popup_menu.is_empty());
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = PopupMenuThemeConfig::from_toml("").unwrap();
        assert_eq!(config, PopupMenuThemeConfig::new());
        assert!(config.app_theme().popup_menu_theme().is_empty());
        assert_eq!(config.app_theme().brightness(), Brightness::Light);
    }

    #[test]
    fn test_invalid_color_is_parse_error() {
        let err = PopupMenuThemeConfig::from_toml("[popup_menu]\ncolor = \"#12\"\n").unwrap_err();
        assert!(matches!(err, PopupThemeError::ParseError { .. }));
    }

    #[test]
    fn test_from_json() {
        let config =
            PopupMenuThemeConfig::from_json(r#"{"popup_menu": {"elevation": 2.5}}"#).unwrap();
        assert_eq!(config.popup_menu.elevation(), Some(2.5));
        assert_eq!(config.brightness, None);
    }

    #[test]
    fn test_from_vars_brightness_only() {
        let config = PopupMenuThemeConfig::from_vars(|name| match name {
            BRIGHTNESS_VAR => Some("Dark".to_string()),
            _ => None,
        });
        assert_eq!(config.brightness, Some(Brightness::Dark));
    }

    #[test]
    fn test_from_vars_missing_file_falls_back() {
        let config = PopupMenuThemeConfig::from_vars(|name| match name {
            CONFIG_PATH_VAR => Some("/nonexistent/popup.toml".to_string()),
            BRIGHTNESS_VAR => Some("sepia".to_string()),
            _ => None,
        });
        assert_eq!(config, PopupMenuThemeConfig::new());
    }

    #[test]
    fn test_from_file_errors() {
        assert!(matches!(
            PopupMenuThemeConfig::from_file("/nonexistent/popup.toml"),
            Err(PopupThemeError::FileNotFound { .. })
        ));
    }
}
