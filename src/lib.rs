#![warn(missing_docs)]

//! # NPTK Popup Menu Theme
//!
//! Popup menu theming for the NPTK GUI toolkit: an immutable theme data type
//! and the inherited scopes that carry it down the widget tree.
//!
//! ## Overview
//!
//! - **[PopupMenuThemeData]**: Optional color, shape, elevation, text style,
//!   feedback flag and per-state mouse cursor for popup menus
//! - **[PopupMenuTheme]**: Declares popup menu theme data for a subtree
//! - **[ThemeContext]**: The chain of inherited themes visible to a widget
//! - **[PopupMenuDefaults]**: Concrete fallbacks for absent fields
//! - **[PopupMenuThemeConfig]**: Theme configuration from files and environment variables
//!
//! ## Quick Start
//!
//! ```rust
//! use nptk_popup_theme::{AppTheme, PopupMenuTheme, PopupMenuThemeData, ThemeContext};
//! use nptk_popup_theme::states::WidgetStates;
//! use nptk_popup_theme::cursor::MouseCursor;
//!
//! let root = ThemeContext::new(AppTheme::default());
//! let scoped = PopupMenuTheme::new(PopupMenuThemeData::new().with_elevation(2.0)).wrap(&root);
//!
//! // What a popup menu below `scoped` would paint with.
//! let theme = PopupMenuTheme::of(&scoped);
//! let style = theme.resolve(&scoped.app_theme().popup_menu_defaults());
//!
//! assert_eq!(style.elevation, 2.0);
//! assert_eq!(style.cursor_for(WidgetStates::DISABLED), MouseCursor::Basic);
//! ```
//!
//! ## Interpolation
//!
//! [PopupMenuThemeData::lerp] blends two themes. Colors, shapes, elevation and
//! text styles interpolate; the feedback flag and cursor rules switch at the
//! midpoint. [transition::PopupMenuThemeTransition] drives it over time.

/// Contains the [app_theme::AppTheme] struct.
pub mod app_theme;
/// Contains color interpolation and parsing helpers.
pub mod color;
/// Contains the [config::PopupMenuThemeConfig] struct for theme configuration.
pub mod config;
/// Contains the [context::ThemeContext] inherited theme chain.
pub mod context;
/// Contains the [cursor::MouseCursor] enum.
pub mod cursor;
/// Contains built-in popup menu defaults.
pub mod defaults;
/// Contains the [error::PopupThemeError] type.
pub mod error;
/// Contains the [popup_menu_scope::PopupMenuTheme] scope.
pub mod popup_menu_scope;
/// Contains the [popup_menu_theme::PopupMenuThemeData] struct.
pub mod popup_menu_theme;
/// Contains serde helpers for colors.
pub mod serde_color;
/// Contains popup menu shapes.
pub mod shape;
/// Contains interaction states and state-dependent values.
pub mod states;
/// Contains partial text styles.
pub mod text_style;
/// Contains animated theme transitions.
pub mod transition;

pub use app_theme::{AppTheme, Brightness};
pub use config::PopupMenuThemeConfig;
pub use context::{CapturedThemes, InheritedTheme, ThemeContext};
pub use defaults::{PopupMenuDefaults, ResolvedPopupMenuStyle};
pub use error::{PopupThemeError, PopupThemeResult};
pub use popup_menu_scope::PopupMenuTheme;
pub use popup_menu_theme::PopupMenuThemeData;
