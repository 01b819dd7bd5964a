//! Declares a [PopupMenuThemeData] for a subtree.

use std::any::Any;

use crate::context::{InheritedTheme, ThemeContext};
use crate::popup_menu_theme::PopupMenuThemeData;

/// Applies a popup menu theme to descendant popup menus.
///
/// # Examples
///
/// ```rust
/// use nptk_popup_theme::app_theme::{AppTheme, Brightness};
/// use nptk_popup_theme::context::ThemeContext;
/// use nptk_popup_theme::popup_menu_scope::PopupMenuTheme;
/// use nptk_popup_theme::popup_menu_theme::PopupMenuThemeData;
///
/// let app = AppTheme::new(Brightness::Dark)
///     .with_popup_menu_theme(PopupMenuThemeData::new().with_elevation(4.0));
/// let root = ThemeContext::new(app);
///
/// // Nothing declared yet: the app-wide theme is used.
/// assert_eq!(PopupMenuTheme::of(&root).elevation(), Some(4.0));
///
/// let scoped = PopupMenuTheme::new(PopupMenuThemeData::new().with_elevation(12.0)).wrap(&root);
/// assert_eq!(PopupMenuTheme::of(&scoped).elevation(), Some(12.0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PopupMenuTheme {
    data: PopupMenuThemeData,
}

impl PopupMenuTheme {
    /// Create a scope declaring `data`.
    pub fn new(data: PopupMenuThemeData) -> Self {
        Self { data }
    }

    /// The declared theme data.
    pub fn data(&self) -> &PopupMenuThemeData {
        &self.data
    }

    /// The closest declared popup menu theme, else the app-wide one.
    pub fn of(context: &ThemeContext) -> PopupMenuThemeData {
        match Self::maybe_of(context) {
            Some(data) => data.clone(),
            None => {
                log::debug!("No PopupMenuTheme in scope, using the app theme");
                context.app_theme().popup_menu_theme().clone()
            },
        }
    }

    /// The closest declared popup menu theme, if any.
    pub fn maybe_of(context: &ThemeContext) -> Option<&PopupMenuThemeData> {
        context.nearest::<PopupMenuTheme>().map(PopupMenuTheme::data)
    }

    /// Whether dependents must rebuild after `old` was replaced by `self`.
    pub fn update_should_notify(&self, old: &PopupMenuTheme) -> bool {
        self.data != old.data
    }

    /// Derive a child of `context` where this theme is in effect.
    pub fn wrap(&self, context: &ThemeContext) -> ThemeContext {
        context.provide(self.clone())
    }
}

impl InheritedTheme for PopupMenuTheme {
    fn as_any(&self) -> &dyn Any {
        self
    }
}
