//! # Inherited Theme Context
//!
//! A [ThemeContext] is the chain of theme scopes from a widget up to the
//! application root. Declaring a theme for a subtree produces a child context
//! with [ThemeContext::provide]; descendants find the closest declaration with
//! [ThemeContext::nearest].
//!
//! Contexts are immutable and share their ancestors, so cloning one or
//! deriving a child is cheap.
//!
//! ## Overlays
//!
//! Popup menus are usually placed in an overlay at the root of the widget
//! tree, away from the widget that opened them. [ThemeContext::capture]
//! records the inherited themes in effect at the opener and
//! [CapturedThemes::wrap] re-applies them inside the overlay:
//!
//! ```rust
//! use nptk_popup_theme::app_theme::AppTheme;
//! use nptk_popup_theme::context::ThemeContext;
//! use nptk_popup_theme::popup_menu_scope::PopupMenuTheme;
//! use nptk_popup_theme::popup_menu_theme::PopupMenuThemeData;
//!
//! let root = ThemeContext::new(AppTheme::default());
//! let opener = root.provide(PopupMenuTheme::new(PopupMenuThemeData::new().with_elevation(2.0)));
//!
//! let captured = opener.capture(Some(&root)).unwrap();
//! let overlay = captured.wrap(&root);
//!
//! assert_eq!(PopupMenuTheme::of(&overlay).elevation(), Some(2.0));
//! ```

use std::any::{Any, TypeId};
use std::fmt::Debug;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::app_theme::AppTheme;
use crate::error::{PopupThemeError, PopupThemeResult};

/// A theme that can be declared for a subtree and read by descendants.
pub trait InheritedTheme: Any + Debug + Send + Sync {
    /// Get a reference to this theme as Any for downcasting.
    fn as_any(&self) -> &dyn Any;
}

#[derive(Debug)]
struct ScopeNode {
    theme: Arc<dyn InheritedTheme>,
    parent: Option<Arc<ScopeNode>>,
    depth: usize,
}

/// The chain of inherited themes visible at one point of the widget tree.
#[derive(Debug, Clone)]
pub struct ThemeContext {
    app_theme: Arc<AppTheme>,
    node: Option<Arc<ScopeNode>>,
}

impl ThemeContext {
    /// Create a root context for the given app-wide theme.
    pub fn new(app_theme: AppTheme) -> Self {
        Self {
            app_theme: Arc::new(app_theme),
            node: None,
        }
    }

    /// The app-wide theme at the root of this context.
    pub fn app_theme(&self) -> &AppTheme {
        &self.app_theme
    }

    /// Number of scopes between this context and the root.
    pub fn depth(&self) -> usize {
        self.node.as_ref().map_or(0, |node| node.depth)
    }

    /// Derive a child context where `theme` is the closest declaration of its type.
    pub fn provide<T: InheritedTheme>(&self, theme: T) -> Self {
        self.provide_shared(Arc::new(theme))
    }

    /// Like [provide](Self::provide), for a theme that is already shared.
    pub fn provide_shared(&self, theme: Arc<dyn InheritedTheme>) -> Self {
        Self {
            app_theme: self.app_theme.clone(),
            node: Some(Arc::new(ScopeNode {
                theme,
                parent: self.node.clone(),
                depth: self.depth() + 1,
            })),
        }
    }

    /// The closest declaration of `T`, if any.
    pub fn nearest<T: InheritedTheme>(&self) -> Option<&T> {
        self.scopes()
            .find_map(|node| node.theme.as_any().downcast_ref::<T>())
    }

    /// Whether `ancestor` is this context or one of its ancestors.
    pub fn is_descendant_of(&self, ancestor: &ThemeContext) -> bool {
        match &ancestor.node {
            None => Arc::ptr_eq(&self.app_theme, &ancestor.app_theme),
            Some(target) => self.scopes().any(|node| std::ptr::eq(node, target.as_ref())),
        }
    }

    /// Record the closest declaration of every inherited theme type between
    /// this context and `to` (exclusive).
    ///
    /// With `to == None` the whole chain is captured. Fails if `to` is not an
    /// ancestor of this context.
    pub fn capture(&self, to: Option<&ThemeContext>) -> PopupThemeResult<CapturedThemes> {
        let boundary = match to {
            Some(to) if !self.is_descendant_of(to) => {
                return Err(PopupThemeError::NotAnAncestor {
                    depth: self.depth(),
                    boundary_depth: to.depth(),
                });
            },
            Some(to) => to.node.as_deref(),
            None => None,
        };

        let mut themes: IndexMap<TypeId, Arc<dyn InheritedTheme>> = IndexMap::new();
        for node in self.scopes() {
            if boundary.is_some_and(|boundary| std::ptr::eq(node, boundary)) {
                break;
            }
            themes
                .entry(node.theme.as_any().type_id())
                .or_insert_with(|| node.theme.clone());
        }

        log::debug!(
            "Captured {} inherited theme(s) from depth {}",
            themes.len(),
            self.depth()
        );
        Ok(CapturedThemes { themes })
    }

    fn scopes(&self) -> impl Iterator<Item = &ScopeNode> {
        std::iter::successors(self.node.as_deref(), |node| node.parent.as_deref())
    }
}

/// Inherited themes recorded by [ThemeContext::capture].
#[derive(Debug, Clone, Default)]
pub struct CapturedThemes {
    // Nearest declaration first.
    themes: IndexMap<TypeId, Arc<dyn InheritedTheme>>,
}

impl CapturedThemes {
    /// Re-declare the captured themes below `context`.
    ///
    /// The captured themes take precedence over declarations already in
    /// `context`.
    pub fn wrap(&self, context: &ThemeContext) -> ThemeContext {
        self.themes
            .values()
            .rev()
            .fold(context.clone(), |ctx, theme| ctx.provide_shared(theme.clone()))
    }

    /// The captured declaration of `T`, if any.
    pub fn get<T: InheritedTheme>(&self) -> Option<&T> {
        self.themes
            .get(&TypeId::of::<T>())
            .and_then(|theme| theme.as_any().downcast_ref::<T>())
    }

    /// Number of captured theme types.
    pub fn len(&self) -> usize {
        self.themes.len()
    }

    /// Whether nothing was captured.
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}
