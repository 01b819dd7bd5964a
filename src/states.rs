//! # Interaction States
//!
//! [WidgetStates] describes which interactive states a popup menu item is in,
//! and [StateProperty] maps such a state set to a value (for example which
//! mouse cursor to show while hovering a disabled item).

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Interactive states a widget can be in at the same time.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct WidgetStates: u16 {
        /// The pointer is over the widget.
        const HOVERED = 1 << 0;
        /// The widget has keyboard focus.
        const FOCUSED = 1 << 1;
        /// The widget is being pressed.
        const PRESSED = 1 << 2;
        /// The widget is being dragged.
        const DRAGGED = 1 << 3;
        /// The widget is selected.
        const SELECTED = 1 << 4;
        /// Content is scrolled beneath the widget.
        const SCROLLED_UNDER = 1 << 5;
        /// The widget does not accept input.
        const DISABLED = 1 << 6;
        /// The widget is in an error state.
        const ERROR = 1 << 7;
    }
}

/// A value that depends on the current [WidgetStates].
///
/// Rules are checked in insertion order. The first rule whose states are all
/// present in the queried set wins; otherwise the fallback is used.
///
/// # Examples
///
/// ```rust
/// use nptk_popup_theme::states::{StateProperty, WidgetStates};
///
/// let opacity = StateProperty::new(1.0_f32).when(WidgetStates::DISABLED, 0.38);
///
/// assert_eq!(*opacity.resolve(WidgetStates::HOVERED), 1.0);
/// assert_eq!(*opacity.resolve(WidgetStates::HOVERED | WidgetStates::DISABLED), 0.38);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StateProperty<T> {
    #[serde(default = "Vec::new")]
    rules: Vec<(WidgetStates, T)>,
    fallback: T,
}

impl<T> StateProperty<T> {
    /// Create a property that resolves to `fallback` until rules are added.
    pub fn new(fallback: T) -> Self {
        Self {
            rules: Vec::new(),
            fallback,
        }
    }

    /// Create a property that resolves to `value` in every state.
    pub fn all(value: T) -> Self {
        Self::new(value)
    }

    /// Add a rule. Earlier rules take precedence over later ones.
    pub fn when(mut self, states: WidgetStates, value: T) -> Self {
        self.rules.push((states, value));
        self
    }

    /// Resolve the value for the given state set.
    pub fn resolve(&self, states: WidgetStates) -> &T {
        self.rules
            .iter()
            .find(|(required, _)| states.contains(*required))
            .map(|(_, value)| value)
            .unwrap_or(&self.fallback)
    }

    /// The value used when no rule matches.
    pub fn fallback(&self) -> &T {
        &self.fallback
    }

    /// The rules in precedence order.
    pub fn rules(&self) -> &[(WidgetStates, T)] {
        &self.rules
    }
}
