//! Mouse cursor kinds a popup menu can request.

use serde::{Deserialize, Serialize};

use crate::states::{StateProperty, WidgetStates};

/// A platform-independent mouse cursor.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MouseCursor {
    /// Let the widget beneath decide.
    Defer,
    /// The platform's default arrow.
    #[default]
    Basic,
    /// A pointing hand, for clickable items.
    Click,
    /// A text caret.
    Text,
    /// The action is not allowed.
    Forbidden,
    /// Something can be grabbed.
    Grab,
    /// Something is being grabbed.
    Grabbing,
    /// Do not touch the cursor at all.
    Uncontrolled,
}

impl MouseCursor {
    /// Cursor rules for popup menu items: basic when disabled, click otherwise.
    pub fn popup_item() -> StateProperty<MouseCursor> {
        StateProperty::new(MouseCursor::Click).when(WidgetStates::DISABLED, MouseCursor::Basic)
    }
}
