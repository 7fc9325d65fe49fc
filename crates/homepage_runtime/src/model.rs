use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{guestbook::Guestbook, preferences::Preferences};

/// Id of the static landing window. It is never draggable.
pub const HOME_WINDOW_ID: &str = "homeWindow";

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WindowId(pub String);

impl WindowId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_home(&self) -> bool {
        self.0 == HOME_WINDOW_ID
    }

    /// DOM id of the drag handle (title bar) for this window.
    pub fn drag_handle_dom_id(&self) -> String {
        format!("{}-drag", self.0)
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WindowId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WindowPosition {
    pub top: i32,
    pub left: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowState {
    #[default]
    Normal,
    Minimized,
    Maximized,
}

impl WindowState {
    /// Minimized windows are hidden; every other state is shown.
    pub fn is_hidden(self) -> bool {
        matches!(self, Self::Minimized)
    }

    /// Marker class rendered on the window element, if any.
    pub fn css_class(self) -> Option<&'static str> {
        match self {
            Self::Normal => None,
            Self::Minimized => Some("minimized"),
            Self::Maximized => Some("maximized"),
        }
    }
}

/// Which part of a window starts a drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragBinding {
    /// Not draggable.
    Static,
    /// The whole window surface is the handle.
    WholeSurface,
    /// Only the `<windowId>-drag` title bar is the handle.
    Handle,
}

/// Body rendered inside a window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WindowContent {
    /// Icons that open the other windows.
    Launcher,
    /// Static paragraphs.
    Text { paragraphs: Vec<String> },
    /// The guestbook panel.
    Guestbook,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub id: WindowId,
    pub title: String,
    pub position: WindowPosition,
    /// Stacking value; `None` until declared or first raised, and read as 0.
    pub z_index: Option<i32>,
    pub state: WindowState,
    pub drag: DragBinding,
    pub content: WindowContent,
}

impl WindowRecord {
    pub fn new(id: impl Into<String>) -> Self {
        let id = WindowId::new(id);
        Self {
            title: id.0.clone(),
            drag: if id.is_home() {
                DragBinding::Static
            } else {
                DragBinding::Handle
            },
            id,
            position: WindowPosition::default(),
            z_index: None,
            state: WindowState::Normal,
            content: WindowContent::Text {
                paragraphs: Vec::new(),
            },
        }
    }

    pub fn is_maximized(&self) -> bool {
        self.state == WindowState::Maximized
    }

    pub fn is_draggable(&self) -> bool {
        !self.id.is_home() && self.drag != DragBinding::Static
    }
}

/// One-shot "raise on next interaction" guard armed by opening a window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaiseGuard {
    pub window_id: WindowId,
    pub fired: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub window_id: WindowId,
    pub last_pointer: PointerPosition,
}

/// Pointer interaction state. Holds the single document-wide drag slot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub dragging: Option<DragSession>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HomepageState {
    pub windows: Vec<WindowRecord>,
    pub raise_guards: Vec<RaiseGuard>,
    pub preferences: Preferences,
    pub guestbook: Guestbook,
}

impl HomepageState {
    pub fn new(windows: Vec<WindowRecord>) -> Self {
        Self {
            windows,
            ..Self::default()
        }
    }

    pub fn window(&self, window_id: &WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| &w.id == window_id)
    }

    pub fn window_mut(&mut self, window_id: &WindowId) -> Option<&mut WindowRecord> {
        self.windows.iter_mut().find(|w| &w.id == window_id)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn home_window_defaults_to_static_binding() {
        let home = WindowRecord::new(HOME_WINDOW_ID);
        let about = WindowRecord::new("aboutWindow");

        assert!(!home.is_draggable());
        assert!(about.is_draggable());
        assert_eq!(about.id.drag_handle_dom_id(), "aboutWindow-drag");
    }

    #[test]
    fn home_window_is_never_draggable_even_when_declared_with_handle() {
        let mut home = WindowRecord::new(HOME_WINDOW_ID);
        home.drag = DragBinding::WholeSurface;
        assert!(!home.is_draggable());
    }

    #[test]
    fn state_classes_derive_from_enum() {
        assert_eq!(WindowState::Normal.css_class(), None);
        assert_eq!(WindowState::Minimized.css_class(), Some("minimized"));
        assert_eq!(WindowState::Maximized.css_class(), Some("maximized"));
        assert!(WindowState::Minimized.is_hidden());
        assert!(!WindowState::Maximized.is_hidden());
    }
}
